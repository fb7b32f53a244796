//! Middleware registration and mountable router trees for Wren.
//!
//! A router is an ordered list of [`MiddlewareEntry`] values plus its place in
//! a tree of mounted sub-routers. This crate builds that structure; running
//! requests through it is left to a dispatcher.
//!
//! # Features
//!
//! - **Method registrars**: one method per HTTP token (`get`, `post`,
//!   `propfind`, `m-search` as `msearch`, ...) plus `all`
//! - **Middleware**: `use_` with an optional path and any number of handlers
//! - **Mounting**: sub-routers mounted at a path have their entries prefixed
//! - **Absolute paths**: `path()` resolves a router's full mount path
//!
//! # Example
//!
//! ```rust
//! use wren_router::{EntryKind, Method, RouterTree};
//!
//! let mut tree = RouterTree::new();
//! let app = tree.create();
//! let admin = tree.create();
//!
//! tree.router(admin)
//!     .unwrap()
//!     .use_handler("require_login")
//!     .unwrap()
//!     .get("/users", ["list_users"])
//!     .unwrap();
//!
//! tree.router(app)
//!     .unwrap()
//!     .use_handler("logger")
//!     .unwrap()
//!     .mount("/admin", admin)
//!     .unwrap();
//!
//! let entries = tree.entries(admin).unwrap();
//! assert_eq!(entries[0].path(), "/admin");
//! assert_eq!(entries[1].path(), "/admin/users");
//! assert_eq!(entries[1].method(), Some(Method::Get));
//! assert_eq!(entries[1].kind(), EntryKind::Route);
//! assert_eq!(tree.path(admin).unwrap(), "/admin");
//! ```
//!
//! # Architecture
//!
//! ```text
//!   registrar / use_ ──> CallShape ──> build_entries ──> RouterNode.entries
//!                            │
//!                            └─ router arg ──> RouterTree::mount
//!                                               (prefix child entries,
//!                                                set parent + apps)
//! ```

mod entry;
mod error;
pub mod handler;
mod method;
mod mount;
mod router;
mod settings;
mod tree;

pub use entry::{build_entries, build_entry, EntryKind, MiddlewareEntry, PathOrHandler, ROOT_PATH};
pub use error::{RouterError, RouterResult};
pub use handler::{Handler, HandlerError, Next};
pub use method::{Method, METHODS};
pub use mount::{CallShape, UseArg};
pub use router::Router;
pub use settings::RouterSettings;
pub use tree::{RouterId, RouterNode, RouterTree};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paths(tree: &RouterTree<&'static str>, id: RouterId) -> Vec<String> {
        tree.entries(id)
            .unwrap()
            .iter()
            .map(|e| e.path().to_string())
            .collect()
    }

    #[test]
    fn test_routes_preserve_order_and_kind() {
        let mut tree = RouterTree::new();
        let app = tree.create();
        tree.router(app)
            .unwrap()
            .get("/x", ["h1"])
            .unwrap()
            .post("/x", ["h2"])
            .unwrap();

        let entries = tree.entries(app).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].method(), Some(Method::Get));
        assert_eq!(entries[1].method(), Some(Method::Post));
        assert!(entries.iter().all(|e| e.kind() == EntryKind::Route));
    }

    #[test]
    fn test_all_one_entry_per_method() {
        let mut tree = RouterTree::new();
        let app = tree.create();
        tree.router(app).unwrap().all("/x", ["h"]).unwrap();
        assert_eq!(tree.entries(app).unwrap().len(), METHODS.len());
    }

    #[test]
    fn test_mount_rewrites_paths() {
        let mut tree = RouterTree::new();
        let app = tree.create();
        let sub = tree.create();
        tree.router(sub)
            .unwrap()
            .use_handler("m")
            .unwrap()
            .get("/users", ["u"])
            .unwrap();
        tree.router(app).unwrap().mount("/admin", sub).unwrap();

        assert_eq!(paths(&tree, sub), vec!["/admin", "/admin/users"]);
        assert_eq!(tree.path(sub).unwrap(), "/admin");
    }

    #[test]
    fn test_bare_mount_forces_root() {
        let mut tree: RouterTree<&str> = RouterTree::new();
        let app = tree.create();
        let first = tree.create();
        let sub = tree.create();

        tree.router(first).unwrap().mount("/old", sub).unwrap();
        tree.router(app).unwrap().mount_root(sub).unwrap();
        assert_eq!(tree.mountpath(sub).unwrap(), "/");
        assert_eq!(tree.parent(sub).unwrap(), Some(app));
    }

    #[test]
    fn test_use_variadic_order() {
        let mut tree = RouterTree::new();
        let app = tree.create();
        tree.router(app)
            .unwrap()
            .use_([UseArg::handler("mw1"), UseArg::handler("mw2"), UseArg::handler("mw3")])
            .unwrap();

        let entries = tree.entries(app).unwrap();
        let handlers: Vec<_> = entries.iter().map(|e| *e.handler()).collect();
        assert_eq!(handlers, vec!["mw1", "mw2", "mw3"]);
        assert!(entries.iter().all(|e| e.path() == "/" && e.method().is_none()));
    }

    #[test]
    fn test_use_path_variadic_order() {
        let mut tree = RouterTree::new();
        let app = tree.create();
        tree.router(app)
            .unwrap()
            .use_([UseArg::path("/p"), UseArg::handler("mw1"), UseArg::handler("mw2")])
            .unwrap();

        let entries = tree.entries(app).unwrap();
        let handlers: Vec<_> = entries.iter().map(|e| *e.handler()).collect();
        assert_eq!(handlers, vec!["mw1", "mw2"]);
        assert!(entries.iter().all(|e| e.path() == "/p"));
    }

    #[test]
    fn test_three_level_path() {
        let mut tree: RouterTree<&str> = RouterTree::new();
        let app = tree.create();
        let blog = tree.create();
        let admin = tree.create();

        tree.router(app).unwrap().mount("/blog", blog).unwrap();
        tree.router(blog).unwrap().mount("/admin", admin).unwrap();

        assert_eq!(tree.path(app).unwrap(), "");
        assert_eq!(tree.path(admin).unwrap(), "/blog/admin");
    }

    proptest! {
        #[test]
        fn prop_use_registers_every_handler_in_order(
            names in proptest::collection::vec("[a-z]{1,6}", 1..8),
            path in proptest::option::of("/[a-z]{1,6}"),
        ) {
            let mut tree: RouterTree<String> = RouterTree::new();
            let app = tree.create();

            let mut args: Vec<UseArg<String>> = Vec::new();
            if let Some(path) = &path {
                args.push(UseArg::path(path.clone()));
            }
            args.extend(names.iter().cloned().map(UseArg::Handler));
            tree.router(app).unwrap().use_(args).unwrap();

            let entries = tree.entries(app).unwrap();
            let expected_path = path.unwrap_or_else(|| ROOT_PATH.to_string());
            prop_assert_eq!(entries.len(), names.len());
            for (entry, name) in entries.iter().zip(&names) {
                prop_assert_eq!(entry.handler(), name);
                prop_assert_eq!(entry.path(), expected_path.as_str());
            }
        }
    }
}
