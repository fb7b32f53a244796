//! The router arena.
//!
//! Routers live in a [`RouterTree`] and refer to each other by [`RouterId`].
//! A parent owns its children through the `apps` map; a child points back at
//! its parent by id, so re-mounting a router only rewrites an id.
//!
//! ```text
//!   RouterTree
//!   ┌──────────────────────────────────────────┐
//!   │ #0 root      mountpath "/"   parent -    │
//!   │    apps: {"/blog" -> #1}                 │
//!   │ #1 blog      mountpath "/blog" parent #0 │
//!   │    apps: {"/admin" -> #2}                │
//!   │ #2 admin     mountpath "/admin" parent #1│
//!   └──────────────────────────────────────────┘
//!   path(#2) == "/blog/admin"
//! ```

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::entry::{MiddlewareEntry, ROOT_PATH};
use crate::error::{RouterError, RouterResult};
use crate::router::Router;
use crate::settings::RouterSettings;

/// Opaque handle to a router inside a [`RouterTree`].
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouterId(usize);

impl RouterId {
    /// The position of this router in its tree.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RouterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "router#{}", self.0)
    }
}

/// A single router: its entries and its place in the mount tree.
#[derive(Debug, Clone)]
pub struct RouterNode<H> {
    pub(crate) entries: Vec<MiddlewareEntry<H>>,
    pub(crate) mountpath: String,
    pub(crate) parent: Option<RouterId>,
    pub(crate) apps: IndexMap<String, RouterId>,
}

impl<H> RouterNode<H> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            mountpath: ROOT_PATH.to_string(),
            parent: None,
            apps: IndexMap::new(),
        }
    }

    /// Registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[MiddlewareEntry<H>] {
        &self.entries
    }

    /// The path this router was mounted at (`/` until mounted).
    #[must_use]
    pub fn mountpath(&self) -> &str {
        &self.mountpath
    }

    /// The router this one is mounted on, if any.
    #[must_use]
    pub fn parent(&self) -> Option<RouterId> {
        self.parent
    }

    /// Mounted sub-routers keyed by mount path, in mount order.
    #[must_use]
    pub fn apps(&self) -> &IndexMap<String, RouterId> {
        &self.apps
    }
}

/// Arena owning every router of an application.
///
/// # Example
///
/// ```rust
/// use wren_router::RouterTree;
///
/// let mut tree = RouterTree::new();
/// let app = tree.create();
/// let blog = tree.create();
/// let admin = tree.create();
///
/// tree.router(admin).unwrap().get("/", ["dashboard"]).unwrap();
/// tree.router(blog).unwrap().mount("/admin", admin).unwrap();
/// tree.router(app).unwrap().mount("/blog", blog).unwrap();
///
/// assert_eq!(tree.path(admin).unwrap(), "/blog/admin");
/// assert_eq!(tree.entries(admin).unwrap()[0].path(), "/admin");
/// ```
#[derive(Debug, Clone)]
pub struct RouterTree<H> {
    nodes: Vec<RouterNode<H>>,
    settings: RouterSettings,
}

impl<H> Default for RouterTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> RouterTree<H> {
    /// Creates an empty tree with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(RouterSettings::default())
    }

    /// Creates an empty tree with the given settings.
    #[must_use]
    pub fn with_settings(settings: RouterSettings) -> Self {
        Self {
            nodes: Vec::new(),
            settings,
        }
    }

    /// The settings shared by every router in this tree.
    #[must_use]
    pub fn settings(&self) -> RouterSettings {
        self.settings
    }

    /// Creates a new, empty, unmounted router.
    pub fn create(&mut self) -> RouterId {
        let id = RouterId(self.nodes.len());
        self.nodes.push(RouterNode::new());
        debug!(router = %id, "created router");
        id
    }

    /// Returns a handle for registering on and mounting into `id`.
    pub fn router(&mut self, id: RouterId) -> RouterResult<Router<'_, H>> {
        self.check(id)?;
        Ok(Router::new(self, id))
    }

    /// Number of routers in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no router has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over every router id, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = RouterId> {
        (0..self.nodes.len()).map(RouterId)
    }

    /// Returns the router stored under `id`.
    #[must_use]
    pub fn node(&self, id: RouterId) -> Option<&RouterNode<H>> {
        self.nodes.get(id.0)
    }

    /// Registered entries of a router, in registration order.
    pub fn entries(&self, id: RouterId) -> RouterResult<&[MiddlewareEntry<H>]> {
        Ok(self.get(id)?.entries())
    }

    /// Mounted sub-routers of a router keyed by mount path.
    pub fn children(&self, id: RouterId) -> RouterResult<&IndexMap<String, RouterId>> {
        Ok(self.get(id)?.apps())
    }

    /// The path a router was mounted at.
    pub fn mountpath(&self, id: RouterId) -> RouterResult<&str> {
        Ok(self.get(id)?.mountpath())
    }

    /// The router `id` is mounted on.
    pub fn parent(&self, id: RouterId) -> RouterResult<Option<RouterId>> {
        Ok(self.get(id)?.parent())
    }

    /// Absolute mount path of a router.
    ///
    /// Concatenates the mount paths from the root down to `id`. A router
    /// without a parent resolves to the empty string. Computed on every call.
    pub fn path(&self, id: RouterId) -> RouterResult<String> {
        self.check(id)?;
        Ok(self.resolve_path(id))
    }

    /// Returns true if `ancestor` appears on the parent chain of `id`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: RouterId, id: RouterId) -> bool {
        self.parent_chain(id).any(|p| p == ancestor)
    }

    /// Compiles the path pattern of every entry reachable from `id`.
    ///
    /// Route entries compile strictly, middleware entries as prefixes.
    /// Returns the number of entries compiled.
    pub fn compile_patterns(&mut self, id: RouterId) -> RouterResult<usize> {
        self.check(id)?;

        let mut visited = vec![false; self.nodes.len()];
        let mut pending = vec![id];
        let mut compiled = 0;

        while let Some(current) = pending.pop() {
            if std::mem::replace(&mut visited[current.0], true) {
                continue;
            }
            let node = &mut self.nodes[current.0];
            for entry in &mut node.entries {
                entry.compile()?;
                compiled += 1;
            }
            pending.extend(node.apps.values().rev().copied());
        }

        debug!(router = %id, compiled, "compiled router patterns");
        Ok(compiled)
    }

    /// Mounts `child` on `parent`.
    ///
    /// With a mount path, the child's existing entry paths are prefixed and
    /// the child is registered under that path. Without one, the child is
    /// mounted at `/` and its entries are left untouched.
    pub(crate) fn mount(
        &mut self,
        parent: RouterId,
        child: RouterId,
        mountpath: Option<String>,
    ) -> RouterResult<()> {
        self.check(parent)?;
        self.check(child)?;
        if child == parent || self.is_ancestor(child, parent) {
            return Err(RouterError::MountCycle { parent, child });
        }

        let node = &mut self.nodes[child.0];
        if let Some(previous) = node.parent.replace(parent) {
            if previous != parent {
                debug!(router = %child, from = %previous, to = %parent, "re-parenting router");
            }
        }

        let key = match mountpath {
            Some(path) => {
                let path = if path.is_empty() { ROOT_PATH.to_string() } else { path };
                for entry in &mut node.entries {
                    entry.prefix_path(&path);
                }
                node.mountpath.clone_from(&path);
                path
            }
            None => {
                node.mountpath = ROOT_PATH.to_string();
                ROOT_PATH.to_string()
            }
        };

        debug!(parent = %parent, child = %child, mountpath = %key, "mounted router");
        self.nodes[parent.0].apps.insert(key, child);
        Ok(())
    }

    pub(crate) fn get(&self, id: RouterId) -> RouterResult<&RouterNode<H>> {
        self.nodes.get(id.0).ok_or(RouterError::UnknownRouter(id))
    }

    pub(crate) fn get_mut(&mut self, id: RouterId) -> RouterResult<&mut RouterNode<H>> {
        self.nodes.get_mut(id.0).ok_or(RouterError::UnknownRouter(id))
    }

    pub(crate) fn resolve_path(&self, id: RouterId) -> String {
        let mut mountpaths: Vec<&str> = Vec::new();
        let mut current = id;
        while let Some(node) = self.nodes.get(current.0) {
            let Some(parent) = node.parent else { break };
            mountpaths.push(&node.mountpath);
            current = parent;
            if mountpaths.len() > self.nodes.len() {
                break;
            }
        }
        mountpaths.reverse();
        mountpaths.concat()
    }

    fn check(&self, id: RouterId) -> RouterResult<()> {
        self.get(id).map(|_| ())
    }

    fn parent_chain(&self, id: RouterId) -> impl Iterator<Item = RouterId> + '_ {
        let limit = self.nodes.len();
        std::iter::successors(self.node(id).and_then(RouterNode::parent), move |p| {
            self.node(*p).and_then(RouterNode::parent)
        })
        .take(limit)
    }
}
