//! Integration tests for router composition and extraction.
//!
//! These tests build small applications the way a dispatcher would see them:
//! a tree of mounted routers with compiled entries, walked in order.

use wren::prelude::*;

/// Collects `(router, entry)` pairs depth-first: a router's own entries, then
/// each mounted child in mount order.
fn walk<'t>(tree: &'t RouterTree<&'static str>, id: RouterId, out: &mut Vec<&'t MiddlewareEntry<&'static str>>) {
    out.extend(tree.entries(id).unwrap());
    for child in tree.children(id).unwrap().values() {
        walk(tree, *child, out);
    }
}

/// Handlers whose entry would run for `method path`.
fn matching(tree: &RouterTree<&'static str>, root: RouterId, method: Method, path: &str) -> Vec<&'static str> {
    let mut entries = Vec::new();
    walk(tree, root, &mut entries);
    entries
        .into_iter()
        .filter(|e| e.method().map_or(true, |m| m == method))
        .filter(|e| e.pattern().is_some_and(|p| p.is_match(path)))
        .map(|e| *e.handler())
        .collect()
}

fn blog_app() -> (RouterTree<&'static str>, RouterId, RouterId, RouterId) {
    let mut tree = RouterTree::new();
    let app = tree.create();
    let blog = tree.create();
    let admin = tree.create();

    tree.router(admin)
        .unwrap()
        .use_handler("require_admin")
        .unwrap()
        .get("/posts/:id", ["edit_post"])
        .unwrap();

    tree.router(blog)
        .unwrap()
        .get("/posts/:slug", ["show_post"])
        .unwrap()
        .mount("/admin", admin)
        .unwrap();

    tree.router(app)
        .unwrap()
        .use_handler("logger")
        .unwrap()
        .mount("/blog", blog)
        .unwrap();

    tree.compile_patterns(app).unwrap();
    (tree, app, blog, admin)
}

#[test]
fn test_mount_paths() {
    let (tree, app, blog, admin) = blog_app();

    assert_eq!(tree.path(app).unwrap(), "");
    assert_eq!(tree.path(blog).unwrap(), "/blog");
    assert_eq!(tree.path(admin).unwrap(), "/blog/admin");

    // Admin entries were prefixed once, when admin was mounted on blog.
    let admin_paths: Vec<_> = tree.entries(admin).unwrap().iter().map(MiddlewareEntry::path).collect();
    assert_eq!(admin_paths, vec!["/admin", "/admin/posts/:id"]);
}

#[test]
fn test_walk_order() {
    let (tree, app, _, _) = blog_app();

    let mut entries = Vec::new();
    walk(&tree, app, &mut entries);
    let handlers: Vec<_> = entries.iter().map(|e| *e.handler()).collect();
    assert_eq!(handlers, vec!["logger", "show_post", "require_admin", "edit_post"]);
}

#[test]
fn test_middleware_matches_prefix_routes_match_whole_path() {
    let (tree, app, _, _) = blog_app();

    assert_eq!(matching(&tree, app, Method::Get, "/blog/posts/hello"), vec!["logger", "show_post"]);
    assert_eq!(matching(&tree, app, Method::Post, "/blog/posts/hello"), vec!["logger"]);
    assert_eq!(matching(&tree, app, Method::Get, "/blog/posts/hello/comments"), vec!["logger"]);
}

#[test]
fn test_extract_params_from_compiled_entry() {
    let (tree, _, blog, _) = blog_app();

    let entry = &tree.entries(blog).unwrap()[0];
    let params = get_url_params(entry.pattern().unwrap(), "/blog/posts/hello-world");
    assert_eq!(params.get("slug"), Some("hello-world"));
    assert_eq!(params.len(), 1);

    let params = get_url_params(entry.pattern().unwrap(), "/elsewhere");
    assert!(params.is_empty());
}

#[test]
fn test_url_params_and_query_together() {
    let pattern = compile("/:a/:b").unwrap();
    let params = get_url_params(&pattern, "/hello/world");
    assert_eq!(params.get("a"), Some("hello"));
    assert_eq!(params.get("b"), Some("world"));
    assert!(get_url_params(&pattern, "/").is_empty());

    let query = get_query_params("/hello?world=42");
    assert_eq!(query.first("world"), Some("42"));

    let query = get_query_params("/?a=1&a=2");
    assert_eq!(
        query.get("a"),
        Some(&QueryValue::Multiple(vec!["1".to_string(), "2".to_string()]))
    );
}

#[test]
fn test_query_serializes_like_a_plain_object() {
    let query = get_query_params("/search?q=wren&tag=a&tag=b&empty");
    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json, serde_json::json!({"q": "wren", "tag": ["a", "b"], "empty": ""}));
}

#[test]
fn test_all_registers_one_entry_per_method() {
    let mut tree = RouterTree::new();
    let app = tree.create();
    tree.router(app).unwrap().all("/health", ["ok"]).unwrap();
    tree.compile_patterns(app).unwrap();

    for method in Method::all() {
        assert_eq!(matching(&tree, app, method, "/health"), vec!["ok"], "{method}");
    }
}

#[test]
fn test_cycle_is_rejected_and_tree_unchanged() {
    let (mut tree, app, _, admin) = blog_app();

    let err = tree.router(admin).unwrap().mount("/app", app).unwrap_err();
    assert!(matches!(err, RouterError::MountCycle { .. }));
    assert_eq!(tree.parent(app).unwrap(), None);
    assert!(tree.children(admin).unwrap().is_empty());
}
