//! Argument classification for `use`.
//!
//! `use` accepts a loose argument list. [`CallShape::classify`] turns that
//! list into one of three shapes:
//!
//! | Arguments                 | Shape                 |
//! |---------------------------|-----------------------|
//! | `path, router, ...`       | [`CallShape::PathAndRouter`] |
//! | `router, ...`             | [`CallShape::BareRouter`]    |
//! | `[path,] handlers...`     | [`CallShape::PlainMiddleware`] |
//!
//! Only the first two arguments select a mount shape; anything after the
//! router is ignored with a warning. Other combinations are an
//! [`RouterError::UnsupportedCallShape`].

use tracing::warn;

use crate::error::{RouterError, RouterResult};
use crate::tree::RouterId;

/// One argument of a `use` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseArg<H> {
    /// A path pattern.
    Path(String),
    /// A single handler.
    Handler(H),
    /// A list of handlers.
    Handlers(Vec<H>),
    /// A sub-router to mount.
    Router(RouterId),
}

impl<H> UseArg<H> {
    /// A path argument.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// A single handler argument.
    pub fn handler(handler: H) -> Self {
        Self::Handler(handler)
    }

    /// A handler list argument.
    pub fn handlers(handlers: impl IntoIterator<Item = H>) -> Self {
        Self::Handlers(handlers.into_iter().collect())
    }

    /// A sub-router argument.
    pub fn router(id: RouterId) -> Self {
        Self::Router(id)
    }

    fn describe(&self) -> &'static str {
        match self {
            Self::Path(_) => "path",
            Self::Handler(_) => "handler",
            Self::Handlers(_) => "handlers",
            Self::Router(_) => "router",
        }
    }
}

impl<H> From<&str> for UseArg<H> {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl<H> From<String> for UseArg<H> {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl<H> From<RouterId> for UseArg<H> {
    fn from(id: RouterId) -> Self {
        Self::Router(id)
    }
}

impl<H> From<Vec<H>> for UseArg<H> {
    fn from(handlers: Vec<H>) -> Self {
        Self::Handlers(handlers)
    }
}

/// The resolved shape of a `use` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallShape<H> {
    /// Mount `router` at `path`.
    PathAndRouter {
        /// Mount path.
        path: String,
        /// Router to mount.
        router: RouterId,
    },
    /// Mount `router` at `/` without rewriting its entries.
    BareRouter {
        /// Router to mount.
        router: RouterId,
    },
    /// Register method-agnostic middleware.
    PlainMiddleware {
        /// Explicit path, if the first argument was one.
        path: Option<String>,
        /// The handler of the primary entry.
        primary: H,
        /// Further handlers sharing the primary entry's path.
        extras: Vec<H>,
    },
}

impl<H> CallShape<H> {
    /// Classifies a `use` argument list.
    ///
    /// In the middleware shape, a list in first position contributes its head
    /// as the primary handler and its tail as extras. After a path, a list in
    /// second position does the same; without a path, all of it goes to the
    /// extras. Without a path, a single handler in second position is placed
    /// at the front of the extras.
    ///
    /// A router in first position, or after a path, is mounted regardless of
    /// what follows it.
    ///
    /// # Errors
    ///
    /// [`RouterError::EmptyUseCall`] for no arguments,
    /// [`RouterError::MissingHandler`] when no handler can be found, and
    /// [`RouterError::UnsupportedCallShape`] for anything else that does not
    /// fit the table above.
    pub fn classify(args: Vec<UseArg<H>>) -> RouterResult<Self> {
        let mut args = args.into_iter();
        let first = args.next().ok_or(RouterError::EmptyUseCall)?;
        let second = args.next();
        let rest: Vec<UseArg<H>> = args.collect();

        match (first, second) {
            (UseArg::Path(path), Some(UseArg::Router(router))) => {
                warn_ignored(router, rest.len());
                Ok(Self::PathAndRouter { path, router })
            }
            (UseArg::Router(router), second) => {
                warn_ignored(router, rest.len() + usize::from(second.is_some()));
                Ok(Self::BareRouter { router })
            }
            (first, Some(UseArg::Router(_))) => Err(RouterError::unsupported_shape(format!(
                "{} followed by router",
                first.describe()
            ))),
            (first, second) => Self::classify_middleware(first, second, rest),
        }
    }

    fn classify_middleware(
        first: UseArg<H>,
        second: Option<UseArg<H>>,
        rest: Vec<UseArg<H>>,
    ) -> RouterResult<Self> {
        let mut extras = Vec::new();

        let (path, shifted) = match first {
            UseArg::Path(path) => (Some(path), None),
            UseArg::Handler(handler) => (None, Some(handler)),
            UseArg::Handlers(list) => {
                let mut list = list.into_iter();
                let head = list.next();
                extras.extend(list);
                (None, head)
            }
            UseArg::Router(_) => return Err(RouterError::unsupported_shape("router")),
        };

        let explicit = match second {
            None => None,
            Some(UseArg::Handler(handler)) => Some(handler),
            Some(UseArg::Handlers(list)) => {
                let mut list = list.into_iter();
                if path.is_some() {
                    let head = list.next();
                    extras.extend(list);
                    head
                } else {
                    extras.extend(list);
                    None
                }
            }
            Some(UseArg::Path(_)) => {
                return Err(RouterError::unsupported_shape("path in second position"))
            }
            Some(UseArg::Router(_)) => return Err(RouterError::unsupported_shape("router")),
        };

        for arg in rest {
            match arg {
                UseArg::Handler(handler) => extras.push(handler),
                UseArg::Handlers(list) => extras.extend(list),
                other => {
                    return Err(RouterError::unsupported_shape(format!(
                        "trailing {}",
                        other.describe()
                    )))
                }
            }
        }

        let primary = match (path.as_deref(), shifted, explicit) {
            (Some(_), _, Some(handler)) => handler,
            (Some(path), _, None) => return Err(RouterError::missing_handler(path)),
            (None, Some(shifted), second) => {
                if let Some(handler) = second {
                    extras.insert(0, handler);
                }
                shifted
            }
            (None, None, _) => return Err(RouterError::missing_handler(crate::ROOT_PATH)),
        };

        Ok(Self::PlainMiddleware {
            path,
            primary,
            extras,
        })
    }
}

fn warn_ignored(router: RouterId, ignored: usize) {
    if ignored > 0 {
        warn!(router = %router, ignored, "arguments after a mounted router are ignored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouterTree;

    fn ids() -> (RouterId, RouterId) {
        let mut tree: RouterTree<&str> = RouterTree::new();
        (tree.create(), tree.create())
    }

    fn middleware(shape: CallShape<&'static str>) -> (Option<String>, &'static str, Vec<&'static str>) {
        match shape {
            CallShape::PlainMiddleware {
                path,
                primary,
                extras,
            } => (path, primary, extras),
            other => panic!("expected middleware shape, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_call() {
        assert!(matches!(
            CallShape::<&str>::classify(vec![]),
            Err(RouterError::EmptyUseCall)
        ));
    }

    #[test]
    fn test_path_and_router() {
        let (_, child) = ids();
        let shape = CallShape::<&str>::classify(vec!["/api".into(), child.into()]).unwrap();
        assert_eq!(
            shape,
            CallShape::PathAndRouter {
                path: "/api".into(),
                router: child
            }
        );
    }

    #[test]
    fn test_bare_router() {
        let (_, child) = ids();
        let shape = CallShape::<&str>::classify(vec![child.into()]).unwrap();
        assert_eq!(shape, CallShape::BareRouter { router: child });
    }

    #[test]
    fn test_handler_then_router_rejected() {
        let (_, child) = ids();
        let err = CallShape::classify(vec![UseArg::handler("h"), child.into()]).unwrap_err();
        assert!(matches!(err, RouterError::UnsupportedCallShape { .. }));
    }

    #[test]
    fn test_router_then_handler_mounts() {
        let (_, child) = ids();
        let shape = CallShape::classify(vec![child.into(), UseArg::handler("h")]).unwrap();
        assert_eq!(shape, CallShape::BareRouter { router: child });
    }

    #[test]
    fn test_trailing_after_mount_ignored() {
        let (_, child) = ids();
        let shape = CallShape::classify(vec![
            "/api".into(),
            child.into(),
            UseArg::handler("h"),
            "/x".into(),
        ])
        .unwrap();
        assert_eq!(
            shape,
            CallShape::PathAndRouter {
                path: "/api".into(),
                router: child
            }
        );
    }

    #[test]
    fn test_single_handler() {
        let (path, primary, extras) =
            middleware(CallShape::classify(vec![UseArg::handler("mw")]).unwrap());
        assert_eq!(path, None);
        assert_eq!(primary, "mw");
        assert!(extras.is_empty());
    }

    #[test]
    fn test_path_and_handlers() {
        let (path, primary, extras) = middleware(
            CallShape::classify(vec![
                "/admin".into(),
                UseArg::handler("a"),
                UseArg::handler("b"),
                UseArg::handler("c"),
            ])
            .unwrap(),
        );
        assert_eq!(path.as_deref(), Some("/admin"));
        assert_eq!(primary, "a");
        assert_eq!(extras, vec!["b", "c"]);
    }

    #[test]
    fn test_handler_sequence_keeps_order() {
        let (path, primary, extras) = middleware(
            CallShape::classify(vec![
                UseArg::handler("a"),
                UseArg::handler("b"),
                UseArg::handler("c"),
            ])
            .unwrap(),
        );
        assert_eq!(path, None);
        assert_eq!(primary, "a");
        assert_eq!(extras, vec!["b", "c"]);
    }

    #[test]
    fn test_second_handler_precedes_list_tail() {
        let (_, primary, extras) = middleware(
            CallShape::classify(vec![UseArg::handlers(["a", "b"]), UseArg::handler("c")]).unwrap(),
        );
        assert_eq!(primary, "a");
        assert_eq!(extras, vec!["c", "b"]);
    }

    #[test]
    fn test_leading_list() {
        let (path, primary, extras) =
            middleware(CallShape::classify(vec![UseArg::handlers(["a", "b", "c"])]).unwrap());
        assert_eq!(path, None);
        assert_eq!(primary, "a");
        assert_eq!(extras, vec!["b", "c"]);
    }

    #[test]
    fn test_path_then_list() {
        let (path, primary, extras) = middleware(
            CallShape::classify(vec!["/p".into(), UseArg::handlers(["a", "b"])]).unwrap(),
        );
        assert_eq!(path.as_deref(), Some("/p"));
        assert_eq!(primary, "a");
        assert_eq!(extras, vec!["b"]);
    }

    #[test]
    fn test_handler_then_list() {
        let (_, primary, extras) = middleware(
            CallShape::classify(vec![UseArg::handler("a"), UseArg::handlers(["b", "c"])]).unwrap(),
        );
        assert_eq!(primary, "a");
        assert_eq!(extras, vec!["b", "c"]);
    }

    #[test]
    fn test_path_without_handler() {
        let err = CallShape::<&str>::classify(vec!["/admin".into()]).unwrap_err();
        assert!(matches!(err, RouterError::MissingHandler { path } if path == "/admin"));
    }

    #[test]
    fn test_empty_list() {
        let err = CallShape::<&str>::classify(vec![UseArg::handlers([])]).unwrap_err();
        assert!(matches!(err, RouterError::MissingHandler { .. }));
    }

    #[test]
    fn test_path_in_second_position() {
        let err = CallShape::classify(vec![UseArg::handler("a"), "/p".into()]).unwrap_err();
        assert!(matches!(err, RouterError::UnsupportedCallShape { .. }));
    }

    #[test]
    fn test_trailing_path_rejected() {
        let err = CallShape::classify(vec!["/p".into(), UseArg::handler("a"), "/q".into()])
            .unwrap_err();
        assert!(matches!(err, RouterError::UnsupportedCallShape { .. }));
    }
}
