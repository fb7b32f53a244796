//! The registration handle.
//!
//! A [`Router`] borrows its [`RouterTree`] mutably and appends entries to one
//! router in it. Registration methods return `&mut Self` so calls chain:
//!
//! ```rust
//! use wren_router::{Method, RouterTree};
//!
//! let mut tree = RouterTree::new();
//! let app = tree.create();
//!
//! tree.router(app)
//!     .unwrap()
//!     .use_handler("logger")
//!     .unwrap()
//!     .get("/users", ["list_users"])
//!     .unwrap()
//!     .post("/users", ["validate", "create_user"])
//!     .unwrap();
//!
//! let entries = tree.entries(app).unwrap();
//! assert_eq!(entries.len(), 4);
//! assert_eq!(entries[3].method(), Some(Method::Post));
//! ```

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::entry::{build_entries, EntryKind, MiddlewareEntry, PathOrHandler, ROOT_PATH};
use crate::error::RouterResult;
use crate::method::{with_methods, Method};
use crate::mount::{CallShape, UseArg};
use crate::tree::{RouterId, RouterTree};

/// Mutable handle to one router of a [`RouterTree`].
#[derive(Debug)]
pub struct Router<'t, H> {
    tree: &'t mut RouterTree<H>,
    id: RouterId,
}

impl<'t, H> Router<'t, H> {
    pub(crate) fn new(tree: &'t mut RouterTree<H>, id: RouterId) -> Self {
        Self { tree, id }
    }

    /// The id of the router this handle registers on.
    #[must_use]
    pub fn id(&self) -> RouterId {
        self.id
    }

    /// The tree this router belongs to.
    #[must_use]
    pub fn tree(&self) -> &RouterTree<H> {
        self.tree
    }

    /// Registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[MiddlewareEntry<H>] {
        self.tree.entries(self.id).unwrap_or_default()
    }

    /// The path this router was mounted at.
    #[must_use]
    pub fn mountpath(&self) -> &str {
        self.tree.mountpath(self.id).unwrap_or(ROOT_PATH)
    }

    /// The router this one is mounted on.
    #[must_use]
    pub fn parent(&self) -> Option<RouterId> {
        self.tree.parent(self.id).ok().flatten()
    }

    /// Mounted sub-routers keyed by mount path.
    pub fn children(&self) -> RouterResult<&IndexMap<String, RouterId>> {
        self.tree.children(self.id)
    }

    /// Absolute mount path of this router. Empty for a root router.
    #[must_use]
    pub fn path(&self) -> String {
        self.tree.resolve_path(self.id)
    }
}

impl<'t, H: Clone> Router<'t, H> {
    /// Registers route handlers for one method.
    ///
    /// `path` is either a path pattern or, when the path is omitted, the
    /// first handler; in that case the route applies to `/`. The first of
    /// `handlers` is the primary handler and the rest become extra entries
    /// on the same path.
    ///
    /// # Errors
    ///
    /// [`RouterError::MissingHandler`](crate::RouterError::MissingHandler) if
    /// a path is given with no handler. Permissive routers log and skip it.
    pub fn route<P, I>(&mut self, method: Method, path: P, handlers: I) -> RouterResult<&mut Self>
    where
        P: Into<PathOrHandler<H>>,
        I: IntoIterator<Item = H>,
    {
        let (handler, extras) = split_handlers(handlers);
        let result = build_entries(path.into(), handler, extras, Some(method), EntryKind::Route)
            .map(|entries| self.append(entries));
        self.settle(result)
    }

    /// Registers route handlers for every method token.
    ///
    /// Entries are appended method by method, in [`METHODS`](crate::METHODS)
    /// order.
    ///
    /// # Errors
    ///
    /// As [`route`](Self::route). Nothing is appended on error.
    pub fn all<P, I>(&mut self, path: P, handlers: I) -> RouterResult<&mut Self>
    where
        P: Into<PathOrHandler<H>>,
        I: IntoIterator<Item = H>,
    {
        let path = path.into();
        let (handler, extras) = split_handlers(handlers);

        let result = Method::all()
            .map(|method| {
                build_entries(
                    path.clone(),
                    handler.clone(),
                    extras.clone(),
                    Some(method),
                    EntryKind::Route,
                )
            })
            .collect::<RouterResult<Vec<_>>>()
            .map(|batches| self.append(batches.into_iter().flatten().collect()));
        self.settle(result)
    }

    /// Registers middleware or mounts a sub-router.
    ///
    /// See [`CallShape::classify`] for the accepted argument lists.
    ///
    /// # Errors
    ///
    /// Call shape errors unless the tree is permissive;
    /// [`RouterError::UnknownRouter`](crate::RouterError::UnknownRouter) and
    /// [`RouterError::MountCycle`](crate::RouterError::MountCycle) always.
    ///
    /// # Example
    ///
    /// ```rust
    /// use wren_router::{RouterTree, UseArg};
    ///
    /// let mut tree = RouterTree::new();
    /// let app = tree.create();
    /// let admin = tree.create();
    ///
    /// tree.router(admin).unwrap().get("/users", ["list"]).unwrap();
    /// tree.router(app)
    ///     .unwrap()
    ///     .use_([UseArg::path("/admin"), UseArg::handler("auth")])
    ///     .unwrap()
    ///     .use_([UseArg::path("/admin"), UseArg::router(admin)])
    ///     .unwrap();
    ///
    /// assert_eq!(tree.entries(app).unwrap()[0].path(), "/admin");
    /// assert_eq!(tree.entries(admin).unwrap()[0].path(), "/admin/users");
    /// assert_eq!(tree.mountpath(admin).unwrap(), "/admin");
    /// ```
    pub fn use_<I>(&mut self, args: I) -> RouterResult<&mut Self>
    where
        I: IntoIterator<Item = UseArg<H>>,
    {
        let result =
            CallShape::classify(args.into_iter().collect()).and_then(|shape| self.apply(shape));
        self.settle(result)
    }

    /// Registers one middleware handler on `/`.
    ///
    /// # Errors
    ///
    /// Never fails for a single handler; the result mirrors [`use_`](Self::use_).
    pub fn use_handler(&mut self, handler: H) -> RouterResult<&mut Self> {
        self.use_([UseArg::Handler(handler)])
    }

    /// Registers middleware handlers on a path.
    ///
    /// # Errors
    ///
    /// [`RouterError::MissingHandler`](crate::RouterError::MissingHandler)
    /// for an empty handler list, unless the tree is permissive.
    pub fn use_at<I>(&mut self, path: impl Into<String>, handlers: I) -> RouterResult<&mut Self>
    where
        I: IntoIterator<Item = H>,
    {
        self.use_([UseArg::path(path), UseArg::handlers(handlers)])
    }

    /// Mounts `child` at `path`, prefixing the child's existing entries.
    ///
    /// # Errors
    ///
    /// [`RouterError::UnknownRouter`](crate::RouterError::UnknownRouter) or
    /// [`RouterError::MountCycle`](crate::RouterError::MountCycle).
    pub fn mount(&mut self, path: impl Into<String>, child: RouterId) -> RouterResult<&mut Self> {
        self.use_([UseArg::path(path), UseArg::Router(child)])
    }

    /// Mounts `child` at `/` without touching its entries.
    ///
    /// # Errors
    ///
    /// As [`mount`](Self::mount).
    pub fn mount_root(&mut self, child: RouterId) -> RouterResult<&mut Self> {
        self.use_([UseArg::Router(child)])
    }

    /// Compiles the patterns of this router and every router mounted under it.
    ///
    /// # Errors
    ///
    /// [`RouterError::Pattern`](crate::RouterError::Pattern) for the first
    /// path that does not compile.
    pub fn compile(&mut self) -> RouterResult<usize> {
        self.tree.compile_patterns(self.id)
    }

    fn apply(&mut self, shape: CallShape<H>) -> RouterResult<()> {
        match shape {
            CallShape::PathAndRouter { path, router } => {
                self.tree.mount(self.id, router, Some(path))
            }
            CallShape::BareRouter { router } => self.tree.mount(self.id, router, None),
            CallShape::PlainMiddleware {
                path,
                primary,
                extras,
            } => {
                let path = PathOrHandler::Path(path.unwrap_or_else(|| ROOT_PATH.to_string()));
                let entries = build_entries(path, Some(primary), extras, None, EntryKind::Middleware)?;
                self.append(entries);
                Ok(())
            }
        }
    }

    fn append(&mut self, entries: Vec<MiddlewareEntry<H>>) {
        if let Some(first) = entries.first() {
            debug!(
                router = %self.id,
                kind = first.kind().as_str(),
                method = first.method().map_or("*", Method::as_str),
                path = first.path(),
                count = entries.len(),
                "registered entries"
            );
        }
        if let Ok(node) = self.tree.get_mut(self.id) {
            node.entries.extend(entries);
        }
    }

    fn settle(&mut self, result: RouterResult<()>) -> RouterResult<&mut Self> {
        match result {
            Ok(()) => Ok(self),
            Err(err) if err.is_call_shape_error() && !self.tree.settings().strict_use => {
                warn!(router = %self.id, error = %err, "ignoring malformed registration");
                Ok(self)
            }
            Err(err) => Err(err),
        }
    }
}

fn split_handlers<H>(handlers: impl IntoIterator<Item = H>) -> (Option<H>, Vec<H>) {
    let mut handlers = handlers.into_iter();
    let first = handlers.next();
    (first, handlers.collect())
}

macro_rules! define_registrars {
    ($(($variant:ident, $token:literal, $registrar:ident)),* $(,)?) => {
        impl<'t, H: Clone> Router<'t, H> {
            $(
                #[doc = concat!("Registers `", $token, "` handlers. See [`route`](Self::route).")]
                ///
                /// # Errors
                ///
                /// As [`route`](Self::route).
                pub fn $registrar<P, I>(&mut self, path: P, handlers: I) -> RouterResult<&mut Self>
                where
                    P: Into<PathOrHandler<H>>,
                    I: IntoIterator<Item = H>,
                {
                    self.route(Method::$variant, path, handlers)
                }
            )*
        }
    };
}

with_methods!(define_registrars);
