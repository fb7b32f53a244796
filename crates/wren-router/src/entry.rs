//! Canonical middleware entries and the entry builder.
//!
//! Every registration call, whatever shape its arguments take, ends up as one
//! or more [`MiddlewareEntry`] values appended to a router.

use wren_pattern::{CompiledPattern, MatchMode, PatternResult};

use crate::error::{RouterError, RouterResult};
use crate::method::Method;

/// Path used when a registration omits one.
pub const ROOT_PATH: &str = "/";

/// How an entry was registered, and therefore how a dispatcher matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Registered through `use`; matches any method on a path prefix.
    Middleware,
    /// Registered through a method registrar; matches the whole path.
    Route,
}

impl EntryKind {
    /// The pattern match mode used when compiling entries of this kind.
    #[must_use]
    pub fn match_mode(self) -> MatchMode {
        match self {
            Self::Middleware => MatchMode::Loose,
            Self::Route => MatchMode::Strict,
        }
    }

    /// Short label used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Middleware => "mw",
            Self::Route => "route",
        }
    }
}

/// The leading argument of a registration call: a path, or (when the path
/// is omitted) the handler itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOrHandler<H> {
    /// An explicit path pattern.
    Path(String),
    /// A handler given in place of the path.
    Handler(H),
}

impl<H> From<&str> for PathOrHandler<H> {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl<H> From<String> for PathOrHandler<H> {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

/// A registered handler together with where and how it applies.
#[derive(Debug, Clone)]
pub struct MiddlewareEntry<H> {
    method: Option<Method>,
    handler: H,
    path: String,
    kind: EntryKind,
    pattern: Option<CompiledPattern>,
}

impl<H> MiddlewareEntry<H> {
    /// The method this entry is bound to; `None` matches any method.
    #[must_use]
    pub fn method(&self) -> Option<Method> {
        self.method
    }

    /// The registered handler.
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// The path pattern. Never empty.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is a route or a middleware entry.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The compiled pattern, once [`compile`](Self::compile) has run.
    #[must_use]
    pub fn pattern(&self) -> Option<&CompiledPattern> {
        self.pattern.as_ref()
    }

    /// Compiles the path using the match mode of the entry kind.
    ///
    /// A pattern compiled for an earlier path is replaced.
    pub fn compile(&mut self) -> PatternResult<&CompiledPattern> {
        let pattern = match self.pattern.take() {
            Some(pattern) if pattern.source() == self.path => pattern,
            _ => CompiledPattern::new(&self.path, self.kind.match_mode())?,
        };
        Ok(self.pattern.insert(pattern))
    }

    /// Prefixes the path with a mount path. `/` becomes the mount path itself.
    pub(crate) fn prefix_path(&mut self, mountpath: &str) {
        self.path = if self.path == ROOT_PATH {
            mountpath.to_string()
        } else {
            format!("{mountpath}{}", self.path)
        };
        self.pattern = None;
    }
}

fn normalize_path(path: String) -> String {
    if path.is_empty() {
        ROOT_PATH.to_string()
    } else {
        path
    }
}

/// Builds one canonical entry.
///
/// The handler is the explicit `handler` if given, otherwise the value passed
/// in place of the path. The path is the given string, or `/` when the path
/// argument was a handler.
///
/// # Example
///
/// ```rust
/// use wren_router::{build_entry, EntryKind, Method, PathOrHandler};
///
/// let entry = build_entry(PathOrHandler::Handler("auth"), None, None, EntryKind::Middleware).unwrap();
/// assert_eq!(entry.path(), "/");
/// assert_eq!(*entry.handler(), "auth");
///
/// let entry = build_entry("/users".into(), Some("list"), Some(Method::Get), EntryKind::Route).unwrap();
/// assert_eq!(entry.path(), "/users");
/// ```
pub fn build_entry<H>(
    path: PathOrHandler<H>,
    handler: Option<H>,
    method: Option<Method>,
    kind: EntryKind,
) -> RouterResult<MiddlewareEntry<H>> {
    let (path, handler) = match (path, handler) {
        (PathOrHandler::Path(path), Some(handler)) => (normalize_path(path), handler),
        (PathOrHandler::Path(path), None) => {
            return Err(RouterError::missing_handler(normalize_path(path)))
        }
        (PathOrHandler::Handler(_), Some(handler)) | (PathOrHandler::Handler(handler), None) => {
            (ROOT_PATH.to_string(), handler)
        }
    };

    Ok(MiddlewareEntry {
        method,
        handler,
        path,
        kind,
        pattern: None,
    })
}

/// Builds the entries for a composite registration.
///
/// Produces the primary entry followed by one entry per extra handler, all
/// sharing the primary entry's path, method and kind.
pub fn build_entries<H>(
    path: PathOrHandler<H>,
    handler: Option<H>,
    extras: Vec<H>,
    method: Option<Method>,
    kind: EntryKind,
) -> RouterResult<Vec<MiddlewareEntry<H>>> {
    let primary = build_entry(path, handler, method, kind)?;
    let shared_path = primary.path.clone();

    let mut entries = Vec::with_capacity(extras.len() + 1);
    entries.push(primary);
    for handler in extras {
        entries.push(MiddlewareEntry {
            method,
            handler,
            path: shared_path.clone(),
            kind,
            pattern: None,
        });
    }

    Ok(entries)
}
