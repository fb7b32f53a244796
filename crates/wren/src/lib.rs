//! # Wren
//!
//! **Minimalist HTTP middleware router**
//!
//! Wren provides the routing core of a middleware framework:
//!
//! - **Registration** – one registrar per HTTP method token, plus `all` and `use_`
//! - **Composition** – mount routers under a path; their entries are prefixed
//! - **Extraction** – path parameters from compiled patterns, query strings
//!   with repeated keys
//! - **Configuration** – TOML/JSON/env driven settings and structured logging
//!
//! Wren does not run requests. A dispatcher walks [`RouterTree::entries`] and
//! [`RouterTree::children`] and invokes the matching handlers in order.
//!
//! ## Quick Start
//!
//! ```rust
//! use wren::prelude::*;
//!
//! let mut tree = RouterTree::new();
//! let app = tree.create();
//! let users = tree.create();
//!
//! tree.router(users)
//!     .unwrap()
//!     .get("/:id", ["show_user"])
//!     .unwrap();
//! tree.router(app)
//!     .unwrap()
//!     .use_handler("logger")
//!     .unwrap()
//!     .mount("/users", users)
//!     .unwrap();
//! tree.compile_patterns(app).unwrap();
//!
//! let entry = &tree.entries(users).unwrap()[0];
//! let params = get_url_params(entry.pattern().unwrap(), "/users/42");
//! assert_eq!(params.get("id"), Some("42"));
//!
//! let query = get_query_params("/users/42?tab=posts&tab=likes");
//! assert_eq!(query.get("tab").unwrap().iter().count(), 2);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! wren-config ──> RouterSettings / QueryOptions / LogConfig
//!                      │              │              │
//!               wren-router     wren-extract   wren-telemetry
//!                      │              │
//!                      └── wren-pattern ──┘
//! ```

#![doc(html_root_url = "https://docs.rs/wren/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Path pattern compilation.
pub use wren_pattern as pattern;

/// Router trees and middleware registration.
pub use wren_router as router;

/// Path parameter and query extraction.
pub use wren_extract as extract;

/// Configuration loading.
pub use wren_config as config;

/// Logging setup.
pub use wren_telemetry as telemetry;

pub use wren_router::{Router, RouterError, RouterId, RouterTree};

/// Convenient imports for applications.
///
/// ```rust
/// use wren::prelude::*;
///
/// let mut tree: RouterTree<&str> = RouterTree::with_settings(RouterSettings::permissive());
/// let app = tree.create();
/// tree.router(app).unwrap().use_([UseArg::path("/only-a-path")]).unwrap();
/// assert!(tree.entries(app).unwrap().is_empty());
/// ```
pub mod prelude {
    pub use wren_config::{ConfigError, ConfigLoader, WrenConfig};
    pub use wren_extract::{
        get_query_params, get_query_params_with, get_url_params, QueryOptions, QueryParams,
        QueryValue, UrlParams,
    };
    pub use wren_pattern::{compile, compile_loose, CompiledPattern, PathMatcher};
    pub use wren_router::{
        EntryKind, Handler, HandlerError, Method, MiddlewareEntry, Next, PathOrHandler, Router,
        RouterError, RouterId, RouterResult, RouterSettings, RouterTree, UseArg, METHODS,
    };
    pub use wren_telemetry::{init_logging, LogConfig};
}
