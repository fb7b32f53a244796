//! Request parameter extraction for Wren.
//!
//! Two pure functions sit between a matched route and its handler:
//!
//! - [`get_url_params`] zips the parameter names declared by a compiled path
//!   pattern with the values captured from a request path.
//! - [`get_query_params`] parses the query string of a raw request URL.
//!
//! Neither function fails: a path that does not match, or a URL without a
//! query string, yields an empty mapping.
//!
//! # Example
//!
//! ```rust
//! use wren_extract::{get_query_params, get_url_params, QueryValue};
//! use wren_pattern::compile;
//!
//! let pattern = compile("/users/:id").unwrap();
//! let params = get_url_params(&pattern, "/users/42");
//! assert_eq!(params.get("id"), Some("42"));
//!
//! let query = get_query_params("/users/42?fields=name&fields=email");
//! assert_eq!(
//!     query.get("fields"),
//!     Some(&QueryValue::Multiple(vec!["name".into(), "email".into()])),
//! );
//! ```

mod params;
mod query;

pub use params::{get_url_params, UrlParams};
pub use query::{
    get_query_params, get_query_params_with, parse_query_string, QueryOptions, QueryParams,
    QueryValue, DEFAULT_MAX_KEYS,
};
