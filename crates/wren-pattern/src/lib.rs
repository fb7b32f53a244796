//! Path pattern compiler for Wren.
//!
//! Turns a route path such as `/users/:id` into a [`CompiledPattern`]: the
//! ordered list of parameter names declared by the path plus a matcher that
//! yields the captured values for a concrete request path.
//!
//! # Syntax
//!
//! | Segment | Meaning | Parameter |
//! |---------|---------|-----------|
//! | `users` | static text, matched case-insensitively | - |
//! | `:id` | required parameter | `id` |
//! | `:id?` | optional parameter | `id` |
//! | `:file.json` | parameter with a literal suffix | `file` |
//! | `*` | wildcard, matches the rest of the path | `wild` |
//!
//! # Match modes
//!
//! Routes compile in [`MatchMode::Strict`] (the whole path must match, a
//! trailing slash is tolerated). Middleware compiles in [`MatchMode::Loose`],
//! where the pattern only needs to match a prefix ending on a segment boundary.
//!
//! # Example
//!
//! ```rust
//! use wren_pattern::{compile, PathMatcher};
//!
//! let pattern = compile("/users/:id").unwrap();
//! assert_eq!(pattern.param_names(), ["id".to_string()]);
//!
//! let captures = pattern.captures("/users/42").unwrap();
//! assert_eq!(captures, vec![Some("42")]);
//! assert!(pattern.captures("/posts/42").is_none());
//! ```

mod compiled;
mod error;
mod segment;

pub use compiled::{compile, compile_loose, CompiledPattern, MatchMode, PathMatcher};
pub use error::{PatternError, PatternResult};
pub use segment::{parse_segments, Segment, WILDCARD_PARAM};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_and_match() {
        let pattern = compile("/orgs/:org/users/:user").unwrap();
        assert_eq!(pattern.param_names(), ["org".to_string(), "user".to_string()]);

        let captures = pattern.captures("/orgs/acme/users/alice").unwrap();
        assert_eq!(captures, vec![Some("acme"), Some("alice")]);
    }

    #[test]
    fn test_loose_prefix_match() {
        let pattern = compile_loose("/api").unwrap();
        assert!(pattern.is_match("/api"));
        assert!(pattern.is_match("/api/users"));
        assert!(!pattern.is_match("/apiary"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(compile("/users/:"), Err(PatternError::EmptyParamName { .. })));
    }
}
