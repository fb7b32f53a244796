//! Router error types.

use thiserror::Error;
use wren_pattern::PatternError;

use crate::tree::RouterId;

/// Errors raised while registering middleware or composing routers.
#[derive(Debug, Error)]
pub enum RouterError {
    /// A path was given but no handler to bind to it.
    #[error("no handler supplied for path {path}")]
    MissingHandler {
        /// The path that was left without a handler.
        path: String,
    },

    /// `use` was called without any argument.
    #[error("use() called without arguments")]
    EmptyUseCall,

    /// The arguments to `use` match none of the supported call shapes.
    #[error("unsupported use() call shape: {shape}")]
    UnsupportedCallShape {
        /// Description of the rejected argument combination.
        shape: String,
    },

    /// The router id does not belong to this tree.
    #[error("unknown router: {0}")]
    UnknownRouter(RouterId),

    /// Mounting would make a router its own ancestor.
    #[error("cannot mount {child} under {parent}: mount would create a cycle")]
    MountCycle {
        /// The router being mounted onto.
        parent: RouterId,
        /// The router being mounted.
        child: RouterId,
    },

    /// An HTTP method token outside the supported table.
    #[error("unknown HTTP method: {0}")]
    UnknownMethod(String),

    /// A stored path failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl RouterError {
    /// Create a new missing handler error.
    pub fn missing_handler(path: impl Into<String>) -> Self {
        Self::MissingHandler { path: path.into() }
    }

    /// Create a new unsupported call shape error.
    pub fn unsupported_shape(shape: impl Into<String>) -> Self {
        Self::UnsupportedCallShape {
            shape: shape.into(),
        }
    }

    /// Returns true for errors describing a malformed registration call.
    ///
    /// These are the errors a permissive router logs and skips instead of
    /// returning; everything else would leave the tree inconsistent.
    #[must_use]
    pub fn is_call_shape_error(&self) -> bool {
        matches!(
            self,
            Self::MissingHandler { .. } | Self::EmptyUseCall | Self::UnsupportedCallShape { .. }
        )
    }
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_handler_display() {
        let err = RouterError::missing_handler("/users");
        assert_eq!(err.to_string(), "no handler supplied for path /users");
    }

    #[test]
    fn test_call_shape_classification() {
        assert!(RouterError::missing_handler("/").is_call_shape_error());
        assert!(RouterError::EmptyUseCall.is_call_shape_error());
        assert!(RouterError::unsupported_shape("handler, router").is_call_shape_error());
        assert!(!RouterError::UnknownMethod("FETCH".into()).is_call_shape_error());
    }

    #[test]
    fn test_pattern_error_is_transparent() {
        let err: RouterError = PatternError::empty_param_name("/:").into();
        assert_eq!(err.to_string(), "empty parameter name in pattern: /:");
    }
}
