//! Pattern compilation error types.

use thiserror::Error;

/// Errors that can occur while compiling a path pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A `:` segment without a parameter name.
    #[error("empty parameter name in pattern: {pattern}")]
    EmptyParamName {
        /// The offending pattern.
        pattern: String,
    },

    /// A wildcard that is followed by further segments.
    #[error("wildcard must be the last segment in pattern: {pattern}")]
    InvalidWildcard {
        /// The offending pattern.
        pattern: String,
    },

    /// The generated regular expression was rejected.
    #[error("invalid pattern {pattern}: {source}")]
    Regex {
        /// The offending pattern.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// Create a new empty parameter name error.
    pub fn empty_param_name(pattern: impl Into<String>) -> Self {
        Self::EmptyParamName {
            pattern: pattern.into(),
        }
    }

    /// Create a new invalid wildcard error.
    pub fn invalid_wildcard(pattern: impl Into<String>) -> Self {
        Self::InvalidWildcard {
            pattern: pattern.into(),
        }
    }
}

/// Result type for pattern compilation.
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatternError::empty_param_name("/users/:");
        assert_eq!(err.to_string(), "empty parameter name in pattern: /users/:");

        let err = PatternError::invalid_wildcard("/files/*/raw");
        assert!(err.to_string().contains("/files/*/raw"));
    }
}
