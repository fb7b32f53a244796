//! Path segment classification.

use crate::error::{PatternError, PatternResult};

/// Parameter name bound to the text matched by a `*` wildcard.
pub const WILDCARD_PARAM: &str = "wild";

/// A single `/`-delimited segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text (e.g. `users`).
    Static(String),
    /// Named parameter (e.g. `:id`, `:id?`, `:file.json`).
    Param {
        /// Parameter name, without the leading `:`.
        name: String,
        /// Whether the segment may be absent.
        optional: bool,
        /// Literal suffix following the parameter (e.g. `.json`).
        suffix: Option<String>,
    },
    /// Catch-all wildcard (`*`), bound to [`WILDCARD_PARAM`].
    Wildcard,
}

impl Segment {
    /// Returns the parameter name declared by this segment, if any.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Static(_) => None,
            Self::Param { name, .. } => Some(name),
            Self::Wildcard => Some(WILDCARD_PARAM),
        }
    }
}

/// Parses a path pattern into segments.
///
/// Parsing stops at the first empty segment after the leading slash, so a
/// trailing slash (or a doubled one) ends the pattern.
///
/// # Example
///
/// ```rust
/// use wren_pattern::{parse_segments, Segment};
///
/// let segments = parse_segments("/users/:id?").unwrap();
/// assert_eq!(segments[0], Segment::Static("users".into()));
/// assert_eq!(
///     segments[1],
///     Segment::Param { name: "id".into(), optional: true, suffix: None },
/// );
/// ```
pub fn parse_segments(pattern: &str) -> PatternResult<Vec<Segment>> {
    let raw = pattern.strip_prefix('/').unwrap_or(pattern);
    let mut segments = Vec::new();

    for part in raw.split('/').take_while(|s| !s.is_empty()) {
        if segments.last() == Some(&Segment::Wildcard) {
            return Err(PatternError::invalid_wildcard(pattern));
        }
        segments.push(classify(part, pattern)?);
    }

    Ok(segments)
}

fn classify(part: &str, pattern: &str) -> PatternResult<Segment> {
    if part.starts_with('*') {
        return Ok(Segment::Wildcard);
    }

    let Some(body) = part.strip_prefix(':') else {
        return Ok(Segment::Static(part.to_string()));
    };

    let (head, suffix) = match body.char_indices().skip(1).find(|&(_, c)| c == '.') {
        Some((idx, _)) => (&body[..idx], Some(body[idx..].to_string())),
        None => (body, None),
    };

    let (name, optional) = match head.strip_suffix('?') {
        Some(name) => (name, true),
        None => (head, false),
    };

    if name.is_empty() {
        return Err(PatternError::empty_param_name(pattern));
    }

    Ok(Segment::Param {
        name: name.to_string(),
        optional,
        suffix,
    })
}
