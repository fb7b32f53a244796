//! Compiled patterns and the matcher interface.

use regex::Regex;

use crate::error::{PatternError, PatternResult};
use crate::segment::{parse_segments, Segment};

/// How much of a request path a pattern must cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The whole path must match (an optional trailing slash is allowed).
    #[default]
    Strict,
    /// The pattern must match a prefix of the path ending at a `/` or at the end.
    Loose,
}

/// Anything that can match a request path and report positional captures.
///
/// The router and the extractors only depend on this trait, so a different
/// pattern syntax can be plugged in without touching them.
pub trait PathMatcher {
    /// Parameter names in declaration order.
    fn param_names(&self) -> &[String];

    /// Matches `path`, returning one capture per declared parameter.
    ///
    /// Returns `None` when the path does not match. A capture is `None`
    /// when its (optional) group did not participate in the match.
    fn captures<'p>(&self, path: &'p str) -> Option<Vec<Option<&'p str>>>;

    /// Returns true if `path` matches.
    fn is_match(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }
}

/// A path pattern compiled to a case-insensitive regular expression.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    keys: Vec<String>,
    regex: Regex,
    mode: MatchMode,
}

impl CompiledPattern {
    /// Compiles `pattern` using the given match mode.
    pub fn new(pattern: &str, mode: MatchMode) -> PatternResult<Self> {
        let segments = parse_segments(pattern)?;
        let mut keys = Vec::with_capacity(segments.len());
        let mut expr = String::from("(?i)^");

        for segment in &segments {
            match segment {
                Segment::Static(text) => {
                    expr.push('/');
                    expr.push_str(&regex::escape(text));
                }
                Segment::Param {
                    name,
                    optional,
                    suffix,
                } => {
                    keys.push(name.clone());
                    if *optional && suffix.is_none() {
                        expr.push_str("(?:/([^/]+?))?");
                    } else {
                        expr.push_str("/([^/]+?)");
                    }
                    if let Some(suffix) = suffix {
                        if *optional {
                            expr.push('?');
                        }
                        expr.push_str(&regex::escape(suffix));
                    }
                }
                Segment::Wildcard => {
                    keys.push(crate::WILDCARD_PARAM.to_string());
                    expr.push_str("/(.*)");
                }
            }
        }

        expr.push_str(match mode {
            MatchMode::Strict => "/?$",
            MatchMode::Loose => "(?:$|/)",
        });

        let regex = Regex::new(&expr).map_err(|source| PatternError::Regex {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            source: pattern.to_string(),
            keys,
            regex,
            mode,
        })
    }

    /// The pattern string this was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The match mode this pattern was compiled with.
    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The generated regular expression.
    #[must_use]
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }
}

impl PathMatcher for CompiledPattern {
    fn param_names(&self) -> &[String] {
        &self.keys
    }

    fn captures<'p>(&self, path: &'p str) -> Option<Vec<Option<&'p str>>> {
        let caps = self.regex.captures(path)?;
        Some(
            (1..=self.keys.len())
                .map(|i| caps.get(i).map(|m| m.as_str()))
                .collect(),
        )
    }

    fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Compiles a route pattern in [`MatchMode::Strict`].
pub fn compile(pattern: &str) -> PatternResult<CompiledPattern> {
    CompiledPattern::new(pattern, MatchMode::Strict)
}

/// Compiles a middleware pattern in [`MatchMode::Loose`].
pub fn compile_loose(pattern: &str) -> PatternResult<CompiledPattern> {
    CompiledPattern::new(pattern, MatchMode::Loose)
}
