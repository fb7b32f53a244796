//! Query string parsing.
//!
//! Produces the same mapping as the conventional `key=value&key=value`
//! parser used by URL libraries: keys and values are percent-decoded, a key
//! seen once maps to a string and a repeated key maps to the ordered list of
//! its values. `+` is kept literally.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

/// Default cap on the number of `&`-separated pairs that are considered.
pub const DEFAULT_MAX_KEYS: usize = 1000;

/// Options for query string parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum number of pairs to read; `0` means unlimited.
    pub max_keys: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            max_keys: DEFAULT_MAX_KEYS,
        }
    }
}

impl QueryOptions {
    /// Options without a pair limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self { max_keys: 0 }
    }
}

/// The value(s) bound to a query key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// The key appeared once.
    Single(String),
    /// The key appeared more than once; values in order of appearance.
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Returns the first value.
    #[must_use]
    pub fn first(&self) -> &str {
        match self {
            Self::Single(value) => value,
            Self::Multiple(values) => values.first().map_or("", String::as_str),
        }
    }

    /// Returns the value if the key appeared exactly once.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    /// Iterates over all values in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

/// Parsed query parameters, in order of first appearance.
///
/// Serializes as a JSON object whose values are strings or arrays of strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct QueryParams {
    inner: IndexMap<String, QueryValue>,
}

impl QueryParams {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value(s) for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.inner.get(key)
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(QueryValue::first)
    }

    /// Returns true if `key` was present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no keys were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterates over `(key, value)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn append(&mut self, key: String, value: String) {
        match self.inner.get_mut(&key) {
            Some(existing) => existing.push(value),
            None => {
                self.inner.insert(key, QueryValue::Single(value));
            }
        }
    }
}

/// Parses the query string of a raw request URL.
///
/// Everything after the first `?` (and before any `#` fragment) is parsed.
/// A URL without `?` yields an empty mapping.
///
/// # Example
///
/// ```rust
/// use wren_extract::{get_query_params, QueryValue};
///
/// let query = get_query_params("/hello?world=42");
/// assert_eq!(query.get("world"), Some(&QueryValue::Single("42".into())));
///
/// assert!(get_query_params("/hello").is_empty());
/// ```
pub fn get_query_params(url: &str) -> QueryParams {
    get_query_params_with(url, &QueryOptions::default())
}

/// Parses the query string of a raw request URL with explicit options.
pub fn get_query_params_with(url: &str, options: &QueryOptions) -> QueryParams {
    let url = url.split_once('#').map_or(url, |(url, _)| url);
    let Some((_, query)) = url.split_once('?') else {
        return QueryParams::new();
    };
    parse_query_string(query, options)
}

/// Parses a bare query string (without the leading `?`).
pub fn parse_query_string(query: &str, options: &QueryOptions) -> QueryParams {
    let limit = match options.max_keys {
        0 => usize::MAX,
        n => n,
    };

    let mut params = QueryParams::new();
    for token in query.split('&').take(limit).filter(|t| !t.is_empty()) {
        let (key, value) = token.split_once('=').unwrap_or((token, ""));
        params.append(decode(key).into_owned(), decode(value).into_owned());
    }
    params
}

// Malformed escapes are kept verbatim; invalid UTF-8 is replaced.
fn decode(raw: &str) -> Cow<'_, str> {
    if !raw.contains('%') {
        return Cow::Borrowed(raw);
    }
    let bytes = urlencoding::decode_binary(raw.as_bytes());
    Cow::Owned(String::from_utf8_lossy(&bytes).into_owned())
}
