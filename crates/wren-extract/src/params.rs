//! Path parameter extraction and storage.
//!
//! Parameters are stored in a small vector so that the common case of a few
//! parameters per route does not allocate.

use serde::ser::{Serialize, SerializeMap, Serializer};
use smallvec::SmallVec;
use wren_pattern::PathMatcher;

/// Maximum number of parameters stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

/// Named path parameters extracted from a request path.
///
/// Parameters keep the order in which the pattern declared them. Serializes
/// as a map, e.g. `{"a": "hello", "b": "world"}`.
///
/// # Example
///
/// ```rust
/// use wren_extract::UrlParams;
///
/// let mut params = UrlParams::new();
/// params.push("userId", "123");
/// params.push("action", "view");
///
/// assert_eq!(params.get("userId"), Some("123"));
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlParams {
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl UrlParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the value for a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for UrlParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Serialize for UrlParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Extracts named parameters from `path` using a compiled pattern.
///
/// Returns an empty set when the path does not match or when the pattern
/// declares no parameters. Optional parameters that were not present in the
/// path are left out.
///
/// # Example
///
/// ```rust
/// use wren_extract::get_url_params;
/// use wren_pattern::compile;
///
/// let pattern = compile("/:a/:b").unwrap();
///
/// let params = get_url_params(&pattern, "/hello/world");
/// assert_eq!(params.get("a"), Some("hello"));
/// assert_eq!(params.get("b"), Some("world"));
///
/// assert!(get_url_params(&pattern, "/").is_empty());
/// ```
pub fn get_url_params<M>(matcher: &M, path: &str) -> UrlParams
where
    M: PathMatcher + ?Sized,
{
    let names = matcher.param_names();
    if names.is_empty() {
        return UrlParams::new();
    }

    let Some(captures) = matcher.captures(path) else {
        return UrlParams::new();
    };

    names
        .iter()
        .zip(captures)
        .filter_map(|(name, value)| value.map(|v| (name.clone(), v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wren_pattern::compile;

    /// Matcher that reports fixed captures, independent of the compiler.
    struct FixedMatcher {
        names: Vec<String>,
        captures: Option<Vec<Option<&'static str>>>,
    }

    impl PathMatcher for FixedMatcher {
        fn param_names(&self) -> &[String] {
            &self.names
        }

        fn captures<'p>(&self, _path: &'p str) -> Option<Vec<Option<&'p str>>> {
            self.captures.clone()
        }
    }

    #[test]
    fn test_params_push_and_get() {
        let mut params = UrlParams::new();
        params.push("id", "123");
        params.push("name", "alice");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("id"), Some("123"));
        assert_eq!(params.get("name"), Some("alice"));
        assert_eq!(params.get("unknown"), None);
    }

    #[test]
    fn test_params_many() {
        let mut params = UrlParams::new();
        for i in 0..10 {
            params.push(format!("key{i}"), format!("value{i}"));
        }

        assert_eq!(params.len(), 10);
        assert_eq!(params.get("key7"), Some("value7"));
    }

    #[test]
    fn test_params_serialize_as_object() {
        let pattern = compile("/:a/:b").unwrap();
        let params = get_url_params(&pattern, "/hello/world");

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({ "a": "hello", "b": "world" }));
    }

    #[test]
    fn test_zip_is_positional() {
        let matcher = FixedMatcher {
            names: vec!["first".into(), "second".into()],
            captures: Some(vec![Some("1"), Some("2")]),
        };

        let pairs: Vec<_> = get_url_params(&matcher, "/ignored")
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("first".to_string(), "1".to_string()),
                ("second".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_names_ignores_match() {
        let matcher = FixedMatcher {
            names: Vec::new(),
            captures: Some(vec![Some("unused")]),
        };
        assert!(get_url_params(&matcher, "/x").is_empty());
    }

    #[test]
    fn test_unmatched_optional_is_omitted() {
        let pattern = compile("/books/:genre?").unwrap();
        assert!(get_url_params(&pattern, "/books").is_empty());
        assert_eq!(get_url_params(&pattern, "/books/horror").get("genre"), Some("horror"));
    }

    #[test]
    fn test_wildcard_param() {
        let pattern = compile("/static/*").unwrap();
        let params = get_url_params(&pattern, "/static/js/app.js");
        assert_eq!(params.get("wild"), Some("js/app.js"));
    }

    proptest! {
        #[test]
        fn patterns_without_params_extract_nothing(
            segments in proptest::collection::vec("[a-z]{1,6}", 0..4),
            path in "[a-z/?=&]{0,24}",
        ) {
            let pattern = compile(&format!("/{}", segments.join("/"))).unwrap();
            prop_assert!(get_url_params(&pattern, &path).is_empty());
        }
    }
}
