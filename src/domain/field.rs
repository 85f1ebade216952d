//! Field-path lookup over application items.
//!
//! Items are opaque to the engine. They are only inspected through dot-separated
//! paths (`"meta.label"`) resolved by the [`FieldAccessible`] trait, which is
//! implemented for [`serde_json::Value`] so any serializable record can take part
//! in search after `serde_json::to_value`.
//!
//! Resolution never fails loudly: a missing or null segment emits a `warn`
//! diagnostic and yields `None`, which the filter treats as "no match".

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Property access over a homogeneous tree of values.
pub trait FieldAccessible {
    /// Returns the child named by `segment`, or `None` when it is missing or null.
    fn field(&self, segment: &str) -> Option<&Self>;

    /// Returns the string representation used for matching, or `None` when the
    /// value has none (null, or a container whose only text is its syntax).
    fn text(&self) -> Option<String>;
}

impl FieldAccessible for Value {
    fn field(&self, segment: &str) -> Option<&Self> {
        let child = match self {
            Self::Object(map) => map.get(segment),
            Self::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };
        child.filter(|v| !v.is_null())
    }

    fn text(&self) -> Option<String> {
        match self {
            Self::Null | Self::Object(_) | Self::Array(_) => None,
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
        }
    }
}

impl FieldAccessible for String {
    fn field(&self, _segment: &str) -> Option<&Self> {
        None
    }

    fn text(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// A parsed dot-separated property path.
///
/// # Example
///
/// ```
/// use picksheet::domain::FieldPath;
///
/// let path: FieldPath = "meta.label".parse().unwrap();
/// assert_eq!(path.segments(), ["meta", "label"]);
/// assert_eq!(path.to_string(), "meta.label");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            segments: path.split('.').map(String::from).collect(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for FieldPath {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for FieldPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Walks `path` from `item`, returning the value at its end.
///
/// Short-circuits to `None` at the first missing or null segment and logs a
/// diagnostic naming the full path.
pub fn resolve<'a, T: FieldAccessible>(item: &'a T, path: &FieldPath) -> Option<&'a T> {
    let mut current = item;
    for segment in path.segments() {
        match current.field(segment) {
            Some(next) => current = next,
            None => {
                tracing::warn!(path = %path, segment = %segment, "property does not exist");
                return None;
            }
        }
    }
    Some(current)
}

/// Which parts of an item the search term is tested against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchSpec {
    /// No search: the filtered list is always the full list and no search
    /// input is shown.
    #[default]
    Disabled,

    /// Match against the item's own string representation.
    Item,

    /// Match when any of the paths resolves to a value containing the term.
    ///
    /// An empty path list behaves like [`SearchSpec::Disabled`].
    Fields(Vec<FieldPath>),
}

impl SearchSpec {
    /// Builds a [`SearchSpec::Fields`] from path strings.
    pub fn fields<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::Fields(paths.into_iter().map(|p| FieldPath::new(p.as_ref())).collect())
    }

    /// Parses the command-line/config form: `*` for the item itself, otherwise
    /// a comma-separated path list (blank entries dropped).
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if spec.trim() == "*" {
            return Self::Item;
        }
        Self::fields(spec.split(',').map(str::trim).filter(|p| !p.is_empty()))
    }

    /// Whether a search input should be offered at all.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        match self {
            Self::Disabled => false,
            Self::Item => true,
            Self::Fields(paths) => !paths.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolves_nested_paths() {
        let item = json!({"meta": {"label": "Banana", "tags": ["yellow", "fruit"]}});
        let label = resolve(&item, &"meta.label".into()).and_then(FieldAccessible::text);
        assert_eq!(label.as_deref(), Some("Banana"));

        let tag = resolve(&item, &"meta.tags.1".into()).and_then(FieldAccessible::text);
        assert_eq!(tag.as_deref(), Some("fruit"));
    }

    #[test]
    fn missing_or_null_segments_resolve_to_none() {
        let item = json!({"meta": null, "name": "Apple"});
        assert!(resolve(&item, &"meta.label".into()).is_none());
        assert!(resolve(&item, &"nope".into()).is_none());
        assert!(resolve(&item, &"name.first".into()).is_none());
    }

    #[test]
    fn text_of_scalars() {
        assert_eq!(json!(42).text().as_deref(), Some("42"));
        assert_eq!(json!(true).text().as_deref(), Some("true"));
        assert_eq!(json!("Kiwi").text().as_deref(), Some("Kiwi"));
        assert_eq!(json!(null).text(), None);
    }

    #[test]
    fn containers_have_no_text() {
        assert_eq!(json!({"name": "Apple"}).text(), None);
        assert_eq!(json!(["Apple"]).text(), None);
    }

    #[test]
    fn parses_search_specs() {
        assert_eq!(SearchSpec::parse("*"), SearchSpec::Item);
        assert_eq!(
            SearchSpec::parse("name, meta.tag,"),
            SearchSpec::fields(["name", "meta.tag"])
        );
        assert!(!SearchSpec::parse("").is_searchable());
        assert!(!SearchSpec::Disabled.is_searchable());
        assert!(SearchSpec::Item.is_searchable());
    }
}
