//! Ordered map of inline style declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use crate::util::css_property_name;

/// A scalar as it appears in configuration files: CSS values are usually
/// strings, but `opacity: 0` or `z-index: 10` are natural to write as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CssScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl CssScalar {
    pub(crate) fn into_css(self) -> String {
        match self {
            CssScalar::Text(s) => s,
            CssScalar::Integer(n) => n.to_string(),
            CssScalar::Float(n) => n.to_string(),
            CssScalar::Bool(b) => b.to_string(),
        }
    }
}

/// Inline style declarations keyed by CSS property name.
///
/// Property names are normalised on insertion, so DOM camelCase (`fontSize`)
/// and CSS kebab-case (`font-size`) address the same declaration. Values are
/// kept verbatim. Declarations are written in insertion order; setting a
/// property twice keeps the later value.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::StyleMap;
///
/// let styles = StyleMap::new()
///     .set("backgroundColor", "teal")
///     .set("opacity", 0.5)
///     .set("font-size", "14px");
///
/// assert_eq!(styles.get("background-color"), Some("teal"));
/// assert_eq!(styles.get("fontSize"), Some("14px"));
/// assert_eq!(styles.get("opacity"), Some("0.5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    declarations: IndexMap<String, String>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the updated map for chaining.
    pub fn set(mut self, property: &str, value: impl ToString) -> Self {
        self.insert(property, value);
        self
    }

    /// Adds or replaces a declaration in place.
    pub fn insert(&mut self, property: &str, value: impl ToString) {
        self.declarations
            .insert(css_property_name(property), value.to_string());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .get(&css_property_name(property))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declarations as `(kebab-case property, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: ToString> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.insert(property.as_ref(), value);
        }
        map
    }
}

impl<K: AsRef<str>, V: ToString, const N: usize> From<[(K, V); N]> for StyleMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, CssScalar>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(property, value)| (property, value.into_css()))
            .collect())
    }
}
