//! Theme struct and root custom-property application.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::error::ThemeError;
use crate::platform::Platform;
use crate::style::CssScalar;

/// A set of CSS variables applied to the document root.
///
/// Names are stored bare (`accent`, not `--accent`); the `--` prefix is added
/// when the theme is applied. Values are passed through verbatim.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::{create_theme, MemoryDom, Theme};
///
/// let theme = Theme::new()
///     .var("accent", "#0a84ff")
///     .var("radius", "6px");
///
/// let dom = MemoryDom::new();
/// create_theme(&dom, &theme);
/// assert_eq!(dom.style(dom.root(), "--accent").as_deref(), Some("#0a84ff"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    vars: IndexMap<String, String>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, returning an updated theme for chaining.
    pub fn var(mut self, name: &str, value: impl ToString) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a variable in place.
    pub fn insert(&mut self, name: &str, value: impl ToString) {
        self.vars.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables as `(bare name, value)` pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Variables as `(--name, value)` custom-property pairs.
    pub fn custom_properties(&self) -> impl Iterator<Item = (String, &str)> {
        self.iter().map(|(name, value)| (format!("--{}", name), value))
    }

    /// Loads a theme from a flat JSON object.
    ///
    /// String, number and boolean values are accepted; numbers and booleans
    /// are converted to their textual form. Variables keep their source order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not valid JSON, is not an object, or
    /// holds a nested value.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        use serde_json::Value;

        let map = match serde_json::from_str::<IndexMap<String, Value>>(source) {
            Ok(map) => map,
            // Any well-formed document that is not an object fails the map shape.
            Err(err) => match serde_json::from_str::<Value>(source) {
                Ok(_) => return Err(ThemeError::NotAMap),
                Err(_) => return Err(err.into()),
            },
        };
        let mut theme = Theme::new();
        for (name, value) in map {
            let css = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return Err(ThemeError::InvalidValue { name }),
            };
            theme.insert(&name, css);
        }
        Ok(theme)
    }

    /// Loads a theme from a flat YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not valid YAML, is not a mapping
    /// with scalar keys, or holds a nested value.
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        use serde_yaml::Value;

        let Value::Mapping(map) = serde_yaml::from_str::<Value>(source)? else {
            return Err(ThemeError::NotAMap);
        };
        let mut theme = Theme::new();
        for (key, value) in map {
            let name = yaml_scalar(key).ok_or(ThemeError::NotAMap)?;
            let css = yaml_scalar(value).ok_or_else(|| ThemeError::InvalidValue {
                name: name.clone(),
            })?;
            theme.insert(&name, css);
        }
        Ok(theme)
    }
}

fn yaml_scalar(value: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl<K: AsRef<str>, V: ToString> FromIterator<(K, V)> for Theme {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut theme = Theme::new();
        for (name, value) in iter {
            theme.insert(name.as_ref(), value);
        }
        theme
    }
}

impl<K: AsRef<str>, V: ToString, const N: usize> From<[(K, V); N]> for Theme {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, CssScalar>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(name, value)| (name, value.into_css()))
            .collect())
    }
}

/// Writes each variable as a `--name` custom property on the document root.
///
/// Does nothing when there is no document.
pub fn create_theme<P: Platform>(platform: &P, vars: &Theme) {
    let Some(root) = platform.document_element() else {
        tracing::trace!("no document root; theme not applied");
        return;
    };
    for (property, value) in vars.custom_properties() {
        platform.set_style_property(&root, &property, value);
    }
    tracing::debug!(vars = vars.len(), "theme applied");
}

/// Applies a theme object. Equivalent to [`create_theme`].
pub fn apply_theme<P: Platform>(platform: &P, theme: &Theme) {
    create_theme(platform, theme);
}
