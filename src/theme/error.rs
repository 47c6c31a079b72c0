//! Theme loading errors.

use thiserror::Error;

/// Error returned when a theme cannot be loaded from a configuration source.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid theme JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid theme YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The document is valid but is not a map of names to values.
    #[error("theme must be a flat map of variable names to values")]
    NotAMap,
    /// A variable's value is a list, map or null.
    #[error("theme variable '{name}' must be a string, number or boolean")]
    InvalidValue { name: String },
}
