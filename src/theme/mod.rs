//! CSS custom-property themes.
//!
//! This module provides:
//!
//! - [`Theme`]: an ordered set of variables with a fluent builder API
//! - [`create_theme`] / [`apply_theme`]: write a theme onto `:root` as `--name` properties
//! - [`AdaptiveTheme`]: light/dark theme pairs chosen by `prefers-color-scheme`
//! - [`ThemeError`]: errors from loading themes out of JSON or YAML

mod adaptive;
mod error;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{apply_adaptive_theme, AdaptiveTheme, ColorMode};
pub use error::ThemeError;
pub use theme::{apply_theme, create_theme, Theme};
