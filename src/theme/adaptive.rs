//! Adaptive themes that respond to the user's color scheme.

use serde::Deserialize;

use super::theme::{create_theme, Theme};
use crate::platform::Platform;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Asks the platform for `(prefers-color-scheme: dark)`.
    ///
    /// Hosts that cannot answer are treated as light.
    pub fn detect<P: Platform>(platform: &P) -> Self {
        match platform.prefers_dark_scheme() {
            Some(true) => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }
}

/// A theme with separate light and dark variants.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::{apply_adaptive_theme, AdaptiveTheme, ColorMode, MemoryDom, Theme};
///
/// let adaptive = AdaptiveTheme::new(
///     Theme::new().var("bg", "white"),
///     Theme::new().var("bg", "black"),
/// );
///
/// let dom = MemoryDom::new();
/// dom.set_prefers_dark(Some(true));
/// assert_eq!(apply_adaptive_theme(&dom, &adaptive), ColorMode::Dark);
/// assert_eq!(dom.style(dom.root(), "--bg").as_deref(), Some("black"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The variant for `mode`.
    pub fn resolve(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }
}

/// Applies the variant matching the platform's color scheme and returns the
/// mode that was chosen.
pub fn apply_adaptive_theme<P: Platform>(platform: &P, theme: &AdaptiveTheme) -> ColorMode {
    let mode = ColorMode::detect(platform);
    create_theme(platform, theme.resolve(mode));
    mode
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryDom;

    fn pair() -> AdaptiveTheme {
        AdaptiveTheme::new(
            Theme::new().var("fg", "black"),
            Theme::new().var("fg", "white"),
        )
    }

    #[test]
    fn test_adaptive_theme_dark() {
        let dom = MemoryDom::new();
        dom.set_prefers_dark(Some(true));
        assert_eq!(apply_adaptive_theme(&dom, &pair()), ColorMode::Dark);
        assert_eq!(dom.style(dom.root(), "--fg").as_deref(), Some("white"));
    }

    #[test]
    fn test_adaptive_theme_defaults_to_light() {
        let dom = MemoryDom::new();
        assert_eq!(apply_adaptive_theme(&dom, &pair()), ColorMode::Light);
        assert_eq!(dom.style(dom.root(), "--fg").as_deref(), Some("black"));

        dom.set_prefers_dark(Some(false));
        assert_eq!(ColorMode::detect(&dom), ColorMode::Light);
    }

    #[test]
    fn test_adaptive_theme_deserialize() {
        let adaptive: AdaptiveTheme =
            serde_json::from_str(r##"{"light": {"fg": "#111"}, "dark": {"fg": "#eee"}}"##).unwrap();
        assert_eq!(adaptive.resolve(ColorMode::Dark).get("fg"), Some("#eee"));
        assert_eq!(adaptive.resolve(ColorMode::Light).get("fg"), Some("#111"));
    }
}
