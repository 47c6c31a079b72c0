//! Viewport-responsive font sizing.

use serde::Deserialize;

use crate::debounce::debounce;
use crate::platform::Platform;
use crate::util::round_half_up;

/// Debounce wait applied to `resize` events, in milliseconds.
pub const RESIZE_DEBOUNCE_MS: u32 = 120;

/// Font size bounds and the viewport widths they apply at.
///
/// Between `min_width` and `max_width` the size is interpolated linearly and
/// rounded to a whole pixel; outside that band it stays at the nearest bound.
/// `min_width` and `max_width` must differ.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::FontRange;
///
/// let range = FontRange::default(); // 12px..20px over 320px..1280px
/// assert_eq!(range.size_for(320.0), 12.0);
/// assert_eq!(range.size_for(800.0), 16.0);
/// assert_eq!(range.size_for(1920.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontRange {
    pub min_px: f64,
    pub max_px: f64,
    pub min_width: f64,
    pub max_width: f64,
}

impl FontRange {
    pub fn new(min_px: f64, max_px: f64, min_width: f64, max_width: f64) -> Self {
        Self {
            min_px,
            max_px,
            min_width,
            max_width,
        }
    }

    /// The font size in pixels for a viewport `viewport_width` pixels wide.
    pub fn size_for(&self, viewport_width: f64) -> f64 {
        let width = viewport_width.min(self.max_width).max(self.min_width);
        let ratio = (width - self.min_width) / (self.max_width - self.min_width);
        round_half_up(self.min_px + (self.max_px - self.min_px) * ratio)
    }
}

impl Default for FontRange {
    fn default() -> Self {
        Self::new(12.0, 20.0, 320.0, 1280.0)
    }
}

fn update_font_size<P: Platform>(platform: &P, elements: &[P::Element], range: &FontRange) {
    let Some(width) = platform.viewport_width() else {
        tracing::trace!("no viewport width");
        return;
    };
    let value = format!("{}px", range.size_for(width));
    for element in elements {
        platform.set_style_property(element, "font-size", &value);
    }
    tracing::debug!(width, size = %value, count = elements.len(), "font size updated");
}

/// Sizes every element matching `selector` from the viewport width, now and
/// after every `resize` (debounced by [`RESIZE_DEBOUNCE_MS`]).
///
/// The selector is queried once, at setup. Elements added afterwards are not
/// sized until `responsive_font` is called again. Does nothing when there is
/// no document.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::{responsive_font, FontRange, MemoryDom, RESIZE_DEBOUNCE_MS};
///
/// let dom = MemoryDom::new();
/// let heading = dom.create("h1.title").unwrap();
/// dom.set_viewport_width(320.0);
///
/// responsive_font(&dom, ".title", FontRange::default());
/// assert_eq!(dom.style(heading, "font-size").as_deref(), Some("12px"));
///
/// dom.resize(1280.0);
/// dom.advance(RESIZE_DEBOUNCE_MS as u64);
/// assert_eq!(dom.style(heading, "font-size").as_deref(), Some("20px"));
/// ```
pub fn responsive_font<P: Platform>(platform: &P, selector: &str, range: FontRange) {
    if !platform.has_document() {
        tracing::trace!("no document context");
        return;
    }
    if selector.is_empty() {
        tracing::trace!("empty selector");
        return;
    }

    let elements = platform.query_selector_all(selector);
    update_font_size(platform, &elements, &range);

    let update_platform = platform.clone();
    let on_resize = debounce(
        platform,
        move |()| update_font_size(&update_platform, &elements, &range),
        RESIZE_DEBOUNCE_MS,
    );
    platform.on_resize(Box::new(move || on_resize.call(())));
}
