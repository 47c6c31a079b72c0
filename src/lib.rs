//! # Outstanding DOM - styling helpers for the browser
//!
//! `outstanding-dom` is a small set of DOM conveniences: class toggling,
//! inline styles, CSS-variable themes, opacity fades, a debounce wrapper and
//! viewport-responsive font sizes.
//!
//! ## Core Concepts
//!
//! - [`Platform`]: The document/window environment, passed explicitly
//! - [`Target`] / [`Targets`]: A selector, element handle, or nothing
//! - [`StyleMap`]: Inline declarations, camelCase or kebab-case
//! - [`Theme`]: Variables written to `:root` as `--name` custom properties
//! - [`Completion`]: A future that resolves when a fade finishes
//!
//! ## Quick Start
//!
//! ```rust
//! use outstanding_dom::{add_class, create_theme, set_style, MemoryDom, StyleMap, Theme};
//!
//! let dom = MemoryDom::new();
//! let card = dom.create("div#card").unwrap();
//!
//! add_class(&dom, "#card", "elevated");
//! set_style(&dom, card, &StyleMap::new().set("borderRadius", "8px"));
//! create_theme(&dom, &Theme::new().var("accent", "tomato"));
//!
//! assert!(dom.has_class(card, "elevated"));
//! assert_eq!(dom.style(card, "border-radius").as_deref(), Some("8px"));
//! assert_eq!(dom.style(dom.root(), "--accent").as_deref(), Some("tomato"));
//! ```
//!
//! In the browser, pass a `BrowserPlatform` instead (available on `wasm32`).
//!
//! ## Missing targets
//!
//! A target that does not resolve, or a platform without a document, is never
//! an error. Every helper quietly does nothing; fades return an
//! already-completed [`Completion`]. Set a `tracing` subscriber to
//! `trace` level to see each skipped call.

mod class;
mod debounce;
mod fade;
pub mod platform;
mod responsive;
mod style;
mod target;
mod theme;
mod util;

pub use class::{add_class, remove_class, toggle_class};
pub use debounce::{debounce, Debounced, DEFAULT_DEBOUNCE_MS};
pub use fade::{
    fade_in, fade_in_with, fade_out, fade_out_with, Completion, DEFAULT_FADE_DISPLAY,
    DEFAULT_FADE_MS,
};
#[cfg(target_arch = "wasm32")]
pub use platform::BrowserPlatform;
pub use platform::{MemoryDom, MemoryNode, NodeId, Platform, TimerHandle};
pub use responsive::{responsive_font, FontRange, RESIZE_DEBOUNCE_MS};
pub use style::{set_style, set_styles, StyleMap};
pub use target::{resolve, resolve_all, Target, Targets};
pub use theme::{
    apply_adaptive_theme, apply_theme, create_theme, AdaptiveTheme, ColorMode, Theme, ThemeError,
};
pub use util::{css_property_name, round_half_up};
