//! The document/window environment the helpers operate on.
//!
//! Every helper in this crate takes a [`Platform`] explicitly instead of
//! reaching for a global `window`. Two implementations ship with the crate:
//!
//! - [`MemoryDom`]: an in-memory document with a manual clock, for headless
//!   hosts and tests
//! - [`BrowserPlatform`]: the real browser, through `web-sys` (wasm32 only)
//!
//! A platform with no document context answers "nothing" to every query, which
//! turns every helper into a silent no-op.

#[cfg(target_arch = "wasm32")]
mod browser;
pub mod memory;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPlatform;
pub use memory::{MemoryDom, MemoryNode, NodeId};

/// Opaque handle to a scheduled timer, as returned by `setTimeout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Host capabilities needed by the styling helpers.
///
/// Implementations absorb host failures (invalid selectors, rejected class
/// tokens, failed timer registration) and report them as "nothing" rather
/// than surfacing errors.
pub trait Platform: Clone + 'static {
    /// A resolved element.
    type Element: Clone + 'static;
    /// Any host value that may or may not be an element.
    type Node;

    /// Whether a document context exists at all.
    fn has_document(&self) -> bool;

    /// First element matching `selector`, or `None` (also for invalid selectors).
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Returns the node as an element if it genuinely is one.
    fn element_of(&self, node: &Self::Node) -> Option<Self::Element>;

    /// The document's root element (`:root`).
    fn document_element(&self) -> Option<Self::Element>;

    fn add_class(&self, element: &Self::Element, class_name: &str);
    fn remove_class(&self, element: &Self::Element, class_name: &str);
    fn toggle_class(&self, element: &Self::Element, class_name: &str);

    /// Writes one inline style declaration. An empty value removes it.
    fn set_style_property(&self, element: &Self::Element, property: &str, value: &str);

    /// Runs `callback` before the next repaint.
    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>);

    /// Runs `callback` once after `ms` milliseconds.
    fn set_timeout(&self, callback: Box<dyn FnOnce()>, ms: u32) -> Option<TimerHandle>;

    /// Cancels a pending timer. Unknown or already-fired handles are ignored.
    fn clear_timeout(&self, handle: TimerHandle);

    /// Current viewport width in CSS pixels (`window.innerWidth`).
    fn viewport_width(&self) -> Option<f64>;

    /// Registers a listener for window `resize` events for the page's lifetime.
    fn on_resize(&self, callback: Box<dyn FnMut()>);

    /// Answer to `(prefers-color-scheme: dark)`, when the host can give one.
    fn prefers_dark_scheme(&self) -> Option<bool>;
}
