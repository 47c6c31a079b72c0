//! Target references and their resolution to concrete elements.
//!
//! Every helper accepts a [`Target`] (or, for batch styling, [`Targets`]).
//! Targets are resolved on each call and never cached. A target that does
//! not resolve is not an error: the helper silently does nothing.

use std::fmt;

use crate::platform::{MemoryDom, MemoryNode, NodeId, Platform};

/// A reference to a single element.
pub enum Target<'a, P: Platform> {
    /// A CSS selector; resolves to the first match.
    Selector(&'a str),
    /// An element handle, used as-is.
    Element(P::Element),
    /// Any host value; resolves only if it genuinely is an element.
    Node(P::Node),
    /// Nothing at all.
    Absent,
}

impl<P: Platform> fmt::Debug for Target<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Selector(selector) => f.debug_tuple("Selector").field(selector).finish(),
            Target::Element(_) => f.write_str("Element(..)"),
            Target::Node(_) => f.write_str("Node(..)"),
            Target::Absent => f.write_str("Absent"),
        }
    }
}

impl<'a, P: Platform> From<&'a str> for Target<'a, P> {
    fn from(selector: &'a str) -> Self {
        Target::Selector(selector)
    }
}

impl<'a, P: Platform> From<&'a String> for Target<'a, P> {
    fn from(selector: &'a String) -> Self {
        Target::Selector(selector)
    }
}

impl<'a, P: Platform> From<Option<&'a str>> for Target<'a, P> {
    fn from(selector: Option<&'a str>) -> Self {
        selector.map_or(Target::Absent, Target::Selector)
    }
}

impl<'a> From<NodeId> for Target<'a, MemoryDom> {
    fn from(element: NodeId) -> Self {
        Target::Element(element)
    }
}

impl<'a> From<MemoryNode> for Target<'a, MemoryDom> {
    fn from(node: MemoryNode) -> Self {
        Target::Node(node)
    }
}

#[cfg(target_arch = "wasm32")]
mod browser_targets {
    use super::{Target, Targets};
    use crate::platform::BrowserPlatform;
    use wasm_bindgen::JsValue;
    use web_sys::Element;

    impl<'a> From<Element> for Target<'a, BrowserPlatform> {
        fn from(element: Element) -> Self {
            Target::Element(element)
        }
    }

    impl<'a> From<JsValue> for Target<'a, BrowserPlatform> {
        fn from(node: JsValue) -> Self {
            Target::Node(node)
        }
    }

    impl<'a> From<Vec<Element>> for Targets<'a, BrowserPlatform> {
        fn from(elements: Vec<Element>) -> Self {
            Targets::Each(elements.into_iter().map(Target::Element).collect())
        }
    }

    impl<'a> From<Element> for Targets<'a, BrowserPlatform> {
        fn from(element: Element) -> Self {
            Targets::One(Target::Element(element))
        }
    }
}

/// A reference to any number of elements, for batch operations.
pub enum Targets<'a, P: Platform> {
    /// Every element matching a selector.
    All(&'a str),
    /// A collection of individual targets; each is resolved on its own.
    Each(Vec<Target<'a, P>>),
    /// A single target.
    One(Target<'a, P>),
}

impl<P: Platform> fmt::Debug for Targets<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Targets::All(selector) => f.debug_tuple("All").field(selector).finish(),
            Targets::Each(targets) => f.debug_tuple("Each").field(targets).finish(),
            Targets::One(target) => f.debug_tuple("One").field(target).finish(),
        }
    }
}

impl<'a, P: Platform> From<&'a str> for Targets<'a, P> {
    fn from(selector: &'a str) -> Self {
        Targets::All(selector)
    }
}

impl<'a, P: Platform> From<Target<'a, P>> for Targets<'a, P> {
    fn from(target: Target<'a, P>) -> Self {
        Targets::One(target)
    }
}

impl<'a, P: Platform> From<Vec<Target<'a, P>>> for Targets<'a, P> {
    fn from(targets: Vec<Target<'a, P>>) -> Self {
        Targets::Each(targets)
    }
}

impl<'a> From<NodeId> for Targets<'a, MemoryDom> {
    fn from(element: NodeId) -> Self {
        Targets::One(Target::Element(element))
    }
}

impl<'a> From<Vec<NodeId>> for Targets<'a, MemoryDom> {
    fn from(elements: Vec<NodeId>) -> Self {
        Targets::Each(elements.into_iter().map(Target::Element).collect())
    }
}

/// Resolves a target to a concrete element.
///
/// Returns `None` when there is no document, the target is absent or an empty
/// selector, no element matches, or the node is not an element.
pub fn resolve<P: Platform>(platform: &P, target: Target<'_, P>) -> Option<P::Element> {
    if !platform.has_document() {
        tracing::trace!("no document context");
        return None;
    }
    let element = match &target {
        Target::Selector("") | Target::Absent => None,
        Target::Selector(selector) => platform.query_selector(selector),
        Target::Element(element) => Some(element.clone()),
        Target::Node(node) => platform.element_of(node),
    };
    if element.is_none() {
        tracing::trace!(?target, "target did not resolve");
    }
    element
}

/// Resolves a batch of targets, skipping any that do not resolve.
pub fn resolve_all<P: Platform>(platform: &P, targets: Targets<'_, P>) -> Vec<P::Element> {
    if !platform.has_document() {
        tracing::trace!("no document context");
        return Vec::new();
    }
    match targets {
        Targets::All("") => Vec::new(),
        Targets::All(selector) => platform.query_selector_all(selector),
        Targets::Each(targets) => targets
            .into_iter()
            .filter_map(|target| resolve(platform, target))
            .collect(),
        Targets::One(target) => resolve(platform, target).into_iter().collect(),
    }
}
