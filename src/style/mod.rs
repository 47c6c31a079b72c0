//! Inline style application.
//!
//! - [`StyleMap`]: declarations keyed by property name
//! - [`set_style`]: writes a map onto one resolved element
//! - [`set_styles`]: writes a map onto every element a [`Targets`] names

mod map;

pub(crate) use map::CssScalar;
pub use map::StyleMap;

use crate::platform::Platform;
use crate::target::{resolve, resolve_all, Target, Targets};

fn write_declarations<P: Platform>(platform: &P, element: &P::Element, styles: &StyleMap) {
    for (property, value) in styles.iter() {
        platform.set_style_property(element, property, value);
    }
}

/// Writes every declaration in `styles` onto the target's inline style.
///
/// Does nothing if the target does not resolve.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::{set_style, MemoryDom, StyleMap};
///
/// let dom = MemoryDom::new();
/// let panel = dom.create("section#panel").unwrap();
/// set_style(&dom, "#panel", &StyleMap::new().set("paddingTop", "8px"));
/// assert_eq!(dom.style(panel, "padding-top").as_deref(), Some("8px"));
/// ```
pub fn set_style<'a, P: Platform>(platform: &P, target: impl Into<Target<'a, P>>, styles: &StyleMap) {
    if let Some(element) = resolve(platform, target.into()) {
        write_declarations(platform, &element, styles);
    }
}

/// Writes `styles` onto every element the targets resolve to.
///
/// A selector applies to all of its matches, a collection applies to each of
/// its members that resolves, and a single target behaves like [`set_style`].
pub fn set_styles<'a, P: Platform>(
    platform: &P,
    targets: impl Into<Targets<'a, P>>,
    styles: &StyleMap,
) {
    let elements = resolve_all(platform, targets.into());
    tracing::trace!(count = elements.len(), "applying styles");
    for element in &elements {
        write_declarations(platform, element, styles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryDom, MemoryNode};

    #[test]
    fn test_set_style_single() {
        let dom = MemoryDom::new();
        let el = dom.create("div#box").unwrap();
        let styles = StyleMap::new().set("color", "red").set("width", "10px");
        set_style(&dom, "#box", &styles);
        assert_eq!(dom.style(el, "color").as_deref(), Some("red"));
        assert_eq!(dom.style(el, "width").as_deref(), Some("10px"));
    }

    #[test]
    fn test_set_style_only_first_match() {
        let dom = MemoryDom::new();
        let a = dom.create("p").unwrap();
        let b = dom.create("p").unwrap();
        set_style(&dom, "p", &StyleMap::new().set("color", "red"));
        assert_eq!(dom.style(a, "color").as_deref(), Some("red"));
        assert_eq!(dom.style(b, "color"), None);
    }

    #[test]
    fn test_set_style_missing_target() {
        let dom = MemoryDom::new();
        set_style(&dom, "#none", &StyleMap::new().set("color", "red"));
        set_style(&dom, Target::<MemoryDom>::Absent, &StyleMap::new());
        assert_eq!(dom.style(dom.root(), "color"), None);
    }

    #[test]
    fn test_set_styles_selector_all() {
        let dom = MemoryDom::new();
        let a = dom.create("li").unwrap();
        let b = dom.create("li").unwrap();
        set_styles(&dom, "li", &StyleMap::new().set("listStyle", "none"));
        assert_eq!(dom.style(a, "list-style").as_deref(), Some("none"));
        assert_eq!(dom.style(b, "list-style").as_deref(), Some("none"));
    }

    #[test]
    fn test_set_styles_collection() {
        let dom = MemoryDom::new();
        let a = dom.create("li").unwrap();
        let b = dom.create("li").unwrap();
        let c = dom.create("li").unwrap();
        set_styles(&dom, vec![a, c], &StyleMap::new().set("color", "blue"));
        assert_eq!(dom.style(a, "color").as_deref(), Some("blue"));
        assert_eq!(dom.style(b, "color"), None);
        assert_eq!(dom.style(c, "color").as_deref(), Some("blue"));
    }

    #[test]
    fn test_set_styles_skips_non_elements() {
        let dom = MemoryDom::new();
        let a = dom.create("li").unwrap();
        let targets: Vec<Target<'_, MemoryDom>> = vec![
            Target::Node(MemoryNode::Text("x".into())),
            Target::Node(MemoryNode::Element(a)),
        ];
        set_styles(&dom, targets, &StyleMap::new().set("color", "blue"));
        assert_eq!(dom.style(a, "color").as_deref(), Some("blue"));
    }

    #[test]
    fn test_set_styles_without_document() {
        let dom = MemoryDom::detached();
        let a = dom.create("li").unwrap();
        set_styles(&dom, a, &StyleMap::new().set("color", "blue"));
        assert_eq!(dom.style(a, "color"), None);
    }
}
