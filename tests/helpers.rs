//! Integration tests for the public helper surface.
//!
//! These tests drive every helper against `MemoryDom`, checking the no-op
//! policy for missing targets and the timing of fades and debounced calls.

use std::cell::RefCell;
use std::rc::Rc;

use futures::FutureExt;
use outstanding_dom::{
    add_class, apply_theme, create_theme, debounce, fade_in, fade_out, remove_class,
    responsive_font, set_style, set_styles, toggle_class, FontRange, MemoryDom, MemoryNode,
    StyleMap, Target, Theme, RESIZE_DEBOUNCE_MS,
};

#[test]
fn test_unmatched_selector_is_noop_everywhere() {
    let dom = MemoryDom::new();
    let bystander = dom.create("div.keep").unwrap();
    let styles = StyleMap::new().set("color", "red");

    add_class(&dom, ".missing", "x");
    remove_class(&dom, ".missing", "keep");
    toggle_class(&dom, ".missing", "x");
    set_style(&dom, ".missing", &styles);
    set_styles(&dom, ".missing", &styles);

    assert_eq!(dom.classes(bystander), vec!["keep"]);
    assert_eq!(dom.style(bystander, "color"), None);
}

#[test]
fn test_invalid_selector_is_noop() {
    let dom = MemoryDom::new();
    let el = dom.create("div.card").unwrap();
    add_class(&dom, "div > .card", "x");
    set_styles(&dom, "[data-x]", &StyleMap::new().set("color", "red"));
    assert!(!dom.has_class(el, "x"));
    assert_eq!(dom.style(el, "color"), None);
}

#[test]
fn test_style_map_order_independent() {
    let forward = MemoryDom::new();
    let a = forward.create("div").unwrap();
    set_style(&forward, a, &StyleMap::from([("color", "red"), ("width", "5px")]));

    let backward = MemoryDom::new();
    let b = backward.create("div").unwrap();
    set_style(&backward, b, &StyleMap::from([("width", "5px"), ("color", "red")]));

    for (dom, el) in [(&forward, a), (&backward, b)] {
        assert_eq!(dom.style(el, "color").as_deref(), Some("red"));
        assert_eq!(dom.style(el, "width").as_deref(), Some("5px"));
    }
}

#[test]
fn test_create_theme_color() {
    let dom = MemoryDom::new();
    create_theme(&dom, &Theme::from([("color", "red")]));
    assert_eq!(dom.style(dom.root(), "--color").as_deref(), Some("red"));
}

#[test]
fn test_theme_from_yaml_applied() {
    let dom = MemoryDom::new();
    let theme = Theme::from_yaml("surface: '#fafafa'\nspacing: 4px\n").unwrap();
    apply_theme(&dom, &theme);
    assert_eq!(dom.style(dom.root(), "--surface").as_deref(), Some("#fafafa"));
    assert_eq!(dom.style(dom.root(), "--spacing").as_deref(), Some("4px"));
}

#[test]
fn test_debounce_five_quick_calls_run_once() {
    let dom = MemoryDom::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let debounced = debounce(&dom, move |(a, b): (u8, &'static str)| sink.borrow_mut().push((a, b)), 100);

    for (i, label) in ["a", "b", "c", "d", "e"].into_iter().enumerate() {
        debounced.call((i as u8, label));
        dom.advance(10);
    }
    dom.advance(200);

    assert_eq!(*calls.borrow(), vec![(4, "e")]);
}

#[test]
fn test_responsive_font_reference_points() {
    let range = FontRange::new(12.0, 20.0, 320.0, 1280.0);
    assert_eq!(range.size_for(320.0), 12.0);
    assert_eq!(range.size_for(1280.0), 20.0);
    assert_eq!(range.size_for(800.0), 16.0);
}

#[test]
fn test_responsive_font_tracks_resizes() {
    let dom = MemoryDom::new();
    let body = dom.create("body").unwrap();
    dom.set_viewport_width(1024.0);
    responsive_font(&dom, "body", FontRange::default());
    assert_eq!(dom.style(body, "font-size").as_deref(), Some("18px"));

    dom.resize(320.0);
    dom.advance(u64::from(RESIZE_DEBOUNCE_MS));
    assert_eq!(dom.style(body, "font-size").as_deref(), Some("12px"));
}

#[test]
fn test_fade_in_then_out_resolves() {
    let dom = MemoryDom::new();
    let el = dom.create("div#flash").unwrap();

    let shown = fade_in(&dom, "#flash");
    let hidden = fade_out(&dom, "#flash");
    dom.advance(1_000);

    assert_eq!(shown.now_or_never(), Some(()));
    assert_eq!(hidden.now_or_never(), Some(()));
    assert_eq!(dom.style(el, "display").as_deref(), Some("none"));
}

#[test]
fn test_non_element_targets_resolve_to_nothing() {
    let dom = MemoryDom::new();
    let text = || Target::<MemoryDom>::Node(MemoryNode::Text("label".into()));

    add_class(&dom, text(), "x");
    set_style(&dom, text(), &StyleMap::new().set("color", "red"));
    assert_eq!(fade_in(&dom, text()).now_or_never(), Some(()));
    assert_eq!(fade_out(&dom, Target::<MemoryDom>::Absent).now_or_never(), Some(()));
    assert_eq!(dom.pending_frames(), 0);
    assert_eq!(dom.pending_timers(), 0);
}

#[test]
fn test_detached_platform_is_inert() {
    let dom = MemoryDom::detached();
    let el = dom.create("div").unwrap();

    add_class(&dom, el, "x");
    set_styles(&dom, vec![el], &StyleMap::new().set("color", "red"));
    create_theme(&dom, &Theme::new().var("color", "red"));
    assert_eq!(fade_in(&dom, el).now_or_never(), Some(()));
    responsive_font(&dom, "div", FontRange::default());

    assert!(dom.classes(el).is_empty());
    assert_eq!(dom.style(el, "color"), None);
    assert_eq!(dom.style(dom.root(), "--color"), None);
    assert_eq!(dom.pending_timers(), 0);
}
