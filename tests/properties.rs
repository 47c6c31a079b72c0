//! Property tests for responsive sizing and style application.

use outstanding_dom::{set_style, FontRange, MemoryDom, StyleMap};
use proptest::prelude::*;

fn font_range() -> impl Strategy<Value = FontRange> {
    (1.0f64..40.0, 0.0f64..40.0, 0.0f64..2000.0, 1.0f64..2000.0).prop_map(
        |(min_px, extra_px, min_width, extra_width)| {
            FontRange::new(min_px, min_px + extra_px, min_width, min_width + extra_width)
        },
    )
}

proptest! {
    #[test]
    fn test_font_size_stays_within_bounds(range in font_range(), width in -500.0f64..5000.0) {
        let size = range.size_for(width);
        prop_assert!(size >= range.min_px.floor());
        prop_assert!(size <= range.max_px.ceil());
        prop_assert_eq!(size, size.round());
    }

    #[test]
    fn test_font_size_is_monotonic(range in font_range(), a in 0.0f64..3000.0, b in 0.0f64..3000.0) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(range.size_for(narrow) <= range.size_for(wide));
    }

    #[test]
    fn test_font_size_clamps_outside_band(range in font_range(), below in 0.0f64..1000.0) {
        prop_assert_eq!(range.size_for(range.min_width - below), range.size_for(range.min_width));
        prop_assert_eq!(range.size_for(range.max_width + below), range.size_for(range.max_width));
    }

    #[test]
    fn test_distinct_declarations_all_land(
        values in proptest::collection::btree_map("[a-z]{1,8}", "[a-z0-9]{1,8}", 1..8)
    ) {
        let dom = MemoryDom::new();
        let el = dom.create("div").unwrap();
        let styles: StyleMap = values.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        set_style(&dom, el, &styles);
        for (property, value) in &values {
            prop_assert_eq!(dom.style(el, property), Some(value.clone()));
        }
    }
}
