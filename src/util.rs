//! Utility functions for CSS property names and numeric formatting.

/// Normalises a style property name to the kebab-case form CSSOM expects.
///
/// DOM-style camelCase names (`fontSize`, `backgroundColor`) are converted,
/// vendor prefixes gain their leading dash (`webkitTransition` becomes
/// `-webkit-transition`), and `cssFloat` maps to `float`. Names that are
/// already kebab-case and custom properties (`--accent`) pass through
/// unchanged.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::css_property_name;
///
/// assert_eq!(css_property_name("fontSize"), "font-size");
/// assert_eq!(css_property_name("font-size"), "font-size");
/// assert_eq!(css_property_name("--accent"), "--accent");
/// assert_eq!(css_property_name("webkitTransition"), "-webkit-transition");
/// ```
pub fn css_property_name(name: &str) -> String {
    if name.starts_with("--") || !name.chars().any(|c| c.is_ascii_uppercase()) {
        return name.to_string();
    }
    if name == "cssFloat" {
        return "float".to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    if ["webkit", "moz", "ms", "o"]
        .iter()
        .any(|prefix| vendor_prefixed(name, prefix))
    {
        out.push('-');
    }
    for (i, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn vendor_prefixed(name: &str, prefix: &str) -> bool {
    name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
        && name[prefix.len()..].starts_with(|c: char| c.is_ascii_uppercase())
}

/// Rounds half-way values towards positive infinity, as `Math.round` does.
///
/// `f64::round` rounds halves away from zero, which differs for negative
/// inputs (`-2.5` gives `-3.0` rather than `-2.0`).
pub fn round_half_up(value: f64) -> f64 {
    // Adding 0.5 before flooring rounds up just below a half, since the sum
    // itself can round.
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
