//! Class list helpers.

use crate::platform::Platform;
use crate::target::{resolve, Target};

/// Adds `class_name` to the target's class list.
///
/// Does nothing if the target does not resolve.
pub fn add_class<'a, P: Platform>(platform: &P, target: impl Into<Target<'a, P>>, class_name: &str) {
    if let Some(element) = resolve(platform, target.into()) {
        platform.add_class(&element, class_name);
    }
}

/// Removes `class_name` from the target's class list.
pub fn remove_class<'a, P: Platform>(
    platform: &P,
    target: impl Into<Target<'a, P>>,
    class_name: &str,
) {
    if let Some(element) = resolve(platform, target.into()) {
        platform.remove_class(&element, class_name);
    }
}

/// Adds `class_name` if absent, removes it if present.
pub fn toggle_class<'a, P: Platform>(
    platform: &P,
    target: impl Into<Target<'a, P>>,
    class_name: &str,
) {
    if let Some(element) = resolve(platform, target.into()) {
        platform.toggle_class(&element, class_name);
    }
}
