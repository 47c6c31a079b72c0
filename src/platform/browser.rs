//! `web-sys` backed platform for code running in a browser.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement, Window};

use super::{Platform, TimerHandle};

type TimeoutClosure = Closure<dyn FnMut()>;

/// Timeout callbacks handed to `setTimeout`, kept alive until they fire or
/// are cleared.
#[derive(Default)]
struct Timeouts {
    pending: HashMap<i32, TimeoutClosure>,
    // A closure cannot be freed while it runs; the last one to fire is parked
    // here until the next one replaces it.
    spent: Option<TimeoutClosure>,
}

impl Timeouts {
    fn retire(&mut self, id: i32) {
        if let Some(closure) = self.pending.remove(&id) {
            self.spent = Some(closure);
        }
    }
}

/// The live browser: `window`, `document` and their timers.
///
/// The window and document are looked up on every call, so the platform is
/// usable from workers and non-browser wasm hosts, where every helper simply
/// does nothing.
///
/// Clones share the pending timeouts. Keep a clone alive while timeouts it
/// scheduled are pending; dropping the last one frees their callbacks.
#[derive(Clone, Default)]
pub struct BrowserPlatform {
    timeouts: Rc<RefCell<Timeouts>>,
}

impl fmt::Debug for BrowserPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrowserPlatform")
            .field("pending_timeouts", &self.timeouts.borrow().pending.len())
            .finish()
    }
}

impl BrowserPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    fn window(&self) -> Option<Window> {
        web_sys::window()
    }

    fn document(&self) -> Option<Document> {
        self.window()?.document()
    }
}

fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

fn absorb(result: Result<(), JsValue>, operation: &'static str) {
    if let Err(err) = result {
        tracing::warn!(operation, error = ?err, "DOM call failed");
    }
}

impl Platform for BrowserPlatform {
    type Element = Element;
    type Node = JsValue;

    fn has_document(&self) -> bool {
        self.document().is_some()
    }

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document()?.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "invalid selector");
                None
            }
        }
    }

    fn query_selector_all(&self, selector: &str) -> Vec<Element> {
        let Some(document) = self.document() else {
            return Vec::new();
        };
        let list = match document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(selector, error = ?err, "invalid selector");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_of(&self, node: &JsValue) -> Option<Element> {
        node.dyn_ref::<Element>().cloned()
    }

    fn document_element(&self) -> Option<Element> {
        self.document()?.document_element()
    }

    fn add_class(&self, element: &Element, class_name: &str) {
        absorb(element.class_list().add_1(class_name), "classList.add");
    }

    fn remove_class(&self, element: &Element, class_name: &str) {
        absorb(element.class_list().remove_1(class_name), "classList.remove");
    }

    fn toggle_class(&self, element: &Element, class_name: &str) {
        absorb(
            element.class_list().toggle(class_name).map(|_| ()),
            "classList.toggle",
        );
    }

    fn set_style_property(&self, element: &Element, property: &str, value: &str) {
        let Some(style) = inline_style(element) else {
            tracing::trace!(property, "element has no inline style");
            return;
        };
        if value.is_empty() {
            absorb(
                style.remove_property(property).map(|_| ()),
                "style.removeProperty",
            );
        } else {
            absorb(style.set_property(property, value), "style.setProperty");
        }
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(window) = self.window() else {
            return;
        };
        let closure = Closure::once_into_js(move || callback());
        if let Err(err) = window.request_animation_frame(closure.unchecked_ref()) {
            tracing::warn!(error = ?err, "requestAnimationFrame failed");
        }
    }

    fn set_timeout(&self, callback: Box<dyn FnOnce()>, ms: u32) -> Option<TimerHandle> {
        let window = self.window()?;
        let id = Rc::new(Cell::new(0));
        let fired = Rc::clone(&id);
        let timeouts: Weak<RefCell<Timeouts>> = Rc::downgrade(&self.timeouts);
        let mut callback = Some(callback);
        let closure: TimeoutClosure = Closure::wrap(Box::new(move || {
            if let Some(timeouts) = timeouts.upgrade() {
                timeouts.borrow_mut().retire(fired.get());
            }
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(handle) => {
                id.set(handle);
                self.timeouts.borrow_mut().pending.insert(handle, closure);
                Some(TimerHandle(handle))
            }
            Err(err) => {
                tracing::warn!(error = ?err, "setTimeout failed");
                None
            }
        }
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        if let Some(window) = self.window() {
            window.clear_timeout_with_handle(handle.0);
        }
        let cleared = self.timeouts.borrow_mut().pending.remove(&handle.0);
        drop(cleared);
    }

    fn viewport_width(&self) -> Option<f64> {
        self.window()?.inner_width().ok()?.as_f64()
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) {
        let Some(window) = self.window() else {
            return;
        };
        let closure = Closure::wrap(callback);
        absorb(
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref()),
            "addEventListener",
        );
        closure.forget();
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        let query = self
            .window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()??;
        Some(query.matches())
    }
}
