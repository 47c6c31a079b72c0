//! In-memory document with a manually driven clock.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{Platform, TimerHandle};

/// Handle to an element inside a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Any value a host might hand to a helper: an element or a text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryNode {
    Element(NodeId),
    Text(String),
}

#[derive(Debug)]
struct ElementData {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: IndexMap<String, String>,
    attached: bool,
}

struct Timer {
    handle: i32,
    due: u64,
    callback: Box<dyn FnOnce()>,
}

type Listener = Rc<RefCell<Box<dyn FnMut()>>>;

struct Inner {
    has_document: bool,
    elements: Vec<ElementData>,
    viewport_width: f64,
    prefers_dark: Option<bool>,
    now: u64,
    next_handle: i32,
    timers_enabled: bool,
    timers: Vec<Timer>,
    frames: Vec<Box<dyn FnOnce()>>,
    resize_listeners: Vec<Listener>,
}

impl Inner {
    fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.elements.get(id.0)
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.elements.get_mut(id.0)
    }

    fn take_due(&mut self, until: u64) -> Option<Timer> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.handle))
            .map(|(i, _)| i)?;
        Some(self.timers.remove(index))
    }
}

/// A headless [`Platform`]: a flat document of elements plus a timer queue
/// that only moves when told to.
///
/// Elements are created from a compact `tag#id.class` form. The root `<html>`
/// element always exists. Selectors support comma-separated compound
/// selectors made of a tag (or `*`), `#id` and `.class` parts; anything else
/// is treated as invalid and matches nothing.
///
/// # Example
///
/// ```rust
/// use outstanding_dom::{add_class, MemoryDom};
///
/// let dom = MemoryDom::new();
/// let card = dom.create("div#hero.card").unwrap();
/// add_class(&dom, "#hero", "active");
/// assert!(dom.has_class(card, "active"));
/// ```
#[derive(Clone)]
pub struct MemoryDom {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryDom {
    /// Creates a document holding only the root element, with a 1024px viewport.
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Creates a platform with no document context.
    pub fn detached() -> Self {
        Self::build(false)
    }

    fn build(has_document: bool) -> Self {
        let root = ElementData {
            tag: "html".to_string(),
            id: None,
            classes: Vec::new(),
            style: IndexMap::new(),
            attached: true,
        };
        Self {
            inner: Rc::new(RefCell::new(Inner {
                has_document,
                elements: vec![root],
                viewport_width: 1024.0,
                prefers_dark: None,
                now: 0,
                next_handle: 1,
                timers_enabled: true,
                timers: Vec::new(),
                frames: Vec::new(),
                resize_listeners: Vec::new(),
            })),
        }
    }

    /// The root `<html>` element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends an element described by `tag#id.class.class`.
    ///
    /// The tag may be omitted (`.card` creates a `div`). Returns `None` when
    /// the description is not a valid compound selector.
    pub fn create(&self, description: &str) -> Option<NodeId> {
        let compound = Compound::parse(description)?;
        let mut inner = self.inner.borrow_mut();
        let id = NodeId(inner.elements.len());
        inner.elements.push(ElementData {
            tag: compound.tag.unwrap_or_else(|| "div".to_string()),
            id: compound.ids.into_iter().next(),
            classes: compound.classes,
            style: IndexMap::new(),
            attached: true,
        });
        Some(id)
    }

    /// Removes an element from the document. Its handle stays usable but
    /// selectors no longer find it.
    pub fn detach(&self, element: NodeId) {
        if let Some(data) = self.inner.borrow_mut().element_mut(element) {
            data.attached = false;
        }
    }

    /// Inline style value of `property` (kebab-case), if set.
    pub fn style(&self, element: NodeId, property: &str) -> Option<String> {
        let inner = self.inner.borrow();
        inner.element(element)?.style.get(property).cloned()
    }

    /// The element's class list, in insertion order.
    pub fn classes(&self, element: NodeId) -> Vec<String> {
        let inner = self.inner.borrow();
        inner
            .element(element)
            .map(|data| data.classes.clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, element: NodeId, class_name: &str) -> bool {
        let inner = self.inner.borrow();
        inner
            .element(element)
            .is_some_and(|data| data.classes.iter().any(|c| c == class_name))
    }

    /// Milliseconds elapsed on the manual clock.
    pub fn now(&self) -> u64 {
        self.inner.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    /// Sets the viewport width without dispatching `resize`.
    pub fn set_viewport_width(&self, width: f64) {
        self.inner.borrow_mut().viewport_width = width;
    }

    /// Sets the answer given to `(prefers-color-scheme: dark)`.
    pub fn set_prefers_dark(&self, prefers_dark: Option<bool>) {
        self.inner.borrow_mut().prefers_dark = prefers_dark;
    }

    /// Discards every queued animation frame without running it, as a host
    /// does for a hidden tab. Returns how many were dropped.
    pub fn drop_frames(&self) -> usize {
        let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
        frames.len()
    }

    /// When disabled, `set_timeout` drops its callback and returns `None`.
    pub fn set_timers_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().timers_enabled = enabled;
    }

    /// Changes the viewport width and dispatches `resize` to every listener.
    pub fn resize(&self, width: f64) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.viewport_width = width;
            inner.resize_listeners.clone()
        };
        for listener in listeners {
            let mut callback = listener.borrow_mut();
            (*callback)();
        }
    }

    /// Runs the animation frames queued so far. Frames requested while
    /// flushing wait for the next flush.
    pub fn flush_frames(&self) {
        let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
        for frame in frames {
            frame();
        }
    }

    /// Moves the clock forward by `ms`, running every timer that comes due,
    /// in due order.
    ///
    /// Queued animation frames run once at the start and once after each
    /// timer. A frame that requests another frame is not run again until the
    /// next of those points, so a `requestAnimationFrame` loop cannot stall
    /// the clock.
    pub fn advance(&self, ms: u64) {
        let until = self.inner.borrow().now + ms;
        self.flush_frames();
        loop {
            let Some(timer) = self.inner.borrow_mut().take_due(until) else {
                break;
            };
            self.inner.borrow_mut().now = timer.due;
            (timer.callback)();
            self.flush_frames();
        }
        self.inner.borrow_mut().now = until;
    }

    fn matching(&self, selector: &str) -> Option<Vec<NodeId>> {
        let list = parse_selector_list(selector)?;
        let inner = self.inner.borrow();
        let matches = inner
            .elements
            .iter()
            .enumerate()
            .filter(|(_, data)| data.attached)
            .filter(|(_, data)| list.iter().any(|c| c.matches(data)))
            .map(|(i, _)| NodeId(i))
            .collect();
        Some(matches)
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryDom")
            .field("has_document", &inner.has_document)
            .field("elements", &inner.elements.len())
            .field("now", &inner.now)
            .field("timers", &inner.timers.len())
            .field("frames", &inner.frames.len())
            .finish()
    }
}

fn valid_token(class_name: &str) -> bool {
    !class_name.is_empty() && !class_name.chars().any(char::is_whitespace)
}

impl Platform for MemoryDom {
    type Element = NodeId;
    type Node = MemoryNode;

    fn has_document(&self) -> bool {
        self.inner.borrow().has_document
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        if !self.has_document() {
            return None;
        }
        self.matching(selector)?.into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        if !self.has_document() {
            return Vec::new();
        }
        self.matching(selector).unwrap_or_default()
    }

    fn element_of(&self, node: &MemoryNode) -> Option<NodeId> {
        match node {
            MemoryNode::Element(id) if id.0 < self.inner.borrow().elements.len() => Some(*id),
            _ => None,
        }
    }

    fn document_element(&self) -> Option<NodeId> {
        self.has_document().then_some(self.root())
    }

    fn add_class(&self, element: &NodeId, class_name: &str) {
        if !valid_token(class_name) {
            tracing::warn!(class_name, "invalid class token");
            return;
        }
        if let Some(data) = self.inner.borrow_mut().element_mut(*element) {
            if !data.classes.iter().any(|c| c == class_name) {
                data.classes.push(class_name.to_string());
            }
        }
    }

    fn remove_class(&self, element: &NodeId, class_name: &str) {
        if !valid_token(class_name) {
            tracing::warn!(class_name, "invalid class token");
            return;
        }
        if let Some(data) = self.inner.borrow_mut().element_mut(*element) {
            data.classes.retain(|c| c != class_name);
        }
    }

    fn toggle_class(&self, element: &NodeId, class_name: &str) {
        if !valid_token(class_name) {
            tracing::warn!(class_name, "invalid class token");
            return;
        }
        if let Some(data) = self.inner.borrow_mut().element_mut(*element) {
            match data.classes.iter().position(|c| c == class_name) {
                Some(index) => {
                    data.classes.remove(index);
                }
                None => data.classes.push(class_name.to_string()),
            }
        }
    }

    fn set_style_property(&self, element: &NodeId, property: &str, value: &str) {
        if let Some(data) = self.inner.borrow_mut().element_mut(*element) {
            if value.is_empty() {
                data.style.shift_remove(property);
            } else {
                data.style.insert(property.to_string(), value.to_string());
            }
        }
    }

    fn request_animation_frame(&self, callback: Box<dyn FnOnce()>) {
        self.inner.borrow_mut().frames.push(callback);
    }

    fn set_timeout(&self, callback: Box<dyn FnOnce()>, ms: u32) -> Option<TimerHandle> {
        if !self.inner.borrow().timers_enabled {
            return None;
        }
        let mut inner = self.inner.borrow_mut();
        let handle = inner.next_handle;
        inner.next_handle += 1;
        let due = inner.now + u64::from(ms);
        inner.timers.push(Timer {
            handle,
            due,
            callback,
        });
        Some(TimerHandle(handle))
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        let cleared = {
            let mut inner = self.inner.borrow_mut();
            let index = inner.timers.iter().position(|t| t.handle == handle.0);
            index.map(|i| inner.timers.remove(i))
        };
        drop(cleared);
    }

    fn viewport_width(&self) -> Option<f64> {
        let inner = self.inner.borrow();
        inner.has_document.then_some(inner.viewport_width)
    }

    fn on_resize(&self, callback: Box<dyn FnMut()>) {
        self.inner
            .borrow_mut()
            .resize_listeners
            .push(Rc::new(RefCell::new(callback)));
    }

    fn prefers_dark_scheme(&self) -> Option<bool> {
        self.inner.borrow().prefers_dark
    }
}

/// One compound selector: `tag#id.class`.
#[derive(Debug, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(input: &str) -> Option<Self> {
        let mut compound = Compound::default();
        let mut rest = input.trim();
        if rest.is_empty() {
            return None;
        }

        if let Some(after) = rest.strip_prefix('*') {
            rest = after;
        } else {
            let (tag, after) = split_ident(rest);
            if !tag.is_empty() {
                compound.tag = Some(tag.to_ascii_lowercase());
            }
            rest = after;
        }

        while let Some(marker) = rest.chars().next() {
            let (ident, after) = split_ident(&rest[marker.len_utf8()..]);
            if ident.is_empty() {
                return None;
            }
            match marker {
                '.' => compound.classes.push(ident.to_string()),
                '#' => compound.ids.push(ident.to_string()),
                _ => return None,
            }
            rest = after;
        }
        Some(compound)
    }

    fn matches(&self, data: &ElementData) -> bool {
        self.tag.as_ref().map_or(true, |tag| *tag == data.tag)
            && self.ids.iter().all(|id| data.id.as_ref() == Some(id))
            && self.classes.iter().all(|c| data.classes.contains(c))
    }
}

fn split_ident(input: &str) -> (&str, &str) {
    let end = input
        .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(input.len());
    input.split_at(end)
}

fn parse_selector_list(selector: &str) -> Option<Vec<Compound>> {
    selector.split(',').map(Compound::parse).collect()
}
