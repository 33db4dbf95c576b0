//! Presentation sink: the only way page logic touches the document.
//!
//! Components never hold DOM nodes. They hold [`ElementId`] handles and
//! mutate through a [`PresentationSink`], which the browser layer implements
//! over `web_sys::Element` and tests implement with [`MemorySink`].
//!
//! Every operation on a handle the sink does not know (never registered, or
//! removed since) is a silent no-op. Reads on such handles return `None` or
//! `false`.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Opaque handle to a page element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    /// Parse a handle written by [`ElementId::to_attribute`].
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim().parse::<u32>() {
            Ok(raw) => Some(Self(raw)),
            Err(_) => None,
        }
    }

    /// The handle as stored in a `data-` attribute.
    #[must_use]
    pub fn to_attribute(self) -> String {
        self.0.to_string()
    }
}

/// Handle table for host-side element records.
///
/// Handles are never reused. Hosts whose records can outlive the document
/// (detached nodes) call [`HandleRegistry::sweep`] when [`HandleRegistry::sweep_due`]
/// says so; the next sweep is due once the table doubles again.
#[derive(Debug)]
pub struct HandleRegistry<T> {
    entries: HashMap<ElementId, T>,
    next_id: u32,
    sweep_at: usize,
}

const MIN_SWEEP_AT: usize = 256;

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self { entries: HashMap::new(), next_id: 0, sweep_at: MIN_SWEEP_AT }
    }
}

impl<T> HandleRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, value: T) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, value);
        id
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    pub fn remove(&mut self, id: ElementId) -> Option<T> {
        self.entries.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &T)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn sweep_due(&self) -> bool {
        self.entries.len() >= self.sweep_at
    }

    /// Drop every record `keep` rejects. Returns how many were dropped.
    pub fn sweep(&mut self, mut keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, value| keep(value));
        self.sweep_at = (self.entries.len() * 2).max(MIN_SWEEP_AT);
        before - self.entries.len()
    }
}

/// Mutations and reads the page logic needs from a rendering surface.
pub trait PresentationSink {
    /// The element's text content.
    fn text(&self, el: ElementId) -> Option<String>;
    fn set_text(&mut self, el: ElementId, text: &str);

    /// An inline style property, e.g. `width`. Empty values read as `None`.
    fn style_property(&self, el: ElementId, name: &str) -> Option<String>;
    fn set_style_property(&mut self, el: ElementId, name: &str, value: &str);

    fn has_class(&self, el: ElementId, class: &str) -> bool;
    fn add_class(&mut self, el: ElementId, class: &str);
    fn remove_class(&mut self, el: ElementId, class: &str);

    /// Replace the whole class attribute.
    fn set_class_name(&mut self, el: ElementId, class_name: &str);

    fn inner_html(&self, el: ElementId) -> Option<String>;
    fn set_inner_html(&mut self, el: ElementId, html: &str);

    /// Append a new `<tag class="class">` under `parent`.
    fn create_child(&mut self, parent: ElementId, tag: &str, class: &str) -> Option<ElementId>;

    /// Detach the element from the document and forget its handle.
    fn remove_element(&mut self, el: ElementId);
}

/// Escape text for safe insertion into HTML.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Drop markup tags, keeping only character data. Entities are left as-is.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// One element held by a [`MemorySink`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    pub tag: String,
    pub parent: Option<ElementId>,
    pub text: String,
    pub html: String,
    pub classes: BTreeSet<String>,
    pub style: BTreeMap<String, String>,
}

/// In-memory document for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    elements: HandleRegistry<MemoryElement>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached element with the given tag.
    pub fn insert(&mut self, tag: &str) -> ElementId {
        self.elements.insert(MemoryElement { tag: tag.to_owned(), ..MemoryElement::default() })
    }

    /// Add an element whose text content is `text`.
    pub fn insert_with_text(&mut self, tag: &str, text: &str) -> ElementId {
        let id = self.insert(tag);
        self.set_text(id, text);
        id
    }

    #[must_use]
    pub fn element(&self, el: ElementId) -> Option<&MemoryElement> {
        self.elements.get(el)
    }

    /// Child handles of `parent`, in creation order.
    #[must_use]
    pub fn children(&self, parent: ElementId) -> Vec<ElementId> {
        let mut ids = self
            .elements
            .iter()
            .filter(|(_, e)| e.parent == Some(parent))
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    #[must_use]
    pub fn contains(&self, el: ElementId) -> bool {
        self.elements.contains(el)
    }
}

impl PresentationSink for MemorySink {
    fn text(&self, el: ElementId) -> Option<String> {
        self.elements.get(el).map(|e| e.text.clone())
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(e) = self.elements.get_mut(el) {
            e.text = text.to_owned();
            e.html = escape_html(text);
        }
    }

    fn style_property(&self, el: ElementId, name: &str) -> Option<String> {
        self.elements
            .get(el)?
            .style
            .get(name)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    fn set_style_property(&mut self, el: ElementId, name: &str, value: &str) {
        if let Some(e) = self.elements.get_mut(el) {
            e.style.insert(name.to_owned(), value.to_owned());
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.elements.get(el).is_some_and(|e| e.classes.contains(class))
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(e) = self.elements.get_mut(el) {
            e.classes.insert(class.to_owned());
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(e) = self.elements.get_mut(el) {
            e.classes.remove(class);
        }
    }

    fn set_class_name(&mut self, el: ElementId, class_name: &str) {
        if let Some(e) = self.elements.get_mut(el) {
            e.classes = class_name.split_whitespace().map(str::to_owned).collect();
        }
    }

    fn inner_html(&self, el: ElementId) -> Option<String> {
        self.elements.get(el).map(|e| e.html.clone())
    }

    fn set_inner_html(&mut self, el: ElementId, html: &str) {
        if let Some(e) = self.elements.get_mut(el) {
            e.html = html.to_owned();
            e.text = strip_tags(html);
        }
    }

    fn create_child(&mut self, parent: ElementId, tag: &str, class: &str) -> Option<ElementId> {
        if !self.elements.contains(parent) {
            return None;
        }
        let id = self.insert(tag);
        if let Some(e) = self.elements.get_mut(id) {
            e.parent = Some(parent);
            e.classes = class.split_whitespace().map(str::to_owned).collect();
        }
        Some(id)
    }

    fn remove_element(&mut self, el: ElementId) {
        self.elements.remove(el);
    }
}
