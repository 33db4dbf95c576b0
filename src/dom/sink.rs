//! `PresentationSink` over live DOM elements.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::consts::HANDLE_ATTRIBUTE;
use crate::geom::Rect;
use crate::sink::{ElementId, HandleRegistry, PresentationSink};

/// Registry of DOM elements addressed by [`ElementId`].
///
/// Each registered element carries its handle in `data-ui-handle`, so the
/// reverse lookup is one attribute read. Nodes page scripts have detached
/// are swept out as the registry grows.
pub struct DomSink {
    document: Document,
    elements: HandleRegistry<Element>,
}

fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        log::debug!("dom: {what} failed: {err:?}");
    }
}

impl DomSink {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document, elements: HandleRegistry::new() }
    }

    /// Handle for `el`, registering it on first sight.
    pub fn register(&mut self, el: Element) -> ElementId {
        if let Some(id) = self.id_of(&el) {
            return id;
        }
        if self.elements.sweep_due() {
            let dropped = self.elements.sweep(|known| known.is_connected());
            log::debug!("dom: swept {dropped} detached element(s), {} remain", self.elements.len());
        }
        let id = self.elements.insert(el.clone());
        report(el.set_attribute(HANDLE_ATTRIBUTE, &id.to_attribute()), "tag element");
        id
    }

    /// The handle `el` was registered under. Clones of a tagged node carry
    /// the attribute too, so the stored element must match.
    #[must_use]
    pub fn id_of(&self, el: &Element) -> Option<ElementId> {
        let id = ElementId::from_attribute(&el.get_attribute(HANDLE_ATTRIBUTE)?)?;
        (self.elements.get(id)? == el).then_some(id)
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Register every element matching `selector`, in document order.
    pub fn select_all(&mut self, selector: &str) -> Vec<ElementId> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("dom: bad selector {selector:?}: {err:?}");
                return Vec::new();
            }
        };
        let mut ids = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            let Some(node) = list.item(index) else {
                continue;
            };
            if let Ok(el) = node.dyn_into::<Element>() {
                ids.push(self.register(el));
            }
        }
        ids
    }

    pub fn by_dom_id(&mut self, dom_id: &str) -> Option<ElementId> {
        let el = self.document.get_element_by_id(dom_id)?;
        Some(self.register(el))
    }

    #[must_use]
    pub fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        let rect = self.elements.get(id)?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn html(&self, id: ElementId) -> Option<&HtmlElement> {
        self.elements.get(id)?.dyn_ref::<HtmlElement>()
    }
}

impl PresentationSink for DomSink {
    fn text(&self, el: ElementId) -> Option<String> {
        self.elements.get(el)?.text_content()
    }

    fn set_text(&mut self, el: ElementId, text: &str) {
        if let Some(element) = self.elements.get(el) {
            element.set_text_content(Some(text));
        }
    }

    fn style_property(&self, el: ElementId, name: &str) -> Option<String> {
        match self.html(el)?.style().get_property_value(name) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => None,
        }
    }

    fn set_style_property(&mut self, el: ElementId, name: &str, value: &str) {
        let Some(html) = self.html(el) else {
            return;
        };
        let style = html.style();
        report(style.set_property(name, value), "set style");
        if !value.is_empty() && style.get_property_value(name).is_ok_and(|applied| applied.is_empty()) {
            log::debug!("dom: browser rejected {name}: {value:?}");
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.elements.get(el).is_some_and(|e| e.class_list().contains(class))
    }

    fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(element) = self.elements.get(el) {
            report(element.class_list().add_1(class), "add class");
        }
    }

    fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(element) = self.elements.get(el) {
            report(element.class_list().remove_1(class), "remove class");
        }
    }

    fn set_class_name(&mut self, el: ElementId, class_name: &str) {
        if let Some(element) = self.elements.get(el) {
            element.set_class_name(class_name);
        }
    }

    fn inner_html(&self, el: ElementId) -> Option<String> {
        self.elements.get(el).map(Element::inner_html)
    }

    fn set_inner_html(&mut self, el: ElementId, html: &str) {
        if let Some(element) = self.elements.get(el) {
            element.set_inner_html(html);
        }
    }

    fn create_child(&mut self, parent: ElementId, tag: &str, class: &str) -> Option<ElementId> {
        let parent_el = self.elements.get(parent)?;
        let child = match self.document.create_element(tag) {
            Ok(child) => child,
            Err(err) => {
                log::debug!("dom: create <{tag}> failed: {err:?}");
                return None;
            }
        };
        child.set_class_name(class);
        if let Err(err) = parent_el.append_child(&child) {
            log::debug!("dom: append <{tag}> failed: {err:?}");
            return None;
        }
        Some(self.register(child))
    }

    fn remove_element(&mut self, el: ElementId) {
        if let Some(element) = self.elements.remove(el) {
            element.remove();
        }
    }
}
