//! Small pointer, focus and navigation touches.

#[cfg(test)]
#[path = "interactions_test.rs"]
mod interactions_test;

use crate::consts::{ACTIVE_CLASS, FOCUSED_CLASS};
use crate::sink::{ElementId, PresentationSink};

const LIFTED: &str = "translateY(-8px) scale(1.02)";
const RESTING: &str = "translateY(0) scale(1)";

/// Lift a card while the pointer is over it.
pub fn hover_enter(sink: &mut impl PresentationSink, card: ElementId) {
    sink.set_style_property(card, "transform", LIFTED);
}

pub fn hover_leave(sink: &mut impl PresentationSink, card: ElementId) {
    sink.set_style_property(card, "transform", RESTING);
}

/// Highlight the wrapper of a focused form control.
pub fn focus(sink: &mut impl PresentationSink, parent: Option<ElementId>) {
    if let Some(parent) = parent {
        sink.add_class(parent, FOCUSED_CLASS);
    }
}

pub fn blur(sink: &mut impl PresentationSink, parent: Option<ElementId>) {
    if let Some(parent) = parent {
        sink.remove_class(parent, FOCUSED_CLASS);
    }
}

/// Force elements visible.
pub fn ensure_visible(sink: &mut impl PresentationSink, elements: &[ElementId]) {
    for &el in elements {
        sink.set_style_property(el, "opacity", "1");
    }
}

/// Mark nav links whose `href` equals the current path. Returns the marked links.
pub fn mark_active_links(
    sink: &mut impl PresentationSink,
    links: &[(ElementId, Option<String>)],
    current_path: &str,
) -> Vec<ElementId> {
    let mut marked = Vec::new();
    for (el, href) in links {
        if href.as_deref() == Some(current_path) {
            sink.add_class(*el, ACTIVE_CLASS);
            marked.push(*el);
        }
    }
    marked
}

/// The element id an in-page anchor points to, e.g. `#impact` → `impact`.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
