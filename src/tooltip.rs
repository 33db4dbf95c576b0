//! Page-wide tooltip that follows the pointer over `[data-tooltip]` elements.
//!
//! A single tooltip element is created at install time and shared by every
//! hover target. Overlapping hovers simply overwrite its text and position.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use crate::config::TooltipConfig;
use crate::consts::TOOLTIP_CLASS;
use crate::geom::{Point, px};
use crate::sink::{ElementId, PresentationSink};

const BASE_STYLE: [(&str, &str); 9] = [
    ("position", "absolute"),
    ("z-index", "9999"),
    ("padding", "8px 12px"),
    ("border-radius", "8px"),
    ("font-size", "0.875rem"),
    ("pointer-events", "none"),
    ("opacity", "0"),
    ("transition", "opacity 0.3s ease"),
    ("max-width", "200px"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    element: ElementId,
    offset_x: f64,
    offset_y: f64,
}

impl Tooltip {
    /// Create the tooltip element under `body`.
    pub fn install(sink: &mut impl PresentationSink, body: ElementId, config: &TooltipConfig) -> Option<Self> {
        let element = sink.create_child(body, "div", TOOLTIP_CLASS)?;
        for (name, value) in BASE_STYLE {
            sink.set_style_property(element, name, value);
        }
        Some(Self { element, offset_x: config.offset_x, offset_y: config.offset_y })
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Show `text` next to the pointer.
    pub fn show(&self, sink: &mut impl PresentationSink, text: &str, pointer: Point) {
        sink.set_text(self.element, text);
        sink.set_style_property(self.element, "opacity", "1");
        self.follow(sink, pointer);
    }

    pub fn follow(&self, sink: &mut impl PresentationSink, pointer: Point) {
        let at = pointer.offset(self.offset_x, self.offset_y);
        sink.set_style_property(self.element, "left", &px(at.x));
        sink.set_style_property(self.element, "top", &px(at.y));
    }

    pub fn hide(&self, sink: &mut impl PresentationSink) {
        sink.set_style_property(self.element, "opacity", "0");
    }
}
