//! Click ripple: a transient circle spawned at the click point inside a button.

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

use crate::consts::RIPPLE_CLASS;
use crate::geom::{Point, Rect, px};
use crate::sink::{ElementId, PresentationSink};

/// Size and offset of a ripple relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// A square covering the button's longer side, centred on the click.
    #[must_use]
    pub fn compute(button: Rect, click: Point) -> Self {
        let size = button.max_side();
        let local = button.to_local(click);
        Self { size, left: local.x - size / 2.0, top: local.y - size / 2.0 }
    }
}

/// A spawned ripple awaiting removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub element: ElementId,
    pub remove_after_ms: u32,
}

impl Ripple {
    pub fn remove(self, sink: &mut impl PresentationSink) {
        sink.remove_element(self.element);
    }
}

/// Append a ripple span to `button`. Returns `None` if the button is gone.
pub fn spawn(
    sink: &mut impl PresentationSink,
    button: ElementId,
    geometry: RippleGeometry,
    lifetime_ms: u32,
) -> Option<Ripple> {
    let element = sink.create_child(button, "span", RIPPLE_CLASS)?;
    let size = px(geometry.size);
    sink.set_style_property(element, "width", &size);
    sink.set_style_property(element, "height", &size);
    sink.set_style_property(element, "left", &px(geometry.left));
    sink.set_style_property(element, "top", &px(geometry.top));
    Some(Ripple { element, remove_after_ms: lifetime_ms })
}
