#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// An element's bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Convert a viewport point into coordinates relative to this box.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        Point { x: point.x - self.left, y: point.y - self.top }
    }

    /// The longer of the two sides.
    #[must_use]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Format a length in CSS pixels, e.g. `12.5px`.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
