#![allow(clippy::float_cmp)]

use super::*;
use crate::sink::MemorySink;

#[test]
fn geometry_centres_square_on_click() {
    let rect = Rect::new(100.0, 200.0, 120.0, 40.0);
    let g = RippleGeometry::compute(rect, Point::new(130.0, 220.0));
    assert_eq!(g.size, 120.0);
    assert_eq!(g.left, 30.0 - 60.0);
    assert_eq!(g.top, 20.0 - 60.0);
}

#[test]
fn geometry_uses_height_for_tall_buttons() {
    let g = RippleGeometry::compute(Rect::new(0.0, 0.0, 30.0, 90.0), Point::new(15.0, 45.0));
    assert_eq!(g.size, 90.0);
    assert_eq!(g.left, -30.0);
    assert_eq!(g.top, 0.0);
}

#[test]
fn spawn_appends_styled_span() {
    let mut sink = MemorySink::new();
    let button = sink.insert("button");
    let geometry = RippleGeometry { size: 80.0, left: -10.0, top: 5.5 };

    let ripple = spawn(&mut sink, button, geometry, 600).expect("button exists");
    assert_eq!(ripple.remove_after_ms, 600);
    assert_eq!(sink.children(button), vec![ripple.element]);

    let span = sink.element(ripple.element).expect("span exists");
    assert_eq!(span.tag, "span");
    assert!(span.classes.contains("ripple-effect"));
    assert_eq!(span.style.get("width").map(String::as_str), Some("80px"));
    assert_eq!(span.style.get("height").map(String::as_str), Some("80px"));
    assert_eq!(span.style.get("left").map(String::as_str), Some("-10px"));
    assert_eq!(span.style.get("top").map(String::as_str), Some("5.5px"));
}

#[test]
fn remove_detaches_span() {
    let mut sink = MemorySink::new();
    let button = sink.insert("button");
    let geometry = RippleGeometry::compute(Rect::new(0.0, 0.0, 10.0, 10.0), Point::new(5.0, 5.0));
    let ripple = spawn(&mut sink, button, geometry, 600).expect("button exists");
    ripple.remove(&mut sink);
    assert!(sink.children(button).is_empty());
}

#[test]
fn spawn_on_missing_button_is_none() {
    let mut sink = MemorySink::new();
    let geometry = RippleGeometry { size: 1.0, left: 0.0, top: 0.0 };
    assert!(spawn(&mut sink, ElementId(3), geometry, 600).is_none());
}
