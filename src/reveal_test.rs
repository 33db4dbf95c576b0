use super::*;
use crate::sink::MemorySink;

fn setup(n: usize) -> (RevealTrigger, MemorySink, Vec<ElementId>) {
    let mut sink = MemorySink::new();
    let ids = (0..n).map(|_| sink.insert("div")).collect::<Vec<_>>();
    let mut reveal = RevealTrigger::new(&RevealConfig::default());
    reveal.register(&ids, &mut sink);
    (reveal, sink, ids)
}

#[test]
fn register_forces_opacity() {
    let (reveal, sink, ids) = setup(2);
    for el in &ids {
        assert_eq!(sink.style_property(*el, "opacity").as_deref(), Some("1"));
    }
    assert_eq!(reveal.watcher().len(), 2);
}

#[test]
fn entering_at_ten_percent_adds_class() {
    let (mut reveal, mut sink, ids) = setup(1);
    let revealed = reveal.on_intersections(&[Intersection::new(ids[0], 0.1)], &mut sink);
    assert_eq!(revealed, vec![ids[0]]);
    assert!(sink.has_class(ids[0], "animate-in"));
}

#[test]
fn below_threshold_does_not_reveal() {
    let (mut reveal, mut sink, ids) = setup(1);
    assert!(reveal.on_intersections(&[Intersection::new(ids[0], 0.05)], &mut sink).is_empty());
    assert!(!sink.has_class(ids[0], "animate-in"));
}

#[test]
fn class_is_present_exactly_once_after_repeated_events() {
    let (mut reveal, mut sink, ids) = setup(1);
    for ratio in [0.5, 0.0, 0.8, 0.0, 1.0] {
        reveal.on_intersections(&[Intersection::new(ids[0], ratio)], &mut sink);
    }
    let classes = &sink.element(ids[0]).expect("element exists").classes;
    assert_eq!(classes.iter().filter(|c| c.as_str() == "animate-in").count(), 1);
}

#[test]
fn revealed_elements_never_roll_back() {
    let (mut reveal, mut sink, ids) = setup(1);
    reveal.on_intersections(&[Intersection::new(ids[0], 1.0)], &mut sink);
    reveal.on_intersections(&[Intersection::new(ids[0], 0.0)], &mut sink);
    assert!(sink.has_class(ids[0], "animate-in"));
}

#[test]
fn custom_class_is_used() {
    let mut sink = MemorySink::new();
    let el = sink.insert("section");
    let config = RevealConfig { class: "revealed".to_owned(), ..RevealConfig::default() };
    let mut reveal = RevealTrigger::new(&config);
    reveal.register(&[el], &mut sink);
    reveal.on_intersections(&[Intersection::new(el, 1.0)], &mut sink);
    assert!(sink.has_class(el, "revealed"));
}

#[test]
fn removed_element_never_fires() {
    let (mut reveal, mut sink, ids) = setup(1);
    sink.remove_element(ids[0]);
    reveal.on_intersections(&[Intersection::new(ids[0], 1.0)], &mut sink);
    assert!(!sink.has_class(ids[0], "animate-in"));
}

#[test]
fn release_stops_all_reveals() {
    let (mut reveal, mut sink, ids) = setup(3);
    reveal.release();
    assert!(reveal.watcher().is_empty());
    assert!(reveal.on_intersections(&[Intersection::new(ids[1], 1.0)], &mut sink).is_empty());
    assert!(!sink.has_class(ids[1], "animate-in"));
}
