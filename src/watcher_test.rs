use super::*;

fn config(threshold: f64, once: bool) -> WatchConfig {
    WatchConfig { threshold, root_margin: String::new(), once }
}

fn ids(n: u32) -> Vec<ElementId> {
    (0..n).map(ElementId).collect()
}

#[test]
fn empty_watcher_reports_nothing() {
    let mut watcher = ViewportWatcher::new(config(0.5, false));
    watcher.observe(Vec::<ElementId>::new());
    assert!(watcher.is_empty());
    assert!(watcher.report(&[Intersection::new(ElementId(1), 1.0)]).is_empty());
}

#[test]
fn fires_on_upward_crossing_only() {
    let mut watcher = ViewportWatcher::new(config(0.5, false));
    watcher.observe(ids(1));
    let el = ElementId(0);

    assert!(watcher.report(&[Intersection::new(el, 0.3)]).is_empty());
    assert_eq!(watcher.report(&[Intersection::new(el, 0.6)]), vec![el]);
    // Still above: no new transition.
    assert!(watcher.report(&[Intersection::new(el, 0.9)]).is_empty());
}

#[test]
fn repeating_watcher_refires_after_leaving() {
    let mut watcher = ViewportWatcher::new(config(0.5, false));
    watcher.observe(ids(1));
    let el = ElementId(0);

    assert_eq!(watcher.report(&[Intersection::new(el, 1.0)]), vec![el]);
    assert!(watcher.report(&[Intersection::new(el, 0.0)]).is_empty());
    assert_eq!(watcher.report(&[Intersection::new(el, 1.0)]), vec![el]);
}

#[test]
fn once_watcher_retires_element_after_entry() {
    let mut watcher = ViewportWatcher::new(config(0.5, true));
    watcher.observe(ids(1));
    let el = ElementId(0);

    assert_eq!(watcher.report(&[Intersection::new(el, 1.0)]), vec![el]);
    assert!(!watcher.is_watching(el));
    assert!(watcher.report(&[Intersection::new(el, 0.0)]).is_empty());
    assert!(watcher.report(&[Intersection::new(el, 1.0)]).is_empty());
}

#[test]
fn threshold_is_inclusive_with_rounding_tolerance() {
    let mut watcher = ViewportWatcher::new(config(0.1, false));
    watcher.observe(ids(2));
    let entered = watcher.report(&[Intersection::new(ElementId(0), 0.1), Intersection::new(ElementId(1), 0.0995)]);
    assert_eq!(entered, vec![ElementId(0), ElementId(1)]);
}

#[test]
fn non_intersecting_sample_never_counts() {
    let mut watcher = ViewportWatcher::new(config(0.0, false));
    watcher.observe(ids(1));
    let sample = Intersection { element: ElementId(0), ratio: 0.0, is_intersecting: false };
    assert!(watcher.report(&[sample]).is_empty());
    let sample = Intersection { element: ElementId(0), ratio: 0.0, is_intersecting: true };
    assert_eq!(watcher.report(&[sample]), vec![ElementId(0)]);
}

#[test]
fn entries_keep_batch_order() {
    let mut watcher = ViewportWatcher::new(config(0.5, true));
    watcher.observe(ids(3));
    let batch = [
        Intersection::new(ElementId(2), 1.0),
        Intersection::new(ElementId(0), 1.0),
        Intersection::new(ElementId(1), 0.2),
    ];
    assert_eq!(watcher.report(&batch), vec![ElementId(2), ElementId(0)]);
}

#[test]
fn unwatched_elements_are_ignored() {
    let mut watcher = ViewportWatcher::new(config(0.5, false));
    watcher.observe(ids(1));
    watcher.unobserve(ElementId(0));
    assert!(watcher.report(&[Intersection::new(ElementId(0), 1.0)]).is_empty());
}

#[test]
fn independent_watchers_share_elements_without_interference() {
    let mut a = ViewportWatcher::new(config(0.1, true));
    let mut b = ViewportWatcher::new(config(0.5, true));
    a.observe(ids(1));
    b.observe(ids(1));
    let el = ElementId(0);

    assert_eq!(a.report(&[Intersection::new(el, 0.2)]), vec![el]);
    assert!(b.report(&[Intersection::new(el, 0.2)]).is_empty());
    assert_eq!(b.report(&[Intersection::new(el, 0.7)]), vec![el]);
}

#[test]
fn clear_forgets_everything() {
    let mut watcher = ViewportWatcher::new(config(0.5, false));
    watcher.observe(ids(4));
    assert_eq!(watcher.len(), 4);
    watcher.clear();
    assert!(watcher.is_empty());
}

#[test]
fn retired_lists_elements_no_longer_watched() {
    let mut watcher = ViewportWatcher::new(config(0.5, true));
    let [a, b, c] = [ElementId(0), ElementId(1), ElementId(2)];
    watcher.observe([a, b]);

    let batch = [Intersection::new(a, 0.9), Intersection::new(b, 0.2), Intersection::new(c, 1.0)];
    assert_eq!(watcher.report(&batch), vec![a]);
    // `a` entered and was dropped by `once`; `c` was never watched.
    assert_eq!(watcher.retired(&batch), vec![a, c]);
    assert!(watcher.retired(&[Intersection::new(b, 0.0)]).is_empty());
}
