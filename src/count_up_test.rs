use super::*;
use crate::sink::MemorySink;

fn shown(sink: &MemorySink, el: ElementId) -> String {
    sink.text(el).unwrap_or_default()
}

fn animator() -> CountUpAnimator {
    CountUpAnimator::new(&CountUpConfig::default(), "animated")
}

// --- parse_target ---

#[test]
fn parse_target_reads_leading_integer() {
    assert_eq!(parse_target("150"), 150);
    assert_eq!(parse_target("  42 kg"), 42);
    assert_eq!(parse_target("1,234"), 1);
    assert_eq!(parse_target("3.9"), 3);
    assert_eq!(parse_target("-25"), -25);
    assert_eq!(parse_target("+7"), 7);
}

#[test]
fn parse_target_defaults_to_zero() {
    assert_eq!(parse_target("N/A"), 0);
    assert_eq!(parse_target(""), 0);
    assert_eq!(parse_target("-"), 0);
    assert_eq!(parse_target("$100"), 0);
}

// --- CountUp ---

#[test]
fn count_shows_zero_at_start_and_target_at_full_duration() {
    let mut sink = MemorySink::new();
    let el = sink.insert_with_text("span", "150");
    let mut count = CountUp::new(el, 150, 2000, 16);

    assert_eq!(count.start(&mut sink), Tick::Continue);
    assert_eq!(shown(&sink, el), "0");

    // 2000 ms / 16 ms = 125 ticks.
    let mut ticks = 0;
    let mut last = 0;
    loop {
        let outcome = count.tick(&mut sink);
        ticks += 1;
        let value = parse_target(&shown(&sink, el));
        assert!(value >= last, "display went backwards: {value} < {last}");
        assert!(value <= 150, "display overshot: {value}");
        last = value;
        if outcome == Tick::Done {
            break;
        }
        assert!(ticks < 1000, "count never finished");
    }
    assert_eq!(ticks, 125);
    assert_eq!(shown(&sink, el), "150");
    assert!(count.is_done());
}

#[test]
fn count_truncates_intermediate_values() {
    let mut sink = MemorySink::new();
    let el = sink.insert("span");
    let mut count = CountUp::new(el, 150, 2000, 16);
    count.start(&mut sink);
    count.tick(&mut sink);
    assert_eq!(shown(&sink, el), "1");
    count.tick(&mut sink);
    assert_eq!(shown(&sink, el), "2");
    count.tick(&mut sink);
    assert_eq!(shown(&sink, el), "3");
}

#[test]
fn uneven_duration_finishes_on_next_whole_tick() {
    let mut sink = MemorySink::new();
    let el = sink.insert("span");
    // 1000 / 16 = 62.5 steps.
    let mut count = CountUp::new(el, 10, 1000, 16);
    count.start(&mut sink);
    let mut ticks = 0;
    while count.tick(&mut sink) == Tick::Continue {
        ticks += 1;
    }
    assert_eq!(ticks + 1, 63);
    assert_eq!(shown(&sink, el), "10");
}

#[test]
fn zero_target_completes_immediately() {
    let mut sink = MemorySink::new();
    let el = sink.insert("span");
    let count = CountUp::new(el, 0, 2000, 16);
    assert!(count.is_done());
    assert_eq!(count.start(&mut sink), Tick::Done);
    assert_eq!(shown(&sink, el), "0");
}

#[test]
fn zero_duration_shows_target_immediately() {
    let mut sink = MemorySink::new();
    let el = sink.insert("span");
    let count = CountUp::new(el, 80, 0, 16);
    assert_eq!(count.start(&mut sink), Tick::Done);
    assert_eq!(shown(&sink, el), "80");
}

#[test]
fn negative_target_counts_downward() {
    let mut sink = MemorySink::new();
    let el = sink.insert("span");
    let mut count = CountUp::new(el, -30, 160, 16);
    count.start(&mut sink);
    let mut last = 0;
    while count.tick(&mut sink) == Tick::Continue {
        let value = parse_target(&shown(&sink, el));
        assert!(value <= last);
        assert!(value >= -30);
        last = value;
    }
    assert_eq!(shown(&sink, el), "-30");
}

#[test]
fn finished_count_ignores_further_ticks() {
    let mut sink = MemorySink::new();
    let el = sink.insert("span");
    let mut count = CountUp::new(el, 5, 16, 16);
    count.start(&mut sink);
    assert_eq!(count.tick(&mut sink), Tick::Done);
    sink.set_text(el, "edited");
    assert_eq!(count.tick(&mut sink), Tick::Done);
    assert_eq!(shown(&sink, el), "edited");
}

// --- CountUpAnimator ---

#[test]
fn animator_walks_pending_animating_done() {
    let mut sink = MemorySink::new();
    let el = sink.insert_with_text("span", "150");
    let mut counts = animator();
    counts.register(&[el]);
    assert_eq!(counts.state(el), Some(CountState::Pending));

    let started = counts.on_intersections(&[Intersection::new(el, 0.6)], &mut sink);
    assert_eq!(started, vec![el]);
    assert_eq!(counts.state(el), Some(CountState::Animating));
    assert!(sink.has_class(el, "animated"));
    assert_eq!(shown(&sink, el), "0");

    while counts.tick(el, &mut sink) == Tick::Continue {}
    assert_eq!(counts.state(el), Some(CountState::Done));
    assert_eq!(shown(&sink, el), "150");
}

#[test]
fn animator_below_threshold_stays_pending() {
    let mut sink = MemorySink::new();
    let el = sink.insert_with_text("span", "90");
    let mut counts = animator();
    counts.register(&[el]);
    assert!(counts.on_intersections(&[Intersection::new(el, 0.4)], &mut sink).is_empty());
    assert_eq!(counts.state(el), Some(CountState::Pending));
    assert_eq!(shown(&sink, el), "90");
}

#[test]
fn animator_non_numeric_text_is_done_at_zero() {
    let mut sink = MemorySink::new();
    let el = sink.insert_with_text("span", "N/A");
    let mut counts = animator();
    counts.register(&[el]);

    let started = counts.on_intersections(&[Intersection::new(el, 1.0)], &mut sink);
    assert!(started.is_empty());
    assert_eq!(counts.state(el), Some(CountState::Done));
    assert_eq!(shown(&sink, el), "0");
    assert!(counts.animating().is_empty());
}

#[test]
fn done_element_does_not_restart_on_reentry() {
    let mut sink = MemorySink::new();
    let el = sink.insert_with_text("span", "12");
    let mut counts = animator();
    counts.register(&[el]);
    counts.on_intersections(&[Intersection::new(el, 1.0)], &mut sink);
    while counts.tick(el, &mut sink) == Tick::Continue {}

    counts.register(&[el]);
    let started = counts.on_intersections(
        &[Intersection::new(el, 0.0), Intersection::new(el, 1.0)],
        &mut sink,
    );
    assert!(started.is_empty());
    assert_eq!(counts.state(el), Some(CountState::Done));
    assert_eq!(shown(&sink, el), "12");
    assert_eq!(counts.tick(el, &mut sink), Tick::Done);
}

#[test]
fn marker_class_blocks_start() {
    let mut sink = MemorySink::new();
    let el = sink.insert_with_text("span", "40");
    sink.add_class(el, "animated");
    let mut counts = animator();
    counts.register(&[el]);
    assert!(counts.on_intersections(&[Intersection::new(el, 1.0)], &mut sink).is_empty());
    assert_eq!(shown(&sink, el), "40");
}

#[test]
fn running_counts_tick_independently() {
    let mut sink = MemorySink::new();
    let a = sink.insert_with_text("span", "10");
    let b = sink.insert_with_text("span", "1000");
    let config = CountUpConfig { duration_ms: 160, ..CountUpConfig::default() };
    let mut counts = CountUpAnimator::new(&config, "animated");
    counts.register(&[a, b]);
    counts.on_intersections(&[Intersection::new(a, 1.0), Intersection::new(b, 1.0)], &mut sink);
    assert_eq!(counts.animating(), vec![a, b]);

    assert_eq!(counts.tick(a, &mut sink), Tick::Continue);
    assert_eq!(counts.tick(b, &mut sink), Tick::Continue);
    assert_eq!(shown(&sink, a), "1");
    assert_eq!(shown(&sink, b), "100");

    while counts.tick(a, &mut sink) == Tick::Continue {}
    assert_eq!(shown(&sink, a), "10");
    assert_eq!(counts.state(a), Some(CountState::Done));
    assert_eq!(counts.animating(), vec![b]);
    assert_eq!(shown(&sink, b), "100");
}

#[test]
fn tick_on_unknown_element_is_done() {
    let mut sink = MemorySink::new();
    let mut counts = animator();
    assert_eq!(counts.tick(ElementId(7), &mut sink), Tick::Done);
    assert_eq!(counts.state(ElementId(7)), None);
}

#[test]
fn release_abandons_running_counts() {
    let mut sink = MemorySink::new();
    let running = sink.insert_with_text("span", "500");
    let pending = sink.insert_with_text("span", "70");
    let mut counts = animator();
    counts.register(&[running, pending]);
    counts.on_intersections(&[Intersection::new(running, 1.0)], &mut sink);
    counts.tick(running, &mut sink);
    let partial = shown(&sink, running);

    assert_eq!(counts.release(), vec![running]);
    assert_eq!(counts.state(running), Some(CountState::Done));
    assert_eq!(counts.tick(running, &mut sink), Tick::Done);
    assert_eq!(shown(&sink, running), partial);
    assert!(counts.animating().is_empty());

    // The pending element is no longer watched, so it never starts.
    assert!(counts.on_intersections(&[Intersection::new(pending, 1.0)], &mut sink).is_empty());
    assert_eq!(shown(&sink, pending), "70");
}
