//! Count-up animation for numeric displays.
//!
//! A [`CountUp`] walks the displayed integer from 0 to its target over a fixed
//! duration in fixed ticks. [`CountUpAnimator`] owns the per-element phase
//! (`Pending → Animating → Done`) for elements watched in the viewport; `Done`
//! is terminal, so an element never restarts its count.
//!
//! Counting is direction-aware: negative targets count downward, and the
//! displayed value truncates toward zero so it never overshoots the target.

#[cfg(test)]
#[path = "count_up_test.rs"]
mod count_up_test;

use std::collections::HashMap;

use crate::config::CountUpConfig;
use crate::sink::{ElementId, PresentationSink};
use crate::watcher::{Intersection, ViewportWatcher};

/// Parse the leading integer of `text`, mirroring browser `parseInt` for
/// base 10. Anything without a leading integer yields 0.
#[must_use]
pub fn parse_target(text: &str) -> i64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    let Ok(magnitude) = digits[..end].parse::<i64>() else {
        return 0;
    };
    if negative { -magnitude } else { magnitude }
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// More ticks are needed.
    Continue,
    /// The target is displayed; the timer should be cancelled.
    Done,
}

/// One running count from 0 to `target`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    element: ElementId,
    target: i64,
    increment: f64,
    steps: f64,
    ticks: u32,
    done: bool,
}

impl CountUp {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(element: ElementId, target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = if tick_ms == 0 { 0.0 } else { f64::from(duration_ms) / f64::from(tick_ms) };
        let increment = if steps > 0.0 { target as f64 / steps } else { 0.0 };
        Self { element, target, increment, steps, ticks: 0, done: target == 0 || steps <= 0.0 }
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// The value currently shown.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn displayed(&self) -> i64 {
        if self.done {
            return self.target;
        }
        let current = self.increment * f64::from(self.ticks);
        if current.abs() >= self.target.abs() as f64 {
            self.target
        } else {
            current.trunc() as i64
        }
    }

    /// Write the starting value. Counts that need no ticks show the target.
    pub fn start(&self, sink: &mut impl PresentationSink) -> Tick {
        sink.set_text(self.element, &self.displayed().to_string());
        if self.done { Tick::Done } else { Tick::Continue }
    }

    /// Advance one tick and write the new value.
    #[allow(clippy::cast_precision_loss)]
    pub fn tick(&mut self, sink: &mut impl PresentationSink) -> Tick {
        if self.done {
            return Tick::Done;
        }
        self.ticks = self.ticks.saturating_add(1);
        let current = self.increment * f64::from(self.ticks);
        if f64::from(self.ticks) >= self.steps || current.abs() >= self.target.abs() as f64 {
            self.done = true;
        }
        sink.set_text(self.element, &self.displayed().to_string());
        if self.done { Tick::Done } else { Tick::Continue }
    }
}

/// Phase of a watched count-up element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountState {
    Pending,
    Animating,
    Done,
}

#[derive(Debug)]
enum Phase {
    Pending,
    Animating(CountUp),
    Done,
}

#[derive(Debug)]
pub struct CountUpAnimator {
    watcher: ViewportWatcher,
    phases: HashMap<ElementId, Phase>,
    duration_ms: u32,
    tick_ms: u32,
    marker_class: String,
}

impl CountUpAnimator {
    #[must_use]
    pub fn new(config: &CountUpConfig, marker_class: &str) -> Self {
        Self {
            watcher: ViewportWatcher::new(config.watch()),
            phases: HashMap::new(),
            duration_ms: config.duration_ms,
            tick_ms: config.tick_ms,
            marker_class: marker_class.to_owned(),
        }
    }

    #[must_use]
    pub fn watcher(&self) -> &ViewportWatcher {
        &self.watcher
    }

    /// Start watching elements. Already known elements keep their phase.
    pub fn register(&mut self, elements: &[ElementId]) {
        for &el in elements {
            if !self.phases.contains_key(&el) {
                self.phases.insert(el, Phase::Pending);
                self.watcher.observe([el]);
            }
        }
    }

    #[must_use]
    pub fn state(&self, el: ElementId) -> Option<CountState> {
        self.phases.get(&el).map(|phase| match phase {
            Phase::Pending => CountState::Pending,
            Phase::Animating(_) => CountState::Animating,
            Phase::Done => CountState::Done,
        })
    }

    /// Elements currently ticking.
    #[must_use]
    pub fn animating(&self) -> Vec<ElementId> {
        let mut ids = self
            .phases
            .iter()
            .filter(|(_, phase)| matches!(phase, Phase::Animating(_)))
            .map(|(el, _)| *el)
            .collect::<Vec<_>>();
        ids.sort();
        ids
    }

    /// Start counts for entering elements. Returns those that need ticking;
    /// zero targets finish immediately and are not returned.
    pub fn on_intersections(&mut self, batch: &[Intersection], sink: &mut impl PresentationSink) -> Vec<ElementId> {
        let mut started = Vec::new();
        for el in self.watcher.report(batch) {
            if !matches!(self.phases.get(&el), Some(Phase::Pending)) || sink.has_class(el, &self.marker_class) {
                continue;
            }
            let target = parse_target(&sink.text(el).unwrap_or_default());
            sink.add_class(el, &self.marker_class);
            let count = CountUp::new(el, target, self.duration_ms, self.tick_ms);
            match count.start(sink) {
                Tick::Done => {
                    self.phases.insert(el, Phase::Done);
                }
                Tick::Continue => {
                    log::debug!("count-up: element {} counting to {target}", el.0);
                    self.phases.insert(el, Phase::Animating(count));
                    started.push(el);
                }
            }
        }
        started
    }

    /// Stop tracking every element. Counts still running are abandoned at
    /// their current value and returned so the host can cancel their timers.
    pub fn release(&mut self) -> Vec<ElementId> {
        self.watcher.clear();
        let abandoned = self.animating();
        for &el in &abandoned {
            self.phases.insert(el, Phase::Done);
        }
        abandoned
    }

    /// Advance one element by a tick. Unknown or finished elements report `Done`.
    pub fn tick(&mut self, el: ElementId, sink: &mut impl PresentationSink) -> Tick {
        let Some(Phase::Animating(count)) = self.phases.get_mut(&el) else {
            return Tick::Done;
        };
        let outcome = count.tick(sink);
        if outcome == Tick::Done {
            self.phases.insert(el, Phase::Done);
        }
        outcome
    }
}
