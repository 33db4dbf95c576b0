//! Progress bar fill animation.
//!
//! Each bar carries its target width inline (e.g. `width: 73%`). On first
//! entry the width is captured and reset to `0%`; after a short delay the host
//! applies the returned [`PendingFill`], and a CSS width transition animates
//! the fill. A bar is reset at most once for the document's lifetime.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use std::collections::HashSet;

use crate::config::ProgressConfig;
use crate::sink::{ElementId, PresentationSink};
use crate::watcher::{Intersection, ViewportWatcher};

const WIDTH: &str = "width";
const EMPTY_WIDTH: &str = "0%";

/// A deferred width restore, applied by the host after `delay_ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFill {
    pub element: ElementId,
    pub width: String,
    pub delay_ms: u32,
}

impl PendingFill {
    /// Restore the captured width as-is. A bar with no inline width stays at
    /// `0%`; values the browser rejects are its to ignore.
    pub fn apply(&self, sink: &mut impl PresentationSink) {
        let width = self.width.trim();
        if width.is_empty() {
            log::debug!("progress: element {} has no inline width", self.element.0);
            return;
        }
        sink.set_style_property(self.element, WIDTH, width);
    }
}

#[derive(Debug)]
pub struct ProgressAnimator {
    watcher: ViewportWatcher,
    filled: HashSet<ElementId>,
    fill_delay_ms: u32,
}

impl ProgressAnimator {
    #[must_use]
    pub fn new(config: &ProgressConfig) -> Self {
        Self {
            watcher: ViewportWatcher::new(config.watch()),
            filled: HashSet::new(),
            fill_delay_ms: config.fill_delay_ms,
        }
    }

    #[must_use]
    pub fn watcher(&self) -> &ViewportWatcher {
        &self.watcher
    }

    pub fn register(&mut self, bars: &[ElementId]) {
        self.watcher.observe(bars.iter().copied().filter(|el| !self.filled.contains(el)));
    }

    /// Stop tracking every bar. Filled bars stay filled.
    pub fn release(&mut self) {
        self.watcher.clear();
    }

    #[must_use]
    pub fn is_filled(&self, el: ElementId) -> bool {
        self.filled.contains(&el)
    }

    /// Reset entering bars to `0%` and return their deferred fills.
    pub fn on_intersections(&mut self, batch: &[Intersection], sink: &mut impl PresentationSink) -> Vec<PendingFill> {
        let mut fills = Vec::new();
        for el in self.watcher.report(batch) {
            if !self.filled.insert(el) {
                continue;
            }
            let width = sink.style_property(el, WIDTH).unwrap_or_default();
            sink.set_style_property(el, WIDTH, EMPTY_WIDTH);
            fills.push(PendingFill { element: el, width, delay_ms: self.fill_delay_ms });
        }
        fills
    }
}
