//! Reveal trigger: adds the reveal class the first time an element enters.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::sink::{ElementId, PresentationSink};
use crate::watcher::{Intersection, ViewportWatcher};

#[derive(Debug)]
pub struct RevealTrigger {
    watcher: ViewportWatcher,
    class: String,
}

impl RevealTrigger {
    #[must_use]
    pub fn new(config: &RevealConfig) -> Self {
        Self { watcher: ViewportWatcher::new(config.watch()), class: config.class.clone() }
    }

    #[must_use]
    pub fn watcher(&self) -> &ViewportWatcher {
        &self.watcher
    }

    /// Start watching elements. Each is forced visible so content never stays
    /// hidden while waiting for its transition.
    pub fn register(&mut self, elements: &[ElementId], sink: &mut impl PresentationSink) {
        for &el in elements {
            sink.set_style_property(el, "opacity", "1");
        }
        self.watcher.observe(elements.iter().copied());
    }

    /// Stop tracking every element.
    pub fn release(&mut self) {
        self.watcher.clear();
    }

    /// Apply a batch of intersection samples. Returns the newly revealed elements.
    pub fn on_intersections(&mut self, batch: &[Intersection], sink: &mut impl PresentationSink) -> Vec<ElementId> {
        let entered = self.watcher.report(batch);
        for &el in &entered {
            sink.add_class(el, &self.class);
        }
        if !entered.is_empty() {
            log::debug!("reveal: {} element(s) entered", entered.len());
        }
        entered
    }
}
