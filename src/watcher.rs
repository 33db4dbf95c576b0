//! Viewport entry detection.
//!
//! The host reports intersection samples (an element's visible fraction and
//! whether it intersects at all). A [`ViewportWatcher`] turns that stream into
//! entry transitions: an element is reported once each time its visibility
//! crosses from below the threshold to at or above it. Watchers configured
//! with `once` stop tracking an element after its first entry, so it can
//! never fire again.
//!
//! Watchers share nothing; several may observe the same element.

#[cfg(test)]
#[path = "watcher_test.rs"]
mod watcher_test;

use std::collections::HashMap;

use crate::consts::RATIO_EPSILON;
use crate::sink::ElementId;

/// How a watcher decides that an element entered the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfig {
    /// Visible fraction in `[0, 1]` that counts as "in view".
    pub threshold: f64,
    /// CSS margin applied to the viewport by the host observer.
    pub root_margin: String,
    /// Stop watching an element after it first enters.
    pub once: bool,
}

/// One visibility sample reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: ElementId,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl Intersection {
    #[must_use]
    pub fn new(element: ElementId, ratio: f64) -> Self {
        Self { element, ratio, is_intersecting: ratio > 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visibility {
    Below,
    Above,
}

#[derive(Debug)]
pub struct ViewportWatcher {
    config: WatchConfig,
    watched: HashMap<ElementId, Visibility>,
}

impl ViewportWatcher {
    #[must_use]
    pub fn new(config: WatchConfig) -> Self {
        Self { config, watched: HashMap::new() }
    }

    #[must_use]
    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Start watching elements. Already-watched elements keep their state.
    pub fn observe(&mut self, elements: impl IntoIterator<Item = ElementId>) {
        for el in elements {
            self.watched.entry(el).or_insert(Visibility::Below);
        }
    }

    pub fn unobserve(&mut self, el: ElementId) {
        self.watched.remove(&el);
    }

    /// Forget every element. Called when the document unloads.
    pub fn clear(&mut self) {
        self.watched.clear();
    }

    #[must_use]
    pub fn is_watching(&self, el: ElementId) -> bool {
        self.watched.contains_key(&el)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.watched.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watched.is_empty()
    }

    /// Process a batch of samples, returning entering elements in batch order.
    pub fn report(&mut self, batch: &[Intersection]) -> Vec<ElementId> {
        let mut entered = Vec::new();
        for sample in batch {
            let Some(prev) = self.watched.get(&sample.element).copied() else {
                continue;
            };
            let next = if self.is_visible(sample) { Visibility::Above } else { Visibility::Below };
            if prev == Visibility::Below && next == Visibility::Above {
                entered.push(sample.element);
                if self.config.once {
                    self.watched.remove(&sample.element);
                    continue;
                }
            }
            self.watched.insert(sample.element, next);
        }
        entered
    }

    /// Elements sampled in `batch` that this watcher no longer tracks, so the
    /// host observer can stop reporting them.
    #[must_use]
    pub fn retired(&self, batch: &[Intersection]) -> Vec<ElementId> {
        batch
            .iter()
            .map(|sample| sample.element)
            .filter(|el| !self.is_watching(*el))
            .collect()
    }

    fn is_visible(&self, sample: &Intersection) -> bool {
        sample.is_intersecting && sample.ratio + RATIO_EPSILON >= self.config.threshold
    }
}
