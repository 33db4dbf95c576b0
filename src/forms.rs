//! Validation classes layered over the browser's native form validity.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use std::collections::HashSet;

use crate::consts::{INVALID_CLASS, VALID_CLASS};
use crate::sink::{ElementId, PresentationSink};

/// Tracks which controls already listen for corrective input.
#[derive(Debug, Default)]
pub struct FormValidation {
    wired: HashSet<ElementId>,
}

impl FormValidation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the controls the browser reports invalid on submit. Returns the
    /// controls that still need an input listener; each is returned only once.
    pub fn on_submit(&mut self, sink: &mut impl PresentationSink, invalid: &[ElementId]) -> Vec<ElementId> {
        let mut unwired = Vec::new();
        for &control in invalid {
            sink.add_class(control, INVALID_CLASS);
            if self.wired.insert(control) {
                unwired.push(control);
            }
        }
        unwired
    }

    /// React to input on a flagged control once it becomes valid.
    pub fn on_input(&self, sink: &mut impl PresentationSink, control: ElementId, valid: bool) {
        if valid {
            sink.remove_class(control, INVALID_CLASS);
            sink.add_class(control, VALID_CLASS);
        }
    }
}
