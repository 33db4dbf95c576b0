//! Navbar scroll class, throttled to one update per animation frame.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use crate::consts::SCROLLED_CLASS;
use crate::sink::{ElementId, PresentationSink};

#[derive(Debug, Clone, PartialEq)]
pub struct NavbarScroll {
    threshold_px: f64,
    frame_pending: bool,
}

impl NavbarScroll {
    #[must_use]
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px, frame_pending: false }
    }

    /// Record a scroll event. Returns `true` when the host should request a frame.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Apply the class for the current scroll offset and release the throttle.
    pub fn on_frame(&mut self, scroll_y: f64, navbar: Option<ElementId>, sink: &mut impl PresentationSink) {
        if let Some(navbar) = navbar {
            if scroll_y > self.threshold_px {
                sink.add_class(navbar, SCROLLED_CLASS);
            } else {
                sink.remove_class(navbar, SCROLLED_CLASS);
            }
        }
        self.frame_pending = false;
    }
}
