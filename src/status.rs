//! Loading state and transient status alerts, exposed to page scripts.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::consts::LOADING_CLASS;
use crate::sink::{ElementId, PresentationSink, escape_html};

/// Saved content of an element put into the loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "dropping the guard leaves the element loading"]
pub struct LoadingGuard {
    element: ElementId,
    original_html: String,
}

impl LoadingGuard {
    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Leave the loading state and put the original content back.
    pub fn restore(self, sink: &mut impl PresentationSink) {
        sink.remove_class(self.element, LOADING_CLASS);
        sink.set_inner_html(self.element, &self.original_html);
    }
}

/// A restore action that may be invoked any number of times; only the first
/// call touches the element.
#[derive(Debug)]
pub struct LoadingRestore {
    guard: Option<LoadingGuard>,
}

impl LoadingRestore {
    /// Returns `true` if this call restored the element.
    pub fn restore(&mut self, sink: &mut impl PresentationSink) -> bool {
        let Some(guard) = self.guard.take() else {
            return false;
        };
        guard.restore(sink);
        true
    }
}

impl From<LoadingGuard> for LoadingRestore {
    fn from(guard: LoadingGuard) -> Self {
        Self { guard: Some(guard) }
    }
}

/// Replace `element`'s content with a spinner and `text`.
pub fn show_loading(sink: &mut impl PresentationSink, element: ElementId, text: &str) -> LoadingGuard {
    sink.add_class(element, LOADING_CLASS);
    let original_html = sink.inner_html(element).unwrap_or_default();
    sink.set_inner_html(
        element,
        &format!(r#"<i class="fas fa-spinner fa-spin me-2"></i>{}"#, escape_html(text)),
    );
    LoadingGuard { element, original_html }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Anything other than `"success"` renders as an error.
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        if kind == "success" { Self::Success } else { Self::Error }
    }

    fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-danger",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Success => "fa-check-circle",
            Self::Error => "fa-exclamation-triangle",
        }
    }
}

/// Render a status alert into `element`. Returns the delay after which the
/// host should call [`clear_status`], or `None` for a persistent alert.
pub fn show_status(
    sink: &mut impl PresentationSink,
    element: ElementId,
    kind: StatusKind,
    message: &str,
    duration_ms: u32,
) -> Option<u32> {
    let html = format!(
        r#"<div class="alert {} glass-effect fade-in-up"><i class="fas {} me-2"></i>{}</div>"#,
        kind.alert_class(),
        kind.icon(),
        escape_html(message),
    );
    sink.set_inner_html(element, &html);
    (duration_ms > 0).then_some(duration_ms)
}

pub fn clear_status(sink: &mut impl PresentationSink, element: ElementId) {
    sink.set_inner_html(element, "");
}
