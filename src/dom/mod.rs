//! Browser binding for the page logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything in this module needs a real `window`. It maps DOM elements to
//! [`ElementId`](crate::sink::ElementId) handles, feeds `IntersectionObserver`
//! reports and DOM events into the core components, and schedules their
//! deferred work with `gloo-timers`.
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Page-wide shared state and the boot sequence |
//! | [`sink`] | `PresentationSink` over `web_sys::Element` |
//! | [`storage`] | `KeyValueStore` over `localStorage` |
//! | [`observe`] | `IntersectionObserver` registration |
//! | [`listen`] | Event listener and frame helpers |
//! | [`exports`] | Functions callable from page scripts |

pub mod exports;
pub mod listen;
pub mod observe;
pub mod page;
pub mod sink;
pub mod storage;

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Failures reaching the browser environment.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// WASM entry point: install logging, then boot the page.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("logger already installed: {err}");
    }

    match page::Page::current() {
        Ok(page) => page::schedule_boot(&page),
        Err(err) => log::error!("ui boot failed: {err}"),
    }
}
