//! Client-side page behavior for the EcoPlan dashboard.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! cosmetic interaction layer of the page: scroll-triggered reveals, progress
//! bar fills, count-up numbers, ripples, tooltips, theme persistence and form
//! validation classes. Every behavior is written against the
//! [`sink::PresentationSink`] trait so the timing, threshold and clamping
//! logic runs natively under `cargo test`. The [`dom`] module (feature
//! `browser`) binds that logic to the real document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`sink`] | Presentation sink trait, element handles, in-memory sink |
//! | [`watcher`] | Viewport entry detection over intersection reports |
//! | [`reveal`] | Adds the reveal class on first viewport entry |
//! | [`progress`] | Reset-then-fill progress bar animation |
//! | [`count_up`] | Timed integer count-up with per-element state |
//! | [`ripple`] | Click ripple geometry and lifetime |
//! | [`tooltip`] | Page-wide follow-the-pointer tooltip |
//! | [`interactions`] | Hover lift, focus highlight, nav links, anchors |
//! | [`navbar`] | Frame-throttled navbar scroll class |
//! | [`theme`] | Light/dark theme restore and toggle |
//! | [`forms`] | Validation class toggling |
//! | [`status`] | Loading state and transient status alerts |
//! | [`styles`] | Supplementary stylesheet injected at boot |
//! | [`config`] | Tunable thresholds, delays and class names |
//! | [`geom`] | Points and rectangles in CSS pixels |
//! | [`consts`] | Selectors, class names and default timings |
//! | `dom` | Browser binding (feature `browser`) |

pub mod config;
pub mod consts;
pub mod count_up;
pub mod forms;
pub mod geom;
pub mod interactions;
pub mod navbar;
pub mod progress;
pub mod reveal;
pub mod ripple;
pub mod sink;
pub mod status;
pub mod styles;
pub mod theme;
pub mod tooltip;
pub mod watcher;

#[cfg(feature = "browser")]
pub mod dom;
