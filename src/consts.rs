//! Selectors, class names and default timings shared across the crate.

// ── Markup selectors ────────────────────────────────────────────

/// Elements that fade in when scrolled into view.
pub const REVEAL_SELECTOR: &str = ".card, .metric-card, .hero-section";

/// Cards that lift on hover.
pub const HOVER_CARD_SELECTOR: &str = ".card, .metric-card";

pub const PROGRESS_SELECTOR: &str = ".progress-bar";

pub const COUNT_UP_SELECTOR: &str = ".metric-value, .score-number";

/// Children of staggered containers that must never stay hidden.
pub const STAGGER_SELECTOR: &str = ".stagger-animation > *";

pub const TOOLTIP_SELECTOR: &str = "[data-tooltip]";
pub const TOOLTIP_ATTRIBUTE: &str = "data-tooltip";

/// Set on every element the browser layer holds a handle for.
pub const HANDLE_ATTRIBUTE: &str = "data-ui-handle";

pub const BUTTON_SELECTOR: &str = ".btn";
pub const INPUT_SELECTOR: &str = ".form-control, .form-select";
pub const FORM_SELECTOR: &str = "form";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const THEME_ICON_ID: &str = "themeIcon";
pub const NAVBAR_ID: &str = "mainNavbar";
pub const CONFIG_SCRIPT_ID: &str = "ui-config";

// ── Classes ─────────────────────────────────────────────────────

pub const REVEAL_CLASS: &str = "animate-in";
pub const COUNTED_CLASS: &str = "animated";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
pub const INVALID_CLASS: &str = "is-invalid";
pub const VALID_CLASS: &str = "is-valid";
pub const FOCUSED_CLASS: &str = "input-focused";
pub const LOADING_CLASS: &str = "loading";
pub const RIPPLE_CLASS: &str = "ripple-effect";
pub const TOOLTIP_CLASS: &str = "custom-tooltip glass-effect";

pub const ICON_SUN: &str = "fas fa-sun";
pub const ICON_MOON: &str = "fas fa-moon";

// ── Thresholds ──────────────────────────────────────────────────

pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so reveals start slightly before full entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const PROGRESS_THRESHOLD: f64 = 0.5;
pub const COUNT_UP_THRESHOLD: f64 = 0.5;

/// Tolerance for hosts that report a ratio just under the configured threshold.
pub const RATIO_EPSILON: f64 = 1e-3;

/// Scroll offset (CSS pixels) past which the navbar gets the scrolled class.
pub const NAVBAR_SCROLL_PX: f64 = 50.0;

// ── Timings (milliseconds) ──────────────────────────────────────

pub const PROGRESS_FILL_DELAY_MS: u32 = 200;
pub const COUNT_UP_DURATION_MS: u32 = 2000;

/// Roughly one frame at 60 Hz.
pub const COUNT_UP_TICK_MS: u32 = 16;

pub const RIPPLE_LIFETIME_MS: u32 = 600;
pub const STATUS_DURATION_MS: u32 = 3000;

/// Delay between script start and the secondary enhancements.
pub const ENHANCEMENT_DELAY_MS: u32 = 500;

// ── Tooltip ─────────────────────────────────────────────────────

pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;

// ── Storage ─────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";
