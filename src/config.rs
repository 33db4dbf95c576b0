//! Tunable thresholds, delays and class names.
//!
//! Defaults match the constants in [`crate::consts`]. A page may override any
//! subset by embedding JSON (camelCase keys) in
//! `<script id="ui-config" type="application/json">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::watcher::WatchConfig;

/// Error returned by [`UiConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for [`UiConfig`].
    #[error("failed to parse ui config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A visibility threshold fell outside `[0, 1]`.
    #[error("{name} threshold must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
    /// The count-up tick interval was zero.
    #[error("count-up tick interval must be non-zero")]
    ZeroTick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub class: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: consts::REVEAL_THRESHOLD,
            root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            class: consts::REVEAL_CLASS.to_owned(),
        }
    }
}

impl RevealConfig {
    #[must_use]
    pub fn watch(&self) -> WatchConfig {
        WatchConfig { threshold: self.threshold, root_margin: self.root_margin.clone(), once: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressConfig {
    pub threshold: f64,
    pub fill_delay_ms: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { threshold: consts::PROGRESS_THRESHOLD, fill_delay_ms: consts::PROGRESS_FILL_DELAY_MS }
    }
}

impl ProgressConfig {
    #[must_use]
    pub fn watch(&self) -> WatchConfig {
        WatchConfig { threshold: self.threshold, root_margin: String::new(), once: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CountUpConfig {
    pub threshold: f64,
    pub duration_ms: u32,
    pub tick_ms: u32,
}

impl Default for CountUpConfig {
    fn default() -> Self {
        Self {
            threshold: consts::COUNT_UP_THRESHOLD,
            duration_ms: consts::COUNT_UP_DURATION_MS,
            tick_ms: consts::COUNT_UP_TICK_MS,
        }
    }
}

impl CountUpConfig {
    #[must_use]
    pub fn watch(&self) -> WatchConfig {
        WatchConfig { threshold: self.threshold, root_margin: String::new(), once: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { offset_x: consts::TOOLTIP_OFFSET_X, offset_y: consts::TOOLTIP_OFFSET_Y }
    }
}

/// Full page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub reveal: RevealConfig,
    pub progress: ProgressConfig,
    pub count_up: CountUpConfig,
    pub tooltip: TooltipConfig,
    pub navbar_scroll_px: f64,
    pub ripple_lifetime_ms: u32,
    pub status_duration_ms: u32,
    pub enhancement_delay_ms: u32,
    pub theme_key: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            progress: ProgressConfig::default(),
            count_up: CountUpConfig::default(),
            tooltip: TooltipConfig::default(),
            navbar_scroll_px: consts::NAVBAR_SCROLL_PX,
            ripple_lifetime_ms: consts::RIPPLE_LIFETIME_MS,
            status_duration_ms: consts::STATUS_DURATION_MS,
            enhancement_delay_ms: consts::ENHANCEMENT_DELAY_MS,
            theme_key: consts::THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse and validate a JSON override. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("reveal", self.reveal.threshold)?;
        check_threshold("progress", self.progress.threshold)?;
        check_threshold("countUp", self.count_up.threshold)?;
        if self.count_up.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}
