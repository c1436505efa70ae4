//! Page configuration.
//!
//! Every field has a default matching the stock portfolio page, so an empty
//! JSON object is a valid config. The browser shell reads overrides from an
//! optional `<script type="application/json" id="folio-config">` element.
//!
//! Reveal groups (`fade_in`, `timeline`) are all-or-nothing: when a group
//! object is present every one of its fields must be given.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::*;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_ms: u32,
    pub start_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            type_ms: TYPE_STEP_MS,
            delete_ms: DELETE_STEP_MS,
            hold_ms: HOLD_MS,
            next_ms: NEXT_PHRASE_MS,
            start_ms: TYPEWRITER_START_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: f64,
    /// Fraction of the element that must be visible before it starts counting.
    pub threshold: f64,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { duration_ms: COUNTER_DURATION_MS, threshold: COUNTER_THRESHOLD }
    }
}

/// Intersection settings for one group of one-shot reveal elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    /// Class added when the element first intersects.
    pub class: String,
    /// Per-index transition delay; zero disables staggering.
    pub stagger_ms: u32,
}

impl RevealConfig {
    #[must_use]
    pub fn fade_in() -> Self {
        Self {
            threshold: FADE_THRESHOLD,
            root_margin: FADE_ROOT_MARGIN.to_owned(),
            class: VISIBLE_CLASS.to_owned(),
            stagger_ms: 0,
        }
    }

    #[must_use]
    pub fn timeline() -> Self {
        Self {
            threshold: TIMELINE_THRESHOLD,
            root_margin: TIMELINE_ROOT_MARGIN.to_owned(),
            class: TIMELINE_VISIBLE_CLASS.to_owned(),
            stagger_ms: TIMELINE_STAGGER_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding `"dark"` or `"light"`.
    pub storage_key: String,
    pub header_offset: f64,
    pub scroll_top_threshold: f64,
    /// Cascade step applied to publication cards.
    pub card_stagger_ms: u32,
    pub typewriter: TypewriterConfig,
    pub counter: CounterConfig,
    pub fade_in: RevealConfig,
    pub timeline: RevealConfig,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_owned(),
            header_offset: HEADER_OFFSET_PX,
            scroll_top_threshold: SCROLL_TOP_THRESHOLD_PX,
            card_stagger_ms: CARD_STAGGER_MS,
            typewriter: TypewriterConfig::default(),
            counter: CounterConfig::default(),
            fade_in: RevealConfig::fade_in(),
            timeline: RevealConfig::timeline(),
            log_level: "info".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The configured log level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        log::Level::from_str(self.log_level.trim())
            .map_err(|_| invalid("log_level", format!("unknown level {:?}", self.log_level)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(invalid("storage_key", "must not be empty".into()));
        }
        non_negative("header_offset", self.header_offset)?;
        non_negative("scroll_top_threshold", self.scroll_top_threshold)?;
        non_negative("counter.duration_ms", self.counter.duration_ms)?;
        if self.counter.duration_ms <= 0.0 {
            return Err(invalid("counter.duration_ms", "must be greater than zero".into()));
        }
        fraction("counter.threshold", self.counter.threshold)?;
        fraction("fade_in.threshold", self.fade_in.threshold)?;
        fraction("timeline.threshold", self.timeline.threshold)?;
        root_margin("fade_in.root_margin", &self.fade_in.root_margin)?;
        root_margin("timeline.root_margin", &self.timeline.root_margin)?;
        if self.fade_in.class.trim().is_empty() {
            return Err(invalid("fade_in.class", "must not be empty".into()));
        }
        if self.timeline.class.trim().is_empty() {
            return Err(invalid("timeline.class", "must not be empty".into()));
        }
        self.level()?;
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a finite non-negative number, got {value}")))
    }
}

fn fraction(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, format!("expected a value in [0, 1], got {value}")))
    }
}

/// An `IntersectionObserver` root margin: one to four lengths in `px` or `%`.
fn root_margin(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let lengths: Vec<&str> = value.split_whitespace().collect();
    if lengths.is_empty() || lengths.len() > 4 {
        return Err(invalid(field, format!("expected 1 to 4 lengths, got {value:?}")));
    }
    for length in lengths {
        let number = length.strip_suffix("px").or_else(|| length.strip_suffix('%'));
        let valid = number.is_some_and(|n| n.parse::<f64>().is_ok_and(f64::is_finite));
        if !valid {
            return Err(invalid(field, format!("{length:?} is not a length in px or %")));
        }
    }
    Ok(())
}
