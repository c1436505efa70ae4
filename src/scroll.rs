//! Scroll-driven widgets: the scroll-to-top button and the progress bar.
//!
//! Both are pure functions of the current [`ScrollMetrics`]; neither keeps
//! state between scroll events.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::VISIBLE_CLASS;
use crate::patch::{Patch, Target};

/// Window scroll geometry sampled on a scroll event, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the window.
    pub offset: f64,
    /// Full height of the document.
    pub scroll_height: f64,
    /// Height of the viewport.
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(offset: f64, scroll_height: f64, viewport_height: f64) -> Self {
        Self { offset, scroll_height, viewport_height }
    }

    /// Distance the document can scroll.
    #[must_use]
    pub fn scrollable(&self) -> f64 {
        self.scroll_height - self.viewport_height
    }
}

/// The scroll-to-top button is shown strictly past `threshold`.
#[must_use]
pub fn scroll_top_visible(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn scroll_top_patch(offset: f64, threshold: f64) -> Patch {
    Patch::toggle_class(Target::ScrollTop, VISIBLE_CLASS, scroll_top_visible(offset, threshold))
}

/// Scrolled fraction of the document; zero when nothing can scroll.
#[must_use]
pub fn progress_ratio(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scrollable();
    if scrollable > 0.0 { metrics.offset / scrollable } else { 0.0 }
}

pub fn progress_patch(metrics: &ScrollMetrics) -> Patch {
    let pct = progress_ratio(metrics) * 100.0;
    Patch::set_style(Target::ProgressBar, "width", format!("{pct}%"))
}
