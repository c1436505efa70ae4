//! Animated statistic counters.
//!
//! A counter's markup text (`"120+"`) is its target. Once the element is
//! mostly in view it counts up from zero along a cubic ease-out curve,
//! re-rendered on every animation frame until the duration elapses.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Parsed target of a counter element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: i64,
    /// Whether the original text ended in `+`.
    pub plus: bool,
}

impl CounterTarget {
    /// Parse a leading integer from trimmed text, ignoring anything after it.
    ///
    /// Returns `None` when the text does not start with an integer. Digit runs
    /// too long for `i64` saturate at `i64::MAX`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
        if end == 0 {
            return None;
        }
        let magnitude = digits[..end]
            .bytes()
            .fold(0_i64, |acc, digit| acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));
        let value = if negative { -magnitude } else { magnitude };
        Some(Self { value, plus: text.ends_with('+') })
    }

    /// Display text for `value`, keeping the `+` suffix.
    #[must_use]
    pub fn render(&self, value: i64) -> String {
        if self.plus { format!("{value}+") } else { value.to_string() }
    }
}

/// Cubic ease-out: fast start, decelerating into 1.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Round half toward positive infinity.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

pub struct CounterAnimation {
    target: CounterTarget,
    duration_ms: f64,
    started_at: Option<f64>,
    finished: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: CounterTarget, duration_ms: f64) -> Self {
        Self { target, duration_ms, started_at: None, finished: false }
    }

    #[must_use]
    pub fn target(&self) -> CounterTarget {
        self.target
    }

    /// Begin counting at `now`. Returns `false` if already started.
    pub fn start(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && !self.finished
    }

    /// Animation progress in `[0, 1]` for `elapsed_ms`.
    #[must_use]
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Displayed value after `elapsed_ms`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        round_half_up(self.target.value as f64 * ease_out_cubic(self.progress(elapsed_ms)))
    }

    /// Render the frame at timestamp `now`. `None` before start or after the last frame.
    pub fn frame(&mut self, now: f64) -> Option<String> {
        let started_at = self.started_at?;
        if self.finished {
            return None;
        }
        let elapsed = now - started_at;
        if self.progress(elapsed) >= 1.0 {
            self.finished = true;
        }
        Some(self.target.render(self.value_at(elapsed)))
    }
}
