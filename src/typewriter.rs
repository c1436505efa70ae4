//! Looping typewriter effect for the hero subtitle.
//!
//! Each phrase is typed one character at a time, held, then deleted one
//! character at a time before the next phrase starts. The loop never ends.
//! The deleting phase begins by showing the full phrase once more and ends
//! by showing the empty string, matching the page's original pacing.
//!
//! The driver is expected to call [`Typewriter::tick`], render the returned
//! text, and schedule the next tick after the returned delay.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::config::TypewriterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
}

/// One rendered frame of the effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    /// Milliseconds until the next tick.
    pub delay_ms: u32,
}

pub struct Typewriter {
    phrases: Vec<String>,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    next_ms: u32,
    phrase: usize,
    /// Characters shown (typing) or about to be shown (deleting).
    cursor: usize,
    phase: Phase,
}

impl Typewriter {
    /// Returns `None` when there is nothing to type.
    #[must_use]
    pub fn new(config: &TypewriterConfig) -> Option<Self> {
        if config.phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: config.phrases.clone(),
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            next_ms: config.next_ms,
            phrase: 0,
            cursor: 0,
            phase: Phase::Typing,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the phrase currently being typed or deleted.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    pub fn tick(&mut self) -> Tick {
        let current = &self.phrases[self.phrase];
        let len = current.chars().count();

        match self.phase {
            Phase::Typing => {
                self.cursor = (self.cursor + 1).min(len);
                let text = prefix(current, self.cursor);
                if self.cursor == len {
                    self.phase = Phase::Deleting;
                    Tick { text, delay_ms: self.hold_ms }
                } else {
                    Tick { text, delay_ms: self.type_ms }
                }
            }
            Phase::Deleting => {
                let text = prefix(current, self.cursor);
                if self.cursor == 0 {
                    self.phase = Phase::Typing;
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    Tick { text, delay_ms: self.next_ms }
                } else {
                    self.cursor -= 1;
                    Tick { text, delay_ms: self.delete_ms }
                }
            }
        }
    }
}

/// The first `chars` characters of `s`.
fn prefix(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}
