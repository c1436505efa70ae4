//! One-shot reveal animations.
//!
//! A reveal group tracks which of its elements have already intersected the
//! viewport. The first intersection adds the group's class; later
//! intersections (after scrolling away and back) change nothing.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::TRANSITION_DELAY;
use crate::patch::{Patch, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    /// `.fade-in` elements.
    FadeIn,
    /// `.timeline-item` slide-ins.
    Timeline,
}

impl RevealKind {
    #[must_use]
    pub fn target(self, index: usize) -> Target {
        match self {
            Self::FadeIn => Target::FadeIn(index),
            Self::Timeline => Target::TimelineItem(index),
        }
    }
}

pub struct RevealGroup {
    kind: RevealKind,
    class: String,
    revealed: Vec<bool>,
}

impl RevealGroup {
    pub fn new(kind: RevealKind, class: impl Into<String>, len: usize) -> Self {
        Self { kind, class: class.into(), revealed: vec![false; len] }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Element `index` intersected the viewport.
    pub fn reveal(&mut self, index: usize) -> Vec<Patch> {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                vec![Patch::add_class(self.kind.target(index), self.class.clone())]
            }
            _ => Vec::new(),
        }
    }

    /// Cascade delays for every element in the group.
    #[must_use]
    pub fn stagger(&self, step_ms: u32) -> Vec<Patch> {
        stagger(self.revealed.len(), step_ms, |i| self.kind.target(i))
    }
}

/// `transition-delay: {index × step_ms}ms` for `len` consecutive targets.
pub fn stagger(len: usize, step_ms: u32, target: impl Fn(usize) -> Target) -> Vec<Patch> {
    (0..len)
        .map(|i| Patch::set_style(target(i), TRANSITION_DELAY, format!("{}ms", i as u64 * u64::from(step_ms))))
        .collect()
}
