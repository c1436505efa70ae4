//! Scroll-linked highlighting of the in-page navigation.
//!
//! The probe point is the scroll offset pushed down by the fixed header. The
//! section containing the probe marks its navigation entry `active`. When no
//! section contains the probe the highlight is left alone.

#[cfg(test)]
#[path = "spy_test.rs"]
mod spy_test;

use crate::consts::ACTIVE_CLASS;
use crate::patch::{Patch, Target};

/// Layout of one labeled content section.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Region {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, probe: f64) -> bool {
        probe >= self.top && probe < self.top + self.height
    }
}

/// The section containing `probe`. Later sections win on overlap.
#[must_use]
pub fn active_region(regions: &[Region], probe: f64) -> Option<&Region> {
    regions.iter().rev().find(|region| region.contains(probe))
}

pub struct SectionSpy {
    /// Fragment ids the navigation entries point at, `#` stripped.
    entries: Vec<String>,
    header_offset: f64,
}

impl SectionSpy {
    /// `hrefs` are the navigation entries' `href` values in document order.
    #[must_use]
    pub fn new(hrefs: &[String], header_offset: f64) -> Self {
        let entries = hrefs
            .iter()
            .map(|href| href.strip_prefix('#').unwrap_or(href).to_owned())
            .collect();
        Self { entries, header_offset }
    }

    /// Index of the navigation entry linking to section `id`.
    #[must_use]
    pub fn entry_for(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry == id)
    }

    pub fn update(&self, offset: f64, regions: &[Region]) -> Vec<Patch> {
        let probe = offset + self.header_offset;
        let Some(region) = active_region(regions, probe) else {
            return Vec::new();
        };

        let mut patches: Vec<Patch> = (0..self.entries.len())
            .map(|i| Patch::remove_class(Target::NavEntry(i), ACTIVE_CLASS))
            .collect();
        if let Some(index) = self.entry_for(&region.id) {
            patches.push(Patch::add_class(Target::NavEntry(index), ACTIVE_CLASS));
        }
        patches
    }
}
