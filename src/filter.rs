//! Publication list filtering by category tab.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::{ACTIVE_CLASS, FILTER_ALL, PUB_HIDDEN_CLASS};
use crate::patch::{Patch, Target};

/// Whether a card tagged `category` is shown under `filter`.
#[must_use]
pub fn is_shown(filter: &str, category: Option<&str>) -> bool {
    filter == FILTER_ALL || category == Some(filter)
}

pub struct PubFilter {
    /// `data-filter` of each tab, in document order.
    tabs: Vec<String>,
    /// `data-type` of each card, in document order.
    cards: Vec<Option<String>>,
    current: Option<String>,
}

impl PubFilter {
    #[must_use]
    pub fn new(tabs: Vec<String>, cards: Vec<Option<String>>) -> Self {
        Self { tabs, cards, current: None }
    }

    /// The filter most recently applied.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Apply the filter of the tab marked active in the markup, if any.
    pub fn boot(&mut self, active_tab: Option<usize>) -> Vec<Patch> {
        let Some(filter) = active_tab.and_then(|i| self.tabs.get(i)).cloned() else {
            return Vec::new();
        };
        self.apply(&filter)
    }

    /// Tab `index` was clicked: move `active` to it and re-filter the cards.
    pub fn select(&mut self, index: usize) -> Vec<Patch> {
        let Some(filter) = self.tabs.get(index).cloned() else {
            return Vec::new();
        };
        let mut patches: Vec<Patch> = (0..self.tabs.len())
            .map(|i| Patch::remove_class(Target::PubTab(i), ACTIVE_CLASS))
            .collect();
        patches.push(Patch::add_class(Target::PubTab(index), ACTIVE_CLASS));
        patches.extend(self.apply(&filter));
        patches
    }

    /// Show or hide every card under `filter`.
    pub fn apply(&mut self, filter: &str) -> Vec<Patch> {
        log::debug!("publication filter: {filter}");
        self.current = Some(filter.to_owned());
        self.cards
            .iter()
            .enumerate()
            .map(|(i, category)| Patch::toggle_class(Target::PubCard(i), PUB_HIDDEN_CLASS, !is_shown(filter, category.as_deref())))
            .collect()
    }
}
