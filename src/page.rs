//! Composition root for every page behavior.
//!
//! `Page` is built once at startup from a [`PageInventory`] (what the markup
//! contains) and owns one instance of each component. The browser shell
//! forwards events here and applies the returned patches; nothing in this
//! module depends on a browser, so the whole page can be driven from tests.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::SiteConfig;
use crate::counter::{CounterAnimation, CounterTarget};
use crate::filter::PubFilter;
use crate::menu::NavMenu;
use crate::patch::{Patch, Target};
use crate::reveal::{self, RevealGroup, RevealKind};
use crate::scroll::{self, ScrollMetrics};
use crate::spy::{Region, SectionSpy};
use crate::theme::{PreferenceStore, ThemeSwitcher};
use crate::typewriter::Typewriter;

/// What the page's markup contains, gathered once by the shell.
#[derive(Debug, Clone, Default)]
pub struct PageInventory {
    /// `href` of each in-page navigation link.
    pub nav_hrefs: Vec<String>,
    /// `data-filter` of each publication tab.
    pub tab_filters: Vec<String>,
    /// Index of the tab marked `active` in the markup.
    pub active_tab: Option<usize>,
    /// `data-type` of each publication card.
    pub card_types: Vec<Option<String>>,
    pub fade_in_count: usize,
    pub timeline_count: usize,
    /// Initial text of each statistic counter.
    pub stat_texts: Vec<String>,
    pub has_subtitle: bool,
}

/// Result of one typewriter tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TypewriterStep {
    pub patch: Patch,
    pub delay_ms: u32,
}

pub struct Page<S> {
    config: SiteConfig,
    theme: ThemeSwitcher<S>,
    menu: NavMenu,
    spy: SectionSpy,
    filter: PubFilter,
    active_tab: Option<usize>,
    card_count: usize,
    fade_in: RevealGroup,
    timeline: RevealGroup,
    typewriter: Option<Typewriter>,
    /// `None` for counters whose text is not a number.
    counters: Vec<Option<CounterAnimation>>,
}

impl<S: PreferenceStore> Page<S> {
    pub fn new(config: SiteConfig, store: S, inventory: PageInventory) -> Self {
        let counters = inventory
            .stat_texts
            .iter()
            .enumerate()
            .map(|(i, text)| match CounterTarget::parse(text) {
                Some(target) => Some(CounterAnimation::new(target, config.counter.duration_ms)),
                None => {
                    log::debug!("stat {i}: {text:?} is not a number, skipping");
                    None
                }
            })
            .collect();
        let typewriter = if inventory.has_subtitle { Typewriter::new(&config.typewriter) } else { None };

        Self {
            theme: ThemeSwitcher::new(store),
            menu: NavMenu::new(),
            spy: SectionSpy::new(&inventory.nav_hrefs, config.header_offset),
            active_tab: inventory.active_tab,
            card_count: inventory.card_types.len(),
            filter: PubFilter::new(inventory.tab_filters, inventory.card_types),
            fade_in: RevealGroup::new(RevealKind::FadeIn, config.fade_in.class.clone(), inventory.fade_in_count),
            timeline: RevealGroup::new(RevealKind::Timeline, config.timeline.class.clone(), inventory.timeline_count),
            typewriter,
            counters,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeSwitcher<S> {
        &self.theme
    }

    #[must_use]
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    #[must_use]
    pub fn filter(&self) -> &PubFilter {
        &self.filter
    }

    #[must_use]
    pub fn has_typewriter(&self) -> bool {
        self.typewriter.is_some()
    }

    /// Startup patches: theme, default publication filter, cascade delays,
    /// and the scroll-derived state for wherever the page was loaded.
    pub fn boot(&mut self, metrics: &ScrollMetrics, regions: &[Region]) -> Vec<Patch> {
        let mut patches = self.theme.boot();
        patches.extend(self.filter.boot(self.active_tab));
        patches.extend(reveal::stagger(self.card_count, self.config.card_stagger_ms, Target::PubCard));
        if self.config.fade_in.stagger_ms > 0 {
            patches.extend(self.fade_in.stagger(self.config.fade_in.stagger_ms));
        }
        if self.config.timeline.stagger_ms > 0 {
            patches.extend(self.timeline.stagger(self.config.timeline.stagger_ms));
        }
        patches.extend(self.on_scroll(metrics, regions));
        patches
    }

    // --- User input ---

    pub fn on_theme_toggle(&mut self) -> Vec<Patch> {
        self.theme.toggle()
    }

    pub fn on_hamburger(&mut self) -> Vec<Patch> {
        self.menu.toggle()
    }

    pub fn on_nav_link(&mut self) -> Vec<Patch> {
        self.menu.close()
    }

    #[allow(clippy::unused_self)]
    pub fn on_scroll_top(&mut self) -> Vec<Patch> {
        vec![Patch::ScrollToTop]
    }

    pub fn on_pub_tab(&mut self, index: usize) -> Vec<Patch> {
        self.filter.select(index)
    }

    // --- Scroll and visibility ---

    pub fn on_scroll(&mut self, metrics: &ScrollMetrics, regions: &[Region]) -> Vec<Patch> {
        let mut patches = self.spy.update(metrics.offset, regions);
        patches.push(scroll::scroll_top_patch(metrics.offset, self.config.scroll_top_threshold));
        patches.push(scroll::progress_patch(metrics));
        patches
    }

    /// Element `index` of a reveal group intersected the viewport.
    pub fn on_reveal(&mut self, kind: RevealKind, index: usize) -> Vec<Patch> {
        match kind {
            RevealKind::FadeIn => self.fade_in.reveal(index),
            RevealKind::Timeline => self.timeline.reveal(index),
        }
    }

    #[must_use]
    pub fn is_revealed(&self, kind: RevealKind, index: usize) -> bool {
        match kind {
            RevealKind::FadeIn => self.fade_in.is_revealed(index),
            RevealKind::Timeline => self.timeline.is_revealed(index),
        }
    }

    /// Counter `index` came into view at `now`. Returns `true` when frames
    /// should start being requested for it.
    pub fn on_stat_visible(&mut self, index: usize, now: f64) -> bool {
        match self.counters.get_mut(index) {
            Some(Some(counter)) => counter.start(now),
            _ => false,
        }
    }

    pub fn on_counter_frame(&mut self, index: usize, now: f64) -> Vec<Patch> {
        let Some(Some(counter)) = self.counters.get_mut(index) else {
            return Vec::new();
        };
        counter
            .frame(now)
            .map(|text| vec![Patch::set_text(Target::Stat(index), text)])
            .unwrap_or_default()
    }

    #[must_use]
    pub fn counter_running(&self, index: usize) -> bool {
        matches!(self.counters.get(index), Some(Some(counter)) if counter.is_running())
    }

    // --- Timers ---

    /// Advance the typewriter. `None` when the effect is disabled.
    pub fn on_typewriter_tick(&mut self) -> Option<TypewriterStep> {
        let tick = self.typewriter.as_mut()?.tick();
        Some(TypewriterStep { patch: Patch::set_text(Target::Subtitle, tick.text), delay_ms: tick.delay_ms })
    }
}
