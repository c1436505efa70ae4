//! Element bindings and patch application.
//!
//! Every element the page behaviors touch is looked up once in
//! [`Dom::bind`]. Missing elements are logged and left unbound, which turns
//! any patch addressed to them into a no-op.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::consts::ACTIVE_CLASS;
use crate::error::DomError;
use crate::page::PageInventory;
use crate::patch::{Patch, Target};
use crate::reveal::RevealKind;
use crate::scroll::ScrollMetrics;
use crate::spy::Region;

const THEME_TOGGLE_ID: &str = "theme-toggle";
const HAMBURGER_ID: &str = "hamburger";
const NAV_LINKS_ID: &str = "nav-links";
const SCROLL_TOP_ID: &str = "scroll-top";
const PROGRESS_ID: &str = "scroll-progress";

const NAV_ENTRY_SELECTOR: &str = r##".nav-links li a[href^="#"]"##;
const SECTION_SELECTOR: &str = "section[id]";
const PUB_TAB_SELECTOR: &str = ".pub-tab";
const PUB_CARD_SELECTOR: &str = ".pub-card";
const SUBTITLE_SELECTOR: &str = ".hero-content h2";
const STAT_SELECTOR: &str = ".stat-number";
const FADE_IN_SELECTOR: &str = ".fade-in";
const TIMELINE_SELECTOR: &str = ".timeline-item";

pub struct Dom {
    window: Window,
    root: Option<Element>,
    theme_toggle: Option<Element>,
    hamburger: Option<Element>,
    nav_links: Option<Element>,
    /// Every link inside the collapsible menu.
    menu_links: Vec<Element>,
    nav_entries: Vec<Element>,
    sections: Vec<HtmlElement>,
    scroll_top: Option<Element>,
    progress_bar: Option<Element>,
    pub_tabs: Vec<Element>,
    pub_cards: Vec<Element>,
    subtitle: Option<Element>,
    stats: Vec<Element>,
    fade_ins: Vec<Element>,
    timeline_items: Vec<Element>,
}

impl Dom {
    pub fn bind(window: Window, document: &Document) -> Result<Self, DomError> {
        let nav_links = by_id(document, NAV_LINKS_ID);
        let menu_links = match &nav_links {
            Some(list) => elements(&list.query_selector_all("a")?),
            None => Vec::new(),
        };
        let sections = query_all(document, SECTION_SELECTOR)?
            .iter()
            .filter_map(|el| el.dyn_ref::<HtmlElement>().cloned())
            .collect();

        Ok(Self {
            root: document.document_element(),
            theme_toggle: by_id(document, THEME_TOGGLE_ID),
            hamburger: by_id(document, HAMBURGER_ID),
            nav_links,
            menu_links,
            nav_entries: query_all(document, NAV_ENTRY_SELECTOR)?,
            sections,
            scroll_top: by_id(document, SCROLL_TOP_ID),
            progress_bar: by_id(document, PROGRESS_ID),
            pub_tabs: query_all(document, PUB_TAB_SELECTOR)?,
            pub_cards: query_all(document, PUB_CARD_SELECTOR)?,
            subtitle: document.query_selector(SUBTITLE_SELECTOR)?,
            stats: query_all(document, STAT_SELECTOR)?,
            fade_ins: query_all(document, FADE_IN_SELECTOR)?,
            timeline_items: query_all(document, TIMELINE_SELECTOR)?,
            window,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Describe the bound markup for [`crate::page::Page::new`].
    pub fn inventory(&self) -> PageInventory {
        PageInventory {
            nav_hrefs: self.nav_entries.iter().map(|a| a.get_attribute("href").unwrap_or_default()).collect(),
            tab_filters: self
                .pub_tabs
                .iter()
                .map(|tab| tab.get_attribute("data-filter").unwrap_or_default())
                .collect(),
            active_tab: self.pub_tabs.iter().position(|tab| tab.class_list().contains(ACTIVE_CLASS)),
            card_types: self.pub_cards.iter().map(|card| card.get_attribute("data-type")).collect(),
            fade_in_count: self.fade_ins.len(),
            timeline_count: self.timeline_items.len(),
            stat_texts: self.stats.iter().map(|el| el.text_content().unwrap_or_default()).collect(),
            has_subtitle: self.subtitle.is_some(),
        }
    }

    pub fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Root => self.root.as_ref(),
            Target::ThemeToggle => self.theme_toggle.as_ref(),
            Target::Hamburger => self.hamburger.as_ref(),
            Target::NavLinks => self.nav_links.as_ref(),
            Target::NavEntry(i) => self.nav_entries.get(i),
            Target::ScrollTop => self.scroll_top.as_ref(),
            Target::ProgressBar => self.progress_bar.as_ref(),
            Target::PubTab(i) => self.pub_tabs.get(i),
            Target::PubCard(i) => self.pub_cards.get(i),
            Target::Subtitle => self.subtitle.as_ref(),
            Target::Stat(i) => self.stats.get(i),
            Target::FadeIn(i) => self.fade_ins.get(i),
            Target::TimelineItem(i) => self.timeline_items.get(i),
        }
    }

    pub fn menu_links(&self) -> &[Element] {
        &self.menu_links
    }

    pub fn pub_tabs(&self) -> &[Element] {
        &self.pub_tabs
    }

    pub fn stats(&self) -> &[Element] {
        &self.stats
    }

    pub fn reveal_elements(&self, kind: RevealKind) -> &[Element] {
        match kind {
            RevealKind::FadeIn => &self.fade_ins,
            RevealKind::Timeline => &self.timeline_items,
        }
    }

    pub fn scroll_metrics(&self) -> ScrollMetrics {
        let offset = self.window.scroll_y().unwrap_or(0.0);
        let viewport_height = self
            .window
            .inner_height()
            .map_or(0.0, |height| height.as_f64().unwrap_or(0.0));
        let scroll_height = self.root.as_ref().map_or(0.0, |root| f64::from(root.scroll_height()));
        ScrollMetrics::new(offset, scroll_height, viewport_height)
    }

    /// Current layout of every `section[id]`, in document order.
    pub fn regions(&self) -> Vec<Region> {
        self.sections
            .iter()
            .map(|section| Region::new(section.id(), f64::from(section.offset_top()), f64::from(section.offset_height())))
            .collect()
    }

    /// High-resolution timestamp on the same clock as animation frames.
    pub fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |perf| perf.now())
    }

    pub fn request_frame(&self, callback: &Closure<dyn FnMut(f64)>) -> Result<(), DomError> {
        self.window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(())
    }

    /// Apply patches in order. Failures are logged and skipped.
    pub fn apply(&self, patches: &[Patch]) {
        for patch in patches {
            if let Err(err) = self.apply_one(patch) {
                log::warn!("failed to apply {patch:?}: {err}");
            }
        }
    }

    fn apply_one(&self, patch: &Patch) -> Result<(), DomError> {
        match patch {
            Patch::AddClass { target, class } => self.on_element(*target, |el| Ok(el.class_list().add_1(class)?)),
            Patch::RemoveClass { target, class } => {
                self.on_element(*target, |el| Ok(el.class_list().remove_1(class)?))
            }
            Patch::SetAttribute { target, name, value } => {
                self.on_element(*target, |el| Ok(el.set_attribute(name, value)?))
            }
            Patch::RemoveAttribute { target, name } => self.on_element(*target, |el| Ok(el.remove_attribute(name)?)),
            Patch::SetHtml { target, html } => self.on_element(*target, |el| {
                el.set_inner_html(html);
                Ok(())
            }),
            Patch::SetText { target, text } => self.on_element(*target, |el| {
                el.set_text_content(Some(text.as_str()));
                Ok(())
            }),
            Patch::SetStyle { target, property, value } => self.on_element(*target, |el| {
                let Some(html) = el.dyn_ref::<HtmlElement>() else {
                    return Err(DomError::Missing(format!("{target:?} is not styleable")));
                };
                Ok(html.style().set_property(property, value)?)
            }),
            Patch::ScrollToTop => {
                self.scroll_to_top();
                Ok(())
            }
        }
    }

    /// Run `op` on the element bound to `target`; unbound targets are a no-op.
    fn on_element(
        &self,
        target: Target,
        op: impl FnOnce(&Element) -> Result<(), DomError>,
    ) -> Result<(), DomError> {
        self.element(target).map_or(Ok(()), op)
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Position of `target` within `list`.
pub fn position(list: &[Element], target: &Element) -> Option<usize> {
    list.iter().position(|el| el == target)
}

fn by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        log::debug!("#{id} not found; its behavior is disabled");
    }
    found
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let found = elements(&document.query_selector_all(selector)?);
    log::debug!("{selector}: {} element(s)", found.len());
    Ok(found)
}

fn elements(list: &web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}
