//! DOM mutations produced by the core.
//!
//! Components never touch the document. They return `Patch` lists addressed
//! to symbolic [`Target`]s, and the browser shell resolves each target to the
//! element it bound at startup. Patches are applied in order; a patch whose
//! target has no bound element is dropped.

#[cfg(test)]
#[path = "patch_test.rs"]
mod patch_test;

/// A page element, addressed by role and (for repeated elements) document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    ThemeToggle,
    Hamburger,
    NavLinks,
    /// The n-th in-page navigation link.
    NavEntry(usize),
    ScrollTop,
    ProgressBar,
    PubTab(usize),
    PubCard(usize),
    /// The hero subtitle driven by the typewriter.
    Subtitle,
    Stat(usize),
    FadeIn(usize),
    TimelineItem(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    AddClass { target: Target, class: String },
    RemoveClass { target: Target, class: String },
    SetAttribute { target: Target, name: String, value: String },
    RemoveAttribute { target: Target, name: String },
    SetHtml { target: Target, html: String },
    SetText { target: Target, text: String },
    SetStyle { target: Target, property: String, value: String },
    /// Smoothly scroll the window back to offset zero.
    ScrollToTop,
}

impl Patch {
    pub fn add_class(target: Target, class: impl Into<String>) -> Self {
        Self::AddClass { target, class: class.into() }
    }

    pub fn remove_class(target: Target, class: impl Into<String>) -> Self {
        Self::RemoveClass { target, class: class.into() }
    }

    /// Add `class` when `on`, remove it otherwise.
    pub fn toggle_class(target: Target, class: impl Into<String>, on: bool) -> Self {
        if on { Self::add_class(target, class) } else { Self::remove_class(target, class) }
    }

    pub fn set_attribute(target: Target, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetAttribute { target, name: name.into(), value: value.into() }
    }

    pub fn remove_attribute(target: Target, name: impl Into<String>) -> Self {
        Self::RemoveAttribute { target, name: name.into() }
    }

    pub fn set_html(target: Target, html: impl Into<String>) -> Self {
        Self::SetHtml { target, html: html.into() }
    }

    pub fn set_text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }

    pub fn set_style(target: Target, property: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property: property.into(), value: value.into() }
    }

    /// The element this patch addresses, or `None` for window-level patches.
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        match self {
            Self::AddClass { target, .. }
            | Self::RemoveClass { target, .. }
            | Self::SetAttribute { target, .. }
            | Self::RemoveAttribute { target, .. }
            | Self::SetHtml { target, .. }
            | Self::SetText { target, .. }
            | Self::SetStyle { target, .. } => Some(*target),
            Self::ScrollToTop => None,
        }
    }
}
