//! Mobile navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{ARIA_EXPANDED, OPEN_CLASS};
use crate::patch::{Patch, Target};

/// Open/closed state of the collapsible link list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The hamburger was activated: flip the list and mirror it into `aria-expanded`.
    pub fn toggle(&mut self) -> Vec<Patch> {
        self.open = !self.open;
        vec![
            Patch::toggle_class(Target::NavLinks, OPEN_CLASS, self.open),
            Patch::set_attribute(Target::Hamburger, ARIA_EXPANDED, self.open.to_string()),
        ]
    }

    /// A link inside the menu was activated. Always closes, even if already closed.
    pub fn close(&mut self) -> Vec<Patch> {
        self.open = false;
        vec![Patch::remove_class(Target::NavLinks, OPEN_CLASS)]
    }
}
