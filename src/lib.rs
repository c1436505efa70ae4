//! Client-side interactivity for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and progressively enhances existing
//! markup: theme switching, the mobile menu, scroll-linked navigation
//! highlighting, a scroll-to-top button, a publication filter, reveal
//! animations, a scroll progress bar, a typewriter subtitle, and animated
//! statistic counters.
//!
//! Behavior lives in browser-independent components that turn events into
//! [`patch::Patch`] lists. The [`web`] shell (feature `hydrate`) owns the
//! elements, subscribes to browser events, and applies those patches.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Composition root routing events to components |
//! | [`patch`] | Symbolic DOM targets and mutations |
//! | [`theme`] | Dark/light mode and the preference store seam |
//! | [`menu`] | Mobile navigation open/closed state |
//! | [`spy`] | Active section tracking for the navigation |
//! | [`scroll`] | Scroll-to-top visibility and progress bar width |
//! | [`filter`] | Publication category filter |
//! | [`reveal`] | One-shot fade-in and timeline reveals, cascade delays |
//! | [`typewriter`] | Looping type/delete subtitle effect |
//! | [`counter`] | Eased count-up of statistic numbers |
//! | [`config`] | JSON-overridable settings |
//! | [`error`] | Config and DOM error types |
//! | [`consts`] | Default timings, thresholds, and class names |

pub mod config;
pub mod consts;
pub mod counter;
pub mod error;
pub mod filter;
pub mod menu;
pub mod page;
pub mod patch;
pub mod reveal;
pub mod scroll;
pub mod spy;
pub mod theme;
pub mod typewriter;

#[cfg(feature = "hydrate")]
pub mod web;
