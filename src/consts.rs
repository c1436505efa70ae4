//! Shared constants: default timings, thresholds, and the markup vocabulary.

// ── Scroll ──────────────────────────────────────────────────────

/// Height of the fixed header, added to the scroll offset when probing sections.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD_PX: f64 = 400.0;

// ── Typewriter ──────────────────────────────────────────────────

pub const TYPE_STEP_MS: u32 = 55;
pub const DELETE_STEP_MS: u32 = 28;
/// Pause once a phrase is fully typed.
pub const HOLD_MS: u32 = 2200;
/// Pause after a phrase is fully deleted, before the next one starts.
pub const NEXT_PHRASE_MS: u32 = 400;
/// Delay between startup and the first typewriter tick.
pub const TYPEWRITER_START_MS: u32 = 900;

pub const DEFAULT_PHRASES: [&str; 4] = [
    "Data Scientist & PhD Candidate",
    "AI & Deep Learning Researcher",
    "Medical Wearable Computing Expert",
    "Generative AI Enthusiast",
];

// ── Counters ────────────────────────────────────────────────────

pub const COUNTER_DURATION_MS: f64 = 1800.0;
pub const COUNTER_THRESHOLD: f64 = 0.6;

// ── Reveal ──────────────────────────────────────────────────────

pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -40px 0px";
pub const CARD_STAGGER_MS: u32 = 40;

pub const TIMELINE_THRESHOLD: f64 = 0.15;
pub const TIMELINE_ROOT_MARGIN: &str = "0px 0px -30px 0px";
pub const TIMELINE_STAGGER_MS: u32 = 80;

// ── Markup vocabulary ───────────────────────────────────────────

pub const STORAGE_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";
pub const SUN_ICON_HTML: &str = r#"<i class="fas fa-sun"></i>"#;
pub const MOON_ICON_HTML: &str = r#"<i class="fas fa-moon"></i>"#;

pub const OPEN_CLASS: &str = "open";
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const TIMELINE_VISIBLE_CLASS: &str = "tl-visible";
pub const PUB_HIDDEN_CLASS: &str = "pub-hidden";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const TRANSITION_DELAY: &str = "transition-delay";

/// Filter value that matches every publication card.
pub const FILTER_ALL: &str = "all";
