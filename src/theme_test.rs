use super::*;

fn switcher(stored: Option<&str>, system_dark: bool) -> ThemeSwitcher<MemoryStore> {
    ThemeSwitcher::new(MemoryStore::new(stored, system_dark))
}

// =============================================================
// Initial mode
// =============================================================

#[test]
fn stored_preference_wins_over_system() {
    assert_eq!(resolve_initial(Some("dark"), false), Mode::Dark);
    assert_eq!(resolve_initial(Some("light"), true), Mode::Light);
}

#[test]
fn absent_preference_follows_system() {
    assert_eq!(resolve_initial(None, true), Mode::Dark);
    assert_eq!(resolve_initial(None, false), Mode::Light);
}

#[test]
fn unrecognized_stored_value_is_light() {
    assert_eq!(resolve_initial(Some("sepia"), true), Mode::Light);
}

#[test]
fn stored_dark_sets_marker_and_sun_icon() {
    let mut theme = switcher(Some("dark"), false);
    let patches = theme.boot();
    assert_eq!(
        patches,
        vec![
            Patch::set_attribute(Target::Root, "data-theme", "dark"),
            Patch::set_html(Target::ThemeToggle, r#"<i class="fas fa-sun"></i>"#),
        ]
    );
}

#[test]
fn light_mode_clears_marker_and_shows_moon() {
    let mut theme = switcher(Some("light"), true);
    let patches = theme.boot();
    assert_eq!(
        patches,
        vec![
            Patch::remove_attribute(Target::Root, "data-theme"),
            Patch::set_html(Target::ThemeToggle, r#"<i class="fas fa-moon"></i>"#),
        ]
    );
}

#[test]
fn boot_persists_the_resolved_mode() {
    let mut theme = switcher(None, true);
    theme.boot();
    assert_eq!(theme.store().value.as_deref(), Some("dark"));
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggle_inverts_and_persists() {
    let mut theme = switcher(Some("light"), false);
    theme.boot();

    theme.toggle();
    assert_eq!(theme.mode(), Mode::Dark);
    assert_eq!(theme.store().value.as_deref(), Some("dark"));

    theme.toggle();
    assert_eq!(theme.mode(), Mode::Light);
    assert_eq!(theme.store().value.as_deref(), Some("light"));
}

#[test]
fn toggle_from_dark_removes_marker() {
    let mut theme = switcher(Some("dark"), false);
    let patches = theme.toggle();
    assert_eq!(patches[0], Patch::remove_attribute(Target::Root, "data-theme"));
}

#[test]
fn mode_round_trips_through_storage_strings() {
    for mode in [Mode::Light, Mode::Dark] {
        assert_eq!(Mode::from_stored(mode.as_str()), mode);
    }
}
