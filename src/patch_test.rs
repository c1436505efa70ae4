use super::*;

#[test]
fn scroll_to_top_addresses_the_window() {
    assert_eq!(Patch::ScrollToTop.target(), None);
}

#[test]
fn element_patches_carry_their_target() {
    let patches = [
        Patch::add_class(Target::NavLinks, "open"),
        Patch::remove_class(Target::NavEntry(2), "active"),
        Patch::set_attribute(Target::Hamburger, "aria-expanded", "true"),
        Patch::remove_attribute(Target::Root, "data-theme"),
        Patch::set_html(Target::ThemeToggle, "<i></i>"),
        Patch::set_text(Target::Stat(1), "42"),
        Patch::set_style(Target::PubCard(3), "transition-delay", "120ms"),
    ];
    let targets: Vec<_> = patches.iter().map(Patch::target).collect();
    assert_eq!(
        targets,
        vec![
            Some(Target::NavLinks),
            Some(Target::NavEntry(2)),
            Some(Target::Hamburger),
            Some(Target::Root),
            Some(Target::ThemeToggle),
            Some(Target::Stat(1)),
            Some(Target::PubCard(3)),
        ]
    );
}

#[test]
fn toggle_class_picks_add_or_remove() {
    assert_eq!(Patch::toggle_class(Target::ScrollTop, "visible", true), Patch::add_class(Target::ScrollTop, "visible"));
    assert_eq!(
        Patch::toggle_class(Target::ScrollTop, "visible", false),
        Patch::remove_class(Target::ScrollTop, "visible")
    );
}
