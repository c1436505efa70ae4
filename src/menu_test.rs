use super::*;

#[test]
fn menu_starts_closed() {
    assert!(!NavMenu::new().is_open());
}

#[test]
fn toggle_opens_and_sets_aria_expanded() {
    let mut menu = NavMenu::new();
    let patches = menu.toggle();
    assert!(menu.is_open());
    assert_eq!(
        patches,
        vec![
            Patch::add_class(Target::NavLinks, "open"),
            Patch::set_attribute(Target::Hamburger, "aria-expanded", "true"),
        ]
    );
}

#[test]
fn second_toggle_closes() {
    let mut menu = NavMenu::new();
    menu.toggle();
    let patches = menu.toggle();
    assert!(!menu.is_open());
    assert_eq!(patches[0], Patch::remove_class(Target::NavLinks, "open"));
    assert_eq!(patches[1], Patch::set_attribute(Target::Hamburger, "aria-expanded", "false"));
}

#[test]
fn link_activation_closes_idempotently() {
    let mut menu = NavMenu::new();
    menu.toggle();
    assert_eq!(menu.close(), vec![Patch::remove_class(Target::NavLinks, "open")]);
    assert_eq!(menu.close(), vec![Patch::remove_class(Target::NavLinks, "open")]);
    assert!(!menu.is_open());
}

#[test]
fn toggle_after_link_close_reopens() {
    let mut menu = NavMenu::new();
    menu.toggle();
    menu.close();
    menu.toggle();
    assert!(menu.is_open());
}
