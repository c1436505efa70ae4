use super::*;

fn fixture() -> PubFilter {
    PubFilter::new(
        vec!["journal".into(), "conference".into(), "all".into()],
        vec![Some("journal".into()), Some("conference".into()), Some("journal".into()), None],
    )
}

fn hidden_cards(patches: &[Patch]) -> Vec<usize> {
    patches
        .iter()
        .filter_map(|p| match p {
            Patch::AddClass { target: Target::PubCard(i), class } if class == "pub-hidden" => Some(*i),
            _ => None,
        })
        .collect()
}

fn shown_cards(patches: &[Patch]) -> Vec<usize> {
    patches
        .iter()
        .filter_map(|p| match p {
            Patch::RemoveClass { target: Target::PubCard(i), class } if class == "pub-hidden" => Some(*i),
            _ => None,
        })
        .collect()
}

#[test]
fn is_shown_matches_tag_or_all() {
    assert!(is_shown("all", Some("journal")));
    assert!(is_shown("all", None));
    assert!(is_shown("journal", Some("journal")));
    assert!(!is_shown("journal", Some("conference")));
    assert!(!is_shown("journal", None));
}

#[test]
fn selecting_a_tag_shows_exactly_matching_cards() {
    let mut filter = fixture();
    let patches = filter.select(0);
    assert_eq!(shown_cards(&patches), vec![0, 2]);
    assert_eq!(hidden_cards(&patches), vec![1, 3]);
    assert_eq!(filter.current(), Some("journal"));
}

#[test]
fn selecting_all_shows_every_card() {
    let mut filter = fixture();
    let patches = filter.select(2);
    assert_eq!(shown_cards(&patches), vec![0, 1, 2, 3]);
    assert!(hidden_cards(&patches).is_empty());
}

#[test]
fn select_moves_active_class_to_the_clicked_tab() {
    let mut filter = fixture();
    let patches = filter.select(1);
    assert_eq!(
        &patches[..4],
        &[
            Patch::remove_class(Target::PubTab(0), "active"),
            Patch::remove_class(Target::PubTab(1), "active"),
            Patch::remove_class(Target::PubTab(2), "active"),
            Patch::add_class(Target::PubTab(1), "active"),
        ]
    );
}

#[test]
fn boot_applies_active_tab_without_touching_tabs() {
    let mut filter = fixture();
    let patches = filter.boot(Some(1));
    assert_eq!(patches.len(), 4);
    assert!(patches.iter().all(|p| matches!(p.target(), Some(Target::PubCard(_)))));
    assert_eq!(shown_cards(&patches), vec![1]);
}

#[test]
fn boot_without_active_tab_is_a_noop() {
    let mut filter = fixture();
    assert!(filter.boot(None).is_empty());
    assert_eq!(filter.current(), None);
}

#[test]
fn out_of_range_tab_is_ignored() {
    let mut filter = fixture();
    assert!(filter.select(9).is_empty());
    assert!(filter.boot(Some(9)).is_empty());
}
