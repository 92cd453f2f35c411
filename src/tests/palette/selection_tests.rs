use super::*;

const CATS: &[Category] = &[Category::Analytics, Category::Blockchain, Category::Theme];

#[test]
fn command_highlight_wraps_at_both_ends() {
    let mut sel = SelectionState::new();
    assert_eq!(sel.focused, Section::Commands);

    sel.apply(NavEvent::MovePrev, CATS, 4);
    assert_eq!(sel.highlighted, 3);
    sel.apply(NavEvent::MoveNext, CATS, 4);
    assert_eq!(sel.highlighted, 0);
}

#[test]
fn highlight_stays_in_bounds_over_any_walk() {
    let mut sel = SelectionState::new();
    let events = [
        NavEvent::MoveNext,
        NavEvent::MoveNext,
        NavEvent::MovePrev,
        NavEvent::MoveNext,
        NavEvent::MoveNext,
        NavEvent::MoveNext,
        NavEvent::MovePrev,
        NavEvent::MovePrev,
        NavEvent::MovePrev,
    ];
    for (i, e) in events.iter().enumerate() {
        sel.apply(*e, CATS, 3);
        assert!(sel.highlighted < 3, "event {i} left highlight out of bounds");
    }
}

#[test]
fn highlight_is_reclamped_when_the_list_shrinks() {
    let mut sel = SelectionState::new();
    for _ in 0..4 {
        sel.apply(NavEvent::MoveNext, CATS, 5);
    }
    assert_eq!(sel.highlighted, 4);

    sel.apply(NavEvent::MoveNext, CATS, 2);
    assert!(sel.highlighted < 2);
}

#[test]
fn empty_list_keeps_highlight_at_zero() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::MoveNext, CATS, 0);
    sel.apply(NavEvent::MovePrev, CATS, 0);
    assert_eq!(sel.highlighted, 0);
}

#[test]
fn section_toggles_and_arrow_moves() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::ToggleSection, CATS, 1);
    assert_eq!(sel.focused, Section::Categories);
    sel.apply(NavEvent::ToggleSection, CATS, 1);
    assert_eq!(sel.focused, Section::Commands);

    // MoveLeft only acts from Commands, MoveRight only from Categories.
    sel.apply(NavEvent::MoveLeft, CATS, 1);
    assert_eq!(sel.focused, Section::Categories);
    sel.apply(NavEvent::MoveLeft, CATS, 1);
    assert_eq!(sel.focused, Section::Categories);
    sel.apply(NavEvent::MoveRight, CATS, 1);
    assert_eq!(sel.focused, Section::Commands);
    sel.apply(NavEvent::MoveRight, CATS, 1);
    assert_eq!(sel.focused, Section::Commands);
}

#[test]
fn category_cycling_wraps_both_directions() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::ToggleSection, CATS, 1);

    // Nothing selected: Down picks the first, Up picks the last.
    sel.apply(NavEvent::MoveNext, CATS, 1);
    assert_eq!(sel.selected_category, Some(Category::Analytics));
    sel.apply(NavEvent::MovePrev, CATS, 1);
    assert_eq!(sel.selected_category, Some(Category::Theme));
    sel.apply(NavEvent::MoveNext, CATS, 1);
    assert_eq!(sel.selected_category, Some(Category::Analytics));
}

#[test]
fn jump_to_category_in_range_selects_and_refocuses() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::ToggleSection, CATS, 1);
    sel.apply(NavEvent::JumpToCategory(1), CATS, 1);
    assert_eq!(sel.selected_category, Some(Category::Blockchain));
    assert_eq!(sel.focused, Section::Commands);
}

#[test]
fn jump_to_category_out_of_range_is_a_no_op() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::MoveNext, CATS, 3);
    let before = (sel.focused, sel.selected_category, sel.highlighted);

    let out = sel.apply(NavEvent::JumpToCategory(9), CATS, 3);
    assert_eq!(out, NavOutcome::Continue);
    assert_eq!((sel.focused, sel.selected_category, sel.highlighted), before);
}

#[test]
fn query_change_resets_the_highlight() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::MoveNext, CATS, 5);
    sel.apply(NavEvent::MoveNext, CATS, 5);
    sel.apply(NavEvent::QueryChanged, CATS, 5);
    assert_eq!(sel.highlighted, 0);
}

#[test]
fn confirm_returns_the_highlighted_index_or_none() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::MoveNext, CATS, 3);
    assert_eq!(
        sel.apply(NavEvent::Confirm, CATS, 3),
        NavOutcome::Confirmed(Some(1))
    );
    assert_eq!(
        sel.apply(NavEvent::Confirm, CATS, 0),
        NavOutcome::Confirmed(None)
    );
}

#[test]
fn cancel_closes_the_session_for_good() {
    let mut sel = SelectionState::new();
    assert_eq!(sel.apply(NavEvent::Cancel, CATS, 3), NavOutcome::Closed);
    assert!(sel.is_closed());

    // Every later event is inert.
    assert_eq!(sel.apply(NavEvent::MoveNext, CATS, 3), NavOutcome::Closed);
    assert_eq!(sel.apply(NavEvent::Confirm, CATS, 3), NavOutcome::Closed);
    assert_eq!(sel.highlighted, 0);
}

#[test]
fn quick_filter_sets_category_and_focuses_commands() {
    let mut sel = SelectionState::new();
    sel.apply(NavEvent::ToggleSection, CATS, 1);
    sel.set_category(Category::Market);
    assert_eq!(sel.selected_category, Some(Category::Market));
    assert_eq!(sel.focused, Section::Commands);
    assert_eq!(sel.highlighted, 0);
}
