use super::*;

#[test]
fn empty_input_short_circuits_without_query() {
    let mut state = SuggestionState::<String> { items: vec!["old".to_owned()], ..SuggestionState::default() };
    assert_eq!(state.begin(""), None);
    assert!(state.items.is_empty());
    assert!(!state.open);
}

#[test]
fn non_empty_input_yields_tagged_query() {
    let mut state = SuggestionState::<String>::default();
    let first = state.begin("W").unwrap();
    let second = state.begin("We").unwrap();
    assert_eq!(second.text, "We");
    assert!(second.seq > first.seq);
    assert!(state.open);
}

#[test]
fn stale_reply_is_discarded() {
    let mut state = SuggestionState::default();
    let first = state.begin("W").unwrap();
    let second = state.begin("We").unwrap();

    assert!(state.accept(second.seq, vec!["Wendy"]));
    assert!(!state.accept(first.seq, vec!["Wallace", "Wendy"]));
    assert_eq!(state.items, vec!["Wendy"]);
}

#[test]
fn reply_after_clearing_input_is_discarded() {
    let mut state = SuggestionState::default();
    let pending = state.begin("W").unwrap();
    assert_eq!(state.begin(""), None);
    assert!(!state.accept(pending.seq, vec!["Wendy"]));
    assert!(state.items.is_empty());
}

#[test]
fn close_drops_items_and_invalidates_pending() {
    let mut state = SuggestionState::default();
    let pending = state.begin("W").unwrap();
    state.close();
    assert!(!state.open);
    assert!(!state.accept(pending.seq, vec![1, 2]));
}

#[test]
fn editing_selected_label_clears_selection() {
    assert!(clears_selection("Wendy Smi", Some("Wendy Smith")));
    assert!(clears_selection("Wendy Smithx", Some("Wendy Smith")));
    assert!(!clears_selection("Wendy Smith", Some("Wendy Smith")));
}

#[test]
fn empty_input_clears_selection_even_without_one() {
    assert!(clears_selection("", None));
    assert!(clears_selection("", Some("Wendy Smith")));
    assert!(!clears_selection("We", None));
}

#[test]
fn new_selection_replaces_input_text() {
    assert_eq!(synced_text("", None, "Wendy Smith"), Some("Wendy Smith".to_owned()));
    assert_eq!(synced_text("We", Some(""), "Wendy Smith"), Some("Wendy Smith".to_owned()));
    assert_eq!(synced_text("Wendy Smith", Some(""), "Wendy Smith"), None);
}

#[test]
fn selection_dropped_by_typing_keeps_typed_text() {
    assert_eq!(synced_text("Wendy Smi", Some("Wendy Smith"), ""), None);
}

#[test]
fn selection_cleared_elsewhere_empties_untouched_text() {
    assert_eq!(synced_text("Wendy Smith", Some("Wendy Smith"), ""), Some(String::new()));
}
