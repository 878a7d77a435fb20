use watchlist_core::{update, AppState, Msg};

#[test]
fn cursor_move_without_results_is_noop() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::CursorMoved(1));

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}

#[test]
fn close_without_selection_is_noop() {
    let state = AppState::new();
    let (mut next, effects) = update(state.clone(), Msg::DetailsClosed);

    assert_eq!(state, next);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
