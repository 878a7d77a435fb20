use watchlist_core::{update, AppState, Msg, StarRating};

#[test]
fn defaults_match_widget_defaults() {
    let rating = StarRating::default();

    assert_eq!(rating.max(), 5);
    assert_eq!(rating.color(), "#fcc419");
    assert_eq!(rating.size(), 48);
    assert_eq!(rating.rating(), 0);
    assert_eq!(rating.label(), "");
}

#[test]
fn hover_previews_without_committing() {
    let mut rating = StarRating::new(10, "red", 30);
    rating.rate(4);
    rating.hover(7);

    assert_eq!(rating.displayed(), 7);
    assert_eq!(rating.rating(), 4);
    assert_eq!(rating.label(), "7");

    rating.clear_hover();
    assert_eq!(rating.displayed(), 4);
}

#[test]
fn rate_and_hover_are_clamped() {
    let mut rating = StarRating::new(5, "red", 24);
    rating.rate(9);
    assert_eq!(rating.rating(), 5);
    rating.rate(0);
    assert_eq!(rating.rating(), 1);
    rating.hover(12);
    assert_eq!(rating.hovered(), Some(5));

    assert_eq!(StarRating::new(0, "red", 24).max(), 1);
    assert_eq!(
        StarRating::new(3, "red", 24).with_default_rating(8).rating(),
        3
    );
}

#[test]
fn messages_label_the_displayed_star() {
    let messages = ["Terrible", "Bad", "Okay", "Good", "Amazing"]
        .iter()
        .map(|m| m.to_string())
        .collect();
    let mut rating = StarRating::default().with_messages(messages);
    rating.rate(4);
    assert_eq!(rating.label(), "Good");

    // A mismatched message count falls back to numbers.
    let mut rating = StarRating::default().with_messages(vec!["Only one".to_string()]);
    rating.rate(2);
    assert_eq!(rating.label(), "2");
}

#[test]
fn rating_messages_drive_the_widget_in_app_state() {
    let configured = StarRating::new(10, "#fcc419", 30);
    let (state, _) = update(AppState::new(), Msg::RatingConfigured(configured));
    let (state, _) = update(state, Msg::RatingHovered(6));
    assert_eq!(state.view().rating.filled, 6);

    let (state, _) = update(state, Msg::RatingCommitted);
    assert_eq!(state.rating().rating(), 6);
    assert_eq!(state.rating().hovered(), None);

    let (state, _) = update(state, Msg::RatingHovered(2));
    let (state, _) = update(state, Msg::RatingHoverCleared);
    let view = state.view();
    assert_eq!(view.rating.filled, 6);
    assert_eq!(view.rating.max, 10);
}

#[test]
fn committing_nothing_keeps_rating_unset() {
    let (state, _) = update(AppState::new(), Msg::RatingCommitted);

    assert_eq!(state.rating().rating(), 0);
}
