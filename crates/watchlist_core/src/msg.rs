use crate::{MovieId, MovieSummary, RequestId, SearchFailure, WatchedMovie};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Results,
    Watched,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the search box.
    QueryChanged(String),
    /// Engine settled a search request.
    SearchSettled {
        request_id: RequestId,
        outcome: Result<Vec<MovieSummary>, SearchFailure>,
    },
    /// User picked a result; picking the selected one again deselects it.
    MovieSelected(MovieId),
    /// User selected whatever row the cursor is on.
    HighlightedSelected,
    /// Move the result cursor by `delta` rows.
    CursorMoved(isize),
    /// User closed the detail panel.
    DetailsClosed,
    /// Replace the watched list (startup seed).
    WatchedLoaded(Vec<WatchedMovie>),
    PanelToggled(Panel),
    RatingHovered(u8),
    RatingHoverCleared,
    /// Commit the currently displayed star count as the rating.
    RatingCommitted,
    /// Replace the star widget (from configuration).
    RatingConfigured(crate::StarRating),
}
