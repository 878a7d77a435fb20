//! Watchlist core: pure search/selection state machine and view-model helpers.
mod effect;
mod msg;
mod rating;
mod state;
mod update;
mod view_model;
mod watched;

pub use effect::Effect;
pub use msg::{Msg, Panel};
pub use rating::StarRating;
pub use state::{
    AppState, FetchState, MovieId, MovieSummary, RequestId, SearchFailure, MIN_QUERY_LEN,
    TRANSPORT_ERROR_MESSAGE,
};
pub use update::update;
pub use view_model::{AppViewModel, DetailView, RatingView, ResultRowView, WatchedRowView};
pub use watched::{summarize, WatchedMovie, WatchedSummary};
