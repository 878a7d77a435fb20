use crate::{MovieId, StarRating, WatchedMovie, WatchedSummary};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub result_count: usize,
    pub results: Vec<ResultRowView>,
    /// Present while a movie is selected; replaces the watched panels.
    pub details: Option<DetailView>,
    pub summary: WatchedSummary,
    pub watched: Vec<WatchedRowView>,
    pub results_open: bool,
    pub watched_open: bool,
    pub rating: RatingView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRowView {
    pub imdb_id: MovieId,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub highlighted: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub imdb_id: MovieId,
    pub title: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WatchedRowView {
    pub title: String,
    pub imdb_rating: f64,
    pub user_rating: f64,
    pub runtime_minutes: u32,
}

impl From<&WatchedMovie> for WatchedRowView {
    fn from(movie: &WatchedMovie) -> Self {
        Self {
            title: movie.title.clone(),
            imdb_rating: movie.imdb_rating,
            user_rating: movie.user_rating,
            runtime_minutes: movie.runtime_minutes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RatingView {
    pub max: u8,
    pub filled: u8,
    pub color: String,
    pub size: u16,
    pub label: String,
}

impl From<&StarRating> for RatingView {
    fn from(rating: &StarRating) -> Self {
        Self {
            max: rating.max(),
            filled: rating.displayed(),
            color: rating.color().to_owned(),
            size: rating.size(),
            label: rating.label(),
        }
    }
}
