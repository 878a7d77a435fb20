use crate::MovieId;

#[derive(Debug, Clone, PartialEq)]
pub struct WatchedMovie {
    pub imdb_id: MovieId,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub runtime_minutes: u32,
    pub imdb_rating: f64,
    pub user_rating: f64,
}

/// Aggregates over the watched list. Averages are `None` for an empty list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: Option<f64>,
    pub avg_user_rating: Option<f64>,
    pub avg_runtime: Option<f64>,
}

pub fn summarize(watched: &[WatchedMovie]) -> WatchedSummary {
    WatchedSummary {
        count: watched.len(),
        avg_imdb_rating: mean(watched.iter().map(|movie| movie.imdb_rating)),
        avg_user_rating: mean(watched.iter().map(|movie| movie.user_rating)),
        avg_runtime: mean(watched.iter().map(|movie| f64::from(movie.runtime_minutes))),
    }
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> Option<f64> {
    let len = values.len();
    if len == 0 {
        return None;
    }
    Some(values.sum::<f64>() / len as f64)
}
