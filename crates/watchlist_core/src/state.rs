use std::fmt;

use crate::view_model::{AppViewModel, DetailView, ResultRowView, WatchedRowView};
use crate::{summarize, Panel, StarRating, WatchedMovie};

pub type MovieId = String;
pub type RequestId = u64;

/// Queries shorter than this (in characters) never hit the network.
pub const MIN_QUERY_LEN: usize = 3;

/// Shown for any non-OK HTTP status; the status itself is only logged.
pub const TRANSPORT_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub imdb_id: MovieId,
    pub title: String,
    pub year: String,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFailure {
    /// Non-OK HTTP status.
    Transport { status: Option<u16> },
    /// The API answered but reported a failure (e.g. "Movie not found!").
    Domain(String),
    /// Anything else on the fetch/decode path.
    Unexpected(String),
}

impl SearchFailure {
    pub fn message(&self) -> &str {
        match self {
            SearchFailure::Transport { .. } => TRANSPORT_ERROR_MESSAGE,
            SearchFailure::Domain(message) | SearchFailure::Unexpected(message) => message,
        }
    }
}

impl fmt::Display for SearchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
    },
    Success(Vec<MovieSummary>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    query: String,
    fetch: FetchState,
    next_request_id: RequestId,
    selected: Option<MovieId>,
    cursor: usize,
    watched: Vec<WatchedMovie>,
    results_open: bool,
    watched_open: bool,
    rating: StarRating,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            query: String::new(),
            fetch: FetchState::Idle,
            next_request_id: 1,
            selected: None,
            cursor: 0,
            watched: Vec::new(),
            results_open: true,
            watched_open: true,
            rating: StarRating::default(),
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// The request whose settle is still awaited, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self.fetch {
            FetchState::Loading { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn results(&self) -> &[MovieSummary] {
        match &self.fetch {
            FetchState::Success(results) => results,
            _ => &[],
        }
    }

    pub fn watched(&self) -> &[WatchedMovie] {
        &self.watched
    }

    pub fn rating(&self) -> &StarRating {
        &self.rating
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let results: Vec<ResultRowView> = self
            .results()
            .iter()
            .enumerate()
            .map(|(index, movie)| ResultRowView {
                imdb_id: movie.imdb_id.clone(),
                title: movie.title.clone(),
                year: movie.year.clone(),
                poster: movie.poster.clone(),
                highlighted: index == self.cursor,
                selected: self.selected.as_deref() == Some(movie.imdb_id.as_str()),
            })
            .collect();

        let details = self.selected.as_ref().map(|id| {
            let known = self.results().iter().find(|movie| &movie.imdb_id == id);
            DetailView {
                imdb_id: id.clone(),
                title: known.map(|movie| movie.title.clone()),
                year: known.map(|movie| movie.year.clone()),
            }
        });

        let error = match &self.fetch {
            FetchState::Failed(message) => Some(message.clone()),
            _ => None,
        };

        AppViewModel {
            query: self.query.clone(),
            is_loading: self.in_flight().is_some(),
            error,
            result_count: results.len(),
            results,
            details,
            summary: summarize(&self.watched),
            watched: self.watched.iter().map(WatchedRowView::from).collect(),
            results_open: self.results_open,
            watched_open: self.watched_open,
            rating: (&self.rating).into(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Stores the new query; returns `false` when it is unchanged.
    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        self.mark_dirty();
        true
    }

    pub(crate) fn allocate_request(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub(crate) fn set_fetch(&mut self, fetch: FetchState) {
        let results_changed = matches!(fetch, FetchState::Success(_))
            || matches!(self.fetch, FetchState::Success(_));
        self.fetch = fetch;
        if results_changed {
            self.cursor = 0;
        }
        self.mark_dirty();
    }

    pub(crate) fn toggle_selection(&mut self, id: MovieId) {
        if self.selected.as_ref() == Some(&id) {
            self.selected = None;
        } else {
            self.selected = Some(id);
        }
        self.mark_dirty();
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.mark_dirty();
        }
    }

    pub(crate) fn highlighted_id(&self) -> Option<MovieId> {
        self.results()
            .get(self.cursor)
            .map(|movie| movie.imdb_id.clone())
    }

    pub(crate) fn move_cursor(&mut self, delta: isize) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        let next = self
            .cursor
            .saturating_add_signed(delta)
            .min(len - 1);
        if next != self.cursor {
            self.cursor = next;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_watched(&mut self, watched: Vec<WatchedMovie>) {
        self.watched = watched;
        self.mark_dirty();
    }

    pub(crate) fn toggle_panel(&mut self, panel: Panel) {
        match panel {
            Panel::Results => self.results_open = !self.results_open,
            Panel::Watched => self.watched_open = !self.watched_open,
        }
        self.mark_dirty();
    }

    pub(crate) fn rating_mut(&mut self) -> &mut StarRating {
        self.mark_dirty();
        &mut self.rating
    }
}
