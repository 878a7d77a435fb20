use std::sync::Arc;

use engine_logging::{engine_debug, engine_info, engine_warn};
use watchlist_core::{Effect, MovieSummary, Msg, SearchFailure};
use watchlist_engine::{
    EngineError, EngineEvent, EngineHandle, FailureKind, MovieSearcher, SearchError, SearchHit,
};

/// Executes core effects against the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    local: Vec<Msg>,
}

impl EffectRunner {
    pub fn new(searcher: Arc<dyn MovieSearcher>) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(searcher)?,
            local: Vec::new(),
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartSearch { request_id, query } => {
                    engine_info!(
                        "StartSearch request_id={} query_len={} query={:?}",
                        request_id,
                        query.chars().count(),
                        query
                    );
                    if let Err(err) = self.engine.search(request_id, query) {
                        engine_warn!("StartSearch request_id={} not sent: {}", request_id, err);
                        self.local.push(engine_unavailable(request_id, &err));
                    }
                }
                Effect::CancelSearch { request_id } => {
                    engine_debug!("CancelSearch request_id={}", request_id);
                    if let Err(err) = self.engine.cancel(request_id) {
                        engine_warn!("CancelSearch request_id={} not sent: {}", request_id, err);
                    }
                }
            }
        }
    }

    /// Drains searches settled locally, then every engine event ready without blocking.
    pub fn pending_messages(&mut self) -> Vec<Msg> {
        let mut messages = std::mem::take(&mut self.local);
        while let Some(event) = self.engine.try_recv() {
            messages.push(event_to_msg(event));
        }
        messages
    }
}

pub(crate) fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { request_id, result } => Msg::SearchSettled {
            request_id,
            outcome: result
                .map(|hits| hits.into_iter().map(map_hit).collect())
                .map_err(|err| map_failure(request_id, err)),
        },
    }
}

/// Settles a search the engine could not accept, so the core leaves `Loading`.
pub(crate) fn engine_unavailable(request_id: u64, err: &EngineError) -> Msg {
    Msg::SearchSettled {
        request_id,
        outcome: Err(SearchFailure::Unexpected(err.to_string())),
    }
}

fn map_hit(hit: SearchHit) -> MovieSummary {
    MovieSummary {
        imdb_id: hit.imdb_id,
        title: hit.title,
        year: hit.year,
        poster: hit.poster,
    }
}

fn map_failure(request_id: u64, err: SearchError) -> SearchFailure {
    match err.kind {
        FailureKind::HttpStatus(status) => {
            engine_debug!("Search {} got HTTP {}", request_id, status);
            SearchFailure::Transport {
                status: Some(status),
            }
        }
        FailureKind::Api => SearchFailure::Domain(err.message),
        kind => {
            engine_debug!("Search {} failed with {}", request_id, kind);
            SearchFailure::Unexpected(err.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::{update, AppState};

    fn settled(result: Result<Vec<SearchHit>, SearchError>) -> Msg {
        event_to_msg(EngineEvent::SearchCompleted {
            request_id: 3,
            result,
        })
    }

    #[test]
    fn hits_become_summaries_in_order() {
        let msg = settled(Ok(vec![
            SearchHit {
                imdb_id: "tt1".to_string(),
                title: "One".to_string(),
                year: "2001".to_string(),
                poster: "N/A".to_string(),
            },
            SearchHit {
                imdb_id: "tt2".to_string(),
                title: "Two".to_string(),
                year: "2002".to_string(),
                poster: "N/A".to_string(),
            },
        ]));

        match msg {
            Msg::SearchSettled {
                request_id,
                outcome: Ok(movies),
            } => {
                assert_eq!(request_id, 3);
                let ids: Vec<_> = movies.iter().map(|m| m.imdb_id.as_str()).collect();
                assert_eq!(ids, vec!["tt1", "tt2"]);
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn failures_map_onto_the_core_taxonomy() {
        let cases = [
            (
                SearchError {
                    kind: FailureKind::HttpStatus(500),
                    message: "500 Internal Server Error".to_string(),
                },
                SearchFailure::Transport { status: Some(500) },
            ),
            (
                SearchError {
                    kind: FailureKind::Api,
                    message: "Movie not found!".to_string(),
                },
                SearchFailure::Domain("Movie not found!".to_string()),
            ),
            (
                SearchError {
                    kind: FailureKind::Timeout,
                    message: "operation timed out".to_string(),
                },
                SearchFailure::Unexpected("operation timed out".to_string()),
            ),
        ];

        for (error, expected) in cases {
            match settled(Err(error)) {
                Msg::SearchSettled {
                    outcome: Err(failure),
                    ..
                } => assert_eq!(failure, expected),
                other => panic!("unexpected message {other:?}"),
            }
        }
    }

    #[test]
    fn stopped_engine_settles_the_search() {
        let msg = engine_unavailable(7, &EngineError::Stopped);

        assert_eq!(
            msg,
            Msg::SearchSettled {
                request_id: 7,
                outcome: Err(SearchFailure::Unexpected(
                    "search engine has stopped".to_string()
                )),
            }
        );

        let (state, _) = update(AppState::new(), Msg::QueryChanged("barbie".to_string()));
        assert_eq!(state.in_flight(), Some(1));
        let (state, _) = update(state, msg);
        assert_eq!(state.in_flight(), None);
    }
}
