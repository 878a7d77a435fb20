use std::sync::Arc;
use std::time::Duration;

use watchlist_engine::{
    EngineEvent, EngineHandle, FailureKind, MovieSearcher, SearchError, SearchHit,
};

/// Answers after a per-query delay; queries starting with "fail" error out.
struct ScriptedSearcher;

#[async_trait::async_trait]
impl MovieSearcher for ScriptedSearcher {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let delay = if query.len() <= 3 { 400 } else { 20 };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if query.starts_with("fail") {
            return Err(SearchError {
                kind: FailureKind::Api,
                message: "Movie not found!".to_string(),
            });
        }
        Ok(vec![SearchHit {
            imdb_id: format!("id-{query}"),
            title: query.to_string(),
            year: "2023".to_string(),
            poster: "N/A".to_string(),
        }])
    }
}

fn engine() -> EngineHandle {
    engine_logging::initialize_for_tests();
    EngineHandle::new(Arc::new(ScriptedSearcher)).expect("engine")
}

fn collect_events(engine: &EngineHandle, window: Duration) -> Vec<EngineEvent> {
    let deadline = std::time::Instant::now() + window;
    let mut events = Vec::new();
    while let Some(remaining) = deadline.checked_duration_since(std::time::Instant::now()) {
        if let Some(event) = engine.recv_timeout(remaining) {
            events.push(event);
        }
    }
    events
}

#[test]
fn completed_search_is_reported() {
    let engine = engine();
    engine.search(1, "barbie").unwrap();

    let event = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    match event {
        EngineEvent::SearchCompleted { request_id, result } => {
            assert_eq!(request_id, 1);
            assert_eq!(result.unwrap()[0].title, "barbie");
        }
    }
}

#[test]
fn failures_are_reported_with_their_kind() {
    let engine = engine();
    engine.search(4, "failing").unwrap();

    let EngineEvent::SearchCompleted { request_id, result } = engine
        .recv_timeout(Duration::from_secs(5))
        .expect("completion event");
    assert_eq!(request_id, 4);
    assert_eq!(result.unwrap_err().kind, FailureKind::Api);
}

#[test]
fn cancelled_search_emits_nothing() {
    let engine = engine();
    engine.search(1, "bar").unwrap();
    engine.cancel(1).unwrap();
    engine.search(2, "barbie").unwrap();

    let events = collect_events(&engine, Duration::from_millis(800));
    let ids: Vec<_> = events
        .iter()
        .map(|event| match event {
            EngineEvent::SearchCompleted { request_id, .. } => *request_id,
        })
        .collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn cancelling_a_settled_search_is_harmless() {
    let engine = engine();
    engine.search(9, "alien").unwrap();
    assert!(engine.recv_timeout(Duration::from_secs(5)).is_some());

    engine.cancel(9).unwrap();
    engine.search(10, "aliens").unwrap();
    assert!(engine.recv_timeout(Duration::from_secs(5)).is_some());
}
