use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::{engine_debug, engine_info, engine_warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, MovieSearcher, RequestId};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] io::Error),
    #[error("search engine has stopped")]
    Stopped,
}

enum EngineCommand {
    Search { request_id: RequestId, query: String },
    Cancel { request_id: RequestId },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Runs searches on a background runtime and reports completions over a channel.
///
/// A cancelled search never produces an event. Dropping the handle stops the
/// worker thread once its command channel closes.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(searcher: Arc<dyn MovieSearcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("watchlist-engine")
            .build()?;

        thread::spawn(move || {
            let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Search { request_id, query } => {
                        let token = CancellationToken::new();
                        if let Ok(mut map) = in_flight.lock() {
                            map.insert(request_id, token.clone());
                        }
                        runtime.spawn(run_search(
                            searcher.clone(),
                            request_id,
                            query,
                            token,
                            in_flight.clone(),
                            event_tx.clone(),
                        ));
                    }
                    EngineCommand::Cancel { request_id } => {
                        let token = in_flight
                            .lock()
                            .ok()
                            .and_then(|mut map| map.remove(&request_id));
                        match token {
                            Some(token) => {
                                engine_debug!("Cancelling search request_id={}", request_id);
                                token.cancel();
                            }
                            None => {
                                engine_debug!(
                                    "Cancel for settled search request_id={}",
                                    request_id
                                );
                            }
                        }
                    }
                }
            }
            engine_info!("Engine command channel closed; shutting down");
            runtime.shutdown_background();
        });

        Ok(Self { cmd_tx, event_rx })
    }

    /// Fails with [`EngineError::Stopped`] once the worker thread is gone.
    pub fn search(
        &self,
        request_id: RequestId,
        query: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::Search {
            request_id,
            query: query.into(),
        })
    }

    pub fn cancel(&self, request_id: RequestId) -> Result<(), EngineError> {
        self.send(EngineCommand::Cancel { request_id })
    }

    fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        self.cmd_tx.send(command).map_err(|_| EngineError::Stopped)
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn run_search(
    searcher: Arc<dyn MovieSearcher>,
    request_id: RequestId,
    query: String,
    token: CancellationToken,
    in_flight: InFlight,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let result = tokio::select! {
        biased;
        _ = token.cancelled() => None,
        result = searcher.search(&query) => Some(result),
    };

    if let Ok(mut map) = in_flight.lock() {
        map.remove(&request_id);
    }

    match result {
        Some(result) => {
            if let Err(err) = &result {
                engine_warn!("Search request_id={} failed: {}", request_id, err);
            }
            let _ = event_tx.send(EngineEvent::SearchCompleted { request_id, result });
        }
        None => engine_debug!("Search request_id={} cancelled", request_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detached_handle() -> EngineHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (_event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        EngineHandle { cmd_tx, event_rx }
    }

    #[test]
    fn commands_fail_once_the_worker_is_gone() {
        let engine = detached_handle();

        assert!(matches!(engine.search(1, "barbie"), Err(EngineError::Stopped)));
        assert!(matches!(engine.cancel(1), Err(EngineError::Stopped)));
        assert!(engine.try_recv().is_none());
    }
}
