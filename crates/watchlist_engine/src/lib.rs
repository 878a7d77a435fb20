//! Watchlist engine: OMDb client and background search execution.
mod decode;
mod engine;
mod omdb;
mod types;

pub use decode::decode_search_payload;
pub use engine::{EngineError, EngineHandle};
pub use omdb::{MovieSearcher, OmdbClient, OmdbSettings};
pub use types::{EngineEvent, FailureKind, RequestId, SearchError, SearchHit};
