use serde::Deserialize;

use crate::{FailureKind, SearchError, SearchHit};

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<PayloadMovie>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PayloadMovie {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

/// Decode an OMDb search body.
///
/// `Response: "False"` becomes a `FailureKind::Api` error carrying the API's
/// message verbatim; anything that is not JSON of the expected shape is a
/// `FailureKind::Decode` error.
pub fn decode_search_payload(body: &[u8]) -> Result<Vec<SearchHit>, SearchError> {
    let payload: SearchPayload = serde_json::from_slice(body)
        .map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))?;

    if payload.response.eq_ignore_ascii_case("false") {
        let message = payload
            .error
            .unwrap_or_else(|| "Unknown API error".to_string());
        return Err(SearchError::new(FailureKind::Api, message));
    }

    Ok(payload
        .search
        .into_iter()
        .map(|movie| SearchHit {
            imdb_id: movie.imdb_id,
            title: movie.title,
            year: movie.year,
            poster: movie.poster,
        })
        .collect())
}
