use std::time::Duration;

use engine_logging::engine_debug;
use futures_util::StreamExt;
use url::Url;

use crate::{decode_search_payload, FailureKind, SearchError, SearchHit};

#[derive(Debug, Clone)]
pub struct OmdbSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl OmdbSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://www.omdbapi.com/".to_string(),
            api_key: api_key.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait MovieSearcher: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct OmdbClient {
    settings: OmdbSettings,
    client: reqwest::Client,
}

impl OmdbClient {
    pub fn new(settings: OmdbSettings) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    /// `<base_url>?s=<query>&apikey=<key>`, with both values form-encoded.
    pub fn search_url(&self, query: &str) -> Result<Url, SearchError> {
        Url::parse_with_params(
            &self.settings.base_url,
            [("s", query), ("apikey", self.settings.api_key.as_str())],
        )
        .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, SearchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }
        Ok(body)
    }
}

#[async_trait::async_trait]
impl MovieSearcher for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.search_url(query)?;
        engine_debug!("GET {} s={:?}", self.settings.base_url, query);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = self.read_body(response).await?;
        decode_search_payload(&body)
    }
}

/// The request URL carries the API key, so it is stripped before the error is kept.
fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    let err = err.without_url();
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SearchError::new(FailureKind::Decode, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
