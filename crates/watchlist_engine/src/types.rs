use std::fmt;

pub type RequestId = u64;

/// One row of an OMDb `Search` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        request_id: RequestId,
        result: Result<Vec<SearchHit>, SearchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchError {
    pub kind: FailureKind,
    pub message: String,
}

impl SearchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SearchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    /// `Response: "False"`; the message is the API's `Error` field.
    Api,
    Timeout,
    Network,
    Decode,
    TooLarge { max_bytes: u64, actual: Option<u64> },
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Api => write!(f, "api error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
        }
    }
}
