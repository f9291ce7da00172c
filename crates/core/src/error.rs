//! Error taxonomy shared by the functional core and the client shell

/// Classification of a non-success HTTP status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 404
    NotFound,
    /// Any other 4xx
    Client,
    /// 5xx
    Server,
    /// Anything outside the 4xx/5xx ranges
    Unexpected,
}

impl ErrorKind {
    /// Classify a raw status code
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => ErrorKind::NotFound,
            400..=499 => ErrorKind::Client,
            500..=599 => ErrorKind::Server,
            _ => ErrorKind::Unexpected,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::Client => write!(f, "client error"),
            ErrorKind::Server => write!(f, "server error"),
            ErrorKind::Unexpected => write!(f, "unexpected status"),
        }
    }
}

/// A non-success response returned by the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub kind: ErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            kind: ErrorKind::from_status(status),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "[{}] {}", self.status, self.kind)
        } else {
            write!(f, "[{}] {}: {}", self.status, self.kind, self.message)
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A builder invariant was violated before any request was made
    #[error("Invalid query configuration: {0}")]
    Configuration(String),

    #[error("Result bound exceeded: collected {collected} items with max_results = {max_results}")]
    BoundsExceeded { max_results: usize, collected: usize },

    #[error("Query returned no results")]
    EmptyResult,

    #[error("API error {0}")]
    Api(ApiError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Whether the remote service answered with a 404
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Api(ApiError {
                kind: ErrorKind::NotFound,
                ..
            })
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
