use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the projects backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to call {call}: {source}")]
    Transport {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// Non-2xx response. `message` is the backend's `error` field when present.
    #[error("{message}")]
    Status {
        call: &'static str,
        status: StatusCode,
        message: String,
    },
    #[error("Failed to parse {call} response: {source}")]
    Decode {
        call: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Invalid API URL: {0}")]
    Url(String),
}

