use thiserror::Error;

/// Failures surfaced by [`crate::ApiClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL (or a path joined onto it) does not parse.
    #[error("invalid API URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// Connection, DNS or body-read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-2xx answer. `message` comes from the backend's `ErrorDto` when present.
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("couldn't decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status behind the failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
