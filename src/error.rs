use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LearnHubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LearnHub API error: status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, LearnHubError>;

impl LearnHubError {
    /// True when the backend answered 401/403, i.e. the configured token is
    /// missing or stale.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            LearnHubError::Api { status, .. }
                if *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
        )
    }
}
