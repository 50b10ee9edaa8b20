use reqwest::{header::InvalidHeaderValue, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("unauthorized: {0}")]
    Unauthorized(StatusCode),

    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    #[error("alias \"{0}\" is already taken")]
    AliasTaken(String),

    #[error("Received an empty token response from the server.")]
    EmptyToken,

    #[error("token cannot be sent as a header: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),

    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Message the remote API attached to a failed response, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Pulls `message`, then `error`, out of a JSON error body.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(String::from)
}
