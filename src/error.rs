use reqwest::StatusCode;

/// Failure of a single recommendations request
///
/// Every way a request can go wrong ends up here and is shown to the user as one
/// line of text. Nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("Recommendation service returned status {status}")]
    Status {
        status: StatusCode,
        /// `error` field of the response body, when the body carried one
        message: Option<String>,
    },

    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl RequestError {
    /// Text shown in the error region, without the `Error: ` prefix
    ///
    /// Prefers the server's own `error` text, then a status-based message, then
    /// the description of the underlying failure.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            RequestError::Status { status, .. } => {
                format!("HTTP error! Status: {}", status.as_u16())
            }
            RequestError::Transport(e) => e.to_string(),
            RequestError::Decode(msg) | RequestError::InvalidUrl(msg) => msg.clone(),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        RequestError::Decode(e.to_string())
    }
}

pub type RequestResult<T> = Result<T, RequestError>;
