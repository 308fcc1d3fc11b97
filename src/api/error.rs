use std::fmt;

/// Failure of a single backend round trip.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...).
    Network(String),
    /// The backend answered with a non-success status.
    Status { status: u16, message: String },
    /// The backend answered successfully but with a body we cannot interpret.
    UnexpectedShape(String),
}

impl ApiError {
    /// Short text suitable for an inline form message.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Network(_) => "the server could not be reached".to_string(),
            ApiError::Status { status, message } if message.trim().is_empty() => {
                format!("server responded with status {status}")
            }
            ApiError::Status { message, .. } => message.clone(),
            ApiError::UnexpectedShape(_) => "unexpected response from server".to_string(),
        }
    }

    pub fn is_unexpected_shape(&self) -> bool {
        matches!(self, ApiError::UnexpectedShape(_))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status { status, message } => {
                write!(f, "Backend returned {status}: {message}")
            }
            ApiError::UnexpectedShape(msg) => write!(f, "Unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Pull a human-readable message out of an error response body.
///
/// Prefers a JSON `message` field, then `error`, then the raw text.
pub fn error_message(body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(msg) = map.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}
