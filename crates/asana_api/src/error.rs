//! Error model used by Asana API client operations.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AsanaError>;

/// Represents the error conditions surfaced by the Asana client: rejected
/// credentials, rate limiting (with the server's retry hint when it sends
/// one), unreachable network and everything else collapsed into `Unknown`.
#[derive(Debug, Error)]
pub enum AsanaError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rate limited")]
    RateLimited { retry_after: Option<Duration> },
    #[error("network unavailable: {0}")]
    Network(String),
    #[error("unexpected error: {0}")]
    Unknown(String),
}

impl AsanaError {
    /// Maps a non-success HTTP response to the matching error kind.
    pub fn http(status: StatusCode, retry_after: Option<Duration>, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AsanaError::Unauthorized(message),
            StatusCode::TOO_MANY_REQUESTS => AsanaError::RateLimited { retry_after },
            _ => AsanaError::Unknown(format!("http {}: {}", status, message)),
        }
    }

    /// Retry hint in whole seconds, when the server provided one.
    pub fn retry_after_secs(&self) -> Option<u64> {
        match self {
            AsanaError::RateLimited { retry_after } => retry_after.map(|d| d.as_secs()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AsanaError {
    /// Converts reqwest transport failures into semantic AsanaError variants.
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            AsanaError::Network(err.to_string())
        } else {
            AsanaError::Unknown(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AsanaError {
    fn from(err: serde_json::Error) -> Self {
        AsanaError::Unknown(format!("decode error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::AsanaError;
    use reqwest::StatusCode;
    use std::time::Duration;

    #[test]
    fn http_status_maps_to_error_kind() {
        assert!(matches!(
            AsanaError::http(StatusCode::UNAUTHORIZED, None, "bad token"),
            AsanaError::Unauthorized(_)
        ));
        assert!(matches!(
            AsanaError::http(StatusCode::FORBIDDEN, None, "denied"),
            AsanaError::Unauthorized(_)
        ));
        assert!(matches!(
            AsanaError::http(StatusCode::TOO_MANY_REQUESTS, None, ""),
            AsanaError::RateLimited { retry_after: None }
        ));
        assert!(matches!(
            AsanaError::http(StatusCode::INTERNAL_SERVER_ERROR, None, "boom"),
            AsanaError::Unknown(_)
        ));
    }

    #[test]
    fn retry_after_secs_only_set_for_rate_limits() {
        let limited = AsanaError::RateLimited {
            retry_after: Some(Duration::from_secs(30)),
        };
        assert_eq!(limited.retry_after_secs(), Some(30));
        assert_eq!(AsanaError::Unknown("x".into()).retry_after_secs(), None);
    }
}
