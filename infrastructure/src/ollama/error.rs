//! Error types for the Ollama adapter

use arena_application::GatewayError;
use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Ollama operations
pub type Result<T> = std::result::Result<T, OllamaError>;

/// Errors that can occur when talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Cannot reach Ollama at {url}: {message}")]
    Connect { url: String, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Ollama returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

impl OllamaError {
    pub(crate) fn from_reqwest(error: reqwest::Error, url: &str) -> Self {
        if error.is_timeout() {
            OllamaError::Timeout
        } else if error.is_connect() {
            OllamaError::Connect {
                url: url.to_string(),
                message: error.to_string(),
            }
        } else if error.is_decode() {
            OllamaError::Decode(error.to_string())
        } else {
            OllamaError::Http(error.to_string())
        }
    }
}

impl From<OllamaError> for GatewayError {
    fn from(error: OllamaError) -> Self {
        match error {
            OllamaError::Timeout => GatewayError::Timeout,
            OllamaError::Client(_) | OllamaError::Connect { .. } => {
                GatewayError::Unavailable(error.to_string())
            }
            OllamaError::Status { status, .. }
                if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS =>
            {
                GatewayError::RequestFailed(error.to_string())
            }
            // Unknown model, bad request: retrying will not help
            OllamaError::Status { .. } => GatewayError::Unavailable(error.to_string()),
            OllamaError::Decode(_) => GatewayError::MalformedReply(error.to_string()),
            OllamaError::Http(_) => GatewayError::RequestFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> GatewayError {
        OllamaError::Status {
            status: StatusCode::from_u16(code).unwrap(),
            message: "boom".to_string(),
        }
        .into()
    }

    #[test]
    fn test_missing_model_is_fatal() {
        assert!(status(404).is_fatal());
    }

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
        assert!(status(429).is_retryable());
    }

    #[test]
    fn test_connect_is_fatal() {
        let err: GatewayError = OllamaError::Connect {
            url: "http://localhost:11434".into(),
            message: "connection refused".into(),
        }
        .into();
        assert!(err.is_fatal());
        assert!(err.to_string().contains("localhost:11434"));
    }

    #[test]
    fn test_timeout_maps_to_timeout() {
        assert_eq!(GatewayError::from(OllamaError::Timeout), GatewayError::Timeout);
    }

    #[test]
    fn test_decode_is_malformed() {
        let err: GatewayError = OllamaError::Decode("eof".into()).into();
        assert!(matches!(err, GatewayError::MalformedReply(_)));
    }
}
