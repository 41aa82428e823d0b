//! Error type for backend calls

use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx status, or an envelope with `success: false`
    #[error("server error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        details: Vec<String>,
    },

    /// Empty or non-JSON body
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Messages to show the user, most general first
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            ApiError::Network(_) => vec![NETWORK_ERROR_MESSAGE.to_string()],
            ApiError::Server {
                message, details, ..
            } => {
                let mut messages = vec![message.clone()];
                messages.extend(details.iter().filter(|d| *d != message).cloned());
                messages
            }
            ApiError::UnexpectedResponse(_) => vec![UNEXPECTED_RESPONSE_MESSAGE.to_string()],
            ApiError::Cancelled => Vec::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_network_message_is_generic() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_messages(), vec![NETWORK_ERROR_MESSAGE.to_string()]);
    }

    #[test]
    fn test_server_message_then_details() {
        let err = ApiError::Server {
            status: 400,
            message: "Validation failed".to_string(),
            details: vec![
                "Serial number already exists".to_string(),
                "Validation failed".to_string(),
            ],
        };
        assert_eq!(
            err.user_messages(),
            vec![
                "Validation failed".to_string(),
                "Serial number already exists".to_string()
            ]
        );
    }

    #[test]
    fn test_cancelled_shows_nothing() {
        assert!(ApiError::Cancelled.user_messages().is_empty());
        assert!(ApiError::Cancelled.is_cancelled());
    }

    #[test]
    fn test_display() {
        let err = ApiError::Server {
            status: 404,
            message: "Not found".to_string(),
            details: vec![],
        };
        assert_eq!(err.to_string(), "server error (404): Not found");
    }
}
