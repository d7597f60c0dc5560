//! Transport Errors
//!
//! Every failure the backend can hand back to a view. None of these are
//! fatal; controllers turn them into a message next to the form or list.

use serde::Deserialize;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Transport(String),
    /// Non-2xx status, with the `message` field of the body when there was one
    #[error("server responded with status {status}")]
    Server { status: u16, message: Option<String> },
    /// The response body did not have the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// Error body shape used by the backend
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Build a server error from a status code and raw response body
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Server { status, message }
    }

    /// Message supplied by the server, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ApiError::Decode(error.to_string())
        } else {
            ApiError::Transport(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_extracted_from_body() {
        let err = ApiError::from_response(422, r#"{"message":"Email already taken"}"#);
        assert_eq!(err.server_message(), Some("Email already taken"));
    }

    #[test]
    fn test_missing_or_blank_message() {
        assert_eq!(ApiError::from_response(500, "").server_message(), None);
        assert_eq!(ApiError::from_response(500, "<html>oops</html>").server_message(), None);
        assert_eq!(ApiError::from_response(400, r#"{"message":" "}"#).server_message(), None);
        assert_eq!(ApiError::from_response(400, r#"{"errors":["x"]}"#).server_message(), None);
    }

    #[test]
    fn test_transport_error_has_no_server_message() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "network error: connection refused");
    }
}
