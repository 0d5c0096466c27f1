use thiserror::Error;
use wl_api_types::ErrorBody;

/// Flash text used when a failure carries no server message.
pub const GENERIC_FAILURE: &str = "Server error!";

/// Failure of a request to the wishlist service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds a status error from a raw failure body. The body is expected to
    /// be `{status, error, message}`; anything else yields no message.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Text shown in the flash region: the server's message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_FAILURE.to_owned(),
        }
    }
}

/// Local rejection of an action before any request is sent.
/// `Display` is the flash text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("No ID in form")]
    MissingId,
    #[error("Invalid ID in form: {0}")]
    InvalidId(String),
    #[error("No user name in form")]
    MissingUser,
    #[error("Entries must be valid JSON: {0}")]
    MalformedEntries(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_body_message_is_surfaced() {
        let err = ApiError::from_status_body(
            404,
            r#"{"status": 404, "error": "Not Found", "message": "Wishlist with id '999' was not found."}"#,
        );
        assert_eq!(err.user_message(), "Wishlist with id '999' was not found.");
    }

    #[test]
    fn missing_or_blank_message_falls_back() {
        assert_eq!(
            ApiError::from_status_body(500, "<html>oops</html>").user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(
            ApiError::from_status_body(400, r#"{"message": "  "}"#).user_message(),
            GENERIC_FAILURE
        );
        assert_eq!(
            ApiError::Transport("connection refused".to_owned()).user_message(),
            GENERIC_FAILURE
        );
    }
}
