use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Outcome of a failed backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No session token, or the backend answered 401.
    #[error("not authenticated")]
    Unauthenticated,

    /// The backend refused the request and explained why.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Non-2xx answer without a usable message.
    #[error("request failed with HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Text for the error toast. `None` means the failure is only logged.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ApiError::Unauthenticated => None,
            ApiError::Rejected { message, .. } => Some(message.clone()),
            _ => Some(GENERIC_ERROR_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_routing() {
        assert_eq!(ApiError::Unauthenticated.user_message(), None);
        assert_eq!(
            ApiError::Rejected { status: 422, message: "Email already taken".into() }.user_message(),
            Some("Email already taken".to_string())
        );
        assert_eq!(
            ApiError::Http { status: 502 }.user_message().as_deref(),
            Some(GENERIC_ERROR_MESSAGE)
        );
        assert_eq!(
            ApiError::Network("offline".into()).user_message().as_deref(),
            Some(GENERIC_ERROR_MESSAGE)
        );
    }
}
