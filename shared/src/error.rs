use thiserror::Error;

/// The only message the key dialog ever shows, whatever went wrong.
pub const INVALID_KEY_MESSAGE: &str = "Invalid Gemini API key";

/// Why a key check failed. The variants are kept apart for logging only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("Empty key")]
    EmptyKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Key check rejected with HTTP {0}")]
    Status(u16),
}

impl CheckError {
    /// Text shown to the user. Always [`INVALID_KEY_MESSAGE`].
    pub fn user_message(&self) -> &'static str {
        INVALID_KEY_MESSAGE
    }
}

/// The browser refused to change location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Redirect failed: {0}")]
pub struct NavigationError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid key check endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Invalid redirect URL: {0}")]
    InvalidRedirect(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_is_the_same_for_every_failure() {
        let errors = [
            CheckError::EmptyKey,
            CheckError::Network("connection refused".to_string()),
            CheckError::Status(400),
            CheckError::Status(503),
        ];

        for err in errors {
            assert_eq!(err.user_message(), "Invalid Gemini API key");
        }
    }

    #[test]
    fn test_display_keeps_the_cause_for_logs() {
        assert_eq!(CheckError::Status(403).to_string(), "Key check rejected with HTTP 403");
        assert_eq!(
            CheckError::Network("timeout".to_string()).to_string(),
            "Network error: timeout"
        );
    }
}
