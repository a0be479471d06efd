use thiserror::Error;

/// Shown when no API key is configured.
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "To use AI features, please configure a suggestion provider API key.";

/// Shown when the provider answered but without usable text.
pub const EMPTY_RESPONSE_MESSAGE: &str = "Sorry, I couldn't get a creative suggestion right now.";

/// Shown for transport and HTTP failures.
pub const FAILURE_MESSAGE: &str = "Sorry, something went wrong while talking to the AI.";

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("Suggestion API key is not configured")]
    MissingCredential,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Suggestion API returned {status}")]
    Api { status: u16 },

    #[error("Suggestion response contained no text")]
    EmptyResponse,
}

impl SuggestionError {
    /// Placeholder text that stands in for the suggestion.
    pub fn user_message(&self) -> &'static str {
        match self {
            SuggestionError::MissingCredential => MISSING_CREDENTIAL_MESSAGE,
            SuggestionError::EmptyResponse => EMPTY_RESPONSE_MESSAGE,
            SuggestionError::Network(_) | SuggestionError::Api { .. } => FAILURE_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(
            SuggestionError::MissingCredential.user_message(),
            MISSING_CREDENTIAL_MESSAGE
        );
        assert_eq!(SuggestionError::Api { status: 500 }.user_message(), FAILURE_MESSAGE);
        assert_eq!(SuggestionError::EmptyResponse.user_message(), EMPTY_RESPONSE_MESSAGE);
    }
}
