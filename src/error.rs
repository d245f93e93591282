use thiserror::Error;

/// Message shown when a failure carries no usable text of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong while searching for recipes.";

/// Errors that can occur while searching for meals
#[derive(Error, Debug)]
pub enum SearchError {
    /// The user input was rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// Candidate discovery failed; the whole search is aborted
    #[error("Failed to fetch meals: {0}")]
    Network(#[from] reqwest::Error),

    /// A time, mood or diet label could not be recognised
    #[error("Unknown criterion: {0}")]
    InvalidCriterion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl SearchError {
    /// Text surfaced to the user when the search ends in the error state
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = SearchError::Validation("Please enter at least one ingredient.".to_string());
        assert_eq!(err.user_message(), "Please enter at least one ingredient.");
    }

    #[test]
    fn test_blank_message_falls_back_to_generic() {
        let err = SearchError::Validation("  ".to_string());
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
