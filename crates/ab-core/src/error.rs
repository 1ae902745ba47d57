//! Error types for vocabulary parsing.

use thiserror::Error;

/// Result type for vocabulary parsing.
pub type VocabularyResult<T> = Result<T, VocabularyError>;

/// Errors raised when text does not name a known command or action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The text is not a recognized player command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The text is not a recognized action name.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}
