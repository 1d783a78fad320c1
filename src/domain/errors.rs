use thiserror::Error;

/// Errors raised by the scoreboard domain
///
/// The display form of every variant is exactly its message, so callers can
/// show it to users without further formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    /// The caller supplied a structurally invalid input
    #[error("{0}")]
    InvalidArgument(String),

    /// The operation is not valid for the current lifecycle state
    #[error("{0}")]
    InvalidState(String),
}

impl ScoreboardError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

pub type ScoreboardResult<T> = Result<T, ScoreboardError>;
