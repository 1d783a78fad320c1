use thiserror::Error;

use crate::domain::errors::ScoreboardError;

/// Errors that can occur while running a console command
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown command: {0} (type 'help' for usage)")]
    UnknownCommand(String),

    #[error("Invalid command, usage: {0}")]
    Usage(&'static str),

    #[error("No match with handle #{0}")]
    UnknownHandle(usize),

    #[error(transparent)]
    Scoreboard(#[from] ScoreboardError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;
