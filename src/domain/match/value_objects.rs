use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::errors::ScoreboardError;

/// Opaque identifier of a match
///
/// Callers hold a `MatchId` and pass it back to the scoreboard instead of
/// holding a reference to the match itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(Uuid);

impl MatchId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = ScoreboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self).map_err(|e| {
            ScoreboardError::invalid_argument(format!("Invalid match id '{}': {}", s, e))
        })
    }
}

/// Represents the lifecycle status of a match
///
/// # Status Transitions
/// ```text
/// InProgress -> Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Match is being played and can be scored
    InProgress,
    /// Match has ended; its score is frozen
    Finished,
}

impl MatchStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Example
    /// ```
    /// use live_scoreboard::domain::r#match::MatchStatus;
    ///
    /// assert!(MatchStatus::InProgress.can_transition_to(MatchStatus::Finished));
    /// assert!(!MatchStatus::Finished.can_transition_to(MatchStatus::InProgress));
    /// ```
    pub fn can_transition_to(&self, next: MatchStatus) -> bool {
        matches!((self, next), (MatchStatus::InProgress, MatchStatus::Finished))
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::InProgress => write!(f, "in_progress"),
            MatchStatus::Finished => write!(f, "finished"),
        }
    }
}
