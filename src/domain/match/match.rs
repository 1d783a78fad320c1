use super::events::MatchEvent;
use super::value_objects::{MatchId, MatchStatus};
use crate::domain::errors::{ScoreboardError, ScoreboardResult};
use crate::domain::team::Team;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Match entity
///
/// Represents one contest between two teams and enforces the rules of its
/// own score and lifecycle. Whether a mutation is allowed for a match on a
/// scoreboard is decided by the scoreboard, not by the match.
///
/// # Invariants
/// - Teams are fixed at creation
/// - Scores are never negative
/// - Scores cannot change once the match is finished
/// - A finished match never returns to in-progress
///
/// # Example
/// ```
/// use live_scoreboard::domain::r#match::Match;
/// use live_scoreboard::domain::team::Team;
///
/// let (mut game, _started) = Match::new(
///     Team::new("Spain").unwrap(),
///     Team::new("Brazil").unwrap(),
/// );
/// game.set_score(10, 2).expect("match in progress");
///
/// assert_eq!(game.total_score(), 12);
/// assert_eq!(game.to_string(), "Spain 10 - Brazil 2");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    id: MatchId,
    home_team: Team,
    away_team: Team,
    home_score: i32,
    away_score: i32,
    started_at: DateTime<Utc>,
    status: MatchStatus,
}

impl Match {
    /// Creates a new in-progress match with a 0-0 score
    ///
    /// # Returns
    /// The match and the `Started` event it generated
    pub fn new(home_team: Team, away_team: Team) -> (Self, MatchEvent) {
        let game = Self {
            id: MatchId::new(),
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            started_at: Utc::now(),
            status: MatchStatus::InProgress,
        };

        let event = MatchEvent::Started {
            match_id: game.id,
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
        };

        (game, event)
    }

    /// Replaces both scores
    ///
    /// # Returns
    /// * `Ok(MatchEvent)` - ScoreUpdated event generated
    /// * `Err(InvalidState)` - If the match is finished
    /// * `Err(InvalidArgument)` - If either score is negative
    ///
    /// On error neither score changes.
    pub fn set_score(
        &mut self,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<MatchEvent> {
        if !self.is_in_progress() {
            return Err(ScoreboardError::invalid_state(
                "Cannot update score for a finished match",
            ));
        }
        if home_score < 0 || away_score < 0 {
            return Err(ScoreboardError::invalid_argument("Scores cannot be negative"));
        }

        self.home_score = home_score;
        self.away_score = away_score;

        Ok(MatchEvent::ScoreUpdated {
            match_id: self.id,
            home_score,
            away_score,
        })
    }

    /// Marks the match as finished
    ///
    /// Idempotent: finishing an already finished match changes nothing and
    /// returns `None`.
    pub fn finish(&mut self) -> Option<MatchEvent> {
        let next_status = MatchStatus::Finished;
        if !self.status.can_transition_to(next_status) {
            return None;
        }

        self.status = next_status;
        Some(MatchEvent::Finished { match_id: self.id })
    }

    /// Sum of both scores
    pub fn total_score(&self) -> i64 {
        i64::from(self.home_score) + i64::from(self.away_score)
    }

    // ===== Getters =====

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn home_team(&self) -> &Team {
        &self.home_team
    }

    pub fn away_team(&self) -> &Team {
        &self.away_team
    }

    pub fn home_score(&self) -> i32 {
        self.home_score
    }

    pub fn away_score(&self) -> i32 {
        self.away_score
    }

    /// Returns the creation timestamp
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
