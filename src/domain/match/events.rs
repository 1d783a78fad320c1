use serde::Serialize;

use super::value_objects::MatchId;
use crate::domain::team::Team;

/// Domain events that occur within the Match lifecycle
///
/// Successful scoreboard operations record these in order, so a caller can
/// replay what happened to the board.
///
/// # Example
/// ```
/// use live_scoreboard::domain::r#match::{MatchEvent, MatchId};
///
/// let match_id = MatchId::new();
/// let event = MatchEvent::Finished { match_id };
/// assert_eq!(event.match_id(), match_id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Fired when a match is created
    Started {
        match_id: MatchId,
        home_team: Team,
        away_team: Team,
    },
    /// Fired when both scores are replaced
    ScoreUpdated {
        match_id: MatchId,
        home_score: i32,
        away_score: i32,
    },
    /// Fired when a match leaves the in-progress state
    Finished { match_id: MatchId },
}

impl MatchEvent {
    /// Returns the match_id for this event
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchEvent::Started { match_id, .. } => *match_id,
            MatchEvent::ScoreUpdated { match_id, .. } => *match_id,
            MatchEvent::Finished { match_id } => *match_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_event() {
        let match_id = MatchId::new();
        let event = MatchEvent::Started {
            match_id,
            home_team: Team::new("Mexico").unwrap(),
            away_team: Team::new("Canada").unwrap(),
        };

        assert_eq!(event.match_id(), match_id);
    }

    #[test]
    fn score_updated_event() {
        let match_id = MatchId::new();
        let event = MatchEvent::ScoreUpdated {
            match_id,
            home_score: 1,
            away_score: 0,
        };

        assert_eq!(event.match_id(), match_id);
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let event = MatchEvent::Finished {
            match_id: MatchId::new(),
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "finished");
    }
}
