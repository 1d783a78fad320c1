use std::collections::HashSet;
use tracing::{debug, info};

use crate::domain::errors::{ScoreboardError, ScoreboardResult};
use crate::domain::r#match::{Match, MatchEvent, MatchId};
use crate::domain::ranking::RankingRule;
use crate::domain::repositories::MatchRepository;
use crate::domain::team::Team;
use crate::infrastructure::repositories::InMemoryMatchRepository;

/// First line of every summary
pub const SUMMARY_HEADER: &str = "Matches summary:";

/// Scoreboard of live matches
///
/// Owns every match it starts until the match is finished, at which point the
/// match is removed from the board. Callers address matches by [`MatchId`].
///
/// # Invariants
/// - Insertion order of the repository is the order of `start_match` calls
/// - A match never has the same team on both sides
/// - Every public method either succeeds completely or changes nothing
///
/// # Example
/// ```
/// use live_scoreboard::services::ScoreboardService;
///
/// let mut scoreboard = ScoreboardService::new();
/// let id = scoreboard.start_match("Mexico", "Canada").unwrap();
/// scoreboard.update_score(id, 0, 5).unwrap();
///
/// assert_eq!(scoreboard.summary(), "Matches summary:\n1. Mexico 0 - Canada 5\n");
///
/// scoreboard.finish_match(id).unwrap();
/// assert_eq!(scoreboard.summary(), "Matches summary:\n");
/// ```
#[derive(Debug)]
pub struct ScoreboardService<R = InMemoryMatchRepository> {
    repository: R,
    finished: HashSet<MatchId>,
    events: Vec<MatchEvent>,
}

impl ScoreboardService<InMemoryMatchRepository> {
    /// Creates an empty scoreboard backed by memory
    pub fn new() -> Self {
        Self::with_repository(InMemoryMatchRepository::new())
    }
}

impl Default for ScoreboardService<InMemoryMatchRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: MatchRepository> ScoreboardService<R> {
    /// Creates a scoreboard over the given repository
    pub fn with_repository(repository: R) -> Self {
        Self {
            repository,
            finished: HashSet::new(),
            events: Vec::new(),
        }
    }

    /// Starts a match between two teams given by name
    ///
    /// # Returns
    /// * `Ok(MatchId)` - ID of the new match, now last on the board
    /// * `Err(InvalidArgument)` - If a name is invalid or both names are the same team
    pub fn start_match(&mut self, home_name: &str, away_name: &str) -> ScoreboardResult<MatchId> {
        let home_team = Team::new(home_name)?;
        let away_team = Team::new(away_name)?;
        self.start_match_between(home_team, away_team)
    }

    /// Starts a match between two already validated teams
    pub fn start_match_between(
        &mut self,
        home_team: Team,
        away_team: Team,
    ) -> ScoreboardResult<MatchId> {
        if home_team == away_team {
            return Err(ScoreboardError::invalid_argument(
                "Home and away teams cannot be the same",
            ));
        }

        let (game, event) = Match::new(home_team, away_team);
        let id = game.id();
        info!(match_id = %id, "Match started: {} vs {}", game.home_team(), game.away_team());

        self.repository.insert(game);
        self.record(event);

        Ok(id)
    }

    /// Replaces both scores of a match on the board
    ///
    /// # Returns
    /// * `Err(InvalidState)` - If the match is not on the board or not in progress
    /// * `Err(InvalidArgument)` - If either score is negative
    pub fn update_score(
        &mut self,
        id: MatchId,
        home_score: i32,
        away_score: i32,
    ) -> ScoreboardResult<()> {
        let game = self
            .repository
            .find_by_id_mut(id)
            .filter(|game| game.is_in_progress())
            .ok_or_else(|| {
                ScoreboardError::invalid_state(
                    "Match is not in progress or not found on the scoreboard",
                )
            })?;

        let event = game.set_score(home_score, away_score)?;
        self.record(event);

        Ok(())
    }

    /// Finishes a match and removes it from the board
    ///
    /// Finishing a match this scoreboard already finished succeeds without
    /// changing anything. A match that was never on the board is an
    /// `InvalidState` error.
    pub fn finish_match(&mut self, id: MatchId) -> ScoreboardResult<()> {
        let Some(mut game) = self.repository.remove(id) else {
            if self.finished.contains(&id) {
                debug!(match_id = %id, "Match already finished");
                return Ok(());
            }
            return Err(ScoreboardError::invalid_state("Match not found on the scoreboard"));
        };

        let event = game.finish();
        self.finished.insert(id);
        info!(match_id = %id, "Match finished: {}", game);

        if let Some(event) = event {
            self.record(event);
        }

        Ok(())
    }

    /// Renders the ranked in-progress matches
    ///
    /// ```text
    /// Matches summary:
    /// 1. Uruguay 6 - Italy 6
    /// 2. Spain 10 - Brazil 2
    /// ```
    pub fn summary(&self) -> String {
        let mut summary = format!("{}\n", SUMMARY_HEADER);
        for (rank, game) in self.ranked_matches().iter().enumerate() {
            summary.push_str(&format!("{}. {}\n", rank + 1, game));
        }
        summary
    }

    /// In-progress matches in summary order
    pub fn ranked_matches(&self) -> Vec<&Match> {
        RankingRule::new(self.repository.all()).rank()
    }

    /// Copy of every match on the board in insertion order
    pub fn matches(&self) -> Vec<Match> {
        self.repository.all().to_vec()
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.repository.find_by_id(id)
    }

    /// Events recorded by successful operations, oldest first
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Drains the recorded events
    pub fn take_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: MatchEvent) {
        debug!(match_id = %event.match_id(), ?event, "Recorded match event");
        self.events.push(event);
    }
}
