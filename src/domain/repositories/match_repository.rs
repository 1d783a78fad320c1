use crate::domain::r#match::{Match, MatchId};

/// Repository trait for Match entities on a scoreboard
///
/// Defines the contract for storing the matches of one scoreboard.
/// Implementations must keep matches in insertion order, since that order
/// breaks ranking ties.
pub trait MatchRepository {
    /// Append a match after every stored match
    fn insert(&mut self, game: Match);

    /// Find a match by its ID
    fn find_by_id(&self, id: MatchId) -> Option<&Match>;

    /// Find a match by its ID for mutation
    fn find_by_id_mut(&mut self, id: MatchId) -> Option<&mut Match>;

    /// Remove a match, keeping the relative order of the others
    fn remove(&mut self, id: MatchId) -> Option<Match>;

    /// All stored matches in insertion order
    fn all(&self) -> &[Match];

    fn contains(&self, id: MatchId) -> bool {
        self.find_by_id(id).is_some()
    }

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
