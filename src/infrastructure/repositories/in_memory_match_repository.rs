use crate::domain::r#match::{Match, MatchId};
use crate::domain::repositories::MatchRepository;

/// In-memory implementation of MatchRepository
///
/// Stores matches in a `Vec` in insertion order. Lookups are linear, which
/// suits a board of live matches.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMatchRepository {
    matches: Vec<Match>,
}

impl InMemoryMatchRepository {
    /// Creates an empty InMemoryMatchRepository
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: MatchId) -> Option<usize> {
        self.matches.iter().position(|game| game.id() == id)
    }
}

impl MatchRepository for InMemoryMatchRepository {
    fn insert(&mut self, game: Match) {
        self.matches.push(game);
    }

    fn find_by_id(&self, id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|game| game.id() == id)
    }

    fn find_by_id_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|game| game.id() == id)
    }

    fn remove(&mut self, id: MatchId) -> Option<Match> {
        self.position(id).map(|index| self.matches.remove(index))
    }

    fn all(&self) -> &[Match] {
        &self.matches
    }
}
