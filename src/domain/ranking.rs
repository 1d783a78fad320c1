use std::cmp::{Ordering, Reverse};

use super::r#match::Match;

/// Ordering policy for the scoreboard summary
///
/// Matches with a higher total score rank first. Equal totals are broken by
/// insertion order: the match started more recently ranks first.
///
/// The insertion position is looked up in the board the rule was built from
/// at sort time, so the tie-break always reflects the current board contents.
///
/// # Example
/// ```
/// use live_scoreboard::domain::r#match::Match;
/// use live_scoreboard::domain::ranking::RankingRule;
/// use live_scoreboard::domain::team::Team;
///
/// let (first, _) = Match::new(Team::new("Germany").unwrap(), Team::new("France").unwrap());
/// let (second, _) = Match::new(Team::new("Argentina").unwrap(), Team::new("Australia").unwrap());
/// let board = vec![first, second];
///
/// let ranked = RankingRule::new(&board).rank();
/// assert_eq!(ranked[0].home_team().name(), "Argentina");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RankingRule<'a> {
    board: &'a [Match],
}

impl<'a> RankingRule<'a> {
    /// Builds a rule over a board in insertion order
    pub fn new(board: &'a [Match]) -> Self {
        Self { board }
    }

    /// Compares two matches for display; `Less` means `a` is shown first
    ///
    /// A match missing from the board sorts as the oldest among equal totals.
    pub fn compare(&self, a: &Match, b: &Match) -> Ordering {
        b.total_score()
            .cmp(&a.total_score())
            .then_with(|| self.insertion_index(b).cmp(&self.insertion_index(a)))
    }

    /// Returns the in-progress matches of the board in display order
    pub fn rank(&self) -> Vec<&'a Match> {
        let mut ranked: Vec<(usize, &'a Match)> = self
            .board
            .iter()
            .enumerate()
            .filter(|(_, game)| game.is_in_progress())
            .collect();

        ranked.sort_by_key(|(index, game)| (Reverse(game.total_score()), Reverse(*index)));

        ranked.into_iter().map(|(_, game)| game).collect()
    }

    fn insertion_index(&self, game: &Match) -> Option<usize> {
        self.board.iter().position(|candidate| candidate.id() == game.id())
    }
}
