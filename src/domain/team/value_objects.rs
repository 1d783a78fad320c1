use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::{ScoreboardError, ScoreboardResult};

/// Team value object holding a normalized display name
///
/// # Invariants
/// - Raw input must not be empty
/// - Normalized name is at least [`Team::MIN_NAME_LENGTH`] characters long
/// - Is immutable after construction
///
/// Two teams are equal when their normalized names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Team(String);

impl Team {
    /// Minimum length of a normalized team name, in characters
    pub const MIN_NAME_LENGTH: usize = 3;

    /// Creates a new Team value object
    ///
    /// # Arguments
    /// * `name` - The raw team name; it is trimmed and each word is capitalized
    ///
    /// # Returns
    /// * `Ok(Team)` - If the normalized name is long enough
    /// * `Err(ScoreboardError::InvalidArgument)` - If the name is empty or too short
    ///
    /// # Example
    /// ```
    /// use live_scoreboard::domain::team::Team;
    ///
    /// let team = Team::new("  south   KOREA ").expect("valid team");
    /// assert_eq!(team.name(), "South Korea");
    /// ```
    pub fn new(name: impl AsRef<str>) -> ScoreboardResult<Self> {
        let raw = name.as_ref();
        if raw.is_empty() {
            return Err(ScoreboardError::invalid_argument("Name cannot be empty."));
        }

        let normalized = Self::normalize(raw);
        if normalized.chars().count() < Self::MIN_NAME_LENGTH {
            return Err(ScoreboardError::invalid_argument(format!(
                "Name must be at least {} characters long.",
                Self::MIN_NAME_LENGTH
            )));
        }

        Ok(Team(normalized))
    }

    /// Trims, lowercases, then capitalizes the first letter of every word
    fn normalize(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns the normalized name
    pub fn name(&self) -> &str {
        &self.0
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Team {
    type Error = ScoreboardError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Team::new(name)
    }
}

impl From<Team> for String {
    fn from(team: Team) -> Self {
        team.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_team() {
        assert_eq!(Team::new("Mexico").unwrap().name(), "Mexico");
    }

    #[test]
    fn name_is_trimmed_and_capitalized() {
        let team = Team::new("  uNITED   states  ").unwrap();
        assert_eq!(team.name(), "United States");
    }

    #[test]
    fn names_differing_by_case_and_spacing_are_equal() {
        let a = Team::new("new zealand").unwrap();
        let b = Team::new("  NEW\tZealand ").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equal_teams_hash_the_same() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Team::new("brazil").unwrap());
        set.insert(Team::new("BRAZIL").unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn minimum_length_name() {
        assert_eq!(Team::new("usa").unwrap().name(), "Usa");
    }

    #[test]
    fn short_words_count_spaces_toward_length() {
        assert_eq!(Team::new("a b").unwrap().name(), "A B");
    }

    #[test]
    fn non_ascii_names_use_unicode_case_mapping() {
        assert_eq!(Team::new("éIRE").unwrap().name(), "Éire");
        assert_eq!(Team::new("россия").unwrap().name(), "Россия");
    }

    #[test]
    fn length_counts_characters_not_utf16_units() {
        assert!(matches!(
            Team::new("😀😀"),
            Err(ScoreboardError::InvalidArgument(_))
        ));
        assert_eq!(Team::new("😀😀😀").unwrap().name(), "😀😀😀");
    }

    #[test]
    fn invalid_team_empty() {
        let err = Team::new("").unwrap_err();
        assert_eq!(err, ScoreboardError::invalid_argument("Name cannot be empty."));
    }

    #[test]
    fn invalid_team_too_short() {
        assert!(matches!(
            Team::new("ab"),
            Err(ScoreboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn invalid_team_short_after_trimming() {
        assert!(matches!(
            Team::new("   ab   "),
            Err(ScoreboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn invalid_team_whitespace_only() {
        assert!(matches!(
            Team::new("     "),
            Err(ScoreboardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn team_display() {
        let team = Team::new("germany").unwrap();
        assert_eq!(format!("{}", team), "Germany");
    }

    #[test]
    fn serializes_as_name_string() {
        let team = Team::new("italy").unwrap();
        assert_eq!(serde_json::to_string(&team).unwrap(), "\"Italy\"");
    }

    #[test]
    fn deserialization_validates() {
        let team: Team = serde_json::from_str("\"  spain \"").unwrap();
        assert_eq!(team.name(), "Spain");
        assert!(serde_json::from_str::<Team>("\"x\"").is_err());
    }
}
