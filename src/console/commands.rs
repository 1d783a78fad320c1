use std::str::FromStr;

use super::errors::ConsoleError;
use crate::domain::r#match::MatchId;

const START_USAGE: &str = "start <home> vs <away>";
const SCORE_USAGE: &str = "score <match> <home score> <away score>";
const FINISH_USAGE: &str = "finish <match>";

/// Text printed by the `help` command
pub const HELP: &str = "\
Commands:
  start <home> vs <away>                  start a match, prints its handle
                                          (the separator is 'vs' in any case)
  score <match> <home score> <away score> replace both scores
  finish <match>                          finish a match and remove it
  summary                                 ranked matches in progress
  matches                                 matches on the board in start order
  help                                    show this text
  quit                                    leave
<match> is a handle such as 2 or #2, or a full match id";

/// Reference to a match typed at the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRef {
    /// 1-based handle printed when the match was started
    Handle(usize),
    Id(MatchId),
}

impl FromStr for MatchRef {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let handle = s.strip_prefix('#').unwrap_or(s);
        if let Ok(number) = handle.parse::<usize>() {
            return Ok(MatchRef::Handle(number));
        }
        Ok(MatchRef::Id(s.parse()?))
    }
}

/// One parsed console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { home: String, away: String },
    Score { target: MatchRef, home_score: i32, away_score: i32 },
    Finish { target: MatchRef },
    Summary,
    Matches,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match keyword.to_ascii_lowercase().as_str() {
            "start" => {
                let (home, away) =
                    split_teams(rest).ok_or(ConsoleError::Usage(START_USAGE))?;
                Ok(Command::Start {
                    home: home.to_string(),
                    away: away.to_string(),
                })
            }
            "score" => {
                let args: Vec<&str> = rest.split_whitespace().collect();
                let &[target, home_score, away_score] = args.as_slice() else {
                    return Err(ConsoleError::Usage(SCORE_USAGE));
                };
                Ok(Command::Score {
                    target: target.parse()?,
                    home_score: parse_score(home_score)?,
                    away_score: parse_score(away_score)?,
                })
            }
            "finish" => {
                if rest.is_empty() || rest.contains(char::is_whitespace) {
                    return Err(ConsoleError::Usage(FINISH_USAGE));
                }
                Ok(Command::Finish {
                    target: rest.parse()?,
                })
            }
            "summary" => Ok(Command::Summary),
            "matches" => Ok(Command::Matches),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ConsoleError::UnknownCommand(keyword.to_string())),
        }
    }
}

/// Splits `<home> vs <away>` at the first ` vs `, ignoring the separator's case
fn split_teams(rest: &str) -> Option<(&str, &str)> {
    // ASCII lowercasing keeps byte offsets valid for the original string
    let index = rest.to_ascii_lowercase().find(" vs ")?;
    Some((&rest[..index], &rest[index + " vs ".len()..]))
}

fn parse_score(value: &str) -> Result<i32, ConsoleError> {
    value.parse().map_err(|_| ConsoleError::Usage(SCORE_USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ScoreboardError;

    #[test]
    fn parse_start_with_multi_word_teams() {
        let command: Command = "start  South Korea vs Costa Rica ".parse().unwrap();

        assert_eq!(
            command,
            Command::Start {
                home: "South Korea".to_string(),
                away: "Costa Rica".to_string(),
            }
        );
    }

    #[test]
    fn parse_start_separator_ignores_case() {
        let command: Command = "start Mexico VS Canada".parse().unwrap();

        assert_eq!(
            command,
            Command::Start {
                home: "Mexico".to_string(),
                away: "Canada".to_string(),
            }
        );
    }

    #[test]
    fn parse_start_splits_at_first_separator() {
        let command: Command = "start Côte d'Ivoire Vs Versailles vs Paris".parse().unwrap();

        assert_eq!(
            command,
            Command::Start {
                home: "Côte d'Ivoire".to_string(),
                away: "Versailles vs Paris".to_string(),
            }
        );
    }

    #[test]
    fn parse_start_without_separator_fails() {
        assert!(matches!(
            "start Mexico Canada".parse::<Command>(),
            Err(ConsoleError::Usage(_))
        ));
    }

    #[test]
    fn parse_score_with_handle() {
        let command: Command = "score #2 3 1".parse().unwrap();

        assert_eq!(
            command,
            Command::Score {
                target: MatchRef::Handle(2),
                home_score: 3,
                away_score: 1,
            }
        );
    }

    #[test]
    fn parse_score_keeps_negative_values_for_the_domain() {
        let command: Command = "score 1 -1 0".parse().unwrap();

        assert!(matches!(command, Command::Score { home_score: -1, .. }));
    }

    #[test]
    fn parse_score_with_missing_argument_fails() {
        assert!(matches!(
            "score 1 3".parse::<Command>(),
            Err(ConsoleError::Usage(_))
        ));
    }

    #[test]
    fn parse_finish_with_match_id() {
        let id = MatchId::new();
        let command: Command = format!("finish {}", id).parse().unwrap();

        assert_eq!(
            command,
            Command::Finish {
                target: MatchRef::Id(id),
            }
        );
    }

    #[test]
    fn parse_malformed_match_id_is_invalid_argument() {
        assert!(matches!(
            "finish abc".parse::<Command>(),
            Err(ConsoleError::Scoreboard(ScoreboardError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn parse_keywords_ignore_case() {
        assert_eq!("SUMMARY".parse::<Command>().unwrap(), Command::Summary);
        assert_eq!("Matches".parse::<Command>().unwrap(), Command::Matches);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn parse_unknown_command_fails() {
        assert!(matches!(
            "restart".parse::<Command>(),
            Err(ConsoleError::UnknownCommand(keyword)) if keyword == "restart"
        ));
    }
}
