// Console layer module (adapter for a line-oriented terminal session)
// Follows Hexagonal Architecture - the console is an adapter

pub mod commands;
pub mod errors;

pub use commands::{Command, MatchRef};
pub use errors::{ConsoleError, ConsoleResult};

use serde::Serialize;
use tracing::debug;

use crate::config::{ConsoleConfig, OutputFormat};
use crate::domain::r#match::{Match, MatchId};
use crate::services::ScoreboardService;

/// What the caller should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text
    Output(String),
    /// Nothing to print
    Silent,
    /// End the session
    Quit,
}

/// One row of the JSON summary
#[derive(Debug, Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    #[serde(rename = "match")]
    game: &'a Match,
}

/// Interactive session over one scoreboard
///
/// Every started match gets a handle (`#1`, `#2`, ...) that stays valid after
/// the match is finished, so the same match can be referenced again.
pub struct Console {
    scoreboard: ScoreboardService,
    handles: Vec<MatchId>,
    output: OutputFormat,
}

impl Console {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            scoreboard: ScoreboardService::new(),
            handles: Vec::new(),
            output: config.output,
        }
    }

    /// Parses and runs one input line
    ///
    /// Events recorded by the scoreboard are drained into the log after every
    /// command, so a long session does not accumulate them.
    pub fn execute(&mut self, line: &str) -> ConsoleResult<Outcome> {
        if line.trim().is_empty() {
            return Ok(Outcome::Silent);
        }

        let outcome = self.run(line.parse::<Command>()?);
        for event in self.scoreboard.take_events() {
            debug!(match_id = %event.match_id(), ?event, "Scoreboard event");
        }
        outcome
    }

    pub fn scoreboard(&self) -> &ScoreboardService {
        &self.scoreboard
    }

    fn run(&mut self, command: Command) -> ConsoleResult<Outcome> {
        match command {
            Command::Start { home, away } => {
                let id = self.scoreboard.start_match(&home, &away)?;
                self.handles.push(id);
                Ok(Outcome::Output(format!(
                    "#{} {} (id {})",
                    self.handles.len(),
                    self.describe(id),
                    id
                )))
            }
            Command::Score {
                target,
                home_score,
                away_score,
            } => {
                let id = self.resolve(target)?;
                self.scoreboard.update_score(id, home_score, away_score)?;
                Ok(Outcome::Output(self.describe(id)))
            }
            Command::Finish { target } => {
                let id = self.resolve(target)?;
                self.scoreboard.finish_match(id)?;
                Ok(Outcome::Output(format!("Finished match {}", id)))
            }
            Command::Summary => self.summary().map(Outcome::Output),
            Command::Matches => self.matches().map(Outcome::Output),
            Command::Help => Ok(Outcome::Output(commands::HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn resolve(&self, target: MatchRef) -> ConsoleResult<MatchId> {
        match target {
            MatchRef::Id(id) => Ok(id),
            MatchRef::Handle(handle) => handle
                .checked_sub(1)
                .and_then(|index| self.handles.get(index))
                .copied()
                .ok_or(ConsoleError::UnknownHandle(handle)),
        }
    }

    fn describe(&self, id: MatchId) -> String {
        self.scoreboard
            .find_match(id)
            .map(|game| game.to_string())
            .unwrap_or_default()
    }

    fn summary(&self) -> ConsoleResult<String> {
        match self.output {
            OutputFormat::Text => Ok(self.scoreboard.summary().trim_end().to_string()),
            OutputFormat::Json => {
                let entries: Vec<RankedEntry> = self
                    .scoreboard
                    .ranked_matches()
                    .into_iter()
                    .enumerate()
                    .map(|(index, game)| RankedEntry {
                        rank: index + 1,
                        game,
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
        }
    }

    fn matches(&self) -> ConsoleResult<String> {
        let matches = self.scoreboard.matches();
        match self.output {
            OutputFormat::Text => Ok(matches
                .iter()
                .map(|game| format!("{} {}", game.id(), game))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&matches)?),
        }
    }
}
