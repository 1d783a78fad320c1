use std::fmt;
use std::str::FromStr;

/// How the console prints summaries and match listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Console settings read from the environment
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    pub output: OutputFormat,
}

impl ConsoleConfig {
    /// Environment variable selecting the output format
    pub const OUTPUT_VAR: &'static str = "SCOREBOARD_OUTPUT";

    /// Reads settings from process environment variables
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let output = match lookup(Self::OUTPUT_VAR) {
            Some(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, OutputFormat::Text);
                OutputFormat::Text
            }),
            None => OutputFormat::default(),
        };

        Self { output }
    }
}
