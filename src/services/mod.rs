// Application services
// Coordinate domain objects and repositories for callers

pub mod scoreboard_service;

pub use scoreboard_service::{ScoreboardService, SUMMARY_HEADER};
