//! Live Scoreboard Library
//!
//! Tracks matches in progress and renders a ranked summary of them,
//! including domain logic, repositories, and a console adapter.

pub mod config;
pub mod console;
pub mod domain;
pub mod infrastructure;
pub mod services;
