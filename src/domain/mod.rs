// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod errors;
pub mod r#match;
pub mod ranking;
pub mod repositories;
pub mod team;
