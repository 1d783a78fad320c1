// Repository ports
// Implementations live in the infrastructure layer

pub mod match_repository;

pub use match_repository::MatchRepository;
