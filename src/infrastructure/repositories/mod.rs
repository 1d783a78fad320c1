// Repository implementations (adapters)
// Implement the repository traits defined in the domain layer

pub mod in_memory_match_repository;

pub use in_memory_match_repository::InMemoryMatchRepository;
