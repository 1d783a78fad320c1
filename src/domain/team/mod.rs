// Team domain module
// Contains the team value object shared by every match

pub mod value_objects;

// Re-export main types for convenience
pub use value_objects::Team;
