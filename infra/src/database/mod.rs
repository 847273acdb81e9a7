//! Database module - prefecture data store implementations
//!
//! - Seed data loading from JSON
//! - In-memory repository implementation

pub mod memory;
pub mod seed;

// Re-export commonly used types
pub use memory::InMemoryPrefectureRepository;
pub use seed::{load_prefectures, SeedError};
