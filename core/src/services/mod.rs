//! Business services containing domain logic and use cases.

pub mod prefecture;

// Re-export commonly used types
pub use prefecture::PrefectureService;
