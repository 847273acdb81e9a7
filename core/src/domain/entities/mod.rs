//! Domain entities representing core business objects.

pub mod prefecture;

// Re-export commonly used types
pub use prefecture::{Municipality, Prefecture};
