//! # GeoRef Core
//!
//! Core business logic and domain layer for the GeoRef backend.
//! This crate contains the error taxonomy, the typed domain error, domain
//! entities, repository interfaces and the prefecture service.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{Municipality, Prefecture};
pub use errors::{DomainError, DomainResult, ErrorCode, ErrorMessage};
pub use repositories::PrefectureRepository;
pub use services::PrefectureService;
