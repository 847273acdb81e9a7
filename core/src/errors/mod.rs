//! Error taxonomy and the typed domain error.

mod codes;
mod domain_error;

#[cfg(test)]
mod tests;

pub use codes::{ErrorCode, ErrorMessage, UnknownErrorCode};
pub use domain_error::DomainError;

pub type DomainResult<T> = Result<T, DomainError>;
