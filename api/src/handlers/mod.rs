//! HTTP handlers and the error responder

pub mod error;
pub mod health;
pub mod prefecture;

pub use error::{create_error_response, status_for, ApiError, HandlerError};
