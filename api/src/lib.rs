// Library exports for the binary and integration tests

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod validation;

pub use app::{create_app, AppState};
