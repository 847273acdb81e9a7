//! Prefecture service module
//!
//! Read-only use cases over the prefecture repository.

mod service;

#[cfg(test)]
mod tests;

pub use service::PrefectureService;
