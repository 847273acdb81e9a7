//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the GeoRef application.
//! It provides concrete implementations of the repository traits declared in
//! `geo_core`.
//!
//! ## Architecture
//!
//! - **Database**: seed loading and the in-memory prefecture repository

/// Database module - prefecture data store implementations
pub mod database;

pub use database::{load_prefectures, InMemoryPrefectureRepository, SeedError};
