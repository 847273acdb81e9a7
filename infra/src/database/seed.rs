//! Prefecture seed data loading.
//!
//! Seed data is a JSON array of prefectures with nested municipalities. A file
//! path may be supplied; otherwise the fixture compiled into the binary is used.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use geo_core::domain::entities::prefecture::Prefecture;

const EMBEDDED_SEED: &str = include_str!("../../data/prefectures.json");

/// Errors raised while loading seed data
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate prefecture code in seed data: {0}")]
    DuplicateCode(String),

    #[error("Municipality {organization_code} is filed under prefecture {expected} but references {actual}")]
    MismatchedPrefecture {
        organization_code: String,
        expected: String,
        actual: String,
    },
}

/// Load seed data from `path`, or from the embedded fixture when `None`
pub fn load_prefectures(path: Option<&Path>) -> Result<Vec<Prefecture>, SeedError> {
    let prefectures = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), "Loading prefecture seed file");
            parse_prefectures(&content)?
        }
        None => {
            info!("Loading embedded prefecture seed data");
            parse_prefectures(EMBEDDED_SEED)?
        }
    };
    Ok(prefectures)
}

/// Parse and check seed data
pub fn parse_prefectures(content: &str) -> Result<Vec<Prefecture>, SeedError> {
    let prefectures: Vec<Prefecture> = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    for prefecture in &prefectures {
        if !seen.insert(prefecture.code.as_str()) {
            return Err(SeedError::DuplicateCode(prefecture.code.clone()));
        }
        if let Some(stray) = prefecture
            .municipalities
            .iter()
            .find(|m| m.prefecture_code != prefecture.code)
        {
            return Err(SeedError::MismatchedPrefecture {
                organization_code: stray.organization_code.clone(),
                expected: prefecture.code.clone(),
                actual: stray.prefecture_code.clone(),
            });
        }
    }

    Ok(prefectures)
}
