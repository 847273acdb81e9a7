//! Mock implementation of PrefectureRepository for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::prefecture::Prefecture;
use crate::errors::{DomainError, ErrorCode};

use super::trait_::PrefectureRepository;

/// Mock prefecture repository for testing
pub struct MockPrefectureRepository {
    prefectures: Arc<RwLock<Vec<Prefecture>>>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockPrefectureRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            prefectures: Arc::new(RwLock::new(Vec::new())),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock holding the given prefectures
    pub fn with_prefectures(prefectures: Vec<Prefecture>) -> Self {
        Self {
            prefectures: Arc::new(RwLock::new(prefectures)),
            ..Self::new()
        }
    }

    /// Create a mock whose every call fails with an untyped error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Number of repository calls made so far
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockPrefectureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrefectureRepository for MockPrefectureRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<Prefecture>> {
        self.record_call()?;
        Ok(self.prefectures.read().await.clone())
    }

    async fn find_by_code(&self, code: &str) -> anyhow::Result<Prefecture> {
        self.record_call()?;
        let prefectures = self.prefectures.read().await;
        prefectures
            .iter()
            .find(|p| p.code == code)
            .map(Prefecture::with_active_municipalities)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::PrefectureNotFound,
                    ErrorCode::PrefectureNotFound.message(),
                    None,
                    format!("prefecture {code} not found"),
                )
                .into()
            })
    }
}
