use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::prefecture::Prefecture;
use crate::repositories::PrefectureRepository;

/// Use cases for the prefecture reference data
///
/// Errors from the repository are propagated untouched, so a typed
/// `DomainError` keeps its code and anything else stays opaque.
pub struct PrefectureService<R>
where
    R: PrefectureRepository,
{
    repository: Arc<R>,
}

impl<R> PrefectureService<R>
where
    R: PrefectureRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// List all prefectures
    pub async fn list_prefectures(&self) -> anyhow::Result<Vec<Prefecture>> {
        let prefectures = self.repository.find_all().await?;
        debug!(count = prefectures.len(), "Listed prefectures");
        Ok(prefectures)
    }

    /// Fetch one prefecture with its active municipalities
    pub async fn get_prefecture_by_code(&self, code: &str) -> anyhow::Result<Prefecture> {
        let prefecture = self.repository.find_by_code(code).await?;
        debug!(
            code,
            municipalities = prefecture.municipalities.len(),
            "Fetched prefecture"
        );
        Ok(prefecture)
    }
}

impl<R> Clone for PrefectureService<R>
where
    R: PrefectureRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
