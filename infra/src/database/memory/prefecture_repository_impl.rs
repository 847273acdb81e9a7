//! In-memory implementation of the PrefectureRepository trait.
//!
//! Data is loaded once at startup and never mutated, so lookups need no
//! locking and the repository can be shared freely across workers.

use std::collections::HashMap;

use async_trait::async_trait;

use geo_core::domain::entities::prefecture::Prefecture;
use geo_core::errors::{DomainError, ErrorCode};
use geo_core::repositories::PrefectureRepository;

/// In-memory implementation of PrefectureRepository
pub struct InMemoryPrefectureRepository {
    /// Prefectures ordered by code
    prefectures: Vec<Prefecture>,
    /// Code to position in `prefectures`
    index: HashMap<String, usize>,
}

impl InMemoryPrefectureRepository {
    /// Create a repository over the given prefectures
    pub fn new(mut prefectures: Vec<Prefecture>) -> Self {
        prefectures.sort_by(|a, b| a.code.cmp(&b.code));
        let index = prefectures
            .iter()
            .enumerate()
            .map(|(position, p)| (p.code.clone(), position))
            .collect();

        Self { prefectures, index }
    }

    /// Number of prefectures held
    pub fn len(&self) -> usize {
        self.prefectures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefectures.is_empty()
    }
}

#[async_trait]
impl PrefectureRepository for InMemoryPrefectureRepository {
    async fn find_all(&self) -> anyhow::Result<Vec<Prefecture>> {
        Ok(self
            .prefectures
            .iter()
            .map(|p| Prefecture {
                id: p.id,
                code: p.code.clone(),
                name: p.name.clone(),
                municipalities: Vec::new(),
            })
            .collect())
    }

    async fn find_by_code(&self, code: &str) -> anyhow::Result<Prefecture> {
        self.index
            .get(code)
            .and_then(|&position| self.prefectures.get(position))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::load_prefectures;

    fn repository() -> InMemoryPrefectureRepository {
        InMemoryPrefectureRepository::new(load_prefectures(None).unwrap())
    }

    #[tokio::test]
    async fn test_find_all_sorted_without_municipalities() {
        let repo = repository();
        let prefectures = repo.find_all().await.unwrap();

        let codes: Vec<&str> = prefectures.iter().map(|p| p.code.as_str()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
        assert_eq!(prefectures.len(), repo.len());
        assert!(prefectures.iter().all(|p| p.municipalities.is_empty()));
    }

    #[tokio::test]
    async fn test_find_by_code_filters_inactive_municipalities() {
        let repo = repository();
        let tokyo = repo.find_by_code("13").await.unwrap();

        assert_eq!(tokyo.name, "東京都");
        assert!(!tokyo.municipalities.is_empty());
        assert!(tokyo.municipalities.iter().all(|m| m.is_active));
        assert!(tokyo
            .municipalities
            .iter()
            .all(|m| m.municipality_name_kanji != "保谷市"));
    }

    #[tokio::test]
    async fn test_find_by_code_not_found() {
        let repo = repository();
        let err = repo.find_by_code("99").await.unwrap_err();

        let domain = err.downcast_ref::<DomainError>().expect("typed error");
        assert_eq!(domain.code(), ErrorCode::PrefectureNotFound);
    }

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemoryPrefectureRepository::new(Vec::new());
        assert!(repo.is_empty());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
