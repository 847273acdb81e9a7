//! Prefecture repository trait defining the interface for prefecture lookups.
//!
//! Implementations raise a [`DomainError`](crate::errors::DomainError) for
//! classifiable conditions (an unknown prefecture code) and return any other
//! storage failure untouched, as an opaque `anyhow::Error`.

use async_trait::async_trait;

use crate::domain::entities::prefecture::Prefecture;

/// Read-only access to prefectures and their municipalities
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use geo_core::repositories::PrefectureRepository;
/// use geo_core::domain::entities::prefecture::Prefecture;
/// use geo_core::errors::{DomainError, ErrorCode};
///
/// struct StaticPrefectureRepository {
///     prefectures: Vec<Prefecture>,
/// }
///
/// #[async_trait]
/// impl PrefectureRepository for StaticPrefectureRepository {
///     async fn find_all(&self) -> anyhow::Result<Vec<Prefecture>> {
///         Ok(self.prefectures.clone())
///     }
///
///     async fn find_by_code(&self, code: &str) -> anyhow::Result<Prefecture> {
///         self.prefectures
///             .iter()
///             .find(|p| p.code == code)
///             .map(Prefecture::with_active_municipalities)
///             .ok_or_else(|| DomainError::from_code(ErrorCode::PrefectureNotFound).into())
///     }
/// }
/// ```
#[async_trait]
pub trait PrefectureRepository: Send + Sync {
    /// List every prefecture
    ///
    /// Municipalities are not required to be populated.
    async fn find_all(&self) -> anyhow::Result<Vec<Prefecture>>;

    /// Find one prefecture by its code, with only its active municipalities
    ///
    /// # Returns
    /// * `Ok(Prefecture)` - Prefecture found
    /// * `Err(DomainError)` with `ErrorCode::PrefectureNotFound` - No such code
    /// * `Err(_)` - Any other storage failure
    async fn find_by_code(&self, code: &str) -> anyhow::Result<Prefecture>;
}
