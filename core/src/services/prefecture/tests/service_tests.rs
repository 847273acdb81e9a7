use std::sync::Arc;

use crate::domain::entities::prefecture::Prefecture;
use crate::errors::{DomainError, ErrorCode};
use crate::repositories::prefecture::MockPrefectureRepository;
use crate::services::prefecture::PrefectureService;

fn prefecture(id: i32, code: &str, name: &str) -> Prefecture {
    Prefecture {
        id,
        code: code.to_string(),
        name: name.to_string(),
        municipalities: Vec::new(),
    }
}

fn create_service(repo: MockPrefectureRepository) -> (PrefectureService<MockPrefectureRepository>, Arc<MockPrefectureRepository>) {
    let repo = Arc::new(repo);
    (PrefectureService::new(Arc::clone(&repo)), repo)
}

#[tokio::test]
async fn test_list_prefectures() {
    let (service, repo) = create_service(MockPrefectureRepository::with_prefectures(vec![
        prefecture(1, "01", "北海道"),
        prefecture(13, "13", "東京都"),
    ]));

    let prefectures = service.list_prefectures().await.unwrap();
    let names: Vec<&str> = prefectures.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["北海道", "東京都"]);
    assert_eq!(repo.call_count(), 1);
}

#[tokio::test]
async fn test_list_prefectures_propagates_untyped_error() {
    let (service, _) = create_service(MockPrefectureRepository::failing("database error"));

    let err = service.list_prefectures().await.unwrap_err();
    assert!(err.downcast_ref::<DomainError>().is_none());
    assert_eq!(err.to_string(), "database error");
}

#[tokio::test]
async fn test_get_prefecture_by_code() {
    let (service, _) = create_service(MockPrefectureRepository::with_prefectures(vec![
        prefecture(13, "13", "東京都"),
    ]));

    let found = service.get_prefecture_by_code("13").await.unwrap();
    assert_eq!(found.id, 13);
    assert_eq!(found.name, "東京都");
}

#[tokio::test]
async fn test_get_prefecture_by_code_not_found_keeps_code() {
    let (service, _) = create_service(MockPrefectureRepository::new());

    let err = service.get_prefecture_by_code("47").await.unwrap_err();
    let domain = err.downcast::<DomainError>().expect("typed error");
    assert_eq!(domain.code(), ErrorCode::PrefectureNotFound);
    assert_eq!(domain.context(), Some("prefecture 47 not found"));
}
