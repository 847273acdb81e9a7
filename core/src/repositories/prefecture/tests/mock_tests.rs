//! Tests for the mock prefecture repository

use crate::domain::entities::prefecture::{Municipality, Prefecture};
use crate::errors::{DomainError, ErrorCode};
use crate::repositories::prefecture::{MockPrefectureRepository, PrefectureRepository};

fn hokkaido() -> Prefecture {
    Prefecture {
        id: 1,
        code: "01".to_string(),
        name: "北海道".to_string(),
        municipalities: vec![
            Municipality {
                id: 1,
                prefecture_code: "01".to_string(),
                organization_code: "011002".to_string(),
                prefecture_name_kanji: "北海道".to_string(),
                municipality_name_kanji: "札幌市".to_string(),
                prefecture_name_kana: "ﾎｯｶｲﾄﾞｳ".to_string(),
                municipality_name_kana: "ｻｯﾎﾟﾛｼ".to_string(),
                is_active: true,
            },
            Municipality {
                id: 2,
                prefecture_code: "01".to_string(),
                organization_code: "012025".to_string(),
                prefecture_name_kanji: "北海道".to_string(),
                municipality_name_kanji: "旧市".to_string(),
                prefecture_name_kana: "ﾎｯｶｲﾄﾞｳ".to_string(),
                municipality_name_kana: "ｷｭｳｼ".to_string(),
                is_active: false,
            },
        ],
    }
}

#[tokio::test]
async fn test_find_by_code_returns_active_municipalities_only() {
    let repo = MockPrefectureRepository::with_prefectures(vec![hokkaido()]);

    let prefecture = repo.find_by_code("01").await.unwrap();
    assert_eq!(prefecture.name, "北海道");
    assert_eq!(prefecture.municipalities.len(), 1);
    assert!(prefecture.municipalities.iter().all(|m| m.is_active));
}

#[tokio::test]
async fn test_find_by_code_unknown_is_typed_not_found() {
    let repo = MockPrefectureRepository::with_prefectures(vec![hokkaido()]);

    let err = repo.find_by_code("99").await.unwrap_err();
    let domain = err.downcast_ref::<DomainError>().expect("typed error");
    assert_eq!(domain.code(), ErrorCode::PrefectureNotFound);
}

#[tokio::test]
async fn test_failing_mock_returns_untyped_error() {
    let repo = MockPrefectureRepository::failing("database error");

    let err = repo.find_all().await.unwrap_err();
    assert!(err.downcast_ref::<DomainError>().is_none());
    assert_eq!(err.to_string(), "database error");
    assert_eq!(repo.call_count(), 1);
}
