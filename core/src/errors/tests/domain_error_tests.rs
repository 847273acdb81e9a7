//! Unit tests for domain error types

use std::error::Error as _;

use anyhow::anyhow;

use crate::errors::{DomainError, ErrorCode};

#[test]
fn test_display_prefixes_context_to_cause() {
    let error = DomainError::wrap(
        ErrorCode::SystemError,
        anyhow!("connection refused"),
        "failed to list prefectures",
    );
    assert_eq!(error.to_string(), "failed to list prefectures: connection refused");
}

#[test]
fn test_display_includes_cause_chain() {
    let cause = anyhow!("socket closed").context("query failed");
    let error = DomainError::wrap(ErrorCode::SystemError, cause, "load");
    assert_eq!(error.to_string(), "load: query failed: socket closed");
}

#[test]
fn test_display_without_cause_or_context_falls_back_to_message() {
    let error = DomainError::from_code(ErrorCode::PrefectureNotFound);
    assert_eq!(error.to_string(), "都道府県は存在しません");

    let error = DomainError::new(
        ErrorCode::PrefectureNotFound,
        ErrorCode::PrefectureNotFound.message(),
        None,
        "code=99",
    );
    assert_eq!(error.to_string(), "code=99");
}

#[test]
fn test_client_message_is_independent_of_cause() {
    let error = DomainError::wrap(
        ErrorCode::PrefectureNotFound,
        anyhow!("record not found"),
        "find by code",
    );
    assert_eq!(error.code(), ErrorCode::PrefectureNotFound);
    assert_eq!(error.message(), ErrorCode::PrefectureNotFound.message());
    assert!(!error.message().as_str().contains("record not found"));
}

#[test]
fn test_source_exposes_cause() {
    let error = DomainError::wrap(ErrorCode::SystemError, anyhow!("disk full"), "write");
    let source = error.source().expect("cause should be exposed");
    assert_eq!(source.to_string(), "disk full");

    assert!(DomainError::from_code(ErrorCode::SystemError).source().is_none());
}

#[test]
fn test_equality_compares_codes_only() {
    let a = DomainError::wrap(ErrorCode::TokenExpired, anyhow!("first"), "a");
    let b = DomainError::wrap(ErrorCode::TokenExpired, anyhow!("second"), "b");
    let c = DomainError::from_code(ErrorCode::TokenNotFound);

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.is(ErrorCode::TokenExpired));
}

#[test]
fn test_empty_context_is_dropped() {
    let error = DomainError::new(ErrorCode::SystemError, ErrorCode::SystemError.message(), None, "");
    assert!(error.context().is_none());
}

#[test]
fn test_from_code_conversion() {
    let error: DomainError = ErrorCode::TokenAlreadyUsed.into();
    assert_eq!(error.code(), ErrorCode::TokenAlreadyUsed);
    assert_eq!(error.message().as_str(), "トークンは既に使用されています");
}
