//! Error taxonomy: the closed set of error codes and their fixed messages.
//!
//! Codes are part of the wire contract. Once published a code keeps its
//! meaning; new failure classes get new codes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Machine-readable error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unclassified internal failure
    SystemError,
    /// Client input rejected by validation
    ValidationError,
    /// No prefecture with the requested code
    PrefectureNotFound,
    /// No token with the requested identifier
    TokenNotFound,
    /// Token has already been consumed
    TokenAlreadyUsed,
    /// Token is past its expiry
    TokenExpired,
}

impl ErrorCode {
    /// Every code in the taxonomy
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::SystemError,
        ErrorCode::ValidationError,
        ErrorCode::PrefectureNotFound,
        ErrorCode::TokenNotFound,
        ErrorCode::TokenAlreadyUsed,
        ErrorCode::TokenExpired,
    ];

    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SystemError => "E100000",
            ErrorCode::ValidationError => "E100001",
            ErrorCode::PrefectureNotFound => "E100002",
            ErrorCode::TokenNotFound => "E100003",
            ErrorCode::TokenAlreadyUsed => "E100004",
            ErrorCode::TokenExpired => "E100005",
        }
    }

    /// The fixed client-visible message for this code
    pub const fn message(self) -> ErrorMessage {
        let text = match self {
            ErrorCode::SystemError => "システムエラーが発生しました",
            ErrorCode::ValidationError => "入力値に誤りがあります",
            ErrorCode::PrefectureNotFound => "都道府県は存在しません",
            ErrorCode::TokenNotFound => "トークンが存在しません",
            ErrorCode::TokenAlreadyUsed => "トークンは既に使用されています",
            ErrorCode::TokenExpired => "トークンの有効期限が切れています",
        };
        ErrorMessage(text)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that is not a taxonomy code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown error code: {0}")]
pub struct UnknownErrorCode(pub String);

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownErrorCode(s.to_string()))
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Human-readable message paired with an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorMessage(&'static str);

impl ErrorMessage {
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for ErrorMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}
