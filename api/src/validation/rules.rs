//! Custom validation rules.
//!
//! Each rule has a pure predicate (`is_*`) and a `validator`-compatible
//! function of the same tag name for use in
//! `#[validate(custom(function = "..."))]` attributes. The latter consult the
//! shared registry so that failures carry the rule tag and its parameters.

use chrono::{DateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use super::registry::registry;

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Maximum password length in characters
pub const PASSWORD_MAX_LENGTH: usize = 20;

/// Random part length of `vcf-` / `vcs-` tokens
const TOKEN_BODY_LENGTH: usize = 8;

static ALPHANUM_UNDERSCORE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+$").expect("alphanumeric underscore regex is valid")
});

/// Unicode punctuation (P*) or symbol (S*) category
static SYMBOL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{P}\p{S}]$").expect("symbol regex is valid"));

/// Password strength check.
///
/// Between 8 and 20 characters with at least one uppercase letter, one
/// lowercase letter, one digit and one punctuation or symbol character.
pub fn is_password(value: &str) -> bool {
    let length = value.chars().count();
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length) {
        return false;
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;
    let mut has_symbol = false;

    for c in value.chars() {
        if c.is_uppercase() {
            has_upper = true;
        } else if c.is_lowercase() {
            has_lower = true;
        } else if c.is_numeric() {
            has_digit = true;
        } else if is_symbol(c) {
            has_symbol = true;
        }
    }

    has_upper && has_lower && has_digit && has_symbol
}

fn is_symbol(c: char) -> bool {
    let mut buf = [0u8; 4];
    SYMBOL_REGEX.is_match(c.encode_utf8(&mut buf))
}

/// RFC 3339 date-time with an uppercase `T` separator and an explicit offset.
///
/// A lowercase `z` offset and leap seconds are rejected.
pub fn is_datetime(value: &str) -> bool {
    if value.as_bytes().get(10) != Some(&b'T') || value.ends_with('z') {
        return false;
    }
    // chrono folds a `:60` second into nanoseconds past one second
    DateTime::parse_from_rfc3339(value).is_ok_and(|dt| dt.nanosecond() < 1_000_000_000)
}

/// `<prefix>-` followed by exactly eight ASCII letters or digits
pub fn is_prefixed_token(value: &str, prefix: &str) -> bool {
    value
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|body| {
            body.len() == TOKEN_BODY_LENGTH && body.bytes().all(|b| b.is_ascii_alphanumeric())
        })
}

pub fn is_vcf_token(value: &str) -> bool {
    is_prefixed_token(value, "vcf")
}

pub fn is_vcs_token(value: &str) -> bool {
    is_prefixed_token(value, "vcs")
}

/// ASCII letters, digits and underscores only. Empty input passes so that
/// optional fields are left to `required`.
pub fn is_alphanum_underscore(value: &str) -> bool {
    value.is_empty() || ALPHANUM_UNDERSCORE_REGEX.is_match(value)
}

/// Non-empty run of ASCII digits
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    registry().check("password", value)
}

pub fn datetime(value: &str) -> Result<(), ValidationError> {
    registry().check("datetime", value)
}

pub fn vcf(value: &str) -> Result<(), ValidationError> {
    registry().check("vcf", value)
}

pub fn vcs(value: &str) -> Result<(), ValidationError> {
    registry().check("vcs", value)
}

pub fn alphanum_underscore(value: &str) -> Result<(), ValidationError> {
    registry().check("alphanum_underscore", value)
}

pub fn numeric(value: &str) -> Result<(), ValidationError> {
    registry().check("numeric", value)
}
