//! Request validation
//!
//! Request structs derive `validator::Validate` and implement [`FieldLabels`],
//! listing each validated field with its label and its rule tags in the same
//! order as the `#[validate(...)]` attribute.
//! Custom rules (`password`, `datetime`, `vcf`, `vcs`, `alphanum_underscore`,
//! `numeric`) are referenced from derive attributes through the functions in
//! [`rules`], e.g.
//!
//! ```ignore
//! #[validate(custom(function = "crate::validation::rules::numeric"))]
//! ```
//!
//! Failures are translated into Japanese [`FieldViolation`]s ordered by field
//! declaration.

pub mod registry;
pub mod rules;
pub mod translate;

use geo_shared::errors::FieldViolation;
use thiserror::Error;
use tracing::debug;
use validator::Validate;

pub use registry::{registry, RuleRegistry, ValidationRule};
pub use translate::{format_message, translate, Field, FieldLabels};

/// A request failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("request validation failed: {}", summarize(.violations))]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}[{}]", v.attribute, v.tag))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the rule registry.
///
/// Call once at startup; later calls return the same instance.
pub fn init() -> &'static RuleRegistry {
    let registry = registry();
    debug!(rules = ?registry.tags(), "Validation rules registered");
    registry
}

/// Validate `request` and translate any failures.
pub fn validate_request<T>(request: &T) -> Result<(), ValidationFailure>
where
    T: Validate + FieldLabels,
{
    request
        .validate()
        .map_err(|errors| ValidationFailure::new(translate::<T>(&errors)))
}
