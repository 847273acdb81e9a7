use std::error::Error as StdError;
use std::fmt;

use super::codes::{ErrorCode, ErrorMessage};

/// A classifiable failure raised by business or data-access code.
///
/// The code and message are what the client sees. The context and cause only
/// ever reach the logs, through `Display` and `source()`.
pub struct DomainError {
    code: ErrorCode,
    message: ErrorMessage,
    context: Option<String>,
    cause: Option<anyhow::Error>,
}

impl DomainError {
    /// Build an error with an explicit message, optional cause and
    /// diagnostic context.
    pub fn new(
        code: ErrorCode,
        message: ErrorMessage,
        cause: Option<anyhow::Error>,
        context: impl Into<String>,
    ) -> Self {
        let context = context.into();
        Self {
            code,
            message,
            context: (!context.is_empty()).then_some(context),
            cause,
        }
    }

    /// Error carrying only the code and its default message
    pub fn from_code(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message(),
            context: None,
            cause: None,
        }
    }

    /// Wrap an underlying failure under `code` with its default message
    pub fn wrap(code: ErrorCode, cause: impl Into<anyhow::Error>, context: impl Into<String>) -> Self {
        Self::new(code, code.message(), Some(cause.into()), context)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> ErrorMessage {
        self.message
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Whether this error belongs to the given failure class
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.context, &self.cause) {
            (Some(context), Some(cause)) => write!(f, "{context}: {cause:#}"),
            (None, Some(cause)) => write!(f, "{cause:#}"),
            (Some(context), None) => f.write_str(context),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

impl fmt::Debug for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainError")
            .field("code", &self.code)
            .field("message", &self.message.as_str())
            .field("context", &self.context)
            .field("cause", &self.cause)
            .finish()
    }
}

impl StdError for DomainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

/// Errors are the same failure class when their codes match, whatever the cause.
impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for DomainError {}

impl From<ErrorCode> for DomainError {
    fn from(code: ErrorCode) -> Self {
        Self::from_code(code)
    }
}
