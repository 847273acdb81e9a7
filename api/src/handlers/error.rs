//! Error responder
//!
//! Turns any handler failure into an HTTP status and an [`ErrorResponse`]
//! body, and writes exactly one log line for it carrying the trace id.
//!
//! Mapping, first match wins:
//! 1. a [`DomainError`] keeps its code and message, status by code
//! 2. a [`ValidationFailure`] becomes `E100001` with per-field details (400)
//! 3. anything else becomes `E100000` (500); its text never reaches the client

use std::fmt;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use geo_core::errors::{DomainError, ErrorCode};
use geo_shared::errors::ErrorResponse;
use thiserror::Error;
use tracing::{debug, error};

use crate::middleware::TraceId;
use crate::validation::ValidationFailure;

/// Failure raised by a handler before it is rendered
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Domain(DomainError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Unexpected(anyhow::Error),
}

impl From<DomainError> for HandlerError {
    fn from(err: DomainError) -> Self {
        HandlerError::Domain(err)
    }
}

impl From<anyhow::Error> for HandlerError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<DomainError>() {
            Ok(domain) => HandlerError::Domain(domain),
            Err(err) => match err.downcast::<ValidationFailure>() {
                Ok(failure) => HandlerError::Validation(failure),
                Err(err) => HandlerError::Unexpected(err),
            },
        }
    }
}

/// HTTP status for a taxonomy code
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::SystemError => StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::PrefectureNotFound | ErrorCode::TokenNotFound => StatusCode::NOT_FOUND,
        // No dedicated client status yet
        ErrorCode::TokenAlreadyUsed | ErrorCode::TokenExpired => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Client-facing body and status for `err`
pub fn create_error_response(err: &HandlerError) -> ErrorResponse {
    match err {
        HandlerError::Domain(domain) => ErrorResponse::new(
            domain.code().as_str(),
            domain.message().as_str(),
            status_for(domain.code()).as_u16(),
        ),
        HandlerError::Validation(failure) => {
            let code = ErrorCode::ValidationError;
            ErrorResponse::new(code.as_str(), code.message().as_str(), status_for(code).as_u16())
                .with_details(failure.violations().to_vec())
        }
        HandlerError::Unexpected(_) => {
            let code = ErrorCode::SystemError;
            ErrorResponse::new(code.as_str(), code.message().as_str(), status_for(code).as_u16())
        }
    }
}

/// Handler failure bound to its request's trace id.
///
/// Rendering through [`ResponseError`] logs the failure once: server errors
/// at `error`, client errors at `debug`.
pub struct ApiError {
    error: HandlerError,
    trace_id: TraceId,
    context: String,
    response: ErrorResponse,
}

impl ApiError {
    pub fn new(
        error: impl Into<HandlerError>,
        trace_id: TraceId,
        context: impl Into<String>,
    ) -> Self {
        let error = error.into();
        let response = create_error_response(&error);
        Self {
            error,
            trace_id,
            context: context.into(),
            response,
        }
    }

    pub fn error(&self) -> &HandlerError {
        &self.error
    }

    pub fn trace_id(&self) -> &TraceId {
        &self.trace_id
    }

    pub fn response(&self) -> &ErrorResponse {
        &self.response
    }

    fn log(&self) {
        let detail = format!("{:#}", self.error);
        if self.response.is_server_error() {
            error!(
                trace_id = %self.trace_id,
                code = %self.response.code,
                status = self.response.status,
                error = %detail,
                "{}",
                self.context
            );
        } else {
            debug!(
                trace_id = %self.trace_id,
                code = %self.response.code,
                status = self.response.status,
                error = %detail,
                "{}",
                self.context
            );
        }
    }
}

impl fmt::Debug for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiError")
            .field("trace_id", &self.trace_id)
            .field("context", &self.context)
            .field("error", &self.error)
            .finish()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:#}", self.context, self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        HttpResponse::build(self.status_code()).json(&self.response)
    }
}
