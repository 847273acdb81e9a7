//! Request trace correlation.
//!
//! Every request gets a trace id, taken from the `X-Trace-ID` header when the
//! caller sends one and generated otherwise. The id is stored in the request
//! extensions, attached to the request/response log lines, and handed to
//! handlers through the [`TraceId`] extractor.

use std::fmt;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::Instant;

use actix_web::{
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::HeaderMap,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use tracing::info;
use uuid::Uuid;

/// Header carrying the caller's trace id
pub const TRACE_ID_HEADER: &str = "X-Trace-ID";

/// Correlation id for one request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TraceId(String);

impl TraceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Fresh UUID v4 id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Id from the trace header, or a fresh one when absent or blank
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(Self::new)
            .unwrap_or_else(Self::generate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromRequest for TraceId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let trace_id = req
            .extensions()
            .get::<TraceId>()
            .cloned()
            .unwrap_or_else(|| TraceId::from_headers(req.headers()));
        ready(Ok(trace_id))
    }
}

/// Middleware assigning trace ids and logging each request and response
pub struct TraceMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TraceMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct TraceMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TraceMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let started = Instant::now();

        let trace_id = TraceId::from_headers(req.headers());
        req.extensions_mut().insert(trace_id.clone());

        let method = req.method().to_string();
        let path = req.path().to_string();
        info!(trace_id = %trace_id, method = %method, path = %path, "request");

        Box::pin(async move {
            let res = service.call(req).await;
            let latency_ms = started.elapsed().as_millis() as u64;

            let status = match &res {
                Ok(response) => response.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            info!(
                trace_id = %trace_id,
                status = status.as_u16(),
                latency_ms,
                "response"
            );

            res
        })
    }
}
