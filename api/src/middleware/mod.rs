pub mod trace;

pub use trace::{TraceId, TraceMiddleware, TRACE_ID_HEADER};
