//! HTTP middleware: request ids, request tracing and CORS.

pub mod cors;
pub mod request_id;
