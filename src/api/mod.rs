//! Inbound JSON surface.
//!
//! `ApiService` implements the endpoint semantics as typed
//! request/response calls; `ApiError` maps every failure to an HTTP
//! status and a structured `{error, message}` payload. Routing and the
//! web framework itself live outside this crate.

pub mod error;
pub mod service;

pub use error::ApiError;
pub use service::ApiService;
