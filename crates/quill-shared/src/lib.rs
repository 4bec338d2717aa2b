//! # Quill Shared
//!
//! Types shared between the API server and its clients: request/response
//! DTOs and the RFC 7807 error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
