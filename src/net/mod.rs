//! HTTP client layer for the backend API.
//!
//! ERROR HANDLING
//! ==============
//! The transport layer produces a tagged [`error::ApiError`] instead of
//! leaving callers to sniff response shapes. Callers convert failures into
//! local component state; nothing here panics or retries.

pub mod api;
pub mod error;
pub mod types;
