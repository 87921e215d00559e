//! Backend response types and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when communicating with the generation service.
///
/// Service unavailability (HTTP 503), client-side timeouts, and all other
/// failures are separate variants so callers can surface distinct messages
/// for each.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Service unavailable")]
    Unavailable,

    #[error("Request timed out")]
    TimedOut,

    #[error("Request failed with status {0}")]
    Status(u16),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Health check response from the generation service.
///
/// Unknown fields are ignored; the service may report extra detail about its
/// upstream synthesis worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
