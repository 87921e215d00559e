//! Communication with the remote generation service.
//!
//! Provides the trait and HTTP implementation for submitting cloning
//! requests to the VoiceForge generation endpoint.

mod http;
mod types;

pub use http::{GENERATION_TIMEOUT, HttpBackend};
pub use types::{BackendError, HealthResponse};

use crate::audio::ReferenceSample;

/// Trait for generation service communication.
///
/// This trait abstracts the HTTP communication with the generation service,
/// allowing for mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend: Send + Sync {
    /// Submit a generation request.
    ///
    /// # Arguments
    /// * `text` - Target text to synthesize (trimmed, non-empty)
    /// * `sample` - Reference voice sample to clone
    ///
    /// # Returns
    /// Raw audio data in the service's output format (WAV)
    fn generate(&self, text: &str, sample: &ReferenceSample) -> Result<Vec<u8>, BackendError>;

    /// Check service health status.
    fn health(&self) -> Result<HealthResponse, BackendError>;
}

/// Create a backend for the service at the given base URL.
pub fn create_backend(base_url: &str) -> HttpBackend {
    HttpBackend::new(base_url)
}
