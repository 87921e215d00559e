//! HTTP client for the generation service.

use std::time::Duration;

use crate::audio::ReferenceSample;

use super::Backend;
use super::types::{BackendError, HealthResponse};

/// Client-enforced timeout for a generation request. Synthesis on the remote
/// GPU can take minutes for long text.
pub const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Timeout for the lightweight health probe.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP-based generation service client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new client for the service at `base_url`.
    ///
    /// Trailing slashes are stripped so endpoint paths join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Map a transport-level error, distinguishing the client-side timeout.
fn map_send_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::TimedOut
    } else {
        BackendError::ConnectionFailed(err.to_string())
    }
}

impl Backend for HttpBackend {
    fn generate(&self, text: &str, sample: &ReferenceSample) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/generate", self.base_url);

        log::debug!(
            "POST {url}: {} chars, reference {} ({} bytes)",
            text.chars().count(),
            sample.name(),
            sample.size()
        );

        let file_part = reqwest::blocking::multipart::Part::bytes(sample.bytes().to_vec())
            .file_name(sample.name().to_string())
            .mime_str(sample.media_type())
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let form = reqwest::blocking::multipart::Form::new()
            .text("text", text.to_string())
            .part("reference_audio", file_part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(GENERATION_TIMEOUT)
            .send()
            .map_err(map_send_error)?;

        let status = response.status();

        if status.as_u16() == 503 {
            return Err(BackendError::Unavailable);
        }

        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let bytes = response.bytes().map_err(|e| {
            if e.is_timeout() {
                BackendError::TimedOut
            } else {
                BackendError::InvalidResponse(e.to_string())
            }
        })?;

        log::debug!("generation succeeded: {} bytes", bytes.len());

        Ok(bytes.to_vec())
    }

    fn health(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status().as_u16()));
        }

        response
            .json()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
