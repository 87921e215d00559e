//! Generated audio result handle.

use std::io::Cursor;
use std::sync::Arc;

/// Synthesized audio returned by the generation service.
///
/// The bytes are held behind a shared handle: the playback sink keeps its own
/// clone while playing, and the buffer is freed once the last handle is
/// dropped. The workflow drops its handle when the result is replaced, when
/// the reference sample is removed, and on teardown.
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    bytes: Arc<[u8]>,
    media_type: String,
}

impl GeneratedAudio {
    /// Wrap a binary audio payload received from the service.
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
        }
    }

    /// Audio contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Shared handle to the audio contents, for handing to a playback sink.
    pub fn handle(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }

    /// Media type reported by the service.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Size of the audio in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Duration in seconds, if the payload parses as a WAV file.
    ///
    /// Header probe only; used for display.
    pub fn wav_duration_secs(&self) -> Option<f32> {
        let reader = hound::WavReader::new(Cursor::new(&self.bytes[..])).ok()?;
        let spec = reader.spec();

        if spec.sample_rate == 0 {
            return None;
        }

        Some(reader.duration() as f32 / spec.sample_rate as f32)
    }
}
