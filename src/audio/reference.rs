//! Reference voice sample and upload validation.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

/// Maximum accepted size for a reference sample (10 MiB).
pub const MAX_SAMPLE_BYTES: u64 = 10 * 1024 * 1024;

/// Audio file extensions accepted at the upload boundary.
pub const AUDIO_EXTENSIONS: [&str; 4] = ["wav", "mp3", "m4a", "ogg"];

/// Errors that can occur when accepting a reference sample.
#[derive(Error, Debug)]
pub enum SampleError {
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    #[error("File too large: {0} bytes (maximum {MAX_SAMPLE_BYTES})")]
    TooLarge(u64),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A user-supplied reference voice recording.
///
/// The constructor enforces the upload invariants: the media type must
/// indicate audio (or the filename must carry a recognized audio extension),
/// and the payload must not exceed [`MAX_SAMPLE_BYTES`]. Bytes are shared,
/// so cloning a sample does not copy the audio.
#[derive(Debug, Clone)]
pub struct ReferenceSample {
    name: String,
    media_type: String,
    bytes: Arc<[u8]>,
}

impl ReferenceSample {
    /// Validate and accept an uploaded file.
    ///
    /// # Arguments
    /// * `name` - Original filename, used for extension checks and upload
    /// * `media_type` - Declared media type (e.g. "audio/wav")
    /// * `bytes` - File contents
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, SampleError> {
        let name = name.into();
        let media_type = media_type.into();

        if !media_type.contains("audio") && !has_audio_extension(&name) {
            return Err(SampleError::UnsupportedFormat(media_type));
        }

        let size = bytes.len() as u64;
        if size > MAX_SAMPLE_BYTES {
            return Err(SampleError::TooLarge(size));
        }

        Ok(Self {
            name,
            media_type,
            bytes: bytes.into(),
        })
    }

    /// Load a reference sample from a file on disk.
    ///
    /// The media type is guessed from the file extension; files without a
    /// recognized audio extension are rejected.
    pub fn from_path(path: &Path) -> Result<Self, SampleError> {
        let bytes = std::fs::read(path)?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav")
            .to_string();

        let media_type = media_type_for(&name).unwrap_or("application/octet-stream");

        Self::new(name, media_type, bytes)
    }

    /// Original filename of the sample.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared media type of the sample.
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Sample contents.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the sample in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Returns true if the filename carries a recognized audio extension.
fn has_audio_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            AUDIO_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Guess the media type for a filename from its extension.
pub fn media_type_for(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();

    match ext.as_str() {
        "wav" => Some("audio/wav"),
        "mp3" => Some("audio/mpeg"),
        "m4a" => Some("audio/mp4"),
        "ogg" => Some("audio/ogg"),
        _ => None,
    }
}
