//! Audio value types for the cloning workflow.
//!
//! This module holds the two binary payloads the workflow manages: the
//! user-supplied reference sample (validated at the upload boundary) and the
//! generated result returned by the service.

mod generated;
mod reference;

pub use generated::GeneratedAudio;
pub use reference::{
    AUDIO_EXTENSIONS, MAX_SAMPLE_BYTES, ReferenceSample, SampleError, media_type_for,
};
