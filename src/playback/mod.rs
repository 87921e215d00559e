//! Playback of generated audio.
//!
//! The workflow drives playback through the [`AudioSink`] trait so it can be
//! tested without an audio device; [`RodioSink`] is the real output path.

mod rodio_sink;

pub use rodio_sink::RodioSink;

use std::sync::Arc;

use thiserror::Error;

/// Errors that can occur when playing audio.
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Audio output unavailable: {0}")]
    OutputUnavailable(String),

    #[error("Unplayable audio: {0}")]
    Unplayable(String),
}

/// Trait for audio output.
#[cfg_attr(test, mockall::automock)]
pub trait AudioSink {
    /// Begin playing `audio` from the start, replacing any current track.
    fn start(&mut self, audio: Arc<[u8]>) -> Result<(), PlaybackError>;

    /// Pause the current track, keeping its position.
    fn pause(&mut self);

    /// Resume a paused track.
    fn resume(&mut self);

    /// Stop and discard the current track.
    fn stop(&mut self);

    /// True when no track is loaded or the current track has played to the end.
    fn is_finished(&self) -> bool;
}

/// Sink that discards all audio, for headless runs without an output device.
#[derive(Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn start(&mut self, _audio: Arc<[u8]>) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn resume(&mut self) {}

    fn stop(&mut self) {}

    fn is_finished(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_sink_accepts_audio() {
        let mut sink = NullSink;
        let audio: Arc<[u8]> = vec![0u8; 16].into();

        assert!(sink.start(audio).is_ok());
        assert!(sink.is_finished());
    }

    #[test]
    fn test_mock_sink_records_lifecycle() {
        let mut mock = MockAudioSink::new();

        mock.expect_start().times(1).returning(|_| Ok(()));
        mock.expect_pause().times(1).return_const(());
        mock.expect_is_finished().returning(|| false);

        let audio: Arc<[u8]> = vec![0u8; 16].into();
        mock.start(audio).unwrap();
        mock.pause();

        assert!(!mock.is_finished());
    }
}
