//! rodio-backed audio output.

use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use super::{AudioSink, PlaybackError};

/// Audio sink playing through the system's default output device.
///
/// The `OutputStream` is `!Send`, so the sink must stay on the thread that
/// created it.
pub struct RodioSink {
    // Held for its lifetime; dropping it silences the handle.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Option<Sink>,
}

impl RodioSink {
    /// Open the default audio output device.
    pub fn try_new() -> Result<Self, PlaybackError> {
        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PlaybackError::OutputUnavailable(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            handle,
            sink: None,
        })
    }
}

impl AudioSink for RodioSink {
    fn start(&mut self, audio: Arc<[u8]>) -> Result<(), PlaybackError> {
        let decoder = Decoder::new(Cursor::new(audio))
            .map_err(|e| PlaybackError::Unplayable(e.to_string()))?;

        let sink = Sink::try_new(&self.handle)
            .map_err(|e| PlaybackError::OutputUnavailable(e.to_string()))?;

        sink.append(decoder);
        sink.play();

        // Replacing the sink stops any previous track.
        self.sink = Some(sink);

        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().is_none_or(|sink| sink.empty())
    }
}
