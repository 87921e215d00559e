//! Voice clone workflow controller.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::audio::{GeneratedAudio, ReferenceSample, SampleError};
use crate::backend::{Backend, BackendError};
use crate::notify::{NotificationKind, Notifier};
use crate::playback::{AudioSink, PlaybackError};

use super::state::{SubscriberId, WorkflowState, WorkflowStatus};

/// Maximum length of the target text, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;

/// Filename prefix for downloaded audio.
const DOWNLOAD_PREFIX: &str = "voiceforge";

/// Errors that can occur during workflow operations.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("No reference sample uploaded")]
    MissingReference,

    #[error("No text to generate")]
    MissingText,

    #[error("No generated audio available")]
    NoResult,

    #[error("Sample error: {0}")]
    Sample(#[from] SampleError),

    #[error("Generation error: {0}")]
    Generation(#[from] BackendError),

    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Controller for the upload-generate-playback cycle.
///
/// Owns the reference sample, target text, workflow status, and the generated
/// result, and orchestrates calls to the generation service. Validation
/// failures and settled generation outcomes are reported through the injected
/// [`Notifier`]; state changes are published to subscribers as
/// [`WorkflowState`] snapshots.
pub struct VoiceCloneWorkflow<B: Backend> {
    backend: B,
    notifier: Box<dyn Notifier>,
    player: Box<dyn AudioSink>,
    sample: Option<ReferenceSample>,
    text: String,
    result: Option<GeneratedAudio>,
    status: WorkflowStatus,
    is_playing: bool,
    subscribers: Vec<(SubscriberId, Box<dyn Fn(&WorkflowState)>)>,
    next_subscriber: SubscriberId,
}

impl<B: Backend> VoiceCloneWorkflow<B> {
    /// Create a new workflow with no sample, empty text, and Idle status.
    pub fn new(backend: B, notifier: Box<dyn Notifier>, player: Box<dyn AudioSink>) -> Self {
        Self {
            backend,
            notifier,
            player,
            sample: None,
            text: String::new(),
            result: None,
            status: WorkflowStatus::Idle,
            is_playing: false,
            subscribers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Accept an uploaded reference sample.
    ///
    /// Rejects files that are not audio or exceed the size limit, leaving all
    /// held state untouched. On success the new sample replaces any previous
    /// one and any previously generated result is cleared, since it no longer
    /// corresponds to the current reference.
    pub fn accept_sample(
        &mut self,
        name: &str,
        media_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), WorkflowError> {
        self.install_sample(ReferenceSample::new(name, media_type, bytes))
    }

    /// Accept a reference sample read from a file on disk.
    pub fn accept_file(&mut self, path: &Path) -> Result<(), WorkflowError> {
        self.install_sample(ReferenceSample::from_path(path))
    }

    fn install_sample(
        &mut self,
        candidate: Result<ReferenceSample, SampleError>,
    ) -> Result<(), WorkflowError> {
        let sample = match candidate {
            Ok(sample) => sample,
            Err(err) => {
                self.notifier
                    .notify(NotificationKind::Error, sample_error_message(&err));
                return Err(err.into());
            }
        };

        // A new reference invalidates any previous output.
        self.stop_playback();
        self.result = None;
        self.sample = Some(sample);
        self.status = WorkflowStatus::Idle;
        self.notifier
            .notify(NotificationKind::Success, "Voice sample uploaded!");
        self.publish();

        Ok(())
    }

    /// Remove the held reference sample, clearing any generated result and
    /// stopping playback.
    pub fn remove_sample(&mut self) {
        self.stop_playback();
        self.sample = None;
        self.result = None;
        self.status = WorkflowStatus::Idle;
        self.publish();
    }

    /// Store the target text, capped at [`MAX_TEXT_CHARS`] characters.
    pub fn set_text(&mut self, text: &str) {
        self.text = clamp_chars(text, MAX_TEXT_CHARS);
        self.publish();
    }

    /// Submit a generation request for the held sample and text.
    ///
    /// Requires a held sample and non-blank text; validation failures are
    /// notified and no request is issued. At most one request is in flight at
    /// a time: calling this while a request is outstanding is a no-op. On
    /// failure the status becomes Failed and the inputs are kept so the user
    /// can retry.
    pub fn generate(&mut self) -> Result<(), WorkflowError> {
        // The interaction surface disables the trigger while a request is
        // outstanding, but an embedder could race it.
        if self.status == WorkflowStatus::Generating {
            return Ok(());
        }

        let Some(sample) = self.sample.clone() else {
            self.notifier
                .notify(NotificationKind::Error, "Please upload a reference voice");
            return Err(WorkflowError::MissingReference);
        };

        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            self.notifier
                .notify(NotificationKind::Error, "Please enter text to generate");
            return Err(WorkflowError::MissingText);
        }

        // set_text already caps the length; re-clamp in case a caller bypassed
        // the input surface.
        let text = clamp_chars(trimmed, MAX_TEXT_CHARS);

        self.stop_playback();
        self.result = None;
        self.status = WorkflowStatus::Generating;
        self.publish();

        match self.backend.generate(&text, &sample) {
            Ok(bytes) => {
                self.result = Some(GeneratedAudio::new(bytes, "audio/wav"));
                self.status = WorkflowStatus::Ready;
                self.notifier
                    .notify(NotificationKind::Success, "Voice generated successfully!");
                self.publish();
                Ok(())
            }
            Err(err) => {
                log::debug!("generation failed: {err}");
                let message = match &err {
                    BackendError::Unavailable => {
                        "Generation server is not available. Please check the connection."
                    }
                    BackendError::TimedOut => "Request timed out. Please try again.",
                    _ => "Failed to generate voice. Please try again.",
                };
                self.status = WorkflowStatus::Failed;
                self.notifier.notify(NotificationKind::Error, message);
                self.publish();
                Err(err.into())
            }
        }
    }

    /// Start, pause, or resume playback of the generated result.
    ///
    /// A no-op when no result exists. Starts from the beginning when the sink
    /// has no track or the last one played out; resumes when paused mid-track.
    pub fn toggle_playback(&mut self) -> Result<(), WorkflowError> {
        let Some(result) = &self.result else {
            return Ok(());
        };

        if self.is_playing {
            self.player.pause();
            self.is_playing = false;
        } else if self.player.is_finished() {
            self.player.start(result.handle())?;
            self.is_playing = true;
        } else {
            self.player.resume();
            self.is_playing = true;
        }

        self.publish();
        Ok(())
    }

    /// Host-driven end-of-media check: clears the playing flag once the sink
    /// reports the track has played out.
    pub fn poll_playback(&mut self) {
        if self.is_playing && self.player.is_finished() {
            self.is_playing = false;
            self.publish();
        }
    }

    /// Save the generated result into `dir`, creating it if needed.
    ///
    /// The filename carries a timestamp-derived suffix so repeated downloads
    /// in the same session never collide. Purely local; no network I/O.
    pub fn download_to(&self, dir: &Path) -> Result<PathBuf, WorkflowError> {
        let Some(result) = &self.result else {
            return Err(WorkflowError::NoResult);
        };

        std::fs::create_dir_all(dir)?;

        let path = unique_download_path(dir, Utc::now().timestamp_millis());
        std::fs::write(&path, result.bytes())?;

        self.notifier
            .notify(NotificationKind::Success, "Audio downloaded!");

        Ok(path)
    }

    /// Subscribe to state snapshots; the callback fires on every change.
    pub fn subscribe(&mut self, subscriber: impl Fn(&WorkflowState) + 'static) -> SubscriberId {
        let id = self.next_subscriber;
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Drop a subscription.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Current state snapshot.
    pub fn state(&self) -> WorkflowState {
        WorkflowState {
            status: self.status,
            sample_name: self.sample.as_ref().map(|s| s.name().to_string()),
            text: self.text.clone(),
            has_result: self.result.is_some(),
            is_playing: self.is_playing,
        }
    }

    /// Current workflow status.
    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    /// The held reference sample, if any.
    pub fn sample(&self) -> Option<&ReferenceSample> {
        self.sample.as_ref()
    }

    /// The held target text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The generated result, if any.
    pub fn result(&self) -> Option<&GeneratedAudio> {
        self.result.as_ref()
    }

    /// Whether the result is currently playing.
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn stop_playback(&mut self) {
        self.player.stop();
        self.is_playing = false;
    }

    fn publish(&self) {
        let state = self.state();
        for (_, subscriber) in &self.subscribers {
            subscriber(&state);
        }
    }
}

impl<B: Backend> Drop for VoiceCloneWorkflow<B> {
    fn drop(&mut self) {
        // The sink holds a handle on the result buffer while a track is
        // loaded; release it with the session.
        self.player.stop();
    }
}

fn sample_error_message(err: &SampleError) -> &'static str {
    match err {
        SampleError::UnsupportedFormat(_) => {
            "Please upload a valid audio file (.wav, .mp3, .m4a, .ogg)"
        }
        SampleError::TooLarge(_) => "File size must be less than 10MB",
        SampleError::IoError(_) => "Could not read the audio file",
    }
}

/// Truncate `text` to at most `max` characters, on a char boundary.
fn clamp_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

fn unique_download_path(dir: &Path, stamp: i64) -> PathBuf {
    let mut path = dir.join(format!("{DOWNLOAD_PREFIX}_{stamp}.wav"));
    let mut attempt = 1;

    while path.exists() {
        path = dir.join(format!("{DOWNLOAD_PREFIX}_{stamp}_{attempt}.wav"));
        attempt += 1;
    }

    path
}
