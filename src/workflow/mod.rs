//! Voice clone workflow orchestration.
//!
//! This module provides the controller that owns all state for the
//! upload-generate-playback cycle and coordinates the generation backend,
//! playback sink, and notification surface.

mod controller;
mod state;

pub use controller::{MAX_TEXT_CHARS, VoiceCloneWorkflow, WorkflowError};
pub use state::{SubscriberId, WorkflowState, WorkflowStatus};
