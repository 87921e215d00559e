//! Workflow status and observable state snapshots.

/// Phase of the upload-generate-playback cycle.
///
/// Not persisted; a session starts at `Idle` and loops indefinitely across
/// repeated generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowStatus {
    /// No generation outstanding or completed for the current inputs.
    #[default]
    Idle,

    /// A generation request is in flight.
    Generating,

    /// The last generation produced a playable result.
    Ready,

    /// The last generation failed; inputs are kept so the user can retry.
    Failed,
}

/// Snapshot of the workflow, published to subscribers on every state change.
///
/// A UI layer subscribes and redraws from these snapshots instead of reading
/// the controller's fields directly.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub status: WorkflowStatus,
    pub sample_name: Option<String>,
    pub text: String,
    pub has_result: bool,
    pub is_playing: bool,
}

/// Handle identifying a subscription, for unsubscribing.
pub type SubscriberId = u64;
