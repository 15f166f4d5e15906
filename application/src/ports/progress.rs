//! Progress notification port
//!
//! Defines the interface for reporting progress during a job analysis run.

use jobshift_domain::{JobTitle, RunState, Stage};

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer. Notifications never
/// influence control flow.
///
/// A run that starts always ends with `Done` or `Failed(stage)`; a failed
/// report assembly is reported against the transition stage. An invalid
/// job title is rejected before the run starts and emits nothing.
pub trait ProgressNotifier: Send + Sync {
    /// Called when a stage starts
    fn on_stage_start(&self, stage: Stage);

    /// Called when a stage finishes
    fn on_stage_complete(&self, stage: Stage, success: bool);

    /// Called when the run starts
    fn on_run_start(&self, _title: &JobTitle) {}

    /// Called on every run state transition
    fn on_state_change(&self, _state: &RunState) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
