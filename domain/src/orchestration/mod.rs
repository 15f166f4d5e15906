//! Orchestration domain
//!
//! Stages of a job analysis run, the run state machine, and the
//! scheduling mode for the independent middle stages.

pub mod mode;
pub mod stage;

pub use mode::ExecutionMode;
pub use stage::{RunState, Stage};
