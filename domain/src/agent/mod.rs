//! Agent domain module
//!
//! The five specialised agents of a job analysis run and the transcript
//! each one keeps of its prompt/response exchanges.

pub mod kind;
pub mod transcript;

pub use kind::AgentKind;
pub use transcript::{Exchange, Transcript};
