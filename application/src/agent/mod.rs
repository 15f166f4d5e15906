//! Prompt-rendering agents
//!
//! An [`Agent`] pairs one [`AgentKind`](jobshift_domain::AgentKind) with a
//! shared [`InferenceClient`](crate::inference::InferenceClient) and keeps
//! a transcript of its exchanges. [`AgentRoster`] holds the five agents of
//! a job analysis run.

mod error;
mod roster;
mod runner;

pub use error::AgentError;
pub use roster::AgentRoster;
pub use runner::Agent;
