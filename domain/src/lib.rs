//! Domain layer for jobshift
//!
//! This crate contains the core business concepts of a job analysis run.
//! It has no dependencies on transports, configuration files or terminals.
//!
//! # Core Concepts
//!
//! ## Report
//!
//! A job analysis produces a [`Report`] with five fixed [`Section`]s:
//! job description, missions & tasks, technology recommendations,
//! AI augmentation opportunities and a transition plan.
//!
//! ## Agents and context
//!
//! Each section is produced by one [`AgentKind`]. An agent renders its
//! prompt from a [`PromptContext`], which accumulates the outputs of the
//! stages that ran before it. Agents declare which context keys they
//! require, so a template is never rendered with missing upstream input.

pub mod agent;
pub mod config;
pub mod context;
pub mod core;
pub mod inference;
pub mod orchestration;
pub mod prompt;
pub mod report;

// Re-export commonly used types
pub use agent::{
    kind::AgentKind,
    transcript::{Exchange, Transcript},
};
pub use config::OutputFormat;
pub use context::prompt_context::{ContextKey, PromptContext};
pub use core::{error::DomainError, job_title::JobTitle};
pub use inference::{
    params::InferenceParams, response_format::ResponseFormat, retry::RetryPolicy,
};
pub use orchestration::{
    mode::ExecutionMode,
    stage::{RunState, Stage},
};
pub use prompt::PromptTemplate;
pub use report::{Report, Section};
