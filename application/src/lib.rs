//! Application layer for jobshift
//!
//! This crate contains the retry-resilient inference client, the agents,
//! the analysis use case and the port definitions adapters implement.
//! It depends only on the domain layer.

pub mod agent;
pub mod config;
pub mod inference;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use agent::{Agent, AgentError, AgentRoster};
pub use config::AnalysisConfig;
pub use inference::{InferenceClient, InferenceError};
pub use ports::{
    inference_transport::{InferenceRequest, InferenceTransport, TransportError},
    progress::{NoProgress, ProgressNotifier},
    response_repair::{NoRepair, ResponseRepair},
};
pub use use_cases::analyze_job::{AnalyzeJobError, AnalyzeJobUseCase};
