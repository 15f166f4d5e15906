//! Application-level configuration.
//!
//! - [`AnalysisConfig`]: sampling parameters, retry policy and execution
//!   mode for a job analysis run

pub mod analysis_config;

pub use analysis_config::AnalysisConfig;
