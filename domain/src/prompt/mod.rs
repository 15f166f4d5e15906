//! Prompt domain
//!
//! Templates for each stage of a job analysis run.

mod template;

pub use template::PromptTemplate;
