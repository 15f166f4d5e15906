//! Prompt context accumulated across a job analysis run
//!
//! Every stage writes its output into the [`PromptContext`] under a
//! [`ContextKey`], and later stages read from it when rendering prompts.
//! The context only grows: keys are written once and never removed.

pub mod prompt_context;

pub use prompt_context::{ContextKey, PromptContext};
