//! Agent entity

use super::error::AgentError;
use crate::inference::InferenceClient;
use jobshift_domain::{AgentKind, Exchange, PromptContext, Transcript};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// A named, stateful wrapper around the inference client
///
/// Renders its kind's template against the supplied context, invokes the
/// client and records the exchange. The transcript sits behind a mutex so
/// a shared `&Agent` can be used from concurrent stages.
pub struct Agent {
    kind: AgentKind,
    client: Arc<InferenceClient>,
    memory: Mutex<Transcript>,
}

impl Agent {
    pub fn new(kind: AgentKind, client: Arc<InferenceClient>) -> Self {
        Self {
            kind,
            client,
            memory: Mutex::new(Transcript::new()),
        }
    }

    pub fn kind(&self) -> AgentKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }

    /// Render the prompt without calling the backend
    pub fn render(&self, context: &PromptContext) -> Result<String, AgentError> {
        Ok(self.kind.render(context)?)
    }

    /// Render, invoke and record.
    ///
    /// Dependency and configuration errors surface before any network call.
    pub async fn run(&self, context: &PromptContext) -> Result<String, AgentError> {
        let prompt = self.render(context)?;

        debug!(
            agent = self.name(),
            prompt_chars = prompt.len(),
            omitted = ?self.kind.omitted_keys(context),
            "Invoking agent"
        );

        let response = self.client.invoke(&prompt).await?;

        self.memory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(Exchange::new(prompt, response.clone()));

        Ok(response)
    }

    /// Snapshot of the recorded exchanges, oldest first
    pub fn memory(&self) -> Vec<Exchange> {
        self.memory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .exchanges()
            .to_vec()
    }

    pub fn clear_memory(&self) {
        self.memory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
