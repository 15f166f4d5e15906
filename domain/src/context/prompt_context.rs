//! Prompt context value types

use crate::core::error::DomainError;
use crate::core::job_title::JobTitle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named slot in the prompt context
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextKey {
    JobTitle,
    #[serde(rename = "job_desc")]
    JobDescription,
    MissionsTasks,
    TechRecommendations,
    AiEnhancements,
    TransitionPlan,
}

impl ContextKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKey::JobTitle => "job_title",
            ContextKey::JobDescription => "job_desc",
            ContextKey::MissionsTasks => "missions_tasks",
            ContextKey::TechRecommendations => "tech_recommendations",
            ContextKey::AiEnhancements => "ai_enhancements",
            ContextKey::TransitionPlan => "transition_plan",
        }
    }
}

impl std::fmt::Display for ContextKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accumulated outputs available to later stages (Value Object)
///
/// Seeded with the job title. Each key is write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptContext {
    entries: BTreeMap<ContextKey, String>,
}

impl PromptContext {
    pub fn new(title: &JobTitle) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(ContextKey::JobTitle, title.as_str().to_string());
        Self { entries }
    }

    /// Record a stage output.
    ///
    /// Fails if the key already holds a value.
    pub fn insert(&mut self, key: ContextKey, value: impl Into<String>) -> Result<(), DomainError> {
        if self.entries.contains_key(&key) {
            return Err(DomainError::DuplicateContext(key));
        }
        self.entries.insert(key, value.into());
        Ok(())
    }

    pub fn get(&self, key: ContextKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    /// Look up a key that `agent` cannot render without.
    pub fn require(&self, agent: &'static str, key: ContextKey) -> Result<&str, DomainError> {
        self.get(key)
            .ok_or(DomainError::MissingContext { agent, key })
    }

    pub fn contains(&self, key: ContextKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn job_title(&self) -> &str {
        self.get(ContextKey::JobTitle).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = ContextKey> + '_ {
        self.entries.keys().copied()
    }
}
