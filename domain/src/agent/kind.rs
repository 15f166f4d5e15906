//! Specialised agent definitions
//!
//! Each [`AgentKind`] owns one prompt-construction policy: the context keys
//! it needs, the optional keys it enriches its prompt with, and the report
//! section it contributes.

use crate::context::prompt_context::{ContextKey, PromptContext};
use crate::core::error::DomainError;
use crate::prompt::PromptTemplate;
use crate::report::Section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Description,
    MissionsTasks,
    TechRecommendation,
    AiEnhancement,
    TransitionPlanning,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Description,
        AgentKind::MissionsTasks,
        AgentKind::TechRecommendation,
        AgentKind::AiEnhancement,
        AgentKind::TransitionPlanning,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::Description => "Job Description Agent",
            AgentKind::MissionsTasks => "Mission & Task Agent",
            AgentKind::TechRecommendation => "Technology Recommendation Agent",
            AgentKind::AiEnhancement => "AI Enhancement Agent",
            AgentKind::TransitionPlanning => "Transition Planning Agent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgentKind::Description => "Generates comprehensive job descriptions based on job titles",
            AgentKind::MissionsTasks => {
                "Extracts key missions, deliverables, and tasks from job descriptions"
            }
            AgentKind::TechRecommendation => {
                "Recommends specific technologies and tools to enhance job roles"
            }
            AgentKind::AiEnhancement => {
                "Identifies AI tools, automation opportunities, efficiency gains, and risks"
            }
            AgentKind::TransitionPlanning => {
                "Creates transition plans for evolving into AI-augmented roles"
            }
        }
    }

    /// Context keys that must be populated before rendering
    pub fn required_keys(&self) -> &'static [ContextKey] {
        match self {
            AgentKind::Description => &[ContextKey::JobTitle],
            AgentKind::MissionsTasks
            | AgentKind::TechRecommendation
            | AgentKind::AiEnhancement => &[ContextKey::JobDescription],
            AgentKind::TransitionPlanning => &[ContextKey::JobTitle, ContextKey::JobDescription],
        }
    }

    /// Context keys used when present, omitted from the prompt otherwise
    pub fn optional_keys(&self) -> &'static [ContextKey] {
        match self {
            AgentKind::TransitionPlanning => {
                &[ContextKey::AiEnhancements, ContextKey::TechRecommendations]
            }
            _ => &[],
        }
    }

    /// Optional keys missing from `context`, whose blocks will be left out
    pub fn omitted_keys(&self, context: &PromptContext) -> Vec<ContextKey> {
        self.optional_keys()
            .iter()
            .copied()
            .filter(|key| !context.contains(*key))
            .collect()
    }

    pub fn produces(&self) -> Section {
        match self {
            AgentKind::Description => Section::JobDescription,
            AgentKind::MissionsTasks => Section::MissionsTasks,
            AgentKind::TechRecommendation => Section::TechRecommendations,
            AgentKind::AiEnhancement => Section::AiEnhancements,
            AgentKind::TransitionPlanning => Section::TransitionPlan,
        }
    }

    /// Check that every required key is present.
    pub fn check_dependencies(&self, context: &PromptContext) -> Result<(), DomainError> {
        for key in self.required_keys() {
            context.require(self.name(), *key)?;
        }
        Ok(())
    }

    /// Render this agent's prompt against the accumulated context.
    pub fn render(&self, context: &PromptContext) -> Result<String, DomainError> {
        self.check_dependencies(context)?;

        let name = self.name();
        let prompt = match self {
            AgentKind::Description => {
                PromptTemplate::job_description(context.require(name, ContextKey::JobTitle)?)
            }
            AgentKind::MissionsTasks => PromptTemplate::missions_and_tasks(
                context.require(name, ContextKey::JobDescription)?,
            ),
            AgentKind::TechRecommendation => PromptTemplate::tech_recommendations(
                context.require(name, ContextKey::JobDescription)?,
            ),
            AgentKind::AiEnhancement => PromptTemplate::ai_enhancements(
                context.require(name, ContextKey::JobDescription)?,
            ),
            AgentKind::TransitionPlanning => PromptTemplate::transition_plan(
                context.require(name, ContextKey::JobTitle)?,
                context.require(name, ContextKey::JobDescription)?,
                context.get(ContextKey::AiEnhancements),
                context.get(ContextKey::TechRecommendations),
            ),
        };

        Ok(prompt)
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
