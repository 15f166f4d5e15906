//! The five agents of a job analysis run

use super::runner::Agent;
use crate::inference::InferenceClient;
use jobshift_domain::AgentKind;
use std::sync::Arc;

/// One agent per [`AgentKind`], all sharing a single inference client
pub struct AgentRoster {
    description: Agent,
    missions_tasks: Agent,
    tech_recommendation: Agent,
    ai_enhancement: Agent,
    transition_planning: Agent,
}

impl AgentRoster {
    pub fn new(client: Arc<InferenceClient>) -> Self {
        Self {
            description: Agent::new(AgentKind::Description, client.clone()),
            missions_tasks: Agent::new(AgentKind::MissionsTasks, client.clone()),
            tech_recommendation: Agent::new(AgentKind::TechRecommendation, client.clone()),
            ai_enhancement: Agent::new(AgentKind::AiEnhancement, client.clone()),
            transition_planning: Agent::new(AgentKind::TransitionPlanning, client),
        }
    }

    pub fn agent(&self, kind: AgentKind) -> &Agent {
        match kind {
            AgentKind::Description => &self.description,
            AgentKind::MissionsTasks => &self.missions_tasks,
            AgentKind::TechRecommendation => &self.tech_recommendation,
            AgentKind::AiEnhancement => &self.ai_enhancement,
            AgentKind::TransitionPlanning => &self.transition_planning,
        }
    }

    /// All agents in pipeline order
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        AgentKind::ALL.into_iter().map(move |kind| self.agent(kind))
    }

    pub fn clear_memory(&self) {
        for agent in self.agents() {
            agent.clear_memory();
        }
    }
}
