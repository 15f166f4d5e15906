//! Pipeline stages and run state

use crate::agent::kind::AgentKind;
use serde::{Deserialize, Serialize};

/// Stage of a job analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Describing,
    ExtractingMissions,
    RecommendingTech,
    EnhancingAi,
    PlanningTransition,
}

impl Stage {
    /// Reference execution order
    pub const PIPELINE: [Stage; 5] = [
        Stage::Describing,
        Stage::ExtractingMissions,
        Stage::RecommendingTech,
        Stage::EnhancingAi,
        Stage::PlanningTransition,
    ];

    /// Stages that depend only on the description and may run together
    pub const FAN_OUT: [Stage; 3] = [
        Stage::ExtractingMissions,
        Stage::RecommendingTech,
        Stage::EnhancingAi,
    ];

    pub fn agent(&self) -> AgentKind {
        match self {
            Stage::Describing => AgentKind::Description,
            Stage::ExtractingMissions => AgentKind::MissionsTasks,
            Stage::RecommendingTech => AgentKind::TechRecommendation,
            Stage::EnhancingAi => AgentKind::AiEnhancement,
            Stage::PlanningTransition => AgentKind::TransitionPlanning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Describing => "describing",
            Stage::ExtractingMissions => "extracting_missions",
            Stage::RecommendingTech => "recommending_tech",
            Stage::EnhancingAi => "enhancing_ai",
            Stage::PlanningTransition => "planning_transition",
        }
    }

    /// Progress line shown while the stage runs
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Describing => "Generating job description",
            Stage::ExtractingMissions => "Extracting missions and tasks",
            Stage::RecommendingTech => "Recommending technologies",
            Stage::EnhancingAi => "Identifying AI enhancements",
            Stage::PlanningTransition => "Creating transition plan",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State of one analysis run
///
/// `Idle → Running(stage)… → Done`, or `Failed(stage)` from any running stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Idle,
    Running(Stage),
    Done,
    Failed(Stage),
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Done | RunState::Failed(_))
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            RunState::Running(stage) | RunState::Failed(stage) => Some(*stage),
            RunState::Idle | RunState::Done => None,
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Idle => write!(f, "idle"),
            RunState::Running(stage) => write!(f, "{}", stage),
            RunState::Done => write!(f, "done"),
            RunState::Failed(stage) => write!(f, "failed at {}", stage),
        }
    }
}
