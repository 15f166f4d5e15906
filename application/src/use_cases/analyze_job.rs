//! Analyze Job use case
//!
//! Runs the five agents in dependency order and assembles the report.

use crate::agent::{AgentError, AgentRoster};
use crate::config::AnalysisConfig;
use crate::inference::InferenceClient;
use crate::ports::inference_transport::InferenceTransport;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::response_repair::ResponseRepair;
use jobshift_domain::{
    DomainError, ExecutionMode, JobTitle, PromptContext, Report, RunState, Stage,
};
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that can occur during a job analysis run
#[derive(Error, Debug)]
pub enum AnalyzeJobError {
    #[error("{0}")]
    InvalidTitle(DomainError),

    #[error("{stage} stage failed ({agent}): {source}")]
    Stage {
        stage: Stage,
        agent: &'static str,
        #[source]
        source: AgentError,
    },

    #[error("Analysis cancelled during {0} stage")]
    Cancelled(Stage),

    #[error("Report assembly failed: {0}")]
    Report(DomainError),
}

impl AnalyzeJobError {
    /// The stage that was running when the run stopped
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            AnalyzeJobError::Stage { stage, .. } | AnalyzeJobError::Cancelled(stage) => {
                Some(*stage)
            }
            AnalyzeJobError::InvalidTitle(_) | AnalyzeJobError::Report(_) => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AnalyzeJobError::Cancelled(_))
    }
}

/// Use case for analysing one job title
///
/// `Describing` runs first; missions, technology and AI-enhancement stages
/// each depend only on the description; `PlanningTransition` runs last.
/// Any stage failure aborts the run and no partial report is returned.
pub struct AnalyzeJobUseCase {
    roster: AgentRoster,
    mode: ExecutionMode,
    cancellation_token: Option<CancellationToken>,
}

impl AnalyzeJobUseCase {
    pub fn new(client: Arc<InferenceClient>, mode: ExecutionMode) -> Self {
        Self {
            roster: AgentRoster::new(client),
            mode,
            cancellation_token: None,
        }
    }

    /// Assemble the client and agents from an immutable configuration
    pub fn from_config(
        transport: Arc<dyn InferenceTransport>,
        repair: Arc<dyn ResponseRepair>,
        config: &AnalysisConfig,
    ) -> Self {
        let client = InferenceClient::new(transport, config.inference.clone())
            .with_retry_policy(config.retry.clone())
            .with_repair(repair);
        Self::new(Arc::new(client), config.mode)
    }

    /// Stop the run at the next stage boundary or in-flight call when cancelled
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, job_title: &str) -> Result<Report, AnalyzeJobError> {
        self.execute_with_progress(job_title, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        job_title: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<Report, AnalyzeJobError> {
        let title = JobTitle::try_new(job_title).map_err(AnalyzeJobError::InvalidTitle)?;

        info!(job_title = %title, mode = %self.mode, "Starting job analysis");
        progress.on_run_start(&title);
        progress.on_state_change(&RunState::Idle);

        let mut context = PromptContext::new(&title);

        let outcome = match self.run_pipeline(&mut context, progress).await {
            Ok(()) => Report::from_context(&context).map_err(AnalyzeJobError::Report),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(_) => {
                info!(job_title = %title, "Job analysis complete");
                progress.on_state_change(&RunState::Done);
            }
            Err(e) => {
                warn!(job_title = %title, "Job analysis failed: {}", e);
                // Report assembly follows the last stage
                let stage = e.failed_stage().unwrap_or(Stage::PlanningTransition);
                progress.on_state_change(&RunState::Failed(stage));
            }
        }

        outcome
    }

    async fn run_pipeline(
        &self,
        context: &mut PromptContext,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), AnalyzeJobError> {
        self.run_stage(Stage::Describing, context, progress).await?;

        match self.mode {
            ExecutionMode::Sequential => {
                for stage in Stage::FAN_OUT {
                    self.run_stage(stage, context, progress).await?;
                }
            }
            ExecutionMode::Concurrent => {
                let snapshot: &PromptContext = context;
                // First failure drops the sibling futures
                let (missions, tech, enhancements) = futures::future::try_join3(
                    self.invoke_stage(Stage::ExtractingMissions, snapshot, progress),
                    self.invoke_stage(Stage::RecommendingTech, snapshot, progress),
                    self.invoke_stage(Stage::EnhancingAi, snapshot, progress),
                )
                .await?;

                for (stage, output) in Stage::FAN_OUT
                    .into_iter()
                    .zip([missions, tech, enhancements])
                {
                    Self::record(stage, output, context)?;
                }
            }
        }

        self.run_stage(Stage::PlanningTransition, context, progress)
            .await
    }

    async fn run_stage(
        &self,
        stage: Stage,
        context: &mut PromptContext,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), AnalyzeJobError> {
        let output = self.invoke_stage(stage, context, progress).await?;
        Self::record(stage, output, context)
    }

    /// Run one stage's agent against a read-only view of the context
    async fn invoke_stage(
        &self,
        stage: Stage,
        context: &PromptContext,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, AnalyzeJobError> {
        let agent = self.roster.agent(stage.agent());

        info!(stage = %stage, agent = agent.name(), "{}...", stage.display_name());
        progress.on_stage_start(stage);
        progress.on_state_change(&RunState::Running(stage));

        let result = match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => {
                        progress.on_stage_complete(stage, false);
                        return Err(AnalyzeJobError::Cancelled(stage));
                    }
                    result = agent.run(context) => result,
                }
            }
            None => agent.run(context).await,
        };

        match result {
            Ok(output) => {
                progress.on_stage_complete(stage, true);
                Ok(output)
            }
            Err(source) => {
                warn!(stage = %stage, agent = agent.name(), "Stage failed: {}", source);
                progress.on_stage_complete(stage, false);
                Err(AnalyzeJobError::Stage {
                    stage,
                    agent: agent.name(),
                    source,
                })
            }
        }
    }

    fn record(
        stage: Stage,
        output: String,
        context: &mut PromptContext,
    ) -> Result<(), AnalyzeJobError> {
        let key = stage.agent().produces().context_key();
        context
            .insert(key, output)
            .map_err(|e| AnalyzeJobError::Stage {
                stage,
                agent: stage.agent().name(),
                source: AgentError::StageDependency(e),
            })
    }
}
