//! Stage runner
//!
//! Runs one adapter's plan and enforces its postconditions: the tool must
//! exit successfully and every expected artifact must exist afterwards.
//! Only then is the typed output released.

use std::time::{Duration, Instant};

use contracts::{PipelineError, StageId, ToolCommand};
use observability::{record_stage_run, StageOutcome};
use tracing::{error, info};

use crate::{StageAdapter, ToolLauncher};

/// Verified result of one stage
#[derive(Debug, Clone)]
pub struct StageReport<T> {
    pub stage: StageId,
    pub command: ToolCommand,
    pub output: T,
    pub elapsed: Duration,
}

/// Runs stages through a launcher
#[derive(Debug, Clone)]
pub struct StageRunner<L> {
    launcher: L,
}

impl<L: ToolLauncher> StageRunner<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Plan, launch and verify one stage
    ///
    /// # Errors
    /// - `MissingInput` from planning, before anything is launched
    /// - `Launch` / `StageFailed` when the tool cannot start or exits non-zero
    /// - `MissingArtifact` for the first expected file that is absent
    pub async fn run<A: StageAdapter>(
        &self,
        adapter: &A,
        input: &A::Input,
    ) -> Result<StageReport<A::Output>, PipelineError> {
        let stage = adapter.stage();
        let plan = adapter.plan(input)?;

        info!("{}", plan.command);
        let started = Instant::now();

        let exit = match self.launcher.launch(stage, &plan.command).await {
            Ok(exit) => exit,
            Err(e) => {
                record_stage_run(stage, StageOutcome::Failed, started.elapsed());
                return Err(e);
            }
        };
        let elapsed = started.elapsed();

        if !exit.success {
            record_stage_run(stage, StageOutcome::Failed, elapsed);
            error!(stage = %stage, status = %exit.status, "{} finished abnormally", stage.tool_name());
            return Err(PipelineError::StageFailed {
                stage,
                tool: stage.tool_name().to_string(),
                code: exit.code,
                status: exit.status,
            });
        }

        if let Some(missing) = plan.expected.iter().find(|a| !a.exists()) {
            record_stage_run(stage, StageOutcome::MissingArtifact, elapsed);
            return Err(PipelineError::missing_artifact(
                stage,
                missing.description.clone(),
                missing.path.clone(),
            ));
        }

        for artifact in &plan.expected {
            info!(
                "* {} was written to {}",
                artifact.description,
                artifact.path.display()
            );
        }
        record_stage_run(stage, StageOutcome::Success, elapsed);

        Ok(StageReport {
            stage,
            command: plan.command,
            output: plan.output,
            elapsed,
        })
    }
}
