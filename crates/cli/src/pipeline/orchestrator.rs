//! Pipeline orchestrator - runs the four stages in order.
//!
//! Each stage gets a fresh immutable input built from the run settings and
//! the verified outputs of earlier stages. Outputs are folded into a
//! `PipelineOutput`; the state machine refuses any out-of-order transition.

use contracts::{
    PipelineError, PipelineOutput, PipelineState, RunSettings, StageId, ToolPaths,
};
use drawing::{visualize_repertoire_stats, HistogramRenderer, PngHistogram};
use observability::StageTimings;
use stages::{
    IdealRepertoireConstructor, IdealRepertoireInput, MergeInput, PairedReadMerger,
    ReadSimulationInput, ReadSimulator, RepertoireInput, RepertoireSimulator, StageReport,
    StageRunner, ToolLauncher,
};
use tracing::{error, info};

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub output: PipelineOutput,
    pub timings: StageTimings,
}

/// Main pipeline orchestrator
pub struct Pipeline<L> {
    settings: RunSettings,
    tools: ToolPaths,
    runner: StageRunner<L>,
    renderer: Box<dyn HistogramRenderer + Send + Sync>,
    state: PipelineState,
    timings: StageTimings,
}

impl<L: ToolLauncher + Sync> Pipeline<L> {
    /// Create a pipeline drawing histograms with the PNG renderer
    pub fn new(settings: RunSettings, tools: ToolPaths, launcher: L) -> Self {
        Self {
            settings,
            tools,
            runner: StageRunner::new(launcher),
            renderer: Box::new(PngHistogram::default()),
            state: PipelineState::Init,
            timings: StageTimings::new(),
        }
    }

    /// Replace the histogram renderer
    pub fn with_renderer(mut self, renderer: impl HistogramRenderer + Send + Sync + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    pub fn launcher(&self) -> &L {
        self.runner.launcher()
    }

    /// Run all stages to completion
    ///
    /// On error the state moves to `Failed(stage)` and artifacts of earlier
    /// stages are left on disk. A pipeline runs at most once.
    pub async fn run(&mut self) -> Result<PipelineReport, PipelineError> {
        if self.state.is_terminal() {
            return Err(PipelineError::Other(format!(
                "pipeline already finished in state {:?}",
                self.state
            )));
        }
        info!("IgSimulator starts");

        match self.run_stages().await {
            Ok(output) => {
                info!("IgSimulator ends");
                Ok(PipelineReport {
                    output,
                    timings: self.timings.clone(),
                })
            }
            Err(e) => {
                if let Some(stage) = self.state.next_stage() {
                    self.state = self.state.fail(stage);
                    error!(stage = %stage, "{} failed", stage.title());
                }
                Err(e)
            }
        }
    }

    async fn run_stages(&mut self) -> Result<PipelineOutput, PipelineError> {
        banner(StageId::RepertoireSimulation);
        let simulator = RepertoireSimulator::new(&self.tools.repertoire_simulator);
        let report = self
            .runner
            .run(&simulator, &RepertoireInput::from_settings(&self.settings))
            .await?;
        let histograms = if self.settings.draw_histograms {
            visualize_repertoire_stats(
                &report.output,
                &self.settings.output_dir,
                self.renderer.as_ref(),
            )?
        } else {
            info!("Drawing of histograms is skipped");
            Vec::new()
        };
        let repertoire = self.advance(report)?;

        banner(StageId::ReadSimulation);
        let read_simulator = ReadSimulator::new(&self.tools);
        let report = self
            .runner
            .run(
                &read_simulator,
                &ReadSimulationInput::new(&self.settings, &repertoire),
            )
            .await?;
        let reads = self.advance(report)?;

        banner(StageId::ReadMerging);
        let merger = PairedReadMerger::new(&self.tools.paired_read_merger);
        let report = self
            .runner
            .run(&merger, &MergeInput::new(&self.settings, &reads))
            .await?;
        let merged = self.advance(report)?;

        banner(StageId::IdealRepertoire);
        let constructor = IdealRepertoireConstructor::new(&self.tools.ideal_repertoire_constructor);
        let report = self
            .runner
            .run(
                &constructor,
                &IdealRepertoireInput::new(&self.settings, &merged),
            )
            .await?;
        let ideal = self.advance(report)?;

        Ok(PipelineOutput {
            repertoire,
            reads,
            merged,
            ideal,
            histograms,
        })
    }

    /// Record a verified stage and release its output
    fn advance<T>(&mut self, report: StageReport<T>) -> Result<T, PipelineError> {
        self.state = self.state.complete(report.stage)?;
        self.timings.push(report.stage, report.elapsed);
        Ok(report.output)
    }
}

fn banner(stage: StageId) {
    info!("==== {}", stage.title());
}
