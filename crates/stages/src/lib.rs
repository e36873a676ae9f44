//! # Stages
//!
//! Execution of the four IgSimulator pipeline stages.
//!
//! Responsibilities:
//! - One `StageAdapter` per external tool: input checks, command line,
//!   expected artifacts
//! - `ToolLauncher` to run a command (real child process or mock)
//! - `StageRunner` to enforce exit status and artifact postconditions
//!
//! ## Usage Example
//!
//! ```ignore
//! use stages::{ProcessLauncher, RepertoireInput, RepertoireSimulator, StageRunner};
//!
//! let runner = StageRunner::new(ProcessLauncher::new(run_log.clone(), true));
//! let simulator = RepertoireSimulator::new(&tools.repertoire_simulator);
//! let report = runner
//!     .run(&simulator, &RepertoireInput::from_settings(&settings))
//!     .await?;
//! println!("{}", report.output.fasta.display());
//! ```

mod adapter;
mod adapters;
mod launcher;
mod mock;
mod runner;

pub use adapter::{StageAdapter, StagePlan};
pub use adapters::{
    ArtProfile, IdealRepertoireConstructor, IdealRepertoireInput, MergeInput, PairedReadMerger,
    ReadSimulationInput, ReadSimulator, RepertoireInput, RepertoireSimulator,
};
pub use launcher::{ExitReport, LocalToolLauncher, ProcessLauncher, ToolLauncher};
pub use mock::{MockBehavior, MockLauncher};
pub use runner::{StageReport, StageRunner};
