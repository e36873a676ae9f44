//! Stage identifiers and the pipeline state machine
//!
//! ```text
//! Init -> RepertoireSimulated -> ReadsSimulated -> ReadsMerged -> Done
//!   \___________________\__________________\______________\____> Failed
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::PipelineError;

/// The four pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    RepertoireSimulation,
    ReadSimulation,
    ReadMerging,
    IdealRepertoire,
}

impl StageId {
    /// All stages in execution order
    pub const ALL: [StageId; 4] = [
        Self::RepertoireSimulation,
        Self::ReadSimulation,
        Self::ReadMerging,
        Self::IdealRepertoire,
    ];

    /// Short machine-friendly name (metrics label, log field)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepertoireSimulation => "repertoire_simulation",
            Self::ReadSimulation => "read_simulation",
            Self::ReadMerging => "read_merging",
            Self::IdealRepertoire => "ideal_repertoire",
        }
    }

    /// Human-readable banner title
    pub fn title(&self) -> &'static str {
        match self {
            Self::RepertoireSimulation => "Reference repertoire simulation",
            Self::ReadSimulation => "Read simulation",
            Self::ReadMerging => "Paired reads merging",
            Self::IdealRepertoire => "Ideal repertoire construction",
        }
    }

    /// Name of the external tool driven by the stage
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::RepertoireSimulation => "repertoire_simulator",
            Self::ReadSimulation => "ART",
            Self::ReadMerging => "paired_read_merger",
            Self::IdealRepertoire => "ideal_repertoire_constructor",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PipelineState {
    #[default]
    Init,
    RepertoireSimulated,
    ReadsSimulated,
    ReadsMerged,
    /// Ideal repertoire built; terminal success state
    Done,
    /// Absorbing failure state, remembers the stage that failed
    Failed(StageId),
}

impl PipelineState {
    /// Stage allowed to run from this state, if any
    pub fn next_stage(&self) -> Option<StageId> {
        match self {
            Self::Init => Some(StageId::RepertoireSimulation),
            Self::RepertoireSimulated => Some(StageId::ReadSimulation),
            Self::ReadsSimulated => Some(StageId::ReadMerging),
            Self::ReadsMerged => Some(StageId::IdealRepertoire),
            Self::Done | Self::Failed(_) => None,
        }
    }

    /// Transition after `stage` completed successfully
    ///
    /// # Errors
    /// Returns an error when `stage` is not the one this state expects,
    /// which means the orchestrator tried to skip or repeat a stage.
    pub fn complete(self, stage: StageId) -> Result<Self, PipelineError> {
        if self.next_stage() != Some(stage) {
            return Err(PipelineError::Other(format!(
                "stage '{stage}' cannot complete from state {self:?}"
            )));
        }
        Ok(match stage {
            StageId::RepertoireSimulation => Self::RepertoireSimulated,
            StageId::ReadSimulation => Self::ReadsSimulated,
            StageId::ReadMerging => Self::ReadsMerged,
            StageId::IdealRepertoire => Self::Done,
        })
    }

    /// Transition into the absorbing failure state
    pub fn fail(self, stage: StageId) -> Self {
        match self {
            Self::Failed(_) => self,
            _ => Self::Failed(stage),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed(_))
    }
}
