//! Stage adapter trait

use contracts::{Artifact, PipelineError, StageId, ToolCommand};

/// Everything needed to run one stage and check its result
#[derive(Debug, Clone)]
pub struct StagePlan<T> {
    /// Tool invocation
    pub command: ToolCommand,

    /// Files the tool must leave behind, in check order
    pub expected: Vec<Artifact>,

    /// Typed stage output, released only once `expected` is verified
    pub output: T,
}

/// Stage adapter trait
///
/// One implementation per external tool. An adapter is a pure function of
/// its input:
/// 1. check the input files it consumes exist
/// 2. build the tool command line
/// 3. declare the artifacts the tool must produce
///
/// Launching the tool and checking its postconditions is the stage runner's job.
pub trait StageAdapter {
    /// Immutable stage input
    type Input;

    /// Artifact record produced by the stage
    type Output;

    /// Stage identifier
    fn stage(&self) -> StageId;

    /// Build the plan for `input`
    ///
    /// # Errors
    /// `MissingInput` when a consumed file does not exist.
    fn plan(&self, input: &Self::Input) -> Result<StagePlan<Self::Output>, PipelineError>;
}
