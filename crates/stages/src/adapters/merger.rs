//! Paired read merging

use std::path::PathBuf;

use contracts::{
    names, MergeThresholds, MergedReads, PairedReads, PipelineError, RunSettings, StageId,
    ToolCommand,
};

use super::common::require_input;
use crate::{StageAdapter, StagePlan};

/// Input of the merging stage
#[derive(Debug, Clone)]
pub struct MergeInput {
    pub reads: PairedReads,
    pub thresholds: MergeThresholds,
    pub output_dir: PathBuf,
}

impl MergeInput {
    pub fn new(settings: &RunSettings, reads: &PairedReads) -> Self {
        Self {
            reads: reads.clone(),
            thresholds: settings.merge,
            output_dir: settings.output_dir.clone(),
        }
    }
}

/// Adapter for the paired read merger
///
/// `<bin> <left> <right> <out_dir>/merged_reads --min-overlap=N --max-mismatch=F`
#[derive(Debug, Clone)]
pub struct PairedReadMerger {
    binary: PathBuf,
}

impl PairedReadMerger {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl StageAdapter for PairedReadMerger {
    type Input = MergeInput;
    type Output = MergedReads;

    fn stage(&self) -> StageId {
        StageId::ReadMerging
    }

    fn plan(&self, input: &MergeInput) -> Result<StagePlan<MergedReads>, PipelineError> {
        require_input("FASTQ file with left reads", &input.reads.left)?;
        require_input("FASTQ file with right reads", &input.reads.right)?;

        let command = ToolCommand::new(&self.binary)
            .arg(&input.reads.left)
            .arg(&input.reads.right)
            .arg(input.output_dir.join(names::MERGED_READS_PREFIX))
            .arg(format!("--min-overlap={}", input.thresholds.min_overlap))
            .arg(format!("--max-mismatch={}", input.thresholds.max_mismatch));

        let output = MergedReads {
            fastq: input.output_dir.join(names::MERGED_READS),
        };
        Ok(StagePlan {
            command,
            expected: output.expected(),
            output,
        })
    }
}
