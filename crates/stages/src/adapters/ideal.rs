//! Ideal repertoire construction

use std::path::PathBuf;

use contracts::{
    names, IdealRepertoire, MergedReads, PipelineError, RunSettings, StageId, ToolCommand,
};

use super::common::require_input;
use crate::{StageAdapter, StagePlan};

/// Input of the ideal repertoire stage
#[derive(Debug, Clone)]
pub struct IdealRepertoireInput {
    pub merged_reads: PathBuf,
    pub output_dir: PathBuf,
}

impl IdealRepertoireInput {
    pub fn new(settings: &RunSettings, merged: &MergedReads) -> Self {
        Self {
            merged_reads: merged.fastq.clone(),
            output_dir: settings.output_dir.clone(),
        }
    }
}

/// Adapter for the ideal repertoire constructor
///
/// `<bin> <merged_reads.fastq> <out_dir>/ideal_repertoire`
#[derive(Debug, Clone)]
pub struct IdealRepertoireConstructor {
    binary: PathBuf,
}

impl IdealRepertoireConstructor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl StageAdapter for IdealRepertoireConstructor {
    type Input = IdealRepertoireInput;
    type Output = IdealRepertoire;

    fn stage(&self) -> StageId {
        StageId::IdealRepertoire
    }

    fn plan(
        &self,
        input: &IdealRepertoireInput,
    ) -> Result<StagePlan<IdealRepertoire>, PipelineError> {
        require_input("FASTQ file with merged reads", &input.merged_reads)?;

        let command = ToolCommand::new(&self.binary)
            .arg(&input.merged_reads)
            .arg(input.output_dir.join(names::IDEAL_REPERTOIRE_PREFIX));

        let output = IdealRepertoire {
            clusters_fasta: input.output_dir.join(names::IDEAL_CLUSTERS_FASTA),
            rcm: input.output_dir.join(names::IDEAL_RCM),
        };
        Ok(StagePlan {
            command,
            expected: output.expected(),
            output,
        })
    }
}
