//! Paired-end read simulation with ART
//!
//! Illumina and 454 use different binaries and argument conventions; both
//! write `<prefix>1.fq` and `<prefix>2.fq`.

use std::path::{Path, PathBuf};

use contracts::{
    names, PairedReads, PipelineError, RepertoireArtifacts, RunSettings, StageId, Technology,
    ToolCommand, ToolPaths,
};

use super::common::require_input;
use crate::{StageAdapter, StagePlan};

/// Fixed simulation parameters of one ART flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtProfile {
    pub technology: Technology,
    /// Read length, Illumina only
    pub read_length: Option<u32>,
    /// Fold of read coverage
    pub fold_coverage: u32,
    /// Mean DNA fragment size
    pub mean_fragment: u32,
    /// Standard deviation of the fragment size
    pub sd_fragment: u32,
}

impl ArtProfile {
    pub fn for_technology(technology: Technology) -> Self {
        match technology {
            Technology::Illumina => Self {
                technology,
                read_length: Some(250),
                fold_coverage: 1,
                mean_fragment: 350,
                sd_fragment: 50,
            },
            Technology::Roche454 => Self {
                technology,
                read_length: None,
                fold_coverage: 1,
                mean_fragment: 350,
                sd_fragment: 50,
            },
        }
    }

    fn command(&self, binary: &Path, reference: &Path, prefix: &Path) -> ToolCommand {
        match self.technology {
            // art_illumina -i <ref> -p -l <len> -f <fold> -m <mean> -s <sd> -o <prefix>
            Technology::Illumina => ToolCommand::new(binary)
                .arg("-i")
                .arg(reference)
                .arg("-p")
                .arg("-l")
                .arg(self.read_length.unwrap_or(250).to_string())
                .arg("-f")
                .arg(self.fold_coverage.to_string())
                .arg("-m")
                .arg(self.mean_fragment.to_string())
                .arg("-s")
                .arg(self.sd_fragment.to_string())
                .arg("-o")
                .arg(prefix),
            // art_454 <ref> <prefix> <fold> <mean> <sd>
            Technology::Roche454 => ToolCommand::new(binary)
                .arg(reference)
                .arg(prefix)
                .arg(self.fold_coverage.to_string())
                .arg(self.mean_fragment.to_string())
                .arg(self.sd_fragment.to_string()),
        }
    }
}

/// Input of the read simulation stage
#[derive(Debug, Clone)]
pub struct ReadSimulationInput {
    pub technology: Technology,
    pub repertoire_fasta: PathBuf,
    pub output_dir: PathBuf,
}

impl ReadSimulationInput {
    pub fn new(settings: &RunSettings, repertoire: &RepertoireArtifacts) -> Self {
        Self {
            technology: settings.technology,
            repertoire_fasta: repertoire.fasta.clone(),
            output_dir: settings.output_dir.clone(),
        }
    }
}

/// Adapter for the ART read simulators
#[derive(Debug, Clone)]
pub struct ReadSimulator {
    tools: ToolPaths,
}

impl ReadSimulator {
    pub fn new(tools: &ToolPaths) -> Self {
        Self {
            tools: tools.clone(),
        }
    }
}

impl StageAdapter for ReadSimulator {
    type Input = ReadSimulationInput;
    type Output = PairedReads;

    fn stage(&self) -> StageId {
        StageId::ReadSimulation
    }

    fn plan(&self, input: &ReadSimulationInput) -> Result<StagePlan<PairedReads>, PipelineError> {
        require_input("FASTA file with simulated repertoire", &input.repertoire_fasta)?;

        let profile = ArtProfile::for_technology(input.technology);
        let prefix = input.output_dir.join(names::PAIRED_READS_PREFIX);
        let command = profile.command(
            self.tools.read_simulator(input.technology),
            &input.repertoire_fasta,
            &prefix,
        );

        let output = PairedReads {
            left: input.output_dir.join(names::LEFT_READS),
            right: input.output_dir.join(names::RIGHT_READS),
        };
        Ok(StagePlan {
            command,
            expected: output.expected(),
            output,
        })
    }
}
