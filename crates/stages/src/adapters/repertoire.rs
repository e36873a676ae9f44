//! Reference repertoire simulation

use std::path::PathBuf;

use contracts::{
    ChainType, GeneDatabases, PipelineError, RepertoireArtifacts, RunSettings, StageId,
    ToolCommand,
};

use super::common::require_input;
use crate::{StageAdapter, StagePlan};

/// Input of the repertoire simulation stage
#[derive(Debug, Clone)]
pub struct RepertoireInput {
    pub chain_type: ChainType,
    pub output_dir: PathBuf,
    pub num_bases: u64,
    pub num_mutated: u64,
    pub repertoire_size: u64,
    pub gene_databases: GeneDatabases,
}

impl RepertoireInput {
    pub fn from_settings(settings: &RunSettings) -> Self {
        Self {
            chain_type: settings.chain_type,
            output_dir: settings.output_dir.clone(),
            num_bases: settings.num_bases,
            num_mutated: settings.num_mutated,
            repertoire_size: settings.repertoire_size,
            gene_databases: settings.gene_databases.clone(),
        }
    }
}

/// Adapter for the repertoire simulator binary
///
/// `<bin> <HC|LC> <out_dir> <bases> <mutated> <size> <V> [<D>] <J>`
#[derive(Debug, Clone)]
pub struct RepertoireSimulator {
    binary: PathBuf,
}

impl RepertoireSimulator {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl StageAdapter for RepertoireSimulator {
    type Input = RepertoireInput;
    type Output = RepertoireArtifacts;

    fn stage(&self) -> StageId {
        StageId::RepertoireSimulation
    }

    fn plan(&self, input: &RepertoireInput) -> Result<StagePlan<RepertoireArtifacts>, PipelineError> {
        let dbs = &input.gene_databases;
        require_input("FASTA file with V genes", &dbs.v_genes)?;
        let d_genes = match (input.chain_type, dbs.d_genes.as_ref()) {
            (ChainType::Heavy, Some(d)) => {
                require_input("FASTA file with D genes", d)?;
                Some(d)
            }
            (ChainType::Heavy, None) => {
                return Err(PipelineError::config_validation(
                    "--dgenes",
                    "heavy chain simulation requires a D genes database",
                ))
            }
            (ChainType::Light, _) => None,
        };
        require_input("FASTA file with J genes", &dbs.j_genes)?;

        let mut command = ToolCommand::new(&self.binary)
            .arg(input.chain_type.as_str())
            .arg(&input.output_dir)
            .arg(input.num_bases.to_string())
            .arg(input.num_mutated.to_string())
            .arg(input.repertoire_size.to_string())
            .arg(&dbs.v_genes);
        if let Some(d) = d_genes {
            command = command.arg(d);
        }
        let command = command.arg(&dbs.j_genes);

        let output = RepertoireArtifacts::in_dir(&input.output_dir);
        Ok(StagePlan {
            command,
            expected: output.expected(),
            output,
        })
    }
}
