//! RunSettings - Config Loader output
//!
//! Immutable description of one simulation run. Built once before the
//! pipeline starts and only ever borrowed afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{ChainType, Technology};

/// Name of the per-run log file inside the output directory
pub const LOG_FILE_NAME: &str = "ig_simulator.log";

/// Default minimal overlap of paired reads during merging
pub const DEFAULT_MIN_OVERLAP: u32 = 60;

/// Default maximal mismatch rate of the overlap during merging
pub const DEFAULT_MAX_MISMATCH: f64 = 0.1;

/// Largest repertoire size whose read count (two per sequence) fits in u64
pub const MAX_REPERTOIRE_SIZE: u64 = u64::MAX / 2;

/// Resolved run parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSettings {
    /// Directory receiving every artifact of the run
    pub output_dir: PathBuf,

    /// Chain type to simulate
    pub chain_type: ChainType,

    /// Number of base sequences
    pub num_bases: u64,

    /// Expected number of mutated sequences
    pub num_mutated: u64,

    /// Expected size of the final repertoire
    pub repertoire_size: u64,

    /// Germline databases consumed by the repertoire simulator
    pub gene_databases: GeneDatabases,

    /// Sequencing technology for read simulation
    pub technology: Technology,

    /// Paired read merging thresholds
    pub merge: MergeThresholds,

    /// Render histograms of the repertoire statistics
    pub draw_histograms: bool,
}

impl RunSettings {
    /// Expected number of simulated reads (two per repertoire sequence)
    ///
    /// Saturates above [`MAX_REPERTOIRE_SIZE`], which validation rejects.
    pub fn num_reads(&self) -> u64 {
        self.repertoire_size.saturating_mul(2)
    }

    /// Path of the run log file
    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(LOG_FILE_NAME)
    }

    /// Path of an artifact inside the output directory
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Germline gene segment databases (FASTA)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneDatabases {
    pub v_genes: PathBuf,

    /// Only present for heavy chain runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub d_genes: Option<PathBuf>,

    pub j_genes: PathBuf,
}

impl GeneDatabases {
    /// Databases in the positional order expected by the simulator
    pub fn ordered(&self) -> Vec<&Path> {
        let mut paths = vec![self.v_genes.as_path()];
        if let Some(ref d) = self.d_genes {
            paths.push(d.as_path());
        }
        paths.push(self.j_genes.as_path());
        paths
    }
}

/// Thresholds forwarded to the paired read merger
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MergeThresholds {
    /// Minimal allowed overlap size
    #[serde(default = "default_min_overlap")]
    pub min_overlap: u32,

    /// Maximal allowed mismatch rate, within [0, 1]
    #[serde(default = "default_max_mismatch")]
    pub max_mismatch: f64,
}

fn default_min_overlap() -> u32 {
    DEFAULT_MIN_OVERLAP
}

fn default_max_mismatch() -> f64 {
    DEFAULT_MAX_MISMATCH
}

impl Default for MergeThresholds {
    fn default() -> Self {
        Self {
            min_overlap: DEFAULT_MIN_OVERLAP,
            max_mismatch: DEFAULT_MAX_MISMATCH,
        }
    }
}
