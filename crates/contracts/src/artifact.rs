//! Stage artifacts
//!
//! Each stage yields one typed record. A record only exists once the stage
//! runner has verified every path in it, so downstream stages never see an
//! unset or missing input.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names produced by the external tools
pub mod names {
    pub const REPERTOIRE_FASTA: &str = "repertoire.fasta";
    pub const BASE_STATS: &str = "base_repertoire.stats";
    pub const MUTATED_STATS: &str = "mutated_repertoire.stats";
    pub const MUTATION_POSITIONS_STATS: &str = "mutation_positions.stats";
    pub const FINAL_STATS: &str = "final_repertoire.stats";

    pub const PAIRED_READS_PREFIX: &str = "paired_reads";
    pub const LEFT_READS: &str = "paired_reads1.fq";
    pub const RIGHT_READS: &str = "paired_reads2.fq";

    pub const MERGED_READS_PREFIX: &str = "merged_reads";
    pub const MERGED_READS: &str = "merged_reads.fastq";

    pub const IDEAL_REPERTOIRE_PREFIX: &str = "ideal_repertoire";
    pub const IDEAL_CLUSTERS_FASTA: &str = "ideal_repertoire.clusters.fa";
    pub const IDEAL_RCM: &str = "ideal_repertoire.rcm";

    pub const BASE_LENGTHS_PNG: &str = "base_seq_lens.png";
    pub const BASE_FREQUENCIES_PNG: &str = "base_seq_freq.png";
    pub const MUTATED_FREQUENCIES_PNG: &str = "mutated_seq_freq.png";
    pub const MUTATION_POSITIONS_PNG: &str = "mutation_positions.png";
}

/// One file a stage promises to leave on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// What the file holds, used in log and error messages
    pub description: String,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(description: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            description: description.into(),
            path: path.into(),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

/// Output of the repertoire simulation stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepertoireArtifacts {
    pub fasta: PathBuf,
    pub base_stats: PathBuf,
    pub mutated_stats: PathBuf,
    pub mutation_positions_stats: PathBuf,
    pub final_stats: PathBuf,
}

impl RepertoireArtifacts {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            fasta: dir.join(names::REPERTOIRE_FASTA),
            base_stats: dir.join(names::BASE_STATS),
            mutated_stats: dir.join(names::MUTATED_STATS),
            mutation_positions_stats: dir.join(names::MUTATION_POSITIONS_STATS),
            final_stats: dir.join(names::FINAL_STATS),
        }
    }

    pub fn expected(&self) -> Vec<Artifact> {
        vec![
            Artifact::new("Simulated repertoire", &self.fasta),
            Artifact::new("Statistics for base sequences", &self.base_stats),
            Artifact::new("Statistics for mutated sequences", &self.mutated_stats),
            Artifact::new(
                "Statistics for mutation positions",
                &self.mutation_positions_stats,
            ),
            Artifact::new("Statistics for final repertoire", &self.final_stats),
        ]
    }
}

/// Output of the read simulation stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairedReads {
    pub left: PathBuf,
    pub right: PathBuf,
}

impl PairedReads {
    pub fn expected(&self) -> Vec<Artifact> {
        vec![
            Artifact::new("Simulated left reads", &self.left),
            Artifact::new("Simulated right reads", &self.right),
        ]
    }
}

/// Output of the paired read merging stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedReads {
    pub fastq: PathBuf,
}

impl MergedReads {
    pub fn expected(&self) -> Vec<Artifact> {
        vec![Artifact::new("Merged reads", &self.fastq)]
    }
}

/// Output of the ideal repertoire construction stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdealRepertoire {
    /// CLUSTERS.FASTA of the ideal repertoire
    pub clusters_fasta: PathBuf,
    /// Read-to-cluster map
    pub rcm: PathBuf,
}

impl IdealRepertoire {
    pub fn expected(&self) -> Vec<Artifact> {
        vec![
            Artifact::new("CLUSTERS.FASTA for simulated repertoire", &self.clusters_fasta),
            Artifact::new("RCM for simulated repertoire", &self.rcm),
        ]
    }
}

/// Everything a successful run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineOutput {
    pub repertoire: RepertoireArtifacts,
    pub reads: PairedReads,
    pub merged: MergedReads,
    pub ideal: IdealRepertoire,
    /// Rendered histograms, empty when drawing was skipped
    pub histograms: Vec<PathBuf>,
}

impl PipelineOutput {
    /// The four user-facing artifacts, in report order
    pub fn main_files(&self) -> [(&'static str, &Path); 4] {
        [
            ("Sequences of simulated repertoire", self.repertoire.fasta.as_path()),
            ("Simulated merged reads", self.merged.fastq.as_path()),
            ("CLUSTERS.FA for simulated repertoire", self.ideal.clusters_fasta.as_path()),
            ("RCM for simulated repertoire", self.ideal.rcm.as_path()),
        ]
    }
}
