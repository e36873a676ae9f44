//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use config_loader::RunOptions;
use observability::LoggingConfig;
use std::path::PathBuf;

/// IgSimulator - simulation of immunoglobulin repertoires and sequencing reads
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ig-simulator",
    author,
    version,
    about = "Simulate an antibody repertoire, sequence it and build its ideal clustering",
    long_about = "Simulates a reference immunoglobulin repertoire from germline gene \n\
                  databases, simulates paired-end reads from it, merges the read pairs \n\
                  and constructs the ideal repertoire of the merged reads."
)]
pub struct Cli {
    /// Output directory (recreated from scratch)
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Number of base sequences
    #[arg(long, value_name = "INT")]
    pub num_bases: Option<u64>,

    /// Expected number of mutated sequences
    #[arg(long, value_name = "INT")]
    pub num_mutated: Option<u64>,

    /// Expected size of the final repertoire
    #[arg(long, value_name = "INT")]
    pub repertoire_size: Option<u64>,

    /// Chain type: HC (heavy) or LC (light)
    #[arg(long, value_name = "HC|LC")]
    pub chain_type: Option<String>,

    /// FASTA file with V gene segments
    #[arg(long = "vgenes", value_name = "FILE")]
    pub v_genes: Option<PathBuf>,

    /// FASTA file with D gene segments (heavy chain only)
    #[arg(long = "dgenes", value_name = "FILE")]
    pub d_genes: Option<PathBuf>,

    /// FASTA file with J gene segments
    #[arg(long = "jgenes", value_name = "FILE")]
    pub j_genes: Option<PathBuf>,

    /// Sequencing technology: Illumina or 454 [default: Illumina]
    #[arg(long = "tech", value_name = "TECH")]
    pub technology: Option<String>,

    /// Minimal overlap of paired reads [default: 60]
    #[arg(long, value_name = "INT")]
    pub min_overlap: Option<u32>,

    /// Maximal mismatch rate of the overlap, within [0, 1] [default: 0.1]
    #[arg(long, value_name = "FLOAT")]
    pub max_mismatch: Option<f64>,

    /// Run on the small built-in test configuration
    #[arg(long)]
    pub test: bool,

    /// Do not draw histograms of the repertoire statistics
    #[arg(long)]
    pub skip_drawing: bool,

    /// Installation root; relative tool and database paths are resolved against it
    #[arg(long, value_name = "DIR", default_value = ".", env = "IG_SIMULATOR_HOME")]
    pub home: PathBuf,

    /// Toolchain file (TOML or JSON) with tool and germline database paths
    #[arg(long, value_name = "FILE", env = "IG_SIMULATOR_TOOLS")]
    pub tools: Option<PathBuf>,

    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, env = "IG_SIMULATOR_VERBOSE")]
    pub verbose: u8,

    /// Only log warnings and errors; tool output is not echoed
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Console log format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        env = "IG_SIMULATOR_LOG_FORMAT"
    )]
    pub log_format: LogFormat,
}

impl Cli {
    /// Raw run options for the configuration resolver
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            output_dir: self.output.clone(),
            num_bases: self.num_bases,
            num_mutated: self.num_mutated,
            repertoire_size: self.repertoire_size,
            chain_type: self.chain_type.clone(),
            v_genes: self.v_genes.clone(),
            d_genes: self.d_genes.clone(),
            j_genes: self.j_genes.clone(),
            technology: self.technology.clone(),
            min_overlap: self.min_overlap,
            max_mismatch: self.max_mismatch,
            test: self.test,
            skip_drawing: self.skip_drawing,
        }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        let level = if self.quiet {
            "warn"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        };
        LoggingConfig {
            log_format: self.log_format.into(),
            default_log_level: level.to_string(),
        }
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
