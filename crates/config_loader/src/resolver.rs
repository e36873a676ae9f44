//! RunOptions -> RunSettings

use std::fs;
use std::path::{Path, PathBuf};

use contracts::{
    ChainType, GeneDatabases, MergeThresholds, PipelineError, RunSettings, Technology,
};
use tracing::{info, warn};

use crate::{validator, GermlineDefaults, RunOptions, ToolchainConfig};

/// Resolve raw options into validated run settings
///
/// Applies the test preset and defaults, validates every rule, and picks
/// the germline databases. Touches nothing on disk.
///
/// # Errors
/// - `ConfigValidation` for any violated rule
/// - `MissingInput` when a required germline database cannot be found
pub fn resolve(
    options: RunOptions,
    toolchain: &ToolchainConfig,
) -> Result<RunSettings, PipelineError> {
    let options = options.with_test_preset();
    validator::validate(&options)?;

    let chain_type: ChainType = options.chain_type.as_deref().unwrap_or_default().parse()?;
    let technology = match options.technology.as_deref() {
        Some(tech) => tech.parse()?,
        None => Technology::default(),
    };
    let defaults = MergeThresholds::default();
    let merge = MergeThresholds {
        min_overlap: options.min_overlap.unwrap_or(defaults.min_overlap),
        max_mismatch: options.max_mismatch.unwrap_or(defaults.max_mismatch),
    };
    let gene_databases = resolve_gene_databases(chain_type, &options, &toolchain.germline)?;
    let output_dir = absolute(options.output_dir.as_deref().unwrap_or(Path::new("")))?;

    Ok(RunSettings {
        output_dir,
        chain_type,
        // validated above
        num_bases: options.num_bases.unwrap_or_default(),
        num_mutated: options.num_mutated.unwrap_or_default(),
        repertoire_size: options.repertoire_size.unwrap_or_default(),
        gene_databases,
        technology,
        merge,
        draw_histograms: !options.skip_drawing,
    })
}

/// Pick the germline database for every segment the chain needs
pub fn resolve_gene_databases(
    chain_type: ChainType,
    options: &RunOptions,
    defaults: &GermlineDefaults,
) -> Result<GeneDatabases, PipelineError> {
    let v_genes = pick_database("V", options.v_genes.as_deref(), &defaults.v_genes)?;
    let d_genes = if chain_type.uses_d_segment() {
        Some(pick_database("D", options.d_genes.as_deref(), &defaults.d_genes)?)
    } else {
        None
    };
    let j_genes = pick_database("J", options.j_genes.as_deref(), &defaults.j_genes)?;

    Ok(GeneDatabases {
        v_genes,
        d_genes,
        j_genes,
    })
}

fn pick_database(
    segment: &str,
    explicit: Option<&Path>,
    default: &Path,
) -> Result<PathBuf, PipelineError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        warn!(
            segment,
            path = %path.display(),
            "FASTA file with {segment} genes does not exist"
        );
    }

    if !default.is_file() {
        return Err(PipelineError::missing_input(
            format!("FASTA file with {segment} genes"),
            default,
        ));
    }

    info!(
        "FASTA file with {segment} genes was not specified. IMGT database {} will be used by default",
        default.display()
    );
    Ok(default.to_path_buf())
}

fn absolute(path: &Path) -> Result<PathBuf, PipelineError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Recreate the output directory from scratch
///
/// Existing contents are removed so every run starts from a clean artifact set.
pub fn prepare_output_dir(dir: &Path) -> Result<(), PipelineError> {
    if dir.parent().is_none() {
        return Err(PipelineError::config_validation(
            "-o",
            format!("refusing to use '{}' as output directory", dir.display()),
        ));
    }
    if dir.exists() {
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
