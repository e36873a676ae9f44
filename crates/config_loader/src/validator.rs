//! Run option validation
//!
//! Rules (all fatal):
//! - output directory is given
//! - chain type is exactly HC or LC
//! - base / mutated / repertoire counts are given and nonzero
//! - num_bases < num_mutated < repertoire_size
//! - repertoire_size leaves room for two reads per sequence
//! - max_mismatch lies in [0, 1]
//! - technology is illumina or 454

use contracts::{ChainType, PipelineError, Technology, MAX_REPERTOIRE_SIZE};

use crate::RunOptions;

/// Validate run options
///
/// Returns the first error encountered, or Ok(()).
pub fn validate(options: &RunOptions) -> Result<(), PipelineError> {
    validate_output_dir(options)?;
    validate_chain_type(options)?;
    validate_counts(options)?;
    validate_count_order(options)?;
    validate_repertoire_size(options)?;
    validate_mismatch(options)?;
    validate_technology(options)?;
    Ok(())
}

fn validate_output_dir(options: &RunOptions) -> Result<(), PipelineError> {
    match options.output_dir {
        Some(ref dir) if !dir.as_os_str().is_empty() => Ok(()),
        _ => Err(PipelineError::config_validation(
            "-o",
            "output directory is a mandatory parameter",
        )),
    }
}

fn validate_chain_type(options: &RunOptions) -> Result<(), PipelineError> {
    options
        .chain_type
        .as_deref()
        .unwrap_or_default()
        .parse::<ChainType>()
        .map(|_| ())
}

/// Each count must be present and nonzero
fn validate_counts(options: &RunOptions) -> Result<(), PipelineError> {
    let counts = [
        ("--num-bases", "number of base sequences", options.num_bases),
        ("--num-mutated", "number of mutated sequences", options.num_mutated),
        ("--repertoire-size", "expected repertoire size", options.repertoire_size),
    ];
    for (field, name, value) in counts {
        if value.unwrap_or(0) == 0 {
            return Err(PipelineError::config_validation(
                field,
                format!("{name} is a mandatory parameter and must be greater than 0"),
            ));
        }
    }
    Ok(())
}

fn validate_count_order(options: &RunOptions) -> Result<(), PipelineError> {
    let bases = options.num_bases.unwrap_or(0);
    let mutated = options.num_mutated.unwrap_or(0);
    let size = options.repertoire_size.unwrap_or(0);

    if bases >= mutated {
        return Err(PipelineError::config_validation(
            "--num-mutated",
            format!(
                "number of mutated sequences ({mutated}) should be greater than number of base sequences ({bases})"
            ),
        ));
    }
    if mutated >= size {
        return Err(PipelineError::config_validation(
            "--repertoire-size",
            format!(
                "repertoire size ({size}) should be greater than number of mutated sequences ({mutated})"
            ),
        ));
    }
    Ok(())
}

fn validate_repertoire_size(options: &RunOptions) -> Result<(), PipelineError> {
    match options.repertoire_size {
        Some(size) if size > MAX_REPERTOIRE_SIZE => Err(PipelineError::config_validation(
            "--repertoire-size",
            format!("repertoire size ({size}) should not exceed {MAX_REPERTOIRE_SIZE}"),
        )),
        _ => Ok(()),
    }
}

fn validate_mismatch(options: &RunOptions) -> Result<(), PipelineError> {
    if let Some(rate) = options.max_mismatch {
        if !(0.0..=1.0).contains(&rate) {
            return Err(PipelineError::config_validation(
                "--max-mismatch",
                format!("maximal allowed mismatch rate should be from [0, 1], got {rate}"),
            ));
        }
    }
    Ok(())
}

fn validate_technology(options: &RunOptions) -> Result<(), PipelineError> {
    match options.technology.as_deref() {
        Some(tech) => tech.parse::<Technology>().map(|_| ()),
        None => Ok(()),
    }
}
