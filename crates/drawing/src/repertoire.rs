//! Histograms of the simulated repertoire

use std::path::{Path, PathBuf};

use contracts::{names, PipelineError, RepertoireArtifacts};
use tracing::info;

use crate::{relative_positions, HistogramRenderer, HistogramSpec, StatsTable};

/// Draw the four repertoire histograms into `output_dir`
///
/// Returns the image paths in drawing order. Every image must exist once
/// its renderer returns.
pub fn visualize_repertoire_stats<R>(
    artifacts: &RepertoireArtifacts,
    output_dir: &Path,
    renderer: &R,
) -> Result<Vec<PathBuf>, PipelineError>
where
    R: HistogramRenderer + ?Sized,
{
    info!("Drawing statistics of the simulated repertoire");

    let base = StatsTable::read(&artifacts.base_stats)?;
    let final_repertoire = StatsTable::read(&artifacts.final_stats)?;
    let mutations = StatsTable::read(&artifacts.mutation_positions_stats)?;

    let jobs = [
        (
            base.column(2)?,
            HistogramSpec::new(
                "Sequence length",
                "Sequence number",
                output_dir.join(names::BASE_LENGTHS_PNG),
            ),
        ),
        (
            base.column(3)?,
            HistogramSpec::new(
                "Sequence frequency",
                "Sequence number",
                output_dir.join(names::BASE_FREQUENCIES_PNG),
            ),
        ),
        (
            final_repertoire.column(2)?,
            HistogramSpec::new(
                "Sequence frequency",
                "Sequence number",
                output_dir.join(names::MUTATED_FREQUENCIES_PNG),
            ),
        ),
        (
            relative_positions(&mutations)?,
            HistogramSpec::new(
                "Relative mutation position",
                "Mutation number",
                output_dir.join(names::MUTATION_POSITIONS_PNG),
            ),
        ),
    ];

    let mut written = Vec::with_capacity(jobs.len());
    for (values, spec) in jobs {
        renderer.render(&values, &spec)?;
        if !spec.output.is_file() {
            return Err(PipelineError::visualization(format!(
                "histogram was not written to {}",
                spec.output.display()
            )));
        }
        info!("* Histogram was written to {}", spec.output.display());
        written.push(spec.output);
    }
    Ok(written)
}
