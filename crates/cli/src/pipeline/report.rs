//! Result reporter.

use std::fmt::Write;

use contracts::PipelineOutput;
use observability::StageTimings;
use tracing::info;

/// Log where the user-facing artifacts were written
pub fn log_main_files(output: &PipelineOutput) {
    info!("Main output files:");
    for (description, path) in output.main_files() {
        info!("  * {} can be found at {}", description, path.display());
    }
    for path in &output.histograms {
        info!("  * Histogram: {}", path.display());
    }
}

/// Console summary of a finished run
pub fn render_summary(output: &PipelineOutput, timings: &StageTimings) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "\n=== IgSimulator Summary ===\n");
    let _ = writeln!(s, "Output files:");
    for (description, path) in output.main_files() {
        let _ = writeln!(s, "  {:<38} {}", description, path.display());
    }

    let _ = writeln!(s, "\nStage timings:");
    for (stage, elapsed) in timings.iter() {
        let _ = writeln!(s, "  {:<38} {:.2}s", stage.title(), elapsed.as_secs_f64());
    }
    let _ = writeln!(s, "  {:<38} {:.2}s", "Total", timings.total().as_secs_f64());
    s
}
