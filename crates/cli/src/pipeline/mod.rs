//! Pipeline orchestration and result reporting.

mod orchestrator;
mod report;

pub use orchestrator::{Pipeline, PipelineReport};
pub use report::{log_main_files, render_summary};
