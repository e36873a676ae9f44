//! # IgSimulator CLI
//!
//! Command-line front end of the IgSimulator pipeline.
//!
//! Provides:
//! - argument parsing and run option resolution
//! - the stage orchestrator and result reporter
//! - the top-level run loop with interrupt and panic handling

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;

pub use app::run;
pub use cli::Cli;
pub use error::{CliError, Result};
pub use pipeline::{Pipeline, PipelineReport};
