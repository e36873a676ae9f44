//! # Observability
//!
//! Logging and metrics for IgSimulator.
//!
//! ## Features
//!
//! - Tracing initialisation with two sinks: console and the per-run log file
//! - `RunLog`, the injectable log file handle shared with the stage runner
//! - Stage metrics via the `metrics` facade and an in-memory timing aggregator
//!
//! ## Usage
//!
//! ```ignore
//! let run_log = observability::RunLog::detached();
//! observability::init_logging(&LoggingConfig::default(), run_log.clone())?;
//! // ... once the output directory exists
//! run_log.open(&settings.log_path())?;
//! ```

pub mod metrics;
mod run_log;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub use crate::metrics::{
    record_stage_run, RunningStats, StageOutcome, StageTimings, StatsSummary,
};
pub use run_log::{RunLog, RunLogWriter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Console format
    pub log_format: LogFormat,
    /// Default level when `RUST_LOG` is not set
    pub default_log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Compact,
            default_log_level: "info".to_string(),
        }
    }
}

/// Console log format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable multi-line format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

/// Install the global subscriber: console layer plus `run_log` file layer
///
/// `RUST_LOG` overrides `default_log_level` when set.
pub fn init_logging(config: &LoggingConfig, run_log: RunLog) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_level));

    let console_layer = match config.log_format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Pretty => fmt::layer().pretty().boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(false).boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer(run_log))
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::debug!(log_format = ?config.log_format, "Logging initialized");
    Ok(())
}

/// Plain-text layer writing events to `run_log`
pub fn file_layer<S>(run_log: RunLog) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(run_log)
        .boxed()
}
