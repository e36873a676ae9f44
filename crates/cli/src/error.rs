//! Error types for CLI operations.

use contracts::PipelineError;
use thiserror::Error;

/// Exit code of a successful or interrupted run
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code of every failed run
pub const EXIT_FAILURE: u8 = 1;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Unknown or malformed command-line option
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// Configuration, environment, stage or postcondition failure
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// Run stopped by SIGINT or SIGTERM
    #[error("IgSimulator was interrupted")]
    Interrupted,

    /// Unexpected failure, e.g. a panic in the pipeline task
    #[error("internal error: {message}")]
    Internal { message: String },

    /// Generic error wrapper
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Interrupted => EXIT_SUCCESS,
            Self::Usage(e) if !e.use_stderr() => EXIT_SUCCESS,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
