//! Layered error definitions
//!
//! Categorized by source: configuration / environment / stage / postcondition

use std::path::PathBuf;
use thiserror::Error;

use crate::StageId;

/// Unified error type
#[derive(Debug, Error)]
pub enum PipelineError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Environment Errors =====
    /// Required tool binary is absent
    #[error("{tool} was not found at {}", path.display())]
    MissingBinary { tool: String, path: PathBuf },

    /// Required input file is absent
    #[error("{what} was not found at {}", path.display())]
    MissingInput { what: String, path: PathBuf },

    // ===== Stage Errors =====
    /// External tool could not be started
    #[error("stage '{stage}': failed to launch {}: {source}", program.display())]
    Launch {
        stage: StageId,
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// External tool finished with a non-zero status
    #[error("stage '{stage}': {tool} finished abnormally ({status})")]
    StageFailed {
        stage: StageId,
        tool: String,
        /// Exit code, `None` when the tool was killed by a signal
        code: Option<i32>,
        status: String,
    },

    // ===== Postcondition Errors =====
    /// Tool reported success but an expected file is absent
    #[error("stage '{stage}': {what} was not found at {}", path.display())]
    MissingArtifact {
        stage: StageId,
        what: String,
        path: PathBuf,
    },

    /// Histogram could not be produced
    #[error("visualization error: {message}")]
    Visualization { message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Coarse error classes used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Configuration,
    Environment,
    Stage,
    Postcondition,
    Internal,
}

impl PipelineError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_binary(tool: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingBinary {
            tool: tool.into(),
            path: path.into(),
        }
    }

    pub fn missing_input(what: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::MissingInput {
            what: what.into(),
            path: path.into(),
        }
    }

    pub fn missing_artifact(
        stage: StageId,
        what: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self::MissingArtifact {
            stage,
            what: what.into(),
            path: path.into(),
        }
    }

    pub fn visualization(message: impl Into<String>) -> Self {
        Self::Visualization {
            message: message.into(),
        }
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            Self::ConfigParse { .. } | Self::ConfigValidation { .. } => ErrorClass::Configuration,
            Self::MissingBinary { .. } | Self::MissingInput { .. } => ErrorClass::Environment,
            Self::Launch { .. } | Self::StageFailed { .. } => ErrorClass::Stage,
            Self::MissingArtifact { .. } | Self::Visualization { .. } => ErrorClass::Postcondition,
            Self::Io(_) | Self::Other(_) => ErrorClass::Internal,
        }
    }

    /// A tool that died from a signal rather than exiting
    pub fn killed_by_signal(&self) -> bool {
        matches!(self, Self::StageFailed { code: None, .. })
    }

    /// Stage the error originated from, when it came from one
    pub fn stage(&self) -> Option<StageId> {
        match self {
            Self::Launch { stage, .. }
            | Self::StageFailed { stage, .. }
            | Self::MissingArtifact { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(
            PipelineError::config_validation("--num-bases", "x").class(),
            ErrorClass::Configuration
        );
        assert_eq!(
            PipelineError::missing_binary("ART", "/bin/art").class(),
            ErrorClass::Environment
        );
        let failed = PipelineError::StageFailed {
            stage: StageId::ReadMerging,
            tool: "paired_read_merger".into(),
            code: Some(3),
            status: "exit status: 3".into(),
        };
        assert_eq!(failed.class(), ErrorClass::Stage);
        assert_eq!(failed.stage(), Some(StageId::ReadMerging));
        assert!(!failed.killed_by_signal());
        let missing =
            PipelineError::missing_artifact(StageId::RepertoireSimulation, "Simulated repertoire", "r.fa");
        assert_eq!(missing.class(), ErrorClass::Postcondition);
    }

    #[test]
    fn test_killed_by_signal() {
        let killed = PipelineError::StageFailed {
            stage: StageId::ReadSimulation,
            tool: "ART".into(),
            code: None,
            status: "signal: 2 (SIGINT)".into(),
        };
        assert!(killed.killed_by_signal());
        assert!(!PipelineError::visualization("x").killed_by_signal());
    }

    #[test]
    fn test_messages_name_paths() {
        let err = PipelineError::missing_artifact(
            StageId::RepertoireSimulation,
            "Simulated repertoire",
            "/out/repertoire.fasta",
        );
        let msg = err.to_string();
        assert!(msg.contains("repertoire_simulation"), "got: {msg}");
        assert!(msg.contains("/out/repertoire.fasta"), "got: {msg}");
    }
}
