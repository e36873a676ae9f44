//! # Config Loader
//!
//! Configuration resolution for IgSimulator runs.
//!
//! Responsibilities:
//! - Load the toolchain file (TOML/JSON) naming the external binaries and
//!   the default germline databases
//! - Apply defaults and the `--test` preset to raw run options
//! - Validate run options
//! - Resolve germline databases and prepare the output directory
//!
//! # Example
//!
//! ```no_run
//! use config_loader::{resolve, ConfigLoader, RunOptions};
//! use std::path::Path;
//!
//! let toolchain = ConfigLoader::load_from_path(Path::new("tools.toml"))
//!     .unwrap()
//!     .rooted_at(Path::new("/opt/ig_simulator"));
//! let options = RunOptions { test: true, ..Default::default() };
//! let settings = resolve(options, &toolchain).unwrap();
//! println!("Output: {}", settings.output_dir.display());
//! ```

mod options;
mod parser;
mod resolver;
mod toolchain;
mod validator;

pub use options::{RunOptions, TEST_OUTPUT_DIR};
pub use parser::ConfigFormat;
pub use resolver::{prepare_output_dir, resolve, resolve_gene_databases};
pub use toolchain::{GermlineDefaults, ToolchainConfig};
pub use validator::validate;

use contracts::PipelineError;
use std::path::Path;

/// Toolchain file loader
///
/// Provides static methods to load the toolchain from files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load toolchain configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    pub fn load_from_path(path: &Path) -> Result<ToolchainConfig, PipelineError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load toolchain configuration from string
    pub fn load_from_str(
        content: &str,
        format: ConfigFormat,
    ) -> Result<ToolchainConfig, PipelineError> {
        parser::parse(content, format)
    }

    /// Serialize to TOML string
    pub fn to_toml(config: &ToolchainConfig) -> Result<String, PipelineError> {
        toml::to_string_pretty(config)
            .map_err(|e| PipelineError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize to JSON string
    pub fn to_json(config: &ToolchainConfig) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| PipelineError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, PipelineError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            PipelineError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            PipelineError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, PipelineError> {
        if !path.is_file() {
            return Err(PipelineError::missing_input("Toolchain file", path));
        }
        Ok(std::fs::read_to_string(path)?)
    }
}
