//! Toolchain description: where the external tools and the bundled
//! germline databases live.

use contracts::{PipelineError, Technology, ToolPaths};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Toolchain file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// External executables
    pub tools: ToolPaths,

    /// Germline databases used when a run does not name its own
    pub germline: GermlineDefaults,
}

/// Default germline gene databases (IMGT)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GermlineDefaults {
    pub v_genes: PathBuf,
    pub d_genes: PathBuf,
    pub j_genes: PathBuf,
}

impl Default for GermlineDefaults {
    fn default() -> Self {
        let dir = Path::new("src/ig_tools/human_ig_germline_genes");
        Self {
            v_genes: dir.join("human_IGHV.fa"),
            d_genes: dir.join("human_IGHD.fa"),
            j_genes: dir.join("human_IGHJ.fa"),
        }
    }
}

impl ToolchainConfig {
    /// Resolve every relative path against the installation root
    pub fn rooted_at(&self, home: &Path) -> Self {
        let root = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                home.join(p)
            }
        };
        Self {
            tools: self.tools.rooted_at(home),
            germline: GermlineDefaults {
                v_genes: root(&self.germline.v_genes),
                d_genes: root(&self.germline.d_genes),
                j_genes: root(&self.germline.j_genes),
            },
        }
    }

    /// Check that every binary a run needs is present
    ///
    /// # Errors
    /// `MissingBinary` for the first absent tool.
    pub fn check_binaries(&self, technology: Technology) -> Result<(), PipelineError> {
        for (tool, path) in self.tools.required(technology) {
            if !path.is_file() {
                return Err(PipelineError::missing_binary(tool, path));
            }
        }
        Ok(())
    }
}
