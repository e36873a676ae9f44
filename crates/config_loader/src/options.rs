//! RunOptions - raw option values as given on the command line

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output directory used by the `--test` preset
pub const TEST_OUTPUT_DIR: &str = "ig_simulator_test";

/// Unresolved run options
///
/// Every field is optional; defaults, the test preset and validation are
/// applied by [`crate::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    pub output_dir: Option<PathBuf>,
    pub num_bases: Option<u64>,
    pub num_mutated: Option<u64>,
    pub repertoire_size: Option<u64>,
    pub chain_type: Option<String>,
    pub v_genes: Option<PathBuf>,
    pub d_genes: Option<PathBuf>,
    pub j_genes: Option<PathBuf>,
    pub technology: Option<String>,
    pub min_overlap: Option<u32>,
    pub max_mismatch: Option<f64>,
    /// Load the canned small configuration
    pub test: bool,
    pub skip_drawing: bool,
}

impl RunOptions {
    /// Fill unset values from the small test dataset preset
    ///
    /// Explicitly given values always win over the preset.
    pub fn with_test_preset(mut self) -> Self {
        if !self.test {
            return self;
        }
        self.chain_type.get_or_insert_with(|| "HC".to_string());
        self.num_bases.get_or_insert(10);
        self.num_mutated.get_or_insert(50);
        self.repertoire_size.get_or_insert(1000);
        self.output_dir
            .get_or_insert_with(|| PathBuf::from(TEST_OUTPUT_DIR));
        self
    }
}
