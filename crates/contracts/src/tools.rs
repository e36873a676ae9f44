//! ToolPaths - locations of the external executables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Technology;

/// Paths of the external tools driven by the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolPaths {
    pub repertoire_simulator: PathBuf,
    pub art_illumina: PathBuf,
    pub art_454: PathBuf,
    pub paired_read_merger: PathBuf,
    pub ideal_repertoire_constructor: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        let bin = Path::new("build/release/bin");
        Self {
            repertoire_simulator: bin.join("simulate_repertoire"),
            art_illumina: bin.join("art_illumina"),
            art_454: bin.join("art_454"),
            paired_read_merger: bin.join("paired_read_merger"),
            ideal_repertoire_constructor: bin.join("create_ideal_repertoire"),
        }
    }
}

impl ToolPaths {
    /// ART binary matching the sequencing technology
    pub fn read_simulator(&self, technology: Technology) -> &Path {
        match technology {
            Technology::Illumina => &self.art_illumina,
            Technology::Roche454 => &self.art_454,
        }
    }

    /// Binaries a run with `technology` needs, labelled for error messages
    pub fn required(&self, technology: Technology) -> Vec<(&'static str, &Path)> {
        vec![
            ("Repertoire Simulator tool", self.repertoire_simulator.as_path()),
            (
                match technology {
                    Technology::Illumina => "ART Illumina read simulator",
                    Technology::Roche454 => "ART 454 read simulator",
                },
                self.read_simulator(technology),
            ),
            ("Paired Read Merger tool", self.paired_read_merger.as_path()),
            (
                "Ideal Repertoire Constructor tool",
                self.ideal_repertoire_constructor.as_path(),
            ),
        ]
    }

    /// Resolve relative paths against the installation root
    pub fn rooted_at(&self, home: &Path) -> Self {
        let root = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                home.join(p)
            }
        };
        Self {
            repertoire_simulator: root(&self.repertoire_simulator),
            art_illumina: root(&self.art_illumina),
            art_454: root(&self.art_454),
            paired_read_merger: root(&self.paired_read_merger),
            ideal_repertoire_constructor: root(&self.ideal_repertoire_constructor),
        }
    }
}
