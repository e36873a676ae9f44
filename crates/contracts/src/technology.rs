//! Technology - NGS platform used for read simulation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PipelineError;

/// Sequencing technology emulated by the read simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Technology {
    /// Illumina paired-end reads (ART Illumina)
    #[default]
    Illumina,
    /// Roche 454 paired-end reads (ART 454)
    Roche454,
}

impl Technology {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Illumina => "Illumina",
            Self::Roche454 => "454",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Technology {
    type Err = PipelineError;

    /// Identifiers are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "illumina" => Ok(Self::Illumina),
            "454" => Ok(Self::Roche454),
            _ => Err(PipelineError::config_validation(
                "--tech",
                format!(
                    "option value '{s}' was not recognized, technology for NGS read simulation should be \"illumina\" or \"454\""
                ),
            )),
        }
    }
}

impl TryFrom<String> for Technology {
    type Error = PipelineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Technology> for String {
    fn from(value: Technology) -> Self {
        value.as_str().to_string()
    }
}
