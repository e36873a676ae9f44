//! ChainType - immunoglobulin chain selector
//!
//! Decides which germline segment databases a run needs (V/D/J vs V/J).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PipelineError;

/// Immunoglobulin chain type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainType {
    /// Heavy chain (V, D and J segments)
    #[serde(rename = "HC")]
    Heavy,
    /// Light chain (V and J segments)
    #[serde(rename = "LC")]
    Light,
}

impl ChainType {
    /// Command-line token understood by the repertoire simulator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heavy => "HC",
            Self::Light => "LC",
        }
    }

    /// Whether the chain is assembled with a D segment
    pub fn uses_d_segment(&self) -> bool {
        matches!(self, Self::Heavy)
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = PipelineError;

    /// Only the exact tokens `HC` and `LC` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HC" => Ok(Self::Heavy),
            "LC" => Ok(Self::Light),
            other => Err(PipelineError::config_validation(
                "--chain-type",
                format!("incorrect type of chain '{other}', should be equal HC or LC"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_tokens() {
        assert_eq!("HC".parse::<ChainType>().unwrap(), ChainType::Heavy);
        assert_eq!("LC".parse::<ChainType>().unwrap(), ChainType::Light);
    }

    #[test]
    fn test_parse_rejects_other_spellings() {
        for token in ["hc", "lc", "heavy", "", "H C"] {
            let err = token.parse::<ChainType>().unwrap_err();
            assert!(err.to_string().contains("HC or LC"), "got: {err}");
        }
    }

    #[test]
    fn test_d_segment() {
        assert!(ChainType::Heavy.uses_d_segment());
        assert!(!ChainType::Light.uses_d_segment());
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&ChainType::Light).unwrap();
        assert_eq!(json, "\"LC\"");
    }
}
