//! Castle AI strategies selectable from configuration

use serde::{Deserialize, Serialize};

/// Which castle routine a computer kingdom runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    /// Weighted build orders with marketplace trading and garrison management
    #[default]
    Normal,
    /// Fixed build sequence with randomized patience and no trading
    Simple,
    /// Never builds nor recruits
    Passive,
}

impl Personality {
    pub fn name(&self) -> &'static str {
        match self {
            Personality::Normal => "normal",
            Personality::Simple => "simple",
            Personality::Passive => "passive",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Some(Personality::Normal),
            "simple" => Some(Personality::Simple),
            "passive" | "empty" => Some(Personality::Passive),
            _ => None,
        }
    }

    pub fn is_passive(&self) -> bool {
        matches!(self, Personality::Passive)
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
