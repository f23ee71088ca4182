use thiserror::Error;

use crate::core::types::TownId;

/// Failures of slot-level army operations
///
/// `Infeasible` is an ordinary outcome callers are expected to branch on.
/// `InvariantViolated` and `SlotOutOfRange` mean a caller broke the
/// container contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArmyError {
    #[error("Slot {index} out of range for a {capacity}-slot container")]
    SlotOutOfRange { index: usize, capacity: usize },

    #[error("No free or matching slot for {0}")]
    NoRoom(String),

    #[error("Infeasible: {0}")]
    Infeasible(String),

    #[error("Invariant violated: {0}")]
    InvariantViolated(String),

    #[error("Corrupt army record: {0}")]
    CorruptRecord(String),
}

#[derive(Error, Debug)]
pub enum StewardError {
    #[error("Army error: {0}")]
    Army(#[from] ArmyError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Settlement not found: {0:?}")]
    SettlementNotFound(TownId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, StewardError>;
