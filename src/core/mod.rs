//! Core types, configuration and errors shared by every layer

pub mod config;
pub mod error;
pub mod types;

pub use config::{ArmyConfig, PlannerConfig, StewardConfig};
pub use error::{ArmyError, Result, StewardError};
pub use types::{Color, CommanderId, Day, LocationId, Race, TownId};
