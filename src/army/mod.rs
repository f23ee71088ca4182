//! Armies, troop containers and the creature catalogue

pub mod army;
pub mod commander;
pub mod monster;
pub mod troop;
pub mod troops;

pub use army::{Army, ArmyRecord, BattleSeed};
pub use commander::{Archery, Artifact, Commander, CommanderKind, HeroRole};
pub use monster::{Monster, MonsterStats, Speed};
pub use troop::Troop;
pub use troops::{even_split, MergeOutcome, Troops, ARMY_SLOTS};

pub use crate::core::error::ArmyError;
