//! Kingdoms, settlements and buildings
//!
//! The planner works against the [`Treasury`] and [`Settlement`] traits.
//! [`Kingdom`] and [`Town`] are the in-memory implementations used by the
//! simulation binary and the tests.

pub mod building;
pub mod kingdom;
pub mod settlement;
pub mod town;

pub use building::{
    building_cost, dwelling_monster, is_available, monster_dwelling, requirements, Building,
    BuildingSet, BOAT_COST,
};
pub use kingdom::{Coffers, Kingdom, KingdomSnapshot};
pub use settlement::{BuildStatus, RegionStats, Settlement, Treasury};
pub use town::{GuestHero, Town, TownSnapshot};
