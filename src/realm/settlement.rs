//! Collaborator interfaces consumed by the planner
//!
//! The planner never owns a kingdom or a settlement. It reads and mutates
//! them through these traits, which the in-memory [`Kingdom`] and [`Town`]
//! implement.
//!
//! [`Kingdom`]: super::kingdom::Kingdom
//! [`Town`]: super::town::Town

use serde::{Deserialize, Serialize};

use super::building::{building_cost, Building, BuildingSet};
use crate::army::{Army, HeroRole, Monster, Troop};
use crate::core::types::{Color, Race};
use crate::economy::Funds;

/// Whether a building can be bought right now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildStatus {
    AlreadyBuilt,
    /// The race or the location can never have this building
    Disabled,
    /// A building was already bought today
    NotToday,
    /// Towns must become castles before building anything else
    NeedCastle,
    RequiresBuild,
    LackResources,
    Allowed,
}

/// Map context of the region a settlement stands in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RegionStats {
    /// Number of map regions bordering this one
    pub neighbour_regions: usize,
    /// Threat estimate; positive means safe enough to invest in magic
    pub safety_factor: i32,
    /// Spell tier the kingdom wants its mage guilds to reach
    pub spell_level: u32,
}

/// Funds owner
pub trait Treasury {
    fn funds(&self) -> Funds;

    fn can_afford(&self, cost: &Funds) -> bool {
        self.funds().can_afford(cost)
    }

    /// Deduct `cost`; must succeed whenever `can_afford` returned true
    fn pay(&mut self, cost: &Funds) -> bool;

    /// Apply a marketplace delta: positive components are given up
    fn apply_trade(&mut self, delta: &Funds);

    /// Number of marketplaces owned
    fn market_capacity(&self) -> u32;

    fn hero_count(&self) -> usize;

    fn color(&self) -> Color;
}

/// A town or castle controlled by a kingdom
pub trait Settlement {
    fn name(&self) -> &str;

    fn race(&self) -> Race;

    fn buildings(&self) -> BuildingSet;

    fn is_built(&self, building: Building) -> bool {
        self.buildings().contains(building)
    }

    fn building_cost(&self, building: Building) -> Funds {
        building_cost(self.race(), building)
    }

    fn build_status(&self, building: Building, funds: &Funds) -> BuildStatus;

    /// Pay for and construct a building
    fn buy_building(&mut self, building: Building, treasury: &mut dyn Treasury) -> bool;

    fn is_castle(&self) -> bool {
        self.is_built(Building::Castle)
    }

    fn is_capital(&self) -> bool;

    fn mage_guild_level(&self) -> u32 {
        Building::MAGE_GUILDS
            .iter()
            .filter(|&&guild| self.is_built(guild))
            .count() as u32
    }

    fn region(&self) -> RegionStats;

    fn neighbour_regions(&self) -> usize {
        self.region().neighbour_regions
    }

    /// Shipyard present, sea nearby and no boat already waiting
    fn allow_buy_boat(&self) -> bool;

    fn buy_boat(&mut self, treasury: &mut dyn Treasury) -> bool;

    fn garrison(&self) -> &Army;

    fn guest_army(&self) -> Option<&Army>;

    /// Garrison and, if a hero is visiting, the hero's army
    fn armies_mut(&mut self) -> (&mut Army, Option<&mut Army>);

    fn guest_hero_role(&self) -> Option<HeroRole>;

    /// Creatures currently waiting in a dwelling
    fn dwelling_population(&self, dwelling: Building) -> u32;

    /// How many `monster` can be hired with `funds`
    fn recruit_limit(&self, monster: Monster, funds: &Funds) -> u32;

    /// Hire into the garrison, or into the guest army when the garrison is full
    fn recruit(&mut self, troop: Troop, treasury: &mut dyn Treasury) -> bool;
}
