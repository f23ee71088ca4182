//! Weighted construction lists
//!
//! A weight of 1 means "build as soon as it can be paid for, trading if
//! needed". A larger weight `w` means "build only once the kingdom holds `w`
//! times the cost", which pushes the building behind everything the kingdom
//! can afford sooner.

use serde::{Deserialize, Serialize};

use crate::core::types::Race;
use crate::realm::Building;
use crate::realm::Building::*;

/// One entry of a build list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOrder {
    pub building: Building,
    pub weight: u32,
}

impl BuildOrder {
    pub const fn new(building: Building, weight: u32) -> Self {
        Self { building, weight }
    }
}

const fn order(building: Building, weight: u32) -> BuildOrder {
    BuildOrder::new(building, weight)
}

pub const DEFENSIVE: &[BuildOrder] = &[
    order(LeftTurret, 1),
    order(RightTurret, 1),
    order(Moat, 1),
    order(Captain, 1),
];

pub const SUPPORTING_DEFENSIVE: &[BuildOrder] =
    &[order(MageGuild1, 1), order(Spec, 2), order(Tavern, 1)];

pub const MAGE_GUILD_UPGRADES: &[BuildOrder] = &[
    order(MageGuild2, 2),
    order(MageGuild3, 2),
    order(MageGuild4, 1),
    order(MageGuild5, 1),
];

const INCOME: &[BuildOrder] = &[order(Castle, 1), order(Statue, 1), order(Marketplace, 1)];

const WARLOCK_INCOME: &[BuildOrder] = &[
    order(Castle, 1),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Spec, 1),
];

const GENERIC: &[BuildOrder] = &[
    order(Castle, 2),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Upgrade7, 1),
    order(Upgrade6, 1),
    order(Dwelling6, 1),
    order(Upgrade5, 1),
    order(Dwelling5, 1),
    order(Upgrade4, 1),
    order(Dwelling4, 1),
    order(Upgrade3, 2),
    order(Dwelling3, 2),
    order(Upgrade2, 3),
    order(Dwelling2, 3),
    order(Dwelling1, 4),
    order(MageGuild1, 2),
    order(Wel2, 10),
    order(Tavern, 5),
    order(ThievesGuild, 10),
    order(MageGuild2, 3),
    order(MageGuild3, 4),
    order(MageGuild4, 5),
    order(MageGuild5, 5),
    order(Shipyard, 4),
];

const BARBARIAN: &[BuildOrder] = &[
    order(Castle, 2),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Dwelling6, 1),
    order(Upgrade5, 1),
    order(Dwelling5, 1),
    order(Upgrade4, 1),
    order(Dwelling4, 1),
    order(Dwelling3, 1),
    order(Upgrade2, 2),
    order(Dwelling2, 2),
    order(Dwelling1, 4),
    order(MageGuild1, 3),
    order(Wel2, 10),
    order(Tavern, 5),
    order(ThievesGuild, 10),
    order(MageGuild2, 4),
    order(MageGuild3, 5),
    order(MageGuild4, 6),
    order(MageGuild5, 7),
    order(Shipyard, 4),
];

const SORCERESS: &[BuildOrder] = &[
    order(Castle, 2),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Dwelling6, 1),
    order(Dwelling5, 1),
    order(Dwelling4, 1),
    order(MageGuild1, 1),
    order(Dwelling3, 1),
    order(Upgrade4, 1),
    order(Upgrade3, 2),
    order(Upgrade2, 5),
    order(Dwelling2, 2),
    order(Tavern, 2),
    order(Dwelling1, 4),
    order(Wel2, 10),
    order(ThievesGuild, 10),
    order(MageGuild2, 3),
    order(MageGuild3, 4),
    order(MageGuild4, 5),
    order(MageGuild5, 5),
    order(Shipyard, 4),
];

// Dwelling 5 is optional on the way to 6; Well, Tavern and the archery
// upgrade come first
const KNIGHT: &[BuildOrder] = &[
    order(Castle, 2),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Upgrade6, 2),
    order(Dwelling6, 1),
    order(Upgrade5, 2),
    order(Dwelling5, 2),
    order(Upgrade4, 2),
    order(Dwelling4, 1),
    order(Upgrade3, 2),
    order(Dwelling3, 1),
    order(Upgrade2, 1),
    order(Dwelling2, 3),
    order(Dwelling1, 4),
    order(Well, 1),
    order(Tavern, 1),
    order(MageGuild1, 2),
    order(MageGuild2, 3),
    order(MageGuild3, 5),
    order(MageGuild4, 5),
    order(MageGuild5, 5),
    order(Spec, 5),
    order(ThievesGuild, 10),
    order(Wel2, 20),
    order(Shipyard, 4),
];

const NECROMANCER: &[BuildOrder] = &[
    order(Castle, 2),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Upgrade6, 1),
    order(Dwelling6, 1),
    order(Upgrade5, 2),
    order(Dwelling5, 1),
    order(MageGuild1, 1),
    order(Upgrade4, 2),
    order(Dwelling4, 1),
    order(Upgrade3, 3),
    order(Dwelling3, 3),
    order(Upgrade2, 4),
    order(Dwelling2, 2),
    order(Dwelling1, 3),
    order(MageGuild2, 2),
    order(ThievesGuild, 2),
    order(Wel2, 8),
    order(MageGuild3, 4),
    order(MageGuild4, 5),
    order(MageGuild5, 5),
    order(Shrine, 10),
    order(Shipyard, 4),
];

const WIZARD: &[BuildOrder] = &[
    order(Castle, 2),
    order(Statue, 1),
    order(Marketplace, 1),
    order(Upgrade6, 1),
    order(Dwelling6, 1),
    order(Upgrade5, 1),
    order(Dwelling5, 1),
    order(Dwelling4, 1),
    order(Dwelling3, 1),
    order(Dwelling2, 1),
    order(Dwelling1, 1),
    order(MageGuild1, 1),
    order(Upgrade3, 4),
    order(Spec, 2),
    order(Wel2, 8),
    order(MageGuild2, 3),
    order(MageGuild3, 4),
    order(MageGuild4, 4),
    order(MageGuild5, 4),
    order(Tavern, 10),
    order(ThievesGuild, 10),
    order(Shipyard, 4),
];

/// Buildings that raise daily income
pub fn income_structures(race: Race) -> &'static [BuildOrder] {
    match race {
        Race::Warlock => WARLOCK_INCOME,
        _ => INCOME,
    }
}

/// Main development list of a race
pub fn race_build_order(race: Race) -> &'static [BuildOrder] {
    match race {
        Race::Knight => KNIGHT,
        Race::Barbarian => BARBARIAN,
        Race::Sorceress => SORCERESS,
        Race::Necromancer => NECROMANCER,
        Race::Wizard => WIZARD,
        Race::Warlock | Race::Neutral => GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warlock_income_adds_spec() {
        assert_eq!(income_structures(Race::Warlock).len(), 4);
        assert_eq!(income_structures(Race::Knight).len(), 3);
        assert!(income_structures(Race::Warlock)
            .iter()
            .any(|o| o.building == Spec));
    }

    #[test]
    fn test_race_lists_cover_every_dwelling() {
        for race in Race::PLAYABLE {
            for dwelling in Building::DWELLINGS {
                assert!(
                    race_build_order(race).iter().any(|o| o.building == dwelling),
                    "{} list misses {}",
                    race,
                    dwelling
                );
            }
        }
    }

    #[test]
    fn test_weights_are_positive() {
        for list in [DEFENSIVE, SUPPORTING_DEFENSIVE, MAGE_GUILD_UPGRADES] {
            assert!(list.iter().all(|o| o.weight >= 1));
        }
        for race in Race::PLAYABLE {
            assert!(race_build_order(race).iter().all(|o| o.weight >= 1));
        }
    }

    #[test]
    fn test_every_race_list_starts_with_castle() {
        for race in Race::PLAYABLE {
            assert_eq!(race_build_order(race)[0], BuildOrder::new(Castle, 2));
        }
    }
}
