//! Castle buildings, building sets and per-race construction tables

use serde::{Deserialize, Serialize};

use crate::army::Monster;
use crate::core::types::Race;
use crate::economy::Funds;

/// Price of a boat at a shipyard
pub const BOAT_COST: Funds = Funds::new(1000, 10, 0, 0, 0, 0, 0);

/// A castle building; discriminants are bit positions in [`BuildingSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum Building {
    ThievesGuild = 0x0000_0001,
    Tavern = 0x0000_0002,
    Shipyard = 0x0000_0004,
    Well = 0x0000_0008,
    Statue = 0x0000_0010,
    LeftTurret = 0x0000_0020,
    RightTurret = 0x0000_0040,
    Marketplace = 0x0000_0080,
    /// Race-specific growth bonus for level one creatures
    Wel2 = 0x0000_0100,
    Moat = 0x0000_0200,
    /// Race-specific special building
    Spec = 0x0000_0400,
    Castle = 0x0000_0800,
    Captain = 0x0000_1000,
    Shrine = 0x0000_2000,
    MageGuild1 = 0x0000_4000,
    MageGuild2 = 0x0000_8000,
    MageGuild3 = 0x0001_0000,
    MageGuild4 = 0x0002_0000,
    MageGuild5 = 0x0004_0000,
    Dwelling1 = 0x0010_0000,
    Dwelling2 = 0x0020_0000,
    Dwelling3 = 0x0040_0000,
    Dwelling4 = 0x0080_0000,
    Dwelling5 = 0x0100_0000,
    Dwelling6 = 0x0200_0000,
    Upgrade2 = 0x0400_0000,
    Upgrade3 = 0x0800_0000,
    Upgrade4 = 0x1000_0000,
    Upgrade5 = 0x2000_0000,
    Upgrade6 = 0x4000_0000,
    /// Second upgrade of the level six dwelling
    Upgrade7 = 0x8000_0000,
}

impl Building {
    pub const ALL: [Building; 31] = [
        Building::ThievesGuild,
        Building::Tavern,
        Building::Shipyard,
        Building::Well,
        Building::Statue,
        Building::LeftTurret,
        Building::RightTurret,
        Building::Marketplace,
        Building::Wel2,
        Building::Moat,
        Building::Spec,
        Building::Castle,
        Building::Captain,
        Building::Shrine,
        Building::MageGuild1,
        Building::MageGuild2,
        Building::MageGuild3,
        Building::MageGuild4,
        Building::MageGuild5,
        Building::Dwelling1,
        Building::Dwelling2,
        Building::Dwelling3,
        Building::Dwelling4,
        Building::Dwelling5,
        Building::Dwelling6,
        Building::Upgrade2,
        Building::Upgrade3,
        Building::Upgrade4,
        Building::Upgrade5,
        Building::Upgrade6,
        Building::Upgrade7,
    ];

    pub const MAGE_GUILDS: [Building; 5] = [
        Building::MageGuild1,
        Building::MageGuild2,
        Building::MageGuild3,
        Building::MageGuild4,
        Building::MageGuild5,
    ];

    /// Plain dwellings from level one to six
    pub const DWELLINGS: [Building; 6] = [
        Building::Dwelling1,
        Building::Dwelling2,
        Building::Dwelling3,
        Building::Dwelling4,
        Building::Dwelling5,
        Building::Dwelling6,
    ];

    pub fn bit(self) -> u32 {
        self as u32
    }

    /// Creature level of a dwelling or dwelling upgrade
    pub fn dwelling_level(self) -> Option<usize> {
        let level = match self {
            Building::Dwelling1 => 1,
            Building::Dwelling2 | Building::Upgrade2 => 2,
            Building::Dwelling3 | Building::Upgrade3 => 3,
            Building::Dwelling4 | Building::Upgrade4 => 4,
            Building::Dwelling5 | Building::Upgrade5 => 5,
            Building::Dwelling6 | Building::Upgrade6 | Building::Upgrade7 => 6,
            _ => return None,
        };
        Some(level)
    }

    pub fn is_dwelling(self) -> bool {
        self.dwelling_level().is_some()
    }

    pub fn is_dwelling_upgrade(self) -> bool {
        matches!(
            self,
            Building::Upgrade2
                | Building::Upgrade3
                | Building::Upgrade4
                | Building::Upgrade5
                | Building::Upgrade6
                | Building::Upgrade7
        )
    }

    /// Level of a mage guild building
    pub fn mage_guild_level(self) -> Option<u32> {
        Self::MAGE_GUILDS
            .iter()
            .position(|&b| b == self)
            .map(|index| index as u32 + 1)
    }

    /// The plain dwelling of a creature level
    pub fn dwelling(level: usize) -> Option<Building> {
        level.checked_sub(1).and_then(|i| Self::DWELLINGS.get(i).copied())
    }

    /// The first upgrade of a creature level's dwelling
    pub fn dwelling_upgrade(level: usize) -> Option<Building> {
        match level {
            2 => Some(Building::Upgrade2),
            3 => Some(Building::Upgrade3),
            4 => Some(Building::Upgrade4),
            5 => Some(Building::Upgrade5),
            6 => Some(Building::Upgrade6),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Building::ThievesGuild => "Thieves' Guild",
            Building::Tavern => "Tavern",
            Building::Shipyard => "Shipyard",
            Building::Well => "Well",
            Building::Statue => "Statue",
            Building::LeftTurret => "Left Turret",
            Building::RightTurret => "Right Turret",
            Building::Marketplace => "Marketplace",
            Building::Wel2 => "Growth Building",
            Building::Moat => "Moat",
            Building::Spec => "Special Building",
            Building::Castle => "Castle",
            Building::Captain => "Captain's Quarters",
            Building::Shrine => "Shrine",
            Building::MageGuild1 => "Mage Guild 1",
            Building::MageGuild2 => "Mage Guild 2",
            Building::MageGuild3 => "Mage Guild 3",
            Building::MageGuild4 => "Mage Guild 4",
            Building::MageGuild5 => "Mage Guild 5",
            Building::Dwelling1 => "Dwelling 1",
            Building::Dwelling2 => "Dwelling 2",
            Building::Dwelling3 => "Dwelling 3",
            Building::Dwelling4 => "Dwelling 4",
            Building::Dwelling5 => "Dwelling 5",
            Building::Dwelling6 => "Dwelling 6",
            Building::Upgrade2 => "Upgraded Dwelling 2",
            Building::Upgrade3 => "Upgraded Dwelling 3",
            Building::Upgrade4 => "Upgraded Dwelling 4",
            Building::Upgrade5 => "Upgraded Dwelling 5",
            Building::Upgrade6 => "Upgraded Dwelling 6",
            Building::Upgrade7 => "Second Upgraded Dwelling 6",
        }
    }
}

impl std::fmt::Display for Building {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of buildings stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BuildingSet(pub u32);

impl BuildingSet {
    pub fn of(buildings: &[Building]) -> Self {
        Self(buildings.iter().fold(0, |mask, b| mask | b.bit()))
    }

    pub fn contains(&self, building: Building) -> bool {
        self.0 & building.bit() != 0
    }

    pub fn insert(&mut self, building: Building) {
        self.0 |= building.bit();
    }

    pub fn remove(&mut self, building: Building) {
        self.0 &= !building.bit();
    }

    /// True if every building of `other` is in this set
    pub fn contains_all(&self, other: BuildingSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Building> + '_ {
        Building::ALL.into_iter().filter(move |b| self.contains(*b))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

/// True if `race` can ever build `building`
pub fn is_available(race: Race, building: Building) -> bool {
    if race == Race::Neutral {
        return false;
    }
    match building {
        Building::Shrine => race == Race::Necromancer,
        Building::Tavern => race != Race::Necromancer,
        Building::Upgrade7 => race == Race::Warlock,
        b if b.is_dwelling() => dwelling_monster(race, b).is_some(),
        _ => true,
    }
}

/// Buildings that must exist before `building` can be built
pub fn requirements(race: Race, building: Building) -> BuildingSet {
    use Building::*;
    use Race::*;

    let required: &[Building] = match (building, race) {
        (MageGuild2, _) => &[MageGuild1],
        (MageGuild3, _) => &[MageGuild2],
        (MageGuild4, _) => &[MageGuild3],
        (MageGuild5, _) => &[MageGuild4],

        (Spec, Wizard) => &[MageGuild1],

        (Dwelling2, Sorceress) => &[Dwelling1, Tavern],
        (Dwelling2, _) => &[Dwelling1],

        (Dwelling3, Knight) => &[Dwelling1, Well],
        (Dwelling3, _) => &[Dwelling1],

        (Dwelling4, Knight) => &[Dwelling1, Tavern],
        (Dwelling4, Barbarian) => &[Dwelling1],
        (Dwelling4, Sorceress) => &[Dwelling2, MageGuild1],
        (Dwelling4, Wizard) | (Dwelling4, Warlock) => &[Dwelling2],
        (Dwelling4, Necromancer) => &[Dwelling3, ThievesGuild],

        (Dwelling5, Knight) | (Dwelling5, Barbarian) => &[Dwelling2, Dwelling3, Dwelling4],
        (Dwelling5, Sorceress) => &[Dwelling4],
        (Dwelling5, Warlock) => &[Dwelling3],
        (Dwelling5, Wizard) => &[Dwelling3, MageGuild1],
        (Dwelling5, Necromancer) => &[Dwelling2, MageGuild1],

        (Dwelling6, Knight) => &[Dwelling2, Dwelling3, Dwelling4],
        (Dwelling6, Warlock) | (Dwelling6, Wizard) => &[Dwelling4, Dwelling5],
        (Dwelling6, _) => &[Dwelling5],

        (Upgrade2, Knight) | (Upgrade2, Barbarian) => &[Dwelling2, Dwelling3, Dwelling4],
        (Upgrade2, Sorceress) => &[Dwelling2, Well],
        (Upgrade2, _) => &[Dwelling2],

        (Upgrade3, Knight) => &[Dwelling2, Dwelling3, Dwelling4],
        (Upgrade3, Sorceress) => &[Dwelling3, Dwelling4],
        (Upgrade3, Wizard) => &[Dwelling3, Well],
        (Upgrade3, _) => &[Dwelling3],

        (Upgrade4, Knight) | (Upgrade4, Barbarian) => &[Dwelling2, Dwelling3, Dwelling4],
        (Upgrade4, _) => &[Dwelling4],

        (Upgrade5, Knight) => &[Dwelling2, Dwelling3, Dwelling4, Dwelling5],
        (Upgrade5, Wizard) => &[Spec, Dwelling5],
        (Upgrade5, Necromancer) => &[MageGuild2, Dwelling5],
        (Upgrade5, _) => &[Dwelling5],

        (Upgrade6, Knight) => &[Dwelling2, Dwelling3, Dwelling4, Dwelling6],
        (Upgrade6, _) => &[Dwelling6],

        (Upgrade7, _) => &[Upgrade6],

        _ => &[],
    };
    BuildingSet::of(required)
}

/// Creature recruited in a dwelling; `None` if the race has no such dwelling
pub fn dwelling_monster(race: Race, building: Building) -> Option<Monster> {
    use Building::*;
    use Monster::*;

    let monster = match (race, building) {
        (Race::Knight, Dwelling1) => Peasant,
        (Race::Knight, Dwelling2) => Archer,
        (Race::Knight, Upgrade2) => Ranger,
        (Race::Knight, Dwelling3) => Pikeman,
        (Race::Knight, Upgrade3) => VeteranPikeman,
        (Race::Knight, Dwelling4) => Swordsman,
        (Race::Knight, Upgrade4) => MasterSwordsman,
        (Race::Knight, Dwelling5) => Cavalry,
        (Race::Knight, Upgrade5) => Champion,
        (Race::Knight, Dwelling6) => Paladin,
        (Race::Knight, Upgrade6) => Crusader,

        (Race::Barbarian, Dwelling1) => Goblin,
        (Race::Barbarian, Dwelling2) => Orc,
        (Race::Barbarian, Upgrade2) => OrcChief,
        (Race::Barbarian, Dwelling3) => Wolf,
        (Race::Barbarian, Dwelling4) => Ogre,
        (Race::Barbarian, Upgrade4) => OgreLord,
        (Race::Barbarian, Dwelling5) => Troll,
        (Race::Barbarian, Upgrade5) => WarTroll,
        (Race::Barbarian, Dwelling6) => Cyclops,

        (Race::Sorceress, Dwelling1) => Sprite,
        (Race::Sorceress, Dwelling2) => Dwarf,
        (Race::Sorceress, Upgrade2) => BattleDwarf,
        (Race::Sorceress, Dwelling3) => Elf,
        (Race::Sorceress, Upgrade3) => GrandElf,
        (Race::Sorceress, Dwelling4) => Druid,
        (Race::Sorceress, Upgrade4) => GreaterDruid,
        (Race::Sorceress, Dwelling5) => Unicorn,
        (Race::Sorceress, Dwelling6) => Phoenix,

        (Race::Warlock, Dwelling1) => Centaur,
        (Race::Warlock, Dwelling2) => Gargoyle,
        (Race::Warlock, Dwelling3) => Griffin,
        (Race::Warlock, Dwelling4) => Minotaur,
        (Race::Warlock, Upgrade4) => MinotaurKing,
        (Race::Warlock, Dwelling5) => Hydra,
        (Race::Warlock, Dwelling6) => GreenDragon,
        (Race::Warlock, Upgrade6) => RedDragon,
        (Race::Warlock, Upgrade7) => BlackDragon,

        (Race::Wizard, Dwelling1) => Halfling,
        (Race::Wizard, Dwelling2) => Boar,
        (Race::Wizard, Dwelling3) => IronGolem,
        (Race::Wizard, Upgrade3) => SteelGolem,
        (Race::Wizard, Dwelling4) => Roc,
        (Race::Wizard, Dwelling5) => Mage,
        (Race::Wizard, Upgrade5) => Archmage,
        (Race::Wizard, Dwelling6) => Giant,
        (Race::Wizard, Upgrade6) => Titan,

        (Race::Necromancer, Dwelling1) => Skeleton,
        (Race::Necromancer, Dwelling2) => Zombie,
        (Race::Necromancer, Upgrade2) => MutantZombie,
        (Race::Necromancer, Dwelling3) => Mummy,
        (Race::Necromancer, Upgrade3) => RoyalMummy,
        (Race::Necromancer, Dwelling4) => Vampire,
        (Race::Necromancer, Upgrade4) => VampireLord,
        (Race::Necromancer, Dwelling5) => Lich,
        (Race::Necromancer, Upgrade5) => PowerLich,
        (Race::Necromancer, Dwelling6) => BoneDragon,

        _ => return None,
    };
    Some(monster)
}

/// Dwelling that recruits `monster`
pub fn monster_dwelling(monster: Monster) -> Option<Building> {
    let race = monster.race();
    Building::ALL
        .into_iter()
        .filter(|b| b.is_dwelling())
        .find(|&b| dwelling_monster(race, b) == Some(monster))
}

/// Construction cost of `building` for `race`
pub fn building_cost(race: Race, building: Building) -> Funds {
    use Building::*;

    let cost = |gold, wood, mercury, ore, sulfur, crystal, gems| {
        Funds::new(gold, wood, mercury, ore, sulfur, crystal, gems)
    };

    match building {
        ThievesGuild => cost(750, 5, 0, 0, 0, 0, 0),
        Tavern => cost(500, 5, 0, 0, 0, 0, 0),
        Shipyard => cost(2000, 20, 0, 0, 0, 0, 0),
        Well => cost(500, 0, 0, 0, 0, 0, 0),
        Statue => cost(1250, 0, 0, 5, 0, 0, 0),
        LeftTurret | RightTurret => cost(1500, 0, 0, 5, 0, 0, 0),
        Marketplace => cost(500, 5, 0, 0, 0, 0, 0),
        Wel2 => cost(1000, 0, 0, 0, 0, 0, 0),
        Moat => cost(750, 0, 0, 0, 0, 0, 0),
        Castle => cost(5000, 20, 0, 20, 0, 0, 0),
        Captain => cost(500, 0, 0, 0, 0, 0, 0),
        Shrine => cost(4000, 10, 0, 0, 0, 10, 0),
        MageGuild1 => cost(2000, 5, 0, 5, 0, 0, 0),
        MageGuild2 => cost(1000, 5, 4, 5, 4, 4, 4),
        MageGuild3 => cost(1000, 5, 6, 5, 6, 6, 6),
        MageGuild4 => cost(1000, 5, 8, 5, 8, 8, 8),
        MageGuild5 => cost(1000, 5, 10, 5, 10, 10, 10),
        Spec => match race {
            Race::Knight => cost(1500, 5, 0, 15, 0, 0, 0),
            Race::Barbarian => cost(2000, 10, 0, 10, 0, 0, 0),
            Race::Sorceress => cost(1500, 0, 0, 0, 0, 10, 0),
            Race::Warlock => cost(3000, 5, 0, 10, 0, 0, 0),
            Race::Wizard => cost(1500, 5, 5, 5, 5, 5, 5),
            Race::Necromancer => cost(1000, 0, 10, 0, 10, 0, 0),
            Race::Neutral => Funds::default(),
        },
        dwelling => dwelling_cost(race, dwelling),
    }
}

fn dwelling_cost(race: Race, building: Building) -> Funds {
    use Building::*;

    let (gold, wood, mercury, ore, sulfur, crystal, gems) = match (race, building) {
        (Race::Knight, Dwelling1) => (200, 0, 0, 0, 0, 0, 0),
        (Race::Knight, Dwelling2) => (1000, 0, 0, 0, 0, 0, 0),
        (Race::Knight, Upgrade2) => (1500, 5, 0, 0, 0, 0, 0),
        (Race::Knight, Dwelling3) => (1000, 0, 0, 5, 0, 0, 0),
        (Race::Knight, Upgrade3) => (1500, 0, 0, 5, 0, 0, 0),
        (Race::Knight, Dwelling4) => (2000, 10, 0, 10, 0, 0, 0),
        (Race::Knight, Upgrade4) => (2000, 5, 0, 5, 0, 0, 0),
        (Race::Knight, Dwelling5) => (3000, 20, 0, 0, 0, 0, 0),
        (Race::Knight, Upgrade5) => (3000, 10, 0, 0, 0, 0, 0),
        (Race::Knight, Dwelling6) => (5000, 20, 0, 0, 0, 20, 0),
        (Race::Knight, Upgrade6) => (5000, 10, 0, 0, 0, 10, 0),

        (Race::Barbarian, Dwelling1) => (300, 0, 0, 0, 0, 0, 0),
        (Race::Barbarian, Dwelling2) => (800, 5, 0, 0, 0, 0, 0),
        (Race::Barbarian, Upgrade2) => (1200, 5, 0, 0, 0, 0, 0),
        (Race::Barbarian, Dwelling3) => (1000, 0, 0, 0, 0, 0, 0),
        (Race::Barbarian, Dwelling4) => (2000, 10, 0, 10, 0, 0, 0),
        (Race::Barbarian, Upgrade4) => (3000, 5, 0, 5, 0, 0, 0),
        (Race::Barbarian, Dwelling5) => (4000, 0, 0, 20, 0, 0, 0),
        (Race::Barbarian, Upgrade5) => (2000, 0, 0, 10, 0, 0, 0),
        (Race::Barbarian, Dwelling6) => (6000, 0, 0, 20, 0, 20, 0),

        (Race::Sorceress, Dwelling1) => (500, 5, 0, 0, 0, 0, 0),
        (Race::Sorceress, Dwelling2) => (1000, 5, 0, 0, 0, 0, 0),
        (Race::Sorceress, Upgrade2) => (1500, 5, 0, 0, 0, 0, 0),
        (Race::Sorceress, Dwelling3) => (1500, 0, 0, 0, 0, 0, 0),
        (Race::Sorceress, Upgrade3) => (1500, 5, 0, 0, 0, 0, 0),
        (Race::Sorceress, Dwelling4) => (1500, 0, 0, 10, 0, 0, 0),
        (Race::Sorceress, Upgrade4) => (1500, 0, 5, 0, 0, 0, 0),
        (Race::Sorceress, Dwelling5) => (3000, 10, 0, 0, 0, 0, 10),
        (Race::Sorceress, Dwelling6) => (10000, 0, 20, 30, 0, 0, 0),

        (Race::Warlock, Dwelling1) => (500, 0, 0, 0, 0, 0, 0),
        (Race::Warlock, Dwelling2) => (1000, 0, 0, 10, 0, 0, 0),
        (Race::Warlock, Dwelling3) => (2000, 0, 0, 0, 0, 0, 0),
        (Race::Warlock, Dwelling4) => (3000, 0, 0, 0, 0, 0, 10),
        (Race::Warlock, Upgrade4) => (2000, 0, 0, 0, 0, 0, 5),
        (Race::Warlock, Dwelling5) => (4000, 0, 0, 0, 10, 0, 0),
        (Race::Warlock, Dwelling6) => (15000, 0, 0, 30, 20, 0, 0),
        (Race::Warlock, Upgrade6) | (Race::Warlock, Upgrade7) => (5000, 0, 0, 5, 10, 0, 0),

        (Race::Wizard, Dwelling1) => (400, 0, 0, 0, 0, 0, 0),
        (Race::Wizard, Dwelling2) => (800, 0, 0, 0, 0, 0, 0),
        (Race::Wizard, Dwelling3) => (1500, 5, 0, 5, 0, 0, 0),
        (Race::Wizard, Upgrade3) => (1500, 0, 5, 0, 0, 0, 0),
        (Race::Wizard, Dwelling4) => (3000, 5, 0, 0, 0, 0, 0),
        (Race::Wizard, Dwelling5) => (3500, 5, 5, 5, 5, 5, 5),
        (Race::Wizard, Upgrade5) => (4000, 5, 0, 5, 0, 0, 0),
        (Race::Wizard, Dwelling6) | (Race::Wizard, Upgrade6) => (12500, 5, 0, 5, 0, 0, 20),

        (Race::Necromancer, Dwelling1) => (400, 0, 0, 0, 0, 0, 0),
        (Race::Necromancer, Dwelling2) => (1000, 0, 0, 0, 0, 0, 0),
        (Race::Necromancer, Upgrade2) => (1000, 0, 0, 0, 0, 0, 0),
        (Race::Necromancer, Dwelling3) => (1500, 0, 0, 10, 0, 0, 0),
        (Race::Necromancer, Upgrade3) => (1500, 0, 0, 5, 0, 0, 0),
        (Race::Necromancer, Dwelling4) => (3000, 10, 0, 0, 0, 0, 0),
        (Race::Necromancer, Upgrade4) => (4000, 5, 0, 0, 0, 10, 10),
        (Race::Necromancer, Dwelling5) => (4000, 10, 0, 0, 10, 0, 0),
        (Race::Necromancer, Upgrade5) => (3000, 0, 0, 5, 0, 5, 0),
        (Race::Necromancer, Dwelling6) => (10000, 10, 5, 10, 5, 5, 5),

        _ => return Funds::default(),
    };
    Funds::new(gold, wood, mercury, ore, sulfur, crystal, gems)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_set_operations() {
        let mut set = BuildingSet::of(&[Building::Castle, Building::Dwelling1]);
        assert!(set.contains(Building::Castle));
        assert!(!set.contains(Building::Well));

        set.insert(Building::Well);
        set.remove(Building::Castle);
        assert_eq!(set.len(), 2);
        assert!(set.contains_all(BuildingSet::of(&[Building::Well, Building::Dwelling1])));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Building::Well, Building::Dwelling1]
        );
    }

    #[test]
    fn test_upgrade7_is_the_top_bit() {
        assert_eq!(Building::Upgrade7.bit(), 0x8000_0000);
        assert_eq!(Building::Upgrade7.dwelling_level(), Some(6));
    }

    #[test]
    fn test_dwelling_availability_by_race() {
        assert!(is_available(Race::Knight, Building::Upgrade6));
        assert!(!is_available(Race::Barbarian, Building::Upgrade6));
        assert!(!is_available(Race::Wizard, Building::Upgrade2));
        assert!(is_available(Race::Warlock, Building::Upgrade7));
        assert!(!is_available(Race::Knight, Building::Upgrade7));
        assert!(!is_available(Race::Necromancer, Building::Tavern));
        assert!(is_available(Race::Necromancer, Building::Shrine));
        assert!(!is_available(Race::Knight, Building::Shrine));
    }

    #[test]
    fn test_dwelling_monsters_match_race_and_level() {
        for race in Race::PLAYABLE {
            for building in Building::ALL.into_iter().filter(|b| b.is_dwelling()) {
                if let Some(monster) = dwelling_monster(race, building) {
                    assert_eq!(monster.race(), race);
                    assert_eq!(monster_dwelling(monster), Some(building));
                }
            }
        }
    }

    #[test]
    fn test_costs() {
        assert_eq!(
            building_cost(Race::Knight, Building::Castle),
            Funds::new(5000, 20, 0, 20, 0, 0, 0)
        );
        assert_eq!(
            building_cost(Race::Sorceress, Building::Spec),
            Funds::new(1500, 0, 0, 0, 0, 10, 0)
        );
        assert_eq!(
            building_cost(Race::Warlock, Building::Dwelling6),
            Funds::new(15000, 0, 0, 30, 20, 0, 0)
        );
        assert_eq!(building_cost(Race::Knight, Building::Upgrade7), Funds::default());
    }

    #[test]
    fn test_requirements() {
        assert!(requirements(Race::Knight, Building::Dwelling3).contains(Building::Well));
        assert!(requirements(Race::Warlock, Building::Upgrade7).contains(Building::Upgrade6));
        assert!(requirements(Race::Wizard, Building::MageGuild3).contains(Building::MageGuild2));
        assert!(requirements(Race::Knight, Building::Statue).is_empty());
    }
}
