//! Creature catalogue
//!
//! Every creature that can occupy an army slot, with its base statistics,
//! race, upgrade chain and hire cost. Identifiers are stable: they are what
//! army records store.

use serde::{Deserialize, Serialize};

use crate::core::types::Race;
use crate::economy::{Funds, Resource};

/// Attack contribution per point to the combat value of one unit
const ATTACK_STEP: f64 = 0.1;

/// Defense contribution per point to the combat value of one unit
const DEFENSE_STEP: f64 = 0.05;

/// Combat value multiplier for creatures that shoot
const RANGED_BONUS: f64 = 1.25;

/// Combat value multiplier for flyers
const FLYING_BONUS: f64 = 1.1;

/// Combat value change per speed step away from average
const SPEED_STEP: f64 = 0.05;

/// Battlefield speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Speed {
    Crawling = 1,
    VerySlow = 2,
    Slow = 3,
    Average = 4,
    Fast = 5,
    VeryFast = 6,
    UltraFast = 7,
}

/// Base statistics of a single creature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterStats {
    pub attack: u32,
    pub defense: u32,
    pub damage_min: u32,
    pub damage_max: u32,
    pub hit_points: u32,
    pub speed: Speed,
    /// Ammunition; zero for melee creatures
    pub shots: u32,
}

const fn stats(
    attack: u32,
    defense: u32,
    damage_min: u32,
    damage_max: u32,
    hit_points: u32,
    speed: Speed,
    shots: u32,
) -> MonsterStats {
    MonsterStats {
        attack,
        defense,
        damage_min,
        damage_max,
        hit_points,
        speed,
        shots,
    }
}

/// Creature type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u32)]
pub enum Monster {
    Peasant = 1,
    Archer,
    Ranger,
    Pikeman,
    VeteranPikeman,
    Swordsman,
    MasterSwordsman,
    Cavalry,
    Champion,
    Paladin,
    Crusader,
    Goblin,
    Orc,
    OrcChief,
    Wolf,
    Ogre,
    OgreLord,
    Troll,
    WarTroll,
    Cyclops,
    Sprite,
    Dwarf,
    BattleDwarf,
    Elf,
    GrandElf,
    Druid,
    GreaterDruid,
    Unicorn,
    Phoenix,
    Centaur,
    Gargoyle,
    Griffin,
    Minotaur,
    MinotaurKing,
    Hydra,
    GreenDragon,
    RedDragon,
    BlackDragon,
    Halfling,
    Boar,
    IronGolem,
    SteelGolem,
    Roc,
    Mage,
    Archmage,
    Giant,
    Titan,
    Skeleton,
    Zombie,
    MutantZombie,
    Mummy,
    RoyalMummy,
    Vampire,
    VampireLord,
    Lich,
    PowerLich,
    BoneDragon,
    Rogue,
    Nomad,
    Ghost,
    Genie,
    Medusa,
    EarthElement,
    AirElement,
    FireElement,
    WaterElement,
}

impl Monster {
    /// Every creature, ordered by identifier
    pub const ALL: [Monster; 66] = [
        Monster::Peasant,
        Monster::Archer,
        Monster::Ranger,
        Monster::Pikeman,
        Monster::VeteranPikeman,
        Monster::Swordsman,
        Monster::MasterSwordsman,
        Monster::Cavalry,
        Monster::Champion,
        Monster::Paladin,
        Monster::Crusader,
        Monster::Goblin,
        Monster::Orc,
        Monster::OrcChief,
        Monster::Wolf,
        Monster::Ogre,
        Monster::OgreLord,
        Monster::Troll,
        Monster::WarTroll,
        Monster::Cyclops,
        Monster::Sprite,
        Monster::Dwarf,
        Monster::BattleDwarf,
        Monster::Elf,
        Monster::GrandElf,
        Monster::Druid,
        Monster::GreaterDruid,
        Monster::Unicorn,
        Monster::Phoenix,
        Monster::Centaur,
        Monster::Gargoyle,
        Monster::Griffin,
        Monster::Minotaur,
        Monster::MinotaurKing,
        Monster::Hydra,
        Monster::GreenDragon,
        Monster::RedDragon,
        Monster::BlackDragon,
        Monster::Halfling,
        Monster::Boar,
        Monster::IronGolem,
        Monster::SteelGolem,
        Monster::Roc,
        Monster::Mage,
        Monster::Archmage,
        Monster::Giant,
        Monster::Titan,
        Monster::Skeleton,
        Monster::Zombie,
        Monster::MutantZombie,
        Monster::Mummy,
        Monster::RoyalMummy,
        Monster::Vampire,
        Monster::VampireLord,
        Monster::Lich,
        Monster::PowerLich,
        Monster::BoneDragon,
        Monster::Rogue,
        Monster::Nomad,
        Monster::Ghost,
        Monster::Genie,
        Monster::Medusa,
        Monster::EarthElement,
        Monster::AirElement,
        Monster::FireElement,
        Monster::WaterElement,
    ];

    /// Stable identifier used in army records
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Look up a creature by identifier; 0 and unknown values yield `None`
    pub fn from_id(id: u32) -> Option<Self> {
        let index = id.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }

    pub fn stats(self) -> MonsterStats {
        use Speed::*;
        match self {
            Monster::Peasant => stats(1, 1, 1, 1, 1, VerySlow, 0),
            Monster::Archer => stats(5, 3, 2, 3, 10, VerySlow, 12),
            Monster::Ranger => stats(5, 3, 2, 3, 10, Average, 24),
            Monster::Pikeman => stats(5, 9, 3, 4, 15, Average, 0),
            Monster::VeteranPikeman => stats(5, 9, 3, 4, 20, Fast, 0),
            Monster::Swordsman => stats(7, 9, 4, 6, 25, Average, 0),
            Monster::MasterSwordsman => stats(7, 9, 4, 6, 30, Fast, 0),
            Monster::Cavalry => stats(10, 9, 5, 10, 30, VeryFast, 0),
            Monster::Champion => stats(10, 9, 5, 10, 40, UltraFast, 0),
            Monster::Paladin => stats(11, 12, 10, 20, 50, Fast, 0),
            Monster::Crusader => stats(11, 12, 10, 20, 65, VeryFast, 0),

            Monster::Goblin => stats(3, 1, 1, 2, 3, Average, 0),
            Monster::Orc => stats(3, 4, 2, 3, 10, VerySlow, 8),
            Monster::OrcChief => stats(3, 4, 3, 4, 15, Slow, 16),
            Monster::Wolf => stats(6, 2, 3, 5, 20, VeryFast, 0),
            Monster::Ogre => stats(9, 5, 4, 6, 40, VerySlow, 0),
            Monster::OgreLord => stats(9, 5, 5, 7, 60, Average, 0),
            Monster::Troll => stats(10, 5, 5, 7, 40, Average, 8),
            Monster::WarTroll => stats(10, 5, 7, 9, 40, Fast, 16),
            Monster::Cyclops => stats(12, 9, 12, 24, 80, Fast, 0),

            Monster::Sprite => stats(4, 2, 1, 2, 2, Average, 0),
            Monster::Dwarf => stats(6, 5, 2, 4, 20, VerySlow, 0),
            Monster::BattleDwarf => stats(6, 6, 2, 4, 20, Average, 0),
            Monster::Elf => stats(4, 3, 2, 3, 15, Average, 24),
            Monster::GrandElf => stats(5, 5, 2, 3, 15, VeryFast, 24),
            Monster::Druid => stats(7, 5, 5, 8, 25, Fast, 8),
            Monster::GreaterDruid => stats(7, 7, 5, 8, 25, VeryFast, 16),
            Monster::Unicorn => stats(10, 9, 7, 14, 40, Fast, 0),
            Monster::Phoenix => stats(12, 10, 20, 40, 100, UltraFast, 0),

            Monster::Centaur => stats(3, 1, 1, 2, 5, Average, 8),
            Monster::Gargoyle => stats(4, 7, 2, 3, 15, VeryFast, 0),
            Monster::Griffin => stats(6, 6, 3, 5, 25, Average, 0),
            Monster::Minotaur => stats(9, 8, 5, 10, 35, Average, 0),
            Monster::MinotaurKing => stats(9, 8, 5, 10, 45, VeryFast, 0),
            Monster::Hydra => stats(8, 9, 6, 12, 75, VerySlow, 0),
            Monster::GreenDragon => stats(12, 12, 25, 50, 200, Average, 0),
            Monster::RedDragon => stats(13, 13, 25, 50, 250, Fast, 0),
            Monster::BlackDragon => stats(14, 14, 25, 50, 300, VeryFast, 0),

            Monster::Halfling => stats(2, 1, 1, 3, 3, Slow, 12),
            Monster::Boar => stats(5, 4, 2, 3, 15, VeryFast, 0),
            Monster::IronGolem => stats(5, 10, 4, 5, 30, VerySlow, 0),
            Monster::SteelGolem => stats(7, 10, 4, 5, 35, Slow, 0),
            Monster::Roc => stats(7, 7, 4, 8, 40, Average, 0),
            Monster::Mage => stats(11, 7, 7, 9, 30, Fast, 12),
            Monster::Archmage => stats(12, 8, 7, 9, 35, VeryFast, 24),
            Monster::Giant => stats(13, 10, 20, 30, 150, Average, 0),
            Monster::Titan => stats(15, 15, 20, 30, 300, VeryFast, 24),

            Monster::Skeleton => stats(4, 3, 2, 3, 4, Average, 0),
            Monster::Zombie => stats(5, 2, 2, 3, 15, VerySlow, 0),
            Monster::MutantZombie => stats(5, 2, 2, 3, 20, Average, 0),
            Monster::Mummy => stats(6, 6, 3, 4, 25, Average, 0),
            Monster::RoyalMummy => stats(6, 6, 3, 4, 30, Fast, 0),
            Monster::Vampire => stats(8, 6, 5, 7, 30, Average, 0),
            Monster::VampireLord => stats(8, 6, 5, 7, 40, Fast, 0),
            Monster::Lich => stats(7, 12, 8, 10, 25, Fast, 12),
            Monster::PowerLich => stats(7, 13, 8, 10, 35, VeryFast, 24),
            Monster::BoneDragon => stats(11, 9, 25, 45, 150, Average, 0),

            Monster::Rogue => stats(6, 1, 1, 2, 4, Fast, 0),
            Monster::Nomad => stats(7, 6, 2, 5, 20, VeryFast, 0),
            Monster::Ghost => stats(8, 7, 4, 6, 20, Fast, 0),
            Monster::Genie => stats(10, 9, 20, 30, 50, VeryFast, 0),
            Monster::Medusa => stats(8, 9, 6, 10, 35, Average, 0),
            Monster::EarthElement => stats(8, 8, 4, 5, 50, Slow, 0),
            Monster::AirElement => stats(7, 7, 2, 8, 35, VeryFast, 0),
            Monster::FireElement => stats(8, 6, 4, 6, 40, Fast, 0),
            Monster::WaterElement => stats(8, 8, 3, 7, 45, Average, 0),
        }
    }

    /// Hire cost of one unit
    pub fn cost(self) -> Funds {
        let gold = match self {
            Monster::Peasant => 20,
            Monster::Archer => 150,
            Monster::Ranger => 200,
            Monster::Pikeman => 200,
            Monster::VeteranPikeman => 250,
            Monster::Swordsman => 250,
            Monster::MasterSwordsman => 300,
            Monster::Cavalry => 300,
            Monster::Champion => 375,
            Monster::Paladin => 600,
            Monster::Crusader => 1000,
            Monster::Goblin => 40,
            Monster::Orc => 140,
            Monster::OrcChief => 175,
            Monster::Wolf => 200,
            Monster::Ogre => 300,
            Monster::OgreLord => 500,
            Monster::Troll => 600,
            Monster::WarTroll => 700,
            Monster::Cyclops => 750,
            Monster::Sprite => 50,
            Monster::Dwarf => 200,
            Monster::BattleDwarf => 250,
            Monster::Elf => 250,
            Monster::GrandElf => 300,
            Monster::Druid => 350,
            Monster::GreaterDruid => 400,
            Monster::Unicorn => 500,
            Monster::Phoenix => 1500,
            Monster::Centaur => 60,
            Monster::Gargoyle => 200,
            Monster::Griffin => 300,
            Monster::Minotaur => 400,
            Monster::MinotaurKing => 500,
            Monster::Hydra => 800,
            Monster::GreenDragon => 3000,
            Monster::RedDragon => 3500,
            Monster::BlackDragon => 4000,
            Monster::Halfling => 50,
            Monster::Boar => 150,
            Monster::IronGolem => 300,
            Monster::SteelGolem => 350,
            Monster::Roc => 400,
            Monster::Mage => 600,
            Monster::Archmage => 700,
            Monster::Giant => 2000,
            Monster::Titan => 5000,
            Monster::Skeleton => 75,
            Monster::Zombie => 150,
            Monster::MutantZombie => 200,
            Monster::Mummy => 250,
            Monster::RoyalMummy => 300,
            Monster::Vampire => 500,
            Monster::VampireLord => 650,
            Monster::Lich => 750,
            Monster::PowerLich => 900,
            Monster::BoneDragon => 1500,
            Monster::Rogue => 50,
            Monster::Nomad => 200,
            Monster::Ghost => 1000,
            Monster::Genie => 650,
            Monster::Medusa => 500,
            Monster::EarthElement
            | Monster::AirElement
            | Monster::FireElement
            | Monster::WaterElement => 500,
        };

        let funds = Funds::gold(gold);
        match self {
            Monster::Cyclops => funds.with(Resource::Crystal, 1),
            Monster::Phoenix => funds.with(Resource::Mercury, 1),
            Monster::GreenDragon | Monster::RedDragon => {
                funds.with(Resource::Sulfur, 1)
            }
            Monster::BlackDragon => funds.with(Resource::Sulfur, 2),
            Monster::Giant | Monster::Genie => funds.with(Resource::Gems, 1),
            Monster::Titan => funds.with(Resource::Gems, 2),
            _ => funds,
        }
    }

    pub fn race(self) -> Race {
        match self.id() {
            1..=11 => Race::Knight,
            12..=20 => Race::Barbarian,
            21..=29 => Race::Sorceress,
            30..=38 => Race::Warlock,
            39..=47 => Race::Wizard,
            48..=57 => Race::Necromancer,
            _ => Race::Neutral,
        }
    }

    /// Next tier, if the creature can be upgraded
    pub fn upgrade(self) -> Option<Monster> {
        let next = match self {
            Monster::Archer => Monster::Ranger,
            Monster::Pikeman => Monster::VeteranPikeman,
            Monster::Swordsman => Monster::MasterSwordsman,
            Monster::Cavalry => Monster::Champion,
            Monster::Paladin => Monster::Crusader,
            Monster::Orc => Monster::OrcChief,
            Monster::Ogre => Monster::OgreLord,
            Monster::Troll => Monster::WarTroll,
            Monster::Dwarf => Monster::BattleDwarf,
            Monster::Elf => Monster::GrandElf,
            Monster::Druid => Monster::GreaterDruid,
            Monster::Minotaur => Monster::MinotaurKing,
            Monster::GreenDragon => Monster::RedDragon,
            Monster::RedDragon => Monster::BlackDragon,
            Monster::IronGolem => Monster::SteelGolem,
            Monster::Mage => Monster::Archmage,
            Monster::Giant => Monster::Titan,
            Monster::Zombie => Monster::MutantZombie,
            Monster::Mummy => Monster::RoyalMummy,
            Monster::Vampire => Monster::VampireLord,
            Monster::Lich => Monster::PowerLich,
            _ => return None,
        };
        Some(next)
    }

    /// Previous tier, if this creature is an upgrade
    pub fn downgrade(self) -> Option<Monster> {
        Self::ALL.into_iter().find(|m| m.upgrade() == Some(self))
    }

    /// Lowest tier of this creature's upgrade chain
    pub fn base_form(self) -> Monster {
        let mut current = self;
        while let Some(previous) = current.downgrade() {
            current = previous;
        }
        current
    }

    /// Gold and resources to upgrade one unit to the next tier
    pub fn upgrade_cost(self) -> Option<Funds> {
        self.upgrade().map(|next| next.cost() - self.cost())
    }

    pub fn is_archer(self) -> bool {
        self.stats().shots > 0
    }

    pub fn is_flying(self) -> bool {
        matches!(
            self,
            Monster::Sprite
                | Monster::Phoenix
                | Monster::Gargoyle
                | Monster::Griffin
                | Monster::GreenDragon
                | Monster::RedDragon
                | Monster::BlackDragon
                | Monster::Roc
                | Monster::Vampire
                | Monster::VampireLord
                | Monster::BoneDragon
                | Monster::Ghost
                | Monster::Genie
        )
    }

    pub fn is_undead(self) -> bool {
        self.race() == Race::Necromancer || self == Monster::Ghost
    }

    /// Weekly population growth of the creature's dwelling
    pub fn growth(self) -> u32 {
        match self.base_form() {
            Monster::Peasant => 12,
            Monster::Archer => 8,
            Monster::Pikeman => 6,
            Monster::Swordsman => 4,
            Monster::Cavalry => 3,
            Monster::Paladin => 2,
            Monster::Goblin => 10,
            Monster::Orc => 8,
            Monster::Wolf => 5,
            Monster::Ogre => 4,
            Monster::Troll => 3,
            Monster::Cyclops => 2,
            Monster::Sprite => 8,
            Monster::Dwarf => 6,
            Monster::Elf => 4,
            Monster::Druid => 3,
            Monster::Unicorn => 2,
            Monster::Phoenix => 1,
            Monster::Centaur => 8,
            Monster::Gargoyle => 6,
            Monster::Griffin => 4,
            Monster::Minotaur => 3,
            Monster::Hydra => 2,
            Monster::GreenDragon => 1,
            Monster::Halfling => 8,
            Monster::Boar => 6,
            Monster::IronGolem => 4,
            Monster::Roc => 3,
            Monster::Mage => 2,
            Monster::Giant => 1,
            Monster::Skeleton => 8,
            Monster::Zombie => 6,
            Monster::Mummy => 4,
            Monster::Vampire => 3,
            Monster::Lich => 2,
            Monster::BoneDragon => 1,
            _ => 0,
        }
    }

    /// Combat value of one unit with the given effective attack and defense
    pub fn combat_value_with(self, attack: u32, defense: u32) -> f64 {
        let stats = self.stats();
        let damage = (stats.damage_min + stats.damage_max) as f64 / 2.0
            * (1.0 + ATTACK_STEP * attack as f64);
        let durability = stats.hit_points as f64 * (1.0 + DEFENSE_STEP * defense as f64);

        let mut value = (damage * durability).sqrt();
        if self.is_archer() {
            value *= RANGED_BONUS;
        }
        if self.is_flying() {
            value *= FLYING_BONUS;
        }
        let speed_steps = stats.speed as i32 - Speed::Average as i32;
        value * (1.0 + SPEED_STEP * speed_steps as f64)
    }

    /// Combat value of one unit with its own attack and defense
    pub fn combat_value(self) -> f64 {
        let stats = self.stats();
        self.combat_value_with(stats.attack, stats.defense)
    }

    pub fn name(self) -> &'static str {
        match self {
            Monster::Peasant => "Peasant",
            Monster::Archer => "Archer",
            Monster::Ranger => "Ranger",
            Monster::Pikeman => "Pikeman",
            Monster::VeteranPikeman => "Veteran Pikeman",
            Monster::Swordsman => "Swordsman",
            Monster::MasterSwordsman => "Master Swordsman",
            Monster::Cavalry => "Cavalry",
            Monster::Champion => "Champion",
            Monster::Paladin => "Paladin",
            Monster::Crusader => "Crusader",
            Monster::Goblin => "Goblin",
            Monster::Orc => "Orc",
            Monster::OrcChief => "Orc Chief",
            Monster::Wolf => "Wolf",
            Monster::Ogre => "Ogre",
            Monster::OgreLord => "Ogre Lord",
            Monster::Troll => "Troll",
            Monster::WarTroll => "War Troll",
            Monster::Cyclops => "Cyclops",
            Monster::Sprite => "Sprite",
            Monster::Dwarf => "Dwarf",
            Monster::BattleDwarf => "Battle Dwarf",
            Monster::Elf => "Elf",
            Monster::GrandElf => "Grand Elf",
            Monster::Druid => "Druid",
            Monster::GreaterDruid => "Greater Druid",
            Monster::Unicorn => "Unicorn",
            Monster::Phoenix => "Phoenix",
            Monster::Centaur => "Centaur",
            Monster::Gargoyle => "Gargoyle",
            Monster::Griffin => "Griffin",
            Monster::Minotaur => "Minotaur",
            Monster::MinotaurKing => "Minotaur King",
            Monster::Hydra => "Hydra",
            Monster::GreenDragon => "Green Dragon",
            Monster::RedDragon => "Red Dragon",
            Monster::BlackDragon => "Black Dragon",
            Monster::Halfling => "Halfling",
            Monster::Boar => "Boar",
            Monster::IronGolem => "Iron Golem",
            Monster::SteelGolem => "Steel Golem",
            Monster::Roc => "Roc",
            Monster::Mage => "Mage",
            Monster::Archmage => "Archmage",
            Monster::Giant => "Giant",
            Monster::Titan => "Titan",
            Monster::Skeleton => "Skeleton",
            Monster::Zombie => "Zombie",
            Monster::MutantZombie => "Mutant Zombie",
            Monster::Mummy => "Mummy",
            Monster::RoyalMummy => "Royal Mummy",
            Monster::Vampire => "Vampire",
            Monster::VampireLord => "Vampire Lord",
            Monster::Lich => "Lich",
            Monster::PowerLich => "Power Lich",
            Monster::BoneDragon => "Bone Dragon",
            Monster::Rogue => "Rogue",
            Monster::Nomad => "Nomad",
            Monster::Ghost => "Ghost",
            Monster::Genie => "Genie",
            Monster::Medusa => "Medusa",
            Monster::EarthElement => "Earth Elemental",
            Monster::AirElement => "Air Elemental",
            Monster::FireElement => "Fire Elemental",
            Monster::WaterElement => "Water Elemental",
        }
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_and_dense() {
        for (index, monster) in Monster::ALL.iter().enumerate() {
            assert_eq!(monster.id() as usize, index + 1);
            assert_eq!(Monster::from_id(monster.id()), Some(*monster));
        }
        assert_eq!(Monster::from_id(0), None);
        assert_eq!(Monster::from_id(67), None);
    }

    #[test]
    fn test_upgrade_chain() {
        assert_eq!(Monster::Archer.upgrade(), Some(Monster::Ranger));
        assert_eq!(Monster::GreenDragon.upgrade(), Some(Monster::RedDragon));
        assert_eq!(Monster::RedDragon.upgrade(), Some(Monster::BlackDragon));
        assert_eq!(Monster::BlackDragon.base_form(), Monster::GreenDragon);
        assert_eq!(Monster::Peasant.upgrade(), None);
        assert_eq!(Monster::Ranger.downgrade(), Some(Monster::Archer));
    }

    #[test]
    fn test_upgrades_stay_in_race() {
        for monster in Monster::ALL {
            if let Some(next) = monster.upgrade() {
                assert_eq!(monster.race(), next.race(), "{} -> {}", monster, next);
            }
        }
    }

    #[test]
    fn test_upgrade_cost_is_difference() {
        assert_eq!(Monster::Archer.upgrade_cost(), Some(Funds::gold(50)));
        assert_eq!(
            Monster::RedDragon.upgrade_cost(),
            Some(Funds::new(500, 0, 0, 0, 1, 0, 0))
        );
    }

    #[test]
    fn test_races_and_flags() {
        assert_eq!(Monster::Peasant.race(), Race::Knight);
        assert_eq!(Monster::Cyclops.race(), Race::Barbarian);
        assert_eq!(Monster::BoneDragon.race(), Race::Necromancer);
        assert_eq!(Monster::Ghost.race(), Race::Neutral);
        assert!(Monster::Ghost.is_undead());
        assert!(Monster::Archer.is_archer());
        assert!(!Monster::Pikeman.is_archer());
        assert!(Monster::Phoenix.is_flying());
    }

    #[test]
    fn test_combat_value_orders_tiers() {
        assert!(Monster::Peasant.combat_value() < Monster::Archer.combat_value());
        assert!(Monster::Archer.combat_value() < Monster::Ranger.combat_value());
        assert!(Monster::Paladin.combat_value() < Monster::Crusader.combat_value());
        assert!(Monster::Crusader.combat_value() < Monster::BlackDragon.combat_value());
    }

    #[test]
    fn test_combat_value_grows_with_attack() {
        let base = Monster::Swordsman.combat_value();
        assert!(Monster::Swordsman.combat_value_with(12, 9) > base);
        assert!(Monster::Swordsman.combat_value_with(7, 14) > base);
    }
}
