//! Battlefield army: five slots plus commander, owner and formation
//!
//! Strength, morale and luck are pure functions of the current slots and
//! the commander profile. Neutral defenders are generated deterministically
//! from the map seed and the location, so a reloaded game meets the same
//! army.

use std::sync::{Arc, Weak};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::commander::{Artifact, Commander, CommanderKind};
use super::monster::Monster;
use super::troop::Troop;
use super::troops::{even_split, MergeOutcome, Troops, ARMY_SLOTS};
use crate::core::config::ArmyConfig;
use crate::core::error::{ArmyError, Result};
use crate::core::types::{Color, LocationId};

/// Strength change per point of morale or luck
const MORALE_LUCK_STEP: f64 = 0.04;

/// Morale and luck are clamped to this magnitude
const MAX_MORALE_LUCK: i32 = 3;

/// Identifies a neutral encounter for seeded generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BattleSeed {
    pub map_seed: u64,
    pub location_id: LocationId,
}

impl BattleSeed {
    pub fn new(map_seed: u64, location_id: LocationId) -> Self {
        Self {
            map_seed,
            location_id,
        }
    }

    /// Seed of the stack-count draw
    pub fn arrangement_seed(&self) -> u64 {
        self.map_seed ^ self.location_id.0 as u64
    }

    /// Seed of the centre-stack upgrade draw
    pub fn upgrade_seed(&self, monster: Monster) -> u64 {
        self.arrangement_seed() ^ monster.id() as u64
    }
}

/// Persisted form of an army
///
/// Empty slots are stored as `(0, 0)`. The commander is not part of the
/// record; it is re-bound by whoever owns it after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmyRecord {
    pub slot_count: usize,
    pub slots: Vec<(u32, u32)>,
    pub spread_formation: bool,
    pub color: Color,
}

#[derive(Debug, Clone, Default)]
pub struct Army {
    troops: Troops,
    commander: Option<Weak<Commander>>,
    color: Color,
    spread_formation: bool,
}

impl Army {
    /// Empty army owned by `color`
    pub fn new(color: Color) -> Self {
        Self {
            troops: Troops::with_capacity(ARMY_SLOTS),
            commander: None,
            color,
            spread_formation: false,
        }
    }

    /// Neutral defender generated for a map encounter
    pub fn neutral(
        monster: Monster,
        count: u32,
        seed: BattleSeed,
        allow_upgrade: bool,
        config: &ArmyConfig,
    ) -> std::result::Result<Self, ArmyError> {
        let mut army = Army::new(Color::None);
        army.arrange_for_battle(monster, count, seed, allow_upgrade, config)?;
        Ok(army)
    }

    pub fn with_commander(mut self, commander: &Arc<Commander>) -> Self {
        self.set_commander(commander);
        self
    }

    pub fn troops(&self) -> &Troops {
        &self.troops
    }

    pub fn troops_mut(&mut self) -> &mut Troops {
        &mut self.troops
    }

    /// The live commander, if any
    pub fn commander(&self) -> Option<Arc<Commander>> {
        self.commander.as_ref().and_then(Weak::upgrade)
    }

    pub fn set_commander(&mut self, commander: &Arc<Commander>) {
        self.commander = Some(Arc::downgrade(commander));
    }

    pub fn clear_commander(&mut self) {
        self.commander = None;
    }

    /// True if a living hero leads this army
    pub fn is_hero_led(&self) -> bool {
        self.commander()
            .is_some_and(|commander| commander.kind == CommanderKind::Hero)
    }

    /// Owner color; a commander's color takes precedence
    pub fn color(&self) -> Color {
        self.commander()
            .map_or(self.color, |commander| commander.color)
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn spread_formation(&self) -> bool {
        self.spread_formation
    }

    pub fn set_spread_formation(&mut self, spread: bool) {
        self.spread_formation = spread;
    }

    pub fn is_empty(&self) -> bool {
        self.troops.is_empty()
    }

    /// Strength of the bare troops, as used by the slot algorithms
    pub fn troops_strength(&self) -> f64 {
        self.troops.strength()
    }

    /// Total combat strength including the commander
    pub fn strength(&self) -> f64 {
        if self.troops.is_empty() {
            return 0.0;
        }

        let commander = self.commander();
        let (bonus_attack, bonus_defense, archery, magic) = match &commander {
            Some(c) => (c.attack, c.defense, c.archery.bonus(), c.magic_value()),
            None => (0, 0, 0.0, 0.0),
        };
        let morale_factor = 1.0 + MORALE_LUCK_STEP * self.morale() as f64;
        let luck_factor = 1.0 + MORALE_LUCK_STEP * self.luck() as f64;

        let troops: f64 = self
            .troops
            .iter()
            .map(|troop| {
                let stats = troop.monster.stats();
                let mut value = troop
                    .strength_with(stats.attack + bonus_attack, stats.defense + bonus_defense);
                if troop.monster.is_archer() {
                    value *= 1.0 + archery;
                }
                value * morale_factor * luck_factor
            })
            .sum();

        troops + magic
    }

    /// Morale contributed by the army's composition alone
    pub fn army_morale_modifier(&self) -> i32 {
        if self.troops.is_empty() {
            return 0;
        }

        let mut races = Vec::with_capacity(ARMY_SLOTS);
        let mut undead = false;
        let mut living = false;
        for troop in self.troops.iter() {
            let race = troop.monster.race();
            if !races.contains(&race) {
                races.push(race);
            }
            if troop.monster.is_undead() {
                undead = true;
            } else {
                living = true;
            }
        }

        let mut modifier = match races.len() {
            1 if !undead && self.troops.unique_monster_count() > 1 => 1,
            1 | 2 => 0,
            3 => -1,
            4 => -2,
            _ => -3,
        };
        if undead && living {
            modifier -= 1;
        }
        if self
            .commander()
            .is_some_and(|c| c.has_artifact(Artifact::ArmOfTheMartyr))
        {
            modifier -= 1;
        }
        modifier
    }

    pub fn morale(&self) -> i32 {
        if !self.troops.is_empty() && self.troops.iter().all(|t| t.monster.is_undead()) {
            return 0;
        }

        let commander = self
            .commander()
            .map_or(0, |c| c.morale_modifier() + c.settlement_morale);
        (commander + self.army_morale_modifier()).clamp(-MAX_MORALE_LUCK, MAX_MORALE_LUCK)
    }

    pub fn luck(&self) -> i32 {
        self.commander()
            .map_or(0, |c| c.luck_modifier() + c.settlement_luck)
            .clamp(-MAX_MORALE_LUCK, MAX_MORALE_LUCK)
    }

    fn commander_attack_defense(&self) -> (u32, u32) {
        self.commander().map_or((0, 0), |c| (c.attack, c.defense))
    }

    /// Rough battle prediction against `other`
    ///
    /// Each side's strength is scaled by its attack advantage and divided
    /// by the opponent's hit points. An empty opponent always loses.
    pub fn is_stronger_than(&self, other: &Army) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }

        let (attack, defense) = self.commander_attack_defense();
        let (other_attack, other_defense) = other.commander_attack_defense();

        let ours = self.strength() * attack_factor(attack, other_defense)
            / other.total_hit_points() as f64;
        let theirs = other.strength() * attack_factor(other_attack, defense)
            / self.total_hit_points() as f64;
        ours > theirs
    }

    fn total_hit_points(&self) -> u64 {
        self.troops.iter().map(Troop::hit_points).sum::<u64>().max(1)
    }

    /// Take the strongest stacks from `giver`
    ///
    /// See [`Troops::join_strongest`]. When `keep_one_for_giver` is set the
    /// giver must keep at least one unit. If the receiver cannot spare one,
    /// both armies are restored and `Infeasible` is returned.
    pub fn join_strongest_from(
        &mut self,
        giver: &mut Army,
        keep_one_for_giver: bool,
        config: &ArmyConfig,
    ) -> std::result::Result<MergeOutcome, ArmyError> {
        let saved = keep_one_for_giver.then(|| (self.troops.clone(), giver.troops.clone()));
        let outcome = self.troops.join_strongest(
            &mut giver.troops,
            keep_one_for_giver,
            config.giver_preservation_ratio,
        )?;

        if outcome == MergeOutcome::GiverStranded {
            if let Some((ours, theirs)) = saved {
                self.troops = ours;
                giver.troops = theirs;
            }
            debug!("Strongest-merge would leave a {} army empty", giver.color().name());
            return Err(ArmyError::Infeasible(format!(
                "{} cannot spare a unit for the {} army",
                self.color().name(),
                giver.color().name()
            )));
        }
        Ok(outcome)
    }

    /// Strongest-merge that protects a hero-led giver
    pub fn join_strongest_from_army(
        &mut self,
        giver: &mut Army,
        config: &ArmyConfig,
    ) -> std::result::Result<MergeOutcome, ArmyError> {
        let keep_one = giver.is_hero_led();
        self.join_strongest_from(giver, keep_one, config)
    }

    /// Hand the strongest stacks to `other` and keep the weakest
    ///
    /// A hero-led army keeps half of a stack rather than ending empty.
    pub fn keep_only_weakest_troops(&mut self, other: &mut Army) {
        let save_last = self.is_hero_led();
        self.troops.keep_only_weakest(&mut other.troops, save_last);
    }

    /// Replace the slots with a seeded neutral arrangement
    ///
    /// Ranged creatures always fill all five slots. Others use three to five
    /// stacks drawn from the arrangement seed. Stacks are centred and the
    /// centre stack may be upgraded by a second seeded draw.
    pub fn arrange_for_battle(
        &mut self,
        monster: Monster,
        count: u32,
        seed: BattleSeed,
        allow_upgrade: bool,
        config: &ArmyConfig,
    ) -> std::result::Result<(), ArmyError> {
        self.troops = Troops::with_capacity(ARMY_SLOTS);
        if count == 0 {
            return Ok(());
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed.arrangement_seed());
        let stacks = if monster.is_archer() {
            ARMY_SLOTS
        } else {
            rng.gen_range(3..=ARMY_SLOTS)
        };
        let stacks = stacks.min(count as usize);
        let first = (ARMY_SLOTS - stacks) / 2;

        for (offset, share) in even_split(count, stacks).into_iter().enumerate() {
            self.troops.set(first + offset, Troop::new(monster, share))?;
        }

        if allow_upgrade {
            let mut upgrade_rng = ChaCha8Rng::seed_from_u64(seed.upgrade_seed(monster));
            let chance = config.battle_upgrade_chance.clamp(0.0, 1.0);
            if upgrade_rng.gen_bool(chance) {
                let centre = ARMY_SLOTS / 2;
                if let Some(upgraded) = self.troops.get(centre)?.and_then(Troop::upgraded) {
                    self.troops.set(centre, upgraded)?;
                }
            }
        }

        debug!(
            "Arranged {} {} into {} stacks at {:?}",
            count, monster, stacks, seed.location_id
        );
        Ok(())
    }

    /// Reorder slots for battle
    ///
    /// Shooters go first, strongest first. Melee stacks follow, fastest
    /// first, flyers before walkers, then strongest. The resulting list is
    /// laid out in a slot order that depends on the number of shooters.
    pub fn optimize_troops_order(&mut self) {
        let stacks = self.troops.take_stacks();
        let (mut archers, mut melee): (Vec<Troop>, Vec<Troop>) =
            stacks.into_iter().partition(|t| t.monster.is_archer());

        archers.sort_by(|a, b| b.strength().total_cmp(&a.strength()));
        melee.sort_by(|a, b| {
            b.monster
                .stats()
                .speed
                .cmp(&a.monster.stats().speed)
                .then(b.monster.is_flying().cmp(&a.monster.is_flying()))
                .then(b.strength().total_cmp(&a.strength()))
        });

        let order: [usize; ARMY_SLOTS] = match archers.len() {
            0 => [2, 1, 3, 0, 4],
            1 => [0, 2, 1, 3, 4],
            2 | 3 => [0, 4, 2, 1, 3],
            4 => [0, 4, 2, 3, 1],
            _ => [0, 4, 1, 2, 3],
        };

        let mut slots = [None; ARMY_SLOTS];
        for (slot, troop) in order.into_iter().zip(archers.into_iter().chain(melee)) {
            slots[slot] = Some(troop);
        }
        self.troops = Troops::from_slots(slots);
    }

    pub fn to_record(&self) -> ArmyRecord {
        ArmyRecord {
            slot_count: self.troops.capacity(),
            slots: self
                .troops
                .slots()
                .iter()
                .map(|slot| slot.map_or((0, 0), |t| (t.monster.id(), t.count)))
                .collect(),
            spread_formation: self.spread_formation,
            color: self.color,
        }
    }

    /// Rebuild an army from a record, rejecting anything inconsistent
    pub fn from_record(record: &ArmyRecord) -> std::result::Result<Self, ArmyError> {
        if record.slot_count != ARMY_SLOTS {
            return Err(ArmyError::CorruptRecord(format!(
                "slot count {} does not match the army size {}",
                record.slot_count, ARMY_SLOTS
            )));
        }
        if record.slots.len() != record.slot_count {
            return Err(ArmyError::CorruptRecord(format!(
                "{} slots stored for a slot count of {}",
                record.slots.len(),
                record.slot_count
            )));
        }

        let mut army = Army::new(record.color);
        army.spread_formation = record.spread_formation;
        for (index, &(id, count)) in record.slots.iter().enumerate() {
            match (id, count) {
                (0, 0) => {}
                (0, _) | (_, 0) => {
                    return Err(ArmyError::CorruptRecord(format!(
                        "slot {} holds ({}, {})",
                        index, id, count
                    )))
                }
                _ => {
                    let monster = Monster::from_id(id).ok_or_else(|| {
                        ArmyError::CorruptRecord(format!("unknown monster id {} in slot {}", id, index))
                    })?;
                    army.troops.set(index, Troop::new(monster, count))?;
                }
            }
        }
        Ok(army)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    pub fn load_json(json: &str) -> Result<Self> {
        let record: ArmyRecord = serde_json::from_str(json)?;
        Ok(Self::from_record(&record)?)
    }
}

fn attack_factor(attack: u32, defense: u32) -> f64 {
    if attack > defense {
        1.0 + 0.1 * (attack - defense).min(20) as f64
    } else {
        1.0 + 0.05 * (defense - attack).min(14) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::army::commander::Archery;
    use crate::core::error::StewardError;
    use crate::core::types::CommanderId;

    fn army_of(stacks: &[(Monster, u32)]) -> Army {
        let mut army = Army::new(Color::Blue);
        for (index, &(monster, count)) in stacks.iter().enumerate() {
            army.troops_mut().set(index, Troop::new(monster, count)).unwrap();
        }
        army
    }

    #[test]
    fn test_commander_is_weak() {
        let hero = Arc::new(Commander::hero(CommanderId(1), "Ariel", Color::Green));
        let army = army_of(&[(Monster::Sprite, 5)]).with_commander(&hero);

        assert!(army.is_hero_led());
        assert_eq!(army.color(), Color::Green);

        drop(hero);
        assert!(army.commander().is_none());
        assert_eq!(army.color(), Color::Blue);
    }

    #[test]
    fn test_commander_raises_strength() {
        let plain = army_of(&[(Monster::Archer, 10), (Monster::Pikeman, 5)]);
        let hero = Arc::new(
            Commander::hero(CommanderId(1), "Ector", Color::Blue)
                .with_stats(4, 4, 1, 1)
                .with_archery(Archery::Advanced),
        );
        let led = plain.clone().with_commander(&hero);

        assert!(led.strength() > plain.strength());
        assert_eq!(led.troops_strength(), plain.troops_strength());
    }

    #[test]
    fn test_empty_army_has_no_strength() {
        let hero = Arc::new(
            Commander::hero(CommanderId(1), "Ector", Color::Blue)
                .with_stats(1, 1, 5, 5)
                .with_spell_book(),
        );
        let army = Army::new(Color::Blue).with_commander(&hero);
        assert_eq!(army.strength(), 0.0);
    }

    #[test]
    fn test_single_race_morale_bonus() {
        let army = army_of(&[(Monster::Peasant, 5), (Monster::Archer, 5)]);
        assert_eq!(army.morale(), 1);

        let single = army_of(&[(Monster::Peasant, 5)]);
        assert_eq!(single.morale(), 0);
    }

    #[test]
    fn test_race_count_penalties() {
        let two = army_of(&[(Monster::Peasant, 5), (Monster::Goblin, 5)]);
        assert_eq!(two.morale(), 0);

        let three = army_of(&[(Monster::Peasant, 5), (Monster::Goblin, 5), (Monster::Sprite, 5)]);
        assert_eq!(three.morale(), -1);

        let five = army_of(&[
            (Monster::Peasant, 5),
            (Monster::Goblin, 5),
            (Monster::Sprite, 5),
            (Monster::Centaur, 5),
            (Monster::Halfling, 5),
        ]);
        assert_eq!(five.morale(), -3);
    }

    #[test]
    fn test_undead_morale() {
        let undead = army_of(&[(Monster::Skeleton, 5), (Monster::Ghost, 2)]);
        assert_eq!(undead.morale(), 0);

        let mixed = army_of(&[(Monster::Skeleton, 5), (Monster::Peasant, 5)]);
        assert_eq!(mixed.morale(), -1);
    }

    #[test]
    fn test_each_luck_point_adds_four_percent() {
        let plain_hero = Arc::new(
            Commander::hero(CommanderId(1), "Dain", Color::Blue).with_stats(0, 0, 0, 0),
        );
        let lucky_hero = Arc::new(
            Commander::hero(CommanderId(2), "Lucky", Color::Blue)
                .with_stats(0, 0, 0, 0)
                .with_morale_luck(0, 1),
        );
        let troops = army_of(&[(Monster::Pikeman, 10)]);
        let plain = troops.clone().with_commander(&plain_hero);
        let lucky = troops.with_commander(&lucky_hero);

        assert_eq!(plain.luck(), 0);
        assert_eq!(lucky.luck(), 1);
        assert!((lucky.strength() / plain.strength() - 1.04).abs() < 1e-9);
    }

    #[test]
    fn test_morale_is_clamped() {
        let hero = Arc::new(
            Commander::hero(CommanderId(1), "Tsabu", Color::Red)
                .with_morale_luck(3, 5)
                .with_artifact(Artifact::MedalOfHonor),
        );
        let army = army_of(&[(Monster::Peasant, 5), (Monster::Archer, 5)]).with_commander(&hero);
        assert_eq!(army.morale(), 3);
        assert_eq!(army.luck(), 3);
    }

    #[test]
    fn test_martyr_arm_lowers_morale() {
        let hero = Arc::new(
            Commander::hero(CommanderId(1), "Dawn", Color::Red)
                .with_artifact(Artifact::ArmOfTheMartyr),
        );
        let army = army_of(&[(Monster::Peasant, 5), (Monster::Archer, 5)]).with_commander(&hero);
        assert_eq!(army.morale(), 0);
    }

    #[test]
    fn test_luck_without_commander_is_normal() {
        assert_eq!(army_of(&[(Monster::Peasant, 1)]).luck(), 0);
    }

    #[test]
    fn test_join_strongest_from_army_protects_hero() {
        let config = ArmyConfig::default();
        let hero = Arc::new(Commander::hero(CommanderId(2), "Crag", Color::Blue));
        let mut garrison = Army::new(Color::Blue);
        let mut guest = army_of(&[(Monster::Ogre, 8)]).with_commander(&hero);

        let outcome = garrison.join_strongest_from_army(&mut guest, &config).unwrap();

        assert!(matches!(outcome, MergeOutcome::GiverKept(_)));
        assert!(!guest.is_empty());
        assert_eq!(
            garrison.troops().count_of(Monster::Ogre) + guest.troops().count_of(Monster::Ogre),
            8
        );
    }

    #[test]
    fn test_stranding_a_hero_is_rolled_back() {
        let config = ArmyConfig::default();
        let hero = Arc::new(Commander::hero(CommanderId(3), "Lorelei", Color::Blue));
        let mut garrison = Army::new(Color::Blue);
        let mut guest = army_of(&[(Monster::Titan, 1)]).with_commander(&hero);

        let result = garrison.join_strongest_from_army(&mut guest, &config);

        assert!(matches!(result, Err(ArmyError::Infeasible(_))));
        assert!(garrison.is_empty());
        assert_eq!(guest.troops().count_of(Monster::Titan), 1);
    }

    #[test]
    fn test_arrangement_is_deterministic() {
        let config = ArmyConfig::default();
        let seed = BattleSeed::new(0xDEADBEEF, LocationId(1234));

        let a = Army::neutral(Monster::Wolf, 23, seed, true, &config).unwrap();
        let b = Army::neutral(Monster::Wolf, 23, seed, true, &config).unwrap();

        assert_eq!(a.troops(), b.troops());
        assert_eq!(a.troops().total_units(), 23);
    }

    #[test]
    fn test_archers_use_five_stacks() {
        let config = ArmyConfig::default();
        let army = Army::neutral(
            Monster::Archer,
            17,
            BattleSeed::new(7, LocationId(3)),
            false,
            &config,
        )
        .unwrap();

        let counts: Vec<u32> = army.troops().iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![4, 4, 3, 3, 3]);
    }

    #[test]
    fn test_small_counts_are_centred() {
        let config = ArmyConfig::default();
        let army = Army::neutral(
            Monster::Peasant,
            1,
            BattleSeed::new(1, LocationId(1)),
            true,
            &config,
        )
        .unwrap();

        assert_eq!(army.troops().occupied_slot_count(), 1);
        assert_eq!(army.troops().get(2).unwrap(), Some(Troop::new(Monster::Peasant, 1)));
    }

    #[test]
    fn test_upgrade_chance_extremes() {
        let seed = BattleSeed::new(99, LocationId(5));
        let always = ArmyConfig {
            battle_upgrade_chance: 1.0,
            ..ArmyConfig::default()
        };
        let never = ArmyConfig {
            battle_upgrade_chance: 0.0,
            ..ArmyConfig::default()
        };

        let upgraded = Army::neutral(Monster::Pikeman, 30, seed, true, &always).unwrap();
        assert_eq!(
            upgraded.troops().get(2).unwrap().map(|t| t.monster),
            Some(Monster::VeteranPikeman)
        );

        let plain = Army::neutral(Monster::Pikeman, 30, seed, true, &never).unwrap();
        assert_eq!(plain.troops().count_of(Monster::VeteranPikeman), 0);

        let disallowed = Army::neutral(Monster::Pikeman, 30, seed, false, &always).unwrap();
        assert_eq!(disallowed.troops().count_of(Monster::VeteranPikeman), 0);
    }

    #[test]
    fn test_optimize_order_without_archers_centres_strongest() {
        let mut army = army_of(&[
            (Monster::Peasant, 1),
            (Monster::Champion, 4),
            (Monster::Pikeman, 2),
        ]);
        army.optimize_troops_order();

        // Champions are the fastest melee stack
        assert_eq!(army.troops().get(2).unwrap().map(|t| t.monster), Some(Monster::Champion));
        assert_eq!(army.troops().get(1).unwrap().map(|t| t.monster), Some(Monster::Pikeman));
        assert_eq!(army.troops().get(3).unwrap().map(|t| t.monster), Some(Monster::Peasant));
    }

    #[test]
    fn test_optimize_order_puts_single_archer_first() {
        let mut army = army_of(&[(Monster::Pikeman, 2), (Monster::Archer, 6)]);
        army.optimize_troops_order();
        assert_eq!(army.troops().get(0).unwrap().map(|t| t.monster), Some(Monster::Archer));
        assert_eq!(army.troops().get(2).unwrap().map(|t| t.monster), Some(Monster::Pikeman));
    }

    #[test]
    fn test_optimize_order_keeps_every_slot() {
        let mut army = army_of(&[
            (Monster::Archer, 3),
            (Monster::Peasant, 7),
            (Monster::Ranger, 2),
            (Monster::Cavalry, 4),
            (Monster::Pikeman, 5),
        ]);
        let before = army.troops().tally();
        army.optimize_troops_order();

        assert_eq!(army.troops().capacity(), ARMY_SLOTS);
        assert_eq!(army.troops().occupied_slot_count(), 5);
        assert_eq!(army.troops().tally(), before);
        // Two shooters take both flanks
        assert!(army.troops().get(0).unwrap().unwrap().monster.is_archer());
        assert!(army.troops().get(4).unwrap().unwrap().monster.is_archer());
    }

    #[test]
    fn test_is_stronger_than() {
        let strong = army_of(&[(Monster::BlackDragon, 5)]);
        let weak = army_of(&[(Monster::Peasant, 10)]);
        let empty = Army::new(Color::Red);

        assert!(strong.is_stronger_than(&weak));
        assert!(!weak.is_stronger_than(&strong));
        assert!(weak.is_stronger_than(&empty));
        assert!(!empty.is_stronger_than(&weak));
    }

    #[test]
    fn test_record_rejects_slot_count_mismatch() {
        let mut record = army_of(&[(Monster::Peasant, 3)]).to_record();
        record.slot_count = 4;
        record.slots.pop();

        assert!(matches!(
            Army::from_record(&record),
            Err(ArmyError::CorruptRecord(_))
        ));
    }

    #[test]
    fn test_record_rejects_bad_pairs() {
        let mut record = army_of(&[(Monster::Peasant, 3)]).to_record();
        record.slots[1] = (0, 5);
        assert!(Army::from_record(&record).is_err());

        record.slots[1] = (4, 0);
        assert!(Army::from_record(&record).is_err());

        record.slots[1] = (400, 2);
        assert!(Army::from_record(&record).is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_formation() {
        let mut army = army_of(&[(Monster::Griffin, 6), (Monster::Hydra, 2)]);
        army.set_spread_formation(true);

        let loaded = Army::load_json(&army.to_json().unwrap()).unwrap();
        assert_eq!(loaded.troops(), army.troops());
        assert!(loaded.spread_formation());
        assert_eq!(loaded.color(), Color::Blue);
    }

    #[test]
    fn test_load_json_surfaces_corruption() {
        let json = r#"{"slot_count":6,"slots":[[1,1],[0,0],[0,0],[0,0],[0,0],[0,0]],"spread_formation":false,"color":"Red"}"#;
        assert!(matches!(
            Army::load_json(json),
            Err(StewardError::Army(ArmyError::CorruptRecord(_)))
        ));
    }
}
