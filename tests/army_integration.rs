//! Army composition integration tests
//!
//! Covers the troop container, strongest-merge, battle arrangement and the
//! persisted army record end to end.

use std::sync::Arc;

use kingdom_steward::army::*;
use kingdom_steward::core::error::StewardError;
use kingdom_steward::core::types::{Color, CommanderId, LocationId};
use kingdom_steward::core::ArmyConfig;

fn army_of(color: Color, stacks: &[(Monster, u32)]) -> Army {
    let mut army = Army::new(color);
    for (index, &(monster, count)) in stacks.iter().enumerate() {
        army.troops_mut()
            .set(index, Troop::new(monster, count))
            .unwrap();
    }
    army
}

fn counts(army: &Army) -> Vec<u32> {
    army.troops()
        .slots()
        .iter()
        .map(|slot| slot.map_or(0, |t| t.count))
        .collect()
}

// ============================================================================
// Troop container
// ============================================================================

#[test]
fn test_joining_same_type_stacks_up() {
    let mut troops = Troops::default();
    assert!(troops.join(Monster::Peasant, 10, false));
    assert!(troops.join(Monster::Peasant, 15, false));

    assert_eq!(troops.occupied_slot_count(), 1);
    assert_eq!(troops.get(0).unwrap(), Some(Troop::new(Monster::Peasant, 25)));
}

#[test]
fn test_full_container_refuses_new_type() {
    let mut troops = Troops::default();
    for monster in [
        Monster::Peasant,
        Monster::Archer,
        Monster::Pikeman,
        Monster::Swordsman,
        Monster::Cavalry,
    ] {
        assert!(troops.join(monster, 5, false));
    }

    assert!(troops.is_full());
    assert!(!troops.can_join(Monster::Paladin));
    assert!(!troops.join(Monster::Paladin, 1, false));
    // Existing types still stack
    assert!(troops.join(Monster::Archer, 1, false));
    assert_eq!(troops.count_of(Monster::Archer), 6);
}

#[test]
fn test_merging_weakest_duplicate_frees_a_slot() {
    let mut troops = Troops::default();
    troops.set(0, Troop::new(Monster::Paladin, 5)).unwrap();
    troops.set(1, Troop::new(Monster::Peasant, 10)).unwrap();
    troops.set(2, Troop::new(Monster::Cavalry, 8)).unwrap();
    troops.set(3, Troop::new(Monster::Peasant, 7)).unwrap();
    troops.set(4, Troop::new(Monster::Cavalry, 2)).unwrap();

    assert!(troops.merge_weakest_if_full());
    assert_eq!(troops.free_slot_count(), 1);
    assert_eq!(troops.get(1).unwrap(), Some(Troop::new(Monster::Peasant, 17)));
    assert_eq!(troops.get(3).unwrap(), None);
    // The stronger duplicate is untouched
    assert_eq!(troops.count_of(Monster::Cavalry), 10);
    assert_eq!(troops.occupied_slot_count(), 4);
}

#[test]
fn test_distinct_full_container_cannot_free_a_slot() {
    let mut troops = Troops::from_stacks([
        Troop::new(Monster::Peasant, 1),
        Troop::new(Monster::Archer, 1),
        Troop::new(Monster::Pikeman, 1),
        Troop::new(Monster::Swordsman, 1),
        Troop::new(Monster::Cavalry, 1),
    ]);
    let before = troops.clone();
    assert!(!troops.merge_weakest_if_full());
    assert_eq!(troops, before);
}

#[test]
fn test_out_of_range_slot_is_an_error() {
    let mut troops = Troops::default();
    assert!(troops.get(5).is_err());
    assert!(troops.set(7, Troop::new(Monster::Peasant, 1)).is_err());
    assert!(troops.clear(9).is_err());
}

// ============================================================================
// Strength, morale and luck
// ============================================================================

#[test]
fn test_empty_army_has_no_strength() {
    let army = Army::new(Color::Red);
    assert_eq!(army.strength(), 0.0);
    assert_eq!(army.morale(), 0);
    assert_eq!(army.luck(), 0);
}

#[test]
fn test_strength_grows_with_units() {
    let small = army_of(Color::Red, &[(Monster::Swordsman, 5)]);
    let large = army_of(Color::Red, &[(Monster::Swordsman, 50)]);
    assert!(large.strength() > small.strength());
    assert!(large.is_stronger_than(&small));
    assert!(!small.is_stronger_than(&large));
}

#[test]
fn test_single_race_mix_raises_morale() {
    let knights = army_of(Color::Blue, &[(Monster::Peasant, 10), (Monster::Archer, 5)]);
    assert_eq!(knights.morale(), 1);

    let motley = army_of(
        Color::Blue,
        &[
            (Monster::Peasant, 10),
            (Monster::Goblin, 10),
            (Monster::Sprite, 10),
        ],
    );
    assert_eq!(motley.morale(), -1);
}

#[test]
fn test_undead_army_has_neutral_morale() {
    let undead = army_of(
        Color::Purple,
        &[
            (Monster::Skeleton, 10),
            (Monster::Zombie, 10),
            (Monster::Goblin, 1),
        ],
    );
    // A living stack among undead lowers morale
    assert!(undead.morale() < 0);

    let pure = army_of(Color::Purple, &[(Monster::Skeleton, 10), (Monster::Zombie, 10)]);
    assert_eq!(pure.morale(), 0);
}

// ============================================================================
// Strongest-merge
// ============================================================================

#[test]
fn test_hero_led_giver_is_never_emptied() {
    let config = ArmyConfig::default();
    let hero = Arc::new(Commander::hero(CommanderId(1), "Gerwulf", Color::Blue));

    let mut receiver = army_of(Color::Blue, &[(Monster::Peasant, 1)]);
    let mut giver = Army::new(Color::Blue).with_commander(&hero);
    giver
        .troops_mut()
        .set(1, Troop::new(Monster::Paladin, 20))
        .unwrap();

    let outcome = receiver.join_strongest_from_army(&mut giver, &config).unwrap();

    assert_eq!(outcome, MergeOutcome::GiverKept(Troop::new(Monster::Peasant, 1)));
    assert_eq!(receiver.troops().count_of(Monster::Paladin), 20);
    assert_eq!(giver.troops().count_of(Monster::Peasant), 1);
}

#[test]
fn test_unled_giver_may_be_emptied() {
    let config = ArmyConfig::default();
    let mut receiver = army_of(Color::Blue, &[(Monster::Peasant, 1)]);
    let mut giver = Army::new(Color::Blue);
    giver
        .troops_mut()
        .set(1, Troop::new(Monster::Paladin, 20))
        .unwrap();

    let outcome = receiver.join_strongest_from_army(&mut giver, &config).unwrap();
    assert_eq!(outcome, MergeOutcome::Merged);
    assert!(giver.is_empty());
    assert_eq!(receiver.troops().total_units(), 21);
}

#[test]
fn test_strongest_stacks_end_up_with_receiver() {
    let config = ArmyConfig::default();
    let mut receiver = army_of(
        Color::Green,
        &[
            (Monster::Peasant, 5),
            (Monster::Goblin, 5),
            (Monster::Sprite, 5),
            (Monster::Halfling, 5),
            (Monster::Skeleton, 5),
        ],
    );
    let mut giver = army_of(Color::Green, &[(Monster::BlackDragon, 3)]);

    receiver.join_strongest_from_army(&mut giver, &config).unwrap();

    assert!(receiver.troops().has_monster(Monster::BlackDragon));
    assert_eq!(receiver.troops().occupied_slot_count(), 5);
    assert_eq!(giver.troops().occupied_slot_count(), 1);
    assert_eq!(
        receiver.troops().total_units() + giver.troops().total_units(),
        28
    );
}

// ============================================================================
// Battle arrangement
// ============================================================================

#[test]
fn test_archers_split_across_all_slots() {
    let seed = BattleSeed::new(42, LocationId(7));
    let army = Army::neutral(Monster::Archer, 17, seed, false, &ArmyConfig::default()).unwrap();
    assert_eq!(counts(&army), vec![4, 4, 3, 3, 3]);
}

#[test]
fn test_ranged_always_uses_five_stacks() {
    let config = ArmyConfig::default();
    for location in 0..50 {
        let seed = BattleSeed::new(1234, LocationId(location));
        let army = Army::neutral(Monster::Ranger, 40, seed, false, &config).unwrap();
        assert_eq!(army.troops().occupied_slot_count(), 5);
    }
}

#[test]
fn test_melee_uses_three_to_five_centred_stacks() {
    let config = ArmyConfig::default();
    for location in 0..50 {
        let seed = BattleSeed::new(99, LocationId(location));
        let army = Army::neutral(Monster::Swordsman, 30, seed, false, &config).unwrap();
        let stacks = army.troops().occupied_slot_count();
        assert!((3..=5).contains(&stacks));
        // The centre slot is always occupied
        assert!(army.troops().get(2).unwrap().is_some());
        assert_eq!(army.troops().total_units(), 30);
    }
}

#[test]
fn test_few_units_never_create_empty_stacks() {
    let seed = BattleSeed::new(5, LocationId(5));
    let army = Army::neutral(Monster::Archer, 2, seed, false, &ArmyConfig::default()).unwrap();
    assert_eq!(army.troops().occupied_slot_count(), 2);
    assert!(army.troops().iter().all(|t| t.count == 1));
}

#[test]
fn test_arrangement_is_deterministic() {
    let config = ArmyConfig::default();
    let seed = BattleSeed::new(0xDEAD_BEEF, LocationId(311));
    let first = Army::neutral(Monster::Orc, 64, seed, true, &config).unwrap();
    let second = Army::neutral(Monster::Orc, 64, seed, true, &config).unwrap();
    assert_eq!(first.to_record(), second.to_record());
}

#[test]
fn test_zero_count_arranges_nothing() {
    let seed = BattleSeed::new(1, LocationId(1));
    let army = Army::neutral(Monster::Orc, 0, seed, true, &ArmyConfig::default()).unwrap();
    assert!(army.is_empty());
}

#[test]
fn test_optimized_order_puts_shooters_on_the_flanks() {
    let mut army = army_of(
        Color::Blue,
        &[
            (Monster::Peasant, 10),
            (Monster::Archer, 10),
            (Monster::Cavalry, 10),
            (Monster::Ranger, 10),
        ],
    );
    army.optimize_troops_order();

    let first = army.troops().get(0).unwrap().unwrap();
    let last = army.troops().get(4).unwrap().unwrap();
    assert!(first.monster.is_archer());
    assert!(last.monster.is_archer());
    assert_eq!(army.troops().total_units(), 40);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_json_round_trip_keeps_slots() {
    let army = army_of(Color::Orange, &[(Monster::Troll, 4), (Monster::Ogre, 9)]);
    let json = army.to_json().unwrap();
    let loaded = Army::load_json(&json).unwrap();

    assert_eq!(loaded.to_record(), army.to_record());
    assert!(loaded.commander().is_none());
}

#[test]
fn test_record_with_wrong_slot_count_is_rejected() {
    let army = army_of(Color::Orange, &[(Monster::Troll, 4)]);
    let mut record = army.to_record();
    record.slot_count = 6;
    record.slots.push((0, 0));

    assert!(matches!(
        Army::from_record(&record),
        Err(ArmyError::CorruptRecord(_))
    ));
}

#[test]
fn test_json_with_missing_slots_is_rejected() {
    let army = army_of(Color::Orange, &[(Monster::Troll, 4)]);
    let mut record = army.to_record();
    record.slots.truncate(3);
    let json = serde_json::to_string(&record).unwrap();

    assert!(matches!(
        Army::load_json(&json),
        Err(StewardError::Army(ArmyError::CorruptRecord(_)))
    ));
}

#[test]
fn test_half_empty_slot_is_rejected() {
    let mut record = Army::new(Color::Red).to_record();
    record.slots[2] = (Monster::Peasant.id(), 0);
    assert!(Army::from_record(&record).is_err());
}
