//! Garrison and guest-hero army management
//!
//! Recruits from the castle's dwellings, frees slots when the armies are
//! full and moves the strongest stacks to a visiting hero.

use tracing::{debug, info, trace, warn};

use super::action::CastleAction;
use crate::army::{Army, Troop};
use crate::core::config::{ArmyConfig, PlannerConfig};
use crate::core::types::Race;
use crate::realm::{
    dwelling_monster, monster_dwelling, Building, BuildingSet, RegionStats, Settlement, Treasury,
};

/// Dwellings from best to worst; plain dwellings stay usable once upgraded
const CASTLE_DWELLINGS: [Building; 12] = [
    Building::Upgrade7,
    Building::Upgrade6,
    Building::Dwelling6,
    Building::Upgrade5,
    Building::Dwelling5,
    Building::Upgrade4,
    Building::Dwelling4,
    Building::Upgrade3,
    Building::Dwelling3,
    Building::Upgrade2,
    Building::Dwelling2,
    Building::Dwelling1,
];

/// Pay for every upgrade the castle offers for the army's stacks
fn upgrade_army(
    army: &mut Army,
    race: Race,
    buildings: BuildingSet,
    treasury: &mut dyn Treasury,
) -> Vec<CastleAction> {
    let mut actions = Vec::new();
    let stacks: Vec<(usize, Troop)> = army.troops().iter_indexed().collect();

    for (index, troop) in stacks {
        if troop.monster.race() != race {
            continue;
        }
        let Some(upgraded) = troop.upgraded() else {
            continue;
        };
        let offered = monster_dwelling(upgraded.monster).is_some_and(|d| buildings.contains(d));
        if !offered {
            continue;
        }
        let Some(unit_cost) = troop.monster.upgrade_cost() else {
            continue;
        };

        let cost = unit_cost * troop.count as i32;
        if !treasury.can_afford(&cost) || !treasury.pay(&cost) {
            continue;
        }
        if army.troops_mut().set(index, upgraded).is_ok() {
            debug!("Upgraded {} to {}", troop, upgraded.monster);
            actions.push(CastleAction::Upgraded {
                monster: upgraded.monster,
                count: upgraded.count,
            });
        }
    }
    actions
}

/// Upgrade the garrison and the guest army where the castle allows it
pub fn upgrade_troops<S>(settlement: &mut S, treasury: &mut dyn Treasury) -> Vec<CastleAction>
where
    S: Settlement + ?Sized,
{
    let race = settlement.race();
    let buildings = settlement.buildings();
    let (garrison, guest) = settlement.armies_mut();

    let mut actions = upgrade_army(garrison, race, buildings, treasury);
    if let Some(guest) = guest {
        actions.extend(upgrade_army(guest, race, buildings, treasury));
    }
    actions
}

/// Hire as many of the best creatures as the treasury allows
pub fn recruit_best_available<S>(settlement: &mut S, treasury: &mut dyn Treasury) -> Vec<CastleAction>
where
    S: Settlement + ?Sized,
{
    let mut actions = Vec::new();
    for dwelling in CASTLE_DWELLINGS {
        if let Some(troop) = recruitable(settlement, treasury, dwelling) {
            if settlement.recruit(troop, treasury) {
                actions.push(recruited(troop));
            }
        }
    }
    actions
}

fn recruitable<S>(settlement: &S, treasury: &dyn Treasury, dwelling: Building) -> Option<Troop>
where
    S: Settlement + ?Sized,
{
    if !settlement.is_built(dwelling) {
        return None;
    }
    let monster = dwelling_monster(settlement.race(), dwelling)?;
    let count = settlement.recruit_limit(monster, &treasury.funds());
    (count > 0).then(|| Troop::new(monster, count))
}

fn recruited(troop: Troop) -> CastleAction {
    CastleAction::Recruited {
        monster: troop.monster,
        count: troop.count,
    }
}

fn dismissed(troop: Troop) -> CastleAction {
    CastleAction::Dismissed {
        monster: troop.monster,
        count: troop.count,
    }
}

/// Move one garrison stack into the guest army to free a garrison slot
fn transfer_to_guest(garrison: &mut Army, guest: &mut Army) -> Option<Troop> {
    let stacks: Vec<(usize, Troop)> = garrison.troops().iter_indexed().collect();
    for (index, troop) in stacks {
        match guest.troops_mut().try_join(troop) {
            Ok(()) => {
                garrison.troops_mut().clear(index).ok()?;
                return Some(troop);
            }
            Err(err) => trace!("Guest army refused a stack: {}", err),
        }
    }
    None
}

/// Dismiss the weakest stack of both armies if it is weaker than `recruit`
fn dismiss_weakest(garrison: &mut Army, guest: Option<&mut Army>, recruit: &Troop) -> Option<Troop> {
    let weakest_of = |army: &Army| {
        army.troops()
            .weakest_index()
            .and_then(|index| army.troops().get(index).ok().flatten().map(|t| (index, t)))
    };

    let garrison_weakest = weakest_of(garrison);
    let guest_weakest = guest.as_deref().and_then(|army| weakest_of(army));

    let (army, index, troop) = match (guest, guest_weakest, garrison_weakest) {
        (Some(guest), Some((gi, gt)), Some((_, wt))) if gt.strength() < wt.strength() => {
            (guest, gi, gt)
        }
        (_, _, Some((wi, wt))) => (garrison, wi, wt),
        (Some(guest), Some((gi, gt)), None) => (guest, gi, gt),
        _ => return None,
    };

    if troop.strength() > recruit.strength() {
        debug!("Skipping {}: weakest stack {} is stronger", recruit, troop);
        return None;
    }
    army.troops_mut().clear(index).ok()?;
    Some(troop)
}

/// Slot of the guest army that may be left behind in an empty garrison
///
/// The second value tells whether only half of the stack goes.
fn stack_for_garrison(guest: &Army, fighter: bool, config: &PlannerConfig) -> Option<(usize, bool)> {
    let troops = guest.troops();
    if troops.occupied_slot_count() < 2 {
        return None;
    }

    let ratio = if fighter {
        config.fighter_significance_ratio
    } else {
        config.support_significance_ratio
    };
    let threshold = troops.strength() / ratio;
    let strength_at = |index: usize| {
        troops
            .get(index)
            .ok()
            .flatten()
            .map_or(f64::INFINITY, |t| t.strength())
    };

    if let Some(slowest) = troops.slowest_index() {
        if strength_at(slowest) <= threshold {
            return Some((slowest, false));
        }
    }
    if fighter {
        return None;
    }
    troops
        .weakest_index()
        .filter(|&weakest| strength_at(weakest) <= threshold)
        .map(|weakest| (weakest, true))
}

/// Recruit, free slots and hand the best troops to a visiting hero
pub fn reinforce_castle<S>(
    settlement: &mut S,
    treasury: &mut dyn Treasury,
    region: RegionStats,
    army_config: &ArmyConfig,
    config: &PlannerConfig,
) -> Vec<CastleAction>
where
    S: Settlement + ?Sized,
{
    let mut actions = upgrade_troops(settlement, treasury);
    {
        let (garrison, guest) = settlement.armies_mut();
        garrison.troops_mut().merge_same_type();
        if let Some(guest) = guest {
            guest.troops_mut().merge_same_type();
        }
    }

    for dwelling in CASTLE_DWELLINGS {
        let Some(troop) = recruitable(settlement, treasury, dwelling) else {
            continue;
        };
        if settlement.recruit(troop, treasury) {
            info!("{} hires {}", settlement.name(), troop);
            actions.push(recruited(troop));
            continue;
        }

        let (garrison, guest) = settlement.armies_mut();
        let freed = match guest {
            Some(guest) => match transfer_to_guest(garrison, guest) {
                Some(moved) => Some(CastleAction::TransferredToHero {
                    monster: moved.monster,
                    count: moved.count,
                }),
                None => dismiss_weakest(garrison, Some(guest), &troop).map(dismissed),
            },
            None => dismiss_weakest(garrison, None, &troop).map(dismissed),
        };
        let Some(freed) = freed else {
            continue;
        };
        debug!("{} {} to hire {}", settlement.name(), freed, troop);
        actions.push(freed);

        if settlement.recruit(troop, treasury) {
            actions.push(recruited(troop));
        } else {
            warn!("{} freed a slot but still cannot hire {}", settlement.name(), troop);
        }
    }

    let is_castle = settlement.is_castle();
    let fighter = settlement.guest_hero_role().is_some_and(|role| role.is_fighter());
    let name = settlement.name().to_string();
    let (garrison, guest) = settlement.armies_mut();

    if let Some(guest) = guest {
        let before = garrison.troops().total_units();
        match guest.join_strongest_from_army(garrison, army_config) {
            Ok(_) if garrison.troops().total_units() != before => {
                actions.push(CastleAction::Reinforced)
            }
            Ok(_) => {}
            Err(err) => warn!("{} could not reinforce its guest: {}", name, err),
        }

        if is_castle && region.safety_factor <= config.safe_region_threshold && garrison.is_empty() {
            if let Some((index, half)) = stack_for_garrison(guest, fighter, config) {
                if let Ok(Some(stack)) = guest.troops().get(index) {
                    let count = if half { stack.count / 2 } else { stack.count };
                    if count > 0 && garrison.troops_mut().join(stack.monster, count, true) {
                        let remaining = stack.count - count;
                        let updated = if remaining == 0 {
                            guest.troops_mut().clear(index).map(|_| ())
                        } else {
                            guest
                                .troops_mut()
                                .set(index, Troop::new(stack.monster, remaining))
                        };
                        if updated.is_ok() {
                            actions.push(CastleAction::ReturnedToGarrison {
                                monster: stack.monster,
                                count,
                            });
                        }
                    }
                }
            }
        }
        guest.optimize_troops_order();
    }
    garrison.optimize_troops_order();

    actions
}

/// Before a siege the guest hero takes the strongest garrison stacks
///
/// Returns whether the hero received anything. The order is only optimized
/// then, so the defenders stand where the attacker saw them otherwise.
pub fn castle_pre_battle<S>(settlement: &mut S, army_config: &ArmyConfig) -> bool
where
    S: Settlement + ?Sized,
{
    let (garrison, guest) = settlement.armies_mut();
    let Some(guest) = guest else {
        return false;
    };
    if garrison.is_empty() {
        return false;
    }

    let before = garrison.troops().total_units();
    if let Err(err) = guest.join_strongest_from_army(garrison, army_config) {
        warn!("Pre-battle merge failed: {}", err);
        return false;
    }
    let received = garrison.troops().total_units() != before;
    if received {
        guest.optimize_troops_order();
    }
    received
}
