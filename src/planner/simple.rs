//! Castle routine of the simple personality
//!
//! A fixed sequence of build attempts without marketplace trading. Lower
//! dwellings wait for a randomized multiple of their cost; the capital never
//! waits.

use tracing::{debug, warn};

use super::action::CastleAction;
use super::context::TurnContext;
use super::development::{build_if_available, build_if_enough_funds};
use super::reinforce::recruit_best_available;
use crate::army::HeroRole;
use crate::core::config::{ArmyConfig, PlannerConfig};
use crate::core::types::Race;
use crate::realm::{Building, Settlement, Treasury};

/// Day before which a plain town always tries to become a castle
const EARLY_CASTLE_DAY: u32 = 3;

/// A building attempt of the simple routine
#[derive(Debug, Clone, Copy)]
enum Step {
    Available(Building),
    /// Funds must reach a multiplier drawn from `min..=max`
    Patient(Building, u32, u32),
    /// Funds must reach a fixed multiplier
    Reserve(Building, u32),
}

fn race_steps(race: Race) -> &'static [Step] {
    use Building::*;
    use Step::*;

    match race {
        Race::Knight => &[Patient(Tavern, 2, 3), Patient(Well, 3, 4)],
        Race::Sorceress => &[
            Patient(MageGuild1, 2, 3),
            Patient(Well, 3, 4),
            Patient(Tavern, 3, 4),
        ],
        Race::Necromancer => &[
            Patient(MageGuild2, 2, 3),
            Patient(MageGuild1, 2, 3),
            Patient(ThievesGuild, 3, 4),
        ],
        Race::Wizard => &[
            Patient(Spec, 2, 3),
            Patient(MageGuild1, 2, 3),
            Patient(Well, 3, 4),
        ],
        _ => &[],
    }
}

fn development_steps(settlement_race: Race, last_day: bool) -> Vec<Step> {
    use Building::*;
    use Step::*;

    let mut steps = Vec::new();
    if last_day {
        steps.push(Available(Well));
    }
    steps.push(Available(Statue));
    if settlement_race == Race::Warlock {
        steps.push(Available(Spec));
    }
    steps.extend([
        Available(Upgrade7),
        Available(Upgrade6),
        Available(Dwelling6),
        Available(Upgrade5),
        Available(Dwelling5),
        Available(Upgrade4),
        Available(Dwelling4),
        Patient(Upgrade3, 2, 3),
        Patient(Dwelling3, 2, 3),
        Patient(Upgrade2, 3, 4),
        Patient(Dwelling2, 3, 4),
        Patient(Dwelling1, 4, 5),
    ]);
    steps.extend_from_slice(race_steps(settlement_race));
    if last_day {
        steps.push(Reserve(Wel2, 5));
    }
    steps.extend([
        Available(MageGuild1),
        Reserve(LeftTurret, 5),
        Reserve(RightTurret, 5),
        Reserve(Moat, 10),
        Reserve(Well, 5),
        Reserve(MageGuild2, 5),
        Reserve(MageGuild3, 5),
        Reserve(MageGuild4, 5),
        Reserve(MageGuild5, 5),
        Reserve(Spec, 10),
    ]);
    steps
}

/// One day of simple castle development
///
/// Recruits everything on the last day of the week.
pub fn castle_development<S>(
    settlement: &mut S,
    treasury: &mut dyn Treasury,
    context: &mut TurnContext,
    config: &PlannerConfig,
) -> Vec<CastleAction>
where
    S: Settlement + ?Sized,
{
    let mut actions = Vec::new();
    let last_day = context.is_last_day_of_week();

    if settlement.is_castle() {
        let capital = settlement.is_capital();
        for step in development_steps(settlement.race(), last_day) {
            let built = match step {
                Step::Available(building) => {
                    build_if_available(settlement, treasury, building).then_some(building)
                }
                Step::Patient(building, min, max) => {
                    let multiplier = context.resource_multiplier(capital, min, max);
                    build_if_enough_funds(
                        settlement,
                        treasury,
                        building,
                        multiplier,
                        config.max_funds_multiplier,
                    )
                    .then_some(building)
                }
                Step::Reserve(building, multiplier) => build_if_enough_funds(
                    settlement,
                    treasury,
                    building,
                    multiplier,
                    config.max_funds_multiplier,
                )
                .then_some(building),
            };
            if let Some(building) = built {
                actions.push(CastleAction::Built(building));
                break;
            }
        }
    } else {
        // Plain towns become castles early, in the capital or when rich
        let cost = settlement.building_cost(Building::Castle);
        let wealthy = treasury
            .funds()
            .can_afford(&(cost * context.roll(5, 10) as i32));
        if (settlement.is_capital() || context.day < EARLY_CASTLE_DAY || wealthy)
            && settlement.buy_building(Building::Castle, treasury)
        {
            actions.push(CastleAction::Built(Building::Castle));
        }
    }

    if last_day {
        actions.extend(recruit_best_available(settlement, treasury));
    }
    debug!("{} simple development: {:?}", settlement.name(), actions);
    actions
}

/// Split the armies between a visiting hero and the garrison
///
/// Hunters and fighters take the strongest garrison stacks. Scouts and
/// couriers travel light and leave their strongest stacks behind.
pub fn outfit_guest_hero<S>(settlement: &mut S, army_config: &ArmyConfig) -> Option<CastleAction>
where
    S: Settlement + ?Sized,
{
    let role = settlement.guest_hero_role()?;
    let name = settlement.name().to_string();
    let (garrison, guest) = settlement.armies_mut();
    let guest = guest?;

    let garrison_before = garrison.troops().tally();
    let action = match role {
        HeroRole::Scout | HeroRole::Courier => {
            guest.keep_only_weakest_troops(garrison);
            CastleAction::LeftWithGarrison
        }
        HeroRole::Hunter | HeroRole::Fighter | HeroRole::Champion => {
            if let Err(err) = guest.join_strongest_from_army(garrison, army_config) {
                warn!("{} could not outfit its guest: {}", name, err);
                return None;
            }
            CastleAction::Reinforced
        }
    };

    if garrison.troops().tally() == garrison_before {
        return None;
    }
    guest.optimize_troops_order();
    garrison.optimize_troops_order();
    debug!("{} {}", name, action);
    Some(action)
}

/// Recruit everything, then fortify if there is an army to defend with
pub fn castle_defense<S>(settlement: &mut S, treasury: &mut dyn Treasury) -> Vec<CastleAction>
where
    S: Settlement + ?Sized,
{
    let mut actions = recruit_best_available(settlement, treasury);

    let defended = settlement
        .guest_army()
        .unwrap_or_else(|| settlement.garrison())
        .troops()
        .total_units()
        > 0;
    if !settlement.is_castle() || !defended {
        return actions;
    }

    let mut candidates = vec![Building::LeftTurret, Building::RightTurret, Building::Moat];
    if settlement.guest_army().is_none() {
        candidates.push(Building::Captain);
    }
    match settlement.race() {
        Race::Knight => candidates.extend([Building::Spec, Building::Tavern]),
        Race::Warlock | Race::Wizard => candidates.push(Building::Spec),
        _ => {}
    }

    if let Some(building) = candidates
        .into_iter()
        .find(|&building| build_if_available(&mut *settlement, &mut *treasury, building))
    {
        actions.push(CastleAction::Built(building));
    }
    actions
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::army::{Army, Commander, Monster, Troop};
    use crate::core::types::{Color, CommanderId, TownId};
    use crate::economy::Funds;
    use crate::realm::{Coffers, GuestHero, Town};

    #[test]
    fn test_capital_builds_dwelling_without_reserve() {
        let mut town = Town::castle(TownId(1), "Capital", Race::Barbarian, Color::Red)
            .as_capital()
            .with_buildings(&[Building::Statue]);
        // Exactly the price of the second dwelling
        let mut coffers = Coffers::new(Color::Red, Funds::new(800, 5, 0, 0, 0, 0, 0));
        let mut context = TurnContext::new(2, 11);

        let actions =
            castle_development(&mut town, &mut coffers, &mut context, &PlannerConfig::default());
        assert_eq!(actions, vec![CastleAction::Built(Building::Dwelling2)]);
    }

    #[test]
    fn test_non_capital_waits_for_reserve() {
        let mut town = Town::castle(TownId(1), "Outpost", Race::Barbarian, Color::Red)
            .with_buildings(&[Building::Statue]);
        let mut coffers = Coffers::new(Color::Red, Funds::new(800, 5, 0, 0, 0, 0, 0));
        let mut context = TurnContext::new(2, 11);

        let actions =
            castle_development(&mut town, &mut coffers, &mut context, &PlannerConfig::default());
        assert!(actions.is_empty());
        assert_eq!(coffers.funds(), Funds::new(800, 5, 0, 0, 0, 0, 0));
    }

    #[test]
    fn test_early_town_buys_castle() {
        let mut town = Town::new(TownId(2), "Hamlet", Race::Wizard, Color::Green);
        let mut coffers = Coffers::new(Color::Green, Funds::new(5000, 20, 0, 20, 0, 0, 0));
        let mut context = TurnContext::new(1, 3);

        let actions =
            castle_development(&mut town, &mut coffers, &mut context, &PlannerConfig::default());
        assert_eq!(actions, vec![CastleAction::Built(Building::Castle)]);
        assert!(town.is_castle());
    }

    fn keep_with_guest(role: HeroRole, guest_stack: Troop, garrison_stack: Troop) -> Town {
        let hero = Arc::new(
            Commander::hero(CommanderId(5), "Ivan", Color::Blue).with_role(role),
        );
        let mut guest = Army::new(Color::Blue);
        guest.troops_mut().join_troop(guest_stack);
        let mut garrison = Army::new(Color::Blue);
        garrison.troops_mut().join_troop(garrison_stack);

        Town::castle(TownId(1), "Keep", Race::Knight, Color::Blue)
            .with_garrison(garrison)
            .with_guest(GuestHero::new(hero, guest))
    }

    #[test]
    fn test_scout_leaves_strongest_stacks_behind() {
        let mut town = keep_with_guest(
            HeroRole::Scout,
            Troop::new(Monster::Paladin, 10),
            Troop::new(Monster::Peasant, 20),
        );

        let action = outfit_guest_hero(&mut town, &ArmyConfig::default());

        assert_eq!(action, Some(CastleAction::LeftWithGarrison));
        assert_eq!(town.garrison().troops().count_of(Monster::Paladin), 10);
        let guest = town.guest_army().unwrap().troops();
        assert_eq!(guest.count_of(Monster::Paladin), 0);
        // The hero keeps half of the weakest stack rather than travel alone
        assert_eq!(guest.count_of(Monster::Peasant), 10);
        assert_eq!(town.garrison().troops().count_of(Monster::Peasant), 10);
    }

    #[test]
    fn test_hunter_takes_strongest_stacks() {
        let mut town = keep_with_guest(
            HeroRole::Hunter,
            Troop::new(Monster::Peasant, 5),
            Troop::new(Monster::Swordsman, 10),
        );

        let action = outfit_guest_hero(&mut town, &ArmyConfig::default());

        assert_eq!(action, Some(CastleAction::Reinforced));
        assert_eq!(town.guest_army().unwrap().troops().count_of(Monster::Swordsman), 10);
    }

    #[test]
    fn test_no_guest_no_outfitting() {
        let mut town = Town::castle(TownId(1), "Keep", Race::Knight, Color::Blue);
        assert_eq!(outfit_guest_hero(&mut town, &ArmyConfig::default()), None);
    }

    #[test]
    fn test_defense_needs_an_army() {
        let mut town = Town::castle(TownId(1), "Keep", Race::Knight, Color::Blue);
        let mut coffers = Coffers::new(Color::Blue, Funds::new(10000, 20, 0, 20, 0, 0, 0));
        assert!(castle_defense(&mut town, &mut coffers).is_empty());

        let mut town = town.with_population([10, 0, 0, 0, 0, 0]);
        let actions = castle_defense(&mut town, &mut coffers);
        assert_eq!(
            actions,
            vec![
                CastleAction::Recruited {
                    monster: crate::army::Monster::Peasant,
                    count: 10
                },
                CastleAction::Built(Building::LeftTurret),
            ]
        );
    }
}
