//! Castle construction for the normal personality
//!
//! One call builds at most one building, which matches the one building per
//! day rule of settlements. A boat may be bought on the way without ending
//! the evaluation.

use tracing::{debug, info};

use super::action::CastleAction;
use super::build_order::{
    income_structures, race_build_order, BuildOrder, DEFENSIVE, MAGE_GUILD_UPGRADES,
    SUPPORTING_DEFENSIVE,
};
use super::context::TurnContext;
use crate::core::config::PlannerConfig;
use crate::economy::{solve, trade_at_marketplace};
use crate::realm::{BuildStatus, Building, Settlement, Treasury, BOAT_COST};

/// Build if affordable now or after trading at the marketplace
pub fn build_if_possible<S>(settlement: &mut S, treasury: &mut dyn Treasury, building: Building) -> bool
where
    S: Settlement + ?Sized,
{
    match settlement.build_status(building, &treasury.funds()) {
        BuildStatus::Allowed => settlement.buy_building(building, treasury),
        BuildStatus::LackResources => {
            let cost = settlement.building_cost(building);
            if !trade_at_marketplace(treasury, &cost) {
                return false;
            }
            info!("{} traded for {}", settlement.name(), building);
            settlement.buy_building(building, treasury)
        }
        _ => false,
    }
}

/// Build without trading, if it is not built yet
pub fn build_if_available<S>(settlement: &mut S, treasury: &mut dyn Treasury, building: Building) -> bool
where
    S: Settlement + ?Sized,
{
    !settlement.is_built(building) && settlement.buy_building(building, treasury)
}

/// Build only while holding `multiplier` times the cost
///
/// Multipliers outside `1..=max_multiplier` never build.
pub fn build_if_enough_funds<S>(
    settlement: &mut S,
    treasury: &mut dyn Treasury,
    building: Building,
    multiplier: u32,
    max_multiplier: u32,
) -> bool
where
    S: Settlement + ?Sized,
{
    if multiplier < 1 || multiplier > max_multiplier {
        return false;
    }
    let reserve = settlement.building_cost(building) * multiplier as i32;
    treasury.funds().can_afford(&reserve) && build_if_available(settlement, treasury, building)
}

/// Walk a build list and stop at the first building bought
pub fn build_from_list<S>(
    settlement: &mut S,
    treasury: &mut dyn Treasury,
    list: &[BuildOrder],
    multiplier: u32,
    config: &PlannerConfig,
) -> Option<Building>
where
    S: Settlement + ?Sized,
{
    for order in list {
        let factor = order.weight.saturating_mul(multiplier);
        let done = if factor == 1 {
            build_if_possible(settlement, treasury, order.building)
        } else {
            build_if_enough_funds(
                settlement,
                treasury,
                order.building,
                factor,
                config.max_funds_multiplier,
            )
        };
        if done {
            return Some(order.building);
        }
    }
    None
}

/// Whether buying a boat here is worth it, trading for it if needed
fn prepare_boat_purchase<S>(
    settlement: &S,
    treasury: &mut dyn Treasury,
    island: bool,
    config: &PlannerConfig,
) -> bool
where
    S: Settlement + ?Sized,
{
    if !settlement.allow_buy_boat() || treasury.hero_count() == 0 {
        return false;
    }

    let reserve_factor = if island {
        config.boat_reserve_island
    } else {
        config.boat_reserve_mainland
    };
    let reserve = BOAT_COST * reserve_factor;
    if treasury.can_afford(&reserve) {
        return true;
    }
    if solve(&treasury.funds(), &reserve, treasury.market_capacity()).is_none() {
        return false;
    }
    treasury.can_afford(&BOAT_COST) || trade_at_marketplace(treasury, &BOAT_COST)
}

/// Develop a castle for one day
///
/// Returns the building bought, or `BoughtBoat` if only a boat was bought.
pub fn castle_development<S>(
    settlement: &mut S,
    treasury: &mut dyn Treasury,
    context: &TurnContext,
    config: &PlannerConfig,
) -> Option<CastleAction>
where
    S: Settlement + ?Sized,
{
    let built = |building: Building| Some(CastleAction::Built(building));

    if settlement.is_castle()
        && !settlement.is_built(Building::Well)
        && context.day > config.well_unlock_day
    {
        // Nothing else gets built while the Well is missing
        return build_if_possible(settlement, treasury, Building::Well)
            .then_some(CastleAction::Built(Building::Well));
    }

    let race = settlement.race();
    if let Some(building) =
        build_from_list(settlement, treasury, income_structures(race), 1, config)
    {
        return built(building);
    }

    let region = context.region_or(settlement.region());
    let neighbours = region.neighbour_regions;
    let island = neighbours < config.island_region_threshold;

    // +1 as an island may have no neighbours at all
    let shipyard_factor = u32::try_from(neighbours + 1).unwrap_or(u32::MAX);
    if island
        && build_if_enough_funds(
            settlement,
            treasury,
            Building::Shipyard,
            shipyard_factor,
            config.max_funds_multiplier,
        )
    {
        return built(Building::Shipyard);
    }

    if let Some(building) = build_from_list(settlement, treasury, race_build_order(race), 1, config)
    {
        return built(building);
    }

    if settlement.mage_guild_level() < region.spell_level && region.safety_factor > 0 {
        if let Some(building) =
            build_from_list(settlement, treasury, MAGE_GUILD_UPGRADES, 1, config)
        {
            return built(building);
        }
    }

    let bought_boat = prepare_boat_purchase(settlement, treasury, island, config)
        && settlement.buy_boat(treasury);
    if bought_boat {
        debug!("{} keeps developing after buying a boat", settlement.name());
    }

    let multiplier = config.defensive_multiplier;
    for list in [DEFENSIVE, SUPPORTING_DEFENSIVE] {
        if let Some(building) = build_from_list(settlement, treasury, list, multiplier, config) {
            return built(building);
        }
    }
    bought_boat.then_some(CastleAction::BoughtBoat)
}

/// Defensive construction while the castle is threatened
pub fn build_defenses<S>(
    settlement: &mut S,
    treasury: &mut dyn Treasury,
    config: &PlannerConfig,
) -> Option<CastleAction>
where
    S: Settlement + ?Sized,
{
    [DEFENSIVE, SUPPORTING_DEFENSIVE]
        .into_iter()
        .find_map(|list| build_from_list(&mut *settlement, &mut *treasury, list, 1, config))
        .map(CastleAction::Built)
}
