//! Resource-exchange solver
//!
//! Finds a sequence of single marketplace exchanges after which a kingdom can
//! make a payment, or reports that no such sequence exists.

use tracing::{debug, trace};

use super::funds::{Funds, Resource};
use super::market::{trade_rate, TradeRate};
use crate::realm::Treasury;

/// Compute the marketplace transaction that lets `current` pay `target`
///
/// Returns the delta to subtract from `current`: positive components are
/// resources given up, negative components are resources gained. Returns a
/// zero delta when no trading is needed and `None` when the payment cannot
/// be reached even by trading.
///
/// Each deficient resource is filled one exchange at a time. Every exchange
/// draws on the surplus resource that could yield the most of the deficient
/// one at the current rate; ties go to the earlier resource in canonical
/// order. Only surplus is ever traded, so no resource that was covered
/// becomes deficient.
pub fn solve(current: &Funds, target: &Funds, market_capacity: u32) -> Option<Funds> {
    if current.can_afford(target) {
        return Some(Funds::default());
    }

    let mut balance = *current - *target;
    let mut delta = Funds::default();

    for wanted in Resource::ALL {
        while balance[wanted] < 0 {
            let Some((source, rate)) = best_source(&balance, wanted, market_capacity) else {
                debug!(
                    "No surplus can cover {} missing {} (markets: {})",
                    -balance[wanted],
                    wanted.name(),
                    market_capacity
                );
                return None;
            };

            match rate {
                TradeRate::Yields(gold) => {
                    balance[source] -= 1;
                    balance[wanted] += gold;
                    delta[source] += 1;
                    delta[wanted] -= gold;
                }
                TradeRate::Costs(units) => {
                    balance[source] -= units;
                    balance[wanted] += 1;
                    delta[source] += units;
                    delta[wanted] -= 1;
                }
                TradeRate::Unavailable => return None,
            }
        }
    }

    debug_assert!((*current - delta).is_non_negative());
    debug_assert!((*current - delta).can_afford(target));
    trace!("Marketplace transaction for {}: {}", target, delta);
    Some(delta)
}

/// Surplus resource with the highest potential yield toward `wanted`
fn best_source(balance: &Funds, wanted: Resource, markets: u32) -> Option<(Resource, TradeRate)> {
    let mut best: Option<(i64, Resource, TradeRate)> = None;

    for source in balance.positive_resources().filter(|&r| r != wanted) {
        let rate = trade_rate(source, wanted, markets);
        let potential = rate.obtainable(balance[source]);
        if potential == 0 {
            continue;
        }
        if best.map_or(true, |(top, _, _)| potential > top) {
            best = Some((potential, source, rate));
        }
    }

    best.map(|(_, source, rate)| (source, rate))
}

/// Trade at the marketplace so that `treasury` can afford `target`
///
/// Funds are left untouched when the payment cannot be reached.
pub fn trade_at_marketplace<T: Treasury + ?Sized>(treasury: &mut T, target: &Funds) -> bool {
    let Some(delta) = solve(&treasury.funds(), target, treasury.market_capacity()) else {
        return false;
    };

    if !delta.is_zero() {
        debug!("Trading {} to afford {}", delta, target);
        treasury.apply_trade(&delta);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trade_needed() {
        let funds = Funds::new(2000, 10, 0, 0, 0, 0, 0);
        assert_eq!(solve(&funds, &Funds::gold(1500), 1), Some(Funds::default()));
    }

    #[test]
    fn test_ore_supply_too_small_for_gold() {
        // 5 ore sells for 125 gold at one marketplace
        let funds = Funds::new(0, 0, 0, 5, 0, 0, 0);
        assert_eq!(solve(&funds, &Funds::gold(1000), 1), None);
    }

    #[test]
    fn test_ore_sold_for_gold() {
        let funds = Funds::new(0, 0, 0, 40, 0, 0, 0);
        let delta = solve(&funds, &Funds::gold(1000), 1).unwrap();

        assert_eq!(delta.ore, 40);
        assert_eq!(delta.gold, -1000);
        assert!((funds - delta).can_afford(&Funds::gold(1000)));
    }

    #[test]
    fn test_no_marketplace_means_no_trade() {
        let funds = Funds::new(0, 0, 0, 100, 0, 0, 0);
        assert_eq!(solve(&funds, &Funds::gold(100), 0), None);
    }

    #[test]
    fn test_prefers_highest_yield_source() {
        // Gems sell for twice as much gold per unit as wood
        let funds = Funds::new(0, 10, 0, 0, 0, 0, 10);
        let delta = solve(&funds, &Funds::gold(100), 1).unwrap();
        assert_eq!(delta.gems, 2);
        assert_eq!(delta.wood, 0);
    }

    #[test]
    fn test_buys_rare_resource_with_gold() {
        let funds = Funds::gold(6000);
        let delta = solve(&funds, &Funds::new(500, 0, 0, 0, 0, 1, 0), 1).unwrap();
        assert_eq!(delta.gold, 5000);
        assert_eq!(delta.crystal, -1);
        let after = funds - delta;
        assert!(after.is_non_negative());
        assert!(after.can_afford(&Funds::new(500, 0, 0, 0, 0, 1, 0)));
    }

    #[test]
    fn test_reserved_resources_are_not_traded() {
        // The wood is needed for the payment itself, only the ore is surplus
        let funds = Funds::new(0, 20, 0, 30, 0, 0, 0);
        let target = Funds::new(500, 20, 0, 0, 0, 0, 0);
        let delta = solve(&funds, &target, 1).unwrap();
        assert_eq!(delta.wood, 0);
        assert_eq!(delta.ore, 20);
    }
}
