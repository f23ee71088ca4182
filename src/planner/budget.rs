//! Kingdom resource budget
//!
//! Marks which resources the kingdom is short of for its next buildings and
//! which ones its best creatures keep consuming. Hero and trade logic read
//! the flags to decide what to pick up or keep.

use serde::{Deserialize, Serialize};

use super::build_order::race_build_order;
use crate::economy::{Funds, Resource};
use crate::realm::{dwelling_monster, BuildStatus, Building, Settlement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub resource: Resource,
    /// Largest shortfall for any building blocked only by this resource
    pub missing: i32,
    pub priority: bool,
    /// Spent every week on the best creature of some castle
    pub recurring_cost: bool,
}

impl BudgetEntry {
    fn new(resource: Resource) -> Self {
        Self {
            resource,
            missing: 0,
            priority: false,
            recurring_cost: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KingdomBudget {
    entries: Vec<BudgetEntry>,
}

impl Default for KingdomBudget {
    fn default() -> Self {
        Self {
            entries: Resource::ALL.into_iter().map(BudgetEntry::new).collect(),
        }
    }
}

impl KingdomBudget {
    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn entry(&self, resource: Resource) -> Option<&BudgetEntry> {
        self.entries.iter().find(|e| e.resource == resource)
    }

    pub fn is_priority(&self, resource: Resource) -> bool {
        self.entry(resource).is_some_and(|e| e.priority)
    }

    pub fn is_recurring(&self, resource: Resource) -> bool {
        self.entry(resource).is_some_and(|e| e.recurring_cost)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Recompute the budget from the castles' race lists
    pub fn update<'a, S, I>(&mut self, funds: &Funds, settlements: I)
    where
        S: Settlement + 'a,
        I: IntoIterator<Item = &'a S>,
    {
        self.reset();
        let mut requirements = Funds::default();

        for settlement in settlements {
            let race = settlement.race();
            for order in race_build_order(race) {
                if settlement.build_status(order.building, funds) == BuildStatus::LackResources {
                    let missing = settlement.building_cost(order.building) - *funds;
                    requirements = requirements.max(&missing);
                }
            }

            if settlement.is_built(Building::Dwelling6) {
                let best = dwelling_monster(race, Building::Dwelling6)
                    .map(|monster| monster.upgrade().unwrap_or(monster));
                if let Some(monster) = best {
                    let cost = monster.cost();
                    for entry in &mut self.entries {
                        if cost[entry.resource] > 0 {
                            entry.recurring_cost = true;
                        }
                    }
                }
            }
        }

        for entry in &mut self.entries {
            entry.missing = requirements[entry.resource];
            if entry.missing > 0 {
                entry.priority = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Color, Race, TownId};
    use crate::realm::Town;

    #[test]
    fn test_shortfall_flags_priority() {
        let town = Town::castle(TownId(1), "Keep", Race::Knight, Color::Blue);
        let funds = Funds::gold(100);
        let mut budget = KingdomBudget::default();
        budget.update(&funds, [&town]);

        assert!(budget.is_priority(Resource::Gold));
        // The Statue alone is short of 5 ore
        assert!(budget.entry(Resource::Ore).unwrap().missing >= 5);
        assert!(!budget.is_priority(Resource::Gems));
    }

    #[test]
    fn test_recurring_cost_of_best_creature() {
        let town = Town::castle(TownId(1), "Keep", Race::Warlock, Color::Red)
            .with_buildings(&[Building::Dwelling6]);
        let mut budget = KingdomBudget::default();
        budget.update(&Funds::default(), [&town]);

        assert!(budget.is_recurring(Resource::Gold));
        assert!(budget.is_recurring(Resource::Sulfur));
        assert!(!budget.is_recurring(Resource::Wood));
    }

    #[test]
    fn test_rich_kingdom_has_no_priority() {
        let town = Town::castle(TownId(1), "Keep", Race::Knight, Color::Blue);
        let funds = Funds::new(1_000_000, 1000, 1000, 1000, 1000, 1000, 1000);
        let mut budget = KingdomBudget::default();
        budget.update(&funds, [&town]);
        assert!(budget.entries().iter().all(|e| !e.priority));
    }
}
