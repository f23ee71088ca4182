//! Construction and recruitment planner
//!
//! Architecture: closed personality enum + free functions
//! - `Personality` picks the castle routine with a plain `match`
//! - `TurnContext` carries the day, region stats and the seeded AI RNG
//! - Settlements and treasuries are reached only through the realm traits

pub mod action;
pub mod budget;
pub mod build_order;
pub mod context;
pub mod development;
pub mod personality;
pub mod reinforce;
pub mod simple;

pub use action::{CastleAction, TurnReport};
pub use budget::{BudgetEntry, KingdomBudget};
pub use build_order::{income_structures, race_build_order, BuildOrder};
pub use context::TurnContext;
pub use personality::Personality;

use tracing::{debug, info};

use crate::core::config::StewardConfig;
use crate::realm::{Kingdom, Settlement, Treasury};

/// Castle AI of one computer kingdom
#[derive(Debug, Clone)]
pub struct Planner {
    config: StewardConfig,
    budget: KingdomBudget,
}

impl Planner {
    pub fn new(config: StewardConfig) -> Self {
        Self {
            config,
            budget: KingdomBudget::default(),
        }
    }

    pub fn config(&self) -> &StewardConfig {
        &self.config
    }

    pub fn personality(&self) -> Personality {
        self.config.personality
    }

    pub fn budget(&self) -> &KingdomBudget {
        &self.budget
    }

    /// One settlement's turn
    ///
    /// A defensive turn hires first and only fortifies when there is an
    /// army to defend with. Otherwise the castle develops.
    pub fn castle_turn<S>(
        &self,
        settlement: &mut S,
        treasury: &mut dyn Treasury,
        context: &mut TurnContext,
        defensive: bool,
    ) -> TurnReport
    where
        S: Settlement + ?Sized,
    {
        let mut report = TurnReport::new(settlement.name(), context.day);
        let planner = &self.config.planner;

        match (self.config.personality, defensive) {
            (Personality::Passive, _) => {}
            (Personality::Normal, true) => {
                report
                    .actions
                    .extend(self.reinforce_castle(settlement, treasury, context));
                let defended = settlement
                    .guest_army()
                    .unwrap_or_else(|| settlement.garrison())
                    .troops()
                    .total_units()
                    > 0;
                if defended {
                    report.record(development::build_defenses(settlement, treasury, planner));
                }
            }
            (Personality::Normal, false) => {
                report.record(self.castle_development(settlement, treasury, context));
            }
            (Personality::Simple, true) => {
                report
                    .actions
                    .extend(simple::castle_defense(settlement, treasury));
            }
            (Personality::Simple, false) => {
                report.actions.extend(simple::castle_development(
                    settlement, treasury, context, planner,
                ));
                report.record(simple::outfit_guest_hero(settlement, &self.config.army));
            }
        }

        for action in &report.actions {
            info!("Day {}: {} {}", report.day, report.settlement, action);
        }
        report
    }

    /// Buy at most one building for the normal personality
    pub fn castle_development<S>(
        &self,
        settlement: &mut S,
        treasury: &mut dyn Treasury,
        context: &TurnContext,
    ) -> Option<CastleAction>
    where
        S: Settlement + ?Sized,
    {
        development::castle_development(settlement, treasury, context, &self.config.planner)
    }

    pub fn reinforce_castle<S>(
        &self,
        settlement: &mut S,
        treasury: &mut dyn Treasury,
        context: &TurnContext,
    ) -> Vec<CastleAction>
    where
        S: Settlement + ?Sized,
    {
        let region = context.region_or(settlement.region());
        reinforce::reinforce_castle(
            settlement,
            treasury,
            region,
            &self.config.army,
            &self.config.planner,
        )
    }

    /// Returns whether the guest hero received garrison troops
    pub fn castle_pre_battle<S>(&self, settlement: &mut S) -> bool
    where
        S: Settlement + ?Sized,
    {
        reinforce::castle_pre_battle(settlement, &self.config.army)
    }

    pub fn upgrade_troops<S>(&self, settlement: &mut S, treasury: &mut dyn Treasury) -> Vec<CastleAction>
    where
        S: Settlement + ?Sized,
    {
        reinforce::upgrade_troops(settlement, treasury)
    }

    pub fn update_kingdom_budget(&mut self, kingdom: &Kingdom) {
        self.budget.update(&kingdom.funds(), kingdom.list_settlements());
        debug!(
            "{} budget priorities: {:?}",
            kingdom.color().name(),
            self.budget
                .entries()
                .iter()
                .filter(|e| e.priority)
                .map(|e| e.resource)
                .collect::<Vec<_>>()
        );
    }

    /// Run every settlement of a kingdom for the context's day
    ///
    /// Settlements listed in `threatened` play defensively. On the last day
    /// of a week the normal personality also reinforces every castle.
    pub fn kingdom_turn(
        &mut self,
        kingdom: &mut Kingdom,
        context: &mut TurnContext,
        threatened: &[crate::core::types::TownId],
    ) -> Vec<TurnReport> {
        self.update_kingdom_budget(kingdom);

        let mut reports = Vec::with_capacity(kingdom.settlement_count());
        for index in 0..kingdom.settlement_count() {
            let Some((town, coffers)) = kingdom.split_mut(index) else {
                break;
            };
            let defensive = threatened.contains(&town.id);
            let mut report = self.castle_turn(town, coffers, context, defensive);

            if !defensive
                && self.config.personality == Personality::Normal
                && context.is_last_day_of_week()
            {
                report
                    .actions
                    .extend(self.reinforce_castle(town, coffers, context));
            }
            reports.push(report);
        }
        reports
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(StewardConfig::default())
    }
}
