//! In-memory kingdom: treasury, towns and heroes of one player color

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::building::Building;
use super::settlement::{Settlement, Treasury};
use super::town::{Town, TownSnapshot};
use crate::army::Commander;
use crate::core::error::{Result, StewardError};
use crate::core::types::{Color, TownId};
use crate::economy::Funds;

/// Funds of a kingdom plus the figures the planner reads next to them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffers {
    color: Color,
    funds: Funds,
    marketplaces: u32,
    hero_count: usize,
}

impl Coffers {
    pub fn new(color: Color, funds: Funds) -> Self {
        Self {
            color,
            funds,
            marketplaces: 0,
            hero_count: 0,
        }
    }

    pub fn with_marketplaces(mut self, marketplaces: u32) -> Self {
        self.marketplaces = marketplaces;
        self
    }

    pub fn with_heroes(mut self, hero_count: usize) -> Self {
        self.hero_count = hero_count;
        self
    }

    pub fn deposit(&mut self, income: &Funds) {
        self.funds += *income;
    }
}

impl Treasury for Coffers {
    fn funds(&self) -> Funds {
        self.funds
    }

    fn pay(&mut self, cost: &Funds) -> bool {
        if !self.funds.can_afford(cost) {
            warn!("{} cannot pay {} from {}", self.color.name(), cost, self.funds);
            return false;
        }
        self.funds -= *cost;
        true
    }

    fn apply_trade(&mut self, delta: &Funds) {
        self.funds -= *delta;
        debug_assert!(self.funds.is_non_negative());
    }

    fn market_capacity(&self) -> u32 {
        self.marketplaces
    }

    fn hero_count(&self) -> usize {
        self.hero_count
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[derive(Debug, Clone)]
pub struct Kingdom {
    color: Color,
    coffers: Coffers,
    towns: Vec<Town>,
    heroes: Vec<Arc<Commander>>,
}

impl Kingdom {
    pub fn new(color: Color, funds: Funds) -> Self {
        Self {
            color,
            coffers: Coffers::new(color, funds),
            towns: Vec::new(),
            heroes: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn funds(&self) -> Funds {
        self.coffers.funds()
    }

    pub fn coffers(&self) -> &Coffers {
        &self.coffers
    }

    pub fn add_town(&mut self, town: Town) {
        self.towns.push(town);
        self.refresh_coffers();
    }

    pub fn add_hero(&mut self, hero: Arc<Commander>) {
        self.heroes.push(hero);
        self.refresh_coffers();
    }

    pub fn heroes(&self) -> &[Arc<Commander>] {
        &self.heroes
    }

    pub fn list_settlements(&self) -> impl Iterator<Item = &Town> + '_ {
        self.towns.iter()
    }

    pub fn settlement_count(&self) -> usize {
        self.towns.len()
    }

    pub fn town(&self, id: TownId) -> Result<&Town> {
        self.towns
            .iter()
            .find(|town| town.id == id)
            .ok_or(StewardError::SettlementNotFound(id))
    }

    pub fn town_index(&self, id: TownId) -> Option<usize> {
        self.towns.iter().position(|town| town.id == id)
    }

    /// Number of built marketplaces across all towns
    pub fn marketplace_count(&self) -> u32 {
        self.towns
            .iter()
            .filter(|town| town.is_built(Building::Marketplace))
            .count() as u32
    }

    fn refresh_coffers(&mut self) {
        self.coffers.marketplaces = self.marketplace_count();
        self.coffers.hero_count = self.heroes.len();
    }

    /// A town and the treasury paying for it, borrowed together
    pub fn split_mut(&mut self, index: usize) -> Option<(&mut Town, &mut Coffers)> {
        self.refresh_coffers();
        let town = self.towns.get_mut(index)?;
        Some((town, &mut self.coffers))
    }

    /// Collect daily income and reset the one-building-per-day limit
    pub fn new_day(&mut self) {
        let income = self
            .towns
            .iter()
            .fold(Funds::default(), |total, town| total + town.daily_income());
        self.coffers.deposit(&income);
        for town in &mut self.towns {
            town.new_day();
        }
        self.refresh_coffers();
        debug!("{} collected {}", self.color.name(), income);
    }

    pub fn new_week(&mut self) {
        for town in &mut self.towns {
            town.new_week();
        }
    }

    pub fn snapshot(&self) -> KingdomSnapshot {
        KingdomSnapshot {
            color: self.color,
            funds: self.funds(),
            towns: self.towns.iter().map(Town::snapshot).collect(),
        }
    }
}

/// Serializable end-of-turn view of a kingdom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KingdomSnapshot {
    pub color: Color,
    pub funds: Funds,
    pub towns: Vec<TownSnapshot>,
}

impl KingdomSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Race;

    #[test]
    fn test_pay_refuses_overdraft() {
        let mut coffers = Coffers::new(Color::Blue, Funds::gold(100));
        assert!(!coffers.pay(&Funds::gold(150)));
        assert!(coffers.pay(&Funds::gold(60)));
        assert_eq!(coffers.funds(), Funds::gold(40));
    }

    #[test]
    fn test_apply_trade() {
        let mut coffers = Coffers::new(Color::Blue, Funds::new(0, 0, 0, 40, 0, 0, 0));
        coffers.apply_trade(&Funds::new(-1000, 0, 0, 40, 0, 0, 0));
        assert_eq!(coffers.funds(), Funds::gold(1000));
    }

    #[test]
    fn test_daily_income() {
        let mut kingdom = Kingdom::new(Color::Red, Funds::default());
        kingdom.add_town(
            Town::castle(TownId(1), "Keep", Race::Barbarian, Color::Red)
                .with_buildings(&[Building::Statue]),
        );
        kingdom.add_town(Town::new(TownId(2), "Hamlet", Race::Barbarian, Color::Red));
        kingdom.new_day();
        assert_eq!(kingdom.funds(), Funds::gold(1500));
    }

    #[test]
    fn test_split_mut_counts_marketplaces() {
        let mut kingdom = Kingdom::new(Color::Red, Funds::default());
        kingdom.add_town(
            Town::castle(TownId(1), "Keep", Race::Barbarian, Color::Red)
                .with_buildings(&[Building::Marketplace]),
        );
        kingdom.add_hero(Arc::new(Commander::hero(
            crate::core::types::CommanderId(1),
            "Thundax",
            Color::Red,
        )));

        let (town, coffers) = kingdom.split_mut(0).unwrap();
        assert_eq!(town.name(), "Keep");
        assert_eq!(coffers.market_capacity(), 1);
        assert_eq!(coffers.hero_count(), 1);
        assert!(kingdom.split_mut(5).is_none());
    }

    #[test]
    fn test_missing_town_is_error() {
        let kingdom = Kingdom::new(Color::Red, Funds::default());
        assert!(matches!(
            kingdom.town(TownId(9)),
            Err(StewardError::SettlementNotFound(TownId(9)))
        ));
    }

    #[test]
    fn test_snapshot_json() {
        let mut kingdom = Kingdom::new(Color::Blue, Funds::gold(7500));
        kingdom.add_town(Town::castle(TownId(1), "Keep", Race::Knight, Color::Blue));

        let json = kingdom.snapshot().to_json().unwrap();
        let restored = KingdomSnapshot::from_json(&json).unwrap();
        assert_eq!(restored, kingdom.snapshot());
        assert_eq!(restored.towns[0].buildings.len(), 2);
    }
}
