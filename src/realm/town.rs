//! In-memory town with the usual construction and recruitment rules

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::building::{
    dwelling_monster, is_available, monster_dwelling, requirements, Building, BuildingSet,
    BOAT_COST,
};
use super::settlement::{BuildStatus, RegionStats, Settlement, Treasury};
use crate::army::{Army, ArmyRecord, Commander, HeroRole, Monster, Troop};
use crate::core::types::{Color, CommanderId, Race, TownId};
use crate::economy::Funds;

/// Weekly growth added to every built dwelling by the Well
const WELL_GROWTH: u32 = 2;

/// Weekly growth added to the level one dwelling by the growth building
const WEL2_GROWTH: u32 = 8;

/// Daily gold of a castle
const CASTLE_INCOME: i32 = 1000;

/// Daily gold of a town without a castle
const TOWN_INCOME: i32 = 250;

/// Extra daily gold of a statue
const STATUE_INCOME: i32 = 250;

/// A hero visiting the town
#[derive(Debug, Clone)]
pub struct GuestHero {
    pub hero: Arc<Commander>,
    pub army: Army,
}

impl GuestHero {
    /// Bind `army` to `hero` and wrap both
    pub fn new(hero: Arc<Commander>, mut army: Army) -> Self {
        army.set_commander(&hero);
        Self { hero, army }
    }
}

#[derive(Debug, Clone)]
pub struct Town {
    pub id: TownId,
    name: String,
    race: Race,
    color: Color,
    buildings: BuildingSet,
    capital: bool,
    region: RegionStats,
    near_sea: bool,
    boat_present: bool,
    built_today: bool,
    /// Creatures waiting per dwelling level
    population: [u32; 6],
    garrison: Army,
    captain: Option<Arc<Commander>>,
    guest: Option<GuestHero>,
}

impl Town {
    pub fn new(id: TownId, name: &str, race: Race, color: Color) -> Self {
        Self {
            id,
            name: name.to_string(),
            race,
            color,
            buildings: BuildingSet::default(),
            capital: false,
            region: RegionStats::default(),
            near_sea: false,
            boat_present: false,
            built_today: false,
            population: [0; 6],
            garrison: Army::new(color),
            captain: None,
            guest: None,
        }
    }

    /// A castle with a first dwelling, as towns usually start
    pub fn castle(id: TownId, name: &str, race: Race, color: Color) -> Self {
        Self::new(id, name, race, color)
            .with_buildings(&[Building::Castle, Building::Dwelling1])
    }

    pub fn with_buildings(mut self, buildings: &[Building]) -> Self {
        for &building in buildings {
            self.buildings.insert(building);
            if building == Building::Captain {
                self.hire_captain();
            }
        }
        self
    }

    pub fn with_region(mut self, region: RegionStats) -> Self {
        self.region = region;
        self
    }

    pub fn as_capital(mut self) -> Self {
        self.capital = true;
        self
    }

    pub fn near_sea(mut self) -> Self {
        self.near_sea = true;
        self
    }

    pub fn with_population(mut self, population: [u32; 6]) -> Self {
        self.population = population;
        self
    }

    pub fn with_garrison(mut self, garrison: Army) -> Self {
        self.garrison = garrison;
        if let Some(captain) = &self.captain {
            self.garrison.set_commander(captain);
        }
        self
    }

    pub fn with_guest(mut self, guest: GuestHero) -> Self {
        self.guest = Some(guest);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn population(&self) -> [u32; 6] {
        self.population
    }

    pub fn has_boat(&self) -> bool {
        self.boat_present
    }

    pub fn captain(&self) -> Option<&Arc<Commander>> {
        self.captain.as_ref()
    }

    pub fn guest(&self) -> Option<&GuestHero> {
        self.guest.as_ref()
    }

    /// Send the visiting hero away with its army
    pub fn release_guest(&mut self) -> Option<GuestHero> {
        self.guest.take()
    }

    /// Drop the captain; the garrison's handle goes dead with it
    pub fn dismiss_captain(&mut self) {
        self.captain = None;
    }

    fn hire_captain(&mut self) {
        let captain = Arc::new(Commander::captain(
            CommanderId(1000 + self.id.0),
            self.color,
        ));
        self.garrison.set_commander(&captain);
        self.captain = Some(captain);
    }

    /// Start a new day; one building may be bought per day
    pub fn new_day(&mut self) {
        self.built_today = false;
    }

    /// Weekly creature growth in built dwellings
    pub fn new_week(&mut self) {
        for (index, dwelling) in Building::DWELLINGS.into_iter().enumerate() {
            if !self.is_built(dwelling) {
                continue;
            }
            let Some(monster) = dwelling_monster(self.race, dwelling) else {
                continue;
            };
            let mut growth = monster.growth();
            if self.is_built(Building::Well) {
                growth += WELL_GROWTH;
            }
            if index == 0 && self.is_built(Building::Wel2) {
                growth += WEL2_GROWTH;
            }
            self.population[index] += growth;
        }
        debug!("{} population after growth: {:?}", self.name, self.population);
    }

    /// Gold produced each day
    pub fn daily_income(&self) -> Funds {
        let mut gold = if self.is_castle() {
            CASTLE_INCOME
        } else {
            TOWN_INCOME
        };
        if self.is_built(Building::Statue) {
            gold += STATUE_INCOME;
        }
        Funds::gold(gold)
    }

    /// Best dwelling currently recruiting a creature level
    pub fn actual_dwelling(&self, level: usize) -> Option<Building> {
        if level == 6 && self.is_built(Building::Upgrade7) {
            return Some(Building::Upgrade7);
        }
        Building::dwelling_upgrade(level)
            .filter(|&upgrade| self.is_built(upgrade))
            .or_else(|| Building::dwelling(level).filter(|&plain| self.is_built(plain)))
    }

    pub fn snapshot(&self) -> TownSnapshot {
        TownSnapshot {
            id: self.id,
            name: self.name.clone(),
            race: self.race,
            buildings: self.buildings.iter().collect(),
            population: self.population,
            garrison: self.garrison.to_record(),
            guest: self.guest.as_ref().map(|guest| guest.army.to_record()),
        }
    }
}

/// Serializable view of a town
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownSnapshot {
    pub id: TownId,
    pub name: String,
    pub race: Race,
    pub buildings: Vec<Building>,
    pub population: [u32; 6],
    pub garrison: ArmyRecord,
    pub guest: Option<ArmyRecord>,
}

impl Settlement for Town {
    fn name(&self) -> &str {
        &self.name
    }

    fn race(&self) -> Race {
        self.race
    }

    fn buildings(&self) -> BuildingSet {
        self.buildings
    }

    fn build_status(&self, building: Building, funds: &Funds) -> BuildStatus {
        if self.is_built(building) {
            return BuildStatus::AlreadyBuilt;
        }
        if !is_available(self.race, building) || (building == Building::Shipyard && !self.near_sea)
        {
            return BuildStatus::Disabled;
        }
        if self.built_today {
            return BuildStatus::NotToday;
        }
        if !self.is_castle() && building != Building::Castle {
            return BuildStatus::NeedCastle;
        }
        if !self.buildings.contains_all(requirements(self.race, building)) {
            return BuildStatus::RequiresBuild;
        }
        if !funds.can_afford(&self.building_cost(building)) {
            return BuildStatus::LackResources;
        }
        BuildStatus::Allowed
    }

    fn buy_building(&mut self, building: Building, treasury: &mut dyn Treasury) -> bool {
        if self.build_status(building, &treasury.funds()) != BuildStatus::Allowed {
            return false;
        }
        let cost = self.building_cost(building);
        if !treasury.pay(&cost) {
            return false;
        }

        self.buildings.insert(building);
        self.built_today = true;

        if let Some(index) = Building::DWELLINGS.iter().position(|&d| d == building) {
            if let Some(monster) = dwelling_monster(self.race, building) {
                self.population[index] += monster.growth();
            }
        }
        if building == Building::Captain {
            self.hire_captain();
        }

        info!("{} built {} for {}", self.name, building, cost);
        true
    }

    fn is_capital(&self) -> bool {
        self.capital
    }

    fn region(&self) -> RegionStats {
        self.region
    }

    fn allow_buy_boat(&self) -> bool {
        self.near_sea && self.is_built(Building::Shipyard) && !self.boat_present
    }

    fn buy_boat(&mut self, treasury: &mut dyn Treasury) -> bool {
        if !self.allow_buy_boat() || !treasury.pay(&BOAT_COST) {
            return false;
        }
        self.boat_present = true;
        info!("{} bought a boat", self.name);
        true
    }

    fn garrison(&self) -> &Army {
        &self.garrison
    }

    fn guest_army(&self) -> Option<&Army> {
        self.guest.as_ref().map(|guest| &guest.army)
    }

    fn armies_mut(&mut self) -> (&mut Army, Option<&mut Army>) {
        (
            &mut self.garrison,
            self.guest.as_mut().map(|guest| &mut guest.army),
        )
    }

    fn guest_hero_role(&self) -> Option<HeroRole> {
        self.guest.as_ref().map(|guest| guest.hero.role)
    }

    fn dwelling_population(&self, dwelling: Building) -> u32 {
        dwelling
            .dwelling_level()
            .map_or(0, |level| self.population[level - 1])
    }

    fn recruit_limit(&self, monster: Monster, funds: &Funds) -> u32 {
        if monster.race() != self.race {
            return 0;
        }
        let Some(dwelling) = monster_dwelling(monster) else {
            return 0;
        };
        if !self.is_built(dwelling) {
            return 0;
        }
        self.dwelling_population(dwelling)
            .min(funds.times_affordable(&monster.cost()))
    }

    fn recruit(&mut self, troop: Troop, treasury: &mut dyn Treasury) -> bool {
        if troop.count == 0 || self.recruit_limit(troop.monster, &treasury.funds()) < troop.count {
            return false;
        }
        let Some(level) = monster_dwelling(troop.monster).and_then(Building::dwelling_level) else {
            return false;
        };

        // The garrison first, then the visiting hero
        let army = if self.garrison.troops().can_join(troop.monster) {
            &mut self.garrison
        } else {
            match self.guest.as_mut() {
                Some(guest) if guest.army.troops().can_join(troop.monster) => &mut guest.army,
                _ => return false,
            }
        };
        if !treasury.pay(&(troop.monster.cost() * troop.count as i32)) {
            return false;
        }

        army.troops_mut().join_troop(troop);
        self.population[level - 1] -= troop.count;
        debug!("{} recruited {}", self.name, troop);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::realm::kingdom::Coffers;

    fn coffers(funds: Funds) -> Coffers {
        Coffers::new(Color::Blue, funds)
    }

    #[test]
    fn test_one_building_per_day() {
        let mut town = Town::castle(TownId(1), "Highcastle", Race::Knight, Color::Blue);
        let mut treasury = coffers(Funds::new(10000, 50, 0, 50, 0, 0, 0));

        assert!(town.buy_building(Building::Well, &mut treasury));
        assert_eq!(
            town.build_status(Building::Tavern, &treasury.funds()),
            BuildStatus::NotToday
        );
        assert!(!town.buy_building(Building::Tavern, &mut treasury));

        town.new_day();
        assert!(town.buy_building(Building::Tavern, &mut treasury));
        assert_eq!(treasury.funds(), Funds::new(9000, 45, 0, 50, 0, 0, 0));
    }

    #[test]
    fn test_town_needs_castle_first() {
        let town = Town::new(TownId(1), "Hamlet", Race::Barbarian, Color::Red);
        let funds = Funds::new(50000, 100, 100, 100, 100, 100, 100);
        assert_eq!(town.build_status(Building::Well, &funds), BuildStatus::NeedCastle);
        assert_eq!(town.build_status(Building::Castle, &funds), BuildStatus::Allowed);
    }

    #[test]
    fn test_requirements_and_resources() {
        let town = Town::castle(TownId(1), "Highcastle", Race::Knight, Color::Blue);
        let rich = Funds::new(50000, 100, 100, 100, 100, 100, 100);

        assert_eq!(
            town.build_status(Building::Dwelling3, &rich),
            BuildStatus::RequiresBuild
        );
        assert_eq!(
            town.build_status(Building::Dwelling2, &Funds::gold(500)),
            BuildStatus::LackResources
        );
        assert_eq!(town.build_status(Building::Shipyard, &rich), BuildStatus::Disabled);
    }

    #[test]
    fn test_weekly_growth() {
        let mut town = Town::castle(TownId(1), "Highcastle", Race::Knight, Color::Blue)
            .with_buildings(&[Building::Well]);
        town.new_week();
        assert_eq!(town.population()[0], 12 + WELL_GROWTH);
        assert_eq!(town.population()[1], 0);
    }

    #[test]
    fn test_recruit_limit_and_recruit() {
        let mut town = Town::castle(TownId(1), "Highcastle", Race::Knight, Color::Blue)
            .with_population([20, 0, 0, 0, 0, 0]);
        let mut treasury = coffers(Funds::gold(300));

        assert_eq!(town.recruit_limit(Monster::Peasant, &treasury.funds()), 15);
        assert_eq!(town.recruit_limit(Monster::Goblin, &treasury.funds()), 0);

        assert!(town.recruit(Troop::new(Monster::Peasant, 10), &mut treasury));
        assert_eq!(town.garrison().troops().count_of(Monster::Peasant), 10);
        assert_eq!(town.population()[0], 10);
        assert_eq!(treasury.funds(), Funds::gold(100));

        assert!(!town.recruit(Troop::new(Monster::Peasant, 6), &mut treasury));
    }

    #[test]
    fn test_full_garrison_recruits_into_guest() {
        let mut garrison = Army::new(Color::Blue);
        for monster in [
            Monster::Goblin,
            Monster::Sprite,
            Monster::Centaur,
            Monster::Halfling,
            Monster::Skeleton,
        ] {
            garrison.troops_mut().join(monster, 3, false);
        }
        let mut town = Town::castle(TownId(1), "Highcastle", Race::Knight, Color::Blue)
            .with_population([20, 0, 0, 0, 0, 0])
            .with_garrison(garrison);
        let mut treasury = coffers(Funds::gold(400));

        // No guest, no room
        assert!(!town.recruit(Troop::new(Monster::Peasant, 5), &mut treasury));
        assert_eq!(treasury.funds(), Funds::gold(400));

        let hero = Arc::new(Commander::hero(CommanderId(4), "Lord Haart", Color::Blue));
        let mut town = town.with_guest(GuestHero::new(hero, Army::new(Color::Blue)));
        assert!(town.recruit(Troop::new(Monster::Peasant, 5), &mut treasury));

        let guest = town.guest_army().unwrap();
        assert_eq!(guest.troops().count_of(Monster::Peasant), 5);
        assert_eq!(town.garrison().troops().count_of(Monster::Peasant), 0);
        assert_eq!(town.population()[0], 15);
        assert_eq!(treasury.funds(), Funds::gold(300));
    }

    #[test]
    fn test_boat_needs_shipyard_and_sea() {
        let mut town = Town::castle(TownId(1), "Port", Race::Wizard, Color::Blue)
            .near_sea()
            .with_buildings(&[Building::Shipyard]);
        let mut treasury = coffers(Funds::new(3000, 30, 0, 0, 0, 0, 0));

        assert!(town.allow_buy_boat());
        assert!(town.buy_boat(&mut treasury));
        assert!(!town.allow_buy_boat());
        assert_eq!(treasury.funds(), Funds::new(2000, 20, 0, 0, 0, 0, 0));
    }

    #[test]
    fn test_captain_commands_garrison_until_dismissed() {
        let mut town = Town::castle(TownId(3), "Keep", Race::Knight, Color::Blue)
            .with_buildings(&[Building::Captain]);
        assert!(town.garrison().commander().is_some());

        town.dismiss_captain();
        assert!(town.garrison().commander().is_none());
    }

    #[test]
    fn test_actual_dwelling_prefers_upgrade() {
        let town = Town::castle(TownId(1), "Lair", Race::Warlock, Color::Red).with_buildings(&[
            Building::Dwelling6,
            Building::Upgrade6,
            Building::Upgrade7,
        ]);
        assert_eq!(town.actual_dwelling(6), Some(Building::Upgrade7));
        assert_eq!(town.actual_dwelling(1), Some(Building::Dwelling1));
        assert_eq!(town.actual_dwelling(2), None);
    }
}
