//! Steward configuration with documented constants
//!
//! All tuned numbers of the army and planner layers are collected here with
//! an explanation of what they control. Configuration is passed explicitly
//! to the calls that need it; there is no process-wide instance.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, StewardError};
use crate::planner::Personality;

/// Tunables of the slot-allocation algorithms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmyConfig {
    /// Share of the receiving army's strength that may be handed back to a
    /// hero whose army would otherwise be emptied by a strongest-merge
    ///
    /// At 0.05 the receiver's weakest stack goes back whole when it is worth
    /// less than 5% of the receiver. Otherwise only as many units as fit
    /// under that 5% go back. This is an empirical value and not a rule of
    /// the game.
    pub giver_preservation_ratio: f64,

    /// Probability that the centre stack of a neutral battle arrangement is
    /// replaced by the next creature tier
    ///
    /// The draw itself is seeded, so a given map seed and location always
    /// produce the same answer.
    pub battle_upgrade_chance: f64,
}

impl Default for ArmyConfig {
    fn default() -> Self {
        Self {
            giver_preservation_ratio: 0.05,
            battle_upgrade_chance: 0.5,
        }
    }
}

/// Tunables of the construction and recruitment planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Days after which a castle without a Well builds it before anything else
    pub well_unlock_day: u32,

    /// Settlements with fewer neighbouring regions than this count as
    /// islands or peninsulas and are pushed to build a shipyard
    pub island_region_threshold: usize,

    /// Boat reserve multiplier for island settlements
    ///
    /// A boat is only bought when the kingdom could pay this many boats,
    /// directly or after trading.
    pub boat_reserve_island: i32,

    /// Boat reserve multiplier for mainland settlements
    pub boat_reserve_mainland: i32,

    /// Funds multiplier applied to the defensive build lists
    pub defensive_multiplier: u32,

    /// Upper bound for any funds multiplier; larger requests never build
    pub max_funds_multiplier: u32,

    /// Regions with a safety factor at or below this value keep a token
    /// garrison when the guest hero takes the rest
    pub safe_region_threshold: i32,

    /// Fighter heroes leave a stack behind only if it is worth less than
    /// 1/this of their army
    pub fighter_significance_ratio: f64,

    /// Other heroes leave a stack behind if it is worth less than 1/this
    /// of their army
    pub support_significance_ratio: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            well_unlock_day: 6,
            island_region_threshold: 3,
            boat_reserve_island: 2,
            boat_reserve_mainland: 4,
            defensive_multiplier: 10,
            max_funds_multiplier: 99,
            safe_region_threshold: 100,
            fighter_significance_ratio: 20.0,
            support_significance_ratio: 10.0,
        }
    }
}

/// Complete steward configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StewardConfig {
    /// Slot-allocation tunables
    pub army: ArmyConfig,
    /// Planner tunables
    pub planner: PlannerConfig,
    /// Castle AI strategy
    pub personality: Personality,
    /// Seed for heuristic AI randomness (not battlefield randomness)
    pub ai_seed: u64,
}

impl Default for StewardConfig {
    fn default() -> Self {
        Self {
            army: ArmyConfig::default(),
            planner: PlannerConfig::default(),
            personality: Personality::Normal,
            ai_seed: 0x5EED,
        }
    }
}

impl StewardConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        let ratio = self.army.giver_preservation_ratio;
        if !(ratio > 0.0 && ratio <= 0.5) {
            return Err(format!(
                "giver_preservation_ratio ({}) must be in (0, 0.5]",
                ratio
            ));
        }

        if !(0.0..=1.0).contains(&self.army.battle_upgrade_chance) {
            return Err(format!(
                "battle_upgrade_chance ({}) must be in [0, 1]",
                self.army.battle_upgrade_chance
            ));
        }

        let planner = &self.planner;
        if planner.max_funds_multiplier == 0 {
            return Err("max_funds_multiplier must be positive".into());
        }

        if planner.defensive_multiplier == 0
            || planner.defensive_multiplier > planner.max_funds_multiplier
        {
            return Err(format!(
                "defensive_multiplier ({}) must be in 1..={}",
                planner.defensive_multiplier, planner.max_funds_multiplier
            ));
        }

        if planner.boat_reserve_island <= 0 || planner.boat_reserve_mainland <= 0 {
            return Err("Boat reserve multipliers must be positive".into());
        }

        if planner.fighter_significance_ratio < 1.0 || planner.support_significance_ratio < 1.0 {
            return Err("Significance ratios must be at least 1".into());
        }

        Ok(())
    }

    /// Parse and validate a configuration from TOML text
    ///
    /// Missing sections and fields fall back to their defaults.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: StewardConfig = toml::from_str(content)?;
        config.validate().map_err(StewardError::Config)?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }
}
