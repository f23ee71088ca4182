//! Per-turn inputs of the castle planner
//!
//! Everything a decision depends on besides the settlement and the treasury
//! travels here: the calendar day, the region statistics and the seeded RNG
//! used for heuristic choices.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::types::Day;
use crate::realm::RegionStats;

const DAYS_PER_WEEK: Day = 7;

pub struct TurnContext {
    pub day: Day,
    /// Stats of the region the current settlement stands in, when known
    pub region: Option<RegionStats>,
    rng: ChaCha8Rng,
}

impl TurnContext {
    pub fn new(day: Day, seed: u64) -> Self {
        Self {
            day,
            region: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn with_region(mut self, region: RegionStats) -> Self {
        self.region = Some(region);
        self
    }

    /// Move on to the next day, keeping the RNG stream
    pub fn advance_day(&mut self) {
        self.day += 1;
    }

    /// Seventh day of a week
    pub fn is_last_day_of_week(&self) -> bool {
        self.day % DAYS_PER_WEEK == 0
    }

    /// Region stats to plan with; the settlement's own stats unless overridden
    pub fn region_or(&self, fallback: RegionStats) -> RegionStats {
        self.region.unwrap_or(fallback)
    }

    /// Uniform draw in `min..=max`
    pub fn roll(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Patience multiplier of the simple routine; capitals are never patient
    pub fn resource_multiplier(&mut self, is_capital: bool, min: u32, max: u32) -> u32 {
        if is_capital {
            1
        } else {
            self.roll(min, max)
        }
    }
}
