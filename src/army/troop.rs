//! A single occupied army slot

use serde::{Deserialize, Serialize};

use super::monster::Monster;

/// A stack of identical creatures
///
/// Empty slots are represented by `None` in the owning container, so a
/// `Troop` held in a slot always has a positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Troop {
    pub monster: Monster,
    pub count: u32,
}

impl Troop {
    pub fn new(monster: Monster, count: u32) -> Self {
        Self { monster, count }
    }

    /// Combat value of the whole stack with the creature's own stats
    pub fn strength(&self) -> f64 {
        self.monster.combat_value() * self.count as f64
    }

    /// Combat value of the whole stack with commander-adjusted stats
    pub fn strength_with(&self, attack: u32, defense: u32) -> f64 {
        self.monster.combat_value_with(attack, defense) * self.count as f64
    }

    /// Combat value of a single unit
    pub fn unit_value(&self) -> f64 {
        self.monster.combat_value()
    }

    pub fn hit_points(&self) -> u64 {
        self.monster.stats().hit_points as u64 * self.count as u64
    }

    /// The same stack at the next creature tier
    pub fn upgraded(self) -> Option<Troop> {
        self.monster
            .upgrade()
            .map(|monster| Troop::new(monster, self.count))
    }
}

impl std::fmt::Display for Troop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.count, self.monster)
    }
}
