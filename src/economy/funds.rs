//! Funds - the seven-resource quantity vector
//!
//! Kingdom holdings are never negative. Deltas proposed by the exchange
//! solver use negative components for resources that are gained.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Neg, Sub, SubAssign};

/// Kind of resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Gold,
    Wood,
    Mercury,
    Ore,
    Sulfur,
    Crystal,
    Gems,
}

impl Resource {
    /// All resources in canonical order
    pub const ALL: [Resource; 7] = [
        Resource::Gold,
        Resource::Wood,
        Resource::Mercury,
        Resource::Ore,
        Resource::Sulfur,
        Resource::Crystal,
        Resource::Gems,
    ];

    /// Wood and ore
    pub fn is_common(&self) -> bool {
        matches!(self, Resource::Wood | Resource::Ore)
    }

    /// Mercury, sulfur, crystal and gems
    pub fn is_rare(&self) -> bool {
        matches!(
            self,
            Resource::Mercury | Resource::Sulfur | Resource::Crystal | Resource::Gems
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Gold => "gold",
            Resource::Wood => "wood",
            Resource::Mercury => "mercury",
            Resource::Ore => "ore",
            Resource::Sulfur => "sulfur",
            Resource::Crystal => "crystal",
            Resource::Gems => "gems",
        }
    }
}

/// Amount of every resource kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Funds {
    pub gold: i32,
    pub wood: i32,
    pub mercury: i32,
    pub ore: i32,
    pub sulfur: i32,
    pub crystal: i32,
    pub gems: i32,
}

impl Funds {
    /// Construct from amounts in canonical order
    pub const fn new(
        gold: i32,
        wood: i32,
        mercury: i32,
        ore: i32,
        sulfur: i32,
        crystal: i32,
        gems: i32,
    ) -> Self {
        Self {
            gold,
            wood,
            mercury,
            ore,
            sulfur,
            crystal,
            gems,
        }
    }

    /// Gold only
    pub const fn gold(amount: i32) -> Self {
        Self::new(amount, 0, 0, 0, 0, 0, 0)
    }

    /// A single resource
    pub fn of(resource: Resource, amount: i32) -> Self {
        let mut funds = Self::default();
        funds[resource] = amount;
        funds
    }

    /// Builder-style setter
    pub fn with(mut self, resource: Resource, amount: i32) -> Self {
        self[resource] = amount;
        self
    }

    pub fn get(&self, resource: Resource) -> i32 {
        self[resource]
    }

    /// Iterate (resource, amount) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Resource, i32)> + '_ {
        Resource::ALL.into_iter().map(move |r| (r, self[r]))
    }

    /// True if every component of `cost` is covered
    pub fn can_afford(&self, cost: &Funds) -> bool {
        Resource::ALL.iter().all(|&r| self[r] >= cost[r])
    }

    pub fn is_non_negative(&self) -> bool {
        Resource::ALL.iter().all(|&r| self[r] >= 0)
    }

    pub fn is_zero(&self) -> bool {
        *self == Funds::default()
    }

    /// Component-wise maximum
    pub fn max(&self, other: &Funds) -> Funds {
        let mut result = *self;
        for r in Resource::ALL {
            result[r] = self[r].max(other[r]);
        }
        result
    }

    /// Amount still missing to cover `cost`, zero where already covered
    pub fn shortfall(&self, cost: &Funds) -> Funds {
        let mut result = Funds::default();
        for r in Resource::ALL {
            result[r] = (cost[r] - self[r]).max(0);
        }
        result
    }

    /// How many times `cost` fits into these funds
    ///
    /// A zero cost fits an unlimited number of times; `u32::MAX` is returned.
    pub fn times_affordable(&self, cost: &Funds) -> u32 {
        Resource::ALL
            .iter()
            .filter(|&&r| cost[r] > 0)
            .map(|&r| (self[r].max(0) / cost[r]) as u32)
            .min()
            .unwrap_or(u32::MAX)
    }

    /// Resources with a positive amount
    pub fn positive_resources(&self) -> impl Iterator<Item = Resource> + '_ {
        Resource::ALL.into_iter().filter(move |&r| self[r] > 0)
    }
}

impl Index<Resource> for Funds {
    type Output = i32;

    fn index(&self, resource: Resource) -> &i32 {
        match resource {
            Resource::Gold => &self.gold,
            Resource::Wood => &self.wood,
            Resource::Mercury => &self.mercury,
            Resource::Ore => &self.ore,
            Resource::Sulfur => &self.sulfur,
            Resource::Crystal => &self.crystal,
            Resource::Gems => &self.gems,
        }
    }
}

impl IndexMut<Resource> for Funds {
    fn index_mut(&mut self, resource: Resource) -> &mut i32 {
        match resource {
            Resource::Gold => &mut self.gold,
            Resource::Wood => &mut self.wood,
            Resource::Mercury => &mut self.mercury,
            Resource::Ore => &mut self.ore,
            Resource::Sulfur => &mut self.sulfur,
            Resource::Crystal => &mut self.crystal,
            Resource::Gems => &mut self.gems,
        }
    }
}

impl Add for Funds {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for Funds {
    fn add_assign(&mut self, rhs: Self) {
        for r in Resource::ALL {
            self[r] += rhs[r];
        }
    }
}

impl Sub for Funds {
    type Output = Self;
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl SubAssign for Funds {
    fn sub_assign(&mut self, rhs: Self) {
        for r in Resource::ALL {
            self[r] -= rhs[r];
        }
    }
}

impl Mul<i32> for Funds {
    type Output = Self;
    fn mul(mut self, rhs: i32) -> Self {
        for r in Resource::ALL {
            self[r] *= rhs;
        }
        self
    }
}

impl Neg for Funds {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1
    }
}

impl std::fmt::Display for Funds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (resource, amount) in self.iter().filter(|(_, amount)| *amount != 0) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", amount, resource.name())?;
            first = false;
        }
        if first {
            f.write_str("nothing")?;
        }
        Ok(())
    }
}
