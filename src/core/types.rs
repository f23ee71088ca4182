//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Map tile index identifying a location on the adventure map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

/// Identifier of a hero or garrison captain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommanderId(pub u32);

/// Identifier of a town or castle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TownId(pub u32);

/// Game day counter, starting at 1
pub type Day = u32;

/// Player color owning a kingdom, army or settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Color {
    /// Neutral owner
    #[default]
    None,
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::None => "neutral",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
        }
    }
}

/// Faction race (alignment) of creatures and settlements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Race {
    Knight,
    Barbarian,
    Sorceress,
    Warlock,
    Wizard,
    Necromancer,
    /// Creatures without a home castle
    Neutral,
}

impl Race {
    /// Races that own castles
    pub const PLAYABLE: [Race; 6] = [
        Race::Knight,
        Race::Barbarian,
        Race::Sorceress,
        Race::Warlock,
        Race::Wizard,
        Race::Necromancer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Race::Knight => "Knight",
            Race::Barbarian => "Barbarian",
            Race::Sorceress => "Sorceress",
            Race::Warlock => "Warlock",
            Race::Wizard => "Wizard",
            Race::Necromancer => "Necromancer",
            Race::Neutral => "Neutral",
        }
    }

    /// Parse a race from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::PLAYABLE
            .into_iter()
            .chain(std::iter::once(Race::Neutral))
            .find(|race| race.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_from_name_roundtrip() {
        for race in Race::PLAYABLE {
            assert_eq!(Race::from_name(race.name()), Some(race));
        }
        assert_eq!(Race::from_name("necromancer"), Some(Race::Necromancer));
        assert_eq!(Race::from_name("dragon"), None);
    }

    #[test]
    fn test_default_color_is_neutral() {
        assert_eq!(Color::default(), Color::None);
        assert_eq!(Color::None.name(), "neutral");
    }
}
