//! Army commanders: adventuring heroes and garrison captains
//!
//! Commanders are owned by their hero roster or settlement. Armies only hold
//! a `Weak` handle, so a dismissed captain or a fallen hero silently stops
//! contributing to the army it used to lead.

use serde::{Deserialize, Serialize};

use crate::core::types::{Color, CommanderId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommanderKind {
    Hero,
    /// Defends a castle garrison and never leaves it
    Captain,
}

/// Role the kingdom AI assigned to a hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeroRole {
    #[default]
    Hunter,
    Fighter,
    Champion,
    Scout,
    Courier,
}

impl HeroRole {
    /// Fighters and champions carry the kingdom's main armies
    pub fn is_fighter(&self) -> bool {
        matches!(self, HeroRole::Fighter | HeroRole::Champion)
    }
}

/// Archery secondary skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Archery {
    #[default]
    None,
    Basic,
    Advanced,
    Expert,
}

impl Archery {
    /// Extra damage share for shooting stacks
    pub fn bonus(&self) -> f64 {
        match self {
            Archery::None => 0.0,
            Archery::Basic => 0.1,
            Archery::Advanced => 0.25,
            Archery::Expert => 0.5,
        }
    }
}

/// Artifacts that change morale or luck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Artifact {
    MedalOfValor,
    MedalOfCourage,
    MedalOfHonor,
    MedalOfDistinction,
    FizbinOfMisfortune,
    RabbitsFoot,
    GoldenHorseshoe,
    GamblersLuckyCoin,
    FourLeafClover,
    /// Raises fallen troops but unsettles the living
    ArmOfTheMartyr,
}

impl Artifact {
    pub fn morale_bonus(&self) -> i32 {
        match self {
            Artifact::MedalOfValor
            | Artifact::MedalOfCourage
            | Artifact::MedalOfHonor
            | Artifact::MedalOfDistinction => 1,
            Artifact::FizbinOfMisfortune => -2,
            _ => 0,
        }
    }

    pub fn luck_bonus(&self) -> i32 {
        match self {
            Artifact::RabbitsFoot
            | Artifact::GoldenHorseshoe
            | Artifact::GamblersLuckyCoin
            | Artifact::FourLeafClover => 1,
            _ => 0,
        }
    }
}

/// A hero or captain profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commander {
    pub id: CommanderId,
    pub name: String,
    pub kind: CommanderKind,
    pub color: Color,
    pub attack: u32,
    pub defense: u32,
    pub spell_power: u32,
    pub knowledge: u32,
    /// Base morale before artifacts
    pub morale: i32,
    /// Base luck before artifacts
    pub luck: i32,
    pub archery: Archery,
    pub has_spell_book: bool,
    pub artifacts: Vec<Artifact>,
    /// Morale granted by the settlement the commander stands in
    pub settlement_morale: i32,
    /// Luck granted by the settlement the commander stands in
    pub settlement_luck: i32,
    pub role: HeroRole,
}

impl Commander {
    pub fn hero(id: CommanderId, name: &str, color: Color) -> Self {
        Self {
            id,
            name: name.to_string(),
            kind: CommanderKind::Hero,
            color,
            attack: 1,
            defense: 1,
            spell_power: 1,
            knowledge: 1,
            morale: 0,
            luck: 0,
            archery: Archery::None,
            has_spell_book: false,
            artifacts: Vec::new(),
            settlement_morale: 0,
            settlement_luck: 0,
            role: HeroRole::default(),
        }
    }

    /// Captains fight with fixed primary skills and carry a spell book
    pub fn captain(id: CommanderId, color: Color) -> Self {
        Self {
            kind: CommanderKind::Captain,
            has_spell_book: true,
            ..Self::hero(id, "Captain", color)
        }
    }

    pub fn with_stats(mut self, attack: u32, defense: u32, spell_power: u32, knowledge: u32) -> Self {
        self.attack = attack;
        self.defense = defense;
        self.spell_power = spell_power;
        self.knowledge = knowledge;
        self
    }

    pub fn with_morale_luck(mut self, morale: i32, luck: i32) -> Self {
        self.morale = morale;
        self.luck = luck;
        self
    }

    pub fn with_archery(mut self, archery: Archery) -> Self {
        self.archery = archery;
        self
    }

    pub fn with_spell_book(mut self) -> Self {
        self.has_spell_book = true;
        self
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn with_role(mut self, role: HeroRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_settlement_modifiers(mut self, morale: i32, luck: i32) -> Self {
        self.settlement_morale = morale;
        self.settlement_luck = luck;
        self
    }

    pub fn is_hero(&self) -> bool {
        self.kind == CommanderKind::Hero
    }

    pub fn has_artifact(&self, artifact: Artifact) -> bool {
        self.artifacts.contains(&artifact)
    }

    /// Commander morale with artifacts, without army or settlement effects
    pub fn morale_modifier(&self) -> i32 {
        self.morale + self.artifacts.iter().map(Artifact::morale_bonus).sum::<i32>()
    }

    /// Commander luck with artifacts, without settlement effects
    pub fn luck_modifier(&self) -> i32 {
        self.luck + self.artifacts.iter().map(Artifact::luck_bonus).sum::<i32>()
    }

    /// Strength contributed by spellcasting
    pub fn magic_value(&self) -> f64 {
        if !self.has_spell_book {
            return 0.0;
        }
        (self.spell_power * self.knowledge * 2) as f64
    }
}
