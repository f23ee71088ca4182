//! Typed results of planner decisions

use serde::{Deserialize, Serialize};

use crate::army::Monster;
use crate::core::types::Day;
use crate::realm::Building;

/// Something the planner did to a settlement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastleAction {
    Built(Building),
    BoughtBoat,
    Recruited { monster: Monster, count: u32 },
    /// Stack upgraded in place to `monster`
    Upgraded { monster: Monster, count: u32 },
    /// Stack sent away to make room for a stronger recruit
    Dismissed { monster: Monster, count: u32 },
    TransferredToHero { monster: Monster, count: u32 },
    ReturnedToGarrison { monster: Monster, count: u32 },
    /// Guest hero took the strongest garrison stacks
    Reinforced,
    /// Guest hero left its strongest stacks in the garrison
    LeftWithGarrison,
}

impl CastleAction {
    pub fn is_build(&self) -> bool {
        matches!(self, CastleAction::Built(_))
    }
}

impl std::fmt::Display for CastleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CastleAction::Built(building) => write!(f, "built {}", building),
            CastleAction::BoughtBoat => write!(f, "bought a boat"),
            CastleAction::Recruited { monster, count } => {
                write!(f, "recruited {} {}", count, monster)
            }
            CastleAction::Upgraded { monster, count } => {
                write!(f, "upgraded {} to {}", count, monster)
            }
            CastleAction::Dismissed { monster, count } => {
                write!(f, "dismissed {} {}", count, monster)
            }
            CastleAction::TransferredToHero { monster, count } => {
                write!(f, "moved {} {} to the guest hero", count, monster)
            }
            CastleAction::ReturnedToGarrison { monster, count } => {
                write!(f, "left {} {} in the garrison", count, monster)
            }
            CastleAction::Reinforced => write!(f, "reinforced the guest hero"),
            CastleAction::LeftWithGarrison => {
                write!(f, "guest hero left its strongest stacks behind")
            }
        }
    }
}

/// Everything one settlement did during one turn
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub settlement: String,
    pub day: Day,
    pub actions: Vec<CastleAction>,
}

impl TurnReport {
    pub fn new(settlement: &str, day: Day) -> Self {
        Self {
            settlement: settlement.to_string(),
            day,
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, action: CastleAction) {
        self.actions.push(action);
    }

    pub fn record(&mut self, action: Option<CastleAction>) {
        self.actions.extend(action);
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn buildings(&self) -> impl Iterator<Item = Building> + '_ {
        self.actions.iter().filter_map(|action| match action {
            CastleAction::Built(building) => Some(*building),
            _ => None,
        })
    }

    pub fn recruited_units(&self) -> u32 {
        self.actions
            .iter()
            .map(|action| match action {
                CastleAction::Recruited { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }
}
