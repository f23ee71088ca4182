//! Marketplace exchange rates
//!
//! Rates depend on how many marketplaces the kingdom owns (capped at nine).
//! Selling for gold yields gold per unit given up. Every other exchange
//! costs several units of the source per unit gained.

use serde::{Deserialize, Serialize};

use super::funds::Resource;

/// Marketplace count beyond which rates stop improving
pub const MAX_MARKETPLACES: u32 = 9;

/// A trading post always trades at the three-marketplace rate
pub const TRADING_POST_MARKETPLACES: u32 = 3;

const RESOURCE_TO_RESOURCE: [i32; 9] = [10, 7, 5, 4, 4, 3, 3, 3, 2];
const COMMON_TO_RARE: [i32; 9] = [20, 14, 10, 8, 7, 6, 5, 5, 4];
const RARE_TO_COMMON: [i32; 9] = [5, 4, 3, 2, 2, 2, 2, 2, 1];
const COMMON_TO_GOLD: [i32; 9] = [25, 37, 50, 62, 74, 87, 100, 112, 124];
const RARE_TO_GOLD: [i32; 9] = [50, 74, 100, 124, 149, 175, 200, 224, 249];
const GOLD_TO_COMMON: [i32; 9] = [2500, 1667, 1250, 1000, 834, 715, 625, 556, 500];
const GOLD_TO_RARE: [i32; 9] = [5000, 3334, 2500, 2000, 1667, 1429, 1250, 1112, 1000];

/// Exchange rate between two resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeRate {
    /// No exchange possible
    Unavailable,
    /// One unit of the source yields this much gold
    Yields(i32),
    /// This many units of the source buy one unit of the target
    Costs(i32),
}

impl TradeRate {
    /// Units of the target obtainable from `available` units of the source
    pub fn obtainable(&self, available: i32) -> i64 {
        if available <= 0 {
            return 0;
        }
        match *self {
            TradeRate::Unavailable => 0,
            TradeRate::Yields(gold) => available as i64 * gold as i64,
            TradeRate::Costs(units) => (available / units) as i64,
        }
    }
}

/// Exchange rate from `from` to `to` with the given number of marketplaces
pub fn trade_rate(from: Resource, to: Resource, marketplaces: u32) -> TradeRate {
    if from == to || marketplaces == 0 {
        return TradeRate::Unavailable;
    }
    let index = (marketplaces.min(MAX_MARKETPLACES) - 1) as usize;

    if to == Resource::Gold {
        return if from.is_common() {
            TradeRate::Yields(COMMON_TO_GOLD[index])
        } else {
            TradeRate::Yields(RARE_TO_GOLD[index])
        };
    }

    let cost = if from == Resource::Gold {
        if to.is_common() {
            GOLD_TO_COMMON[index]
        } else {
            GOLD_TO_RARE[index]
        }
    } else if from.is_common() == to.is_common() {
        RESOURCE_TO_RESOURCE[index]
    } else if from.is_common() {
        COMMON_TO_RARE[index]
    } else {
        RARE_TO_COMMON[index]
    };
    TradeRate::Costs(cost)
}

/// Exchange rate at a trading post
pub fn trading_post_rate(from: Resource, to: Resource) -> TradeRate {
    trade_rate(from, to, TRADING_POST_MARKETPLACES)
}
