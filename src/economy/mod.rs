//! Economy layer: resource vectors, market rates and the exchange solver

pub mod exchange;
pub mod funds;
pub mod market;

pub use exchange::{solve, trade_at_marketplace};
pub use funds::{Funds, Resource};
pub use market::{trade_rate, trading_post_rate, TradeRate, MAX_MARKETPLACES, TRADING_POST_MARKETPLACES};
