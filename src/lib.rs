//! Kingdom Steward - economy and army-composition core of a strategy game AI

pub mod army;
pub mod core;
pub mod economy;
pub mod planner;
pub mod realm;
