//! Situation evaluation.
//!
//! Threat sensing, affordability forecasting, and the construction
//! predicates that the strategies consult every turn.

pub mod build;
pub mod economy;
pub mod threat;

pub use build::BuildPolicy;
pub use economy::{troop_cost, EconomyForecaster};
pub use threat::{knight_thresholds, ThreatSensor};
