//! Economy forecasting.
//!
//! Fixed troop costs plus a projection of how many turns remain until a
//! purchase becomes affordable at the current income rate.

use crate::board::{TroopType, WorldState};

/// Gold cost of one batch of `troop`.
pub const fn troop_cost(troop: TroopType) -> i32 {
    match troop {
        TroopType::Knight => 80,
        TroopType::Archer => 100,
        TroopType::Giant => 140,
    }
}

/// Affordability projections for the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EconomyForecaster {
    gold: i32,
    income_rate: i32,
    lag_turns: i32,
}

impl EconomyForecaster {
    pub fn new(gold: i32, income_rate: i32, lag_turns: i32) -> Self {
        EconomyForecaster {
            gold,
            income_rate,
            lag_turns,
        }
    }

    /// Builds a forecaster from the world's gold and income rate.
    pub fn for_world(world: &WorldState, lag_turns: i32) -> Self {
        EconomyForecaster::new(world.gold, world.income_rate(), lag_turns)
    }

    pub fn gold(&self) -> i32 {
        self.gold
    }

    pub fn income_rate(&self) -> i32 {
        self.income_rate
    }

    /// Turns until `count` batches of `troop` can be paid for.
    ///
    /// Returns `Some(0)` exactly when the gold is already there. Otherwise
    /// the projection is `ceil(deficit / income) - lag_turns`, floored at 1,
    /// and `None` when there is no income to project from.
    pub fn turns_until_can_afford(&self, troop: TroopType, count: i32) -> Option<i32> {
        let price = troop_cost(troop) * count;
        if self.gold >= price {
            return Some(0);
        }
        if self.income_rate <= 0 {
            return None;
        }
        let deficit = price - self.gold;
        let turns = (deficit + self.income_rate - 1) / self.income_rate;
        Some((turns - self.lag_turns).max(1))
    }

    /// True when `count` batches are projected to be affordable within
    /// `turns` turns. An unforecastable projection never qualifies.
    pub fn affordable_within(&self, troop: TroopType, count: i32, turns: i32) -> bool {
        matches!(self.turns_until_can_afford(troop, count), Some(t) if t <= turns)
    }

    pub fn can_afford_now(&self, troop: TroopType) -> bool {
        self.gold >= troop_cost(troop)
    }
}
