//! Threat sensing.
//!
//! Answers whether the friendly queen or a given site is in danger from
//! enemy knights or towers. The knight judgment is scaled by the queen's
//! health: the weaker she is, the wider the window and the lower the bar.

use crate::board::{Owner, Position, Site, StructureType, Unit, UnitType, WorldState};
use crate::config::KnightSensitivity;

/// Computes `(proximity_threshold, count_threshold)` for a health fraction.
///
/// `health_fraction` is the queen's health divided by the configured health
/// scale; it is not clamped, so a queen above the scale yields a narrower
/// window than `proximity_min`.
pub fn knight_thresholds(health_fraction: f64, s: KnightSensitivity) -> (f64, f64) {
    let weight = health_fraction.powf(s.exponent);
    let proximity = s.proximity_max - (s.proximity_max - s.proximity_min) * weight;
    let count = (s.count_max - s.count_min) * weight + s.count_min;
    (proximity, count)
}

/// Threat queries over one turn's world, from the friendly queen's side.
#[derive(Debug, Clone, Copy)]
pub struct ThreatSensor<'a> {
    world: &'a WorldState,
    queen: &'a Unit,
    health_scale: f64,
}

impl<'a> ThreatSensor<'a> {
    pub fn new(world: &'a WorldState, queen: &'a Unit, health_scale: f64) -> Self {
        ThreatSensor {
            world,
            queen,
            health_scale,
        }
    }

    /// Counts enemy knights within `range` of `at` (inclusive).
    pub fn knights_within(&self, at: Position, range: f64) -> usize {
        self.world
            .units_of(Owner::Enemy, UnitType::Knight)
            .filter(|k| k.position.distance(at) <= range)
            .count()
    }

    /// True when enough enemy knights are close enough to the queen, with
    /// both thresholds scaled by her health.
    pub fn queen_threatened_by_knights(&self, sensitivity: KnightSensitivity) -> bool {
        let health_fraction = f64::from(self.queen.health) / self.health_scale;
        let (proximity, count) = knight_thresholds(health_fraction, sensitivity);
        let near = self.knights_within(self.queen.position, proximity);
        near as f64 >= count
    }

    /// True if any enemy tower covers `site`, with `tolerance` shaved off
    /// each tower's range.
    pub fn site_threatened_by_towers(&self, site: &Site, tolerance: f64) -> bool {
        self.world
            .structures(Owner::Enemy, StructureType::Tower)
            .filter_map(|t| t.tower_range().map(|r| (t.position, r)))
            .any(|(pos, range)| pos.distance(site.position) < f64::from(range) - tolerance)
    }

    /// True if at least `count` enemy knights are within `range` of `site`.
    pub fn site_threatened_by_knights(&self, site: &Site, range: f64, count: usize) -> bool {
        self.knights_within(site.position, range) >= count
    }
}
