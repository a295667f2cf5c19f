//! Per-turn decision context.
//!
//! Resolves both queens once per turn and bundles the world with the
//! threat sensor, economy forecaster and build policy so strategies can
//! stay infallible.

use crate::board::{nearest_by, Owner, Position, Site, Unit, WorldState};
use crate::config::Tuning;
use crate::error::ProtocolError;
use crate::eval::{BuildPolicy, EconomyForecaster, ThreatSensor};
use crate::protocol::QueenCommand;

#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub world: &'a WorldState,
    pub tuning: &'a Tuning,
    pub queen: &'a Unit,
    pub enemy_queen: &'a Unit,
    pub start_corner: Position,
    pub threat: ThreatSensor<'a>,
    pub economy: EconomyForecaster,
    pub policy: BuildPolicy<'a>,
}

impl<'a> TurnContext<'a> {
    /// Builds the context. Fails only if a queen is missing, which a world
    /// that accepted the snapshot already rules out.
    pub fn new(world: &'a WorldState, tuning: &'a Tuning) -> Result<Self, ProtocolError> {
        let queen = world.queen(Owner::Friendly)?;
        let enemy_queen = world.queen(Owner::Enemy)?;
        let start_corner = world
            .start_corner()
            .unwrap_or_else(|| queen.position.nearest_corner());
        let threat = ThreatSensor::new(world, queen, tuning.health_scale);
        Ok(TurnContext {
            world,
            tuning,
            queen,
            enemy_queen,
            start_corner,
            threat,
            economy: EconomyForecaster::for_world(world, tuning.afford_lag_turns),
            policy: BuildPolicy::new(threat, tuning),
        })
    }

    /// The site the queen is standing on.
    pub fn touched(&self) -> Option<&'a Site> {
        self.world.touched()
    }

    /// The start corner pulled inside the field margins.
    pub fn retreat_corner(&self) -> Position {
        self.start_corner
            .clamped(self.tuning.margin_x, self.tuning.margin_y)
    }

    /// A move order toward `target`, clamped inside the field margins.
    pub fn move_to(&self, target: Position) -> QueenCommand {
        QueenCommand::Move(target.clamped(self.tuning.margin_x, self.tuning.margin_y))
    }

    /// True if `site` lies within the setup box anchored at the start corner.
    pub fn in_home_box(&self, site: &Site) -> bool {
        (site.position.x - self.start_corner.x).abs() <= self.tuning.setup_box_width
            && (site.position.y - self.start_corner.y).abs() <= self.tuning.setup_box_height
    }

    /// True if an enemy tower covers `site`.
    pub fn under_tower_fire(&self, site: &Site) -> bool {
        self.threat
            .site_threatened_by_towers(site, self.tuning.tower_tolerance)
    }

    /// Nearest site to `from` that satisfies `accept`, scanning in id order.
    pub fn nearest_site<F>(&self, from: Position, accept: F) -> Option<&'a Site>
    where
        F: Fn(&Site) -> bool,
    {
        nearest_by(from, self.world.sites().filter(|s| accept(s)), |s| s.position)
            .map(|(_, site, _)| site)
    }
}
