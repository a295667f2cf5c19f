//! Barracks construction for a given troop type.
//!
//! The queen builds the barracks on the touched site if it is viable,
//! otherwise walks to the nearest viable site. An enemy queen close to the
//! touched site turns the build into a tower.

use super::context::TurnContext;
use crate::board::{Site, TroopType};
use crate::protocol::{BuildKind, QueenCommand, TrainCommand};

fn viable(ctx: &TurnContext<'_>, site: &Site) -> bool {
    !site.is_friendly() && site.can_be_built_on() && !ctx.under_tower_fire(site)
}

pub fn queen_step(ctx: &TurnContext<'_>, troop: TroopType) -> QueenCommand {
    if let Some(site) = ctx.touched().filter(|s| viable(ctx, s)) {
        let enemy_distance = ctx.enemy_queen.position.distance(site.position);
        let kind = if enemy_distance <= ctx.tuning.enemy_queen_danger_distance {
            BuildKind::Tower
        } else {
            BuildKind::Barracks(troop)
        };
        return QueenCommand::build(site.id, kind);
    }

    ctx.nearest_site(ctx.queen.position, |s| viable(ctx, s))
        .map_or(QueenCommand::Wait, |s| ctx.move_to(s.position))
}

/// Trains `troop` at its first ready barracks once a batch is affordable.
pub fn train_step(ctx: &TurnContext<'_>, troop: TroopType) -> TrainCommand {
    if !ctx.economy.can_afford_now(troop) {
        return TrainCommand::Idle;
    }
    ctx.world
        .ready_barracks(troop)
        .map_or(TrainCommand::Idle, |s| TrainCommand::At(s.id))
}
