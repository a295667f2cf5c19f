//! Default behavior: grow the economy and claim new ground.

use super::context::TurnContext;
use crate::board::{Owner, Site, TroopType};
use crate::protocol::{BuildKind, QueenCommand, TrainCommand};

pub fn queen_step(ctx: &TurnContext<'_>) -> QueenCommand {
    if let Some(site) = ctx.touched() {
        if let Some(kind) = build_on_touched(ctx, site) {
            return QueenCommand::build(site.id, kind);
        }
    }

    let touched = ctx.world.touched_site;
    ctx.nearest_site(ctx.queen.position, |s| {
        Some(s.id) != touched && !s.is_friendly() && s.can_be_built_on() && !ctx.under_tower_fire(s)
    })
    .map_or(QueenCommand::Wait, |s| ctx.move_to(s.position))
}

fn build_on_touched(ctx: &TurnContext<'_>, site: &Site) -> Option<BuildKind> {
    if ctx.policy.should_expand_gold_mine(site) {
        return Some(BuildKind::Mine);
    }
    if ctx.policy.should_expand_tower(site) {
        return Some(BuildKind::Tower);
    }
    if site.is_friendly() || !site.can_be_built_on() {
        return None;
    }
    let kind = if ctx
        .threat
        .queen_threatened_by_knights(ctx.tuning.explore_sensitivity)
    {
        BuildKind::Tower
    } else if ctx.policy.is_good_mine_site(site) {
        BuildKind::Mine
    } else {
        BuildKind::Tower
    };
    Some(kind)
}

/// Trains knights at the first ready knight barracks once a batch is
/// nearly affordable.
pub fn train_step(ctx: &TurnContext<'_>) -> TrainCommand {
    let w = ctx.world;
    if w.count_barracks(Owner::Friendly, TroopType::Knight) == 0 {
        return TrainCommand::Idle;
    }
    if !ctx
        .economy
        .affordable_within(TroopType::Knight, 1, ctx.tuning.explore_train_turns - 1)
    {
        return TrainCommand::Idle;
    }
    w.ready_barracks(TroopType::Knight)
        .map_or(TrainCommand::Idle, |s| TrainCommand::At(s.id))
}
