//! Fall back toward the home corner.
//!
//! Sites crossed on the way are fortified with towers. A mine is built
//! instead only while income is thin and no knights are close, and a
//! first knight barracks takes precedence once it is nearly affordable.

use super::context::TurnContext;
use crate::board::{Owner, Site, SiteId, StructureType, TroopType};
use crate::protocol::{BuildKind, QueenCommand, TrainCommand};

/// Whether it is calm and poor enough to spend the retreat on mining.
fn should_mine(ctx: &TurnContext<'_>) -> bool {
    ctx.economy.income_rate() < ctx.tuning.low_income
        && ctx
            .threat
            .knights_within(ctx.queen.position, ctx.tuning.retreat_knight_range)
            == 0
}

pub fn queen_step(ctx: &TurnContext<'_>) -> QueenCommand {
    let mining = should_mine(ctx);

    if let Some(site) = ctx.touched() {
        if let Some(kind) = build_on_touched(ctx, site, mining) {
            return QueenCommand::build(site.id, kind);
        }
    }

    if mining {
        if let Some(site) = home_mine_site(ctx, ctx.world.touched_site) {
            return ctx.move_to(site.position);
        }
    }

    let corner = ctx.retreat_corner();
    if ctx.queen.position.distance(corner) <= ctx.tuning.arrive_distance {
        QueenCommand::Wait
    } else {
        ctx.move_to(corner)
    }
}

fn build_on_touched(ctx: &TurnContext<'_>, site: &Site, mining: bool) -> Option<BuildKind> {
    if site.is_friendly() {
        if ctx.policy.should_expand_tower(site) {
            return Some(BuildKind::Tower);
        }
        if mining && ctx.policy.should_expand_gold_mine(site) {
            return Some(BuildKind::Mine);
        }
        return None;
    }
    if !site.can_be_built_on() {
        return None;
    }
    let no_knight_barracks = ctx
        .world
        .count_barracks(Owner::Friendly, TroopType::Knight)
        == 0;
    if no_knight_barracks
        && ctx.economy.affordable_within(
            TroopType::Knight,
            1,
            ctx.tuning.retreat_knight_afford_turns,
        )
    {
        return Some(BuildKind::Barracks(TroopType::Knight));
    }
    if mining && ctx.policy.is_good_mine_site(site) {
        return Some(BuildKind::Mine);
    }
    Some(BuildKind::Tower)
}

/// The good mine site inside the home box closest to the retreat corner.
fn home_mine_site<'a>(ctx: &TurnContext<'a>, exclude: Option<SiteId>) -> Option<&'a Site> {
    ctx.nearest_site(ctx.retreat_corner(), |s| {
        Some(s.id) != exclude
            && s.can_be_built_on()
            && ctx.in_home_box(s)
            && ctx.policy.is_good_mine_site(s)
            && !ctx.under_tower_fire(s)
    })
}

/// Archers first, then giants against a tower-heavy enemy, then knights.
pub fn train_step(ctx: &TurnContext<'_>) -> TrainCommand {
    let w = ctx.world;
    let giants_useful = w.count_structures(Owner::Enemy, StructureType::Tower)
        >= ctx.tuning.giant_trigger_towers;
    let order = [
        (TroopType::Archer, true),
        (TroopType::Giant, giants_useful),
        (TroopType::Knight, true),
    ];
    order
        .iter()
        .filter(|(troop, wanted)| *wanted && ctx.economy.can_afford_now(*troop))
        .find_map(|(troop, _)| w.ready_barracks(*troop))
        .map_or(TrainCommand::Idle, |s| TrainCommand::At(s.id))
}
