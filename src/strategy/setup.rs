//! Opening expansion.
//!
//! Claims mines near the start corner until a knight barracks becomes
//! affordable, orders it, and reports that setup is complete. Nothing is
//! trained during setup.

use super::context::TurnContext;
use super::QueenStep;
use crate::board::{Site, SiteId, TroopType};
use crate::protocol::{BuildKind, QueenCommand};

fn claimable(site: &Site) -> bool {
    !site.is_friendly() && site.can_be_built_on()
}

pub fn queen_step(ctx: &TurnContext<'_>) -> QueenStep {
    let Some(site) = ctx.touched() else {
        return next_site(ctx, None).into();
    };

    if ctx.policy.should_expand_gold_mine(site) {
        return QueenCommand::build(site.id, BuildKind::Mine).into();
    }
    if claimable(site)
        && ctx.economy.affordable_within(
            TroopType::Knight,
            1,
            ctx.tuning.setup_knight_afford_turns,
        )
    {
        tracing::debug!(site = site.id, "setup: ordering first knight barracks");
        return QueenStep {
            command: QueenCommand::build(site.id, BuildKind::Barracks(TroopType::Knight)),
            completes_setup: true,
        };
    }
    if claimable(site) && ctx.policy.is_good_mine_site(site) {
        return QueenCommand::build(site.id, BuildKind::Mine).into();
    }
    next_site(ctx, Some(site.id)).into()
}

/// Heads for the nearest claimable site inside the home box, falling back
/// to the nearest claimable site anywhere.
fn next_site(ctx: &TurnContext<'_>, exclude: Option<SiteId>) -> QueenCommand {
    let from = ctx.queen.position;
    let viable = |s: &Site| Some(s.id) != exclude && claimable(s);
    ctx.nearest_site(from, |s| viable(s) && ctx.in_home_box(s))
        .or_else(|| ctx.nearest_site(from, viable))
        .map_or(QueenCommand::Wait, |s| ctx.move_to(s.position))
}
