//! Strategy selection.
//!
//! The world is checked against a fixed, ordered list of guards every turn
//! and the first guard that holds picks the strategy. Nothing is sticky
//! except the setup phase, which stays active until it reports completion.

use super::context::TurnContext;
use super::{Progress, StrategyKind};
use crate::board::{Owner, StructureType, TroopType, UnitType};

type Guard = fn(&TurnContext<'_>, &Progress) -> bool;

/// Guards in priority order. The last one always holds.
const RULES: [(StrategyKind, Guard); 6] = [
    (StrategyKind::Setup, setup_active),
    (StrategyKind::Retreat, retreat_needed),
    (StrategyKind::BuildBarracks(TroopType::Archer), archer_barracks_needed),
    (StrategyKind::BuildBarracks(TroopType::Giant), giant_barracks_needed),
    (StrategyKind::BuildBarracks(TroopType::Knight), knight_barracks_needed),
    (StrategyKind::Explore, always),
];

/// Picks the strategy that governs this turn.
pub fn select(ctx: &TurnContext<'_>, progress: &Progress) -> StrategyKind {
    RULES
        .iter()
        .find(|(_, guard)| guard(ctx, progress))
        .map_or(StrategyKind::Explore, |(kind, _)| *kind)
}

fn setup_active(_ctx: &TurnContext<'_>, progress: &Progress) -> bool {
    !progress.setup_complete
}

fn retreat_needed(ctx: &TurnContext<'_>, _progress: &Progress) -> bool {
    let t = ctx.tuning;
    let fresh_barracks_on_thin_income = ctx
        .world
        .count_barracks(Owner::Friendly, TroopType::Knight)
        == 1
        && ctx.economy.income_rate() < t.low_income;
    let swarmed =
        ctx.world.count_units(Owner::Enemy, UnitType::Knight) > t.overwhelming_knights;
    fresh_barracks_on_thin_income
        || swarmed
        || ctx.threat.queen_threatened_by_knights(t.retreat_sensitivity)
}

/// Enough gold, now or shortly, for a few batches of `troop`.
fn affluent(ctx: &TurnContext<'_>, troop: TroopType) -> bool {
    ctx.economy
        .affordable_within(troop, ctx.tuning.affluent_units, ctx.tuning.affluent_turns)
}

fn archer_barracks_needed(ctx: &TurnContext<'_>, _progress: &Progress) -> bool {
    let w = ctx.world;
    let enemy_melee = w.count_units(Owner::Enemy, UnitType::Knight)
        >= ctx.tuning.archer_trigger_knights
        || w.count_units(Owner::Enemy, UnitType::Giant) > 0;
    enemy_melee
        && w.count_barracks(Owner::Friendly, TroopType::Archer) == 0
        && affluent(ctx, TroopType::Archer)
}

fn giant_barracks_needed(ctx: &TurnContext<'_>, _progress: &Progress) -> bool {
    let w = ctx.world;
    w.count_structures(Owner::Enemy, StructureType::Tower) >= ctx.tuning.giant_trigger_towers
        && w.count_barracks(Owner::Friendly, TroopType::Giant) == 0
        && affluent(ctx, TroopType::Giant)
}

fn knight_barracks_needed(ctx: &TurnContext<'_>, _progress: &Progress) -> bool {
    let t = ctx.tuning;
    let owned = ctx.world.count_barracks(Owner::Friendly, TroopType::Knight);
    let first_affordable = owned == 0
        && ctx
            .economy
            .affordable_within(TroopType::Knight, 1, t.knight_barracks_afford_turns);
    let enemy_queen_weak = ctx.enemy_queen.health <= t.enemy_queen_critical_health;
    let raid = owned < t.max_knight_barracks
        && ctx.economy.gold() >= t.rich_gold
        && ctx.queen.position.distance(ctx.enemy_queen.position) <= t.enemy_queen_near_distance;
    first_affordable || enemy_queen_weak || raid
}

fn always(_ctx: &TurnContext<'_>, _progress: &Progress) -> bool {
    true
}
