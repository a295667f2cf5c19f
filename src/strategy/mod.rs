//! Strategy selection and command generation.
//!
//! A turn is decided in two stages: the selector picks one
//! [`StrategyKind`] from an ordered guard list, then that strategy produces
//! the queen command and the training command. Both stages are pure
//! functions of the world, the tuning and the engine's [`Progress`].

pub mod barracks;
pub mod context;
pub mod explore;
pub mod retreat;
pub mod selector;
pub mod setup;

#[cfg(test)]
pub(crate) mod testutil;

use std::fmt;

pub use context::TurnContext;
pub use selector::select;

use crate::board::{TroopType, WorldState};
use crate::config::Tuning;
use crate::error::ProtocolError;
use crate::protocol::{QueenCommand, TrainCommand, TurnCommands};

/// The behaviors the engine can adopt for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Setup,
    Retreat,
    BuildBarracks(TroopType),
    Explore,
}

impl StrategyKind {
    /// Runs this strategy's queen step.
    pub fn queen_step(self, ctx: &TurnContext<'_>) -> QueenStep {
        match self {
            StrategyKind::Setup => setup::queen_step(ctx),
            StrategyKind::Retreat => retreat::queen_step(ctx).into(),
            StrategyKind::BuildBarracks(troop) => barracks::queen_step(ctx, troop).into(),
            StrategyKind::Explore => explore::queen_step(ctx).into(),
        }
    }

    /// Runs this strategy's training step.
    pub fn train_step(self, ctx: &TurnContext<'_>) -> TrainCommand {
        match self {
            StrategyKind::Setup => TrainCommand::Idle,
            StrategyKind::Retreat => retreat::train_step(ctx),
            StrategyKind::BuildBarracks(troop) => barracks::train_step(ctx, troop),
            StrategyKind::Explore => explore::train_step(ctx),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Setup => f.write_str("setup"),
            StrategyKind::Retreat => f.write_str("retreat"),
            StrategyKind::BuildBarracks(troop) => {
                write!(f, "build-{}-barracks", troop.barracks_suffix().to_lowercase())
            }
            StrategyKind::Explore => f.write_str("explore"),
        }
    }
}

/// Engine state that survives between turns and feeds strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Set once the setup strategy has ordered its knight barracks.
    pub setup_complete: bool,
}

/// A queen command plus the one signal a strategy may raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueenStep {
    pub command: QueenCommand,
    pub completes_setup: bool,
}

impl From<QueenCommand> for QueenStep {
    fn from(command: QueenCommand) -> Self {
        QueenStep {
            command,
            completes_setup: false,
        }
    }
}

/// Everything decided for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub strategy: StrategyKind,
    pub commands: TurnCommands,
    pub completes_setup: bool,
}

/// Decides the turn: select a strategy, then run both of its steps.
pub fn decide(
    world: &WorldState,
    tuning: &Tuning,
    progress: &Progress,
) -> Result<Decision, ProtocolError> {
    let ctx = TurnContext::new(world, tuning)?;
    let strategy = select(&ctx, progress);
    let step = strategy.queen_step(&ctx);
    let train = strategy.train_step(&ctx);
    Ok(Decision {
        strategy,
        commands: TurnCommands {
            queen: step.command,
            train,
        },
        completes_setup: step.completes_setup,
    })
}
