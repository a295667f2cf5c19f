//! Engine state management.
//!
//! Owns the world, the tuning and the progress that survives between
//! turns. Each turn it applies the snapshot, decides, records the setup
//! completion signal and hands back the two commands.

use std::io::{BufRead, Write};

use crate::board::{SiteLayout, TurnSnapshot, WorldState};
use crate::config::Tuning;
use crate::error::ProtocolError;
use crate::protocol::{ProtocolReader, TurnCommands};
use crate::strategy::{decide, Progress, StrategyKind};

/// Holds the mutable state of the engine between turns.
#[derive(Debug, Clone)]
pub struct Engine {
    world: WorldState,
    tuning: Tuning,
    progress: Progress,
    turn: u32,
    last_strategy: Option<StrategyKind>,
}

impl Engine {
    /// Creates an engine for the given site layout.
    pub fn new(layout: &[SiteLayout], tuning: Tuning) -> Result<Self, ProtocolError> {
        Ok(Engine {
            world: WorldState::from_layout(layout)?,
            tuning,
            progress: Progress::default(),
            turn: 0,
            last_strategy: None,
        })
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Number of turns played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The strategy that governed the most recent turn.
    pub fn last_strategy(&self) -> Option<StrategyKind> {
        self.last_strategy
    }

    /// Plays one turn.
    pub fn play_turn(&mut self, snapshot: TurnSnapshot) -> Result<TurnCommands, ProtocolError> {
        self.world.apply_turn(snapshot)?;
        self.turn += 1;

        let decision = decide(&self.world, &self.tuning, &self.progress)?;

        if self.last_strategy != Some(decision.strategy) {
            tracing::info!(turn = self.turn, strategy = %decision.strategy, "strategy change");
            self.last_strategy = Some(decision.strategy);
        }
        if decision.completes_setup && !self.progress.setup_complete {
            tracing::info!(turn = self.turn, "setup complete");
            self.progress.setup_complete = true;
        }
        tracing::debug!(
            turn = self.turn,
            gold = self.world.gold,
            income = self.world.income_rate(),
            queen = %decision.commands.queen,
            train = %decision.commands.train,
            "turn decided"
        );

        Ok(decision.commands)
    }
}

/// Runs a full session: reads the layout, then answers every turn block
/// until input ends. Returns the number of turns played.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    tuning: Tuning,
) -> Result<u32, ProtocolError> {
    let mut reader = ProtocolReader::new(input);
    let layout = reader.read_layout()?;
    tracing::info!(sites = layout.len(), "layout received");

    let mut engine = Engine::new(&layout, tuning)?;
    while let Some(snapshot) = reader.read_turn(layout.len())? {
        let commands = engine.play_turn(snapshot)?;
        commands.write_to(out)?;
    }
    Ok(engine.turn())
}
