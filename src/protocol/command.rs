//! Turn output commands.
//!
//! The engine answers every turn with exactly two lines: one queen command
//! and one training command. Both types format themselves in the wire
//! grammar through `Display`.

use std::fmt;
use std::io::{self, Write};

use crate::board::{Position, SiteId, TroopType};

/// What the queen should build on a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildKind {
    Mine,
    Tower,
    Barracks(TroopType),
}

impl fmt::Display for BuildKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildKind::Mine => f.write_str("MINE"),
            BuildKind::Tower => f.write_str("TOWER"),
            BuildKind::Barracks(troop) => write!(f, "BARRACKS-{}", troop.barracks_suffix()),
        }
    }
}

/// The queen's action for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueenCommand {
    /// `WAIT`
    Wait,
    /// `MOVE x y`
    Move(Position),
    /// `BUILD siteId MINE|TOWER|BARRACKS-<troop>`
    Build { site: SiteId, kind: BuildKind },
}

impl QueenCommand {
    pub fn build(site: SiteId, kind: BuildKind) -> Self {
        QueenCommand::Build { site, kind }
    }
}

impl fmt::Display for QueenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueenCommand::Wait => f.write_str("WAIT"),
            QueenCommand::Move(p) => write!(f, "MOVE {} {}", p.x, p.y),
            QueenCommand::Build { site, kind } => write!(f, "BUILD {} {}", site, kind),
        }
    }
}

/// The training action for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainCommand {
    /// Bare `TRAIN`: train nothing.
    Idle,
    /// `TRAIN siteId`
    At(SiteId),
}

impl fmt::Display for TrainCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainCommand::Idle => f.write_str("TRAIN"),
            TrainCommand::At(site) => write!(f, "TRAIN {}", site),
        }
    }
}

/// Both commands for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnCommands {
    pub queen: QueenCommand,
    pub train: TrainCommand,
}

impl TurnCommands {
    /// Writes the two output lines and flushes.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.queen)?;
        writeln!(out, "{}", self.train)?;
        out.flush()
    }
}
