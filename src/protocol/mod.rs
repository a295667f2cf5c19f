//! Turn protocol handling.
//!
//! Decoding of the initial layout and per-turn snapshot blocks, and the
//! two-line command output each turn must produce.

pub mod command;
pub mod parser;

pub use command::{BuildKind, QueenCommand, TrainCommand, TurnCommands};
pub use parser::{
    parse_count, parse_site_layout, parse_site_status, parse_turn_header, parse_unit,
    ProtocolReader,
};
