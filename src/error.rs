//! Error types shared by the protocol layer and the engine.
//!
//! A protocol violation is unrecoverable: the engine cannot make a
//! meaningful decision from a snapshot it does not understand, so these
//! errors are surfaced immediately instead of being papered over with a
//! guessed default.

use thiserror::Error;

use crate::board::{Owner, SiteId};

/// Errors raised while decoding the per-turn text protocol or while
/// validating a decoded snapshot.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("unknown structure type code {0}")]
    UnknownStructureType(i32),

    #[error("unknown owner code {0}")]
    UnknownOwner(i32),

    #[error("unknown unit type code {0}")]
    UnknownUnitType(i32),

    #[error("unknown barracks unit code {0}")]
    UnknownBarracksType(i32),

    #[error("no {0:?} queen in unit list")]
    MissingQueen(Owner),

    #[error("more than one {0:?} queen in unit list")]
    DuplicateQueen(Owner),

    #[error("site {0} was not part of the initial layout")]
    UnknownSite(SiteId),

    #[error("site {0} appears twice in the layout or in one turn")]
    DuplicateSite(SiteId),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(&'static str),

    #[error("expected {expected} fields in {what} line, got {found}: '{line}'")]
    FieldCount {
        what: &'static str,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("invalid number '{token}' in {what} line")]
    InvalidNumber { what: &'static str, token: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while loading a tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse tuning file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
