//! Buildable sites and the structures standing on them.
//!
//! A site's id, position and radius are fixed by the initial layout. The
//! structure record (owner, type, and its parameters) is rewritten in place
//! every turn.

use super::geometry::Position;
use super::unit::{Owner, TroopType};
use crate::error::ProtocolError;

/// Stable site identifier assigned at game start.
pub type SiteId = u32;

/// The kind of structure on a site, as encoded by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureType {
    None,
    Mine,
    Tower,
    Barracks,
}

impl StructureType {
    /// Decodes a protocol structure code (`-1` none, `0` mine, `1` tower,
    /// `2` barracks).
    pub fn from_code(code: i32) -> Result<StructureType, ProtocolError> {
        match code {
            -1 => Ok(StructureType::None),
            0 => Ok(StructureType::Mine),
            1 => Ok(StructureType::Tower),
            2 => Ok(StructureType::Barracks),
            other => Err(ProtocolError::UnknownStructureType(other)),
        }
    }
}

/// A structure with its type-specific parameters decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    None,
    /// `param1` is the current income rate.
    Mine { income_rate: i32 },
    /// `param1` is hit points, `param2` the attack range.
    Tower { health: i32, attack_range: i32 },
    /// `param1` counts turns until the next batch can be trained, `param2`
    /// names the troop type.
    Barracks {
        turns_until_train: i32,
        troop: TroopType,
    },
}

impl Structure {
    /// Decodes the structure code together with its two parameters.
    pub fn decode(type_code: i32, param1: i32, param2: i32) -> Result<Structure, ProtocolError> {
        Ok(match StructureType::from_code(type_code)? {
            StructureType::None => Structure::None,
            StructureType::Mine => Structure::Mine { income_rate: param1 },
            StructureType::Tower => Structure::Tower {
                health: param1,
                attack_range: param2,
            },
            StructureType::Barracks => Structure::Barracks {
                turns_until_train: param1,
                troop: TroopType::from_code(param2)?,
            },
        })
    }

    pub fn structure_type(&self) -> StructureType {
        match self {
            Structure::None => StructureType::None,
            Structure::Mine { .. } => StructureType::Mine,
            Structure::Tower { .. } => StructureType::Tower,
            Structure::Barracks { .. } => StructureType::Barracks,
        }
    }
}

/// Immutable per-site facts from the initial layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteLayout {
    pub id: SiteId,
    pub position: Position,
    pub radius: i32,
}

/// The per-turn state of one site after decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteStatus {
    pub id: SiteId,
    /// Gold left in the ground, or `-1` when not visible.
    pub gold_remaining: i32,
    /// Highest income rate a mine here can reach, or `-1` when not visible.
    pub max_mine_size: i32,
    pub owner: Owner,
    pub structure: Structure,
}

/// A buildable site: fixed layout plus the latest structure record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub id: SiteId,
    pub position: Position,
    pub radius: i32,
    pub gold_remaining: i32,
    pub max_mine_size: i32,
    pub owner: Owner,
    pub structure: Structure,
}

impl Site {
    /// Creates an empty, neutral site from its layout entry.
    pub fn new(layout: SiteLayout) -> Self {
        Site {
            id: layout.id,
            position: layout.position,
            radius: layout.radius,
            gold_remaining: -1,
            max_mine_size: -1,
            owner: Owner::Neutral,
            structure: Structure::None,
        }
    }

    /// Overwrites the mutable structure record with this turn's status.
    pub fn update(&mut self, status: &SiteStatus) {
        debug_assert_eq!(self.id, status.id);
        self.gold_remaining = status.gold_remaining;
        self.max_mine_size = status.max_mine_size;
        self.owner = status.owner;
        self.structure = status.structure;
    }

    pub fn is_friendly(&self) -> bool {
        self.owner == Owner::Friendly
    }

    pub fn is_enemy(&self) -> bool {
        self.owner == Owner::Enemy
    }

    pub fn structure_type(&self) -> StructureType {
        self.structure.structure_type()
    }

    pub fn is_tower(&self) -> bool {
        matches!(self.structure, Structure::Tower { .. })
    }

    pub fn is_mine(&self) -> bool {
        matches!(self.structure, Structure::Mine { .. })
    }

    /// Income rate of a mine, zero for anything else.
    pub fn income_rate(&self) -> i32 {
        match self.structure {
            Structure::Mine { income_rate } => income_rate,
            _ => 0,
        }
    }

    /// A mine is maxed out once its income rate equals the site's maximum.
    pub fn is_maxed_mine(&self) -> bool {
        matches!(self.structure, Structure::Mine { income_rate } if income_rate == self.max_mine_size)
    }

    /// Attack range of a tower.
    pub fn tower_range(&self) -> Option<i32> {
        match self.structure {
            Structure::Tower { attack_range, .. } => Some(attack_range),
            _ => None,
        }
    }

    /// The troop type this site trains, if it is a barracks.
    pub fn barracks_troop(&self) -> Option<TroopType> {
        match self.structure {
            Structure::Barracks { troop, .. } => Some(troop),
            _ => None,
        }
    }

    /// True for a friendly barracks of `troop` that can train this turn.
    pub fn is_ready_barracks(&self, troop: TroopType) -> bool {
        self.is_friendly()
            && matches!(
                self.structure,
                Structure::Barracks { troop: t, turns_until_train: 0 } if t == troop
            )
    }

    /// The queen may build here unless the site is an enemy tower or one of
    /// our barracks in the middle of training.
    pub fn can_be_built_on(&self) -> bool {
        match self.structure {
            Structure::Tower { .. } => !self.is_enemy(),
            Structure::Barracks {
                turns_until_train, ..
            } => !(self.is_friendly() && turns_until_train > 0),
            _ => true,
        }
    }
}
