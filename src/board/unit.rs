//! Unit types and ownership.
//!
//! Units carry no identity across turns; the whole list is replaced by
//! every snapshot.

use super::geometry::Position;
use crate::error::ProtocolError;

/// Which side controls a unit or a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Friendly,
    Enemy,
    Neutral,
}

impl Owner {
    /// Decodes a protocol owner code (`-1` neutral, `0` self, `1` enemy).
    pub fn from_code(code: i32) -> Result<Owner, ProtocolError> {
        match code {
            -1 => Ok(Owner::Neutral),
            0 => Ok(Owner::Friendly),
            1 => Ok(Owner::Enemy),
            other => Err(ProtocolError::UnknownOwner(other)),
        }
    }
}

/// A unit type that barracks can train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TroopType {
    Knight,
    Archer,
    Giant,
}

impl TroopType {
    /// All trainable troop types, in protocol code order.
    pub const ALL: [TroopType; 3] = [TroopType::Knight, TroopType::Archer, TroopType::Giant];

    /// Decodes the barracks `param2` code (`0` knight, `1` archer, `2` giant).
    pub fn from_code(code: i32) -> Result<TroopType, ProtocolError> {
        match code {
            0 => Ok(TroopType::Knight),
            1 => Ok(TroopType::Archer),
            2 => Ok(TroopType::Giant),
            other => Err(ProtocolError::UnknownBarracksType(other)),
        }
    }

    /// The suffix used in `BUILD <id> BARRACKS-<suffix>`.
    pub const fn barracks_suffix(self) -> &'static str {
        match self {
            TroopType::Knight => "KNIGHT",
            TroopType::Archer => "ARCHER",
            TroopType::Giant => "GIANT",
        }
    }

    /// The unit type produced by barracks of this kind.
    pub const fn unit_type(self) -> UnitType {
        match self {
            TroopType::Knight => UnitType::Knight,
            TroopType::Archer => UnitType::Archer,
            TroopType::Giant => UnitType::Giant,
        }
    }
}

/// The type of a unit on the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Queen,
    Knight,
    Archer,
    Giant,
}

impl UnitType {
    /// Decodes a protocol unit type code (`-1` queen, `0` knight,
    /// `1` archer, `2` giant).
    pub fn from_code(code: i32) -> Result<UnitType, ProtocolError> {
        match code {
            -1 => Ok(UnitType::Queen),
            0 => Ok(UnitType::Knight),
            1 => Ok(UnitType::Archer),
            2 => Ok(UnitType::Giant),
            other => Err(ProtocolError::UnknownUnitType(other)),
        }
    }
}

/// A unit as reported by the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub position: Position,
    pub owner: Owner,
    pub unit_type: UnitType,
    pub health: i32,
}

impl Unit {
    pub fn is(&self, owner: Owner, unit_type: UnitType) -> bool {
        self.owner == owner && self.unit_type == unit_type
    }
}
