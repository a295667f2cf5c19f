//! World representation.
//!
//! Contains the data model for positions, sites, units, and the per-turn
//! world state that every decision reads.

pub mod geometry;
pub mod site;
pub mod state;
pub mod unit;

pub use geometry::{nearest, nearest_by, Nearest, Position, FIELD_HEIGHT, FIELD_WIDTH};
pub use site::{Site, SiteId, SiteLayout, SiteStatus, Structure, StructureType};
pub use state::{TurnSnapshot, WorldState};
pub use unit::{Owner, TroopType, Unit, UnitType};
