//! World state representation.
//!
//! Holds the authoritative per-turn snapshot: gold, every site keyed by its
//! stable id, every visible unit, and the friendly queen's start corner.
//! Sites are created once from the initial layout and updated in place;
//! gold, the touched site and the unit list are replaced every turn.

use std::collections::{BTreeMap, BTreeSet};

use super::geometry::Position;
use super::site::{Site, SiteId, SiteLayout, SiteStatus, StructureType};
use super::unit::{Owner, TroopType, Unit, UnitType};
use crate::error::ProtocolError;

/// One decoded per-turn snapshot, as delivered by the protocol layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnSnapshot {
    pub gold: i32,
    pub touched_site: Option<SiteId>,
    pub sites: Vec<SiteStatus>,
    pub units: Vec<Unit>,
}

/// The complete world as seen at the start of a turn.
///
/// Sites live in a `BTreeMap` so every scan visits them in id order,
/// independent of the order the protocol reported them in.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldState {
    pub gold: i32,
    pub touched_site: Option<SiteId>,
    pub units: Vec<Unit>,
    sites: BTreeMap<SiteId, Site>,
    start_corner: Option<Position>,
}

impl WorldState {
    /// Creates the world from the initial site layout. Each id may appear
    /// only once.
    pub fn from_layout(layout: &[SiteLayout]) -> Result<Self, ProtocolError> {
        let mut sites = BTreeMap::new();
        for entry in layout {
            if sites.insert(entry.id, Site::new(*entry)).is_some() {
                return Err(ProtocolError::DuplicateSite(entry.id));
            }
        }
        Ok(WorldState {
            gold: 0,
            touched_site: None,
            units: Vec::new(),
            sites,
            start_corner: None,
        })
    }

    /// Applies a turn snapshot.
    ///
    /// The snapshot is validated before anything is written: every site id
    /// must come from the layout and appear at most once, and each side must
    /// field exactly one queen. On error the world is left untouched.
    pub fn apply_turn(&mut self, snapshot: TurnSnapshot) -> Result<(), ProtocolError> {
        let mut seen = BTreeSet::new();
        for status in &snapshot.sites {
            if !self.sites.contains_key(&status.id) {
                return Err(ProtocolError::UnknownSite(status.id));
            }
            if !seen.insert(status.id) {
                return Err(ProtocolError::DuplicateSite(status.id));
            }
        }
        if let Some(id) = snapshot.touched_site {
            if !self.sites.contains_key(&id) {
                return Err(ProtocolError::UnknownSite(id));
            }
        }
        let queen = sole_queen(&snapshot.units, Owner::Friendly)?;
        sole_queen(&snapshot.units, Owner::Enemy)?;

        self.start_corner
            .get_or_insert_with(|| queen.position.nearest_corner());

        for status in &snapshot.sites {
            if let Some(site) = self.sites.get_mut(&status.id) {
                site.update(status);
            }
        }
        self.gold = snapshot.gold;
        self.touched_site = snapshot.touched_site;
        self.units = snapshot.units;
        Ok(())
    }

    /// The corner the friendly queen started nearest to. Fixed by the first
    /// applied snapshot.
    pub fn start_corner(&self) -> Option<Position> {
        self.start_corner
    }

    /// All sites in id order.
    pub fn sites(&self) -> impl Iterator<Item = &Site> + '_ {
        self.sites.values()
    }

    pub fn site(&self, id: SiteId) -> Option<&Site> {
        self.sites.get(&id)
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// The site the friendly queen is standing on.
    pub fn touched(&self) -> Option<&Site> {
        self.touched_site.and_then(|id| self.sites.get(&id))
    }

    /// Looks up the queen of `owner` in the current unit list.
    pub fn queen(&self, owner: Owner) -> Result<&Unit, ProtocolError> {
        find_queen(&self.units, owner)
    }

    /// Total income over every friendly mine, maxed or not.
    pub fn income_rate(&self) -> i32 {
        self.sites
            .values()
            .filter(|s| s.is_friendly())
            .map(Site::income_rate)
            .sum()
    }

    pub fn units_of(&self, owner: Owner, unit_type: UnitType) -> impl Iterator<Item = &Unit> + '_ {
        self.units
            .iter()
            .filter(move |u| u.is(owner, unit_type))
    }

    pub fn count_units(&self, owner: Owner, unit_type: UnitType) -> usize {
        self.units_of(owner, unit_type).count()
    }

    /// Sites owned by `owner` carrying a structure of `kind`.
    pub fn structures(
        &self,
        owner: Owner,
        kind: StructureType,
    ) -> impl Iterator<Item = &Site> + '_ {
        self.sites
            .values()
            .filter(move |s| s.owner == owner && s.structure_type() == kind)
    }

    pub fn count_structures(&self, owner: Owner, kind: StructureType) -> usize {
        self.structures(owner, kind).count()
    }

    /// Barracks owned by `owner` that train `troop`.
    pub fn barracks(&self, owner: Owner, troop: TroopType) -> impl Iterator<Item = &Site> + '_ {
        self.sites
            .values()
            .filter(move |s| s.owner == owner && s.barracks_troop() == Some(troop))
    }

    pub fn count_barracks(&self, owner: Owner, troop: TroopType) -> usize {
        self.barracks(owner, troop).count()
    }

    /// The lowest-id friendly barracks of `troop` that can train right now.
    pub fn ready_barracks(&self, troop: TroopType) -> Option<&Site> {
        self.sites.values().find(|s| s.is_ready_barracks(troop))
    }
}

fn find_queen(units: &[Unit], owner: Owner) -> Result<&Unit, ProtocolError> {
    units
        .iter()
        .find(|u| u.is(owner, UnitType::Queen))
        .ok_or(ProtocolError::MissingQueen(owner))
}

/// Like `find_queen`, but a second queen of the same owner is an error.
fn sole_queen(units: &[Unit], owner: Owner) -> Result<&Unit, ProtocolError> {
    let queen = find_queen(units, owner)?;
    if units.iter().filter(|u| u.is(owner, UnitType::Queen)).count() > 1 {
        return Err(ProtocolError::DuplicateQueen(owner));
    }
    Ok(queen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::site::Structure;

    fn layout() -> Vec<SiteLayout> {
        vec![
            SiteLayout {
                id: 0,
                position: Position::new(200, 200),
                radius: 60,
            },
            SiteLayout {
                id: 1,
                position: Position::new(1700, 800),
                radius: 60,
            },
        ]
    }

    fn queen(owner: Owner, x: i32, y: i32) -> Unit {
        Unit {
            position: Position::new(x, y),
            owner,
            unit_type: UnitType::Queen,
            health: 100,
        }
    }

    fn status(id: SiteId, owner: Owner, structure: Structure) -> SiteStatus {
        SiteStatus {
            id,
            gold_remaining: 150,
            max_mine_size: 3,
            owner,
            structure,
        }
    }

    fn snapshot(units: Vec<Unit>) -> TurnSnapshot {
        TurnSnapshot {
            gold: 100,
            touched_site: None,
            sites: vec![
                status(0, Owner::Friendly, Structure::Mine { income_rate: 3 }),
                status(1, Owner::Enemy, Structure::Mine { income_rate: 2 }),
            ],
            units,
        }
    }

    #[test]
    fn duplicate_layout_ids_are_rejected() {
        let mut entries = layout();
        entries.push(entries[0]);
        assert!(matches!(
            WorldState::from_layout(&entries),
            Err(ProtocolError::DuplicateSite(0))
        ));
    }

    #[test]
    fn apply_turn_updates_sites_and_income() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        world
            .apply_turn(snapshot(vec![
                queen(Owner::Friendly, 100, 900),
                queen(Owner::Enemy, 1800, 100),
            ]))
            .unwrap();
        assert_eq!(world.gold, 100);
        assert_eq!(world.income_rate(), 3);
        assert!(world.site(0).unwrap().is_maxed_mine());
        assert_eq!(world.start_corner(), Some(Position::new(0, 1000)));
    }

    #[test]
    fn missing_queen_is_a_protocol_violation() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        let err = world
            .apply_turn(snapshot(vec![queen(Owner::Friendly, 100, 900)]))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::MissingQueen(Owner::Enemy)));
        // Nothing was written.
        assert_eq!(world.gold, 0);
        assert!(world.start_corner().is_none());
    }

    #[test]
    fn unknown_site_is_a_protocol_violation() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        let mut snap = snapshot(vec![
            queen(Owner::Friendly, 100, 900),
            queen(Owner::Enemy, 1800, 100),
        ]);
        snap.sites.push(status(9, Owner::Neutral, Structure::None));
        assert!(matches!(
            world.apply_turn(snap),
            Err(ProtocolError::UnknownSite(9))
        ));
    }

    #[test]
    fn second_queen_of_one_side_is_rejected() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        let err = world
            .apply_turn(snapshot(vec![
                queen(Owner::Friendly, 400, 700),
                queen(Owner::Enemy, 1800, 100),
                queen(Owner::Friendly, 1500, 300),
            ]))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::DuplicateQueen(Owner::Friendly)));
        assert!(world.start_corner().is_none());

        let err = world
            .apply_turn(snapshot(vec![
                queen(Owner::Friendly, 400, 700),
                queen(Owner::Enemy, 1800, 100),
                queen(Owner::Enemy, 1600, 200),
            ]))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::DuplicateQueen(Owner::Enemy)));
    }

    #[test]
    fn repeated_site_row_is_rejected() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        let queens = || {
            vec![
                queen(Owner::Friendly, 100, 900),
                queen(Owner::Enemy, 1800, 100),
            ]
        };
        let mut first = snapshot(queens());
        first.sites = vec![
            status(0, Owner::Friendly, Structure::Mine { income_rate: 3 }),
            status(1, Owner::Friendly, Structure::Mine { income_rate: 3 }),
        ];
        world.apply_turn(first).unwrap();
        assert_eq!(world.income_rate(), 6);

        let mut second = snapshot(queens());
        second.gold = 7;
        second.sites = vec![
            status(0, Owner::Neutral, Structure::None),
            status(0, Owner::Neutral, Structure::None),
        ];
        assert!(matches!(
            world.apply_turn(second),
            Err(ProtocolError::DuplicateSite(0))
        ));
        // The rejected turn left nothing behind.
        assert_eq!(world.gold, 100);
        assert_eq!(world.income_rate(), 6);
    }

    #[test]
    fn start_corner_is_fixed_by_first_turn() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        world
            .apply_turn(snapshot(vec![
                queen(Owner::Friendly, 100, 900),
                queen(Owner::Enemy, 1800, 100),
            ]))
            .unwrap();
        world
            .apply_turn(snapshot(vec![
                queen(Owner::Friendly, 1800, 100),
                queen(Owner::Enemy, 100, 900),
            ]))
            .unwrap();
        assert_eq!(world.start_corner(), Some(Position::new(0, 1000)));
    }

    #[test]
    fn ready_barracks_picks_lowest_id() {
        let mut world = WorldState::from_layout(&layout()).unwrap();
        let mut snap = snapshot(vec![
            queen(Owner::Friendly, 100, 900),
            queen(Owner::Enemy, 1800, 100),
        ]);
        let knight_barracks = Structure::Barracks {
            turns_until_train: 0,
            troop: TroopType::Knight,
        };
        snap.sites = vec![
            status(0, Owner::Friendly, knight_barracks),
            status(1, Owner::Friendly, knight_barracks),
        ];
        world.apply_turn(snap).unwrap();
        assert_eq!(world.ready_barracks(TroopType::Knight).map(|s| s.id), Some(0));
        assert_eq!(world.count_barracks(Owner::Friendly, TroopType::Knight), 2);
        assert_eq!(world.income_rate(), 0);
    }
}
