//! Test fixtures: a small builder for hand-made worlds.

use crate::board::{
    Owner, Position, SiteId, SiteLayout, SiteStatus, Structure, TroopType, TurnSnapshot, Unit,
    UnitType, WorldState,
};

/// One site in a fixture world.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SiteSpec {
    pub layout: SiteLayout,
    pub status: SiteStatus,
}

impl SiteSpec {
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.layout.position = Position::new(x, y);
        self
    }

    pub fn gold(mut self, gold_remaining: i32) -> Self {
        self.status.gold_remaining = gold_remaining;
        self
    }

    pub fn max_size(mut self, max_mine_size: i32) -> Self {
        self.status.max_mine_size = max_mine_size;
        self
    }

    pub fn owner(mut self, owner: Owner) -> Self {
        self.status.owner = owner;
        self
    }
}

fn spec(id: SiteId, owner: Owner, structure: Structure) -> SiteSpec {
    let i = id as i32;
    SiteSpec {
        layout: SiteLayout {
            id,
            position: Position::new(250 + 160 * (i % 10), 150 + 350 * (i / 10)),
            radius: 60,
        },
        status: SiteStatus {
            id,
            gold_remaining: 200,
            max_mine_size: 5,
            owner,
            structure,
        },
    }
}

pub(crate) fn empty(id: SiteId) -> SiteSpec {
    spec(id, Owner::Neutral, Structure::None)
}

pub(crate) fn mine(id: SiteId, income_rate: i32) -> SiteSpec {
    spec(id, Owner::Friendly, Structure::Mine { income_rate })
}

pub(crate) fn barracks(id: SiteId, troop: TroopType, turns_until_train: i32) -> SiteSpec {
    spec(
        id,
        Owner::Friendly,
        Structure::Barracks {
            turns_until_train,
            troop,
        },
    )
}

pub(crate) fn tower(id: SiteId, owner: Owner, attack_range: i32) -> SiteSpec {
    spec(
        id,
        owner,
        Structure::Tower {
            health: 400,
            attack_range,
        },
    )
}

pub(crate) fn knight(x: i32, y: i32) -> Unit {
    Unit {
        position: Position::new(x, y),
        owner: Owner::Enemy,
        unit_type: UnitType::Knight,
        health: 25,
    }
}

/// Builder for a world with both queens present. The friendly queen starts
/// in the bottom-left quarter, the enemy queen in the top-right.
#[derive(Debug, Clone)]
pub(crate) struct World {
    gold: i32,
    touched: Option<SiteId>,
    sites: Vec<SiteSpec>,
    queen: Unit,
    enemy_queen: Unit,
    units: Vec<Unit>,
}

impl World {
    pub fn new() -> Self {
        World {
            gold: 0,
            touched: None,
            sites: Vec::new(),
            queen: Unit {
                position: Position::new(300, 800),
                owner: Owner::Friendly,
                unit_type: UnitType::Queen,
                health: 100,
            },
            enemy_queen: Unit {
                position: Position::new(1600, 200),
                owner: Owner::Enemy,
                unit_type: UnitType::Queen,
                health: 100,
            },
            units: Vec::new(),
        }
    }

    pub fn gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }

    pub fn touching(mut self, id: SiteId) -> Self {
        self.touched = Some(id);
        self
    }

    pub fn site(mut self, site: SiteSpec) -> Self {
        self.sites.push(site);
        self
    }

    pub fn unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Adds `n` enemy knights clustered far from the friendly queen.
    pub fn knights(mut self, n: usize) -> Self {
        for i in 0..n {
            let i = i as i32;
            self.units.push(knight(1500 + 10 * (i % 20), 100 + 10 * (i / 20)));
        }
        self
    }

    pub fn queen_at(mut self, x: i32, y: i32) -> Self {
        self.queen.position = Position::new(x, y);
        self
    }

    pub fn queen_health(mut self, health: i32) -> Self {
        self.queen.health = health;
        self
    }

    pub fn enemy_queen_at(mut self, x: i32, y: i32) -> Self {
        self.enemy_queen.position = Position::new(x, y);
        self
    }

    pub fn enemy_queen_health(mut self, health: i32) -> Self {
        self.enemy_queen.health = health;
        self
    }

    pub fn build(&self) -> WorldState {
        let layout: Vec<SiteLayout> = self.sites.iter().map(|s| s.layout).collect();
        let mut world = WorldState::from_layout(&layout).expect("fixture layout");
        let mut units = vec![self.queen, self.enemy_queen];
        units.extend(self.units.iter().copied());
        world
            .apply_turn(TurnSnapshot {
                gold: self.gold,
                touched_site: self.touched,
                sites: self.sites.iter().map(|s| s.status).collect(),
                units,
            })
            .expect("fixture snapshot");
        world
    }
}
