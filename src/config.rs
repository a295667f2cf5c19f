//! Engine tuning.
//!
//! Every numeric knob the decision core uses lives in [`Tuning`]. The
//! defaults are the tuned values; a JSON file may override any subset of
//! them.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an optional tuning file.
pub const TUNING_ENV: &str = "CASTELLAN_TUNING";

/// Parameters for a health-scaled knight threat judgment.
///
/// At full health the queen only counts knights within `proximity_min` and
/// needs `count_max` of them to feel threatened; as health drops the window
/// widens toward `proximity_max` and the bar falls toward `count_min`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct KnightSensitivity {
    pub proximity_min: f64,
    pub proximity_max: f64,
    pub count_min: f64,
    pub count_max: f64,
    pub exponent: f64,
}

impl KnightSensitivity {
    pub const fn new(
        proximity_min: f64,
        proximity_max: f64,
        count_min: f64,
        count_max: f64,
        exponent: f64,
    ) -> Self {
        KnightSensitivity {
            proximity_min,
            proximity_max,
            count_min,
            count_max,
            exponent,
        }
    }
}

/// All tunable constants of the decision core.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Turns subtracted from an afford projection to account for income
    /// showing up in reported gold one turn late.
    pub afford_lag_turns: i32,
    /// Queen health treated as "full" when scaling threat thresholds.
    pub health_scale: f64,

    /// A friendly tower with a range above this is left alone.
    pub big_tower_range: i32,
    /// Gold that must remain in a friendly mine before upgrading it.
    pub mine_expand_min_gold: i32,
    /// Gold that must remain at a site before opening a mine there.
    pub mine_site_min_gold: i32,
    /// Radius around a site in which enemy knights count as a threat.
    pub site_knight_range: f64,
    /// Knights within `site_knight_range` needed to threaten a site.
    pub site_knight_count: usize,
    /// Slack subtracted from enemy tower ranges when judging site safety.
    pub tower_tolerance: f64,

    pub tower_expand_sensitivity: KnightSensitivity,
    pub explore_sensitivity: KnightSensitivity,
    pub retreat_sensitivity: KnightSensitivity,

    /// Retreat once the enemy fields more knights than this.
    pub overwhelming_knights: usize,
    /// Income below which the economy counts as weak.
    pub low_income: i32,
    pub archer_trigger_knights: usize,
    pub giant_trigger_towers: usize,
    /// Units of a type that must be affordable within `affluent_turns`
    /// before a new barracks is considered.
    pub affluent_units: i32,
    pub affluent_turns: i32,
    pub knight_barracks_afford_turns: i32,
    pub enemy_queen_critical_health: i32,
    pub rich_gold: i32,
    pub max_knight_barracks: usize,
    /// Distance to the enemy queen that counts as "close" for a raid.
    pub enemy_queen_near_distance: f64,
    /// An enemy queen this close to the touched site forces a tower.
    pub enemy_queen_danger_distance: f64,

    pub setup_box_width: i32,
    pub setup_box_height: i32,
    pub setup_knight_afford_turns: i32,
    /// Explore trains a knight when one is affordable in fewer turns.
    pub explore_train_turns: i32,
    pub retreat_knight_afford_turns: i32,
    pub retreat_knight_range: f64,

    pub margin_x: i32,
    pub margin_y: i32,
    /// Within this distance of a move target the queen waits instead.
    pub arrive_distance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            afford_lag_turns: 1,
            health_scale: 100.0,
            big_tower_range: 310,
            mine_expand_min_gold: 60,
            mine_site_min_gold: 30,
            site_knight_range: 300.0,
            site_knight_count: 2,
            tower_tolerance: 20.0,
            tower_expand_sensitivity: KnightSensitivity::new(30.0, 160.0, 1.0, 9.0, 1.0),
            explore_sensitivity: KnightSensitivity::new(60.0, 250.0, 1.0, 4.0, 1.0),
            retreat_sensitivity: KnightSensitivity::new(150.0, 450.0, 3.0, 8.0, 2.0),
            overwhelming_knights: 20,
            low_income: 5,
            archer_trigger_knights: 8,
            giant_trigger_towers: 3,
            affluent_units: 2,
            affluent_turns: 3,
            knight_barracks_afford_turns: 3,
            enemy_queen_critical_health: 20,
            rich_gold: 300,
            max_knight_barracks: 2,
            enemy_queen_near_distance: 800.0,
            enemy_queen_danger_distance: 250.0,
            setup_box_width: 800,
            setup_box_height: 600,
            setup_knight_afford_turns: 3,
            explore_train_turns: 2,
            retreat_knight_afford_turns: 2,
            retreat_knight_range: 300.0,
            margin_x: 140,
            margin_y: 115,
            arrive_distance: 30.0,
        }
    }
}

impl Tuning {
    /// Parses a tuning override from JSON. Missing fields keep their
    /// defaults.
    pub fn from_json_str(json: &str) -> Result<Tuning, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a tuning override from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Tuning, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Tuning::from_json_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
