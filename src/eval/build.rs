//! Construction predicates.
//!
//! Pure judgments about whether a site is worth upgrading or claiming.
//! They read the world through a [`ThreatSensor`] and never mutate it.

use super::threat::ThreatSensor;
use crate::board::Site;
use crate::config::Tuning;

#[derive(Debug, Clone, Copy)]
pub struct BuildPolicy<'a> {
    threat: ThreatSensor<'a>,
    tuning: &'a Tuning,
}

impl<'a> BuildPolicy<'a> {
    pub fn new(threat: ThreatSensor<'a>, tuning: &'a Tuning) -> Self {
        BuildPolicy { threat, tuning }
    }

    fn knight_threatened(&self, site: &Site) -> bool {
        self.threat.site_threatened_by_knights(
            site,
            self.tuning.site_knight_range,
            self.tuning.site_knight_count,
        )
    }

    /// A friendly mine with gold left in the ground, room to grow, and no
    /// knights bearing down on it.
    pub fn should_expand_gold_mine(&self, site: &Site) -> bool {
        site.is_friendly()
            && site.is_mine()
            && site.gold_remaining > self.tuning.mine_expand_min_gold
            && !site.is_maxed_mine()
            && !self.knight_threatened(site)
    }

    /// A friendly tower whose range is still short, while the queen is safe
    /// enough to stand and reinforce it.
    pub fn should_expand_tower(&self, site: &Site) -> bool {
        site.is_friendly()
            && site
                .tower_range()
                .is_some_and(|range| range <= self.tuning.big_tower_range)
            && !self
                .threat
                .queen_threatened_by_knights(self.tuning.tower_expand_sensitivity)
    }

    /// A site we do not own yet that still holds gold and is neither a
    /// tower nor under knight pressure.
    pub fn is_good_mine_site(&self, site: &Site) -> bool {
        !site.is_friendly()
            && site.gold_remaining > self.tuning.mine_site_min_gold
            && !site.is_tower()
            && !self.knight_threatened(site)
    }
}
