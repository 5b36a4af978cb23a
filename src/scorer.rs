//! Composition Scorer - coordinator for team composition scores
//!
//! Sums the six components (role diversity, position coverage, power,
//! bonus modifiers, treasure bonus, synergy bonus) into one team score.
//! The total has no hard ceiling.

use crate::metrics::*;
use crate::model::{Cookie, Treasure};
use crate::synergy::SynergyBreakdown;
use serde::Serialize;
use std::sync::Arc;

/// Composition score with its component breakdown
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositionScore {
    pub role_diversity: f64,
    pub position_coverage: f64,
    pub power: f64,
    pub bonus: f64,
    pub treasure_bonus: f64,
    pub synergy_bonus: f64,
    pub total: f64,
}

impl CompositionScore {
    /// Score without the optional treasure and synergy terms
    pub fn base(&self) -> f64 {
        self.role_diversity + self.position_coverage + self.power + self.bonus
    }
}

/// Full component results, for explanations
#[derive(Debug, Clone)]
pub struct ComponentResults {
    pub c1: C1Result,
    pub c2: C2Result,
    pub c3: C3Result,
    pub c4: C4Result,
    pub c5: C5Result,
    pub c6: C6Result,
}

impl ComponentResults {
    pub fn score(&self) -> CompositionScore {
        let mut score = CompositionScore {
            role_diversity: self.c1.score,
            position_coverage: self.c2.score,
            power: self.c3.score,
            bonus: self.c4.score,
            treasure_bonus: self.c5.score,
            synergy_bonus: self.c6.score,
            total: 0.0,
        };
        score.total = score.base() + score.treasure_bonus + score.synergy_bonus;
        score
    }
}

/// Stateless scorer; the synergy breakdown is computed by the caller
#[derive(Debug, Clone, Copy)]
pub struct CompositionScorer {
    include_synergy: bool,
}

impl Default for CompositionScorer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CompositionScorer {
    pub fn new(include_synergy: bool) -> Self {
        Self { include_synergy }
    }

    pub fn include_synergy(&self) -> bool {
        self.include_synergy
    }

    /// Compute all six components
    pub fn components(
        &self,
        cookies: &[Arc<Cookie>],
        treasures: &[Arc<Treasure>],
        synergy: &SynergyBreakdown,
    ) -> ComponentResults {
        ComponentResults {
            c1: calculate_c1(cookies),
            c2: calculate_c2(cookies),
            c3: calculate_c3(cookies),
            c4: calculate_c4(cookies),
            c5: calculate_c5(cookies, treasures),
            c6: calculate_c6(synergy, self.include_synergy),
        }
    }

    pub fn score(
        &self,
        cookies: &[Arc<Cookie>],
        treasures: &[Arc<Treasure>],
        synergy: &SynergyBreakdown,
    ) -> CompositionScore {
        self.components(cookies, treasures, synergy).score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role, TierRanking};
    use crate::synergy::SynergyEngine;
    use approx::assert_relative_eq;

    fn balanced() -> Vec<Arc<Cookie>> {
        vec![
            Arc::new(Cookie::new("Hollyberry Cookie", Rarity::Ancient, Role::Defense, Position::Front)),
            Arc::new(Cookie::new("Pure Vanilla Cookie", Rarity::Ancient, Role::Healing, Position::Rear)),
            Arc::new(Cookie::new("Sea Fairy Cookie", Rarity::Legendary, Role::Bomber, Position::Rear)),
            Arc::new(Cookie::new("Espresso Cookie", Rarity::Epic, Role::Magic, Position::Middle)),
            Arc::new(Cookie::new("Wind Archer Cookie", Rarity::Ancient, Role::Ranged, Position::Rear)),
        ]
    }

    #[test]
    fn test_score_without_optional_terms() {
        let cookies = balanced();
        let synergy = SynergyEngine::default().team_synergy(&cookies);
        let score = CompositionScorer::new(false).score(&cookies, &[], &synergy);

        assert_eq!(score.role_diversity, 30.0);
        assert_eq!(score.position_coverage, 25.0);
        assert_relative_eq!(score.power, 6.0 + 6.0 + 5.0 + 3.0 + 6.0);
        assert_eq!(score.bonus, 8.0);
        assert_eq!(score.treasure_bonus, 0.0);
        assert_eq!(score.synergy_bonus, 0.0);
        assert_relative_eq!(score.total, 89.0);
    }

    #[test]
    fn test_synergy_bonus_added_when_enabled() {
        let cookies = balanced();
        let synergy = SynergyEngine::default().team_synergy(&cookies);
        let with = CompositionScorer::new(true).score(&cookies, &[], &synergy);
        let without = CompositionScorer::new(false).score(&cookies, &[], &synergy);

        assert!(with.synergy_bonus > 0.0);
        assert_relative_eq!(with.total - without.total, with.synergy_bonus);
    }

    #[test]
    fn test_treasure_bonus_added() {
        let cookies = balanced();
        let synergy = SynergyBreakdown::default();
        let treasures = vec![Arc::new(Treasure::new("Jelly Watch", TierRanking::SPlus))];
        let score = CompositionScorer::new(false).score(&cookies, &treasures, &synergy);
        assert_relative_eq!(score.treasure_bonus, 10.0);
        assert_relative_eq!(score.total, 99.0);
    }
}
