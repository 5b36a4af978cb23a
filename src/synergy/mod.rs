//! Synergy Engine
//!
//! Pairwise synergy (0-12), the whole-team breakdown (0-110), advanced
//! synergy (element/group/combo) and partner suggestions. The engine is
//! injected into `Team` construction and holds the combo table it scores
//! against.

pub mod role_matrix;
pub mod pairwise;
pub mod team_synergy;
pub mod advanced;
pub mod suggestions;

pub use advanced::{AdvancedSynergy, SpecialCombo, SPECIAL_COMBOS};
pub use pairwise::{pairwise_breakdown, pairwise_synergy, PairwiseSynergy, MAX_PAIRWISE_SYNERGY};
pub use role_matrix::role_compatibility;
pub use suggestions::{suggest_partners, PartnerSuggestion};
pub use team_synergy::{positions_present, AbilityPresence, SynergyBreakdown, MAX_TEAM_SYNERGY};

use crate::model::Cookie;
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
pub struct SynergyEngine {
    combos: &'static [SpecialCombo],
}

impl Default for SynergyEngine {
    fn default() -> Self {
        Self::new(SPECIAL_COMBOS)
    }
}

impl SynergyEngine {
    pub fn new(combos: &'static [SpecialCombo]) -> Self {
        Self { combos }
    }

    pub fn combos(&self) -> &'static [SpecialCombo] {
        self.combos
    }

    pub fn pairwise(&self, a: &Cookie, b: &Cookie) -> f64 {
        pairwise_synergy(a, b)
    }

    pub fn team_synergy(&self, cookies: &[Arc<Cookie>]) -> SynergyBreakdown {
        team_synergy::team_synergy(cookies)
    }

    pub fn advanced_synergy(&self, cookies: &[Arc<Cookie>]) -> AdvancedSynergy {
        advanced::advanced_synergy(cookies, self.combos)
    }

    pub fn suggest(&self, selected: &[Arc<Cookie>], pool: &[Arc<Cookie>], top_n: usize) -> Vec<PartnerSuggestion> {
        suggest_partners(selected, pool, top_n)
    }
}
