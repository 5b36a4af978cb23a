//! Treasure record: an equippable team modifier (up to 3 per team)

use crate::metrics::c3_power::treasure_power;
use crate::model::attributes::TierRanking;
use std::hash::{Hash, Hasher};

pub const UNIVERSAL_ARCHETYPE: &str = "Universal";

#[derive(Debug, Clone, Default)]
pub struct Treasure {
    pub name: String,
    pub rarity: String,
    pub activation_type: String,
    /// None when the tier is missing or unrecognised
    pub tier: Option<TierRanking>,
    pub effect_category: String,
    pub primary_effect: String,

    pub atk_boost_max: f64,
    pub crit_boost_max: f64,
    pub cooldown_reduction_max: f64,
    pub dmg_resist_max: f64,
    pub hp_shield_max: f64,
    pub heal_max: f64,

    pub revive: bool,
    pub debuff_cleanse: bool,
    pub enemy_debuff: bool,
    pub summon_boost: bool,

    pub recommended_archetypes: Vec<String>,
    pub cooldown_seconds: f64,
    pub special_condition: Option<String>,
}

impl Treasure {
    pub fn new(name: impl Into<String>, tier: TierRanking) -> Self {
        Self {
            name: name.into(),
            tier: Some(tier),
            ..Self::default()
        }
    }

    pub fn with_archetypes<S: AsRef<str>>(mut self, archetypes: &[S]) -> Self {
        self.recommended_archetypes = archetypes.iter().map(|a| a.as_ref().to_string()).collect();
        self
    }

    pub fn is_universal(&self) -> bool {
        self.recommends(UNIVERSAL_ARCHETYPE)
    }

    pub fn recommends(&self, archetype: &str) -> bool {
        self.recommended_archetypes.iter().any(|a| a == archetype)
    }

    pub fn tier_label(&self) -> &'static str {
        self.tier.map(TierRanking::label).unwrap_or("?")
    }

    pub fn boosts_offense(&self) -> bool {
        self.atk_boost_max > 0.0 || self.crit_boost_max > 0.0
    }

    pub fn provides_sustain(&self) -> bool {
        self.hp_shield_max > 0.0 || self.heal_max > 0.0
    }

    pub fn power(&self) -> f64 {
        treasure_power(self)
    }
}

impl PartialEq for Treasure {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Treasure {}

impl Hash for Treasure {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_detection() {
        let treasure = Treasure::new("Squishy Jelly Watch", TierRanking::SPlus)
            .with_archetypes(&["Universal", "DPS"]);
        assert!(treasure.is_universal());
        assert!(treasure.recommends("DPS"));
        assert!(!treasure.recommends("Tank"));
    }

    #[test]
    fn test_equality_by_name() {
        let a = Treasure::new("Old Pilgrim's Scroll", TierRanking::S);
        let mut b = Treasure::new("Old Pilgrim's Scroll", TierRanking::C);
        b.atk_boost_max = 20.0;
        assert_eq!(a, b);
    }
}
