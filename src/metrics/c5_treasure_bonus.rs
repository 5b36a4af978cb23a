//! COMPONENT 5: TREASURE BONUS
//!
//! Present only when treasures are equipped (0-15):
//!   - Base: mean treasure power, capped at 10
//!   - Stats: summed ATK/100, CRIT/30, CDR/40, each capped at 1 and only when positive
//!   - Specials (capped at 2): revive +0.5, cleanse +0.3, enemy debuff +0.4,
//!     any shield or heal +0.5, summon boost +0.8 with a summoner else -0.3

use crate::metrics::c3_power::treasure_power;
use crate::model::{Cookie, Treasure};
use std::sync::Arc;

const MAX_BASE: f64 = 10.0;
const MAX_SPECIAL: f64 = 2.0;
const MAX_TOTAL: f64 = 15.0;

#[derive(Debug, Clone, Default)]
pub struct C5Result {
    pub score: f64,
    pub base: f64,
    pub stat_bonus: f64,
    pub special_bonus: f64,
}

fn stat_term(total: f64, scale: f64) -> f64 {
    if total > 0.0 {
        (total / scale).min(1.0)
    } else {
        0.0
    }
}

pub fn calculate_c5(cookies: &[Arc<Cookie>], treasures: &[Arc<Treasure>]) -> C5Result {
    if treasures.is_empty() {
        return C5Result::default();
    }

    let n = treasures.len() as f64;
    let base = (treasures.iter().map(|t| treasure_power(t)).sum::<f64>() / n).min(MAX_BASE);

    let total_atk: f64 = treasures.iter().map(|t| t.atk_boost_max).sum();
    let total_crit: f64 = treasures.iter().map(|t| t.crit_boost_max).sum();
    let total_cdr: f64 = treasures.iter().map(|t| t.cooldown_reduction_max).sum();
    let stat_bonus = stat_term(total_atk, 100.0) + stat_term(total_crit, 30.0) + stat_term(total_cdr, 40.0);

    let mut special: f64 = 0.0;
    if treasures.iter().any(|t| t.revive) {
        special += 0.5;
    }
    if treasures.iter().any(|t| t.debuff_cleanse) {
        special += 0.3;
    }
    if treasures.iter().any(|t| t.enemy_debuff) {
        special += 0.4;
    }
    let total_shield: f64 = treasures.iter().map(|t| t.hp_shield_max).sum();
    let total_heal: f64 = treasures.iter().map(|t| t.heal_max).sum();
    if total_shield > 0.0 || total_heal > 0.0 {
        special += 0.5;
    }
    if treasures.iter().any(|t| t.summon_boost) {
        if cookies.iter().any(|c| c.is_summoner()) {
            special += 0.8;
        } else {
            special -= 0.3;
        }
    }
    let special_bonus = special.min(MAX_SPECIAL);

    C5Result {
        score: (base + stat_bonus + special_bonus).min(MAX_TOTAL),
        base,
        stat_bonus,
        special_bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role, TierRanking};
    use approx::assert_relative_eq;

    fn summoner() -> Arc<Cookie> {
        Arc::new(
            Cookie::new("Summoner", Rarity::Epic, Role::Magic, Position::Rear)
                .with_skill("Call", "Summon"),
        )
    }

    #[test]
    fn test_no_treasures_is_zero() {
        assert_eq!(calculate_c5(&[summoner()], &[]).score, 0.0);
    }

    #[test]
    fn test_stats_and_specials() {
        let mut a = Treasure::new("A", TierRanking::S);
        a.atk_boost_max = 50.0;
        a.revive = true;
        let mut b = Treasure::new("B", TierRanking::A);
        b.crit_boost_max = 45.0;
        b.heal_max = 10.0;

        let result = calculate_c5(&[summoner()], &[Arc::new(a), Arc::new(b)]);
        assert_relative_eq!(result.base, (8.5 + 7.0) / 2.0);
        assert_relative_eq!(result.stat_bonus, 0.5 + 1.0);
        assert_relative_eq!(result.special_bonus, 1.0);
        assert_relative_eq!(result.score, 7.75 + 1.5 + 1.0);
    }

    #[test]
    fn test_summon_boost_penalty_without_summoner() {
        let mut t = Treasure::new("Boost", TierRanking::B);
        t.summon_boost = true;
        let dps = Arc::new(Cookie::new("Dps", Rarity::Epic, Role::Magic, Position::Rear));

        let result = calculate_c5(&[dps], &[Arc::new(t.clone())]);
        assert_relative_eq!(result.special_bonus, -0.3);
        assert_relative_eq!(result.score, 5.5 - 0.3);

        let boosted = calculate_c5(&[summoner()], &[Arc::new(t)]);
        assert_relative_eq!(boosted.special_bonus, 0.8);
    }

    #[test]
    fn test_total_is_capped() {
        let mut t = Treasure::new("Max", TierRanking::SPlus).with_archetypes(&["Universal"]);
        t.atk_boost_max = 500.0;
        t.crit_boost_max = 500.0;
        t.cooldown_reduction_max = 500.0;
        t.revive = true;
        t.debuff_cleanse = true;
        t.enemy_debuff = true;
        t.hp_shield_max = 10.0;
        let result = calculate_c5(&[summoner()], &[Arc::new(t)]);
        assert_relative_eq!(result.special_bonus, 2.0);
        assert_relative_eq!(result.score, 15.0);
    }
}
