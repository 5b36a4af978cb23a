//! Counter treasure recommendation
//!
//! Tier base plus condition bonuses keyed on the enemy analysis, plus
//! 1.5 per archetype shared with the counter team. Top 3.

use super::analysis::EnemyAnalysis;
use crate::model::{Team, Treasure};
use crate::recommend::DEFAULT_TREASURE_REASON;
use serde::Serialize;
use std::sync::Arc;

pub const COUNTER_TREASURE_COUNT: usize = 3;

const UNRANKED_BASE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreasureEffects {
    pub atk_boost: f64,
    pub crit_boost: f64,
    pub cooldown_reduction: f64,
    pub dmg_resist: f64,
    pub hp_shield: f64,
    pub heal: f64,
}

impl TreasureEffects {
    fn of(treasure: &Treasure) -> Self {
        Self {
            atk_boost: treasure.atk_boost_max,
            crit_boost: treasure.crit_boost_max,
            cooldown_reduction: treasure.cooldown_reduction_max,
            dmg_resist: treasure.dmg_resist_max,
            hp_shield: treasure.hp_shield_max,
            heal: treasure.heal_max,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterTreasure {
    pub name: String,
    pub tier: &'static str,
    pub score: f64,
    pub reason: String,
    pub effects: TreasureEffects,
}

struct Tally {
    score: f64,
    reasons: Vec<String>,
}

impl Tally {
    fn add(&mut self, when: bool, points: f64, reason: impl Into<String>) {
        if when {
            self.score += points;
            self.reasons.push(reason.into());
        }
    }
}

/// Archetypes of the counter team by role only
fn role_archetypes(team: &Team) -> Vec<&'static str> {
    let cookies = team.cookies();
    let mut archetypes = Vec::with_capacity(3);
    if cookies.iter().any(|c| c.role.is_damage()) {
        archetypes.push("DPS");
    }
    if cookies.iter().any(|c| c.role.is_tank()) {
        archetypes.push("Tank");
    }
    if cookies.iter().any(|c| c.role.is_healer()) {
        archetypes.push("Sustain");
    }
    archetypes
}

fn score_treasure(analysis: &EnemyAnalysis, archetypes: &[&str], t: &Treasure) -> (f64, Vec<String>) {
    let mut tally = Tally {
        score: t.tier.map(|tier| tier.recommendation_base()).unwrap_or(UNRANKED_BASE),
        reasons: Vec::new(),
    };
    let offensive = t.atk_boost_max > 0.0 || t.crit_boost_max > 0.0;
    let cdr = t.cooldown_reduction_max > 0.0;
    let shield = t.hp_shield_max > 0.0;
    let resist = t.dmg_resist_max > 0.0;
    let heal = t.heal_max > 0.0;

    if analysis.healer_count() >= 2 {
        tally.add(offensive, 4.0, "Burst damage to overwhelm healing");
        tally.add(t.enemy_debuff, 3.0, "Debuffs to reduce enemy effectiveness");
    }

    if analysis.tank_count() >= 2 {
        tally.add(cdr, 4.0, "CDR for sustained pressure vs tanks");
        tally.add(t.atk_boost_max > 0.0, 2.0, "ATK boost for tank-busting");
    }

    if analysis.exposed_backline() {
        tally.add(offensive, 5.0, "Offensive stats to punish weak frontline");
        tally.add(cdr, 3.0, "Faster skills to burst backline");
    }

    if analysis.has_shadow_milk {
        tally.add(shield, 4.0, "Shield to survive Shadow Milk burst");
        tally.add(resist, 3.0, "DMG resist vs Shadow Milk");
        tally.add(t.debuff_cleanse, 3.0, "Cleanse Shadow Milk debuffs");
    }

    if analysis.cc_count() >= 2 {
        tally.add(
            shield || heal,
            4.0,
            format!("Sustain to survive {} CC", analysis.cc_types.join(", ")),
        );
        tally.add(t.debuff_cleanse, 5.0, "Cleanse crowd control effects");
    }

    if analysis.burst_damage {
        tally.add(shield, 5.0, "Shield critical vs burst damage");
        tally.add(resist, 4.0, "DMG resist to survive initial burst");
        tally.add(heal, 3.0, "Healing to recover from burst");
        tally.add(t.revive, 4.0, "Revival as backup vs burst");
    }

    if !analysis.immunity {
        tally.add(t.enemy_debuff, 4.0, "Debuffs (enemy has no immunity)");
        tally.add(cdr, 2.0, "CDR to spam CC");
    }

    if !analysis.cleanse {
        tally.add(t.enemy_debuff, 3.0, "Enemy can't cleanse debuffs");
    }

    if t.is_universal() {
        tally.score += 3.0;
        if tally.reasons.is_empty() {
            tally.reasons.push("Universal treasure (works with any strategy)".to_string());
        }
    }

    let shared = archetypes.iter().filter(|a| t.recommends(a)).count();
    tally.score += shared as f64 * 1.5;

    (tally.score, tally.reasons)
}

/// Best treasures for `team` against the analysed enemy
pub fn recommend_counter_treasures(
    analysis: &EnemyAnalysis,
    team: &Team,
    treasures: &[Arc<Treasure>],
) -> Vec<CounterTreasure> {
    let archetypes = role_archetypes(team);
    let mut scored: Vec<CounterTreasure> = treasures
        .iter()
        .map(|treasure| {
            let (score, reasons) = score_treasure(analysis, &archetypes, treasure);
            CounterTreasure {
                name: treasure.name.clone(),
                tier: treasure.tier_label(),
                score,
                reason: reasons
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| DEFAULT_TREASURE_REASON.to_string()),
                effects: TreasureEffects::of(treasure),
            }
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(COUNTER_TREASURE_COUNT);
    scored
}
