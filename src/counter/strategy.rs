//! Counter strategy
//!
//! Turns an enemy analysis into recommended cookies, cookies to avoid and
//! priority targets. Candidate lists are filtered from the roster in
//! roster order. Rules are applied in order; a later matching rule
//! overrides the archetype, description and confidence of an earlier one.

use super::analysis::{EnemyAnalysis, SHADOW_MILK, TAUNT_TANKS};
use crate::model::Cookie;
use serde::Serialize;
use std::sync::Arc;

pub const BLACK_PEARL: &str = "Black Pearl Cookie";

pub const HIGH_HP_TANKS: [&str; 4] = [
    "Millennial Tree Cookie",
    "Hollyberry Cookie",
    "Dark Cacao Cookie",
    "Elder Faerie Cookie",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterStrategy {
    /// Deduplicated, first occurrence kept
    pub recommended: Vec<String>,
    pub avoid: Vec<String>,
    pub priority_targets: Vec<String>,
    pub archetype: String,
    pub description: String,
    pub confidence: u8,
}

impl CounterStrategy {
    pub fn recommends(&self, name: &str) -> bool {
        self.recommended.iter().any(|r| r == name)
    }

    fn set(&mut self, archetype: &str, description: impl Into<String>, confidence: u8) {
        self.archetype = archetype.to_string();
        self.description = description.into();
        self.confidence = confidence;
    }
}

fn names_where(roster: &[Arc<Cookie>], pred: impl Fn(&Cookie) -> bool) -> Vec<String> {
    roster
        .iter()
        .filter(|c| pred(c))
        .map(|c| c.name.clone())
        .collect()
}

fn first(names: Vec<String>, n: usize) -> Vec<String> {
    names.into_iter().take(n).collect()
}

fn dedup_in_order(list: &mut Vec<String>) {
    let mut seen = rustc_hash::FxHashSet::default();
    list.retain(|name| seen.insert(name.clone()));
}

fn mentions_debuff(cookie: &Cookie) -> bool {
    cookie
        .key_mechanic
        .as_deref()
        .map(|m| m.contains("Debuff") || m.contains("DoT"))
        .unwrap_or(false)
}

/// Counter plan against the analysed team, drawing cookies from `roster`
pub fn plan_counter(analysis: &EnemyAnalysis, roster: &[Arc<Cookie>]) -> CounterStrategy {
    let mut strategy = CounterStrategy::default();
    let healers = analysis.healer_count();

    let anti_heal = names_where(roster, |c| c.anti_heal);
    let ambush = names_where(roster, |c| c.targets_backline());

    if healers == 0 {
        let burst = names_where(roster, |c| c.deals_burst() && c.rarity.is_top_tier());
        strategy.recommended.extend(first(burst, 5));
        strategy.avoid.extend(anti_heal.iter().cloned());
        strategy.set("Burst Damage", "High burst damage to exploit lack of sustain", 90);
    } else if healers >= 2 {
        strategy.recommended.extend(anti_heal.iter().cloned());
        strategy.recommended.extend(ambush.iter().take(3).cloned());
        strategy.priority_targets = analysis.healers.clone();
        strategy.set(
            "Anti-Heal Assassin",
            "Eliminate healers with ambush cookies and use anti-heal",
            88,
        );
    }

    if analysis.front >= 3 {
        strategy.recommended.extend(names_where(roster, |c| c.anti_tank));
        strategy.set("Defense Shred", "Defense shred and sustained damage against tanks", 85);
    }

    if analysis.exposed_backline() {
        strategy.recommended.extend(ambush.iter().cloned());
        strategy.priority_targets = analysis
            .healers
            .iter()
            .chain(analysis.dps.iter())
            .cloned()
            .collect();
        strategy.set("Dive/Assassin", "Ambush assassins to eliminate exposed backline", 92);
    }

    if analysis.has_shadow_milk {
        strategy.recommended.extend(TAUNT_TANKS.iter().map(|n| n.to_string()));
        strategy.recommended.push(SHADOW_MILK.to_string());
        strategy.recommended.push(BLACK_PEARL.to_string());
        strategy.avoid.push("Single-carry DPS teams".to_string());
        strategy.set(
            "Anti-Shadow Milk",
            "Taunt tanks to redirect Shadow Milk or mirror match",
            90,
        );
    }

    if analysis.cc_count() >= 2 {
        strategy.recommended.extend(names_where(roster, |c| c.has_immunity()));
        strategy.set(
            "Immunity/Cleanse",
            format!("Immunity to counter {} crowd control", analysis.cc_types.join(", ")),
            80,
        );
    }

    if analysis.burst_damage && healers <= 1 {
        strategy.recommended.extend(first(names_where(roster, |c| c.provides_shield), 3));
        strategy.recommended.extend(first(names_where(roster, |c| c.provides_healing), 2));
        strategy.recommended.extend(HIGH_HP_TANKS.iter().take(2).map(|n| n.to_string()));
        strategy.set(
            "Tank/Sustain",
            "High HP tanks, shields, and healing to survive burst, then attrition",
            85,
        );
    }

    if !analysis.immunity {
        strategy.recommended.extend(first(names_where(roster, |c| c.has_crowd_control()), 3));
        strategy.set("CC Lockdown", "Heavy crowd control to lock down enemy team", 82);
    }

    if !analysis.cleanse {
        let debuffers = first(names_where(roster, mentions_debuff), 3);
        if !debuffers.is_empty() {
            strategy.recommended.extend(debuffers);
            // Archetype and confidence stay with the previous rule
            strategy.description = "Stack debuffs and damage-over-time effects".to_string();
        }
    }

    dedup_in_order(&mut strategy.recommended);
    dedup_in_order(&mut strategy.avoid);
    strategy
}
