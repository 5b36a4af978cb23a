//! Weakness detection
//!
//! A fixed table of condition -> weakness rows. Each row that matches the
//! analysis yields one weakness; the list is ranked by confidence.

use super::analysis::EnemyAnalysis;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Weakness {
    pub name: &'static str,
    pub description: String,
    pub exploit: &'static str,
    pub priority: Priority,
    /// 0-100
    pub confidence: u8,
}

impl Weakness {
    fn new(
        name: &'static str,
        description: impl Into<String>,
        exploit: &'static str,
        priority: Priority,
        confidence: u8,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            exploit,
            priority,
            confidence,
        }
    }
}

/// Weaknesses of the analysed team, highest confidence first
///
/// Equal confidences keep table order.
pub fn identify_weaknesses(analysis: &EnemyAnalysis) -> Vec<Weakness> {
    let mut weaknesses = Vec::new();
    let healers = analysis.healer_count();

    if healers == 0 {
        weaknesses.push(Weakness::new(
            "No Healing/Sustain",
            "Team cannot recover from damage over time",
            "Use sustained DPS or high burst damage to overwhelm",
            Priority::High,
            95,
        ));
    }

    if analysis.front >= 3 {
        weaknesses.push(Weakness::new(
            "Tank-Heavy Frontline",
            format!("{} cookies in front position", analysis.front),
            "Use defense shred, ambush cookies, or percentage-based damage",
            Priority::High,
            90,
        ));
    }

    if analysis.exposed_backline() {
        weaknesses.push(Weakness::new(
            "Exposed Backline",
            format!("{} rear cookies with weak frontline", analysis.rear),
            "Use ambush assassins to eliminate squishy backline targets",
            Priority::High,
            92,
        ));
    }

    if !analysis.immunity && analysis.cc_count() == 0 {
        weaknesses.push(Weakness::new(
            "No CC Immunity",
            "Team vulnerable to stun/freeze/silence lockdown",
            "Use crowd control heavy team to prevent skill usage",
            Priority::Medium,
            75,
        ));
    }

    if !analysis.cleanse {
        weaknesses.push(Weakness::new(
            "No Debuff Cleanse",
            "Cannot remove negative status effects",
            "Stack debuffs and damage-over-time effects",
            Priority::Medium,
            70,
        ));
    }

    if healers >= 2 {
        weaknesses.push(Weakness::new(
            "Healing-Heavy Team",
            format!("{} support/healing cookies", healers),
            "Use anti-heal cookies or burst damage to eliminate healers first",
            Priority::High,
            88,
        ));
    }

    if analysis.has_shadow_milk && !analysis.taunt {
        weaknesses.push(Weakness::new(
            "Shadow Milk Without Taunt Defense",
            "Shadow Milk can freely assassinate backline",
            "Counter with taunt tanks or Shadow Milk mirror match",
            Priority::Critical,
            95,
        ));
    }

    if analysis.burst_damage && healers <= 1 {
        weaknesses.push(Weakness::new(
            "Burst-Heavy Low-Sustain Team",
            "High damage but cannot sustain through long fights",
            "Use high HP tanks and shields to survive burst, then attrition",
            Priority::High,
            85,
        ));
    }

    if healers >= 1 && analysis.anti_heal.is_empty() {
        weaknesses.push(Weakness::new(
            "No Anti-Heal",
            "Cannot counter enemy healing",
            "If using healing team, stack sustain to outlast",
            Priority::Low,
            60,
        ));
    }

    // sort_by is stable
    weaknesses.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    weaknesses
}
