//! Counter score (0-100)
//!
//! - Recommended members: 40 × (recommended / 5)
//! - Specific counters, capped at 30
//! - Role balance: 5 each for tank, healer, DPS
//! - Synergy: min(team synergy / 100 × 15, 15)

use super::analysis::EnemyAnalysis;
use super::strategy::CounterStrategy;
use crate::model::{Team, TEAM_SIZE};
use serde::Serialize;

const RECOMMENDED_WEIGHT: f64 = 40.0;
const SPECIFIC_CAP: f64 = 30.0;
const BALANCE_STEP: f64 = 5.0;
const SYNERGY_CAP: f64 = 15.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CounterScore {
    pub recommended: f64,
    pub specific: f64,
    pub balance: f64,
    pub synergy: f64,
    pub total: f64,
}

fn specific_counters(team: &Team, analysis: &EnemyAnalysis) -> f64 {
    let cookies = team.cookies();
    let mut score = 0.0;

    if analysis.healer_count() >= 2 && cookies.iter().any(|c| c.anti_heal) {
        score += 10.0;
    }
    if analysis.rear >= 3 && cookies.iter().any(|c| c.targets_backline()) {
        score += 10.0;
    }
    if analysis.tank_count() >= 2 && cookies.iter().any(|c| c.anti_tank) {
        score += 10.0;
    }
    if !analysis.immunity && cookies.iter().any(|c| c.has_crowd_control()) {
        score += 5.0;
    }
    if analysis.cc_count() >= 2 && cookies.iter().any(|c| c.has_immunity()) {
        score += 5.0;
    }

    f64::min(score, SPECIFIC_CAP)
}

fn role_balance(team: &Team) -> f64 {
    let cookies = team.cookies();
    [
        cookies.iter().any(|c| c.role.is_tank()),
        cookies.iter().any(|c| c.role.is_healer()),
        cookies.iter().any(|c| c.role.is_damage()),
    ]
    .iter()
    .filter(|present| **present)
    .count() as f64
        * BALANCE_STEP
}

/// How well `team` counters the analysed enemy
pub fn counter_score(team: &Team, analysis: &EnemyAnalysis, strategy: &CounterStrategy) -> CounterScore {
    let recommended_count = team
        .cookies()
        .iter()
        .filter(|c| strategy.recommends(&c.name))
        .count();

    let recommended = recommended_count as f64 / TEAM_SIZE as f64 * RECOMMENDED_WEIGHT;
    let specific = specific_counters(team, analysis);
    let balance = role_balance(team);
    let synergy = f64::min(team.synergy_score() / 100.0 * SYNERGY_CAP, SYNERGY_CAP).max(0.0);

    CounterScore {
        recommended,
        specific,
        balance,
        synergy,
        total: (recommended + specific + balance + synergy).clamp(0.0, 100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cookie, Position, Rarity, Role};
    use crate::synergy::SynergyEngine;
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn counter_team() -> Team {
        let cookies = vec![
            Cookie::new("Dark Cacao Cookie", Rarity::Ancient, Role::Charge, Position::Front).with_anti_tank(),
            Cookie::new("Poison Mushroom Cookie", Rarity::Epic, Role::Bomber, Position::Rear).with_anti_heal(),
            Cookie::new("Vampire Cookie", Rarity::Epic, Role::Ambush, Position::Middle),
            Cookie::new("Frost Queen Cookie", Rarity::Legendary, Role::Magic, Position::Middle)
                .with_crowd_control("Freeze"),
            Cookie::new("Cream Ferret Cookie", Rarity::Epic, Role::Support, Position::Rear).with_immunity("Stun"),
        ];
        Team::from_cookies(cookies.into_iter().map(Arc::new).collect(), &SynergyEngine::default()).unwrap()
    }

    #[test]
    fn test_specific_counters_cap_at_thirty() {
        let team = counter_team();
        let analysis = EnemyAnalysis {
            healers: vec!["A".into(), "B".into()],
            tanks: vec!["C".into(), "D".into()],
            crowd_control: vec!["E".into(), "F".into()],
            rear: 3,
            ..Default::default()
        };
        let score = counter_score(&team, &analysis, &CounterStrategy::default());
        assert_relative_eq!(score.specific, 30.0);
        assert_relative_eq!(score.recommended, 0.0);
        assert_relative_eq!(score.balance, 15.0);
    }

    #[test]
    fn test_recommended_ratio() {
        let team = counter_team();
        let strategy = CounterStrategy {
            recommended: vec!["Vampire Cookie".into(), "Poison Mushroom Cookie".into(), "Nobody".into()],
            ..Default::default()
        };
        let analysis = EnemyAnalysis {
            immunity: true,
            ..Default::default()
        };
        let score = counter_score(&team, &analysis, &strategy);
        assert_relative_eq!(score.recommended, 16.0);
        assert_relative_eq!(score.specific, 0.0);
        assert!(score.total <= 100.0);
        assert_relative_eq!(score.total, score.recommended + score.balance + score.synergy);
    }
}
