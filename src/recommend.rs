//! Treasure recommendation for a team
//!
//! Scores every treasure against the team's archetypes (DPS, Tank,
//! Sustain, Summoner) and returns the best `top_n`. The reason is the
//! first rule that fired.

use crate::model::{Position, Team, Treasure, UNIVERSAL_ARCHETYPE};
use serde::Serialize;
use smallvec::SmallVec;
use std::sync::Arc;

pub const DEFAULT_TREASURE_REASON: &str = "Standard treasure";

/// Tier base when a treasure has no tier
const UNRANKED_BASE: f64 = 2.0;

#[derive(Debug, Clone, Serialize)]
pub struct TreasureRecommendation {
    pub treasure: String,
    pub tier: &'static str,
    pub score: f64,
    pub reason: String,
}

/// Archetypes present on a team, in a fixed order
pub fn team_archetypes(team: &Team) -> SmallVec<[&'static str; 4]> {
    let mut archetypes = SmallVec::new();
    if team.has_damage_dealer() {
        archetypes.push("DPS");
    }
    if team.cookies().iter().any(|c| c.role.is_tank()) {
        archetypes.push("Tank");
    }
    if team.has_healer() {
        archetypes.push("Sustain");
    }
    if team.has_summoner() {
        archetypes.push("Summoner");
    }
    archetypes
}

fn score_treasure(team: &Team, archetypes: &[&'static str], treasure: &Treasure) -> (f64, Vec<String>) {
    let mut score = treasure
        .tier
        .map(|t| t.recommendation_base())
        .unwrap_or(UNRANKED_BASE);
    let mut reasons = Vec::new();

    if treasure.is_universal() {
        score += 5.0;
        reasons.push("Universal treasure (works with any team)".to_string());
    }

    let matching: Vec<&str> = archetypes
        .iter()
        .copied()
        .filter(|a| *a != UNIVERSAL_ARCHETYPE && treasure.recommends(a))
        .collect();
    if !matching.is_empty() {
        score += matching.len() as f64 * 2.0;
        reasons.push(format!("Matches team archetypes: {}", matching.join(", ")));
    }

    if treasure.summon_boost {
        if archetypes.contains(&"Summoner") {
            score += 8.0;
            reasons.push("ESSENTIAL for summoner team".to_string());
        } else {
            score -= 5.0;
        }
    }

    if treasure.revive && team.count_in(Position::Rear) >= 3 {
        score += 4.0;
        reasons.push("Revival protects vulnerable backline".to_string());
    }

    if treasure.provides_sustain() && team.cookies().iter().any(|c| c.provides_healing) {
        score += 3.0;
        reasons.push("Stacks with team's existing sustain".to_string());
    }

    if treasure.boosts_offense() && archetypes.contains(&"DPS") {
        score += 3.0;
        reasons.push("Amplifies team damage output".to_string());
    }

    if treasure.cooldown_reduction_max > 0.0 {
        score += 4.0;
        reasons.push("Faster skill rotation for all cookies".to_string());
    }

    (score, reasons)
}

/// Best `top_n` treasures for `team`, highest score first
pub fn recommend_treasures(team: &Team, treasures: &[Arc<Treasure>], top_n: usize) -> Vec<TreasureRecommendation> {
    let archetypes = team_archetypes(team);

    let mut recommendations: Vec<TreasureRecommendation> = treasures
        .iter()
        .map(|treasure| {
            let (score, reasons) = score_treasure(team, &archetypes, treasure);
            TreasureRecommendation {
                treasure: treasure.name.clone(),
                tier: treasure.tier_label(),
                score,
                reason: reasons
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| DEFAULT_TREASURE_REASON.to_string()),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations.truncate(top_n);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cookie, Rarity, Role, TierRanking};
    use crate::synergy::SynergyEngine;
    use approx::assert_relative_eq;

    fn team(with_summoner: bool) -> Team {
        let summoner = if with_summoner {
            Cookie::new("Summoner", Rarity::Epic, Role::Magic, Position::Rear).with_skill("Call", "Summon")
        } else {
            Cookie::new("Summoner", Rarity::Epic, Role::Magic, Position::Rear)
        };
        let cookies = vec![
            Cookie::new("Tank", Rarity::Epic, Role::Defense, Position::Front),
            Cookie::new("Healer", Rarity::Epic, Role::Healing, Position::Rear).with_healing(),
            summoner,
            Cookie::new("Archer", Rarity::Epic, Role::Ranged, Position::Rear),
            Cookie::new("Bomber", Rarity::Epic, Role::Bomber, Position::Middle),
        ];
        Team::from_cookies(cookies.into_iter().map(Arc::new).collect(), &SynergyEngine::default()).unwrap()
    }

    #[test]
    fn test_archetypes() {
        assert_eq!(team_archetypes(&team(true)).as_slice(), &["DPS", "Tank", "Sustain", "Summoner"]);
        assert_eq!(team_archetypes(&team(false)).as_slice(), &["DPS", "Tank", "Sustain"]);
    }

    #[test]
    fn test_summon_boost_swings_with_team() {
        let mut boost = Treasure::new("Summon Boost", TierRanking::A);
        boost.summon_boost = true;
        let treasures = vec![Arc::new(boost)];

        let with = recommend_treasures(&team(true), &treasures, 3);
        assert_relative_eq!(with[0].score, 14.0);
        assert_eq!(with[0].reason, "ESSENTIAL for summoner team");

        let without = recommend_treasures(&team(false), &treasures, 3);
        assert_relative_eq!(without[0].score, 1.0);
        assert_eq!(without[0].reason, DEFAULT_TREASURE_REASON);
    }

    #[test]
    fn test_ranking_and_first_reason() {
        let universal = Treasure::new("Watch", TierRanking::S).with_archetypes(&["Universal", "DPS"]);
        let mut revive = Treasure::new("Angel", TierRanking::B);
        revive.revive = true;
        let mut cdr = Treasure::new("Clock", TierRanking::C);
        cdr.cooldown_reduction_max = 20.0;
        let treasures = vec![Arc::new(cdr), Arc::new(revive), Arc::new(universal)];

        let recs = recommend_treasures(&team(false), &treasures, 2);
        assert_eq!(recs.len(), 2);
        // 8 + 5 + 2
        assert_eq!(recs[0].treasure, "Watch");
        assert_relative_eq!(recs[0].score, 15.0);
        assert_eq!(recs[0].reason, "Universal treasure (works with any team)");
        // 4 + 4 with three rear cookies
        assert_eq!(recs[1].treasure, "Angel");
        assert_eq!(recs[1].reason, "Revival protects vulnerable backline");
    }
}
