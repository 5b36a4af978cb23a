//! Whole-team synergy breakdown (0-110)
//!
//! Six independently capped components summed into a total. Teams that
//! are not exactly 5 cookies score zero across the board.

use crate::model::{Cookie, Position, Role, TEAM_SIZE};
use crate::synergy::role_matrix::role_compatibility;
use crate::utils::counting::{count_by, max_count};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;

pub const MAX_TEAM_SYNERGY: f64 = 110.0;

const ROLE_SYNERGY_SCALE: f64 = 30.0;
const TYPE_SYNERGY_THRESHOLD: usize = 3;
const ABILITY_COMBO_POINTS: f64 = 2.5;
const MAX_ABILITY_SYNERGY: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SynergyBreakdown {
    /// 0-30
    pub role: f64,
    /// 0-25
    pub position: f64,
    /// 0-25
    pub element: f64,
    /// 0-15
    #[serde(rename = "type")]
    pub type_: f64,
    /// 0-10
    pub coverage: f64,
    /// 0-10
    pub ability: f64,
    pub total: f64,
}

/// Team-wide ability co-presence flags
#[derive(Debug, Clone, Copy, Default)]
pub struct AbilityPresence {
    pub crowd_control: bool,
    pub burst: bool,
    pub healing: bool,
    pub shield: bool,
    pub immunity: bool,
    pub dispel: bool,
    pub anti_tank: usize,
}

impl AbilityPresence {
    pub fn of(cookies: &[Arc<Cookie>]) -> Self {
        Self {
            crowd_control: cookies.iter().any(|c| c.has_crowd_control()),
            burst: cookies.iter().any(|c| c.deals_burst()),
            healing: cookies.iter().any(|c| c.provides_healing),
            shield: cookies.iter().any(|c| c.provides_shield),
            immunity: cookies.iter().any(|c| c.has_immunity()),
            dispel: cookies.iter().any(|c| c.dispel),
            anti_tank: cookies.iter().filter(|c| c.anti_tank).count(),
        }
    }

    pub fn cc_and_burst(&self) -> bool {
        self.crowd_control && self.burst
    }

    pub fn heal_and_shield(&self) -> bool {
        self.healing && self.shield
    }

    pub fn immunity_and_dispel(&self) -> bool {
        self.immunity && self.dispel
    }
}

/// Mean directed role compatibility over all pairs (i < j), × 30
fn role_synergy(cookies: &[Arc<Cookie>]) -> f64 {
    let mut sum = 0.0;
    let mut pairs = 0usize;
    for (i, a) in cookies.iter().enumerate() {
        for b in &cookies[i + 1..] {
            if let Some(value) = role_compatibility(a.role, b.role) {
                sum += value;
                pairs += 1;
            }
        }
    }
    if pairs == 0 {
        0.0
    } else {
        sum / pairs as f64 * ROLE_SYNERGY_SCALE
    }
}

fn position_synergy(cookies: &[Arc<Cookie>]) -> f64 {
    let counts = count_by(cookies.iter().map(|c| c.position));
    let mut score = match counts.len() {
        3 => 20.0,
        2 => 12.0,
        _ => 5.0,
    };

    let mut sorted: Vec<usize> = counts.values().copied().collect();
    sorted.sort_unstable();
    if sorted == [1, 2, 2] {
        score += 5.0;
    }
    score
}

fn element_synergy(cookies: &[Arc<Cookie>]) -> f64 {
    let counts = count_by(cookies.iter().filter_map(|c| c.element.as_deref()));
    if counts.is_empty() {
        return 0.0;
    }
    match max_count(&counts) {
        n if n >= 5 => 25.0,
        4 => 20.0,
        3 => 15.0,
        2 => 8.0,
        _ => 3.0,
    }
}

fn type_synergy(cookies: &[Arc<Cookie>]) -> f64 {
    let counts = count_by(cookies.iter().map(|c| c.rarity));
    counts
        .iter()
        .filter(|(rarity, count)| rarity.is_high_tier() && **count >= TYPE_SYNERGY_THRESHOLD)
        .map(|(_, count)| match *count {
            5 => 15.0,
            4 => 12.0,
            _ => 8.0,
        })
        .fold(0.0, f64::max)
}

fn coverage_synergy(cookies: &[Arc<Cookie>]) -> f64 {
    let roles: FxHashSet<Role> = cookies.iter().map(|c| c.role).collect();
    let mut score = 0.0;
    if roles.iter().any(|r| r.is_tank()) {
        score += 3.0;
    }
    if roles.iter().any(|r| r.is_healer()) {
        score += 3.0;
    }
    if roles.iter().any(|r| r.is_damage()) {
        score += 2.0;
    }
    if roles.len() >= 4 {
        score += 2.0;
    }
    score
}

fn ability_synergy(cookies: &[Arc<Cookie>]) -> f64 {
    let presence = AbilityPresence::of(cookies);
    let mut score = 0.0;
    if presence.cc_and_burst() {
        score += ABILITY_COMBO_POINTS;
    }
    if presence.heal_and_shield() {
        score += ABILITY_COMBO_POINTS;
    }
    if presence.immunity_and_dispel() {
        score += ABILITY_COMBO_POINTS;
    }
    if presence.anti_tank >= 2 {
        score += (presence.anti_tank as f64 * 0.8).min(ABILITY_COMBO_POINTS);
    }
    score.min(MAX_ABILITY_SYNERGY)
}

/// Whole-team synergy; all zeros unless exactly 5 cookies
pub fn team_synergy(cookies: &[Arc<Cookie>]) -> SynergyBreakdown {
    if cookies.len() != TEAM_SIZE {
        return SynergyBreakdown::default();
    }

    let mut breakdown = SynergyBreakdown {
        role: role_synergy(cookies),
        position: position_synergy(cookies),
        element: element_synergy(cookies),
        type_: type_synergy(cookies),
        coverage: coverage_synergy(cookies),
        ability: ability_synergy(cookies),
        total: 0.0,
    };
    breakdown.total = breakdown.role
        + breakdown.position
        + breakdown.element
        + breakdown.type_
        + breakdown.coverage
        + breakdown.ability;
    breakdown
}

/// Positions present on the team, in Front/Middle/Rear order
pub fn positions_present(cookies: &[Arc<Cookie>]) -> Vec<(Position, usize)> {
    Position::ALL
        .iter()
        .map(|p| (*p, cookies.iter().filter(|c| c.position == *p).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rarity;
    use approx::assert_relative_eq;

    fn cookie(name: &str, rarity: Rarity, role: Role, position: Position) -> Cookie {
        Cookie::new(name, rarity, role, position)
    }

    fn wrap(cookies: Vec<Cookie>) -> Vec<Arc<Cookie>> {
        cookies.into_iter().map(Arc::new).collect()
    }

    fn mono_element_team() -> Vec<Arc<Cookie>> {
        wrap(vec![
            cookie("A", Rarity::Beast, Role::Defense, Position::Front).with_element("Darkness"),
            cookie("B", Rarity::Beast, Role::Healing, Position::Rear).with_element("Darkness"),
            cookie("C", Rarity::Beast, Role::Magic, Position::Middle).with_element("Darkness"),
            cookie("D", Rarity::Epic, Role::Ranged, Position::Middle).with_element("Darkness"),
            cookie("E", Rarity::Epic, Role::Bomber, Position::Rear).with_element("Darkness"),
        ])
    }

    #[test]
    fn test_partial_team_is_zero() {
        let mut cookies = mono_element_team();
        cookies.pop();
        assert_eq!(team_synergy(&cookies), SynergyBreakdown::default());
    }

    #[test]
    fn test_element_all_shared_and_absent() {
        assert_eq!(team_synergy(&mono_element_team()).element, 25.0);

        let plain = wrap(vec![
            cookie("A", Rarity::Epic, Role::Defense, Position::Front),
            cookie("B", Rarity::Epic, Role::Healing, Position::Rear),
            cookie("C", Rarity::Epic, Role::Magic, Position::Middle),
            cookie("D", Rarity::Epic, Role::Ranged, Position::Middle),
            cookie("E", Rarity::Epic, Role::Bomber, Position::Rear),
        ]);
        assert_eq!(team_synergy(&plain).element, 0.0);
    }

    #[test]
    fn test_full_breakdown() {
        let breakdown = team_synergy(&mono_element_team());

        // Pairs: D-H 1.0, D-M .7, D-R .7, D-B .7, H-M .9, H-R .9, H-B .9,
        // M-R .7, M-B .7, R-B .7 → mean 0.79
        assert_relative_eq!(breakdown.role, 0.79 * 30.0, epsilon = 1e-9);
        // Positions 1/2/2
        assert_eq!(breakdown.position, 25.0);
        assert_eq!(breakdown.type_, 8.0);
        assert_eq!(breakdown.coverage, 10.0);
        assert_eq!(breakdown.ability, 0.0);
        assert_relative_eq!(breakdown.total, 23.7 + 25.0 + 25.0 + 8.0 + 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ability_synergy() {
        let cookies = wrap(vec![
            cookie("A", Rarity::Epic, Role::Defense, Position::Front).with_crowd_control("Stun").with_anti_tank(),
            cookie("B", Rarity::Epic, Role::Healing, Position::Rear).with_healing(),
            cookie("C", Rarity::Epic, Role::Magic, Position::Middle).with_skill("Nuke", "Damage").with_anti_tank(),
            cookie("D", Rarity::Epic, Role::Ranged, Position::Middle).with_shield().with_anti_tank(),
            cookie("E", Rarity::Epic, Role::Bomber, Position::Rear),
        ]);
        // 2.5 + 2.5 + min(3 × 0.8, 2.5)
        assert_relative_eq!(team_synergy(&cookies).ability, 7.4, epsilon = 1e-9);
    }

    #[test]
    fn test_unknown_roles_skip_pairs() {
        let cookies = wrap(vec![
            cookie("A", Rarity::Epic, Role::Unknown, Position::Front),
            cookie("B", Rarity::Epic, Role::Unknown, Position::Front),
            cookie("C", Rarity::Epic, Role::Unknown, Position::Front),
            cookie("D", Rarity::Epic, Role::Defense, Position::Front),
            cookie("E", Rarity::Epic, Role::Healing, Position::Front),
        ]);
        let breakdown = team_synergy(&cookies);
        assert_relative_eq!(breakdown.role, 30.0);
        assert_eq!(breakdown.position, 5.0);
    }
}
