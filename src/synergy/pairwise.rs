//! Pairwise synergy between two cookies (0-12)
//!
//! Sum of:
//!   - role compatibility × 4 (directed lookup, first cookie's role first)
//!   - position: +1.5 when different, +0.5 when shared
//!   - element: +2.0 same, +0.3 both present but different
//!   - ability interactions, each counted once per pair:
//!     CC enabling burst +1.5, heal + shield +1.0,
//!     immunity + dispel +1.0, double anti-tank +1.0

use crate::model::Cookie;
use crate::synergy::role_matrix::role_compatibility;

pub const MAX_PAIRWISE_SYNERGY: f64 = 12.0;

const ROLE_SCALE: f64 = 4.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairwiseSynergy {
    pub role: f64,
    pub position: f64,
    pub element: f64,
    pub ability: f64,
    pub total: f64,
}

/// One cookie crowd-controls and the other bursts
fn cc_enables_burst(a: &Cookie, b: &Cookie) -> bool {
    (a.has_crowd_control() && b.deals_burst()) || (b.has_crowd_control() && a.deals_burst())
}

fn heal_and_shield(a: &Cookie, b: &Cookie) -> bool {
    (a.provides_healing && b.provides_shield) || (b.provides_healing && a.provides_shield)
}

fn immunity_and_dispel(a: &Cookie, b: &Cookie) -> bool {
    (a.has_immunity() && b.dispel) || (b.has_immunity() && a.dispel)
}

pub(crate) fn element_points(a: &Cookie, b: &Cookie) -> f64 {
    match (a.element.as_deref(), b.element.as_deref()) {
        (Some(x), Some(y)) if x == y => 2.0,
        (Some(_), Some(_)) => 0.3,
        _ => 0.0,
    }
}

pub fn pairwise_breakdown(a: &Cookie, b: &Cookie) -> PairwiseSynergy {
    let role = role_compatibility(a.role, b.role)
        .map(|v| v * ROLE_SCALE)
        .unwrap_or(0.0);
    let position = if a.position != b.position { 1.5 } else { 0.5 };
    let element = element_points(a, b);

    let mut ability = 0.0;
    if cc_enables_burst(a, b) {
        ability += 1.5;
    }
    if heal_and_shield(a, b) {
        ability += 1.0;
    }
    if immunity_and_dispel(a, b) {
        ability += 1.0;
    }
    if a.anti_tank && b.anti_tank {
        ability += 1.0;
    }

    PairwiseSynergy {
        role,
        position,
        element,
        ability,
        total: (role + position + element + ability).min(MAX_PAIRWISE_SYNERGY),
    }
}

/// Pairwise synergy total, capped at 12
pub fn pairwise_synergy(a: &Cookie, b: &Cookie) -> f64 {
    pairwise_breakdown(a, b).total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role};
    use approx::assert_relative_eq;

    #[test]
    fn test_tank_healer_pair() {
        let tank = Cookie::new("Tank", Rarity::Epic, Role::Defense, Position::Front).with_element("Light");
        let healer = Cookie::new("Healer", Rarity::Epic, Role::Healing, Position::Rear).with_element("Light");
        let pair = pairwise_breakdown(&tank, &healer);
        assert_relative_eq!(pair.role, 4.0);
        assert_relative_eq!(pair.position, 1.5);
        assert_relative_eq!(pair.element, 2.0);
        assert_relative_eq!(pair.total, 7.5);
    }

    #[test]
    fn test_missing_element_gives_nothing() {
        let a = Cookie::new("A", Rarity::Epic, Role::Magic, Position::Middle).with_element("Fire");
        let b = Cookie::new("B", Rarity::Epic, Role::Magic, Position::Middle);
        assert_eq!(element_points(&a, &b), 0.0);

        let c = Cookie::new("C", Rarity::Epic, Role::Magic, Position::Middle).with_element("Water");
        assert_relative_eq!(element_points(&a, &c), 0.3);
    }

    #[test]
    fn test_ability_interactions_either_order() {
        let cc = Cookie::new("CC", Rarity::Epic, Role::Support, Position::Middle)
            .with_crowd_control("Stun")
            .with_immunity("Freeze")
            .with_healing();
        let burst = Cookie::new("Burst", Rarity::Epic, Role::Magic, Position::Rear)
            .with_skill("Nuke", "Damage")
            .with_dispel()
            .with_shield();

        let forward = pairwise_breakdown(&cc, &burst);
        let backward = pairwise_breakdown(&burst, &cc);
        assert_relative_eq!(forward.ability, 3.5);
        assert_relative_eq!(backward.ability, 3.5);
    }

    #[test]
    fn test_unknown_role_contributes_nothing() {
        let a = Cookie::new("A", Rarity::Epic, Role::Unknown, Position::Front);
        let b = Cookie::new("B", Rarity::Epic, Role::Healing, Position::Front);
        let pair = pairwise_breakdown(&a, &b);
        assert_eq!(pair.role, 0.0);
        assert_relative_eq!(pair.total, 0.5);
    }

    #[test]
    fn test_cap_at_twelve() {
        let a = Cookie::new("A", Rarity::Epic, Role::Defense, Position::Front)
            .with_element("Light")
            .with_crowd_control("Stun")
            .with_skill("Hit", "Damage")
            .with_healing()
            .with_shield()
            .with_immunity("Stun")
            .with_dispel()
            .with_anti_tank();
        let b = Cookie::new("B", Rarity::Epic, Role::Healing, Position::Rear)
            .with_element("Light")
            .with_crowd_control("Stun")
            .with_skill("Hit", "Damage")
            .with_healing()
            .with_shield()
            .with_immunity("Stun")
            .with_dispel()
            .with_anti_tank();
        // 4 + 1.5 + 2 + 4.5 = 12
        assert_relative_eq!(pairwise_synergy(&a, &b), 12.0);
    }
}
