//! Directed role compatibility matrix
//!
//! Keyed by (first role, second role). Values run 0.3-1.0. Lookups keep
//! the caller's order; rows are edited independently.
//! Unknown roles have no entries.

use crate::model::Role;

/// Row order follows `Role::KNOWN`: Defense, Charge, Healing, Support,
/// Magic, Ranged, Bomber, Ambush
const MATRIX: [[f64; 8]; 8] = [
    // Defense
    [0.4, 0.5, 1.0, 0.9, 0.7, 0.7, 0.7, 0.6],
    // Charge
    [0.5, 0.4, 1.0, 0.9, 0.7, 0.7, 0.7, 0.6],
    // Healing
    [1.0, 1.0, 0.3, 0.8, 0.9, 0.9, 0.9, 0.9],
    // Support
    [0.9, 0.9, 0.8, 0.5, 0.9, 0.9, 0.9, 0.8],
    // Magic
    [0.7, 0.7, 0.9, 0.9, 0.6, 0.7, 0.7, 0.7],
    // Ranged
    [0.7, 0.7, 0.9, 0.9, 0.7, 0.6, 0.7, 0.7],
    // Bomber
    [0.7, 0.7, 0.9, 0.9, 0.7, 0.7, 0.6, 0.7],
    // Ambush
    [0.6, 0.6, 0.9, 0.8, 0.7, 0.7, 0.7, 0.6],
];

/// Threshold at which a role is said to complement another
pub const COMPLEMENT_THRESHOLD: f64 = 0.9;

fn index(role: Role) -> Option<usize> {
    Role::KNOWN.iter().position(|r| *r == role)
}

/// Compatibility of `second` joining `first`; `None` for unknown roles
pub fn role_compatibility(first: Role, second: Role) -> Option<f64> {
    Some(MATRIX[index(first)?][index(second)?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pairs() {
        assert_eq!(role_compatibility(Role::Defense, Role::Healing), Some(1.0));
        assert_eq!(role_compatibility(Role::Healing, Role::Healing), Some(0.3));
        assert_eq!(role_compatibility(Role::Ambush, Role::Support), Some(0.8));
    }

    #[test]
    fn test_same_role_pairs_are_weakest_in_row() {
        for role in Role::KNOWN {
            let same = role_compatibility(role, role).unwrap();
            for other in Role::KNOWN {
                assert!(role_compatibility(role, other).unwrap() >= same);
            }
        }
    }

    #[test]
    fn test_unknown_has_no_entry() {
        assert_eq!(role_compatibility(Role::Unknown, Role::Magic), None);
        assert_eq!(role_compatibility(Role::Magic, Role::Unknown), None);
    }
}
