//! COMPONENT 1: ROLE DIVERSITY
//!
//! Stepped purely by the number of distinct roles on the team:
//! 5 → 30, 4 → 24, 3 → 15, 2 → 8, 1 → 0.
//! Unknown counts as a role of its own.

use crate::model::{Cookie, Role};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Result of C1 calculation
#[derive(Debug, Clone)]
pub struct C1Result {
    /// One of {0, 8, 15, 24, 30}
    pub score: f64,
    pub distinct_roles: usize,
}

fn role_diversity_points(distinct: usize) -> f64 {
    match distinct {
        5 => 30.0,
        4 => 24.0,
        3 => 15.0,
        2 => 8.0,
        _ => 0.0,
    }
}

/// Calculate C1: role diversity (0-30)
pub fn calculate_c1(cookies: &[Arc<Cookie>]) -> C1Result {
    let roles: FxHashSet<Role> = cookies.iter().map(|c| c.role).collect();
    let distinct_roles = roles.len();

    C1Result {
        score: role_diversity_points(distinct_roles),
        distinct_roles,
    }
}
