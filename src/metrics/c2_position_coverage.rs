//! COMPONENT 2: POSITION COVERAGE
//!
//! Stepped by distinct positions: 3 → 25, 2 → 15, 1 → 5.

use crate::model::{Cookie, Position};
use rustc_hash::FxHashSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct C2Result {
    /// One of {5, 15, 25} for a non-empty team
    pub score: f64,
    pub distinct_positions: usize,
}

pub fn calculate_c2(cookies: &[Arc<Cookie>]) -> C2Result {
    let positions: FxHashSet<Position> = cookies.iter().map(|c| c.position).collect();
    let distinct_positions = positions.len();

    let score = match distinct_positions {
        3 => 25.0,
        2 => 15.0,
        1 => 5.0,
        _ => 0.0,
    };

    C2Result {
        score,
        distinct_positions,
    }
}
