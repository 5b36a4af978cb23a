//! COMPONENT 4: BONUS MODIFIERS
//!
//! +3 tank (Defense/Charge standing in Front), +3 healer (Healing/Support,
//! any position), +2 any damage role. Range 0-8 (nominal ceiling 10).

use crate::model::{Cookie, Position};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct C4Result {
    pub score: f64,
    pub has_tank: bool,
    pub has_healer: bool,
    pub has_damage: bool,
}

pub fn calculate_c4(cookies: &[Arc<Cookie>]) -> C4Result {
    let has_tank = cookies
        .iter()
        .any(|c| c.position == Position::Front && c.role.is_tank());
    let has_healer = cookies.iter().any(|c| c.role.is_healer());
    let has_damage = cookies.iter().any(|c| c.role.is_damage());

    let mut score = 0.0;
    if has_tank {
        score += 3.0;
    }
    if has_healer {
        score += 3.0;
    }
    if has_damage {
        score += 2.0;
    }

    C4Result {
        score,
        has_tank,
        has_healer,
        has_damage,
    }
}
