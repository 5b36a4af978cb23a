//! COMPONENT 3: POWER
//!
//! Per-cookie and per-treasure power scores, and the team power sum.
//!
//! Basic mode (no progression stats): the rarity weight.
//! Advanced mode (any progression stat present):
//!   rarity × 0.40 + skill/60 × 0.35 × 7 + level/70 × 0.15 × 7 + topping/5 × 0.10 × 7
//! Missing stats contribute zero to their term; each ratio is clamped to [0, 1].

use crate::model::{Cookie, Treasure};
use smallvec::SmallVec;
use std::sync::Arc;

pub const MAX_SKILL_LEVEL: f64 = 60.0;
pub const MAX_COOKIE_LEVEL: f64 = 70.0;
pub const MAX_TOPPING_QUALITY: f64 = 5.0;

/// Scale of the advanced-mode terms (matches the top rarity weight)
const POWER_SCALE: f64 = 7.0;

const RARITY_SHARE: f64 = 0.40;
const SKILL_SHARE: f64 = 0.35;
const LEVEL_SHARE: f64 = 0.15;
const TOPPING_SHARE: f64 = 0.10;

/// Treasure tier used when none is recorded
const DEFAULT_TREASURE_BASE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    Basic,
    Advanced,
}

/// Result of the power component
#[derive(Debug, Clone)]
pub struct C3Result {
    /// Sum of member power (0-35 nominal)
    pub score: f64,
    pub per_cookie: SmallVec<[f64; 5]>,
    /// Members scored in advanced mode
    pub advanced_count: usize,
}

pub fn power_mode(cookie: &Cookie) -> PowerMode {
    if cookie.progression.is_set() {
        PowerMode::Advanced
    } else {
        PowerMode::Basic
    }
}

fn scaled(value: Option<f64>, max: f64, share: f64) -> f64 {
    value
        .map(|v| (v / max).clamp(0.0, 1.0) * share * POWER_SCALE)
        .unwrap_or(0.0)
}

/// Power of a single cookie (0-7)
pub fn cookie_power(cookie: &Cookie) -> f64 {
    let weight = cookie.rarity.weight();
    match power_mode(cookie) {
        PowerMode::Basic => weight,
        PowerMode::Advanced => {
            let p = &cookie.progression;
            weight * RARITY_SHARE
                + scaled(p.skill_level, MAX_SKILL_LEVEL, SKILL_SHARE)
                + scaled(p.cookie_level, MAX_COOKIE_LEVEL, LEVEL_SHARE)
                + scaled(p.topping_quality, MAX_TOPPING_QUALITY, TOPPING_SHARE)
        }
    }
}

/// Power of a treasure: tier base, +1 for Universal, capped at 10
pub fn treasure_power(treasure: &Treasure) -> f64 {
    let base = treasure
        .tier
        .map(|t| t.power_base())
        .unwrap_or(DEFAULT_TREASURE_BASE);
    let universal = if treasure.is_universal() { 1.0 } else { 0.0 };
    (base + universal).min(10.0)
}

/// Calculate C3: sum of member power
pub fn calculate_c3(cookies: &[Arc<Cookie>]) -> C3Result {
    let per_cookie: SmallVec<[f64; 5]> = cookies.iter().map(|c| cookie_power(c)).collect();
    let advanced_count = cookies
        .iter()
        .filter(|c| power_mode(c) == PowerMode::Advanced)
        .count();

    C3Result {
        score: per_cookie.iter().sum(),
        per_cookie,
        advanced_count,
    }
}
