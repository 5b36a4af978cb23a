//! Enemy team analysis
//!
//! Counts the roles, positions and ability flags of an enemy team. Every
//! counted category also keeps the member names, in team order.

use crate::model::{Position, Rarity, Team};
use serde::Serialize;

pub const SHADOW_MILK: &str = "Shadow Milk Cookie";

/// Cookies whose kit redirects attacks
pub const TAUNT_TANKS: [&str; 5] = [
    "Elder Faerie Cookie",
    "Wildberry Cookie",
    "Dark Cacao Cookie",
    "Milk Cookie",
    "Knight Cookie",
];

/// Burst dealers whose skill type does not say so
pub const BURST_DAMAGE_COOKIES: [&str; 4] = [
    "Burning Spice Cookie",
    "Tarte Tatin Cookie",
    "Wind Archer Cookie",
    "Black Pearl Cookie",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnemyAnalysis {
    pub healers: Vec<String>,
    pub tanks: Vec<String>,
    pub dps: Vec<String>,
    pub front: usize,
    pub middle: usize,
    pub rear: usize,
    pub crowd_control: Vec<String>,
    /// Distinct CC types, first-seen order
    pub cc_types: Vec<String>,
    pub anti_heal: Vec<String>,
    pub anti_tank: Vec<String>,
    pub immunity: bool,
    pub immunity_types: Vec<String>,
    pub cleanse: bool,
    pub cleansers: Vec<String>,
    pub shield_providers: Vec<String>,
    pub beasts: Vec<String>,
    pub has_shadow_milk: bool,
    pub taunt: bool,
    pub burst_damage: bool,
}

fn push_distinct(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

impl EnemyAnalysis {
    pub fn of(enemy: &Team) -> Self {
        let mut analysis = Self::default();

        for cookie in enemy.cookies() {
            let name = cookie.name.clone();

            if cookie.role.is_healer() || cookie.provides_healing {
                analysis.healers.push(name.clone());
            }
            if cookie.role.is_tank() {
                analysis.tanks.push(name.clone());
            }
            if cookie.role.is_damage() {
                analysis.dps.push(name.clone());
            }

            match cookie.position {
                Position::Front => analysis.front += 1,
                Position::Middle => analysis.middle += 1,
                Position::Rear => analysis.rear += 1,
            }

            if let Some(cc) = cookie.crowd_control.as_deref() {
                analysis.crowd_control.push(name.clone());
                push_distinct(&mut analysis.cc_types, cc);
            }
            if cookie.anti_heal {
                analysis.anti_heal.push(name.clone());
            }
            if cookie.anti_tank {
                analysis.anti_tank.push(name.clone());
            }
            if let Some(immunity) = cookie.grants_immunity.as_deref() {
                analysis.immunity = true;
                push_distinct(&mut analysis.immunity_types, immunity);
            }
            if cookie.dispel {
                analysis.cleanse = true;
                analysis.cleansers.push(name.clone());
            }
            if cookie.provides_shield {
                analysis.shield_providers.push(name.clone());
            }
            if cookie.rarity == Rarity::Beast {
                analysis.beasts.push(name.clone());
            }

            if cookie.name == SHADOW_MILK {
                analysis.has_shadow_milk = true;
            }
            if TAUNT_TANKS.contains(&cookie.name.as_str()) {
                analysis.taunt = true;
            }
            if cookie.deals_burst() || BURST_DAMAGE_COOKIES.contains(&cookie.name.as_str()) {
                analysis.burst_damage = true;
            }
        }

        analysis
    }

    pub fn healer_count(&self) -> usize {
        self.healers.len()
    }

    pub fn tank_count(&self) -> usize {
        self.tanks.len()
    }

    pub fn cc_count(&self) -> usize {
        self.crowd_control.len()
    }

    /// Three or more Rear cookies behind at most one Front cookie
    pub fn exposed_backline(&self) -> bool {
        self.rear >= 3 && self.front <= 1
    }
}
