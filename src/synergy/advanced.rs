//! Advanced synergy: element cluster, synergy groups and named combos
//!
//! Layered on top of the 110-point breakdown and reported separately:
//!   - Element: 15 when 3+ cookies share an element, 7 for a pair
//!   - Groups: +12 per group with 3+ members, +5 per group with exactly 2, cap 20
//!   - Special combo: the best qualifying named combo (15-25), never summed

use crate::model::Cookie;
use crate::utils::counting::{count_by, count_shared_tags, max_count};
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;

const MAX_GROUP_SYNERGY: f64 = 20.0;

/// A named combo: every `required` member must be present; when
/// `min_members` is set, at least that many of required ∪ optional too
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialCombo {
    pub name: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    pub min_members: Option<usize>,
    pub bonus: f64,
}

impl SpecialCombo {
    /// Required members first, then optional ones
    pub fn members(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.required.iter().chain(self.optional.iter()).copied()
    }

    pub fn is_active(&self, names: &FxHashSet<&str>) -> bool {
        if !self.required.iter().all(|n| names.contains(n)) {
            return false;
        }
        match self.min_members {
            Some(min) => self.members().filter(|n| names.contains(n)).count() >= min,
            None => true,
        }
    }
}

pub static SPECIAL_COMBOS: &[SpecialCombo] = &[
    SpecialCombo {
        name: "Citrus Party",
        required: &["Lemon Cookie"],
        optional: &["Orange Cookie", "Lime Cookie", "Grapefruit Cookie"],
        min_members: Some(2),
        bonus: 20.0,
    },
    SpecialCombo {
        name: "The Protector of the Golden City",
        required: &["Golden Cheese Cookie"],
        optional: &["Burnt Cheese Cookie", "Smoked Cheese Cookie"],
        min_members: Some(2),
        bonus: 15.0,
    },
    SpecialCombo {
        name: "Silver Knighthood",
        required: &["Mercurial Knight Cookie", "Silverbell Cookie"],
        optional: &[],
        min_members: None,
        bonus: 25.0,
    },
    SpecialCombo {
        name: "Team Drizzle",
        required: &[
            "Choco Drizzle Cookie",
            "Green Tea Mousse Cookie",
            "Pudding à la Mode Cookie",
        ],
        optional: &[],
        min_members: None,
        bonus: 25.0,
    },
    SpecialCombo {
        name: "The Deceitful Trio",
        required: &["Shadow Milk Cookie", "Black Sapphire Cookie", "Candy Apple Cookie"],
        optional: &[],
        min_members: None,
        bonus: 25.0,
    },
];

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdvancedSynergy {
    /// 0, 7 or 15
    pub element: f64,
    /// 0-20
    pub group: f64,
    /// 0 or the best combo bonus
    pub special_combo: f64,
    pub total: f64,
    /// Name of the combo that supplied `special_combo`
    pub active_combo: Option<&'static str>,
}

pub fn element_cluster_score(cookies: &[Arc<Cookie>]) -> f64 {
    let counts = count_by(cookies.iter().filter_map(|c| c.element.as_deref()));
    match max_count(&counts) {
        n if n >= 3 => 15.0,
        2 => 7.0,
        _ => 0.0,
    }
}

pub fn group_cluster_score(cookies: &[Arc<Cookie>]) -> f64 {
    let counts = count_shared_tags(cookies, |c| &c.synergy_groups);
    let total: f64 = counts
        .values()
        .map(|n| match *n {
            n if n >= 3 => 12.0,
            2 => 5.0,
            _ => 0.0,
        })
        .sum();
    total.min(MAX_GROUP_SYNERGY)
}

/// Best qualifying combo; ties keep the earlier table entry
pub fn best_combo(cookies: &[Arc<Cookie>], combos: &'static [SpecialCombo]) -> Option<&'static SpecialCombo> {
    let names: FxHashSet<&str> = cookies.iter().map(|c| c.name.as_str()).collect();
    combos
        .iter()
        .filter(|combo| combo.is_active(&names))
        .fold(None, |best: Option<&'static SpecialCombo>, combo| match best {
            Some(b) if b.bonus >= combo.bonus => Some(b),
            _ => Some(combo),
        })
}

pub fn advanced_synergy(cookies: &[Arc<Cookie>], combos: &'static [SpecialCombo]) -> AdvancedSynergy {
    let element = element_cluster_score(cookies);
    let group = group_cluster_score(cookies);
    let combo = best_combo(cookies, combos);
    let special_combo = combo.map(|c| c.bonus).unwrap_or(0.0);

    AdvancedSynergy {
        element,
        group,
        special_combo,
        total: element + group + special_combo,
        active_combo: combo.map(|c| c.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role};

    fn named(names: &[&str]) -> Vec<Arc<Cookie>> {
        names
            .iter()
            .map(|n| Arc::new(Cookie::new(*n, Rarity::Epic, Role::Magic, Position::Middle)))
            .collect()
    }

    #[test]
    fn test_silver_knighthood_needs_both() {
        let team = named(&[
            "Mercurial Knight Cookie",
            "Silverbell Cookie",
            "A Cookie",
            "B Cookie",
            "C Cookie",
        ]);
        let result = advanced_synergy(&team, SPECIAL_COMBOS);
        assert_eq!(result.special_combo, 25.0);
        assert_eq!(result.active_combo, Some("Silver Knighthood"));

        let half = named(&["Mercurial Knight Cookie", "A Cookie", "B Cookie", "C Cookie", "D Cookie"]);
        assert_eq!(advanced_synergy(&half, SPECIAL_COMBOS).special_combo, 0.0);
    }

    #[test]
    fn test_min_members_combo() {
        let lemon_only = named(&["Lemon Cookie", "A Cookie", "B Cookie", "C Cookie", "D Cookie"]);
        assert_eq!(advanced_synergy(&lemon_only, SPECIAL_COMBOS).special_combo, 0.0);

        let party = named(&["Lemon Cookie", "Lime Cookie", "B Cookie", "C Cookie", "D Cookie"]);
        assert_eq!(advanced_synergy(&party, SPECIAL_COMBOS).special_combo, 20.0);

        // Optional members without the required one do nothing
        let no_lemon = named(&["Orange Cookie", "Lime Cookie", "Grapefruit Cookie", "C Cookie", "D Cookie"]);
        assert_eq!(advanced_synergy(&no_lemon, SPECIAL_COMBOS).special_combo, 0.0);
    }

    #[test]
    fn test_best_combo_taken_not_summed() {
        let team = named(&[
            "Lemon Cookie",
            "Orange Cookie",
            "Mercurial Knight Cookie",
            "Silverbell Cookie",
            "D Cookie",
        ]);
        let result = advanced_synergy(&team, SPECIAL_COMBOS);
        assert_eq!(result.special_combo, 25.0);
        assert_eq!(result.total, 25.0);
    }

    #[test]
    fn test_group_and_element_clusters() {
        let cookies: Vec<Arc<Cookie>> = vec![
            Cookie::new("A", Rarity::Beast, Role::Magic, Position::Middle)
                .with_element("Darkness")
                .with_groups(&["Beasts", "Villains"]),
            Cookie::new("B", Rarity::Beast, Role::Magic, Position::Middle)
                .with_element("Darkness")
                .with_groups(&["Beasts", "Villains"]),
            Cookie::new("C", Rarity::Beast, Role::Magic, Position::Middle)
                .with_element("Darkness")
                .with_groups(&["Beasts"]),
            Cookie::new("D", Rarity::Epic, Role::Magic, Position::Middle).with_groups(&["Kingdom"]),
        ]
        .into_iter()
        .map(Arc::new)
        .collect();

        let result = advanced_synergy(&cookies, SPECIAL_COMBOS);
        assert_eq!(result.element, 15.0);
        assert_eq!(result.group, 17.0);
        assert_eq!(result.total, 32.0);
    }

    #[test]
    fn test_group_cap() {
        let groups = ["G1", "G2", "G3"];
        let cookies: Vec<Arc<Cookie>> = (0..3)
            .map(|i| Arc::new(Cookie::new(format!("C{}", i), Rarity::Epic, Role::Magic, Position::Middle).with_groups(&groups)))
            .collect();
        assert_eq!(group_cluster_score(&cookies), 20.0);
    }
}
