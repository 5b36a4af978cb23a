//! Per-component explanation fragments
//!
//! Each function reads one component result and returns at most one
//! benefit or warning card.

use crate::explanation::types::{BenefitCard, MetricFragment, Severity, WarningCard};
use crate::metrics::{C1Result, C2Result, C3Result, C4Result, C5Result, C6Result};
use crate::synergy::AdvancedSynergy;

fn benefit(kind: &str, code: &str, title: &str, message: String, detail: &str) -> MetricFragment {
    MetricFragment::with_benefit(BenefitCard {
        benefit_type: kind.to_string(),
        component_code: code.to_string(),
        title: title.to_string(),
        message,
        detail: detail.to_string(),
    })
}

fn warning(kind: &str, severity: Severity, message: String, advice: &str) -> MetricFragment {
    let icon = match severity {
        Severity::High => "🚨",
        Severity::Medium => "⚠️",
        Severity::Low => "ℹ️",
    };
    MetricFragment::with_warning(WarningCard {
        warning_type: kind.to_string(),
        severity,
        icon: icon.to_string(),
        message,
        advice: advice.to_string(),
    })
}

pub fn generate_c1_fragment(c1: &C1Result) -> MetricFragment {
    match c1.distinct_roles {
        n if n >= 4 => benefit(
            "role_diversity",
            "C1",
            "Role Diversity",
            format!("{} distinct roles ({:.0}/30)", n, c1.score),
            "Different roles cover each other's gaps and rarely compete for the same job.",
        ),
        3 => MetricFragment::empty(),
        n => warning(
            "role_overlap",
            Severity::High,
            format!("Only {} distinct role(s)", n),
            "Swap a duplicated role for one the team is missing.",
        ),
    }
}

pub fn generate_c2_fragment(c2: &C2Result) -> MetricFragment {
    match c2.distinct_positions {
        3 => benefit(
            "position_coverage",
            "C2",
            "Full Lane Coverage",
            "Front, Middle and Rear are all occupied".to_string(),
            "Every lane has a cookie, so no lane is left open to the enemy.",
        ),
        1 => warning(
            "single_lane",
            Severity::Medium,
            "All cookies stand in one lane".to_string(),
            "Move at least one cookie to another position.",
        ),
        _ => MetricFragment::empty(),
    }
}

pub fn generate_c3_fragment(c3: &C3Result) -> MetricFragment {
    if c3.per_cookie.is_empty() {
        return MetricFragment::empty();
    }
    let mean = c3.score / c3.per_cookie.len() as f64;
    let mode = if c3.advanced_count > 0 {
        format!(" ({} with progression stats)", c3.advanced_count)
    } else {
        String::new()
    };

    if mean >= 5.5 {
        benefit(
            "power",
            "C3",
            "High Power",
            format!("Average power {:.2}/7{}", mean, mode),
            "A high-rarity or well-built lineup.",
        )
    } else if mean < 3.0 {
        warning(
            "low_power",
            Severity::Low,
            format!("Average power only {:.2}/7{}", mean, mode),
            "Raise skill levels or bring higher-rarity cookies.",
        )
    } else {
        MetricFragment::empty()
    }
}

pub fn generate_c4_fragment(c4: &C4Result) -> MetricFragment {
    let mut missing = Vec::new();
    if !c4.has_tank {
        missing.push("front-line tank");
    }
    if !c4.has_healer {
        missing.push("healer");
    }
    if !c4.has_damage {
        missing.push("damage dealer");
    }

    if missing.is_empty() {
        benefit(
            "core_roles",
            "C4",
            "Tank, Healer and Damage",
            format!("All core roles present (+{:.0})", c4.score),
            "The team can hold the line, recover and deal damage.",
        )
    } else {
        let severity = if missing.len() > 1 { Severity::High } else { Severity::Medium };
        warning(
            "missing_core_role",
            severity,
            format!("No {}", missing.join(", no ")),
            "Fill the missing role before tuning anything else.",
        )
    }
}

pub fn generate_c5_fragment(c5: &C5Result) -> MetricFragment {
    if c5.score <= 0.0 {
        return MetricFragment::empty();
    }
    benefit(
        "treasures",
        "C5",
        "Treasure Bonus",
        format!(
            "+{:.2} (base {:.2}, stats {:.2}, specials {:.2})",
            c5.score, c5.base, c5.stat_bonus, c5.special_bonus
        ),
        "Equipped treasures add to the composition score.",
    )
}

pub fn generate_c6_fragment(c6: &C6Result, advanced: &AdvancedSynergy) -> MetricFragment {
    if let Some(combo) = advanced.active_combo {
        return benefit(
            "special_combo",
            "C6",
            combo,
            format!("Special combo active (+{:.0} advanced synergy)", advanced.special_combo),
            "A known lore combo is on the team.",
        );
    }
    if c6.enabled && c6.synergy_total >= 70.0 {
        return benefit(
            "synergy",
            "C6",
            "Strong Synergy",
            format!("Team synergy {:.1}/110 (+{:.2})", c6.synergy_total, c6.score),
            "Roles, lanes and elements reinforce each other.",
        );
    }
    MetricFragment::empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_fragments() {
        let strong = generate_c1_fragment(&C1Result { score: 30.0, distinct_roles: 5 });
        assert_eq!(strong.benefit.unwrap().message, "5 distinct roles (30/30)");

        let weak = generate_c1_fragment(&C1Result { score: 0.0, distinct_roles: 1 });
        let card = weak.warning.unwrap();
        assert_eq!(card.severity, Severity::High);
        assert_eq!(card.message, "Only 1 distinct role(s)");

        assert!(generate_c1_fragment(&C1Result { score: 15.0, distinct_roles: 3 })
            .benefit
            .is_none());
    }

    #[test]
    fn test_core_role_warning_lists_gaps() {
        let c4 = C4Result {
            score: 2.0,
            has_tank: false,
            has_healer: false,
            has_damage: true,
        };
        let card = generate_c4_fragment(&c4).warning.unwrap();
        assert_eq!(card.message, "No front-line tank, no healer");
        assert_eq!(card.severity, Severity::High);
    }

    #[test]
    fn test_combo_beats_plain_synergy() {
        let c6 = C6Result {
            score: 20.0,
            synergy_total: 110.0,
            enabled: true,
        };
        let advanced = AdvancedSynergy {
            special_combo: 30.0,
            active_combo: Some("Sea Fairy Duo"),
            ..Default::default()
        };
        let card = generate_c6_fragment(&c6, &advanced).benefit.unwrap();
        assert_eq!(card.title, "Sea Fairy Duo");
        assert_eq!(card.benefit_type, "special_combo");
    }
}
