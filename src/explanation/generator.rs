use crate::explanation::fragments::*;
use crate::explanation::types::*;
use crate::model::{Team, Treasure};
use crate::recommend::recommend_treasures;
use crate::scorer::{CompositionScore, CompositionScorer};
use crate::synergy::{positions_present, AbilityPresence};
use std::fmt::Write as _;
use std::sync::Arc;

/// Treasure suggestions attached to a team explanation
const EXPLAINED_TREASURES: usize = 3;

/// Main explanation generator
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Build cards, component display and synergy text for a team
    ///
    /// `treasures` is the catalogue used for treasure suggestions; pass an
    /// empty slice to skip them.
    pub fn generate(team: &Team, treasures: &[Arc<Treasure>]) -> Explanation {
        let scorer = CompositionScorer::new(team.options().include_synergy);
        let components = scorer.components(team.cookies(), team.treasures(), team.synergy_breakdown());

        let fragments = [
            generate_c1_fragment(&components.c1),
            generate_c2_fragment(&components.c2),
            generate_c3_fragment(&components.c3),
            generate_c4_fragment(&components.c4),
            generate_c5_fragment(&components.c5),
            generate_c6_fragment(&components.c6, team.advanced_synergy()),
        ];

        let mut benefits = Vec::new();
        let mut warnings = Vec::new();
        for fragment in fragments {
            if let Some(benefit) = fragment.benefit {
                benefits.push(benefit);
            }
            if let Some(warning) = fragment.warning {
                warnings.push(warning);
            }
        }

        let members = team
            .cookies()
            .iter()
            .map(|c| MemberLine {
                name: c.name.clone(),
                rarity: c.rarity.to_string(),
                role: c.role.to_string(),
                position: c.position.to_string(),
                power: c.power(),
            })
            .collect();

        Explanation {
            overall: Self::generate_overall(team.composition_score()),
            members,
            benefits,
            warnings,
            metrics_display: Self::format_metrics_display(team.score_breakdown()),
            synergy: Self::synergy_text(team),
            treasures: recommend_treasures(team, treasures, EXPLAINED_TREASURES),
        }
    }

    fn generate_overall(score: f64) -> OverallExplanation {
        let (stars, label) = match score {
            s if s >= 100.0 => ("★★★★★", "Exceptional"),
            s if s >= 85.0 => ("★★★★☆", "Excellent"),
            s if s >= 70.0 => ("★★★☆☆", "Good"),
            s if s >= 55.0 => ("★★☆☆☆", "Fair"),
            s if s >= 40.0 => ("★☆☆☆☆", "Weak"),
            _ => ("☆☆☆☆☆", "Poor"),
        };

        OverallExplanation {
            score,
            stars: stars.to_string(),
            label: label.to_string(),
            message: format!("Composition score: {:.1}", score),
        }
    }

    fn format_metrics_display(score: &CompositionScore) -> MetricsDisplay {
        let card = |code: &str, name: &str, value: f64, max: f64| {
            let ratio = if max > 0.0 { value / max } else { 0.0 };
            let interpretation = match ratio {
                r if r >= 0.8 => "Excellent",
                r if r >= 0.6 => "Good",
                r if r >= 0.4 => "Fair",
                _ => "Poor",
            };
            MetricCard {
                code: code.to_string(),
                name: name.to_string(),
                score: value,
                max,
                interpretation: interpretation.to_string(),
            }
        };

        MetricsDisplay {
            core: vec![
                card("C1", "Role Diversity", score.role_diversity, 30.0),
                card("C2", "Position Coverage", score.position_coverage, 25.0),
                card("C3", "Power", score.power, 35.0),
                card("C4", "Bonus Modifiers", score.bonus, 8.0),
            ],
            bonus: vec![
                card("C5", "Treasure Bonus", score.treasure_bonus, 15.0),
                card("C6", "Synergy Bonus", score.synergy_bonus, 20.0),
            ],
        }
    }

    /// Plain-text synergy analysis of a team
    pub fn synergy_text(team: &Team) -> String {
        let breakdown = team.synergy_breakdown();
        let cookies = team.cookies();
        let mut text = String::with_capacity(512);

        let _ = writeln!(text, "Team Synergy Analysis (Total: {:.1}/110)\n", breakdown.total);

        let _ = writeln!(text, "⚔️  Role Synergy: {:.1}/30", breakdown.role);
        text.push_str(match breakdown.role {
            r if r >= 24.0 => "   Excellent role compatibility!\n",
            r if r >= 18.0 => "   Good role balance.\n",
            _ => "   Could improve role diversity.\n",
        });

        let _ = writeln!(text, "\n📍 Position Synergy: {:.1}/20", breakdown.position);
        let coverage: Vec<String> = positions_present(cookies)
            .iter()
            .map(|(p, n)| format!("{}: {}", p, n))
            .collect();
        let _ = writeln!(text, "   Coverage: {}", coverage.join(", "));

        let _ = writeln!(text, "\n✨ Element Synergy: {:.1}/25", breakdown.element);
        let elements = first_seen_counts(cookies.iter().filter_map(|c| c.element.as_deref()));
        if elements.is_empty() {
            text.push_str("   No elemental data available.\n");
        } else {
            let listed: Vec<String> = elements.iter().map(|(e, n)| format!("{}: {}", e, n)).collect();
            let _ = writeln!(text, "   Elements: {}", listed.join(", "));
        }

        let _ = writeln!(text, "\n🌟 Type Synergy: {:.1}/15", breakdown.type_);
        let rarities = first_seen_counts(cookies.iter().map(|c| c.rarity.label()));
        // max_by_key keeps the last maximum; fold keeps the first
        let dominant = rarities
            .iter()
            .fold(None::<&(&str, usize)>, |best, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            });
        if let Some((rarity, n)) = dominant {
            let _ = writeln!(text, "   Dominant type: {} ({} cookies)", rarity, n);
        }

        let _ = writeln!(text, "\n🛡️  Coverage: {:.1}/10", breakdown.coverage);
        let mark = |present: bool| if present { "✓" } else { "✗" };
        let _ = writeln!(
            text,
            "   Tank: {} | Healer: {}",
            mark(team.has_tank()),
            mark(team.has_healer())
        );

        let _ = writeln!(text, "\n💫 Ability Synergy: {:.1}/10", breakdown.ability);
        let abilities = AbilityPresence::of(cookies);
        let mut active = Vec::new();
        if abilities.cc_and_burst() {
            active.push("CC+Burst combo");
        }
        if abilities.heal_and_shield() {
            active.push("Heal+Shield synergy");
        }
        if abilities.immunity_and_dispel() {
            active.push("Immunity+Dispel coverage");
        }
        if active.is_empty() {
            text.push_str("   No special ability synergies detected.\n");
        } else {
            let _ = writeln!(text, "   Active synergies: {}", active.join(", "));
        }

        text
    }
}

/// Counts in order of first appearance
fn first_seen_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| *v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cookie, Position, Rarity, Role};
    use crate::synergy::SynergyEngine;

    fn team() -> Team {
        let cookies = vec![
            Cookie::new("Hollyberry Cookie", Rarity::Ancient, Role::Defense, Position::Front).with_element("Fire"),
            Cookie::new("Pure Vanilla Cookie", Rarity::Ancient, Role::Healing, Position::Rear)
                .with_healing()
                .with_shield(),
            Cookie::new("Sea Fairy Cookie", Rarity::Legendary, Role::Bomber, Position::Rear).with_element("Water"),
            Cookie::new("Espresso Cookie", Rarity::Epic, Role::Magic, Position::Middle),
            Cookie::new("Wind Archer Cookie", Rarity::Ancient, Role::Ranged, Position::Rear),
        ];
        Team::from_cookies(cookies.into_iter().map(Arc::new).collect(), &SynergyEngine::default()).unwrap()
    }

    #[test]
    fn test_generate_overall() {
        let overall = ExplanationGenerator::generate_overall(89.0);
        assert_eq!(overall.stars, "★★★★☆");
        assert_eq!(overall.label, "Excellent");

        let poor = ExplanationGenerator::generate_overall(12.0);
        assert_eq!(poor.label, "Poor");
    }

    #[test]
    fn test_metrics_display() {
        let display = ExplanationGenerator::format_metrics_display(team().score_breakdown());
        assert_eq!(display.core.len(), 4);
        assert_eq!(display.bonus.len(), 2);
        assert_eq!(display.core[0].code, "C1");
        assert_eq!(display.core[0].interpretation, "Excellent");
        assert_eq!(display.bonus[0].interpretation, "Poor");
    }

    #[test]
    fn test_synergy_text_sections() {
        let text = ExplanationGenerator::synergy_text(&team());
        assert!(text.starts_with("Team Synergy Analysis (Total: "));
        assert!(text.contains("   Coverage: Front: 1, Middle: 1, Rear: 3\n"));
        assert!(text.contains("   Elements: Fire: 1, Water: 1\n"));
        assert!(text.contains("   Dominant type: Ancient (3 cookies)\n"));
        assert!(text.contains("   Tank: ✓ | Healer: ✓\n"));
        assert!(text.contains("   Active synergies: Heal+Shield synergy\n"));
    }

    #[test]
    fn test_generate_collects_cards() {
        let explanation = ExplanationGenerator::generate(&team(), &[]);
        assert_eq!(explanation.members.len(), 5);
        assert!(explanation.benefits.iter().any(|b| b.component_code == "C1"));
        assert!(explanation.warnings.is_empty());
        assert!(explanation.treasures.is_empty());
    }
}
