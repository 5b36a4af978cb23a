use crate::counter::{CounterPlan, CounterReport};
use crate::explanation::types::{Explanation, MetricCard};
use crate::guild_battle::{BossProfile, BossTeam};
use crate::model::Team;

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a team explanation as markdown
    pub fn format(explanation: &Explanation) -> String {
        let mut md = String::with_capacity(2048);

        md.push_str(&format!(
            "# {} - {}\n\n",
            explanation.overall.stars, explanation.overall.label
        ));
        md.push_str(&format!("{}\n\n", explanation.overall.message));

        md.push_str("## Team\n\n");
        md.push_str("| Cookie | Rarity | Role | Position | Power |\n");
        md.push_str("|--------|--------|------|----------|-------|\n");
        for member in &explanation.members {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {:.2} |\n",
                member.name, member.rarity, member.role, member.position, member.power
            ));
        }
        md.push('\n');

        if !explanation.benefits.is_empty() {
            md.push_str("## Strengths\n\n");
            for benefit in &explanation.benefits {
                md.push_str(&format!(
                    "### {} [{}]\n\n",
                    benefit.title, benefit.component_code
                ));
                md.push_str(&format!("{}  \n", benefit.message));
                md.push_str(&format!("{}\n\n", benefit.detail));
            }
        }

        if !explanation.warnings.is_empty() {
            md.push_str("## Warnings\n\n");
            for warning in &explanation.warnings {
                md.push_str(&format!("{} **{}**\n\n", warning.icon, warning.message));
                md.push_str(&format!("*Advice:* {}\n\n", warning.advice));
            }
        }

        md.push_str("## Score Breakdown\n\n");
        md.push_str("### Core Components\n\n");
        Self::format_metric_table(&mut md, &explanation.metrics_display.core);
        md.push_str("\n### Bonus Components\n\n");
        Self::format_metric_table(&mut md, &explanation.metrics_display.bonus);

        md.push_str("\n## Synergy\n\n```text\n");
        md.push_str(&explanation.synergy);
        md.push_str("```\n\n");

        if !explanation.treasures.is_empty() {
            md.push_str("## Recommended Treasures\n\n");
            for (i, rec) in explanation.treasures.iter().enumerate() {
                md.push_str(&format!(
                    "{}. **{}** ({}) - {:.1}: {}\n",
                    i + 1,
                    rec.treasure,
                    rec.tier,
                    rec.score,
                    rec.reason
                ));
            }
            md.push('\n');
        }

        md
    }

    fn format_metric_table(md: &mut String, cards: &[MetricCard]) {
        md.push_str("| Component | Score | Interpretation |\n");
        md.push_str("|-----------|-------|----------------|\n");
        for card in cards {
            md.push_str(&format!(
                "| {} - {} | {:.1}/{:.0} | {} |\n",
                card.code, card.name, card.score, card.max, card.interpretation
            ));
        }
    }

    /// Why a counter team works against the planned enemy
    pub fn format_counter(plan: &CounterPlan, team: &Team, report: Option<&CounterReport>) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str("# Counter-Team Analysis\n\n");
        md.push_str(&format!("**Team:** {}\n\n", team.names().join(", ")));

        if let Some(report) = report {
            md.push_str(&format!(
                "**Counter Score:** {:.1}/100 | **Team Score:** {:.1} | **Combined:** {:.1}\n\n",
                report.counter_score, report.team_score, report.combined_score
            ));
        }

        md.push_str(&format!(
            "## Enemy Weaknesses Identified ({})\n\n",
            plan.weaknesses.len()
        ));
        for (i, weakness) in plan.weaknesses.iter().enumerate() {
            md.push_str(&format!(
                "{}. **{}** ({} priority, {}% confidence)\n",
                i + 1,
                weakness.name,
                weakness.priority,
                weakness.confidence
            ));
            md.push_str(&format!("   - {}\n", weakness.description));
            md.push_str(&format!("   - Exploit: {}\n", weakness.exploit));
        }
        md.push('\n');

        md.push_str(&format!("## Counter Strategy: {}\n\n", plan.strategy.archetype));
        md.push_str(&format!("{}\n\n", plan.strategy.description));

        let used = plan.counter_cookies_used(team);
        if !used.is_empty() {
            md.push_str("## Counter Cookies Used\n\n");
            for name in used {
                md.push_str(&format!("- ✓ {}\n", name));
            }
            md.push('\n');
        }

        if !plan.strategy.priority_targets.is_empty() {
            md.push_str("## Priority Targets to Eliminate\n\n");
            for target in &plan.strategy.priority_targets {
                md.push_str(&format!("- 🎯 {}\n", target));
            }
            md.push('\n');
        }

        if let Some(report) = report {
            if !report.recommended_treasures.is_empty() {
                md.push_str("## Counter Treasures\n\n");
                for treasure in &report.recommended_treasures {
                    md.push_str(&format!(
                        "- **{}** ({}) - {:.2}: {}\n",
                        treasure.name, treasure.tier, treasure.score, treasure.reason
                    ));
                }
                md.push('\n');
            }
        }

        md
    }

    /// Boss profile followed by ranked teams
    pub fn format_boss_teams(boss: &BossProfile, teams: &[BossTeam]) -> String {
        let mut md = String::with_capacity(1024);
        md.push_str(&format!("# {}\n\n{}\n\n", boss.name, boss.description));

        md.push_str("## Mechanics\n\n");
        for mechanic in boss.mechanics {
            md.push_str(&format!("- {}\n", mechanic));
        }
        md.push('\n');

        for (i, entry) in teams.iter().enumerate() {
            md.push_str(&format!("## Team {} ({:.1}/100)\n\n", i + 1, entry.score));
            md.push_str(&format!("{}\n\n", entry.team.names().join(", ")));
            md.push_str(&format!("{}\n\n", entry.strategy));
        }
        md
    }
}
