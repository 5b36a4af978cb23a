// Counter-team and guild battle integration tests

mod common;

use approx::assert_relative_eq;
use cookie_team_optimizer::counter::{COMPOSITION_WEIGHT, COUNTER_WEIGHT};
use cookie_team_optimizer::{
    CounterPlan, CounterTeamGenerator, ErrorKind, MarkdownFormatter, SearchParams, Strategy, Team,
    TeamError, TeamOptimizer,
};

const ENEMY: [&str; 5] = [
    "Pure Vanilla Cookie",
    "Parfait Cookie",
    "Custard Cookie III",
    "Hollyberry Cookie",
    "Espresso Cookie",
];

fn enemy(optimizer: &TeamOptimizer) -> Team {
    optimizer.team_from_names(&ENEMY, &[]).unwrap()
}

#[test]
fn test_repeated_enemy_name_is_duplicate() {
    let optimizer = common::optimizer(1);
    let names = [
        "Pure Vanilla Cookie",
        "Pure Vanilla Cookie",
        "Custard Cookie III",
        "Hollyberry Cookie",
        "Espresso Cookie",
    ];
    let err = optimizer.team_from_names(&names, &[]).unwrap_err();
    assert_eq!(err, TeamError::DuplicateCookie("Pure Vanilla Cookie".to_string()));
}

// ===== Counter teams =====

#[test]
fn test_plan_for_healer_backline() {
    let optimizer = common::optimizer(1);
    let plan = CounterPlan::new(&enemy(&optimizer), optimizer.cookies());

    assert_eq!(plan.analysis.healers.len(), 3);
    assert!(plan.analysis.exposed_backline());

    let names: Vec<&str> = plan.weaknesses.iter().map(|w| w.name).collect();
    assert_eq!(names[0], "Exposed Backline");
    assert!(names.contains(&"Healing-Heavy Team"));
    assert!(plan.weaknesses.windows(2).all(|w| w[0].confidence >= w[1].confidence));

    // No enemy immunity, so the CC rule has the last word
    assert_eq!(plan.strategy.archetype, "CC Lockdown");
    assert!(plan.strategy.recommends("Poison Mushroom Cookie"));
    assert!(plan.strategy.priority_targets.iter().any(|t| t == "Pure Vanilla Cookie"));
}

#[test]
fn test_counter_teams_ranked_by_combined_score() {
    let mut optimizer = common::optimizer(17);
    let enemy = enemy(&optimizer);
    let params = SearchParams::from_config(optimizer.config());

    let teams = optimizer
        .find_counter_teams(&enemy, 3, Strategy::Greedy, &params, &[] as &[&str])
        .unwrap();
    assert!(!teams.is_empty() && teams.len() <= 3);

    for (team, report) in &teams {
        assert_eq!(team.cookies().len(), 5);
        assert!((0.0..=100.0).contains(&report.counter_score));
        assert_relative_eq!(report.team_score, team.composition_score());
        assert_relative_eq!(
            report.combined_score,
            COUNTER_WEIGHT * report.counter_score + COMPOSITION_WEIGHT * report.team_score,
            epsilon = 1e-9
        );
        assert!(report.recommended_treasures.len() <= 3);
    }
    assert!(teams
        .windows(2)
        .all(|w| w[0].1.combined_score >= w[1].1.combined_score));
}

#[test]
fn test_counter_teams_keep_required_members() {
    let mut optimizer = common::optimizer(23);
    let enemy = enemy(&optimizer);
    let params = SearchParams::from_config(optimizer.config());

    let mut generator = CounterTeamGenerator::new(&mut optimizer);
    let plan = generator.plan(&enemy);
    let teams = generator
        .find_counter_teams(&enemy, 4, Strategy::Random, &params, &["Knight Cookie"])
        .unwrap();

    assert!(!teams.is_empty());
    for (team, report) in &teams {
        assert!(team.contains("Knight Cookie"));
        assert_eq!(report.strategy, plan.strategy.description);
    }

    let (team, report) = &teams[0];
    let md = MarkdownFormatter::format_counter(&plan, team, Some(report));
    assert!(md.contains("## Counter Strategy: CC Lockdown"));
    assert!(md.contains("**Counter Score:**"));
}

#[test]
fn test_counter_with_unknown_required() {
    let mut optimizer = common::optimizer(1);
    let enemy = enemy(&optimizer);
    let params = SearchParams::from_config(optimizer.config());
    let err = optimizer
        .find_counter_teams(&enemy, 3, Strategy::Greedy, &params, &["Gingerbrave"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ===== Guild battle =====

#[test]
fn test_boss_teams_for_dragon() {
    let mut optimizer = common::optimizer(31);
    let teams = optimizer
        .generate_boss_teams("red velvet dragon", &["Dark Choco Cookie"], 3)
        .unwrap();

    assert!(!teams.is_empty() && teams.len() <= 3);
    for entry in &teams {
        assert_eq!(entry.boss, "Red Velvet Dragon");
        assert!(entry.team.contains("Dark Choco Cookie"));
        assert!(entry.score <= 100.0);
        assert!(!entry.strategy.is_empty());
    }
    assert!(teams.windows(2).all(|w| w[0].score >= w[1].score));

    let json = serde_json::to_value(&teams[0]).unwrap();
    assert_eq!(json["team"].as_array().unwrap().len(), 5);
}

#[test]
fn test_unknown_boss_is_configuration_error() {
    let mut optimizer = common::optimizer(1);
    let err = optimizer
        .generate_boss_teams("Gingerbread Golem", &[] as &[&str], 3)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
}
