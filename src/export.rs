//! Team export
//!
//! JSON writes one nested document per team; CSV flattens each team to a
//! single row (`cookie_1` .. `cookie_5` with role and power) through a
//! Polars DataFrame. All numbers are rounded to 2 decimals.

use crate::error::TeamError;
use crate::model::{Cookie, Progression, Team, Treasure};
use anyhow::{Context, Result};
use polars::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = TeamError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(TeamError::UnknownExportFormat(s.to_string())),
        }
    }
}

fn round2(value: f64) -> f64 {
    libm::round(value * 100.0) / 100.0
}

#[derive(Debug, Clone, Serialize)]
pub struct CookieExport {
    pub name: String,
    pub rarity: String,
    pub role: String,
    pub position: String,
    pub element: Option<String>,
    #[serde(flatten)]
    pub progression: Progression,
    pub power_score: f64,
    pub synergy_groups: Vec<String>,
    pub special_combos: Vec<String>,
}

impl From<&Cookie> for CookieExport {
    fn from(cookie: &Cookie) -> Self {
        Self {
            name: cookie.name.clone(),
            rarity: cookie.rarity.to_string(),
            role: cookie.role.to_string(),
            position: cookie.position.to_string(),
            element: cookie.element.clone(),
            progression: cookie.progression,
            power_score: round2(cookie.power()),
            synergy_groups: cookie.synergy_groups.clone(),
            special_combos: cookie.special_combos.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TreasureExport {
    pub name: String,
    pub rarity: String,
    pub activation_type: String,
    pub tier_ranking: &'static str,
    pub effect_category: String,
    pub primary_effect: String,
    pub atk_boost: f64,
    pub crit_boost: f64,
    pub cooldown_reduction: f64,
    pub power_score: f64,
    pub recommended_archetypes: Vec<String>,
}

impl From<&Treasure> for TreasureExport {
    fn from(treasure: &Treasure) -> Self {
        Self {
            name: treasure.name.clone(),
            rarity: treasure.rarity.clone(),
            activation_type: treasure.activation_type.clone(),
            tier_ranking: treasure.tier_label(),
            effect_category: treasure.effect_category.clone(),
            primary_effect: treasure.primary_effect.clone(),
            atk_boost: treasure.atk_boost_max,
            crit_boost: treasure.crit_boost_max,
            cooldown_reduction: treasure.cooldown_reduction_max,
            power_score: round2(treasure.power()),
            recommended_archetypes: treasure.recommended_archetypes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SynergyBreakdownExport {
    pub role_synergy: f64,
    pub position_synergy: f64,
    pub element_synergy: f64,
    pub type_synergy: f64,
    pub coverage_synergy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SynergyExport {
    pub total_score: f64,
    pub breakdown: SynergyBreakdownExport,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdvancedSynergyExport {
    pub total_synergy: f64,
    pub element_synergy: f64,
    pub group_synergy: f64,
    pub special_combo: f64,
}

/// Export tree for one team
#[derive(Debug, Clone, Serialize)]
pub struct TeamExport {
    pub score: f64,
    pub cookies: Vec<CookieExport>,
    pub role_distribution: BTreeMap<String, usize>,
    pub position_distribution: BTreeMap<String, usize>,
    pub has_tank: bool,
    pub has_healer: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasures: Option<Vec<TreasureExport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasure_bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synergy: Option<SynergyExport>,
    pub advanced_synergy: AdvancedSynergyExport,
}

impl From<&Team> for TeamExport {
    fn from(team: &Team) -> Self {
        let role_distribution = team
            .role_distribution()
            .into_iter()
            .map(|(role, n)| (role.to_string(), n))
            .collect();
        let position_distribution = team
            .position_distribution()
            .into_iter()
            .map(|(position, n)| (position.to_string(), n))
            .collect();

        let (treasures, treasure_bonus) = if team.treasures().is_empty() {
            (None, None)
        } else {
            (
                Some(team.treasures().iter().map(|t| TreasureExport::from(t.as_ref())).collect()),
                Some(round2(team.treasure_bonus())),
            )
        };

        let synergy = team.options().include_synergy.then(|| {
            let b = team.synergy_breakdown();
            SynergyExport {
                total_score: round2(b.total),
                breakdown: SynergyBreakdownExport {
                    role_synergy: round2(b.role),
                    position_synergy: round2(b.position),
                    element_synergy: round2(b.element),
                    type_synergy: round2(b.type_),
                    coverage_synergy: round2(b.coverage),
                },
            }
        });

        let advanced = team.advanced_synergy();
        Self {
            score: round2(team.composition_score()),
            cookies: team.cookies().iter().map(|c| CookieExport::from(c.as_ref())).collect(),
            role_distribution,
            position_distribution,
            has_tank: team.has_tank(),
            has_healer: team.has_healer(),
            treasures,
            treasure_bonus,
            synergy,
            advanced_synergy: AdvancedSynergyExport {
                total_synergy: round2(advanced.total),
                element_synergy: round2(advanced.element),
                group_synergy: round2(advanced.group),
                special_combo: round2(advanced.special_combo),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamsDocument {
    pub teams: Vec<TeamExport>,
    pub total_teams: usize,
}

impl TeamsDocument {
    pub fn new(teams: &[Team]) -> Self {
        Self {
            teams: teams.iter().map(TeamExport::from).collect(),
            total_teams: teams.len(),
        }
    }
}

/// Flat one-row-per-team frame
pub fn teams_frame(teams: &[Team]) -> Result<DataFrame> {
    let width = teams.iter().map(|t| t.cookies().len()).max().unwrap_or(0);

    let mut columns = vec![
        Column::new("team_number".into(), (1..=teams.len() as u32).collect::<Vec<u32>>()),
        Column::new(
            "score".into(),
            teams.iter().map(|t| round2(t.composition_score())).collect::<Vec<f64>>(),
        ),
        Column::new("has_tank".into(), teams.iter().map(Team::has_tank).collect::<Vec<bool>>()),
        Column::new("has_healer".into(), teams.iter().map(Team::has_healer).collect::<Vec<bool>>()),
    ];

    for slot in 0..width {
        let member = |t: &Team| t.cookies().get(slot).cloned();
        let names: Vec<Option<String>> = teams.iter().map(|t| member(t).map(|c| c.name.clone())).collect();
        let roles: Vec<Option<String>> = teams.iter().map(|t| member(t).map(|c| c.role.to_string())).collect();
        let powers: Vec<Option<f64>> = teams.iter().map(|t| member(t).map(|c| round2(c.power()))).collect();

        let n = slot + 1;
        columns.push(Column::new(format!("cookie_{}", n).into(), names));
        columns.push(Column::new(format!("cookie_{}_role", n).into(), roles));
        columns.push(Column::new(format!("cookie_{}_power", n).into(), powers));
    }

    DataFrame::new(columns).context("Failed to build export frame")
}

pub fn export_json(teams: &[Team], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    serde_json::to_writer_pretty(file, &TeamsDocument::new(teams))
        .with_context(|| format!("Failed to write teams JSON: {:?}", path))?;
    info!("Exported {} teams to {:?}", teams.len(), path);
    Ok(())
}

pub fn export_csv(teams: &[Team], path: &Path) -> Result<()> {
    let mut df = teams_frame(teams)?;
    let mut file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("Failed to write teams CSV: {:?}", path))?;
    info!("Exported {} teams to {:?}", teams.len(), path);
    Ok(())
}

pub fn export_teams(teams: &[Team], path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Json => export_json(teams, path),
        ExportFormat::Csv => export_csv(teams, path),
    }
}
