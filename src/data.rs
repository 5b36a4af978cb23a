//! Roster loading
//!
//! Reads the cookie, ability and treasure CSVs with Polars (every column as
//! a string) plus the synergy side table JSON, and turns rows into model
//! records. Cleaning rules:
//! - rows without a name or rarity are dropped
//! - an unknown rarity drops the row with a warning
//! - a missing role is `Unknown`, a missing position is `Middle`
//! - "N/A" and "None" read as absent, flags are `true` case-insensitively
//!
//! `CookieRecord` / `TreasureRecord` are the same rows as serde types, so a
//! roster can also be ingested from JSON.

use crate::config::OptimizerConfig;
use crate::error::Result as TeamResult;
use crate::model::{normalize_tag, Cookie, Position, Progression, Rarity, Role, TierRanking, Treasure};
use crate::search::TeamOptimizer;
use ahash::AHashMap;
use anyhow::{Context, Result};
use polars::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub const COOKIES_FILE: &str = "crk_cookies.csv";
pub const ABILITIES_FILE: &str = "cookie_abilities.csv";
pub const SYNERGY_FILE: &str = "cookie_synergy_data.json";
pub const TREASURES_FILE: &str = "crk_treasures.csv";

/// Per-cookie synergy side table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyTables {
    /// Overrides the element column of the roster CSV
    pub elements: FxHashMap<String, String>,
    pub synergy_groups: FxHashMap<String, Vec<String>>,
    pub special_combos: FxHashMap<String, Vec<String>>,
}

impl SynergyTables {
    /// Load the side table; a missing or malformed file yields empty tables
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                warn!("{:?} not found; cookies will have no synergy data", path);
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(tables) => tables,
            Err(e) => {
                warn!("Failed to parse synergy data {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// One roster row, abilities merged in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieRecord {
    pub cookie_name: String,
    pub cookie_rarity: String,
    #[serde(default)]
    pub cookie_role: Option<String>,
    #[serde(default)]
    pub cookie_position: Option<String>,
    #[serde(default)]
    pub cookie_element: Option<String>,

    #[serde(default)]
    pub skill_name: Option<String>,
    #[serde(default)]
    pub skill_type: Option<String>,
    #[serde(default)]
    pub crowd_control: Option<String>,
    #[serde(default)]
    pub grants_immunity: Option<String>,
    #[serde(default)]
    pub provides_healing: bool,
    #[serde(default)]
    pub provides_shield: bool,
    #[serde(default)]
    pub anti_heal: bool,
    #[serde(default)]
    pub anti_tank: bool,
    #[serde(default)]
    pub dispel: bool,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub key_mechanic: Option<String>,

    /// Used when the side table has no entry for this cookie
    #[serde(default)]
    pub synergy_groups: Vec<String>,
    #[serde(default)]
    pub special_combos: Vec<String>,
    #[serde(default)]
    pub progression: Progression,
}

impl CookieRecord {
    /// Convert to a cookie; `None` when the rarity is not recognised
    pub fn into_cookie(self, tables: &SynergyTables) -> Option<Cookie> {
        let Some(rarity) = Rarity::parse(&self.cookie_rarity) else {
            warn!(
                "Skipping {}: unknown rarity '{}'",
                self.cookie_name, self.cookie_rarity
            );
            return None;
        };
        let role = self.cookie_role.as_deref().map(Role::parse).unwrap_or(Role::Unknown);
        let position = self
            .cookie_position
            .as_deref()
            .and_then(Position::parse)
            .unwrap_or(Position::Middle);

        let element = match tables.elements.get(&self.cookie_name) {
            Some(element) => normalize_tag(Some(element)),
            None => normalize_tag(self.cookie_element.as_deref()),
        };
        let groups = tables
            .synergy_groups
            .get(&self.cookie_name)
            .cloned()
            .unwrap_or(self.synergy_groups);
        let combos = tables
            .special_combos
            .get(&self.cookie_name)
            .cloned()
            .unwrap_or(self.special_combos);

        let mut cookie = Cookie::new(self.cookie_name, rarity, role, position)
            .with_progression(self.progression)
            .with_groups(&groups)
            .with_combos(&combos);
        cookie.element = element;
        cookie.skill_name = normalize_tag(self.skill_name.as_deref());
        cookie.skill_type = normalize_tag(self.skill_type.as_deref());
        cookie.crowd_control = normalize_tag(self.crowd_control.as_deref());
        cookie.grants_immunity = normalize_tag(self.grants_immunity.as_deref());
        cookie.target_type = normalize_tag(self.target_type.as_deref());
        cookie.key_mechanic = normalize_tag(self.key_mechanic.as_deref());
        cookie.provides_healing = self.provides_healing;
        cookie.provides_shield = self.provides_shield;
        cookie.anti_heal = self.anti_heal;
        cookie.anti_tank = self.anti_tank;
        cookie.dispel = self.dispel;

        Some(cookie.with_detected_traits())
    }
}

fn default_rarity() -> String {
    "Common".to_string()
}

fn default_activation() -> String {
    "Passive".to_string()
}

fn default_tier() -> String {
    "C".to_string()
}

fn default_category() -> String {
    "Offensive".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasureRecord {
    pub treasure_name: String,
    #[serde(default = "default_rarity")]
    pub rarity: String,
    #[serde(default = "default_activation")]
    pub activation_type: String,
    #[serde(default = "default_tier")]
    pub tier_ranking: String,
    #[serde(default = "default_category")]
    pub effect_category: String,
    #[serde(default)]
    pub primary_effect: String,
    #[serde(default)]
    pub atk_boost_max: f64,
    #[serde(default)]
    pub crit_boost_max: f64,
    #[serde(default)]
    pub cooldown_reduction_max: f64,
    #[serde(default)]
    pub dmg_resist_max: f64,
    #[serde(default)]
    pub hp_shield_max: f64,
    #[serde(default)]
    pub heal_max: f64,
    #[serde(default)]
    pub revive: bool,
    #[serde(default)]
    pub debuff_cleanse: bool,
    #[serde(default)]
    pub enemy_debuff: bool,
    #[serde(default)]
    pub summon_boost: bool,
    /// Pipe-separated, e.g. "DPS|Burst|Tank"
    #[serde(default)]
    pub recommended_archetypes: String,
    #[serde(default)]
    pub cooldown_seconds: f64,
    #[serde(default)]
    pub special_condition: Option<String>,
}

impl TreasureRecord {
    pub fn into_treasure(self) -> Treasure {
        let tier = TierRanking::parse(&self.tier_ranking);
        if tier.is_none() {
            warn!(
                "{}: unrecognised tier '{}'",
                self.treasure_name, self.tier_ranking
            );
        }
        Treasure {
            name: self.treasure_name,
            rarity: self.rarity,
            activation_type: self.activation_type,
            tier,
            effect_category: self.effect_category,
            primary_effect: self.primary_effect,
            atk_boost_max: self.atk_boost_max,
            crit_boost_max: self.crit_boost_max,
            cooldown_reduction_max: self.cooldown_reduction_max,
            dmg_resist_max: self.dmg_resist_max,
            hp_shield_max: self.hp_shield_max,
            heal_max: self.heal_max,
            revive: self.revive,
            debuff_cleanse: self.debuff_cleanse,
            enemy_debuff: self.enemy_debuff,
            summon_boost: self.summon_boost,
            recommended_archetypes: split_pipe_list(&self.recommended_archetypes),
            cooldown_seconds: self.cooldown_seconds,
            special_condition: normalize_tag(self.special_condition.as_deref()),
        }
    }
}

/// JSON roster document accepted by [`GameData::load_records`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordSet {
    pub cookies: Vec<CookieRecord>,
    pub treasures: Vec<TreasureRecord>,
    pub synergy: SynergyTables,
}

/// Loaded cookies and treasures
#[derive(Debug, Clone, Default)]
pub struct GameData {
    pub cookies: Vec<Cookie>,
    pub treasures: Vec<Treasure>,
}

impl GameData {
    /// Load every data file found in `dir`
    ///
    /// Only the roster CSV is mandatory; missing ability, synergy or
    /// treasure files are logged and treated as empty.
    pub fn load(dir: &Path) -> Result<Self> {
        let cookies_path = dir.join(COOKIES_FILE);
        let roster = read_string_csv(&cookies_path)?;
        let roster = StringTable::new(&roster)
            .with_context(|| format!("Failed to read columns of {:?}", cookies_path))?;

        let abilities_path = dir.join(ABILITIES_FILE);
        let abilities_df = if abilities_path.exists() {
            Some(read_string_csv(&abilities_path)?)
        } else {
            warn!("{:?} not found; loading cookies without ability data", abilities_path);
            None
        };
        let abilities = abilities_df.as_ref().map(StringTable::new).transpose()?;

        let tables = SynergyTables::load(&dir.join(SYNERGY_FILE));
        let records = cookie_records(&roster, abilities.as_ref());

        let treasures_path = dir.join(TREASURES_FILE);
        let treasure_records = if treasures_path.exists() {
            let df = read_string_csv(&treasures_path)?;
            treasure_records(&StringTable::new(&df)?)
        } else {
            warn!("{:?} not found; no treasures loaded", treasures_path);
            Vec::new()
        };

        let data = Self::from_records(records, treasure_records, &tables);
        info!(
            "Loaded {} cookies and {} treasures from {:?}",
            data.cookies.len(),
            data.treasures.len(),
            dir
        );
        Ok(data)
    }

    /// Load a JSON [`RecordSet`]
    pub fn load_records(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster records: {:?}", path))?;
        let set: RecordSet = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse roster records: {:?}", path))?;
        Ok(Self::from_records(set.cookies, set.treasures, &set.synergy))
    }

    pub fn from_records(
        cookies: Vec<CookieRecord>,
        treasures: Vec<TreasureRecord>,
        tables: &SynergyTables,
    ) -> Self {
        let cookies = cookies
            .into_iter()
            .filter(|r| !r.cookie_name.trim().is_empty() && !r.cookie_rarity.trim().is_empty())
            .filter_map(|r| r.into_cookie(tables))
            .collect();
        let treasures = treasures
            .into_iter()
            .filter(|r| !r.treasure_name.trim().is_empty())
            .map(TreasureRecord::into_treasure)
            .collect();
        Self { cookies, treasures }
    }

    pub fn into_optimizer(self, config: OptimizerConfig) -> TeamResult<TeamOptimizer> {
        TeamOptimizer::new(self.cookies, self.treasures, config)
    }
}

/// Read a CSV with every column typed as a string
fn read_string_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(PathBuf::from(path)))
        .with_context(|| format!("Failed to create CSV reader: {:?}", path))?
        .finish()
        .with_context(|| format!("Failed to load CSV: {:?}", path))
}

/// String columns of a frame, addressed by name
struct StringTable<'a> {
    columns: AHashMap<String, &'a StringChunked>,
    height: usize,
}

impl<'a> StringTable<'a> {
    fn new(df: &'a DataFrame) -> Result<Self> {
        let mut columns = AHashMap::new();
        for column in df.get_columns() {
            let values = column
                .str()
                .with_context(|| format!("Column '{}' is not string type", column.name()))?;
            columns.insert(column.name().to_string(), values);
        }
        Ok(Self {
            columns,
            height: df.height(),
        })
    }

    /// Trimmed cell, `None` when the column is absent or the cell is blank
    fn get(&self, column: &str, row: usize) -> Option<&'a str> {
        let values: &'a StringChunked = *self.columns.get(column)?;
        let value = values.get(row)?.trim();
        (!value.is_empty()).then_some(value)
    }

    fn text(&self, column: &str, row: usize) -> Option<String> {
        self.get(column, row).map(str::to_string)
    }

    fn flag(&self, column: &str, row: usize) -> bool {
        self.get(column, row).is_some_and(parse_flag)
    }

    fn number(&self, column: &str, row: usize) -> f64 {
        self.get(column, row)
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0)
    }
}

fn cookie_records(roster: &StringTable, abilities: Option<&StringTable>) -> Vec<CookieRecord> {
    // First ability row wins for a repeated name
    let mut ability_rows: AHashMap<&str, usize> = AHashMap::new();
    if let Some(abilities) = abilities {
        for row in 0..abilities.height {
            if let Some(name) = abilities.get("cookie_name", row) {
                ability_rows.entry(name).or_insert(row);
            }
        }
    }

    let mut records = Vec::with_capacity(roster.height);
    let mut skipped = 0;
    for row in 0..roster.height {
        let (Some(name), Some(rarity)) = (
            roster.get("cookie_name", row),
            roster.get("cookie_rarity", row),
        ) else {
            skipped += 1;
            continue;
        };

        let mut record = CookieRecord {
            cookie_name: name.to_string(),
            cookie_rarity: rarity.to_string(),
            cookie_role: roster.text("cookie_role", row),
            cookie_position: roster.text("cookie_position", row),
            cookie_element: roster.text("cookie_element", row),
            ..CookieRecord::default()
        };

        if let (Some(abilities), Some(&a)) = (abilities, ability_rows.get(name)) {
            record.skill_name = abilities.text("skill_name", a);
            record.skill_type = abilities.text("skill_type", a);
            record.crowd_control = abilities.text("crowd_control", a);
            record.grants_immunity = abilities.text("grants_immunity", a);
            record.provides_healing = abilities.flag("provides_healing", a);
            record.provides_shield = abilities.flag("provides_shield", a);
            record.anti_heal = abilities.flag("anti_heal", a);
            record.anti_tank = abilities.flag("anti_tank", a);
            record.dispel = abilities.flag("dispel", a);
            record.target_type = abilities.text("target_type", a);
            record.key_mechanic = abilities.text("key_mechanic", a);
        }
        records.push(record);
    }

    if skipped > 0 {
        warn!("Skipped {} roster rows without name or rarity", skipped);
    }
    records
}

fn treasure_records(table: &StringTable) -> Vec<TreasureRecord> {
    (0..table.height)
        .filter_map(|row| {
            let name = table.get("treasure_name", row)?;
            Some(TreasureRecord {
                treasure_name: name.to_string(),
                rarity: table.text("rarity", row).unwrap_or_else(default_rarity),
                activation_type: table
                    .text("activation_type", row)
                    .unwrap_or_else(default_activation),
                tier_ranking: table.text("tier_ranking", row).unwrap_or_else(default_tier),
                effect_category: table
                    .text("effect_category", row)
                    .unwrap_or_else(default_category),
                primary_effect: table.text("primary_effect", row).unwrap_or_default(),
                atk_boost_max: table.number("atk_boost_max", row),
                crit_boost_max: table.number("crit_boost_max", row),
                cooldown_reduction_max: table.number("cooldown_reduction_max", row),
                dmg_resist_max: table.number("dmg_resist_max", row),
                hp_shield_max: table.number("hp_shield_max", row),
                heal_max: table.number("heal_max", row),
                revive: table.flag("revive", row),
                debuff_cleanse: table.flag("debuff_cleanse", row),
                enemy_debuff: table.flag("enemy_debuff", row),
                summon_boost: table.flag("summon_boost", row),
                recommended_archetypes: table
                    .text("recommended_archetypes", row)
                    .unwrap_or_default(),
                cooldown_seconds: table.number("cooldown_seconds", row),
                special_condition: table.text("special_condition", row),
            })
        })
        .collect()
}

fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn split_pipe_list(value: &str) -> Vec<String> {
    value
        .split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
