//! Cookie Team Optimizer
//!
//! Composition scoring and team search for Cookie Run: Kingdom rosters.
//!
//! Layout follows the scoring pipeline:
//! - `model/`: cookies, treasures and validated teams
//! - `metrics/`: the six composition components (C1-C6)
//! - `scorer`: coordinator summing the components
//! - `synergy/`: pairwise and whole-team synergy
//! - `search/`: random, greedy, genetic, synergy-focused and exhaustive search
//! - `counter/`, `guild_battle/`: enemy- and boss-aware team generation
//! - `explanation/`: cards and Markdown/JSON reports
//! - `data`, `export`: Polars-backed loading and export

pub mod error;
pub mod config;
pub mod utils;
pub mod model;
pub mod metrics;
pub mod scorer;
pub mod synergy;
pub mod search;
pub mod progression;
pub mod recommend;
pub mod counter;
pub mod guild_battle;
pub mod explanation;
pub mod export;
pub mod data;

// Re-export commonly used types
pub use config::OptimizerConfig;
pub use counter::{CounterPlan, CounterReport, CounterTeamGenerator, EnemyAnalysis};
pub use data::{CookieRecord, GameData, SynergyTables, TreasureRecord};
pub use error::{ErrorKind, Result, TeamError};
pub use explanation::{Explanation, ExplanationGenerator, JsonFormatter, MarkdownFormatter};
pub use export::{export_teams, ExportFormat, TeamExport, TeamsDocument};
pub use guild_battle::{BossProfile, BossTeam};
pub use model::{Cookie, Position, Progression, Rarity, Role, Team, TeamOptions, TierRanking, Treasure};
pub use recommend::{recommend_treasures, TreasureRecommendation};
pub use scorer::{CompositionScore, CompositionScorer};
pub use search::{SearchParams, Strategy, TeamOptimizer};
pub use synergy::SynergyEngine;
