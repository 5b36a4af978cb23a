//! Counter-team generation
//!
//! Analyses an enemy team, lists its weaknesses, picks a counter strategy
//! and searches a restricted pool for teams that exploit it. Each result
//! carries a `CounterReport`; results are ordered by
//! `0.6 × counter score + 0.4 × composition score`.

pub mod analysis;
pub mod weaknesses;
pub mod strategy;
pub mod scoring;
pub mod treasures;

pub use analysis::EnemyAnalysis;
pub use scoring::{counter_score, CounterScore};
pub use strategy::{plan_counter, CounterStrategy};
pub use treasures::{recommend_counter_treasures, CounterTreasure, TreasureEffects};
pub use weaknesses::{identify_weaknesses, Priority, Weakness};

use crate::error::Result;
use crate::model::{Cookie, Team, TeamSignature, Treasure};
use crate::search::{SearchParams, SearchPool, Strategy, TeamOptimizer};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Target size of the restricted pool before required members
pub const COUNTER_POOL_SIZE: usize = 20;
/// Candidates generated per requested team
pub const CANDIDATE_FACTOR: usize = 3;

pub const COUNTER_WEIGHT: f64 = 0.6;
pub const COMPOSITION_WEIGHT: f64 = 0.4;

/// Everything derived from the enemy team alone
#[derive(Debug, Clone, Serialize)]
pub struct CounterPlan {
    pub analysis: EnemyAnalysis,
    pub weaknesses: Vec<Weakness>,
    pub strategy: CounterStrategy,
}

impl CounterPlan {
    pub fn new(enemy: &Team, roster: &[Arc<Cookie>]) -> Self {
        let analysis = EnemyAnalysis::of(enemy);
        let weaknesses = identify_weaknesses(&analysis);
        let strategy = plan_counter(&analysis, roster);
        Self {
            analysis,
            weaknesses,
            strategy,
        }
    }

    /// Members of `team` that the strategy recommends, in team order
    pub fn counter_cookies_used<'a>(&self, team: &'a Team) -> Vec<&'a str> {
        team.cookies()
            .iter()
            .filter(|c| self.strategy.recommends(&c.name))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Score one candidate against the enemy
    pub fn report(&self, team: &Team, treasures: &[Arc<Treasure>]) -> CounterReport {
        let breakdown = counter_score(team, &self.analysis, &self.strategy);
        let team_score = team.composition_score();
        CounterReport {
            counter_score: breakdown.total,
            breakdown,
            team_score,
            combined_score: COUNTER_WEIGHT * breakdown.total + COMPOSITION_WEIGHT * team_score,
            strategy: self.strategy.description.clone(),
            weaknesses: self.weaknesses.clone(),
            priority_targets: self.strategy.priority_targets.clone(),
            recommended_treasures: recommend_counter_treasures(&self.analysis, team, treasures),
        }
    }

    /// Recommended cookies topped up with Beast/Ancient/Legendary ones
    ///
    /// Required names are resolved against the full roster. When the
    /// restricted pool cannot fill a team the full roster is used.
    pub fn restricted_pool<S: AsRef<str>>(&self, roster: &[Arc<Cookie>], required: &[S]) -> Result<SearchPool> {
        let full = SearchPool::resolve(roster, required)?;

        let mut available: Vec<Arc<Cookie>> = full
            .available
            .iter()
            .filter(|c| self.strategy.recommends(&c.name))
            .cloned()
            .collect();
        if available.len() < COUNTER_POOL_SIZE {
            let missing = COUNTER_POOL_SIZE - available.len();
            let top_up: Vec<Arc<Cookie>> = full
                .available
                .iter()
                .filter(|c| c.rarity.is_top_tier() && !self.strategy.recommends(&c.name))
                .take(missing)
                .cloned()
                .collect();
            available.extend(top_up);
        }

        let restricted = SearchPool {
            required: full.required.clone(),
            available,
        };
        if restricted.ensure_fillable().is_err() {
            warn!(
                "Counter pool has {} cookies, falling back to the full roster",
                restricted.available.len()
            );
            return Ok(full);
        }
        Ok(restricted)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CounterReport {
    pub counter_score: f64,
    pub breakdown: CounterScore,
    pub team_score: f64,
    pub combined_score: f64,
    pub strategy: String,
    pub weaknesses: Vec<Weakness>,
    pub priority_targets: Vec<String>,
    pub recommended_treasures: Vec<CounterTreasure>,
}

/// Counter search over an optimizer's roster
pub struct CounterTeamGenerator<'a> {
    optimizer: &'a mut TeamOptimizer,
}

impl<'a> CounterTeamGenerator<'a> {
    pub fn new(optimizer: &'a mut TeamOptimizer) -> Self {
        Self { optimizer }
    }

    pub fn plan(&self, enemy: &Team) -> CounterPlan {
        CounterPlan::new(enemy, self.optimizer.cookies())
    }

    /// Best `count` counter teams, highest combined score first
    pub fn find_counter_teams<S: AsRef<str>>(
        &mut self,
        enemy: &Team,
        count: usize,
        strategy: Strategy,
        params: &SearchParams,
        required: &[S],
    ) -> Result<Vec<(Team, CounterReport)>> {
        let start = Instant::now();
        let plan = self.plan(enemy);
        info!(
            "Countering [{}]: {} weaknesses, archetype '{}'",
            enemy.names().join(", "),
            plan.weaknesses.len(),
            plan.strategy.archetype
        );

        let pool = plan.restricted_pool(self.optimizer.cookies(), required)?;
        let candidates =
            self.optimizer
                .generate_in_pool(&pool, count * CANDIDATE_FACTOR, strategy, params)?;

        let mut seen: FxHashSet<TeamSignature> = FxHashSet::default();
        let unique: Vec<Team> = candidates
            .into_iter()
            .filter(|t| seen.insert(t.signature().clone()))
            .collect();

        let treasures = self.optimizer.treasures();
        let mut scored: Vec<(Team, CounterReport)> = unique
            .into_par_iter()
            .map(|team| {
                let report = plan.report(&team, treasures);
                (team, report)
            })
            .collect();

        scored.sort_by(|(ta, a), (tb, b)| {
            b.combined_score
                .total_cmp(&a.combined_score)
                .then_with(|| ta.signature().cmp(tb.signature()))
        });
        scored.truncate(count);

        info!(
            "Counter search ({}) over {} cookies returned {} teams in {:.2?}",
            strategy,
            pool.available.len() + pool.required.len(),
            scored.len(),
            start.elapsed()
        );
        Ok(scored)
    }
}

impl TeamOptimizer {
    /// Counter teams against `enemy`; see `CounterTeamGenerator`
    pub fn find_counter_teams<S: AsRef<str>>(
        &mut self,
        enemy: &Team,
        count: usize,
        strategy: Strategy,
        params: &SearchParams,
        required: &[S],
    ) -> Result<Vec<(Team, CounterReport)>> {
        CounterTeamGenerator::new(self).find_counter_teams(enemy, count, strategy, params, required)
    }
}
