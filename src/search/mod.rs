//! Search Engine
//!
//! `TeamOptimizer` owns the cookie pool, the treasure list, the synergy
//! engine and a seedable RNG. Five interchangeable strategies generate
//! candidate teams; results are deduplicated by cookie set, sorted and
//! truncated.

pub mod pool;
pub mod random;
pub mod greedy;
pub mod genetic;
pub mod exhaustive;
pub mod synergy_focused;

pub use genetic::GeneticParams;
pub use pool::{rank_teams, RankKey, SearchPool};

use crate::config::OptimizerConfig;
use crate::error::{Result, TeamError};
use crate::model::{Cookie, Progression, Team, TeamOptions, Treasure, TEAM_SIZE};
use crate::progression::apply_progression;
use crate::synergy::SynergyEngine;
use ahash::AHashMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Random,
    Greedy,
    Genetic,
    Exhaustive,
    Synergy,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Random,
        Strategy::Greedy,
        Strategy::Genetic,
        Strategy::Exhaustive,
        Strategy::Synergy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Greedy => "greedy",
            Strategy::Genetic => "genetic",
            Strategy::Exhaustive => "exhaustive",
            Strategy::Synergy => "synergy",
        }
    }

    pub fn rank_key(self) -> RankKey {
        match self {
            Strategy::Synergy => RankKey::SynergyFirst,
            _ => RankKey::Composition,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = TeamError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Strategy::ALL
            .iter()
            .copied()
            .find(|st| st.name() == wanted)
            .ok_or_else(|| TeamError::UnknownStrategy(s.to_string()))
    }
}

/// Per-call search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchParams {
    /// Candidates for the random and synergy strategies
    pub candidates: usize,
    pub population: usize,
    pub generations: usize,
    /// Allow exhaustive runs above the configured limit
    pub confirm_large: bool,
}

impl SearchParams {
    pub fn from_config(config: &OptimizerConfig) -> Self {
        Self {
            candidates: config.candidates,
            population: config.population_size,
            generations: config.generations,
            confirm_large: false,
        }
    }

    pub fn with_candidates(mut self, candidates: usize) -> Self {
        self.candidates = candidates;
        self
    }

    pub fn with_genetic(mut self, population: usize, generations: usize) -> Self {
        self.population = population;
        self.generations = generations;
        self
    }

    pub fn confirm_large(mut self) -> Self {
        self.confirm_large = true;
        self
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::from_config(&OptimizerConfig::default())
    }
}

/// Team search over a cookie pool
pub struct TeamOptimizer {
    cookies: Vec<Arc<Cookie>>,
    index: AHashMap<String, usize>,
    treasures: Vec<Arc<Treasure>>,
    engine: SynergyEngine,
    config: OptimizerConfig,
    rng: ChaCha8Rng,
}

impl TeamOptimizer {
    pub fn new(cookies: Vec<Cookie>, treasures: Vec<Treasure>, config: OptimizerConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let cookies: Vec<Arc<Cookie>> = cookies.into_iter().map(Arc::new).collect();
        let index = cookies
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();

        Ok(Self {
            cookies,
            index,
            treasures: treasures.into_iter().map(Arc::new).collect(),
            engine: SynergyEngine::default(),
            config,
            rng,
        })
    }

    pub fn with_engine(mut self, engine: SynergyEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Restart the RNG from a fixed seed
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    pub fn cookies(&self) -> &[Arc<Cookie>] {
        &self.cookies
    }

    pub fn treasures(&self) -> &[Arc<Treasure>] {
        &self.treasures
    }

    pub fn engine(&self) -> &SynergyEngine {
        &self.engine
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Cookie>> {
        self.index.get(name).map(|&i| &self.cookies[i])
    }

    pub fn team_options(&self) -> TeamOptions {
        TeamOptions::default().with_synergy(self.config.include_synergy)
    }

    pub fn rng_mut(&mut self) -> &mut ChaCha8Rng {
        &mut self.rng
    }

    /// Build a strict team from cookie names
    ///
    /// Names are looked up as given, so a repeated name reaches team
    /// validation and fails as a duplicate.
    pub fn team_from_names<S: AsRef<str>>(&self, names: &[S], treasure_names: &[S]) -> Result<Team> {
        if names.len() != TEAM_SIZE {
            return Err(TeamError::TeamSize {
                expected: "exactly 5",
                got: names.len(),
            });
        }

        let mut cookies = Vec::with_capacity(names.len());
        let mut missing = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            match self.get(name) {
                Some(cookie) => cookies.push(Arc::clone(cookie)),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(TeamError::CookieNotFound(missing));
        }

        let mut treasures = Vec::with_capacity(treasure_names.len());
        let mut missing = Vec::new();
        for name in treasure_names {
            let name = name.as_ref().trim();
            match self.treasures.iter().find(|t| t.name == name) {
                Some(treasure) => treasures.push(Arc::clone(treasure)),
                None => missing.push(name.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(TeamError::TreasureNotFound(missing));
        }

        Team::new(cookies, treasures, self.team_options(), &self.engine)
    }

    /// Replace progression stats for the named cookies
    ///
    /// Records are swapped copy-on-write, so teams built earlier keep their
    /// snapshot. Returns the number of cookies updated.
    pub fn update_cookie_stats(&mut self, stats: &HashMap<String, Progression>) -> usize {
        apply_progression(&mut self.cookies, stats)
    }

    /// Generate unranked candidates over the full pool
    pub fn generate_candidates<S: AsRef<str>>(
        &mut self,
        count: usize,
        strategy: Strategy,
        params: &SearchParams,
        required: &[S],
    ) -> Result<Vec<Team>> {
        let pool = SearchPool::resolve(&self.cookies, required)?;
        self.generate_in_pool(&pool, count, strategy, params)
    }

    /// Generate unranked candidates over a resolved pool
    pub fn generate_in_pool(
        &mut self,
        pool: &SearchPool,
        count: usize,
        strategy: Strategy,
        params: &SearchParams,
    ) -> Result<Vec<Team>> {
        pool.ensure_fillable()?;
        let options = self.team_options();
        let engine = self.engine;
        let config = &self.config;
        let rng = &mut self.rng;

        let teams = match strategy {
            Strategy::Random => random::generate_random_teams(pool, params.candidates, options, &engine, rng),
            Strategy::Greedy => greedy::generate_greedy_teams(
                pool,
                count * config.greedy_multiplier,
                config.greedy_top_pick,
                options,
                &engine,
                rng,
            ),
            Strategy::Genetic => {
                if params.population < 2 {
                    return Err(TeamError::InvalidConfig(format!(
                        "population must be at least 2, got {}",
                        params.population
                    )));
                }
                let genetic = GeneticParams {
                    population: params.population,
                    generations: params.generations,
                    elites: config.elites_for(params.population),
                    mutation_rate: config.mutation_rate,
                    retry_factor: config.retry_factor,
                };
                genetic::evolve(pool, genetic, options, &engine, rng)
            }
            Strategy::Exhaustive => exhaustive::generate_exhaustive_teams(
                pool,
                config.exhaustive_limit,
                params.confirm_large,
                config.parallel,
                options,
                &engine,
            )?,
            Strategy::Synergy => synergy_focused::generate_synergy_teams(
                pool,
                params.candidates,
                config.retry_factor,
                options,
                &engine,
                rng,
            ),
        };
        Ok(teams)
    }

    /// Top `count` teams for a strategy, every one holding the required cookies
    pub fn find_best_teams<S: AsRef<str>>(
        &mut self,
        count: usize,
        strategy: Strategy,
        params: &SearchParams,
        required: &[S],
    ) -> Result<Vec<Team>> {
        let start = Instant::now();
        info!(
            "Searching with {} strategy (pool {}, required {})",
            strategy,
            self.cookies.len(),
            required.len()
        );

        let candidates = self.generate_candidates(count, strategy, params, required)?;
        let generated = candidates.len();
        let ranked = rank_teams(candidates, strategy.rank_key(), count);

        info!(
            "{} search: {} candidates, {} returned in {:.2?}",
            strategy,
            generated,
            ranked.len(),
            start.elapsed()
        );
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role};

    fn roster() -> Vec<Cookie> {
        let rarities = [Rarity::Beast, Rarity::Ancient, Rarity::Legendary, Rarity::Epic, Rarity::Rare];
        (0..15)
            .map(|i| {
                Cookie::new(
                    format!("Cookie {}", i),
                    rarities[i % rarities.len()],
                    Role::KNOWN[i % 8],
                    Position::ALL[i % 3],
                )
            })
            .collect()
    }

    fn optimizer(seed: u64) -> TeamOptimizer {
        TeamOptimizer::new(roster(), Vec::new(), OptimizerConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("Genetic".parse::<Strategy>().unwrap(), Strategy::Genetic);
        assert_eq!(" exhaustive ".parse::<Strategy>().unwrap(), Strategy::Exhaustive);
        let err = "simulated-annealing".parse::<Strategy>().unwrap_err();
        assert_eq!(err, TeamError::UnknownStrategy("simulated-annealing".to_string()));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_every_strategy_returns_sorted_unique_teams() {
        let params = SearchParams::default().with_candidates(60).with_genetic(12, 5);
        for strategy in Strategy::ALL {
            let mut opt = optimizer(4);
            let teams = opt.find_best_teams(5, strategy, &params, &["Cookie 2"]).unwrap();
            assert!(!teams.is_empty(), "{} returned nothing", strategy);
            assert!(teams.len() <= 5);
            assert!(teams.iter().all(|t| t.contains("Cookie 2")));
            if strategy != Strategy::Synergy {
                assert!(teams
                    .windows(2)
                    .all(|w| w[0].composition_score() >= w[1].composition_score()));
            }
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let params = SearchParams::default().with_candidates(40);
        let a = optimizer(99).find_best_teams(3, Strategy::Random, &params, &[] as &[&str]).unwrap();
        let b = optimizer(99).find_best_teams(3, Strategy::Random, &params, &[] as &[&str]).unwrap();
        let names = |teams: &[Team]| teams.iter().map(|t| t.signature().clone()).collect::<Vec<_>>();
        assert_eq!(names(&a), names(&b));
    }

    #[test]
    fn test_required_errors_surface() {
        let mut opt = optimizer(1);
        let params = SearchParams::default();
        let missing = opt.find_best_teams(3, Strategy::Greedy, &params, &["Nobody"]).unwrap_err();
        assert!(missing.is_validation());

        let six = ["Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3", "Cookie 4", "Cookie 5"];
        assert_eq!(
            opt.find_best_teams(3, Strategy::Random, &params, &six).unwrap_err(),
            TeamError::TooManyRequired(6)
        );
    }

    #[test]
    fn test_team_from_names_reports_team_errors() {
        let opt = optimizer(1);

        let repeated = ["Cookie 0", "Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3"];
        assert_eq!(
            opt.team_from_names(&repeated, &[]).unwrap_err(),
            TeamError::DuplicateCookie("Cookie 0".to_string())
        );

        let six = ["Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3", "Cookie 4", "Cookie 5"];
        assert_eq!(
            opt.team_from_names(&six, &[]).unwrap_err(),
            TeamError::TeamSize { expected: "exactly 5", got: 6 }
        );

        let five = ["Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3", "Nobody"];
        assert_eq!(
            opt.team_from_names(&five, &[]).unwrap_err(),
            TeamError::CookieNotFound(vec!["Nobody".to_string()])
        );

        let five = ["Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3", "Cookie 4"];
        assert_eq!(
            opt.team_from_names(&five, &["Lost Relic"]).unwrap_err(),
            TeamError::TreasureNotFound(vec!["Lost Relic".to_string()])
        );
    }

    #[test]
    fn test_insufficient_pool_is_configuration_error() {
        let cookies: Vec<Cookie> = roster().into_iter().take(4).collect();
        let mut opt = TeamOptimizer::new(cookies, Vec::new(), OptimizerConfig::default().with_seed(1)).unwrap();
        let err = opt
            .find_best_teams(3, Strategy::Random, &SearchParams::default(), &[] as &[&str])
            .unwrap_err();
        assert!(matches!(err, TeamError::InsufficientPool { needed: 5, available: 4 }));
    }

    #[test]
    fn test_five_required_is_the_only_team() {
        let mut opt = optimizer(2);
        let required = ["Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3", "Cookie 4"];
        let teams = opt
            .find_best_teams(10, Strategy::Exhaustive, &SearchParams::default(), &required)
            .unwrap();
        assert_eq!(teams.len(), 1);
    }

    #[test]
    fn test_update_stats_keeps_old_teams() {
        let mut opt = optimizer(3);
        let team = opt
            .team_from_names(&["Cookie 0", "Cookie 1", "Cookie 2", "Cookie 3", "Cookie 4"], &[])
            .unwrap();
        let before = team.composition_score();

        let mut stats = HashMap::new();
        stats.insert("Cookie 3".to_string(), Progression::new(70.0, 60.0, 5.0));
        assert_eq!(opt.update_cookie_stats(&stats), 1);

        assert_eq!(team.composition_score(), before);
        assert!(opt.get("Cookie 3").unwrap().is_advanced());
        assert!(!team.cookies()[3].is_advanced());
    }
}
