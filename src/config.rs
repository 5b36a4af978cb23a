//! Optimizer configuration
//!
//! Search budgets, genetic parameters and the exhaustive safety cap.
//! Loaded from JSON (all fields optional) or built from `Default`.

use crate::error::{Result as TeamResult, TeamError};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Candidate count for random and synergy strategies
    pub candidates: usize,
    /// Greedy generates `count * greedy_multiplier` candidates
    pub greedy_multiplier: usize,
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    /// Elites kept per generation: max(2, ceil(population / divisor))
    pub elite_fraction_divisor: usize,
    /// Size of the top-power pool used for the first greedy pick
    pub greedy_top_pick: usize,
    /// Hard cap on exhaustive combinations without confirmation
    pub exhaustive_limit: u128,
    /// Bounded retry budget multiplier for generation loops
    pub retry_factor: usize,
    pub include_synergy: bool,
    pub seed: Option<u64>,
    /// Build exhaustive candidates with rayon
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            candidates: 1000,
            greedy_multiplier: 10,
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            elite_fraction_divisor: 5,
            greedy_top_pick: 10,
            exhaustive_limit: 1_000_000,
            retry_factor: 10,
            include_synergy: true,
            seed: None,
            parallel: true,
        }
    }
}

impl OptimizerConfig {
    /// Load configuration from a JSON file, filling missing fields with defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read optimizer config: {:?}", path))?;

        let config: OptimizerConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse optimizer config JSON")?;

        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> TeamResult<()> {
        if self.population_size < 2 {
            return Err(TeamError::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TeamError::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.elite_fraction_divisor == 0 {
            return Err(TeamError::InvalidConfig(
                "elite_fraction_divisor must be positive".to_string(),
            ));
        }
        if self.greedy_top_pick == 0 || self.retry_factor == 0 {
            return Err(TeamError::InvalidConfig(
                "greedy_top_pick and retry_factor must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of elites retained per genetic generation
    pub fn elite_count(&self) -> usize {
        self.elites_for(self.population_size)
    }

    /// Elites for an explicit population size
    pub fn elites_for(&self, population: usize) -> usize {
        let divisor = self.elite_fraction_divisor.max(1);
        population.div_ceil(divisor).max(2).min(population)
    }
}
