//! Exhaustive strategy
//!
//! Enumerates every C(available, slots) completion of the required
//! members. Combination counts above the configured limit abort with
//! `ExhaustiveLimit` unless the caller confirmed the large run.

use crate::error::{Result, TeamError};
use crate::model::{Team, TeamOptions};
use crate::search::pool::{assemble, SearchPool};
use crate::synergy::SynergyEngine;
use crate::utils::combinatorics::{binomial, Combinations};
use rayon::prelude::*;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{info, warn};

/// Reject oversized runs before any team is built
pub fn check_limit(pool: &SearchPool, limit: u128, confirm_large: bool) -> Result<u128> {
    let combinations = binomial(pool.available.len(), pool.slots());
    if combinations > limit && !confirm_large {
        warn!(
            "Exhaustive search aborted: {} combinations exceeds limit {}",
            combinations, limit
        );
        return Err(TeamError::ExhaustiveLimit { combinations, limit });
    }
    Ok(combinations)
}

pub fn generate_exhaustive_teams(
    pool: &SearchPool,
    limit: u128,
    confirm_large: bool,
    parallel: bool,
    options: TeamOptions,
    engine: &SynergyEngine,
) -> Result<Vec<Team>> {
    let combinations = check_limit(pool, limit, confirm_large)?;
    info!("Generating {} team combinations", combinations);

    let build = |indices: &SmallVec<[usize; 5]>| {
        let picked = indices.iter().map(|&i| Arc::clone(&pool.available[i]));
        assemble(pool.with_required(picked), options, engine)
    };

    let teams: Vec<Team> = if parallel {
        let all: Vec<SmallVec<[usize; 5]>> = Combinations::new(pool.available.len(), pool.slots()).collect();
        all.par_iter().filter_map(build).collect()
    } else {
        Combinations::new(pool.available.len(), pool.slots())
            .filter_map(|indices| build(&indices))
            .collect()
    };

    info!("Generated {} valid teams", teams.len());
    Ok(teams)
}
