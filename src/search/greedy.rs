//! Randomised greedy strategy
//!
//! Biased toward high-power cookies: one slot is a uniform pick among
//! the top `greedy_top_pick` by power, the rest are a uniform sample from
//! the top half of the power ranking. Repeated independently per candidate.

use crate::model::{Cookie, Team, TeamOptions};
use crate::search::pool::{assemble, SearchPool};
use crate::synergy::SynergyEngine;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Available cookies by power, descending; ties keep pool order
pub fn by_power(cookies: &[Arc<Cookie>]) -> Vec<Arc<Cookie>> {
    let mut sorted = cookies.to_vec();
    sorted.sort_by(|a, b| b.power().total_cmp(&a.power()));
    sorted
}

pub fn generate_greedy_teams(
    pool: &SearchPool,
    n: usize,
    top_pick: usize,
    options: TeamOptions,
    engine: &SynergyEngine,
    rng: &mut ChaCha8Rng,
) -> Vec<Team> {
    let sorted = by_power(&pool.available);
    let slots = pool.slots();
    let top = &sorted[..top_pick.min(sorted.len())];
    // The top half must still hold the remaining slots
    let half = (sorted.len() / 2).max(slots.saturating_sub(1));

    let mut teams = Vec::with_capacity(n);
    for _ in 0..n {
        let mut picked: Vec<Arc<Cookie>> = Vec::with_capacity(slots);

        if slots > 0 {
            if let Some(first) = top.choose(rng) {
                picked.push(Arc::clone(first));
            }
            let rest: Vec<&Arc<Cookie>> = sorted
                .iter()
                .filter(|c| !picked.iter().any(|p| p.name == c.name))
                .take(half)
                .collect();
            let needed = (slots - 1).min(rest.len());
            picked.extend(rest.choose_multiple(rng, needed).map(|c| Arc::clone(*c)));
        }

        if picked.len() == slots {
            if let Some(team) = assemble(pool.with_required(picked), options, engine) {
                teams.push(team);
            }
        }
    }
    teams
}
