//! Synergy-focused strategy
//!
//! Roughly a third of the candidates are built around special combos, a
//! third around synergy groups and a third around element clusters. The
//! rest come from weighted picks favouring cookies with more group and
//! combo tags (weight 1 + 2 × groups + 3 × combos).

use crate::model::{Cookie, Team, TeamOptions, TeamSignature, TEAM_SIZE};
use crate::search::pool::{assemble, SearchPool};
use crate::synergy::SynergyEngine;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Seed members taken from a combo, group or element
const CLUSTER_SIZE: usize = 3;

struct Builder<'a> {
    pool: &'a SearchPool,
    options: TeamOptions,
    engine: &'a SynergyEngine,
    used: FxHashSet<TeamSignature>,
    teams: Vec<Team>,
}

impl<'a> Builder<'a> {
    /// Required members + `seed` (minus duplicates) + random fill
    fn try_build(&mut self, seed: &[&Arc<Cookie>], rng: &mut ChaCha8Rng) {
        let mut cookies = self.pool.required.clone();
        for cookie in seed {
            if !cookies.iter().any(|c| c.name == cookie.name) {
                cookies.push(Arc::clone(cookie));
            }
        }

        if cookies.len() < TEAM_SIZE {
            let open = TEAM_SIZE - cookies.len();
            let outside: Vec<&Arc<Cookie>> = self
                .pool
                .available
                .iter()
                .filter(|c| !cookies.iter().any(|t| t.name == c.name))
                .collect();
            if outside.len() < open {
                return;
            }
            let fill: Vec<Arc<Cookie>> = outside.choose_multiple(rng, open).map(|c| Arc::clone(*c)).collect();
            cookies.extend(fill);
        }

        self.push(cookies);
    }

    fn push(&mut self, cookies: Vec<Arc<Cookie>>) {
        if cookies.len() != TEAM_SIZE {
            return;
        }
        let signature = TeamSignature::from_cookies(&cookies);
        if self.used.contains(&signature) {
            return;
        }
        if let Some(team) = assemble(cookies, self.options, self.engine) {
            self.used.insert(signature);
            self.teams.push(team);
        }
    }

    /// Seed `CLUSTER_SIZE` members drawn from `members`, until `target` teams exist
    fn build_around(&mut self, members: &[&Arc<Cookie>], target: usize, max_attempts: usize, rng: &mut ChaCha8Rng) {
        let mut attempts = 0;
        while self.teams.len() < target && attempts < max_attempts {
            attempts += 1;
            let candidates: Vec<&Arc<Cookie>> = members
                .iter()
                .copied()
                .filter(|c| !self.pool.is_required(&c.name))
                .collect();
            let take = CLUSTER_SIZE.min(candidates.len());
            let seed: Vec<&Arc<Cookie>> = candidates.choose_multiple(rng, take).copied().collect();
            self.try_build(&seed, rng);
        }
    }
}

fn weight(cookie: &Cookie) -> usize {
    1 + cookie.synergy_groups.len() * 2 + cookie.special_combos.len() * 3
}

pub fn generate_synergy_teams(
    pool: &SearchPool,
    n: usize,
    retry_factor: usize,
    options: TeamOptions,
    engine: &SynergyEngine,
    rng: &mut ChaCha8Rng,
) -> Vec<Team> {
    let mut builder = Builder {
        pool,
        options,
        engine,
        used: FxHashSet::default(),
        teams: Vec::with_capacity(n),
    };
    let third = n / 3;
    let all: Vec<&Arc<Cookie>> = pool.all().collect();

    // 1. Special combos
    for combo in engine.combos() {
        let members: Vec<&Arc<Cookie>> = combo
            .members()
            .filter_map(|name| all.iter().copied().find(|c| c.name == name))
            .collect();
        if members.is_empty() {
            continue;
        }
        builder.build_around(&members, third, third * 3, rng);
    }

    // 2. Synergy groups with at least two members; BTreeSet keeps runs reproducible
    let groups: BTreeSet<&str> = all
        .iter()
        .flat_map(|c| c.synergy_groups.iter().map(String::as_str))
        .collect();
    let target = builder.teams.len() + third;
    for group in groups {
        let members: Vec<&Arc<Cookie>> = all
            .iter()
            .copied()
            .filter(|c| c.synergy_groups.iter().any(|g| g == group))
            .collect();
        if members.len() < 2 {
            continue;
        }
        builder.build_around(&members, target, third * 2, rng);
    }

    // 3. Element clusters of three or more
    let elements: BTreeSet<&str> = all.iter().filter_map(|c| c.element.as_deref()).collect();
    let target = builder.teams.len() + third;
    for element in elements {
        let members: Vec<&Arc<Cookie>> = all
            .iter()
            .copied()
            .filter(|c| c.element.as_deref() == Some(element))
            .collect();
        if members.len() < CLUSTER_SIZE {
            continue;
        }
        builder.build_around(&members, target, third * 2, rng);
    }

    // 4. Weighted fill
    let slots = pool.slots();
    let mut attempts = 0;
    let max_attempts = n * retry_factor;
    while builder.teams.len() < n && attempts < max_attempts && pool.available.len() >= slots {
        attempts += 1;
        let picked: Vec<Arc<Cookie>> = match pool.available.choose_multiple_weighted(rng, slots, |c| weight(c) as f64) {
            Ok(iter) => iter.cloned().collect(),
            Err(_) => break,
        };
        builder.push(pool.with_required(picked));
    }

    builder.teams
}
