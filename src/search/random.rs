//! Random sampling strategy
//!
//! Every candidate is the required members plus a uniform sample of the
//! open slots from the rest of the pool.

use crate::model::{Cookie, Team, TeamOptions};
use crate::search::pool::{assemble, SearchPool};
use crate::synergy::SynergyEngine;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

/// Required members plus `slots` distinct random picks
pub fn random_cookies(pool: &SearchPool, rng: &mut ChaCha8Rng) -> Vec<Arc<Cookie>> {
    pool.with_required(pool.available.choose_multiple(rng, pool.slots()).cloned())
}

/// `n` random teams; caller has checked the pool can fill every slot
pub fn generate_random_teams(
    pool: &SearchPool,
    n: usize,
    options: TeamOptions,
    engine: &SynergyEngine,
    rng: &mut ChaCha8Rng,
) -> Vec<Team> {
    (0..n)
        .filter_map(|_| assemble(random_cookies(pool, rng), options, engine))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role};
    use rand::SeedableRng;

    fn pool() -> Vec<Arc<Cookie>> {
        (0..12)
            .map(|i| Arc::new(Cookie::new(format!("Cookie {}", i), Rarity::Epic, Role::Magic, Position::Middle)))
            .collect()
    }

    #[test]
    fn test_random_keeps_required() {
        let cookies = pool();
        let resolved = SearchPool::resolve(&cookies, &["Cookie 7", "Cookie 2"]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let teams = generate_random_teams(&resolved, 20, TeamOptions::default(), &SynergyEngine::default(), &mut rng);

        assert_eq!(teams.len(), 20);
        for team in &teams {
            assert!(team.contains("Cookie 7"));
            assert!(team.contains("Cookie 2"));
        }
    }

    #[test]
    fn test_same_seed_same_teams() {
        let cookies = pool();
        let resolved = SearchPool::resolve::<&str>(&cookies, &[]).unwrap();
        let engine = SynergyEngine::default();

        let run = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_random_teams(&resolved, 5, TeamOptions::default(), &engine, &mut rng)
                .into_iter()
                .map(|t| t.signature().clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}
