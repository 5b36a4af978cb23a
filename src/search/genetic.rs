//! Genetic strategy
//!
//! Generational search seeded by the random strategy. Each generation
//! keeps the top `elites` teams by composition score, then breeds children
//! from pairs of distinct elites until the population is refilled:
//!   - crossover samples the open slots from the parents' combined
//!     non-required members, topping up from the pool when they run short
//!   - mutation swaps one non-required member for a cookie not on the team
//! Children that fail validation are dropped and not counted.

use crate::model::{Cookie, Team, TeamOptions};
use crate::search::pool::{assemble, SearchPool};
use crate::search::random::generate_random_teams;
use crate::synergy::SynergyEngine;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct GeneticParams {
    pub population: usize,
    pub generations: usize,
    pub elites: usize,
    pub mutation_rate: f64,
    /// Breeding attempts allowed per generation, as a multiple of `population`
    pub retry_factor: usize,
}

fn names_of(cookies: &[Arc<Cookie>]) -> FxHashSet<&str> {
    cookies.iter().map(|c| c.name.as_str()).collect()
}

/// Child cookie list from two parents, required members first
pub fn crossover(pool: &SearchPool, a: &Team, b: &Team, rng: &mut ChaCha8Rng) -> Vec<Arc<Cookie>> {
    let slots = pool.slots();

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let parent_genes: Vec<&Arc<Cookie>> = a
        .cookies()
        .iter()
        .chain(b.cookies().iter())
        .filter(|c| !pool.is_required(&c.name) && seen.insert(c.name.as_str()))
        .collect();

    if parent_genes.len() >= slots {
        return pool.with_required(parent_genes.choose_multiple(rng, slots).map(|c| Arc::clone(*c)));
    }

    let mut selected: Vec<Arc<Cookie>> = parent_genes.into_iter().cloned().collect();
    let extras: Vec<&Arc<Cookie>> = {
        let taken = names_of(&selected);
        pool.available
            .iter()
            .filter(|c| !taken.contains(c.name.as_str()))
            .collect()
    };
    let remaining = slots - selected.len();
    let fill: Vec<Arc<Cookie>> = extras.choose_multiple(rng, remaining).map(|c| Arc::clone(*c)).collect();
    selected.extend(fill);
    pool.with_required(selected)
}

/// Replace one non-required member with a random cookie not on the team
pub fn mutate(pool: &SearchPool, cookies: &mut [Arc<Cookie>], rng: &mut ChaCha8Rng) {
    let mutable: Vec<usize> = cookies
        .iter()
        .enumerate()
        .filter(|(_, c)| !pool.is_required(&c.name))
        .map(|(i, _)| i)
        .collect();
    let Some(&slot) = mutable.choose(rng) else {
        return;
    };

    let replacement = {
        let on_team = names_of(cookies);
        let outside: Vec<&Arc<Cookie>> = pool
            .available
            .iter()
            .filter(|c| !on_team.contains(c.name.as_str()))
            .collect();
        match outside.choose(rng) {
            Some(c) => Arc::clone(*c),
            None => return,
        }
    };
    cookies[slot] = replacement;
}

fn sort_by_fitness(population: &mut [Team]) {
    population.sort_by(|a, b| b.composition_score().total_cmp(&a.composition_score()));
}

/// Run the search and return the whole final population
pub fn evolve(
    pool: &SearchPool,
    params: GeneticParams,
    options: TeamOptions,
    engine: &SynergyEngine,
    rng: &mut ChaCha8Rng,
) -> Vec<Team> {
    let size = params.population;
    let mut population = generate_random_teams(pool, size, options, engine, rng);

    for generation in 0..params.generations {
        sort_by_fitness(&mut population);

        let elite_count = params.elites.min(population.len());
        let elites: Vec<Team> = population[..elite_count].to_vec();
        let mut next: Vec<Team> = elites.clone();

        let budget = size * params.retry_factor;
        let mut attempts = 0;
        while next.len() < size && attempts < budget && elites.len() >= 2 {
            attempts += 1;

            let parents = index::sample(rng, elites.len(), 2);
            let (a, b) = (&elites[parents.index(0)], &elites[parents.index(1)]);

            let mut child = crossover(pool, a, b, rng);
            if rng.gen_bool(params.mutation_rate) {
                mutate(pool, &mut child, rng);
            }

            if let Some(team) = assemble(child, options, engine) {
                next.push(team);
            }
        }

        if next.len() < size {
            debug!(
                "Generation {}: breeding budget spent, topping up {} random teams",
                generation,
                size - next.len()
            );
            let missing = size - next.len();
            next.extend(generate_random_teams(pool, missing, options, engine, rng));
        }

        population = next;

        debug!(
            "Generation {}: best score {:.2}",
            generation,
            population
                .iter()
                .map(Team::composition_score)
                .fold(f64::NEG_INFINITY, f64::max)
        );
    }

    population
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Position, Rarity, Role, TeamSignature};
    use rand::SeedableRng;

    fn roster() -> Vec<Arc<Cookie>> {
        let rarities = [Rarity::Beast, Rarity::Ancient, Rarity::Legendary, Rarity::Epic, Rarity::Rare];
        (0..20)
            .map(|i| {
                Arc::new(Cookie::new(
                    format!("Cookie {}", i),
                    rarities[i % rarities.len()],
                    Role::KNOWN[i % 8],
                    Position::ALL[i % 3],
                ))
            })
            .collect()
    }

    fn params(generations: usize) -> GeneticParams {
        GeneticParams {
            population: 12,
            generations,
            elites: 3,
            mutation_rate: 0.1,
            retry_factor: 10,
        }
    }

    fn best(teams: &[Team]) -> f64 {
        teams.iter().map(Team::composition_score).fold(f64::NEG_INFINITY, f64::max)
    }

    #[test]
    fn test_population_size_is_constant() {
        let cookies = roster();
        let pool = SearchPool::resolve(&cookies, &["Cookie 4"]).unwrap();
        let engine = SynergyEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let population = evolve(&pool, params(8), TeamOptions::default(), &engine, &mut rng);
        assert_eq!(population.len(), 12);
        assert!(population.iter().all(|t| t.contains("Cookie 4")));
    }

    #[test]
    fn test_best_score_never_drops() {
        let cookies = roster();
        let pool = SearchPool::resolve::<&str>(&cookies, &[]).unwrap();
        let engine = SynergyEngine::default();

        let mut previous = f64::NEG_INFINITY;
        for generations in 0..6 {
            let mut rng = ChaCha8Rng::seed_from_u64(21);
            let score = best(&evolve(&pool, params(generations), TeamOptions::default(), &engine, &mut rng));
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_crossover_keeps_required_and_size() {
        let cookies = roster();
        let pool = SearchPool::resolve(&cookies, &["Cookie 0", "Cookie 1"]).unwrap();
        let engine = SynergyEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let a = Team::from_cookies(pool.with_required(pool.available[0..3].to_vec()), &engine).unwrap();
        let b = Team::from_cookies(pool.with_required(pool.available[3..6].to_vec()), &engine).unwrap();
        for _ in 0..20 {
            let mut child = crossover(&pool, &a, &b, &mut rng);
            mutate(&pool, &mut child, &mut rng);
            assert_eq!(child.len(), 5);
            assert_eq!(child[0].name, "Cookie 0");
            assert_eq!(child[1].name, "Cookie 1");
            assert!(Team::from_cookies(child, &engine).is_ok());
        }
    }

    #[test]
    fn test_identical_parents_reproduce() {
        let cookies = roster();
        let pool = SearchPool::resolve::<&str>(&cookies, &[]).unwrap();
        let engine = SynergyEngine::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let a = Team::from_cookies(pool.available[0..5].to_vec(), &engine).unwrap();
        let child = crossover(&pool, &a, &a, &mut rng);
        assert_eq!(TeamSignature::from_cookies(&child), *a.signature());
    }
}
