//! Team construction and search benchmarks
//!
//! Run with: cargo bench --bench team_scoring

use cookie_team_optimizer::{
    Cookie, OptimizerConfig, Position, Rarity, Role, SearchParams, Strategy, SynergyEngine, Team,
    TeamOptimizer,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

fn roster(n: usize) -> Vec<Cookie> {
    let rarities = [Rarity::Beast, Rarity::Ancient, Rarity::Legendary, Rarity::Epic, Rarity::Rare];
    let elements = ["Fire", "Water", "Light", "Darkness", "Wind"];
    (0..n)
        .map(|i| {
            Cookie::new(
                format!("Cookie {}", i),
                rarities[i % rarities.len()],
                Role::KNOWN[i % Role::KNOWN.len()],
                Position::ALL[i % 3],
            )
            .with_element(elements[i % elements.len()])
            .with_groups(&[format!("Group {}", i % 4)])
        })
        .collect()
}

fn bench_team_construction(c: &mut Criterion) {
    let engine = SynergyEngine::default();
    let cookies: Vec<Arc<Cookie>> = roster(5).into_iter().map(Arc::new).collect();

    c.bench_function("team_construction", |b| {
        b.iter(|| Team::from_cookies(black_box(cookies.clone()), &engine))
    });
}

fn bench_genetic_search(c: &mut Criterion) {
    let config = OptimizerConfig {
        population_size: 30,
        generations: 20,
        ..OptimizerConfig::default()
    };
    let mut optimizer = TeamOptimizer::new(roster(40), Vec::new(), config.with_seed(42))
        .expect("valid benchmark config");
    let params = SearchParams::from_config(optimizer.config());

    c.bench_function("genetic_search_40", |b| {
        b.iter(|| {
            optimizer.reseed(42);
            optimizer.find_best_teams(10, Strategy::Genetic, &params, &[] as &[&str])
        })
    });
}

criterion_group!(benches, bench_team_construction, bench_genetic_search);
criterion_main!(benches);
