//! Find the best teams for a roster
//!
//! Usage:
//!   find_teams --data-dir data --strategy genetic --top 5 --require "Sea Fairy Cookie"

use anyhow::{Context, Result};
use clap::Parser;
use cookie_team_optimizer::progression::load_progression;
use cookie_team_optimizer::{
    export_teams, ExplanationGenerator, ExportFormat, GameData, MarkdownFormatter, OptimizerConfig,
    SearchParams, Strategy,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Cookie Run: Kingdom team optimizer
#[derive(Parser)]
#[command(name = "find_teams")]
#[command(about = "Search a cookie roster for the best 5-cookie teams", long_about = None)]
struct Args {
    /// Directory holding crk_cookies.csv and the optional side files (default: $CRK_DATA_DIR or .)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// random, greedy, genetic, synergy or exhaustive
    #[arg(long, default_value = "random")]
    strategy: String,

    /// Candidates for random/synergy, generations for genetic
    #[arg(long, default_value_t = 1000)]
    generate: usize,

    /// Number of teams to show
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Comma-separated cookie names every team must contain
    #[arg(long, value_delimiter = ',')]
    require: Vec<String>,

    /// RNG seed (default: $CRK_SEED, otherwise entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Optimizer config JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Progression stats JSON (name -> levels)
    #[arg(long)]
    stats: Option<PathBuf>,

    /// Run exhaustive search even above the configured limit
    #[arg(long)]
    confirm_large: bool,

    /// Print a full explanation for each team
    #[arg(long)]
    explain: bool,

    /// Write results to this file
    #[arg(long)]
    export: Option<PathBuf>,

    /// json or csv
    #[arg(long, default_value = "json")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cookie_team_optimizer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let strategy: Strategy = args.strategy.parse()?;
    let format: ExportFormat = args.format.parse()?;

    let data_dir = args
        .data_dir
        .or_else(|| std::env::var("CRK_DATA_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let seed = match args.seed {
        Some(seed) => Some(seed),
        None => std::env::var("CRK_SEED")
            .ok()
            .map(|s| s.parse::<u64>())
            .transpose()
            .context("CRK_SEED must be an unsigned integer")?,
    };

    let mut config = match &args.config {
        Some(path) => OptimizerConfig::load(path)?,
        None => OptimizerConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }

    let load_start = Instant::now();
    let data = GameData::load(&data_dir)?;
    let mut optimizer = data.into_optimizer(config)?;
    println!(
        "Loaded {} cookies and {} treasures in {:.2?}",
        optimizer.cookies().len(),
        optimizer.treasures().len(),
        load_start.elapsed()
    );

    if let Some(path) = &args.stats {
        let stats = load_progression(path)?;
        optimizer.update_cookie_stats(&stats);
    }

    let mut params = SearchParams::from_config(optimizer.config()).with_candidates(args.generate);
    if strategy == Strategy::Genetic {
        params.generations = args.generate;
    }
    if args.confirm_large {
        params = params.confirm_large();
    }

    if !args.require.is_empty() {
        println!("Required cookies: {}", args.require.join(", "));
    }

    let teams = optimizer.find_best_teams(args.top, strategy, &params, &args.require)?;
    if teams.is_empty() {
        println!("No teams generated.");
        return Ok(());
    }

    println!("\nTop {} teams ({} strategy):", teams.len(), strategy);
    for (i, team) in teams.iter().enumerate() {
        if args.explain {
            let explanation = ExplanationGenerator::generate(team, optimizer.treasures());
            println!("\n--- Team #{} ---\n{}", i + 1, MarkdownFormatter::format(&explanation));
        } else {
            println!(
                "{:>3}. {:>6.2}  {}",
                i + 1,
                team.composition_score(),
                team.names().join(", ")
            );
        }
    }

    if let Some(path) = &args.export {
        export_teams(&teams, path, format)?;
        println!("\nExported {} teams to {:?}", teams.len(), path);
    }
    Ok(())
}
