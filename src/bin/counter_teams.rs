//! Build counter teams against an enemy lineup
//!
//! Usage:
//!   counter_teams --enemy "Pure Vanilla Cookie,Cream Ferret Cookie,Hollyberry Cookie,Frost Queen Cookie,Parfait Cookie"

use anyhow::{Context, Result};
use clap::Parser;
use cookie_team_optimizer::{
    CounterTeamGenerator, GameData, JsonFormatter, MarkdownFormatter, OptimizerConfig, SearchParams,
    Strategy,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Counter-team generator
#[derive(Parser)]
#[command(name = "counter_teams")]
#[command(about = "Analyse an enemy team and search for teams that exploit its weaknesses", long_about = None)]
struct Args {
    /// Comma-separated names of the five enemy cookies
    #[arg(long, value_delimiter = ',', required = true)]
    enemy: Vec<String>,

    /// Directory holding crk_cookies.csv (default: $CRK_DATA_DIR or .)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, default_value = "greedy")]
    strategy: String,

    /// Number of counter teams to return
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Comma-separated cookie names every counter team must contain
    #[arg(long, value_delimiter = ',')]
    require: Vec<String>,

    /// RNG seed (default: $CRK_SEED, otherwise entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Print reports as JSON instead of Markdown
    #[arg(long)]
    json: bool,
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

    let config = OptimizerConfig {
        seed,
        ..OptimizerConfig::default()
    };
    let mut optimizer = GameData::load(&data_dir)?.into_optimizer(config)?;
    let enemy = optimizer
        .team_from_names(&args.enemy, &[])
        .context("Enemy team must be five distinct known cookies")?;
    let params = SearchParams::from_config(optimizer.config());

    let mut generator = CounterTeamGenerator::new(&mut optimizer);
    let plan = generator.plan(&enemy);
    let teams = generator.find_counter_teams(&enemy, args.top, strategy, &params, &args.require)?;

    if args.json {
        let reports: Vec<_> = teams
            .iter()
            .map(|(team, report)| (team.names(), report))
            .collect();
        println!("{}", JsonFormatter::format(&reports)?);
        return Ok(());
    }

    println!("Enemy team: {}\n", enemy.names().join(", "));
    if teams.is_empty() {
        println!("No counter teams generated.");
        return Ok(());
    }
    for (i, (team, report)) in teams.iter().enumerate() {
        println!(
            "=== Counter Team #{} (counter {:.1}/100, combined {:.1}) ===\n",
            i + 1,
            report.counter_score,
            report.combined_score
        );
        println!("{}", MarkdownFormatter::format_counter(&plan, team, Some(report)));
    }
    Ok(())
}
