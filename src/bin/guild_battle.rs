//! Guild battle team builder
//!
//! Usage:
//!   guild_battle --boss "Red Velvet Dragon" --top 5
//!   guild_battle --list

use anyhow::{Context, Result};
use clap::Parser;
use cookie_team_optimizer::guild_battle::{boss, boss_names};
use cookie_team_optimizer::{GameData, JsonFormatter, MarkdownFormatter, OptimizerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Boss-aware team generation
#[derive(Parser)]
#[command(name = "guild_battle")]
#[command(about = "Generate teams tuned for a guild battle boss", long_about = None)]
struct Args {
    /// Boss name (case-insensitive)
    #[arg(long, required_unless_present = "list")]
    boss: Option<String>,

    /// List the known bosses and exit
    #[arg(long)]
    list: bool,

    /// Directory holding crk_cookies.csv (default: $CRK_DATA_DIR or .)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Comma-separated cookie names every team must contain
    #[arg(long, value_delimiter = ',')]
    require: Vec<String>,

    /// RNG seed (default: $CRK_SEED, otherwise entropy)
    #[arg(long)]
    seed: Option<u64>,

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
    if args.list {
        for name in boss_names() {
            println!("{}", name);
        }
        return Ok(());
    }
    let boss_name = args.boss.context("--boss is required")?;
    let profile = boss(&boss_name)?;

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
    let teams = optimizer.generate_boss_teams(profile.name, &args.require, args.top)?;

    if args.json {
        println!("{}", JsonFormatter::format(&teams)?);
    } else {
        println!("{}", MarkdownFormatter::format_boss_teams(profile, &teams));
    }
    Ok(())
}
