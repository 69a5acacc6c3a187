use anyhow::{Context, Result};
use clap::Parser;
use euchre::{Action, Game, MatchConfig, Seat};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Deals a seeded match, replays a recorded action log against it and prints
/// the resulting state.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed for the shuffles, so a log always replays against the same deals.
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// JSON list of `[seat, action]` pairs.
    #[arg(short, long)]
    actions: Option<PathBuf>,
    /// JSON match config; missing fields keep their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: MatchConfig = match &args.config {
        Some(path) => read_json(path)?,
        None => MatchConfig::default(),
    };
    let actions: Vec<(Seat, Action)> = match &args.actions {
        Some(path) => read_json(path)?,
        None => vec![],
    };

    let mut game = Game::with_config(StdRng::seed_from_u64(args.seed), config);
    game.register_phase_listener(|phase| info!(?phase, "phase changed"));
    game.start_game()?;

    for (index, (seat, action)) in actions.into_iter().enumerate() {
        game.act(seat, action.clone())
            .with_context(|| format!("action {index}: {seat:?} {action:?}"))?;
    }

    if let Some(winner) = game.winning_partnership() {
        info!(?winner, "match won");
    } else if let Ok(seat) = game.current_player() {
        info!(?seat, can_pass = game.can_pass(), "waiting on");
    }

    println!("{}", game.state());
    println!("{}", serde_json::to_string_pretty(game.state())?);
    Ok(())
}
