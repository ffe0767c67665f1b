//! Self-play runner: the minimax engine against the random engine.
//!
//! Run with:
//! `cargo run --release -- --level 3 --games 4`
//! `cargo run --release -- --seed 7 --max-plies 120 --verbose`

use chrono::Local;
use log::info;

use draughts101::engines::engine_minimax::MinimaxEngine;
use draughts101::engines::engine_random::RandomEngine;
use draughts101::engines::engine_trait::Engine;
use draughts101::search::minimax::SearchConfig;
use draughts101::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

struct Args {
    level: u8,
    games: u16,
    max_plies: u16,
    seed: u64,
    verbose: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        level: SearchConfig::default().level,
        games: MatchSeriesConfig::default().games,
        max_plies: MatchConfig::default().max_plies,
        seed: 0,
        verbose: false,
    };

    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        match flag.as_str() {
            "--level" => args.level = parse_value(&flag, it.next())?,
            "--games" => args.games = parse_value(&flag, it.next())?,
            "--max-plies" => args.max_plies = parse_value(&flag, it.next())?,
            "--seed" => args.seed = parse_value(&flag, it.next())?,
            "--verbose" | "-v" => args.verbose = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {flag}: {value}"))
}

fn main() -> Result<(), String> {
    let args = parse_args()?;

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = SearchConfig::new(args.level);
    let seed = args.seed;
    info!(
        "self-play level={} games={} max_plies={} seed={}",
        config.level, args.games, args.max_plies, seed
    );

    let started = Local::now();
    let stats = play_engine_match_series(
        move || Box::new(MinimaxEngine::with_seed(config, seed)) as Box<dyn Engine>,
        move || Box::new(RandomEngine::with_seed(seed ^ 0x5eed)) as Box<dyn Engine>,
        &MatchSeriesConfig {
            games: args.games,
            base_seed: seed,
            per_game: MatchConfig {
                max_plies: args.max_plies,
                ..MatchConfig::default()
            },
        },
    )?;
    let finished = Local::now();

    println!(
        "[{}] minimax L{} (player1) vs random (player2)",
        started.format("%Y-%m-%d %H:%M:%S"),
        config.level
    );
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    println!(
        "finished {} ({} ms)",
        finished.format("%Y-%m-%d %H:%M:%S"),
        (finished - started).num_milliseconds()
    );
    Ok(())
}
