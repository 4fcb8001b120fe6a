//! Hex-Rollout: play Hex against a Monte Carlo opponent.
//!
//! ## Usage
//!
//! - `hex-rollout` - Play an 11x11 game against the computer
//! - `hex-rollout play --size 7 --sims 500` - Smaller, faster game
//! - `hex-rollout demo` - Watch the computer play itself

use std::io;
use std::path::{Path, PathBuf};

use clap::builder::TypedValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use hex_rollout::board::Color;
use hex_rollout::console::Console;
use hex_rollout::constants::{DEFAULT_SIZE, DEMO_SEED, DEMO_SIMS, DEMO_SIZE, MAX_SIZE, N_SIMS};
use hex_rollout::game::{str_point, Game};
use hex_rollout::rollout::MoveEvaluator;

/// Hex-Rollout: Hex against a flat Monte Carlo opponent
#[derive(Parser)]
#[command(name = "hex-rollout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer on the terminal
    Play {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_SIZE, value_parser = clap::value_parser!(u64).range(1..=MAX_SIZE as u64).map(|v| v as usize))]
        size: usize,
        /// Rollouts per candidate move
        #[arg(long, default_value_t = N_SIMS, value_parser = clap::value_parser!(u64).range(1..).map(|v| v as usize))]
        sims: usize,
        /// Seed for the rollout shuffles (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Let the computer move first
        #[arg(long)]
        ai_first: bool,
    },
    /// Let the computer play a short game against itself
    Demo,
}

#[derive(Copy, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.into(), cli.log_file.as_deref())?;

    match cli.command {
        Some(Commands::Play {
            size,
            sims,
            seed,
            ai_first,
        }) => {
            let rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let mut console = Console::new(size, MoveEvaluator::with_simulations(sims), rng);
            console.run(ai_first)
        }
        Some(Commands::Demo) => run_demo(),
        None => {
            let mut console = Console::new(DEFAULT_SIZE, MoveEvaluator::new(), fastrand::Rng::new());
            console.run(false)
        }
    }
}

fn setup_logging(level: LevelFilter, log_file: Option<&Path>) -> anyhow::Result<()> {
    let log_dispatcher = fern::Dispatch::new().format(|out, message, record| {
        out.finish(format_args!(
            "{}[{}][{}] {}",
            chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
            record.target(),
            record.level(),
            message
        ))
    });

    let log_dispatcher = match log_file {
        Some(path) => log_dispatcher
            .chain(
                fern::Dispatch::new()
                    .level(LevelFilter::Debug)
                    .chain(fern::log_file(path)?),
            )
            .chain(fern::Dispatch::new().level(level).chain(io::stderr())),
        None => log_dispatcher.level(level).chain(io::stderr()),
    };
    log_dispatcher
        .apply()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    Ok(())
}

fn run_demo() -> anyhow::Result<()> {
    println!("Hex-Rollout: computer vs computer on {DEMO_SIZE}x{DEMO_SIZE}\n");

    let mut game = Game::new(DEMO_SIZE);
    let evaluator = MoveEvaluator::with_simulations(DEMO_SIMS);
    let mut rng = fastrand::Rng::with_seed(DEMO_SEED);
    let mut color = Color::Blue;

    while game.winner().is_none() && game.empty_count() > 0 {
        let index = evaluator.choose_move(&mut game, color, &mut rng)?;
        println!("{color} plays {}", str_point(game.board().point(index)));
        color = color.opponent();
    }

    println!("\n{}", game.board());
    match game.winner() {
        Some(winner) => println!("{winner} wins"),
        None => println!("Draw"),
    }
    Ok(())
}
