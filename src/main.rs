//! Gomoku-Rollout: a five-in-a-row engine.
//!
//! ## Usage
//!
//! - `gomoku-rollout` - Show a computer vs computer demo game
//! - `gomoku-rollout console` - Start the text command loop (see `console` module)
//! - `gomoku-rollout demo --black hard --white easy` - Self-play with chosen levels

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fastrand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku_rollout::board::str_coord;
use gomoku_rollout::console::Console;
use gomoku_rollout::constants::DEFAULT_SIZE;
use gomoku_rollout::{Difficulty, EngineState, GameMode, Player};

/// Gomoku-Rollout: five-in-a-row with a rollout-based computer player
#[derive(Parser)]
#[command(name = "gomoku-rollout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board side length
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Seed for the computer's rollouts (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and answer on stdout
    Console {
        /// Who plays
        #[arg(long, value_enum, default_value_t = ModeArg::Hvc)]
        mode: ModeArg,
        /// Colour played by the computer in hvc mode (x moves first)
        #[arg(long, default_value = "o")]
        computer: Player,
        /// Computer strength
        #[arg(long, default_value = "normal")]
        difficulty: Difficulty,
    },
    /// Let the computer play both sides
    Demo {
        /// Strength of Black (X)
        #[arg(long, default_value = "normal")]
        black: Difficulty,
        /// Strength of White (O)
        #[arg(long, default_value = "normal")]
        white: Difficulty,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum ModeArg {
    /// Human vs human
    Hvh,
    /// Human vs computer
    Hvc,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rng = match cli.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    };

    match cli.command {
        Some(Commands::Console {
            mode,
            computer,
            difficulty,
        }) => {
            let mode = match mode {
                ModeArg::Hvh => GameMode::HumanVsHuman,
                ModeArg::Hvc => GameMode::HumanVsComputer { computer },
            };
            let mut console = Console::new(cli.size, mode, difficulty, rng)
                .context("failed to start a game")?;
            console
                .run(io::stdin().lock(), io::stdout().lock())
                .context("console I/O failed")?;
        }
        Some(Commands::Demo { black, white }) => run_demo(cli.size, black, white, rng)?,
        None => run_demo(cli.size, Difficulty::Normal, Difficulty::Normal, rng)?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo(size: usize, black: Difficulty, white: Difficulty, mut rng: Rng) -> Result<()> {
    println!("Gomoku-Rollout: {black} (X) vs {white} (O) on {size}x{size}\n");

    let mut state =
        EngineState::new_game(size, GameMode::HumanVsHuman).context("failed to start a game")?;

    while !state.is_over() {
        let level = match state.turn() {
            Player::Black => black,
            Player::White => white,
        };
        let Some(index) = state.compute_ai_move(level, &mut rng) else {
            info!("no move left");
            break;
        };
        print!("{}:{} ", state.turn(), str_coord(index, size));
        state = state
            .apply_move(index)
            .with_context(|| format!("engine chose an illegal move {index}"))?;
    }

    println!("\n\n{}", state.board());
    match state.winner() {
        Some(p) => println!("{p} wins after {} moves", state.move_count()),
        None => println!("Draw after {} moves", state.move_count()),
    }
    Ok(())
}
