//! Michi-Go: a multi-player Go rules engine with simple bots.
//!
//! ## Usage
//!
//! - `michi-go` - Play a demo game
//! - `michi-go bots -n 50 -s 6 -1 smart -2 random` - Bot-vs-bot statistics
//! - `michi-go demo --seed 42` - Play one bot game and print the board
//!
//! Set `RUST_LOG=debug` to see captures, ko rejections and per-game results.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fastrand::Rng;

use michi_go::arena::{play_game, run_series};
use michi_go::constants::{DEFAULT_BOT_BOARD_SIZE, DEFAULT_NUM_GAMES};
use michi_go::game::KoRule;
use michi_go::strategy::Strategy;

/// Michi-Go: a multi-player Go rules engine
#[derive(Parser)]
#[command(name = "michi-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a series of bot-vs-bot games and report win percentages
    Bots {
        /// Number of games to play
        #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_GAMES)]
        num_games: usize,
        /// Board side length
        #[arg(short, long, default_value_t = DEFAULT_BOT_BOARD_SIZE)]
        size: usize,
        /// Strategy for player 1
        #[arg(short = '1', long, value_enum, default_value_t = Strategy::Random)]
        player1: Strategy,
        /// Strategy for player 2
        #[arg(short = '2', long, value_enum, default_value_t = Strategy::Random)]
        player2: Strategy,
        /// Enforce positional superko instead of simple ko
        #[arg(long)]
        superko: bool,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play one heuristic-vs-random game and print the final position
    Demo {
        /// Board side length
        #[arg(short, long, default_value_t = DEFAULT_BOT_BOARD_SIZE)]
        size: usize,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn ko_rule(superko: bool) -> KoRule {
    if superko {
        KoRule::Superko
    } else {
        KoRule::Simple
    }
}

fn rng(seed: Option<u64>) -> Rng {
    seed.map_or_else(Rng::new, Rng::with_seed)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Bots {
            num_games,
            size,
            player1,
            player2,
            superko,
            seed,
        }) => {
            let summary = run_series(
                size,
                ko_rule(superko),
                &[player1, player2],
                num_games,
                &mut rng(seed),
            )
            .context("bot series failed")?;
            println!("{summary}");
        }
        Some(Commands::Demo { size, seed }) => run_demo(size, seed)?,
        None => run_demo(DEFAULT_BOT_BOARD_SIZE, None)?,
    }
    Ok(())
}

fn run_demo(size: usize, seed: Option<u64>) -> Result<()> {
    println!("Michi-Go: heuristic (1) vs random (2) on {size}x{size}\n");

    let record = play_game(
        size,
        KoRule::Simple,
        &[Strategy::Heuristic, Strategy::Random],
        &mut rng(seed),
    )
    .context("demo game failed")?;

    println!("{}", record.game.board());
    println!("Moves played: {}", record.moves);
    for (player, score) in record.game.scores() {
        println!("Player {player}: {score}");
    }
    match record.winners.as_slice() {
        [winner] => println!("Winner: player {winner}"),
        tied => println!("Tie between players {tied:?}"),
    }
    Ok(())
}
