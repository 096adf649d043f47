//! Michi-Go: a rules engine for Go with any number of players.
//!
//! The engine validates moves under simple ko or positional superko,
//! resolves captures by group liberty analysis, scores stones plus
//! territory, and lets bots explore hypothetical moves without touching the
//! live game.
//!
//! ## Modules
//!
//! - [`board`] - Square grid storage with 1-indexed access
//! - [`game`] - The rules engine (`GameState`)
//! - [`scoring`] - Territory regions and area scores
//! - [`strategy`] - Random, smart and heuristic bots
//! - [`arena`] - Bot-vs-bot games and statistics
//! - [`constants`] - Defaults and limits
//! - [`error`] - The crate error type
//!
//! ## Example
//!
//! ```
//! use michi_go::game::{GameState, KoRule};
//!
//! let mut game = GameState::new(9, 2, KoRule::Simple)?;
//! game.apply_move((3, 3))?;
//! assert_eq!(game.piece_at((3, 3))?, Some(1));
//! assert_eq!(game.turn(), 2);
//!
//! // Look ahead without changing the game
//! let next = game.simulate_move(Some((3, 4)))?;
//! assert_eq!(next.piece_at((3, 4))?, Some(2));
//! assert_eq!(game.piece_at((3, 4))?, None);
//!
//! game.pass_turn();
//! game.pass_turn();
//! assert!(game.done());
//! assert_eq!(game.outcome(), vec![1]);
//! # Ok::<(), michi_go::error::GameError>(())
//! ```

pub mod arena;
pub mod board;
pub mod constants;
pub mod error;
pub mod game;
pub mod scoring;
pub mod strategy;
