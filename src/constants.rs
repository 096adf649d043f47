//! Defaults and limits for games, bots and the statistics harness.

// =============================================================================
// Board Geometry
// =============================================================================

/// Default board side for interactive games. Standard Go sizes are 9, 13, or 19.
pub const DEFAULT_BOARD_SIZE: usize = 19;

/// Default board side for bot-vs-bot series (small enough for the smart bot).
pub const DEFAULT_BOT_BOARD_SIZE: usize = 6;

/// Smallest side length accepted by `GameState::new`.
pub const MIN_BOARD_SIZE: usize = 2;

// =============================================================================
// Players
// =============================================================================

/// Fewest players a game can have.
pub const MIN_PLAYERS: u32 = 2;

/// Player count used by the bot harness and the demo.
pub const DEFAULT_PLAYERS: u32 = 2;

// =============================================================================
// Harness
// =============================================================================

/// Number of games played by `bots` when `-n` is not given.
pub const DEFAULT_NUM_GAMES: usize = 20;

/// Ply cap for a bot game. Games still running at the cap are scored as they stand.
pub const MAX_GAME_MOVES: usize = 256;
