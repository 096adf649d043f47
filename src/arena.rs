//! Bot-vs-bot games and win statistics.

use std::collections::BTreeMap;
use std::fmt;

use fastrand::Rng;
use log::{debug, info};

use crate::board::Player;
use crate::constants::MAX_GAME_MOVES;
use crate::error::GameError;
use crate::game::{GameState, KoRule};
use crate::scoring;
use crate::strategy::Strategy;

/// A finished (or capped) bot game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub game: GameState,
    /// Plies played, passes included
    pub moves: usize,
    /// `outcome()` if the game ended by passing, otherwise the current leaders
    pub winners: Vec<Player>,
}

/// Play one game with `strategies[i]` moving for player `i + 1`.
///
/// Stops when every player has passed in a row or after [`MAX_GAME_MOVES`] plies.
pub fn play_game(
    size: usize,
    ko_rule: KoRule,
    strategies: &[Strategy],
    rng: &mut Rng,
) -> Result<GameRecord, GameError> {
    let players = strategies.len() as Player;
    let mut game = GameState::new(size, players, ko_rule)?;
    let mut moves = 0;

    while !game.done() && moves < MAX_GAME_MOVES {
        let strategy = strategies[(game.turn() - 1) as usize];
        match strategy.choose(&game, rng) {
            Some(pos) => game.apply_move(pos)?,
            None => game.pass_turn(),
        }
        moves += 1;
    }

    let winners = if game.done() {
        game.outcome()
    } else {
        scoring::leaders(&game.scores())
    };
    Ok(GameRecord {
        game,
        moves,
        winners,
    })
}

/// Aggregated results of a series of games.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub games: usize,
    /// Outright wins per player (every player present, possibly with 0)
    pub wins: BTreeMap<Player, usize>,
    /// Games where more than one player shared the top score
    pub ties: usize,
    pub total_moves: usize,
}

impl Summary {
    fn percent(&self, count: usize) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        count as f64 / self.games as f64 * 100.0
    }

    pub fn win_percent(&self, player: Player) -> f64 {
        self.percent(self.wins.get(&player).copied().unwrap_or(0))
    }

    pub fn tie_percent(&self) -> f64 {
        self.percent(self.ties)
    }

    pub fn average_moves(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.games as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &player in self.wins.keys() {
            writeln!(f, "Player {player} wins: {:.2}%", self.win_percent(player))?;
        }
        writeln!(f, "Ties: {:.2}%", self.tie_percent())?;
        write!(f, "Average moves: {:.1}", self.average_moves())
    }
}

/// Play `games` games and tally the results.
pub fn run_series(
    size: usize,
    ko_rule: KoRule,
    strategies: &[Strategy],
    games: usize,
    rng: &mut Rng,
) -> Result<Summary, GameError> {
    info!("playing {games} games on {size}x{size}: {strategies:?}");
    let mut summary = Summary {
        wins: (1..=strategies.len() as Player).map(|p| (p, 0)).collect(),
        ..Summary::default()
    };

    for i in 0..games {
        let record = play_game(size, ko_rule, strategies, rng)?;
        debug!(
            "game {}: winners {:?} after {} moves",
            i + 1,
            record.winners,
            record.moves
        );
        summary.games += 1;
        summary.total_moves += record.moves;
        match record.winners.as_slice() {
            [winner] => *summary.wins.entry(*winner).or_insert(0) += 1,
            _ => summary.ties += 1,
        }
    }
    Ok(summary)
}
