use serde::Serialize;

use crate::player::{Player, PlayerId};
use crate::win::Run;

/// A board coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    AwaitingMove(PlayerId),
    Won(PlayerId),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingMove(_))
    }
}

/// What a single `apply_move` call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The column had no empty cell; nothing changed.
    ColumnFull { column: usize },
    /// Piece placed and the turn passed to the other player.
    Placed { position: Position, player: PlayerId },
    Won {
        position: Position,
        player: PlayerId,
        run: Run,
    },
    Tied { position: Position, player: PlayerId },
}

impl MoveOutcome {
    /// Cell that received a piece, if any.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::ColumnFull { .. } => None,
            Self::Placed { position, .. }
            | Self::Won { position, .. }
            | Self::Tied { position, .. } => Some(*position),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    /// Row-major cell codes: 0=empty, 1=player one, 2=player two.
    pub board: Vec<u8>,
    pub players: [Player; 2],
    pub status: GameStatus,
    /// `None` once the game is over.
    pub current_player: Option<PlayerId>,
    pub is_game_over: bool,
    pub move_count: usize,
    pub last_move: Option<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Seat code of the winner, 0 for a tie.
    pub winner: u8,
    pub winner_name: Option<String>,
    pub winning_run: Option<Run>,
    pub move_count: usize,
}
