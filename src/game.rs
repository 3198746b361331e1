use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};
use crate::player::{Player, PlayerId};
use crate::types::{GameResult, GameState, GameStatus, MoveOutcome, Position};
use crate::win::{self, Run};

/// One game session: the board, both players and whose turn it is.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    status: GameStatus,
    move_count: usize,
    last_move: Option<Position>,
    winning_run: Option<Run>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let GameConfig {
            width,
            height,
            player1,
            player2,
        } = config;

        Ok(Self {
            board: Board::new(width, height),
            players: [player1, player2],
            status: GameStatus::AwaitingMove(PlayerId::One),
            move_count: 0,
            last_move: None,
            winning_run: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::AwaitingMove(player) => Some(player),
            GameStatus::Won(_) | GameStatus::Tied => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_run(&self) -> Option<&Run> {
        self.winning_run.as_ref()
    }

    /// Drops the current player's piece into `column`.
    ///
    /// A full column is a no-op reported as `MoveOutcome::ColumnFull`; the
    /// turn does not pass. After the piece lands the mover is checked for a
    /// win first, then the board for a tie.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        let GameStatus::AwaitingMove(player) = self.status else {
            return Err(MoveError::GameOver);
        };

        let width = self.board.width();
        if column >= width {
            return Err(MoveError::ColumnOutOfRange { column, width });
        }

        let Some(row) = self.board.drop_target(column) else {
            return Ok(MoveOutcome::ColumnFull { column });
        };

        self.board.place(row, column, player)?;
        let position = Position::new(row, column);
        self.move_count += 1;
        self.last_move = Some(position);
        debug!(
            "move {}: player {} dropped into column {column}, landed on row {row}",
            self.move_count,
            player.code()
        );

        if let Some(run) = win::find_winning_run(&self.board, player) {
            info!(
                "{} won after {} moves",
                self.player(player).name,
                self.move_count
            );
            self.status = GameStatus::Won(player);
            self.winning_run = Some(run.clone());
            return Ok(MoveOutcome::Won {
                position,
                player,
                run,
            });
        }

        if self.board.is_full() {
            info!("game tied after {} moves", self.move_count);
            self.status = GameStatus::Tied;
            return Ok(MoveOutcome::Tied { position, player });
        }

        self.status = GameStatus::AwaitingMove(player.other());
        Ok(MoveOutcome::Placed { position, player })
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.to_array(),
            players: self.players.clone(),
            status: self.status,
            current_player: self.current_player(),
            is_game_over: self.is_over(),
            move_count: self.move_count,
            last_move: self.last_move,
        }
    }

    /// `None` while the game is still running.
    pub fn to_game_result(&self) -> Option<GameResult> {
        match self.status {
            GameStatus::AwaitingMove(_) => None,
            GameStatus::Won(player) => Some(GameResult {
                winner: player.code(),
                winner_name: Some(self.player(player).name.clone()),
                winning_run: self.winning_run.clone(),
                move_count: self.move_count,
            }),
            GameStatus::Tied => Some(GameResult {
                winner: 0,
                winner_name: None,
                winning_run: None,
                move_count: self.move_count,
            }),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: PlayerId) {
        self.board = board;
        self.status = GameStatus::AwaitingMove(current_player);
        self.last_move = None;
        self.winning_run = None;
    }
}
