use log::{info, warn};

use crate::config::GameConfig;
use crate::error::SessionError;
use crate::game::Game;
use crate::types::{GameResult, GameState, GameStatus, MoveOutcome};

/// The page's current game. Starting a new game replaces the old one.
#[derive(Debug, Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    pub const fn new() -> Self {
        Self { game: None }
    }

    /// Starts a fresh game. A rejected config leaves the previous game in place.
    pub fn start(&mut self, config: GameConfig) -> Result<GameState, SessionError> {
        let game = Game::new(config).inspect_err(|err| warn!("refusing to start game: {err}"))?;
        info!(
            "starting {}x{} game: {} vs {}",
            game.board().width(),
            game.board().height(),
            game.players()[0].name,
            game.players()[1].name
        );

        let state = game.to_game_state();
        self.game = Some(game);
        Ok(state)
    }

    pub fn play(&mut self, column: usize) -> Result<MoveOutcome, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NoActiveGame)?;
        let outcome = game.apply_move(column)?;
        if let MoveOutcome::ColumnFull { column } = outcome {
            warn!("column {column} is full");
        }
        Ok(outcome)
    }

    pub fn state(&self) -> Result<GameState, SessionError> {
        Ok(self.active()?.to_game_state())
    }

    pub fn result(&self) -> Result<Option<GameResult>, SessionError> {
        Ok(self.active()?.to_game_result())
    }

    /// End-of-game announcement for the page, `None` while the game runs.
    pub fn announcement(&self) -> Option<String> {
        let game = self.game.as_ref()?;
        match game.status() {
            GameStatus::AwaitingMove(_) => None,
            GameStatus::Won(player) => Some(format!("{} won!", game.player(player).name)),
            GameStatus::Tied => Some("The game ended in a Tie!".to_string()),
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    fn active(&self) -> Result<&Game, SessionError> {
        self.game.as_ref().ok_or(SessionError::NoActiveGame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::player::{Player, PlayerId};

    #[test]
    fn operations_before_start_fail() {
        let mut session = Session::new();

        assert_eq!(session.play(0).unwrap_err(), SessionError::NoActiveGame);
        assert_eq!(session.state().unwrap_err(), SessionError::NoActiveGame);
        assert_eq!(session.result().unwrap_err(), SessionError::NoActiveGame);
        assert_eq!(session.announcement(), None);
    }

    #[test]
    fn start_then_play_reports_outcome() {
        let mut session = Session::new();
        let state = session.start(GameConfig::default()).unwrap();
        assert_eq!(state.current_player, Some(PlayerId::One));

        let outcome = session.play(2).unwrap();

        assert!(matches!(outcome, MoveOutcome::Placed { .. }));
        assert_eq!(session.state().unwrap().move_count, 1);
        assert_eq!(session.result().unwrap(), None);
        assert_eq!(session.announcement(), None);
    }

    #[test]
    fn winner_is_announced_by_name() {
        let mut session = Session::new();
        let config = GameConfig::new(Player::new("#ff0000", "Ada"), Player::new("#0000ff", "Bob"));
        session.start(config).unwrap();

        for column in [4, 5, 4, 5, 4, 5, 4] {
            session.play(column).unwrap();
        }

        assert_eq!(session.announcement().as_deref(), Some("Ada won!"));
        assert_eq!(session.result().unwrap().unwrap().winner, 1);
    }

    #[test]
    fn tie_is_announced() {
        let mut session = Session::new();
        session.start(GameConfig::default().with_size(1, 2)).unwrap();

        session.play(0).unwrap();
        let outcome = session.play(0).unwrap();

        assert!(matches!(outcome, MoveOutcome::Tied { .. }));
        assert_eq!(
            session.announcement().as_deref(),
            Some("The game ended in a Tie!")
        );
    }

    #[test]
    fn new_game_replaces_finished_one() {
        let mut session = Session::new();
        session.start(GameConfig::default().with_size(1, 1)).unwrap();
        session.play(0).unwrap();
        assert!(session.game().is_some_and(Game::is_over));

        let state = session.start(GameConfig::default()).unwrap();

        assert!(!state.is_game_over);
        assert_eq!(state.move_count, 0);
        assert!(state.board.iter().all(|&code| code == 0));
    }

    #[test]
    fn rejected_config_keeps_previous_game() {
        let mut session = Session::new();
        session.start(GameConfig::default()).unwrap();
        session.play(0).unwrap();

        let bad = GameConfig::new(Player::new("red", "A"), Player::new("red", "B"));
        let err = session.start(bad).unwrap_err();

        assert_eq!(
            err,
            SessionError::Config(ConfigError::DuplicateMarker("red".to_string()))
        );
        assert_eq!(session.state().unwrap().move_count, 1);
    }
}
