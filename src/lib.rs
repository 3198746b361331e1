use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod session;
pub mod types;
pub mod win;

use crate::config::GameConfig;
use crate::error::SessionError;
use crate::session::Session;

static SESSION: Mutex<Session> = Mutex::new(Session::new());

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Starts a new game, replacing any previous one. Pass `undefined` for the
/// default 7x6 board.
#[wasm_bindgen]
pub fn start_game(config: JsValue) -> Result<JsValue, JsError> {
    let config: GameConfig = if config.is_undefined() || config.is_null() {
        GameConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let state = with_session(|session| session.start(config))?;
    to_js(&state)
}

#[wasm_bindgen]
pub fn play_column(column: usize) -> Result<JsValue, JsError> {
    let outcome = with_session(|session| session.play(column))?;
    to_js(&outcome)
}

#[wasm_bindgen]
pub fn get_state() -> Result<JsValue, JsError> {
    let state = with_session(|session| session.state())?;
    to_js(&state)
}

/// `null` until the game reaches a win or a tie.
#[wasm_bindgen]
pub fn get_result() -> Result<JsValue, JsError> {
    let result = with_session(|session| session.result())?;
    to_js(&result)
}

#[wasm_bindgen]
pub fn game_over_message() -> Option<String> {
    lock_session().announcement()
}

fn with_session<T>(
    f: impl FnOnce(&mut Session) -> Result<T, SessionError>,
) -> Result<T, SessionError> {
    f(&mut *lock_session())
}

fn lock_session() -> MutexGuard<'static, Session> {
    SESSION.lock().unwrap_or_else(PoisonError::into_inner)
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}
