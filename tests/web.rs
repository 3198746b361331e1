#![cfg(target_arch = "wasm32")]

use connect_four::{game_over_message, get_result, get_state, play_column, start_game, wasm_ready};
use js_sys::Reflect;
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ok(result: Result<JsValue, JsError>) -> JsValue {
    match result {
        Ok(value) => value,
        Err(err) => panic!("call failed: {:?}", JsValue::from(err)),
    }
}

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn module_reports_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn default_game_starts_empty() {
    let state = ok(start_game(JsValue::UNDEFINED));

    assert_eq!(field(&state, "width").as_f64(), Some(7.0));
    assert_eq!(field(&state, "height").as_f64(), Some(6.0));
    assert_eq!(field(&state, "current_player").as_f64(), Some(1.0));
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(false));
    assert!(ok(get_result()).is_null());
    assert_eq!(game_over_message(), None);
}

#[wasm_bindgen_test]
fn vertical_four_ends_game_with_message() {
    ok(start_game(JsValue::UNDEFINED));

    let mut outcome = JsValue::UNDEFINED;
    for column in [0, 1, 0, 1, 0, 1, 0] {
        outcome = ok(play_column(column));
    }

    assert_eq!(field(&outcome, "kind").as_string().as_deref(), Some("won"));
    assert_eq!(field(&outcome, "player").as_f64(), Some(1.0));
    let result = ok(get_result());
    assert_eq!(field(&result, "winner").as_f64(), Some(1.0));
    assert_eq!(game_over_message().as_deref(), Some("Player 1 won!"));
    assert!(play_column(2).is_err());
}

#[wasm_bindgen_test]
fn full_column_reports_no_op() {
    ok(start_game(JsValue::UNDEFINED));
    for _ in 0..6 {
        ok(play_column(3));
    }

    let outcome = ok(play_column(3));

    assert_eq!(field(&outcome, "kind").as_string().as_deref(), Some("column_full"));
    let state = ok(get_state());
    assert_eq!(field(&state, "move_count").as_f64(), Some(6.0));
}

#[wasm_bindgen_test]
fn matching_colors_are_rejected() {
    let config = js_sys::JSON::parse(
        r##"{"player1":{"marker":"#123456","name":"A"},"player2":{"marker":"#123456","name":"B"}}"##,
    )
    .unwrap();

    assert!(start_game(config).is_err());
}

#[wasm_bindgen_test]
fn partial_config_uses_defaults() {
    let config = js_sys::JSON::parse(r##"{"width":5,"player1":{"marker":"#abcdef","name":"Ada"}}"##)
        .unwrap();

    let state = ok(start_game(config));

    assert_eq!(field(&state, "width").as_f64(), Some(5.0));
    assert_eq!(field(&state, "height").as_f64(), Some(6.0));
}
