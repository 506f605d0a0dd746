#![cfg(target_arch = "wasm32")]

use scrapbook_arcade::web;
use serde_json::Value;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap()
}

#[wasm_bindgen_test]
fn puzzle_round_trips_through_exports() {
    web::seed_session(3);
    let board = parse(&web::puzzle_start().unwrap());
    assert_eq!(board["tiles"].as_array().map(Vec::len), Some(9));

    let state = parse(&web::puzzle_state().unwrap());
    let movable = state["movable"].as_array().unwrap();
    assert!(!movable.is_empty());
    let cell = movable[0].as_u64().unwrap() as usize;
    assert!(web::puzzle_move(cell).unwrap());
}

#[wasm_bindgen_test]
fn closed_game_reports_an_error() {
    web::seed_session(4);
    web::scratch_start("date", 40, 40).unwrap();
    web::close_game("scratch").unwrap();
    assert!(web::scratch_state().is_err());
    assert!(web::close_game("pinball").is_err());
}

#[wasm_bindgen_test]
fn configure_rejects_bad_values() {
    web::seed_session(5);
    assert!(web::configure(r#"{ "puzzle": { "size": 1 } }"#).is_err());
    web::configure(r#"{ "matching": { "pairs": 2 } }"#).unwrap();
    let game = parse(&web::match_start().unwrap());
    assert_eq!(game["cards"].as_array().map(Vec::len), Some(4));
    assert_eq!(game["clock"], "0:00");
}

#[wasm_bindgen_test]
fn tick_settles_the_wheel() {
    web::seed_session(6);
    assert!(web::wheel_spin().is_some());
    assert!(web::wheel_spin().is_none());
    let events = parse(&web::tick(web::performance_now() + 60_000.0).unwrap());
    assert!(events["wheel_landed"].is_string());
}

#[wasm_bindgen_test]
fn scratch_categories_are_listed() {
    let list = parse(&web::scratch_categories().unwrap());
    assert_eq!(list.as_array().map(Vec::len), Some(4));
    assert_eq!(list[0]["id"], "coupon");
}

#[wasm_bindgen_test]
fn reseeding_keeps_loaded_memories() {
    let json = r#"[
        {"name":"Home","lat":1.0,"lng":2.0,"ggmaps":"x","detail":[{"date":"19:32 23/02/2025","img":"a.jpg","desc":"plant"}]},
        {"name":"Cafe","lat":1.0,"lng":2.0,"ggmaps":"x","detail":[{"date":"10:00 01/03/2025","img":"b.jpg","desc":"latte"}]}
    ]"#;
    assert_eq!(web::load_memories(json).unwrap(), 2);
    web::seed_session(8);
    web::configure(r#"{ "matching": { "pairs": 6 } }"#).unwrap();
    let game = parse(&web::match_start().unwrap());
    assert_eq!(game["cards"].as_array().map(Vec::len), Some(4));
}

#[wasm_bindgen_test]
fn frame_loop_survives_a_throwing_callback() {
    let callback = js_sys::Function::new_no_args("throw new Error('page handler failed')");
    web::start_frame_loop(Some(callback)).unwrap();
    web::start_frame_loop(None).unwrap();
    web::seed_session(9);
    assert!(web::wheel_spin().is_some());
}

#[wasm_bindgen_test]
fn oversized_scratch_card_is_refused() {
    web::seed_session(10);
    assert!(web::scratch_start("coupon", 100_000, 100_000).is_err());
    assert!(web::scratch_state().is_err());
}
