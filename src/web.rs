//! Browser surface: `wasm_bindgen` exports, the animation-frame loop,
//! localStorage persistence and console logging.
//!
//! Game state lives in one thread-local [`Arcade`]. Exports return JSON
//! snapshots as strings so the page can render however it likes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::console;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Storage, window};

use crate::arcade::{Arcade, TickEvents};
use crate::config::ArcadeConfig;
use crate::error::ArcadeError;
use crate::matching::{MatchGame, Resolution, format_clock};
use crate::puzzle::SlidingPuzzle;
use crate::records::{self, MemoryFilter};
use crate::scratch::{CATEGORIES, ScratchOutcome};
use crate::shooter::Shooter;
use crate::tarot::{self, CARD_ID_KEY, DailyDraw, LAST_READ_DATE_KEY, TarotReading};

thread_local! {
    static ARCADE: RefCell<Option<Arcade>> = const { RefCell::new(None) };
    static LOOP_RUNNING: Cell<bool> = const { Cell::new(false) };
}

fn with_arcade<T>(f: impl FnOnce(&mut Arcade) -> T) -> T {
    ARCADE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let arcade = slot.get_or_insert_with(|| Arcade::new(ArcadeConfig::default()));
        f(arcade)
    })
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| ArcadeError::from(err).into())
}

fn not_running(game: &'static str) -> JsValue {
    ArcadeError::NotRunning(game).into()
}

/// `performance.now()`, the clock every deadline is measured against.
pub fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn local_storage() -> Result<Storage, ArcadeError> {
    window()
        .ok_or_else(|| ArcadeError::Storage("no window".into()))?
        .local_storage()
        .map_err(|_| ArcadeError::Storage("access denied".into()))?
        .ok_or_else(|| ArcadeError::Storage("localStorage missing".into()))
}

// --- Session -----------------------------------------------------------------

/// Apply a (partial) JSON configuration.
#[wasm_bindgen]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = ArcadeConfig::from_json(json)?;
    with_arcade(|arcade| arcade.set_config(config))?;
    console::log!("arcade: configuration applied");
    Ok(())
}

/// Restart the session with a fixed seed (replays, demos). Configuration
/// and loaded memories are kept.
#[wasm_bindgen]
pub fn seed_session(seed: u64) {
    with_arcade(|arcade| arcade.restart(seed));
}

/// Replace the built-in memories with the page's own list. Returns the record count.
#[wasm_bindgen]
pub fn load_memories(json: &str) -> Result<usize, JsValue> {
    let list = records::load_records(json).inspect_err(|err| {
        console::warn!("arcade: memories rejected:", err.to_string());
    })?;
    let count = list.len();
    with_arcade(|arcade| arcade.set_records(list));
    console::log!("arcade: memories loaded", count);
    Ok(count)
}

/// Gallery shuffle: a random memory matching the filter, or `undefined`.
#[wasm_bindgen]
pub fn surprise_memory(filter_json: &str) -> Result<Option<String>, JsValue> {
    let filter: MemoryFilter = serde_json::from_str(filter_json).map_err(ArcadeError::from)?;
    with_arcade(|arcade| arcade.surprise(&filter).map(to_json).transpose())
}

#[wasm_bindgen]
pub fn close_game(game: &str) -> Result<(), JsValue> {
    with_arcade(|arcade| arcade.close(game))?;
    Ok(())
}

// --- Sliding puzzle ----------------------------------------------------------

#[wasm_bindgen]
pub fn puzzle_start() -> Result<String, JsValue> {
    with_arcade(|arcade| {
        let puzzle = arcade.start_puzzle();
        console::log!("puzzle: new board", puzzle.size() as u32, puzzle.image());
        to_json(puzzle)
    })
}

#[wasm_bindgen]
pub fn puzzle_move(index: usize) -> Result<bool, JsValue> {
    with_arcade(|arcade| -> Result<bool, JsValue> {
        let moved = arcade.puzzle_move(index)?;
        if moved {
            if let Some(p) = arcade.puzzle().filter(|p| p.is_solved()) {
                console::log!("puzzle: solved in", p.moves(), "moves");
            }
        }
        Ok(moved)
    })
}

#[wasm_bindgen]
pub fn puzzle_state() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        #[derive(Serialize)]
        struct View<'a> {
            #[serde(flatten)]
            puzzle: &'a SlidingPuzzle,
            movable: Vec<usize>,
        }
        let puzzle = arcade.puzzle().ok_or_else(|| not_running("puzzle"))?;
        to_json(&View {
            puzzle,
            movable: puzzle.movable_cells(),
        })
    })
}

// --- Photo match -------------------------------------------------------------

#[derive(Serialize)]
struct MatchView<'a> {
    #[serde(flatten)]
    game: &'a MatchGame,
    mismatched: Vec<usize>,
    elapsed_secs: u64,
    clock: String,
}

fn match_view(game: &MatchGame, now: f64) -> Result<String, JsValue> {
    let elapsed_secs = game.elapsed_secs(now);
    to_json(&MatchView {
        game,
        mismatched: (0..game.cards().len())
            .filter(|&i| game.is_mismatched(i))
            .collect(),
        elapsed_secs,
        clock: format_clock(elapsed_secs),
    })
}

#[wasm_bindgen]
pub fn match_start() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        let game = arcade.start_match()?;
        console::log!("match: dealt pairs", game.pairs() as u32);
        match_view(game, performance_now())
    })
}

/// Returns the pick outcome as JSON.
#[wasm_bindgen]
pub fn match_select(index: usize) -> Result<String, JsValue> {
    let pick = with_arcade(|arcade| arcade.match_select(index, performance_now()))?;
    to_json(&pick)
}

#[wasm_bindgen]
pub fn match_state() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        let game = arcade.matching().ok_or_else(|| not_running("match"))?;
        match_view(game, performance_now())
    })
}

// --- Date planner wheel ------------------------------------------------------

/// Start a spin; returns the target rotation in degrees for the CSS
/// transition, or `undefined` while the wheel is still turning.
#[wasm_bindgen]
pub fn wheel_spin() -> Option<f64> {
    with_arcade(|arcade| arcade.spin_wheel(performance_now()))
}

#[wasm_bindgen]
pub fn wheel_state() -> Result<String, JsValue> {
    with_arcade(|arcade| to_json(arcade.wheel()))
}

// --- Scratch card ------------------------------------------------------------

#[wasm_bindgen]
pub fn scratch_categories() -> Result<String, JsValue> {
    to_json(&CATEGORIES[..])
}

#[wasm_bindgen]
pub fn scratch_start(category: &str, width: usize, height: usize) -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        to_json(arcade.start_scratch(category, width, height)?)
    })
}

/// One brush stroke at canvas coordinates. Returns the outcome as JSON.
#[wasm_bindgen]
pub fn scratch_at(x: f64, y: f64) -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        let outcome = arcade.scratch_at(x, y)?;
        if outcome == ScratchOutcome::Revealed {
            if let Some(card) = arcade.scratch() {
                console::log!("scratch: revealed", card.prize());
            }
        }
        to_json(&outcome)
    })
}

#[wasm_bindgen]
pub fn scratch_reset() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        to_json(arcade.reset_scratch()?)
    })
}

#[wasm_bindgen]
pub fn scratch_state() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        to_json(arcade.scratch().ok_or_else(|| not_running("scratch"))?)
    })
}

// --- Quiz --------------------------------------------------------------------

#[wasm_bindgen]
pub fn quiz_start() -> Result<String, JsValue> {
    with_arcade(|arcade| {
        let quiz = arcade.start_quiz();
        if quiz.questions().is_empty() {
            console::warn!("quiz: not enough memories for a quiz");
        }
        to_json(quiz)
    })
}

/// `true`/`false` for a scored answer, `undefined` when the answer was not taken.
#[wasm_bindgen]
pub fn quiz_answer(option: usize) -> Result<Option<bool>, JsValue> {
    Ok(with_arcade(|arcade| arcade.quiz_answer(option, performance_now()))?)
}

#[wasm_bindgen]
pub fn quiz_state() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        to_json(arcade.quiz().ok_or_else(|| not_running("quiz"))?)
    })
}

// --- Shooter -----------------------------------------------------------------

fn shooter_view(shooter: &Shooter) -> Result<String, JsValue> {
    #[derive(Serialize)]
    struct View<'a> {
        #[serde(flatten)]
        shooter: &'a Shooter,
        time_left: u32,
    }
    to_json(&View {
        shooter,
        time_left: shooter.time_left_secs(performance_now()),
    })
}

/// Open the setup screen, optionally with custom avatars.
#[wasm_bindgen]
pub fn shooter_open(player_image: Option<String>, target_image: Option<String>) -> Result<String, JsValue> {
    with_arcade(|arcade| {
        let shooter = arcade.open_shooter();
        shooter.set_images(player_image, target_image);
        shooter_view(shooter)
    })
}

#[wasm_bindgen]
pub fn shooter_start() -> Result<(), JsValue> {
    with_arcade(|arcade| arcade.start_shooter(performance_now()))?;
    Ok(())
}

#[wasm_bindgen]
pub fn shooter_move(x_percent: f64) -> Result<(), JsValue> {
    with_arcade(|arcade| arcade.shooter_mut().map(|s| s.move_player(x_percent)))?;
    Ok(())
}

#[wasm_bindgen]
pub fn shooter_shoot() -> Result<bool, JsValue> {
    Ok(with_arcade(|arcade| arcade.shooter_mut().map(|s| s.shoot(performance_now())))?)
}

#[wasm_bindgen]
pub fn shooter_state() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        shooter_view(arcade.shooter().ok_or_else(|| not_running("shooter"))?)
    })
}

// --- Daily tarot -------------------------------------------------------------

fn today() -> String {
    String::from(js_sys::Date::new_0().to_date_string())
}

fn countdown_to_midnight() -> String {
    let now = js_sys::Date::new_0();
    tarot::format_countdown(tarot::ms_until_midnight(
        now.get_hours(),
        now.get_minutes(),
        now.get_seconds(),
        now.get_milliseconds(),
    ))
}

fn load_daily_draw() -> Option<DailyDraw> {
    let storage = match local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            console::warn!("tarot:", err.to_string());
            return None;
        }
    };
    let date = storage.get_item(LAST_READ_DATE_KEY).ok()??;
    let card_id = storage.get_item(CARD_ID_KEY).ok()??;
    Some(DailyDraw { date, card_id })
}

fn save_daily_draw(draw: &DailyDraw) {
    let result = local_storage().and_then(|storage| {
        storage
            .set_item(LAST_READ_DATE_KEY, &draw.date)
            .and_then(|_| storage.set_item(CARD_ID_KEY, &draw.card_id))
            .map_err(|_| ArcadeError::Storage("write failed".into()))
    });
    match result {
        Ok(()) => console::log!("tarot: saved", draw.card_id.clone()),
        Err(err) => console::warn!("tarot: could not save draw:", err.to_string()),
    }
}

fn tarot_view(reading: &TarotReading) -> Result<String, JsValue> {
    #[derive(Serialize)]
    struct View<'a> {
        #[serde(flatten)]
        reading: &'a TarotReading,
        #[serde(skip_serializing_if = "Option::is_none")]
        next_draw_in: Option<String>,
    }
    to_json(&View {
        reading,
        next_draw_in: (!reading.can_draw()).then(countdown_to_midnight),
    })
}

/// Open the tarot table; the last reading is restored from localStorage.
#[wasm_bindgen]
pub fn tarot_open() -> Result<String, JsValue> {
    let saved = load_daily_draw();
    let today = today();
    with_arcade(|arcade| tarot_view(arcade.open_tarot(&today, saved.as_ref())))
}

#[wasm_bindgen]
pub fn tarot_pick(slot: usize) -> Result<bool, JsValue> {
    Ok(with_arcade(|arcade| arcade.tarot_pick(slot, performance_now()))?)
}

#[wasm_bindgen]
pub fn tarot_state() -> Result<String, JsValue> {
    with_arcade(|arcade| -> Result<String, JsValue> {
        tarot_view(arcade.tarot().ok_or_else(|| not_running("tarot"))?)
    })
}

// --- Frame loop --------------------------------------------------------------

fn handle_events(events: &TickEvents) {
    if let Some(resolution) = events.matching {
        if resolution == Resolution::Won {
            console::log!("match: all pairs found");
        }
    }
    if let Some(label) = events.wheel_landed {
        console::log!("wheel: landed on", label);
    }
    if let Some(draw) = &events.tarot_drawn {
        save_daily_draw(draw);
    }
}

/// Advance every game to `now`. Returns the settled events as JSON. Pages
/// that run their own loop call this instead of [`start_frame_loop`].
#[wasm_bindgen]
pub fn tick(now: f64) -> Result<String, JsValue> {
    let events = with_arcade(|arcade| arcade.tick(now));
    handle_events(&events);
    to_json(&events)
}

/// Drive [`tick`] from `requestAnimationFrame`. `on_events` (if given) is
/// called with the events JSON whenever something settled.
#[wasm_bindgen]
pub fn start_frame_loop(on_events: Option<js_sys::Function>) -> Result<(), JsValue> {
    if LOOP_RUNNING.with(Cell::get) {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let events = with_arcade(|arcade| arcade.tick(ts));
        if !events.is_empty() {
            handle_events(&events);
            if let Some(callback) = &on_events {
                if let Ok(json) = to_json(&events) {
                    if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                        console::warn!("arcade: frame callback threw:", err);
                    }
                }
            }
        }
        let scheduled = match (window(), f.borrow().as_ref()) {
            (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
            _ => false,
        };
        if !scheduled {
            console::warn!("arcade: frame loop stopped");
            LOOP_RUNNING.with(|running| running.set(false));
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = g.borrow().as_ref() {
        win.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    LOOP_RUNNING.with(|running| running.set(true));
    Ok(())
}
