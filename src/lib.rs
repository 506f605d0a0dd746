//! Scrapbook arcade core crate.
//!
//! Mini-games played over a couple's memory scrapbook: a sliding photo
//! puzzle, photo/place matching, a date-planner wheel, scratch-off cards, a
//! memory quiz, a small shooter and a daily tarot draw. The engines are
//! plain Rust driven by caller-supplied timestamps; `web` wires them to the
//! browser.

use wasm_bindgen::prelude::*;

pub mod arcade;
pub mod catalog;
pub mod config;
pub mod error;
pub mod matching;
pub mod puzzle;
pub mod quiz;
pub mod records;
pub mod scratch;
pub mod shooter;
pub mod tarot;
pub mod web;
pub mod wheel;

pub use arcade::{Arcade, TickEvents};
pub use config::ArcadeConfig;
pub use error::{ArcadeError, Result};
pub use records::{MemoryMoment, MemoryRecord, Mood};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
