//! Error type shared by the arcade.
//!
//! Moves inside a running game never fail (illegal input is ignored); errors
//! only come from building games out of external data: configuration JSON,
//! record JSON, scripted boards and decks, and browser storage.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ArcadeError {
    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid memory record `{name}`: {reason}")]
    InvalidRecord { name: String, reason: String },
    #[error("invalid puzzle board: {0}")]
    InvalidBoard(String),
    #[error("invalid match deck: {0}")]
    InvalidDeck(String),
    #[error("not enough memories to start {game} (need {needed}, have {available})")]
    NotEnoughRecords {
        game: &'static str,
        needed: usize,
        available: usize,
    },
    #[error("unknown scratch category: {0}")]
    UnknownCategory(String),
    #[error("scratch surface {width}x{height} is too large")]
    InvalidSurface { width: usize, height: usize },
    #[error("unknown game: {0}")]
    UnknownGame(String),
    #[error("no game of kind `{0}` is running")]
    NotRunning(&'static str),
    #[error("browser storage unavailable: {0}")]
    Storage(String),
}

impl ArcadeError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        ArcadeError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl From<ArcadeError> for JsValue {
    fn from(err: ArcadeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = ArcadeError> = std::result::Result<T, E>;
