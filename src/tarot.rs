//! Daily tarot: one card per calendar day.
//!
//! The page persists the last [`DailyDraw`] and hands it back on the next
//! visit. A draw from the same day locks the table and shows the stored
//! card again; any other day (or no record) opens a fresh three-card spread.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::config::TarotConfig;

mod deck;

/// localStorage key holding the date of the last reading.
pub const LAST_READ_DATE_KEY: &str = "tarot_last_read_date";
/// localStorage key holding the id of the last drawn card.
pub const CARD_ID_KEY: &str = "tarot_card_id";
/// Face-down cards offered per reading.
pub const SPREAD: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Arcana {
    Major,
    Cups,
    Wands,
    Swords,
    Pentacles,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub id: &'static str,
    pub name: &'static str,
    pub arcana: Arcana,
    pub meaning: &'static str,
}

pub fn deck() -> &'static [TarotCard] {
    &deck::CARDS
}

pub fn find_card(id: &str) -> Option<&'static TarotCard> {
    deck().iter().find(|c| c.id == id)
}

/// What gets persisted after a reading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDraw {
    /// Local calendar day as the browser prints it (`Date.toDateString()`).
    pub date: String,
    pub card_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "phase")]
pub enum TarotPhase {
    Ready,
    Flipping {
        slot: usize,
        card: &'static TarotCard,
        reveal_at: f64,
    },
    Drawn {
        card: &'static TarotCard,
    },
}

#[derive(Clone, Debug, Serialize)]
pub struct TarotReading {
    today: String,
    can_draw: bool,
    phase: TarotPhase,
    flip_ms: f64,
}

impl TarotReading {
    pub fn new(today: impl Into<String>, saved: Option<&DailyDraw>, config: &TarotConfig) -> Self {
        let today = today.into();
        let (can_draw, phase) = match saved {
            Some(draw) if draw.date == today => {
                // an unknown stored id still locks the day, there is just nothing to show
                let phase = find_card(&draw.card_id)
                    .map(|card| TarotPhase::Drawn { card })
                    .unwrap_or(TarotPhase::Ready);
                (false, phase)
            }
            _ => (true, TarotPhase::Ready),
        };
        Self {
            today,
            can_draw,
            phase,
            flip_ms: config.flip_ms,
        }
    }

    /// Turn over face-down card `slot`; the drawn card comes uniformly from the full deck.
    pub fn pick<R: Rng + ?Sized>(&mut self, slot: usize, rng: &mut R, now: f64) -> bool {
        if !self.can_draw || self.phase != TarotPhase::Ready || slot >= SPREAD {
            return false;
        }
        let Some(card) = deck().choose(rng) else {
            return false;
        };
        self.phase = TarotPhase::Flipping {
            slot,
            card,
            reveal_at: now + self.flip_ms,
        };
        true
    }

    /// Finish the flip. Returns the record to persist once the card is revealed.
    pub fn tick(&mut self, now: f64) -> Option<DailyDraw> {
        let TarotPhase::Flipping { card, reveal_at, .. } = self.phase else {
            return None;
        };
        if now < reveal_at {
            return None;
        }
        self.phase = TarotPhase::Drawn { card };
        self.can_draw = false;
        Some(DailyDraw {
            date: self.today.clone(),
            card_id: card.id.to_string(),
        })
    }

    pub fn can_draw(&self) -> bool {
        self.can_draw
    }

    pub fn phase(&self) -> TarotPhase {
        self.phase
    }

    pub fn card(&self) -> Option<&'static TarotCard> {
        match self.phase {
            TarotPhase::Drawn { card } => Some(card),
            _ => None,
        }
    }
}

/// Milliseconds from a local wall-clock time to the next local midnight.
pub fn ms_until_midnight(hour: u32, minute: u32, second: u32, milli: u32) -> f64 {
    let elapsed = ((u64::from(hour) * 60 + u64::from(minute)) * 60 + u64::from(second)) * 1000 + u64::from(milli);
    (86_400_000u64.saturating_sub(elapsed)) as f64
}

/// `"{h}h {m}m {s}s"` countdown text.
pub fn format_countdown(ms: f64) -> String {
    let total = (ms.max(0.0) / 1000.0).floor() as u64;
    let hours = (total / 3600) % 24;
    let minutes = (total / 60) % 60;
    let seconds = total % 60;
    format!("{hours}h {minutes}m {seconds}s")
}
