//! Photo match: pair each memory's photo with the name of the place.
//!
//! The session moves through [`MatchPhase`]; input is accepted only in
//! `Idle` and `AwaitingSecond`. A second pick puts the game in `Resolving`
//! until the settle deadline passes, at which point [`MatchGame::tick`]
//! either locks the pair as matched or turns both cards face down again.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::MatchConfig;
use crate::error::{ArcadeError, Result};
use crate::records::MemoryRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardKind {
    Image,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardFace {
    Hidden,
    Revealed,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchCard {
    pub id: usize,
    pub pair_id: usize,
    pub kind: CardKind,
    /// Image URL for `Image` cards, place name for `Text` cards.
    pub content: String,
    face: CardFace,
}

impl MatchCard {
    pub fn new(id: usize, pair_id: usize, kind: CardKind, content: impl Into<String>) -> Self {
        Self {
            id,
            pair_id,
            kind,
            content: content.into(),
            face: CardFace::Hidden,
        }
    }

    pub fn face(&self) -> CardFace {
        self.face
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "phase")]
pub enum MatchPhase {
    Idle,
    AwaitingSecond {
        first: usize,
    },
    Resolving {
        first: usize,
        second: usize,
        matched: bool,
        settles_at: f64,
    },
    Won,
}

/// What a pick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Pick {
    Ignored,
    /// First card of an attempt is face up.
    Revealed,
    /// Second card is face up; the pair settles after the delay.
    Resolving { matched: bool },
}

/// What a settled attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Resolution {
    Matched,
    Mismatched,
    Won,
}

#[derive(Clone, Debug, Serialize)]
pub struct MatchGame {
    cards: Vec<MatchCard>,
    phase: MatchPhase,
    moves: u32,
    started_at: Option<f64>,
    finished_at: Option<f64>,
    match_settle_ms: f64,
    mismatch_ms: f64,
}

impl MatchGame {
    /// Deal a shuffled deck from up to `config.pairs` records that carry a
    /// photo. With fewer qualifying records the deck simply has fewer pairs;
    /// with none the game cannot start.
    pub fn new<R: Rng + ?Sized>(records: &[MemoryRecord], config: &MatchConfig, rng: &mut R) -> Result<Self> {
        let with_photo: Vec<&MemoryRecord> = records.iter().filter(|r| r.has_image()).collect();
        if with_photo.is_empty() {
            return Err(ArcadeError::NotEnoughRecords {
                game: "photo match",
                needed: 1,
                available: 0,
            });
        }
        let mut cards = Vec::with_capacity(config.pairs.min(with_photo.len()) * 2);
        for (pair_id, record) in with_photo.choose_multiple(rng, config.pairs).enumerate() {
            let image = record.first_image().unwrap_or_default();
            cards.push(MatchCard::new(pair_id * 2, pair_id, CardKind::Image, image));
            cards.push(MatchCard::new(pair_id * 2 + 1, pair_id, CardKind::Text, record.name.as_str()));
        }
        cards.shuffle(rng);
        Ok(Self::with_deck(cards, config))
    }

    /// Use a prepared deck in the given order. Every `pair_id` must occur exactly twice.
    pub fn from_cards(cards: Vec<MatchCard>, config: &MatchConfig) -> Result<Self> {
        if cards.is_empty() {
            return Err(ArcadeError::InvalidDeck("deck is empty".into()));
        }
        let mut counts = std::collections::HashMap::new();
        for card in &cards {
            *counts.entry(card.pair_id).or_insert(0usize) += 1;
        }
        if let Some((pair_id, n)) = counts.iter().find(|(_, n)| **n != 2) {
            return Err(ArcadeError::InvalidDeck(format!(
                "pair {pair_id} has {n} cards"
            )));
        }
        let mut cards = cards;
        for card in &mut cards {
            card.face = CardFace::Hidden;
        }
        Ok(Self::with_deck(cards, config))
    }

    fn with_deck(cards: Vec<MatchCard>, config: &MatchConfig) -> Self {
        Self {
            cards,
            phase: MatchPhase::Idle,
            moves: 0,
            started_at: None,
            finished_at: None,
            match_settle_ms: config.match_settle_ms,
            mismatch_ms: config.mismatch_ms,
        }
    }

    /// Turn over the card at `index`.
    pub fn select(&mut self, index: usize, now: f64) -> Pick {
        self.tick(now);
        let Some(card) = self.cards.get(index) else {
            return Pick::Ignored;
        };
        if card.face != CardFace::Hidden {
            return Pick::Ignored;
        }
        match self.phase {
            MatchPhase::Idle => {
                self.cards[index].face = CardFace::Revealed;
                self.started_at.get_or_insert(now);
                self.phase = MatchPhase::AwaitingSecond { first: index };
                Pick::Revealed
            }
            MatchPhase::AwaitingSecond { first } => {
                self.cards[index].face = CardFace::Revealed;
                self.moves += 1;
                let matched = self.cards[first].pair_id == self.cards[index].pair_id;
                let delay = if matched {
                    self.match_settle_ms
                } else {
                    self.mismatch_ms
                };
                self.phase = MatchPhase::Resolving {
                    first,
                    second: index,
                    matched,
                    settles_at: now + delay,
                };
                Pick::Resolving { matched }
            }
            MatchPhase::Resolving { .. } | MatchPhase::Won => Pick::Ignored,
        }
    }

    /// Settle a pending attempt once its deadline has passed.
    pub fn tick(&mut self, now: f64) -> Option<Resolution> {
        let MatchPhase::Resolving {
            first,
            second,
            matched,
            settles_at,
        } = self.phase
        else {
            return None;
        };
        if now < settles_at {
            return None;
        }
        if !matched {
            self.cards[first].face = CardFace::Hidden;
            self.cards[second].face = CardFace::Hidden;
            self.phase = MatchPhase::Idle;
            return Some(Resolution::Mismatched);
        }
        self.cards[first].face = CardFace::Matched;
        self.cards[second].face = CardFace::Matched;
        if self.cards.iter().all(|c| c.face == CardFace::Matched) {
            self.phase = MatchPhase::Won;
            self.finished_at = Some(settles_at);
            Some(Resolution::Won)
        } else {
            self.phase = MatchPhase::Idle;
            Some(Resolution::Matched)
        }
    }

    pub fn cards(&self) -> &[MatchCard] {
        &self.cards
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn is_won(&self) -> bool {
        self.phase == MatchPhase::Won
    }

    /// True while a wrong pair is on display before flipping back.
    pub fn is_mismatched(&self, index: usize) -> bool {
        matches!(
            self.phase,
            MatchPhase::Resolving { first, second, matched: false, .. } if index == first || index == second
        )
    }

    /// Whole seconds since the first reveal, frozen once the game is won.
    pub fn elapsed_secs(&self, now: f64) -> u64 {
        match self.started_at {
            Some(start) => {
                let end = self.finished_at.unwrap_or(now);
                ((end - start).max(0.0) / 1000.0).floor() as u64
            }
            None => 0,
        }
    }
}

/// `m:ss` clock text for the stats bar.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
