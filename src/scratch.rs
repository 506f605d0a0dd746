//! Scratch-off prize cards.
//!
//! The silver cover is modeled as one flag per cell of a `width × height`
//! surface. Strokes clear discs; every few strokes the cleared share is
//! sampled and, once it passes the threshold, the rest of the cover is
//! removed in one go.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::config::ScratchConfig;
use crate::error::{ArcadeError, Result};

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ScratchCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub prizes: &'static [&'static str],
}

pub static CATEGORIES: [ScratchCategory; 4] = [
    ScratchCategory {
        id: "coupon",
        label: "Love Coupons",
        description: "Redeem for special treats!",
        prizes: &[
            "Free Hug Coupon 🤗",
            "Massage (15 mins) 💆‍♀️",
            "You Pick The Movie 🎬",
            "Dish Washing Pass 🍽️",
            "Breakfast in Bed 🥞",
            "One Small Wish ✨",
            "Get out of Jail Free (Argument) 🏳️",
            "A 10 Minute Cuddle Session ☁️",
        ],
    },
    ScratchCategory {
        id: "date",
        label: "Date Ideas",
        description: "What are we doing next?",
        prizes: &[
            "Late Night Ice Cream Run 🍦",
            "Build a Blanket Fort ⛺",
            "Visit a New Coffee Shop ☕",
            "Cook a New Recipe Together 🍳",
            "Stargazing (or Cloud Watching) 🌌",
            "Arcade Battle 👾",
            "Go for a long walk w/o phones 🚶‍♂️",
            "DIY Pizza Night 🍕",
        ],
    },
    ScratchCategory {
        id: "truth",
        label: "Deep Questions",
        description: "Get to know me better.",
        prizes: &[
            "What's your favorite memory of us? 💭",
            "What is one thing you admire about me? ❤️",
            "If we could travel anywhere, where? ✈️",
            "What was your first impression of me? 👀",
            "What's a song that reminds you of me? 🎵",
            "When did you know you liked me? 💡",
        ],
    },
    ScratchCategory {
        id: "challenge",
        label: "Fun Challenge",
        description: "I dare you to...",
        prizes: &[
            "Staring Contest (1 min) 👀",
            "Let me style your hair 💇‍♂️",
            "Give me a piggyback ride 🐖",
            "Send a cute selfie right now 📸",
            "Whisper something sweet 👂",
            "Do 10 jumping jacks together 🏃‍♂️",
        ],
    },
];

/// Largest coverage surface accepted (a 4096 × 4096 canvas).
pub const MAX_CELLS: usize = 4096 * 4096;

pub fn category(id: &str) -> Result<&'static ScratchCategory> {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ArcadeError::UnknownCategory(id.to_string()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScratchPhase {
    Covered,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ScratchOutcome {
    /// Card already revealed.
    Ignored,
    Scratched,
    /// This stroke pushed the card over the threshold.
    Revealed,
}

#[derive(Clone, Debug, Serialize)]
pub struct ScratchCard {
    category: &'static ScratchCategory,
    prize: &'static str,
    width: usize,
    height: usize,
    #[serde(skip)]
    covered: Vec<bool>,
    strokes: u32,
    cleared_fraction: f64,
    phase: ScratchPhase,
    #[serde(skip)]
    config: ScratchConfig,
}

impl ScratchCard {
    pub fn new<R: Rng + ?Sized>(
        category: &'static ScratchCategory,
        width: usize,
        height: usize,
        config: &ScratchConfig,
        rng: &mut R,
    ) -> Result<Self> {
        let (width, height) = (width.max(1), height.max(1));
        let cells = width
            .checked_mul(height)
            .filter(|&cells| cells <= MAX_CELLS)
            .ok_or(ArcadeError::InvalidSurface { width, height })?;
        Ok(Self {
            category,
            prize: category.prizes.choose(rng).copied().unwrap_or_default(),
            width,
            height,
            covered: vec![true; cells],
            strokes: 0,
            cleared_fraction: 0.0,
            phase: ScratchPhase::Covered,
            config: config.clone(),
        })
    }

    /// Clear a disc of the brush radius around `(x, y)`.
    pub fn scratch(&mut self, x: f64, y: f64) -> ScratchOutcome {
        if self.phase == ScratchPhase::Revealed {
            return ScratchOutcome::Ignored;
        }
        let r = self.config.brush_radius;
        let row_lo = (y - r).ceil().max(0.0) as usize;
        let row_hi = (y + r).floor().min(self.height as f64 - 1.0);
        let col_lo = (x - r).ceil().max(0.0) as usize;
        let col_hi = (x + r).floor().min(self.width as f64 - 1.0);
        if row_hi >= 0.0 && col_hi >= 0.0 {
            for row in row_lo..=row_hi as usize {
                let dy = row as f64 - y;
                for col in col_lo..=col_hi as usize {
                    let dx = col as f64 - x;
                    if dx * dx + dy * dy <= r * r {
                        self.covered[row * self.width + col] = false;
                    }
                }
            }
        }
        self.strokes += 1;
        if self.strokes % self.config.check_every.max(1) == 0 {
            return self.check_progress();
        }
        ScratchOutcome::Scratched
    }

    /// Re-sample the cover now and reveal if the threshold is exceeded.
    pub fn check_progress(&mut self) -> ScratchOutcome {
        if self.phase == ScratchPhase::Revealed {
            return ScratchOutcome::Ignored;
        }
        self.cleared_fraction = self.sample_cleared();
        if self.cleared_fraction > self.config.reveal_threshold {
            self.covered.fill(false);
            self.cleared_fraction = 1.0;
            self.phase = ScratchPhase::Revealed;
            return ScratchOutcome::Revealed;
        }
        ScratchOutcome::Scratched
    }

    fn sample_cleared(&self) -> f64 {
        let stride = self.config.sample_stride.max(1);
        let (mut sampled, mut cleared) = (0usize, 0usize);
        for covered in self.covered.iter().step_by(stride) {
            sampled += 1;
            if !covered {
                cleared += 1;
            }
        }
        if sampled == 0 {
            0.0
        } else {
            cleared as f64 / sampled as f64
        }
    }

    /// Fresh cover and a prize different from the last one (when the category allows it).
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.covered.fill(true);
        self.strokes = 0;
        self.cleared_fraction = 0.0;
        self.phase = ScratchPhase::Covered;
        if self.category.prizes.len() < 2 {
            return;
        }
        let previous = self.prize;
        while self.prize == previous {
            if let Some(prize) = self.category.prizes.choose(rng) {
                self.prize = prize;
            }
        }
    }

    pub fn category(&self) -> &'static ScratchCategory {
        self.category
    }

    pub fn prize(&self) -> &'static str {
        self.prize
    }

    pub fn phase(&self) -> ScratchPhase {
        self.phase
    }

    pub fn is_revealed(&self) -> bool {
        self.phase == ScratchPhase::Revealed
    }

    /// Cleared share from the last sample, in `[0, 1]`.
    pub fn cleared_fraction(&self) -> f64 {
        self.cleared_fraction
    }

    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.covered[y * self.width + x]
    }
}
