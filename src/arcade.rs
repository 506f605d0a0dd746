//! The arcade session: configuration, memory records, the random source and
//! at most one running instance of each game.
//!
//! The page drives everything through this type. Input methods forward to
//! the game engines; [`Arcade::tick`] advances every timed transition from
//! one animation-frame timestamp.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::catalog::builtin_records;
use crate::config::ArcadeConfig;
use crate::error::{ArcadeError, Result};
use crate::matching::{MatchGame, Pick, Resolution};
use crate::puzzle::SlidingPuzzle;
use crate::quiz::Quiz;
use crate::records::{MemoryFilter, MemoryRecord, all_images, pick_random};
use crate::scratch::{self, ScratchCard, ScratchOutcome};
use crate::shooter::{FrameEvents, Shooter};
use crate::tarot::{DailyDraw, TarotReading};
use crate::wheel::SpinWheel;

/// Everything that settled during one [`Arcade::tick`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TickEvents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matching: Option<Resolution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wheel_landed: Option<&'static str>,
    pub quiz_advanced: bool,
    pub shooter: FrameEvents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarot_drawn: Option<DailyDraw>,
}

impl TickEvents {
    pub fn is_empty(&self) -> bool {
        *self == TickEvents::default()
    }
}

pub struct Arcade {
    config: ArcadeConfig,
    records: Vec<MemoryRecord>,
    rng: StdRng,
    puzzle: Option<SlidingPuzzle>,
    matching: Option<MatchGame>,
    wheel: SpinWheel,
    scratch: Option<ScratchCard>,
    quiz: Option<Quiz>,
    shooter: Option<Shooter>,
    tarot: Option<TarotReading>,
}

impl Arcade {
    /// Session seeded from the platform's entropy source.
    pub fn new(config: ArcadeConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Reproducible session.
    pub fn with_seed(config: ArcadeConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: ArcadeConfig, rng: StdRng) -> Self {
        let wheel = SpinWheel::date_planner(&config.wheel);
        Self {
            config,
            records: builtin_records().to_vec(),
            rng,
            puzzle: None,
            matching: None,
            wheel,
            scratch: None,
            quiz: None,
            shooter: None,
            tarot: None,
        }
    }

    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    /// Replace the configuration. Running games keep the settings they started with.
    pub fn set_config(&mut self, config: ArcadeConfig) -> Result<()> {
        config.validate()?;
        self.wheel.set_spin_duration(config.wheel.spin_duration_ms);
        self.config = config;
        Ok(())
    }

    /// Reseed and drop every running game. Configuration, records and the
    /// wheel's accumulated rotation carry over.
    pub fn restart(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.puzzle = None;
        self.matching = None;
        self.scratch = None;
        self.quiz = None;
        self.shooter = None;
        self.tarot = None;
        self.wheel.stop();
    }

    pub fn records(&self) -> &[MemoryRecord] {
        &self.records
    }

    /// Use the page's own memories instead of the built-in ones.
    pub fn set_records(&mut self, records: Vec<MemoryRecord>) {
        self.records = records;
    }

    /// Gallery "surprise me" among records passing `filter`.
    pub fn surprise(&mut self, filter: &MemoryFilter) -> Option<&MemoryRecord> {
        pick_random(&self.records, filter, &mut self.rng)
    }

    // --- Sliding puzzle -------------------------------------------------------

    pub fn start_puzzle(&mut self) -> &SlidingPuzzle {
        let images = all_images(&self.records);
        let puzzle = SlidingPuzzle::new(
            self.config.puzzle.size,
            &images,
            &self.config.puzzle.fallback_image,
            &mut self.rng,
        );
        self.puzzle.insert(puzzle)
    }

    pub fn puzzle_move(&mut self, index: usize) -> Result<bool> {
        Ok(running(&mut self.puzzle, "puzzle")?.attempt_move(index))
    }

    pub fn puzzle(&self) -> Option<&SlidingPuzzle> {
        self.puzzle.as_ref()
    }

    // --- Photo match ----------------------------------------------------------

    pub fn start_match(&mut self) -> Result<&MatchGame> {
        let game = MatchGame::new(&self.records, &self.config.matching, &mut self.rng)?;
        Ok(&*self.matching.insert(game))
    }

    pub fn match_select(&mut self, index: usize, now: f64) -> Result<Pick> {
        Ok(running(&mut self.matching, "match")?.select(index, now))
    }

    pub fn matching(&self) -> Option<&MatchGame> {
        self.matching.as_ref()
    }

    // --- Date planner wheel ---------------------------------------------------

    pub fn spin_wheel(&mut self, now: f64) -> Option<f64> {
        self.wheel.spin(&self.config.wheel, &mut self.rng, now)
    }

    pub fn wheel(&self) -> &SpinWheel {
        &self.wheel
    }

    // --- Scratch card ---------------------------------------------------------

    pub fn start_scratch(&mut self, category: &str, width: usize, height: usize) -> Result<&ScratchCard> {
        let category = scratch::category(category)?;
        let card = ScratchCard::new(category, width, height, &self.config.scratch, &mut self.rng)?;
        Ok(&*self.scratch.insert(card))
    }

    pub fn scratch_at(&mut self, x: f64, y: f64) -> Result<ScratchOutcome> {
        Ok(running(&mut self.scratch, "scratch")?.scratch(x, y))
    }

    pub fn reset_scratch(&mut self) -> Result<&ScratchCard> {
        let card = running(&mut self.scratch, "scratch")?;
        card.reset(&mut self.rng);
        Ok(&*card)
    }

    pub fn scratch(&self) -> Option<&ScratchCard> {
        self.scratch.as_ref()
    }

    // --- Quiz -----------------------------------------------------------------

    pub fn start_quiz(&mut self) -> &Quiz {
        let quiz = Quiz::new(&self.records, &self.config.quiz, &mut self.rng);
        self.quiz.insert(quiz)
    }

    pub fn quiz_answer(&mut self, option: usize, now: f64) -> Result<Option<bool>> {
        Ok(running(&mut self.quiz, "quiz")?.answer(option, now))
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    // --- Shooter --------------------------------------------------------------

    /// Set up the shooter (avatar picking) without starting the clock.
    pub fn open_shooter(&mut self) -> &mut Shooter {
        self.shooter.insert(Shooter::new(&self.config.shooter))
    }

    pub fn start_shooter(&mut self, now: f64) -> Result<()> {
        running(&mut self.shooter, "shooter")?.start(now);
        Ok(())
    }

    pub fn shooter_mut(&mut self) -> Result<&mut Shooter> {
        running(&mut self.shooter, "shooter")
    }

    pub fn shooter(&self) -> Option<&Shooter> {
        self.shooter.as_ref()
    }

    // --- Daily tarot ----------------------------------------------------------

    pub fn open_tarot(&mut self, today: &str, saved: Option<&DailyDraw>) -> &TarotReading {
        self.tarot
            .insert(TarotReading::new(today, saved, &self.config.tarot))
    }

    pub fn tarot_pick(&mut self, slot: usize, now: f64) -> Result<bool> {
        let reading = running(&mut self.tarot, "tarot")?;
        Ok(reading.pick(slot, &mut self.rng, now))
    }

    pub fn tarot(&self) -> Option<&TarotReading> {
        self.tarot.as_ref()
    }

    /// Close one game; its state is dropped.
    pub fn close(&mut self, game: &str) -> Result<()> {
        match game {
            "puzzle" => self.puzzle = None,
            "match" => self.matching = None,
            "scratch" => self.scratch = None,
            "quiz" => self.quiz = None,
            "shooter" => self.shooter = None,
            "tarot" => self.tarot = None,
            "wheel" => self.wheel.stop(),
            other => return Err(ArcadeError::UnknownGame(other.to_string())),
        }
        Ok(())
    }

    /// Advance every running game to `now` (milliseconds, `performance.now()` clock).
    pub fn tick(&mut self, now: f64) -> TickEvents {
        let mut events = TickEvents::default();
        if let Some(game) = self.matching.as_mut() {
            events.matching = game.tick(now);
        }
        events.wheel_landed = self.wheel.tick(now).map(|a| a.label);
        if let Some(quiz) = self.quiz.as_mut() {
            events.quiz_advanced = quiz.tick(now);
        }
        if let Some(shooter) = self.shooter.as_mut() {
            events.shooter = shooter.step(&mut self.rng, now);
        }
        if let Some(reading) = self.tarot.as_mut() {
            events.tarot_drawn = reading.tick(now);
        }
        events
    }
}

fn running<'a, T>(slot: &'a mut Option<T>, game: &'static str) -> Result<&'a mut T> {
    slot.as_mut().ok_or(ArcadeError::NotRunning(game))
}
