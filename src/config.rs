//! Tunable parameters for every mini-game.
//!
//! Defaults reproduce the scrapbook's shipped behavior. A host page may
//! override any subset through [`ArcadeConfig::from_json`]; missing sections
//! and fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{ArcadeError, Result};

pub const DEFAULT_PUZZLE_SIZE: usize = 3;
pub const FALLBACK_PUZZLE_IMAGE: &str = "https://picsum.photos/400/400";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub puzzle: PuzzleConfig,
    pub matching: MatchConfig,
    pub wheel: WheelConfig,
    pub scratch: ScratchConfig,
    pub quiz: QuizConfig,
    pub shooter: ShooterConfig,
    pub tarot: TarotConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Board edge length; the board holds `size * size` cells.
    pub size: usize,
    /// Image used when no memory carries a photo.
    pub fallback_image: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_PUZZLE_SIZE,
            fallback_image: FALLBACK_PUZZLE_IMAGE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub pairs: usize,
    pub match_settle_ms: f64,
    pub mismatch_ms: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            pairs: 6,
            match_settle_ms: 600.0,
            mismatch_ms: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    pub min_revolutions: u32,
    pub max_revolutions: u32,
    pub spin_duration_ms: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            min_revolutions: 5,
            max_revolutions: 7,
            spin_duration_ms: 3000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScratchConfig {
    /// Cleared fraction that must be exceeded before the prize auto-reveals.
    pub reveal_threshold: f64,
    /// Distance (in cells) between coverage samples.
    pub sample_stride: usize,
    pub brush_radius: f64,
    /// Coverage is re-estimated once every this many strokes.
    pub check_every: u32,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.45,
            sample_stride: 50,
            brush_radius: 25.0,
            check_every: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub max_questions: usize,
    pub reveal_ms: f64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: 8,
            reveal_ms: 1500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterConfig {
    pub round_secs: f64,
    pub winning_score: u32,
    pub fire_cooldown_ms: f64,
    pub obstacle_spawn_chance: f64,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            round_secs: 60.0,
            winning_score: 100,
            fire_cooldown_ms: 300.0,
            obstacle_spawn_chance: 0.03,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TarotConfig {
    pub flip_ms: f64,
}

impl Default for TarotConfig {
    fn default() -> Self {
        Self { flip_ms: 800.0 }
    }
}

impl ArcadeConfig {
    /// Parse a (possibly partial) JSON document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ArcadeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.puzzle.size < 2 {
            return Err(ArcadeError::config("puzzle.size", "must be at least 2"));
        }
        if self.puzzle.size > 16 {
            return Err(ArcadeError::config("puzzle.size", "must be at most 16"));
        }
        if self.matching.pairs == 0 {
            return Err(ArcadeError::config("matching.pairs", "must be positive"));
        }
        non_negative("matching.match_settle_ms", self.matching.match_settle_ms)?;
        non_negative("matching.mismatch_ms", self.matching.mismatch_ms)?;
        if self.wheel.min_revolutions == 0 {
            return Err(ArcadeError::config(
                "wheel.min_revolutions",
                "must be at least 1",
            ));
        }
        if self.wheel.min_revolutions > self.wheel.max_revolutions {
            return Err(ArcadeError::config(
                "wheel.max_revolutions",
                format!(
                    "{} is below min_revolutions {}",
                    self.wheel.max_revolutions, self.wheel.min_revolutions
                ),
            ));
        }
        non_negative("wheel.spin_duration_ms", self.wheel.spin_duration_ms)?;
        let threshold = self.scratch.reveal_threshold;
        if !(threshold > 0.0 && threshold < 1.0) {
            return Err(ArcadeError::config(
                "scratch.reveal_threshold",
                format!("{threshold} is outside (0, 1)"),
            ));
        }
        if self.scratch.sample_stride == 0 {
            return Err(ArcadeError::config("scratch.sample_stride", "must be positive"));
        }
        if !(self.scratch.brush_radius > 0.0) {
            return Err(ArcadeError::config("scratch.brush_radius", "must be positive"));
        }
        if self.scratch.check_every == 0 {
            return Err(ArcadeError::config("scratch.check_every", "must be positive"));
        }
        non_negative("quiz.reveal_ms", self.quiz.reveal_ms)?;
        if !(self.shooter.round_secs > 0.0) {
            return Err(ArcadeError::config("shooter.round_secs", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.shooter.obstacle_spawn_chance) {
            return Err(ArcadeError::config(
                "shooter.obstacle_spawn_chance",
                "must be a probability",
            ));
        }
        non_negative("shooter.fire_cooldown_ms", self.shooter.fire_cooldown_ms)?;
        non_negative("tarot.flip_ms", self.tarot.flip_ms)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ArcadeError::config(field, format!("{value} is not a duration")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ArcadeConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = ArcadeConfig::from_json(r#"{ "puzzle": { "size": 4 }, "scratch": { "reveal_threshold": 0.6 } }"#)
            .unwrap();
        assert_eq!(cfg.puzzle.size, 4);
        assert_eq!(cfg.puzzle.fallback_image, FALLBACK_PUZZLE_IMAGE);
        assert!((cfg.scratch.reveal_threshold - 0.6).abs() < 1e-12);
        assert_eq!(cfg.matching, MatchConfig::default());
    }

    #[test]
    fn rejects_inverted_revolution_range() {
        let err = ArcadeConfig::from_json(r#"{ "wheel": { "min_revolutions": 8, "max_revolutions": 7 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ArcadeError::InvalidConfig { field: "wheel.max_revolutions", .. }
        ));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let err = ArcadeConfig::from_json(r#"{ "scratch": { "reveal_threshold": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ArcadeError::InvalidConfig { .. }));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            ArcadeConfig::from_json("{ not json"),
            Err(ArcadeError::Json(_))
        ));
    }
}
