//! Date planner wheel.
//!
//! Segment `i` spans `[i * 360/K, (i + 1) * 360/K)` degrees clockwise from
//! the pointer before any rotation. The wheel only ever turns forward: the
//! accumulated rotation grows with every spin and is never wrapped.

use rand::Rng;
use serde::Serialize;

use crate::config::WheelConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub id: &'static str,
    pub label: &'static str,
}

pub const DATE_ACTIVITIES: [Activity; 8] = [
    Activity { id: "eat", label: "Street Food" },
    Activity { id: "movie", label: "Cinema" },
    Activity { id: "cafe", label: "Coffee" },
    Activity { id: "picnic", label: "Picnic" },
    Activity { id: "game", label: "Games" },
    Activity { id: "karaoke", label: "Karaoke" },
    Activity { id: "shop", label: "Shopping" },
    Activity { id: "home", label: "Home Cook" },
];

/// The random part of one spin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SpinDraw {
    pub extra_revolutions: u32,
    /// Degrees in `[0, 360)`.
    pub offset_deg: f64,
}

impl SpinDraw {
    pub fn random<R: Rng + ?Sized>(config: &WheelConfig, rng: &mut R) -> Self {
        Self {
            extra_revolutions: rng.gen_range(config.min_revolutions..=config.max_revolutions),
            offset_deg: rng.gen_range(0.0..360.0),
        }
    }

    pub fn degrees(&self) -> f64 {
        f64::from(self.extra_revolutions) * 360.0 + self.offset_deg
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "phase")]
pub enum WheelPhase {
    Idle,
    Spinning { settles_at: f64 },
    Landed { index: usize },
}

#[derive(Clone, Debug, Serialize)]
pub struct SpinWheel {
    activities: Vec<Activity>,
    rotation: f64,
    phase: WheelPhase,
    spin_duration_ms: f64,
    spins: u32,
}

impl SpinWheel {
    pub fn new(activities: Vec<Activity>, config: &WheelConfig) -> Self {
        Self {
            activities,
            rotation: 0.0,
            phase: WheelPhase::Idle,
            spin_duration_ms: config.spin_duration_ms,
            spins: 0,
        }
    }

    pub fn date_planner(config: &WheelConfig) -> Self {
        Self::new(DATE_ACTIVITIES.to_vec(), config)
    }

    /// Start a spin with a freshly drawn revolution count and offset.
    /// Returns the new target rotation, or `None` while a spin is in flight.
    pub fn spin<R: Rng + ?Sized>(&mut self, config: &WheelConfig, rng: &mut R, now: f64) -> Option<f64> {
        if self.is_spinning(now) {
            return None;
        }
        self.spin_with(SpinDraw::random(config, rng), now)
    }

    pub fn spin_with(&mut self, draw: SpinDraw, now: f64) -> Option<f64> {
        self.tick(now);
        if matches!(self.phase, WheelPhase::Spinning { .. }) || self.activities.is_empty() {
            return None;
        }
        self.rotation += draw.degrees();
        self.spins += 1;
        self.phase = WheelPhase::Spinning {
            settles_at: now + self.spin_duration_ms,
        };
        Some(self.rotation)
    }

    /// Land the wheel once the spin animation has run its course.
    pub fn tick(&mut self, now: f64) -> Option<&Activity> {
        let WheelPhase::Spinning { settles_at } = self.phase else {
            return None;
        };
        if now < settles_at {
            return None;
        }
        let index = winning_index(self.rotation, self.activities.len())?;
        self.phase = WheelPhase::Landed { index };
        self.activities.get(index)
    }

    /// Length of later spins. A spin already in flight keeps its deadline.
    pub fn set_spin_duration(&mut self, ms: f64) {
        self.spin_duration_ms = ms;
    }

    /// Forget the landed (or pending) result. The accumulated rotation stays.
    pub fn stop(&mut self) {
        self.phase = WheelPhase::Idle;
    }

    fn is_spinning(&self, now: f64) -> bool {
        matches!(self.phase, WheelPhase::Spinning { settles_at } if now < settles_at)
    }

    /// The landed activity; `None` before the first spin and while spinning.
    pub fn result(&self) -> Option<&Activity> {
        match self.phase {
            WheelPhase::Landed { index } => self.activities.get(index),
            _ => None,
        }
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn phase(&self) -> WheelPhase {
        self.phase
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn spins(&self) -> u32 {
        self.spins
    }
}

/// Index of the segment under the top pointer after rotating by `rotation` degrees.
pub fn winning_index(rotation: f64, k: usize) -> Option<usize> {
    if k == 0 || !rotation.is_finite() {
        return None;
    }
    let sector = 360.0 / k as f64;
    let at_pointer = (360.0 - rotation.rem_euclid(360.0)).rem_euclid(360.0);
    let index = (at_pointer / sector).floor() as usize;
    Some(index.min(k - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn whole_turns_land_on_first_segment() {
        assert_eq!(winning_index(0.0, 8), Some(0));
        assert_eq!(winning_index(1800.0, 8), Some(0));
    }

    #[test]
    fn pointer_reads_counterclockwise() {
        // a 10° turn brings the last segment under the pointer
        assert_eq!(winning_index(10.0, 8), Some(7));
        assert_eq!(winning_index(360.0 - 50.0, 8), Some(1));
        assert_eq!(winning_index(90.0, 4), Some(3));
    }

    #[test]
    fn result_always_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for k in 1..=12 {
            for _ in 0..200 {
                let r: f64 = rng.gen_range(0.0..100_000.0);
                let i = winning_index(r, k).unwrap();
                assert!(i < k);
            }
        }
        assert_eq!(winning_index(45.0, 0), None);
        assert_eq!(winning_index(f64::NAN, 8), None);
    }

    #[test]
    fn no_result_until_spin_settles() {
        let config = WheelConfig::default();
        let mut wheel = SpinWheel::date_planner(&config);
        let draw = SpinDraw { extra_revolutions: 5, offset_deg: 0.0 };
        assert_eq!(wheel.spin_with(draw, 0.0), Some(1800.0));
        assert!(wheel.result().is_none());
        assert!(wheel.tick(2999.0).is_none());
        assert_eq!(wheel.tick(3000.0).map(|a| a.label), Some("Street Food"));
        assert_eq!(wheel.result().map(|a| a.id), Some("eat"));
    }

    #[test]
    fn overlapping_spin_is_rejected() {
        let config = WheelConfig::default();
        let mut wheel = SpinWheel::date_planner(&config);
        let mut rng = StdRng::seed_from_u64(8);
        let first = wheel.spin(&config, &mut rng, 0.0).unwrap();
        assert_eq!(wheel.spin(&config, &mut rng, 1000.0), None);
        assert_eq!(wheel.rotation(), first);
        assert_eq!(wheel.spins(), 1);
    }

    #[test]
    fn rotation_is_monotonic_across_spins() {
        let config = WheelConfig::default();
        let mut wheel = SpinWheel::date_planner(&config);
        let mut rng = StdRng::seed_from_u64(21);
        let mut now = 0.0;
        let mut last = wheel.rotation();
        for _ in 0..20 {
            let target = wheel.spin(&config, &mut rng, now).unwrap();
            let gained = target - last;
            assert!((5.0 * 360.0..8.0 * 360.0).contains(&gained));
            last = target;
            now += config.spin_duration_ms;
            let landed = wheel.tick(now).cloned().unwrap();
            assert_eq!(Some(&landed), wheel.result());
        }
    }

    #[test]
    fn new_duration_applies_to_the_next_spin_only() {
        let mut config = WheelConfig::default();
        let mut wheel = SpinWheel::date_planner(&config);
        let draw = SpinDraw { extra_revolutions: 5, offset_deg: 10.0 };
        wheel.spin_with(draw, 0.0).unwrap();
        config.spin_duration_ms = 1000.0;
        wheel.set_spin_duration(config.spin_duration_ms);
        assert!(wheel.tick(1000.0).is_none());
        assert!(wheel.tick(3000.0).is_some());

        let second = wheel.spin_with(draw, 4000.0).unwrap();
        assert_eq!(second, 2.0 * draw.degrees());
        assert!(wheel.tick(5000.0).is_some());
    }

    #[test]
    fn stop_keeps_the_rotation() {
        let config = WheelConfig::default();
        let mut wheel = SpinWheel::date_planner(&config);
        let draw = SpinDraw { extra_revolutions: 6, offset_deg: 45.0 };
        let first = wheel.spin_with(draw, 0.0).unwrap();
        wheel.stop();
        assert_eq!(wheel.phase(), WheelPhase::Idle);
        assert_eq!(wheel.rotation(), first);
        assert!(wheel.spin_with(draw, 10.0).unwrap() > first);
    }

    #[test]
    fn empty_wheel_never_spins() {
        let config = WheelConfig::default();
        let mut wheel = SpinWheel::new(Vec::new(), &config);
        let draw = SpinDraw { extra_revolutions: 5, offset_deg: 10.0 };
        assert_eq!(wheel.spin_with(draw, 0.0), None);
        assert_eq!(wheel.phase(), WheelPhase::Idle);
    }
}
