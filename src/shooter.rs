//! "Shoot your partner" arcade round.
//!
//! Everything lives in a 0-100 percent space so the page can draw it on a
//! canvas of any size. The player sits at the bottom, the target bounces
//! along the top, and bad-vibe obstacles drift down in between. One call
//! to [`Shooter::step`] is one animation frame.

use rand::Rng;
use serde::Serialize;

use crate::config::ShooterConfig;

pub const DEFAULT_PLAYER_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/616/616408.png";
pub const DEFAULT_TARGET_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/616/616430.png";

pub const PLAYER_Y: f64 = 90.0;
pub const TARGET_Y: f64 = 10.0;
const PLAYER_MIN_X: f64 = 5.0;
const PLAYER_MAX_X: f64 = 95.0;
const TARGET_MIN_X: f64 = 10.0;
const TARGET_MAX_X: f64 = 90.0;
const TARGET_SPEED: f64 = 1.0;
const BULLET_SPAWN_Y: f64 = 85.0;
const BULLET_SPEED: f64 = 2.0;
const BULLET_EXIT_Y: f64 = -10.0;
const OBSTACLE_SPAWN_Y: f64 = -10.0;
const OBSTACLE_EXIT_Y: f64 = 110.0;
const TARGET_HIT_RADIUS: f64 = 8.0;
const OBSTACLE_HIT_RADIUS: f64 = 5.0;
const POINTS_PER_HIT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bullet {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ObstacleKind {
    Cloud,
    Bolt,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub kind: ObstacleKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ShooterPhase {
    Setup,
    Playing,
    Won,
    Lost,
}

/// Things that happened during one frame, for the page's effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FrameEvents {
    pub target_hits: u32,
    pub obstacles_destroyed: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct Shooter {
    phase: ShooterPhase,
    player_x: f64,
    target_x: f64,
    target_dir: f64,
    bullets: Vec<Bullet>,
    obstacles: Vec<Obstacle>,
    score: u32,
    ends_at: f64,
    last_shot: Option<f64>,
    player_image: String,
    target_image: String,
    #[serde(skip)]
    config: ShooterConfig,
}

impl Shooter {
    pub fn new(config: &ShooterConfig) -> Self {
        Self {
            phase: ShooterPhase::Setup,
            player_x: 50.0,
            target_x: 50.0,
            target_dir: 1.0,
            bullets: Vec::new(),
            obstacles: Vec::new(),
            score: 0,
            ends_at: 0.0,
            last_shot: None,
            player_image: DEFAULT_PLAYER_IMAGE.to_string(),
            target_image: DEFAULT_TARGET_IMAGE.to_string(),
            config: config.clone(),
        }
    }

    /// Swap in custom avatars (data URLs from an upload, or plain links).
    pub fn set_images(&mut self, player: Option<String>, target: Option<String>) {
        if let Some(player) = player {
            self.player_image = player;
        }
        if let Some(target) = target {
            self.target_image = target;
        }
    }

    /// Begin (or restart) a timed round.
    pub fn start(&mut self, now: f64) {
        self.phase = ShooterPhase::Playing;
        self.player_x = 50.0;
        self.target_x = 50.0;
        self.target_dir = 1.0;
        self.bullets.clear();
        self.obstacles.clear();
        self.score = 0;
        self.last_shot = None;
        self.ends_at = now + self.config.round_secs * 1000.0;
    }

    /// Follow the pointer; `x` is a percentage of the canvas width.
    pub fn move_player(&mut self, x: f64) {
        if x.is_finite() {
            self.player_x = x.clamp(PLAYER_MIN_X, PLAYER_MAX_X);
        }
    }

    /// Fire from the player's position, rate-limited by the cooldown.
    pub fn shoot(&mut self, now: f64) -> bool {
        if self.phase != ShooterPhase::Playing {
            return false;
        }
        if let Some(last) = self.last_shot {
            if now - last <= self.config.fire_cooldown_ms {
                return false;
            }
        }
        self.bullets.push(Bullet {
            x: self.player_x,
            y: BULLET_SPAWN_Y,
        });
        self.last_shot = Some(now);
        true
    }

    /// Advance one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R, now: f64) -> FrameEvents {
        let mut events = FrameEvents::default();
        if self.phase != ShooterPhase::Playing {
            return events;
        }
        if now >= self.ends_at {
            self.phase = ShooterPhase::Lost;
            return events;
        }

        self.target_x += TARGET_SPEED * self.target_dir;
        if self.target_x > TARGET_MAX_X || self.target_x < TARGET_MIN_X {
            self.target_dir = -self.target_dir;
        }

        if rng.gen_bool(self.config.obstacle_spawn_chance.clamp(0.0, 1.0)) {
            self.obstacles.push(Obstacle {
                x: rng.gen_range(0.0..100.0),
                y: OBSTACLE_SPAWN_Y,
                speed: rng.gen_range(0.5..1.0),
                kind: if rng.gen_bool(0.5) {
                    ObstacleKind::Cloud
                } else {
                    ObstacleKind::Bolt
                },
            });
        }
        for obstacle in &mut self.obstacles {
            obstacle.y += obstacle.speed;
        }
        self.obstacles.retain(|o| o.y <= OBSTACLE_EXIT_Y);
        for bullet in &mut self.bullets {
            bullet.y -= BULLET_SPEED;
        }
        self.bullets.retain(|b| b.y >= BULLET_EXIT_Y);

        let target_x = self.target_x;
        let obstacles = &mut self.obstacles;
        self.bullets.retain(|b| {
            if distance(b.x, b.y, target_x, TARGET_Y) < TARGET_HIT_RADIUS {
                events.target_hits += 1;
                return false;
            }
            match obstacles
                .iter()
                .position(|o| distance(b.x, b.y, o.x, o.y) < OBSTACLE_HIT_RADIUS)
            {
                Some(i) => {
                    obstacles.remove(i);
                    events.obstacles_destroyed += 1;
                    false
                }
                None => true,
            }
        });

        self.score += events.target_hits * POINTS_PER_HIT;
        if self.score >= self.config.winning_score {
            self.phase = ShooterPhase::Won;
        }
        events
    }

    /// Whole seconds left on the round clock.
    pub fn time_left_secs(&self, now: f64) -> u32 {
        match self.phase {
            ShooterPhase::Playing => ((self.ends_at - now) / 1000.0).ceil().max(0.0) as u32,
            ShooterPhase::Setup => self.config.round_secs.ceil() as u32,
            ShooterPhase::Won | ShooterPhase::Lost => 0,
        }
    }

    pub fn phase(&self) -> ShooterPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn player_x(&self) -> f64 {
        self.player_x
    }

    pub fn target_x(&self) -> f64 {
        self.target_x
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn player_image(&self) -> &str {
        &self.player_image
    }

    pub fn target_image(&self) -> &str {
        &self.target_image
    }
}

fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn calm() -> ShooterConfig {
        ShooterConfig {
            obstacle_spawn_chance: 0.0,
            ..ShooterConfig::default()
        }
    }

    fn playing(config: &ShooterConfig) -> Shooter {
        let mut game = Shooter::new(config);
        game.start(0.0);
        game
    }

    #[test]
    fn setup_ignores_input() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut game = Shooter::new(&calm());
        assert!(!game.shoot(0.0));
        assert_eq!(game.step(&mut rng, 16.0), FrameEvents::default());
        assert_eq!(game.phase(), ShooterPhase::Setup);
        assert_eq!(game.time_left_secs(0.0), 60);
    }

    #[test]
    fn player_is_clamped() {
        let mut game = playing(&calm());
        game.move_player(-20.0);
        assert_eq!(game.player_x(), 5.0);
        game.move_player(120.0);
        assert_eq!(game.player_x(), 95.0);
        game.move_player(f64::NAN);
        assert_eq!(game.player_x(), 95.0);
    }

    #[test]
    fn fire_rate_is_limited() {
        let mut game = playing(&calm());
        assert!(game.shoot(1000.0));
        assert!(!game.shoot(1200.0));
        assert!(!game.shoot(1300.0));
        assert!(game.shoot(1301.0));
        assert_eq!(game.bullets().len(), 2);
        assert_eq!(game.bullets()[0].y, 85.0);
    }

    #[test]
    fn target_bounces_between_rails() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = playing(&calm());
        let mut seen_left = false;
        for frame in 0..400 {
            game.step(&mut rng, frame as f64 * 16.0);
            assert!((9.0..=91.0).contains(&game.target_x()));
            seen_left |= game.target_x() < 20.0;
        }
        assert!(seen_left);
    }

    #[test]
    fn bullet_hit_scores_ten() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut game = playing(&calm());
        game.bullets.push(Bullet { x: game.target_x, y: 12.0 });
        let events = game.step(&mut rng, 16.0);
        assert_eq!(events.target_hits, 1);
        assert_eq!(game.score(), 10);
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn reaching_winning_score_wins() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = playing(&calm());
        game.score = 90;
        game.bullets.push(Bullet { x: game.target_x, y: 12.0 });
        game.step(&mut rng, 16.0);
        assert_eq!(game.phase(), ShooterPhase::Won);
        assert!(!game.shoot(100.0));
    }

    #[test]
    fn bullets_and_obstacles_cancel_out() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game = playing(&calm());
        game.obstacles.push(Obstacle {
            x: 30.0,
            y: 50.0,
            speed: 0.5,
            kind: ObstacleKind::Cloud,
        });
        game.bullets.push(Bullet { x: 30.0, y: 52.0 });
        let events = game.step(&mut rng, 16.0);
        assert_eq!(events.obstacles_destroyed, 1);
        assert!(game.obstacles().is_empty());
        assert!(game.bullets().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn spent_bullets_leave_the_field() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = playing(&calm());
        game.move_player(5.0);
        game.shoot(0.0);
        for frame in 1..=60 {
            game.step(&mut rng, frame as f64 * 16.0);
        }
        assert!(game.bullets().is_empty());
    }

    #[test]
    fn obstacles_spawn_above_the_field() {
        let mut rng = StdRng::seed_from_u64(6);
        let config = ShooterConfig {
            obstacle_spawn_chance: 1.0,
            ..ShooterConfig::default()
        };
        let mut game = playing(&config);
        game.step(&mut rng, 16.0);
        let o = game.obstacles()[0];
        assert!((0.5..1.0).contains(&o.speed));
        assert!((o.y - (-10.0 + o.speed)).abs() < 1e-12);
    }

    #[test]
    fn clock_running_out_loses() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = playing(&calm());
        assert_eq!(game.time_left_secs(0.0), 60);
        assert_eq!(game.time_left_secs(59_500.0), 1);
        game.step(&mut rng, 60_000.0);
        assert_eq!(game.phase(), ShooterPhase::Lost);
        assert_eq!(game.time_left_secs(60_000.0), 0);
    }
}
