//! Hostile craft: three behavior kinds over shared fields
//!
//! Kinds are a tagged enum with a per-kind velocity function rather than
//! separate types, so behavior stays exhaustively checked. In the
//! obstacle-aware mode every movement step is validated against the
//! obstacles' post-scroll rectangles; a rejected step turns into an inelastic
//! bounce, so an enemy never ends a tick inside an obstacle.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use super::obstacle::Obstacle;
use super::player::Player;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Leftward drift, vertical velocity reflects at the panel bounds
    Oscillator,
    /// Slower drift, bang-bang vertical pursuit while the player is visible
    Chaser,
    /// Leftward drift only; a torpid, turret-like mover
    Drifter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn spawn(kind: EnemyKind, pos: Vec2, config: &Config, rng: &mut Pcg32) -> Self {
        let base = config.enemy_base_speed;
        let vel = match kind {
            EnemyKind::Oscillator => Vec2::new(-base, rng.random_range(-1.0..1.0)),
            EnemyKind::Chaser => Vec2::new(-base * 0.75, 0.0),
            EnemyKind::Drifter => Vec2::new(-base, 0.0),
        };
        Self { pos, vel, kind }
    }

    /// Bounding-box width; the chaser craft is wider than the base size
    pub fn width(&self, config: &Config) -> f32 {
        match self.kind {
            EnemyKind::Chaser => config.enemy_size + config.chaser_extra_width,
            _ => config.enemy_size,
        }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, self.width(config), config.enemy_size)
    }

    /// Per-kind velocity for this tick, before any collision response
    fn next_velocity(&self, player: &Player, obstacles: &[Obstacle], config: &Config) -> Vec2 {
        let base = config.enemy_base_speed;
        match self.kind {
            // Vertical component persists between ticks; reflection happens
            // after the move.
            EnemyKind::Oscillator => Vec2::new(-base, self.vel.y),
            EnemyKind::Chaser => {
                let my_center = self.center(config);
                let target = player_center(player, config);
                let vy = if line_of_sight_clear(my_center, target, obstacles, config) {
                    (player.pos.y - self.pos.y).signum() * base * 0.5
                } else {
                    // Pursuit suppressed while an obstacle blocks the view
                    0.0
                };
                Vec2::new(-base * 0.75, vy)
            }
            EnemyKind::Drifter => Vec2::new(-base, 0.0),
        }
    }

    fn center(&self, config: &Config) -> Vec2 {
        self.pos + Vec2::new(self.width(config) / 2.0, config.enemy_size / 2.0)
    }

    fn clamp_velocity(&mut self, config: &Config) {
        let cap = config.enemy_base_speed;
        self.vel.x = self.vel.x.clamp(-cap, cap);
        self.vel.y = self.vel.y.clamp(-cap, cap);
    }

    /// Advance one tick against the player and the current obstacle set.
    ///
    /// Obstacles are tested at their post-scroll positions: enemies move
    /// before obstacles in the tick order, so pathing against where the
    /// rectangles will be keeps the no-overlap invariant at tick end.
    pub fn update(&mut self, player: &Player, obstacles: &[Obstacle], config: &Config) {
        self.vel = self.next_velocity(player, obstacles, config);
        self.clamp_velocity(config);

        let candidate = self.pos + self.vel;
        if config.obstacle_aware_enemies {
            let candidate_box =
                Aabb::from_pos_size(candidate, self.width(config), config.enemy_size);
            if leftmost_scrolled_hit(&candidate_box, obstacles, config).is_some() {
                // Reject the step and bounce back inelastically
                self.vel = match self.kind {
                    EnemyKind::Drifter => Vec2::ZERO,
                    _ => self.vel * -0.5,
                };
                self.clamp_velocity(config);

                let retreat = self.pos + self.vel;
                let retreat_box =
                    Aabb::from_pos_size(retreat, self.width(config), config.enemy_size);
                if leftmost_scrolled_hit(&retreat_box, obstacles, config).is_none() {
                    self.pos = retreat;
                } else if let Some(face) =
                    leftmost_scrolled_hit(&self.bounds(config), obstacles, config)
                {
                    // A face scrolling over us shoves us flush against it
                    self.pos.x = face - self.width(config);
                }
            } else {
                self.pos = candidate;
            }
        } else {
            self.pos = candidate;
        }

        if self.kind == EnemyKind::Oscillator {
            let floor = config.panel_height - config.enemy_size;
            if self.pos.y <= 0.0 || self.pos.y >= floor {
                self.vel.y = -self.vel.y;
                self.pos.y = self.pos.y.clamp(0.0, floor);
            }
        }
    }

    pub fn is_off_screen(&self, config: &Config) -> bool {
        self.pos.x + self.width(config) < 0.0
    }

    pub fn collides_with(&self, bounds: &Aabb, config: &Config) -> bool {
        self.bounds(config).intersects(bounds)
    }
}

fn player_center(player: &Player, config: &Config) -> Vec2 {
    player.pos + Vec2::new(config.player_width / 2.0, config.player_height / 2.0)
}

/// Discretized line-of-sight: sample points between the two centers and
/// report clear only if none falls inside an obstacle rectangle.
fn line_of_sight_clear(from: Vec2, to: Vec2, obstacles: &[Obstacle], config: &Config) -> bool {
    let samples = config.los_samples.max(1);
    for i in 1..=samples {
        let t = i as f32 / (samples + 1) as f32;
        let point = from.lerp(to, t);
        for obstacle in obstacles {
            if obstacle.top_rect().contains_point(point)
                || obstacle.bottom_rect(config).contains_point(point)
            {
                return false;
            }
        }
    }
    true
}

/// Test a box against every obstacle rect shifted by one tick of scroll.
/// Returns the left edge of the leftmost hit obstacle, for penetration
/// resolution when a scrolling face overtakes an enemy.
fn leftmost_scrolled_hit(bounds: &Aabb, obstacles: &[Obstacle], config: &Config) -> Option<f32> {
    let mut leftmost: Option<f32> = None;
    for obstacle in obstacles {
        let mut scrolled = obstacle.clone();
        scrolled.x -= config.obstacle_speed;
        if scrolled.collides_with(bounds, config) {
            leftmost = Some(leftmost.map_or(scrolled.x, |x: f32| x.min(scrolled.x)));
        }
    }
    leftmost
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn cfg() -> Config {
        Config::default()
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_oscillator_reflects_at_bounds() {
        let config = cfg();
        let mut enemy = Enemy {
            pos: Vec2::new(400.0, 1.0),
            vel: Vec2::new(-config.enemy_base_speed, -1.0),
            kind: EnemyKind::Oscillator,
        };
        enemy.update(&Player::new(&config), &[], &config);
        assert!(enemy.vel.y > 0.0);
        assert!(enemy.pos.y >= 0.0);
    }

    #[test]
    fn test_chaser_pursues_player() {
        let config = cfg();
        let mut player = Player::new(&config);
        player.pos.y = 500.0;
        let mut enemy =
            Enemy::spawn(EnemyKind::Chaser, Vec2::new(400.0, 100.0), &config, &mut rng());
        enemy.update(&player, &[], &config);
        assert_eq!(enemy.vel.y, config.enemy_base_speed * 0.5);

        player.pos.y = 0.0;
        enemy.update(&player, &[], &config);
        assert_eq!(enemy.vel.y, -config.enemy_base_speed * 0.5);
    }

    #[test]
    fn test_chaser_falls_back_to_drift_without_line_of_sight() {
        let config = cfg();
        let mut player = Player::new(&config);
        player.pos = Vec2::new(100.0, 300.0);
        // Wall between the two, with its gap far below the sight line
        let wall = Obstacle {
            x: 250.0,
            gap_y: 500.0,
            gap_height: 80.0,
            width: config.obstacle_width,
        };
        let mut enemy =
            Enemy::spawn(EnemyKind::Chaser, Vec2::new(400.0, 100.0), &config, &mut rng());
        enemy.update(&player, &[wall], &config);
        assert_eq!(enemy.vel.y, 0.0);
    }

    #[test]
    fn test_drifter_moves_straight_left() {
        let config = cfg();
        let mut enemy =
            Enemy::spawn(EnemyKind::Drifter, Vec2::new(400.0, 300.0), &config, &mut rng());
        let start = enemy.pos;
        enemy.update(&Player::new(&config), &[], &config);
        assert_eq!(enemy.pos.y, start.y);
        assert_eq!(enemy.pos.x, start.x - config.enemy_base_speed);
    }

    #[test]
    fn test_step_into_gap_lip_is_rejected() {
        let config = cfg();
        // Wall spanning x 300..380 with the gap at y 200..300; the enemy sits
        // over the bottom rectangle, descending into it
        let wall = Obstacle {
            x: 300.0,
            gap_y: 200.0,
            gap_height: 100.0,
            width: config.obstacle_width,
        };
        let mut enemy = Enemy {
            pos: Vec2::new(330.0, 268.0),
            vel: Vec2::new(-config.enemy_base_speed, 3.0),
            kind: EnemyKind::Oscillator,
        };
        enemy.update(&Player::new(&config), &[wall.clone()], &config);

        let mut scrolled = wall;
        scrolled.x -= config.obstacle_speed;
        assert!(!scrolled.collides_with(&enemy.bounds(&config), &config));
        // Inelastic response: reversed and halved
        assert!(enemy.vel.y < 0.0);
        assert!(enemy.vel.x > 0.0);
    }

    #[test]
    fn test_chaser_overtaken_by_wall_is_shoved_flush() {
        let config = cfg();
        // The wall scrolls faster than a chaser cruises, so it closes in from
        // the right at 0.75 px per tick
        let wall = Obstacle {
            x: 400.0,
            gap_y: 10.0,
            gap_height: 20.0,
            width: config.obstacle_width,
        };
        let mut player = Player::new(&config);
        player.pos.y = 300.0;
        let mut enemy = Enemy {
            pos: Vec2::new(359.5, 300.0),
            vel: Vec2::new(-config.enemy_base_speed * 0.75, 0.0),
            kind: EnemyKind::Chaser,
        };
        enemy.update(&player, &[wall.clone()], &config);

        let mut scrolled = wall;
        scrolled.x -= config.obstacle_speed;
        assert!(!scrolled.collides_with(&enemy.bounds(&config), &config));
        // Flush against the post-scroll face
        assert_eq!(enemy.pos.x, scrolled.x - enemy.width(&config));
    }

    #[test]
    fn test_drifter_response_zeroes_velocity() {
        let config = cfg();
        let wall = Obstacle {
            x: 300.0,
            gap_y: 10.0,
            gap_height: 20.0,
            width: config.obstacle_width,
        };
        // Overlapping start (as if a spawn check were skipped): the response
        // must zero the velocity and resolve the overlap
        let mut enemy = Enemy {
            pos: Vec2::new(330.0, 300.0),
            vel: Vec2::new(-config.enemy_base_speed, 0.0),
            kind: EnemyKind::Drifter,
        };
        enemy.update(&Player::new(&config), &[wall], &config);
        assert_eq!(enemy.vel, Vec2::ZERO);
        assert_eq!(enemy.pos.x, 297.0 - config.enemy_size);
    }

    #[test]
    fn test_tunneling_allowed_without_obstacle_awareness() {
        let config = Config {
            obstacle_aware_enemies: false,
            ..Config::default()
        };
        let wall = Obstacle {
            x: 300.0,
            gap_y: 200.0,
            gap_height: 100.0,
            width: config.obstacle_width,
        };
        let mut enemy = Enemy {
            pos: Vec2::new(330.0, 268.0),
            vel: Vec2::new(-config.enemy_base_speed, 3.0),
            kind: EnemyKind::Oscillator,
        };
        enemy.update(&Player::new(&config), &[wall], &config);
        // Legacy mode: the step commits regardless
        assert_eq!(enemy.pos.y, 271.0);
    }

    #[test]
    fn test_velocity_stays_clamped() {
        let config = cfg();
        let mut enemy = Enemy {
            pos: Vec2::new(400.0, 300.0),
            vel: Vec2::new(-9.0, 8.0),
            kind: EnemyKind::Oscillator,
        };
        enemy.update(&Player::new(&config), &[], &config);
        assert!(enemy.vel.x.abs() <= config.enemy_base_speed);
        assert!(enemy.vel.y.abs() <= config.enemy_base_speed);
    }

    #[test]
    fn test_off_screen_uses_kind_width() {
        let config = cfg();
        let mut enemy = Enemy::spawn(EnemyKind::Chaser, Vec2::ZERO, &config, &mut rng());
        enemy.pos.x = -(config.enemy_size + config.chaser_extra_width) + 1.0;
        assert!(!enemy.is_off_screen(&config));
        enemy.pos.x -= 2.0;
        assert!(enemy.is_off_screen(&config));
    }
}
