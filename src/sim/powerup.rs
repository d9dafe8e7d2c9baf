//! Scrolling pickups: boost and heal
//!
//! The pulse value is purely cosmetic; it feeds the renderer's glow and has no
//! effect on collision or timing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Amplified thrust and damage immunity for a fixed duration
    Boost,
    /// Restore one health point
    Heal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    /// Cosmetic glow intensity in [0, 1]
    pub pulse: f32,
    pulse_rising: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            kind,
            pulse: 0.0,
            pulse_rising: true,
        }
    }

    pub fn update(&mut self, config: &Config) {
        self.pos.x -= config.obstacle_speed;

        if self.pulse_rising {
            self.pulse += config.pulse_step;
            if self.pulse >= 1.0 {
                self.pulse = 1.0;
                self.pulse_rising = false;
            }
        } else {
            self.pulse -= config.pulse_step;
            if self.pulse <= 0.0 {
                self.pulse = 0.0;
                self.pulse_rising = true;
            }
        }
    }

    pub fn is_off_screen(&self, config: &Config) -> bool {
        self.pos.x + config.powerup_size < 0.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, config.powerup_size, config.powerup_size)
    }

    pub fn collides_with(&self, bounds: &Aabb, config: &Config) -> bool {
        self.bounds(config).intersects(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_in_unit_range() {
        let config = Config::default();
        let mut powerup = PowerUp::new(Vec2::new(400.0, 300.0), PowerUpKind::Heal);
        let mut seen_high = false;
        let mut seen_low = false;
        for _ in 0..100 {
            powerup.update(&config);
            assert!((0.0..=1.0).contains(&powerup.pulse));
            if powerup.pulse >= 1.0 {
                seen_high = true;
            }
            if seen_high && powerup.pulse <= 0.0 {
                seen_low = true;
            }
        }
        // Full oscillation completes within 100 ticks at the default step
        assert!(seen_high && seen_low);
    }

    #[test]
    fn test_scrolls_left() {
        let config = Config::default();
        let mut powerup = PowerUp::new(Vec2::new(10.0, 300.0), PowerUpKind::Boost);
        powerup.update(&config);
        assert_eq!(powerup.pos.x, 10.0 - config.obstacle_speed);
        for _ in 0..20 {
            powerup.update(&config);
        }
        assert!(powerup.is_off_screen(&config));
    }

    #[test]
    fn test_pickup_collision() {
        let config = Config::default();
        let powerup = PowerUp::new(Vec2::new(100.0, 100.0), PowerUpKind::Heal);
        let player = Aabb::new(95.0, 95.0, config.player_width, config.player_height);
        assert!(powerup.collides_with(&player, &config));
        let far = Aabb::new(300.0, 300.0, config.player_width, config.player_height);
        assert!(!powerup.collides_with(&far, &config));
    }
}
