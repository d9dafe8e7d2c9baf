//! The player craft: vertical physics, health, and effect timers
//!
//! Only the y axis is simulated; the craft holds a fixed x while the world
//! scrolls past it. Effect flags (invulnerable, boosted) are derived from
//! their tick counters rather than stored, so flag and timer cannot drift.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Aabb;
use crate::config::{BoundaryPolicy, Config};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick (negative = up)
    pub vel_y: f32,
    pub health: u8,
    /// Damage immunity ticks remaining (0 = vulnerable)
    pub invuln_ticks: u32,
    /// Boost effect ticks remaining (0 = inactive)
    pub boost_ticks: u32,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.player_start_x, config.panel_height / 2.0),
            vel_y: 0.0,
            health: config.max_health,
            invuln_ticks: 0,
            boost_ticks: 0,
        }
    }

    /// Restore the craft to its session-start state
    pub fn reset(&mut self, config: &Config) {
        *self = Self::new(config);
    }

    pub fn boosted(&self) -> bool {
        self.boost_ticks > 0
    }

    pub fn invulnerable(&self) -> bool {
        self.invuln_ticks > 0
    }

    /// Advance one tick: timers, gravity, drag, integration, boundary policy
    pub fn update(&mut self, config: &Config) {
        if self.invuln_ticks > 0 {
            self.invuln_ticks -= 1;
        }
        if self.boost_ticks > 0 {
            self.boost_ticks -= 1;
        }

        self.vel_y += config.gravity;
        self.vel_y *= config.dampening;
        self.vel_y = self
            .vel_y
            .clamp(-config.max_rise_speed, config.max_fall_speed);

        self.pos.y += self.vel_y;

        let floor = config.panel_height - config.player_height;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel_y = match config.boundary_policy {
                BoundaryPolicy::ClampBounce => self.vel_y.abs() * 0.5,
                BoundaryPolicy::ClampStop => 0.0,
            };
        } else if self.pos.y > floor {
            self.pos.y = floor;
            self.vel_y = match config.boundary_policy {
                BoundaryPolicy::ClampBounce => -self.vel_y.abs() * 0.5,
                BoundaryPolicy::ClampStop => 0.0,
            };
        }
    }

    /// Apply an upward impulse. Falling fast earns a stronger recovery kick,
    /// and an active boost amplifies both.
    pub fn thrust(&mut self, config: &Config) {
        let falling_fast = self.vel_y > config.recovery_fall_speed;
        let multiplier = match (self.boosted(), falling_fast) {
            (true, true) => 1.8,
            (true, false) => 1.5,
            (false, true) => 1.3,
            (false, false) => 1.0,
        };
        self.vel_y = config.thrust_impulse * multiplier;
    }

    /// Deduct one health point unless protected. Returns true if the hit
    /// landed; the invulnerability window opens on a landed hit.
    pub fn take_damage(&mut self, config: &Config) -> bool {
        if self.invulnerable() || self.boosted() || self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.invuln_ticks = config.invulnerability_ticks;
        true
    }

    /// Restore one health point, capped at the maximum
    pub fn heal(&mut self, config: &Config) {
        if self.health < config.max_health {
            self.health += 1;
        }
    }

    pub fn activate_boost(&mut self, config: &Config) {
        self.boost_ticks = config.boost_ticks;
    }

    /// Whether the craft is pinned at a vertical bound with no motion left
    pub fn stuck_at_boundary(&self, config: &Config) -> bool {
        let floor = config.panel_height - config.player_height;
        (self.pos.y <= 0.0 || self.pos.y >= floor) && self.vel_y.abs() < 0.1
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, config.player_width, config.player_height)
    }
}
