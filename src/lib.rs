//! Neon Runner - a side-scrolling thrust-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `config`: Named tunables, gameplay policies, fail-fast validation
//!
//! Rendering, input plumbing, and audio are external collaborators: the host
//! feeds [`sim::TickInput`] into [`sim::tick`] at a fixed rate, reads the
//! post-tick [`sim::GameState`] and drains the tick's [`sim::SoundCue`] list.

pub mod config;
pub mod sim;

pub use config::{BoundaryPolicy, Config, ConfigError, DamagePolicy};

/// Game configuration defaults
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Panel dimensions
    pub const PANEL_WIDTH: f32 = 800.0;
    pub const PANEL_HEIGHT: f32 = 600.0;

    /// Player craft defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    pub const PLAYER_START_X: f32 = 100.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.3;
    /// Velocity drag factor applied each tick
    pub const DAMPENING: f32 = 0.98;
    /// Vertical velocity set by a thrust (negative = up)
    pub const THRUST_IMPULSE: f32 = -8.0;
    /// Falling faster than this gets the stronger recovery thrust
    pub const RECOVERY_FALL_SPEED: f32 = 4.0;
    /// Fall speed cap
    pub const MAX_FALL_SPEED: f32 = 7.0;
    /// Rise speed cap (above the strongest boosted thrust)
    pub const MAX_RISE_SPEED: f32 = 15.0;
    pub const MAX_HEALTH: u8 = 3;
    /// Damage immunity window after a hit (1.5 s)
    pub const INVULNERABILITY_TICKS: u32 = 90;
    /// Boost power-up duration (5 s)
    pub const BOOST_TICKS: u32 = 300;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    pub const OBSTACLE_SPEED: f32 = 3.0;
    pub const GAP_MIN: f32 = 150.0;
    pub const GAP_MAX: f32 = 200.0;
    pub const GAP_NARROW: f32 = 120.0;
    /// Gap never starts closer than this to either panel edge
    pub const GAP_MARGIN: f32 = 50.0;
    /// Spawn floor: keep at least this many obstacles in flight
    pub const MIN_OBSTACLES: usize = 3;
    /// Minimum horizontal distance between consecutive spawns
    pub const MIN_OBSTACLE_SPACING: f32 = 250.0;

    /// Obstacle pattern staging: double spawns past this score
    pub const DOUBLE_PATTERN_SCORE: u64 = 15;
    pub const DOUBLE_PATTERN_CHANCE: f64 = 0.4;
    pub const DOUBLE_PATTERN_OFFSET: f32 = 250.0;
    /// Narrow-gapped doubles past this score
    pub const NARROW_PATTERN_SCORE: u64 = 30;
    pub const NARROW_PATTERN_CHANCE: f64 = 0.3;
    pub const NARROW_PATTERN_OFFSET: f32 = 300.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    /// Chaser craft is wider than the base size
    pub const CHASER_EXTRA_WIDTH: f32 = 10.0;
    pub const ENEMY_BASE_SPEED: f32 = 3.0;
    /// Sample points for the chaser's line-of-sight check
    pub const LOS_SAMPLES: u32 = 8;
    pub const ENEMY_SPAWN_CHANCE: f64 = 0.01;
    /// Kind staging: drifters join past this score
    pub const DRIFTER_UNLOCK_SCORE: u64 = 10;
    /// Chasers join past this score
    pub const CHASER_UNLOCK_SCORE: u64 = 20;
    /// Oscillator share of the two-kind mix
    pub const MID_OSCILLATOR_WEIGHT: f64 = 0.7;
    /// Oscillator/drifter shares of the three-kind mix; chasers get the rest
    pub const LATE_OSCILLATOR_WEIGHT: f64 = 0.5;
    pub const LATE_DRIFTER_WEIGHT: f64 = 0.3;

    /// Power-up defaults
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.003;
    /// Heal share of an ordinary power-up spawn
    pub const POWERUP_HEAL_CHANCE: f64 = 0.5;
    /// Heal share when the player is on their last health point
    pub const LOW_HEALTH_HEAL_BIAS: f64 = 0.7;
    /// Cosmetic pulse advance per tick
    pub const PULSE_STEP: f32 = 0.05;

    /// Scoring
    pub const OBSTACLE_SCORE: u64 = 10;
    pub const POWERUP_SCORE: u64 = 5;
    /// Combo multiplier countdown (3 s)
    pub const MULTIPLIER_TICKS: u32 = 180;
}
