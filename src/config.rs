//! Game configuration and policies
//!
//! Every tunable the simulation consumes lives here as a named field, so tests
//! and hosts can adjust behavior without recompiling. Validation happens once
//! at session start; a config that cannot produce a playable panel is rejected
//! with a descriptive error rather than silently clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// What happens to the player craft at the top/bottom panel edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryPolicy {
    /// Clamp position and reflect velocity at half strength
    #[default]
    ClampBounce,
    /// Clamp position and zero velocity
    ClampStop,
}

/// What an obstacle touch does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DamagePolicy {
    /// Deduct one health point (subject to invulnerability/boost)
    #[default]
    HealthBar,
    /// End the run immediately
    InstantGameOver,
}

/// All simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub panel_width: f32,
    pub panel_height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_start_x: f32,
    pub gravity: f32,
    pub dampening: f32,
    pub thrust_impulse: f32,
    pub recovery_fall_speed: f32,
    pub max_fall_speed: f32,
    pub max_rise_speed: f32,
    pub max_health: u8,
    pub invulnerability_ticks: u32,
    pub boost_ticks: u32,
    pub boundary_policy: BoundaryPolicy,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub gap_min: f32,
    pub gap_max: f32,
    pub gap_narrow: f32,
    pub gap_margin: f32,
    pub min_obstacles: usize,
    pub min_obstacle_spacing: f32,
    pub damage_policy: DamagePolicy,
    /// Score past which double spawns may appear, and their chance/offset
    pub double_pattern_score: u64,
    pub double_pattern_chance: f64,
    pub double_pattern_offset: f32,
    /// Score past which the double's second gap may be the narrow one
    pub narrow_pattern_score: u64,
    pub narrow_pattern_chance: f64,
    pub narrow_pattern_offset: f32,

    // === Enemies ===
    pub enemy_size: f32,
    pub chaser_extra_width: f32,
    pub enemy_base_speed: f32,
    pub los_samples: u32,
    pub enemy_spawn_chance: f64,
    /// Scores at which the tougher kinds join the spawn mix
    pub drifter_unlock_score: u64,
    pub chaser_unlock_score: u64,
    /// Oscillator share while only two kinds are unlocked
    pub mid_oscillator_weight: f64,
    /// Oscillator/drifter shares once all three are unlocked; chasers get
    /// whatever remains
    pub late_oscillator_weight: f64,
    pub late_drifter_weight: f64,
    /// Test each enemy step against obstacles instead of letting them tunnel
    pub obstacle_aware_enemies: bool,

    // === Power-ups ===
    pub powerup_size: f32,
    pub powerup_spawn_chance: f64,
    /// Heal share of an ordinary spawn
    pub powerup_heal_chance: f64,
    /// Heal share while the player is on their last health point
    pub low_health_heal_bias: f64,
    pub pulse_step: f32,

    // === Scoring ===
    pub obstacle_score: u64,
    pub powerup_score: u64,
    pub multiplier_ticks: u32,

    /// Anti-stalling heuristic: end the run after this many consecutive ticks
    /// pinned at a vertical bound with near-zero velocity. `None` disables it.
    pub stuck_timeout_ticks: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            panel_height: PANEL_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_start_x: PLAYER_START_X,
            gravity: GRAVITY,
            dampening: DAMPENING,
            thrust_impulse: THRUST_IMPULSE,
            recovery_fall_speed: RECOVERY_FALL_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            max_rise_speed: MAX_RISE_SPEED,
            max_health: MAX_HEALTH,
            invulnerability_ticks: INVULNERABILITY_TICKS,
            boost_ticks: BOOST_TICKS,
            boundary_policy: BoundaryPolicy::default(),

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            gap_narrow: GAP_NARROW,
            gap_margin: GAP_MARGIN,
            min_obstacles: MIN_OBSTACLES,
            min_obstacle_spacing: MIN_OBSTACLE_SPACING,
            damage_policy: DamagePolicy::default(),
            double_pattern_score: DOUBLE_PATTERN_SCORE,
            double_pattern_chance: DOUBLE_PATTERN_CHANCE,
            double_pattern_offset: DOUBLE_PATTERN_OFFSET,
            narrow_pattern_score: NARROW_PATTERN_SCORE,
            narrow_pattern_chance: NARROW_PATTERN_CHANCE,
            narrow_pattern_offset: NARROW_PATTERN_OFFSET,

            enemy_size: ENEMY_SIZE,
            chaser_extra_width: CHASER_EXTRA_WIDTH,
            enemy_base_speed: ENEMY_BASE_SPEED,
            los_samples: LOS_SAMPLES,
            enemy_spawn_chance: ENEMY_SPAWN_CHANCE,
            drifter_unlock_score: DRIFTER_UNLOCK_SCORE,
            chaser_unlock_score: CHASER_UNLOCK_SCORE,
            mid_oscillator_weight: MID_OSCILLATOR_WEIGHT,
            late_oscillator_weight: LATE_OSCILLATOR_WEIGHT,
            late_drifter_weight: LATE_DRIFTER_WEIGHT,
            obstacle_aware_enemies: true,

            powerup_size: POWERUP_SIZE,
            powerup_spawn_chance: POWERUP_SPAWN_CHANCE,
            powerup_heal_chance: POWERUP_HEAL_CHANCE,
            low_health_heal_bias: LOW_HEALTH_HEAL_BIAS,
            pulse_step: PULSE_STEP,

            obstacle_score: OBSTACLE_SCORE,
            powerup_score: POWERUP_SCORE,
            multiplier_ticks: MULTIPLIER_TICKS,

            stuck_timeout_ticks: None,
        }
    }
}

/// A configuration that cannot produce a playable session
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("panel must have positive dimensions, got {width}x{height}")]
    InvalidPanel { width: f32, height: f32 },

    #[error("gap range is empty: gap_min {min} > gap_max {max}")]
    EmptyGapRange { min: f32, max: f32 },

    #[error(
        "no valid gap position: gap_max {gap_max} + 2 * gap_margin {margin} \
         exceeds panel height {panel_height}"
    )]
    GapTooTall {
        gap_max: f32,
        margin: f32,
        panel_height: f32,
    },

    #[error("gap_min {gap_min} is too tight for the {player_height} tall player")]
    GapTooNarrow { gap_min: f32, player_height: f32 },

    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidChance { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

impl Config {
    /// Validate the configuration, failing fast on anything unplayable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel_width <= 0.0 || self.panel_height <= 0.0 {
            return Err(ConfigError::InvalidPanel {
                width: self.panel_width,
                height: self.panel_height,
            });
        }
        if self.gap_min > self.gap_max {
            return Err(ConfigError::EmptyGapRange {
                min: self.gap_min,
                max: self.gap_max,
            });
        }
        if self.gap_max + 2.0 * self.gap_margin > self.panel_height {
            return Err(ConfigError::GapTooTall {
                gap_max: self.gap_max,
                margin: self.gap_margin,
                panel_height: self.panel_height,
            });
        }
        // The narrow gap is the tightest passage the spawner may produce
        if self.gap_narrow.min(self.gap_min) < self.player_height {
            return Err(ConfigError::GapTooNarrow {
                gap_min: self.gap_narrow.min(self.gap_min),
                player_height: self.player_height,
            });
        }
        for (name, value) in [
            ("enemy_spawn_chance", self.enemy_spawn_chance),
            ("powerup_spawn_chance", self.powerup_spawn_chance),
            ("double_pattern_chance", self.double_pattern_chance),
            ("narrow_pattern_chance", self.narrow_pattern_chance),
            ("mid_oscillator_weight", self.mid_oscillator_weight),
            ("late_oscillator_weight", self.late_oscillator_weight),
            ("late_drifter_weight", self.late_drifter_weight),
            ("powerup_heal_chance", self.powerup_heal_chance),
            ("low_health_heal_bias", self.low_health_heal_bias),
            (
                "late_oscillator_weight + late_drifter_weight",
                self.late_oscillator_weight + self.late_drifter_weight,
            ),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidChance { name, value });
            }
        }
        for (name, value) in [
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_width", self.obstacle_width),
            ("enemy_base_speed", self.enemy_base_speed),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        Ok(())
    }
}
