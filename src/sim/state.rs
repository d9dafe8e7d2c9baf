//! Game state and core simulation types
//!
//! All state that drives the simulation lives here; the post-tick value of
//! `GameState` is the snapshot a renderer reads.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::obstacle::Obstacle;
use super::player::Player;
use super::powerup::PowerUp;
use crate::config::{Config, ConfigError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; waiting for a restart input
    GameOver,
}

/// Discrete sound-cue identifiers emitted during a tick.
///
/// The core never performs audio I/O; an audio collaborator drains these
/// after each tick and synthesizes whatever it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Player thrust fired
    Jump,
    /// A hit landed on the player
    Hit,
    /// Power-up collected
    PowerUp,
    /// Run ended
    GameOver,
    /// Combo multiplier advanced
    Multiplier,
    /// Session restarted from game over
    Restart,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Jump => "jump",
            SoundCue::Hit => "hit",
            SoundCue::PowerUp => "powerup",
            SoundCue::GameOver => "gameover",
            SoundCue::Multiplier => "multiplier",
            SoundCue::Restart => "restart",
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session configuration (validated at construction)
    pub config: Config,
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only randomness source; identical seed + inputs replay identically
    pub(crate) rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Insertion order = spawn order; only `tick` adds or removes
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    pub score: u64,
    /// Best score across restarts of this session (in-memory only)
    pub high_score: u64,
    /// Combo multiplier; advances per cleared obstacle, resets on hit/timeout
    pub multiplier: u32,
    /// Ticks until the multiplier falls back to 1
    pub multiplier_ticks: u32,
    /// Consecutive ticks spent pinned at a vertical bound (anti-stalling)
    pub(crate) stuck_ticks: u32,
    /// Sound cues emitted by the most recent tick
    #[serde(skip)]
    pub(crate) events: Vec<SoundCue>,
}

impl GameState {
    /// Create a session with the given config and seed.
    ///
    /// Fails fast on an unplayable configuration.
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = Player::new(&config);
        log::info!("new session: seed {seed}");
        Ok(Self {
            player,
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Running,
            obstacles: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            score: 0,
            high_score: 0,
            multiplier: 1,
            multiplier_ticks: 0,
            stuck_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Begin a fresh run after game over: restore the player, clear every
    /// entity collection, reset score and multiplier. The high score and the
    /// RNG stream survive.
    pub(crate) fn restart(&mut self) {
        log::info!("restart; best so far {}", self.high_score);
        self.player.reset(&self.config);
        self.obstacles.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.score = 0;
        self.multiplier = 1;
        self.multiplier_ticks = 0;
        self.stuck_ticks = 0;
        self.phase = GamePhase::Running;
    }

    /// Drain the sound cues emitted during the most recent tick
    pub fn take_sound_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.events)
    }
}
