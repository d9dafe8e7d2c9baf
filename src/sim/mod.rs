//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the state
//! - Insertion-order iteration over entity collections
//! - No rendering, audio, or platform dependencies

pub mod enemy;
pub mod geom;
pub mod obstacle;
pub mod player;
pub mod powerup;
pub mod state;
pub mod tick;

pub use enemy::{Enemy, EnemyKind};
pub use geom::Aabb;
pub use obstacle::Obstacle;
pub use player::Player;
pub use powerup::{PowerUp, PowerUpKind};
pub use state::{GamePhase, GameState, SoundCue};
pub use tick::{TickInput, tick};
