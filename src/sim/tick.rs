//! Fixed timestep simulation tick
//!
//! Advances the world one step in a fixed order so runs are deterministic:
//! player, enemies, obstacles, power-ups, collision pass, spawn pass. All
//! tunables are per-tick quantities; the host drives this at the fixed rate.

use glam::Vec2;
use rand::Rng;

use super::enemy::{Enemy, EnemyKind};
use super::obstacle::Obstacle;
use super::powerup::{PowerUp, PowerUpKind};
use super::state::{GamePhase, GameState, SoundCue};
use crate::config::DamagePolicy;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// The one abstract action: thrust while running, restart at game over
    pub primary: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    match state.phase {
        GamePhase::GameOver => {
            // Render-only until an explicit restart
            if input.primary {
                state.restart();
                state.events.push(SoundCue::Restart);
            }
            return;
        }
        GamePhase::Running => {}
    }

    state.time_ticks += 1;

    // Player physics first; the action lands after integration so the craft
    // leaves the tick carrying exactly the thrust impulse
    state.player.update(&state.config);
    if input.primary {
        state.player.thrust(&state.config);
        state.events.push(SoundCue::Jump);
    }

    update_enemies(state);
    update_obstacles(state);
    update_powerups(state);

    collision_pass(state);
    if state.phase != GamePhase::Running {
        return;
    }

    spawn_pass(state);

    if let Some(timeout) = state.config.stuck_timeout_ticks {
        if state.player.stuck_at_boundary(&state.config) {
            state.stuck_ticks += 1;
            if state.stuck_ticks >= timeout {
                log::info!("player stalled at boundary for {timeout} ticks");
                end_run(state);
            }
        } else {
            state.stuck_ticks = 0;
        }
    }
}

fn update_enemies(state: &mut GameState) {
    let (player, obstacles, config) = (&state.player, &state.obstacles, &state.config);
    for enemy in state.enemies.iter_mut() {
        enemy.update(player, obstacles, config);
    }
    let config = &state.config;
    state.enemies.retain(|enemy| !enemy.is_off_screen(config));
}

fn update_obstacles(state: &mut GameState) {
    for obstacle in state.obstacles.iter_mut() {
        obstacle.update(&state.config);
    }

    // Every obstacle that leaves the screen was cleared: award score and
    // advance the combo
    let before = state.obstacles.len();
    state.obstacles.retain(|obstacle| !obstacle.is_off_screen());
    for _ in state.obstacles.len()..before {
        let points = state.config.obstacle_score * state.multiplier as u64;
        state.score += points;
        state.multiplier += 1;
        state.multiplier_ticks = state.config.multiplier_ticks;
        state.events.push(SoundCue::Multiplier);
        log::debug!(
            "obstacle cleared: +{points}, score {}, x{}",
            state.score,
            state.multiplier
        );
    }
    state.high_score = state.high_score.max(state.score);

    if state.multiplier_ticks > 0 {
        state.multiplier_ticks -= 1;
        if state.multiplier_ticks == 0 {
            state.multiplier = 1;
        }
    }
}

fn update_powerups(state: &mut GameState) {
    let config = &state.config;
    for powerup in state.powerups.iter_mut() {
        powerup.update(config);
    }
    state.powerups.retain(|powerup| !powerup.is_off_screen(config));
}

fn collision_pass(state: &mut GameState) {
    let player_bounds = state.player.bounds(&state.config);

    let obstacle_hit = state
        .obstacles
        .iter()
        .any(|obstacle| obstacle.collides_with(&player_bounds, &state.config));
    if obstacle_hit {
        match state.config.damage_policy {
            DamagePolicy::InstantGameOver => {
                end_run(state);
                return;
            }
            DamagePolicy::HealthBar => damage_player(state),
        }
    }
    if state.phase != GamePhase::Running {
        return;
    }

    let enemy_hit = state
        .enemies
        .iter()
        .any(|enemy| enemy.collides_with(&player_bounds, &state.config));
    if enemy_hit {
        damage_player(state);
    }
    if state.phase != GamePhase::Running {
        return;
    }

    let config = &state.config;
    let mut collected = Vec::new();
    state.powerups.retain(|powerup| {
        if powerup.collides_with(&player_bounds, config) {
            collected.push(powerup.kind);
            false
        } else {
            true
        }
    });
    for kind in collected {
        match kind {
            PowerUpKind::Boost => state.player.activate_boost(&state.config),
            PowerUpKind::Heal => state.player.heal(&state.config),
        }
        state.score += state.config.powerup_score;
        state.events.push(SoundCue::PowerUp);
        log::debug!("collected {kind:?}, health {}", state.player.health);
    }
    state.high_score = state.high_score.max(state.score);
}

/// One damage event against the player; a landed hit breaks the combo and
/// may end the run
fn damage_player(state: &mut GameState) {
    if state.player.take_damage(&state.config) {
        state.multiplier = 1;
        state.multiplier_ticks = 0;
        state.events.push(SoundCue::Hit);
        log::debug!("player hit, health {}", state.player.health);
        if state.player.health == 0 {
            end_run(state);
        }
    }
}

fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.events.push(SoundCue::GameOver);
    log::info!("game over at tick {}, final score {}", state.time_ticks, state.score);
}

fn spawn_pass(state: &mut GameState) {
    spawn_obstacles(state);
    spawn_enemies(state);
    spawn_powerups(state);
}

/// Keep the obstacle count at its floor, but never spawn closer than the
/// reaction-distance constraint to the newest obstacle in flight
fn spawn_obstacles(state: &mut GameState) {
    if state.obstacles.len() >= state.config.min_obstacles {
        return;
    }
    let rightmost = state
        .obstacles
        .iter()
        .map(|obstacle| obstacle.x)
        .fold(f32::MIN, f32::max);
    let edge = state.config.panel_width;
    if !state.obstacles.is_empty() && rightmost > edge - state.config.min_obstacle_spacing {
        return;
    }

    // Score-staged patterns: doubles appear once the run is under way, with a
    // narrow second gap at higher scores
    let roll: f64 = state.rng.random();
    let mut spawned = 1;
    if state.score > state.config.narrow_pattern_score && roll < state.config.narrow_pattern_chance
    {
        let offset = state.config.narrow_pattern_offset;
        let first = Obstacle::spawn(edge, false, &state.config, &mut state.rng);
        let second = Obstacle::spawn(edge + offset, true, &state.config, &mut state.rng);
        state.obstacles.push(first);
        state.obstacles.push(second);
        spawned = 2;
    } else if state.score > state.config.double_pattern_score
        && roll < state.config.double_pattern_chance
    {
        let offset = state.config.double_pattern_offset;
        let first = Obstacle::spawn(edge, false, &state.config, &mut state.rng);
        let second = Obstacle::spawn(edge + offset, false, &state.config, &mut state.rng);
        state.obstacles.push(first);
        state.obstacles.push(second);
        spawned = 2;
    } else {
        let obstacle = Obstacle::spawn(edge, false, &state.config, &mut state.rng);
        state.obstacles.push(obstacle);
    }
    log::debug!("spawned {spawned} obstacle(s)");
}

/// Enemy spawns start once the run is scoring; the kind mix hardens with
/// score so early runs only meet the benign oscillator
fn spawn_enemies(state: &mut GameState) {
    if state.score == 0 || !state.rng.random_bool(state.config.enemy_spawn_chance) {
        return;
    }
    let y = state
        .rng
        .random_range(0.0..state.config.panel_height - state.config.enemy_size);
    let roll: f64 = state.rng.random();
    let config = &state.config;
    let kind = if state.score < config.drifter_unlock_score {
        EnemyKind::Oscillator
    } else if state.score < config.chaser_unlock_score {
        if roll < config.mid_oscillator_weight {
            EnemyKind::Oscillator
        } else {
            EnemyKind::Drifter
        }
    } else if roll < config.late_oscillator_weight {
        EnemyKind::Oscillator
    } else if roll < config.late_oscillator_weight + config.late_drifter_weight {
        EnemyKind::Drifter
    } else {
        EnemyKind::Chaser
    };

    let pos = Vec2::new(state.config.panel_width, y);
    let enemy = Enemy::spawn(kind, pos, &state.config, &mut state.rng);
    // Never materialize inside an obstacle
    let bounds = enemy.bounds(&state.config);
    let blocked = state
        .obstacles
        .iter()
        .any(|obstacle| obstacle.collides_with(&bounds, &state.config));
    if !blocked {
        log::debug!("spawned {kind:?} at y {y:.0}");
        state.enemies.push(enemy);
    }
}

/// Rare pickups, biased toward heals when the player is on their last point
fn spawn_powerups(state: &mut GameState) {
    if !state.rng.random_bool(state.config.powerup_spawn_chance) {
        return;
    }
    let y = state
        .rng
        .random_range(0.0..state.config.panel_height - state.config.powerup_size);
    let low_health = state.player.health <= 1;
    let heal_chance = if low_health {
        state.config.low_health_heal_bias
    } else {
        state.config.powerup_heal_chance
    };
    let kind = if state.rng.random_bool(heal_chance) {
        PowerUpKind::Heal
    } else {
        PowerUpKind::Boost
    };
    log::debug!("spawned {kind:?} at y {y:.0}");
    state
        .powerups
        .push(PowerUp::new(Vec2::new(state.config.panel_width, y), kind));
}
