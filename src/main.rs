//! Neon Runner entry point
//!
//! Headless demo harness: runs a scripted session at the fixed timestep,
//! reports cues and milestones through the logger, and dumps the final state
//! as JSON. A windowed host would drive the same `tick` from its frame loop
//! and hand the cues to its audio layer instead.

use neon_runner::Config;
use neon_runner::consts::SIM_DT;
use neon_runner::sim::{GameState, SoundCue, TickInput, tick};

const DEMO_TICKS: u64 = 1800; // 30 seconds at the fixed rate

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut state = match GameState::new(Config::default(), seed) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    for i in 0..DEMO_TICKS {
        // Double-tap thrust pattern for a controlled ascent; the same press
        // doubles as the restart input after a game over
        let input = TickInput {
            primary: i % 15 == 0 || i % 16 == 0,
        };
        tick(&mut state, &input);

        for cue in state.take_sound_cues() {
            log::info!("tick {:5}: cue {}", state.time_ticks, cue.as_str());
            if cue == SoundCue::GameOver {
                log::info!("run ended with score {}", state.score);
            }
        }
    }

    log::info!(
        "demo finished: {:.0}s simulated, score {}, best {}, {} obstacles in flight",
        state.time_ticks as f32 * SIM_DT,
        state.score,
        state.high_score,
        state.obstacles.len()
    );
    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize final state: {err}"),
    }
}
