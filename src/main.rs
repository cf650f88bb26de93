//! Rockfield headless frame driver
//!
//! Seeds a run, flies the ship with a scripted autopilot and prints the
//! final frame as JSON.
//!
//! Usage: `rockfield [seed] [frames]`

use rockfield::SimConfig;
use rockfield::sim::{EdgeTrigger, FrameInput, SimState, tick};

/// Frames per logged summary (one second at 60 Hz)
const SUMMARY_EVERY: u64 = 60;

/// Spin slowly, thrust in bursts, tap fire every 15 frames
fn autopilot(frame: u64, fire: &mut EdgeTrigger) -> FrameInput {
    FrameInput {
        turn_left: frame % 240 < 120,
        turn_right: false,
        thrust: frame % 90 < 10,
        fire: fire.press(frame % 15 == 0),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);
    let frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(600);

    let mut state = match SimState::new(seed, SimConfig::default()) {
        Ok(state) => state,
        Err(e) => {
            log::error!("invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    let mut fire = EdgeTrigger::default();
    let mut hits = 0u32;

    while state.frame < frames && !state.is_over() {
        let input = autopilot(state.frame, &mut fire);
        hits += tick(&mut state, &input).asteroid_hits;

        if state.frame % SUMMARY_EVERY == 0 {
            log::info!(
                "frame {}: {} asteroids, {} projectiles, {} hits so far",
                state.frame,
                state.asteroids.len(),
                state.projectiles.len(),
                hits
            );
        }
    }

    if !state.ship.body.alive {
        log::info!("ship lost after {} frames", state.frame);
    } else if state.asteroids.is_empty() {
        log::info!("field cleared after {} frames", state.frame);
    }

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("failed to serialize snapshot: {}", e),
    }
}
