//! Per-frame simulation update
//!
//! Order within a frame is fixed:
//! 1. apply controls (turn, thrust, fire)
//! 2. resolve collisions and fragmentation
//! 3. advance live entities (asteroids also spin, projectiles count down)
//! 4. purge the dead

use serde::{Deserialize, Serialize};

use super::collision::CollisionReport;
use super::entity::FlyingObject;
use super::state::SimState;

/// Logical actions for one frame
///
/// `fire` is edge-triggered: set it only on the frame the button goes down
/// (see [`EdgeTrigger`]). Holding fire does not autofire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
}

/// Turns a held button into a one-frame press
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_held: bool,
}

impl EdgeTrigger {
    /// True only on the first frame `held` goes high
    pub fn press(&mut self, held: bool) -> bool {
        let pressed = held && !self.was_held;
        self.was_held = held;
        pressed
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &FrameInput) -> CollisionReport {
    apply_controls(state, input);

    let report = state.resolve_collisions();
    state.advance_all();
    state.purge();
    state.frame += 1;

    if report.asteroid_hits > 0 {
        log::debug!(
            "frame {}: {} hits, {} fragments, {} asteroids left",
            state.frame,
            report.asteroid_hits,
            report.spawned,
            state.asteroids.len()
        );
    }

    report
}

fn apply_controls(state: &mut SimState, input: &FrameInput) {
    if !state.ship.is_alive() {
        return;
    }
    let turn = state.config().ship_turn;
    if input.turn_left {
        state.ship.rotate_left(turn);
    }
    if input.turn_right {
        state.ship.rotate_right(turn);
    }
    if input.thrust {
        let thrust = state.config().ship_thrust;
        state.ship.thrust(thrust);
    }
    if input.fire {
        state.fire();
    }
}
