//! Fixed timestep simulation tick
//!
//! One call advances the whole scene: body, aim, then rays.

use glam::Vec2;

use super::body::MoveInput;
use super::raycast::{aim_angle, cast_fan};
use super::state::{LoopPhase, SimState};

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub movement: MoveInput,
    /// Pointer position in world coordinates
    pub pointer: Vec2,
    /// Window close requested
    pub quit: bool,
}

/// Advance the simulation by one tick
///
/// `dt` is the measured duration of the previous tick. Movement is tuned per
/// tick, so it is recorded but not used for integration.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if state.phase == LoopPhase::Stopped {
        return;
    }

    state.time_ticks += 1;
    state.last_dt = dt;

    let body_tuning = state.settings().body;
    state.body.integrate(&input.movement, &body_tuning);

    let origin = state.body.center();
    state.aim_deg = aim_angle(origin, input.pointer);
    state.rays = cast_fan(
        origin,
        state.aim_deg,
        &state.targets,
        state.fan(),
        state.settings().rays.ray_length,
    );

    // Quit lands after the tick so nothing observes a half-finished frame
    if input.quit {
        log::info!("Quit requested after {} ticks", state.time_ticks);
        state.phase = LoopPhase::Stopped;
    }
}
