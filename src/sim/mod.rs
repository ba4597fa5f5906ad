//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One tick per call, velocities in units per tick
//! - Stable iteration order (targets in insertion order, fan offsets ascending)
//! - No rendering or platform dependencies

pub mod body;
pub mod raycast;
pub mod rect;
pub mod state;
pub mod target;
pub mod tick;

pub use body::{Body, MoveInput};
pub use raycast::{
    RayCast, RayFan, RayResult, aim_angle, cannon_rotation, cast_fan, cast_ray, cast_ray_stepped,
};
pub use rect::Rect;
pub use state::{LoopPhase, SimState};
pub use target::{Target, default_targets};
pub use tick::{TickInput, tick};
