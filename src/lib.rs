//! Ray Cannon - a jumping block with a pointer-aimed ray cannon
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, aiming, ray casting)
//! - `renderer`: macroquad drawing of the simulation state
//! - `platform`: Input polling and frame pacing
//! - `settings`: Data-driven tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{BodyTuning, RayTuning, Settings};

use glam::{IVec2, Vec2};

/// Game configuration constants
pub mod consts {
    /// Fixed tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// World dimensions (logical units, also the window size)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 800.0;

    /// Player body size
    pub const BODY_WIDTH: f32 = 50.0;
    pub const BODY_HEIGHT: f32 = 100.0;

    /// Player kinematics (units per tick, units per tick²)
    pub const BODY_ACCELERATION: f32 = 0.5;
    pub const BODY_DECELERATION: f32 = 0.2;
    pub const BODY_MAX_SPEED: f32 = 5.0;
    pub const BODY_JUMP_STRENGTH: f32 = -10.0;
    pub const GRAVITY: f32 = 0.5;

    /// Ray fan half-width in whole degrees (fan is -15..=15)
    pub const RAY_FAN_HALF_DEG: i32 = 15;
    /// Maximum ray length in steps (1 unit per step)
    pub const RAY_LENGTH: u32 = 1600;

    /// Cannon sprite size
    pub const CANNON_LENGTH: f32 = 50.0;
    pub const CANNON_THICKNESS: f32 = 20.0;

    /// Default target edge length
    pub const TARGET_SIZE: f32 = 50.0;
}

/// Whether an integer point lies inside the world `[0, W) x [0, H)`
#[inline]
pub fn in_world(p: IVec2) -> bool {
    p.x >= 0
        && (p.x as f32) < consts::WORLD_WIDTH
        && p.y >= 0
        && (p.y as f32) < consts::WORLD_HEIGHT
}

/// Truncate a point toward zero on both axes
#[inline]
pub fn truncate_point(p: Vec2) -> IVec2 {
    IVec2::new(p.x as i32, p.y as i32)
}

/// Unit direction for an angle given in degrees
#[inline]
pub fn direction_deg(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_world_edges() {
        assert!(in_world(IVec2::new(0, 0)));
        assert!(in_world(IVec2::new(799, 799)));
        assert!(!in_world(IVec2::new(800, 10)));
        assert!(!in_world(IVec2::new(10, -1)));
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(truncate_point(Vec2::new(-0.9, 3.7)), IVec2::new(0, 3));
        assert_eq!(truncate_point(Vec2::new(-1.2, -2.5)), IVec2::new(-1, -2));
    }
}
