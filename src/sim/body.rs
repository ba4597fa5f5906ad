//! Player body kinematics
//!
//! Velocities are in units per tick; one call to [`Body::integrate`] advances
//! exactly one tick.

use glam::Vec2;

use super::rect::Rect;
use crate::consts::*;
use crate::settings::BodyTuning;

/// Control intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// The player-controlled rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub horizontal_speed: f32,
    pub vertical_speed: f32,
    pub jumping: bool,
}

impl Body {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(BODY_WIDTH, BODY_HEIGHT),
            horizontal_speed: 0.0,
            vertical_speed: 0.0,
            jumping: false,
        }
    }

    /// Spawn point: horizontally centered, bottom 100 units above the floor
    pub fn spawn() -> Self {
        Self::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT - 200.0)
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    /// Advance one tick
    pub fn integrate(&mut self, input: &MoveInput, tuning: &BodyTuning) {
        // Left wins when both directions are held
        if input.left {
            self.horizontal_speed =
                (self.horizontal_speed - tuning.acceleration).max(-tuning.max_speed);
        } else if input.right {
            self.horizontal_speed =
                (self.horizontal_speed + tuning.acceleration).min(tuning.max_speed);
        } else if self.horizontal_speed > 0.0 {
            self.horizontal_speed = (self.horizontal_speed - tuning.deceleration).max(0.0);
        } else if self.horizontal_speed < 0.0 {
            self.horizontal_speed = (self.horizontal_speed + tuning.deceleration).min(0.0);
        }

        if input.jump && !self.jumping {
            self.vertical_speed = tuning.jump_strength;
            self.jumping = true;
            log::debug!("Jump from y={:.1}", self.pos.y);
        }

        // Gravity applies even mid-jump
        self.vertical_speed += tuning.gravity;

        self.pos.x += self.horizontal_speed;
        self.pos.y += self.vertical_speed;

        self.wrap_horizontal();
        self.clamp_to_floor();
    }

    /// Teleport to the opposite edge once fully off-screen
    fn wrap_horizontal(&mut self) {
        if self.pos.x < -self.size.x {
            self.pos.x = WORLD_WIDTH;
            log::debug!("Wrapped to right edge");
        } else if self.pos.x > WORLD_WIDTH {
            self.pos.x = -self.size.x;
            log::debug!("Wrapped to left edge");
        }
    }

    fn clamp_to_floor(&mut self) {
        if self.pos.y >= WORLD_HEIGHT - self.size.y {
            if self.jumping {
                log::debug!("Landed at x={:.1}", self.pos.x);
            }
            self.pos.y = WORLD_HEIGHT - self.size.y;
            self.vertical_speed = 0.0;
            self.jumping = false;
        }
    }

    /// Whether the bottom edge rests on the floor
    pub fn on_floor(&self) -> bool {
        self.pos.y >= WORLD_HEIGHT - self.size.y
    }
}
