//! Game tuning
//!
//! Defaults reproduce the classic feel. Tuning can be round-tripped through
//! JSON so balance tweaks stay data-driven.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Player kinematics tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyTuning {
    /// Horizontal speed gained per tick while a direction is held
    pub acceleration: f32,
    /// Horizontal speed lost per tick with no direction held
    pub deceleration: f32,
    /// Horizontal speed cap (both directions)
    pub max_speed: f32,
    /// Vertical speed applied on jump (negative is up)
    pub jump_strength: f32,
    /// Vertical speed added every tick
    pub gravity: f32,
}

impl Default for BodyTuning {
    fn default() -> Self {
        Self {
            acceleration: BODY_ACCELERATION,
            deceleration: BODY_DECELERATION,
            max_speed: BODY_MAX_SPEED,
            jump_strength: BODY_JUMP_STRENGTH,
            gravity: GRAVITY,
        }
    }
}

/// Ray cannon tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RayTuning {
    /// Fan spans `-fan_half_deg..=fan_half_deg` in 1 degree steps
    pub fan_half_deg: i32,
    /// Steps marched per ray
    pub ray_length: u32,
}

impl Default for RayTuning {
    fn default() -> Self {
        Self {
            fan_half_deg: RAY_FAN_HALF_DEG,
            ray_length: RAY_LENGTH,
        }
    }
}

/// All tunables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub body: BodyTuning,
    pub rays: RayTuning,
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning: max_speed={}, fan=±{}°",
            settings.body.max_speed,
            settings.rays.fan_half_deg
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Total rays per target
    pub fn rays_per_target(&self) -> usize {
        (self.rays.fan_half_deg.max(0) * 2 + 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_tuning() {
        let s = Settings::default();
        assert_eq!(s.body.acceleration, 0.5);
        assert_eq!(s.body.deceleration, 0.2);
        assert_eq!(s.body.max_speed, 5.0);
        assert_eq!(s.body.jump_strength, -10.0);
        assert_eq!(s.body.gravity, 0.5);
        assert_eq!(s.rays.ray_length, 1600);
        assert_eq!(s.rays_per_target(), 31);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "body": { "max_speed": 8.0 } }"#).unwrap();
        assert_eq!(s.body.max_speed, 8.0);
        assert_eq!(s.body.gravity, GRAVITY);
        assert_eq!(s.rays, RayTuning::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Settings::from_json("{ body: ").is_err());
    }

    #[test]
    fn test_json_output_parses_back() {
        let mut s = Settings::default();
        s.rays.fan_half_deg = 3;
        let json = s.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }
}
