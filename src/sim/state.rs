//! Simulation context
//!
//! Everything the frame loop mutates lives in one [`SimState`] that is passed
//! explicitly to each step; there are no globals.

use super::body::Body;
use super::raycast::{RayCast, RayFan};
use super::target::{Target, default_targets};
use crate::settings::Settings;

/// Frame loop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    /// Quit was requested; terminal
    Stopped,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimState {
    pub body: Body,
    pub targets: Vec<Target>,
    /// Aim angle (degrees) computed on the last tick
    pub aim_deg: f32,
    /// Every (offset, target) ray from the last tick
    pub rays: Vec<RayCast>,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Wall time of the previous tick in seconds
    pub last_dt: f32,
    pub phase: LoopPhase,
    settings: Settings,
    /// Built from `settings.rays`; replaced together with the settings
    fan: RayFan,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SimState {
    /// Fresh scene: body at its spawn point and the three default targets
    pub fn new(settings: Settings) -> Self {
        Self::with_targets(settings, default_targets())
    }

    pub fn with_targets(settings: Settings, targets: Vec<Target>) -> Self {
        Self {
            body: Body::spawn(),
            targets,
            aim_deg: 0.0,
            rays: Vec::new(),
            time_ticks: 0,
            last_dt: 0.0,
            phase: LoopPhase::Running,
            fan: RayFan::symmetric(settings.rays.fan_half_deg),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Swap tuning mid-run; the ray fan is rebuilt to match
    pub fn set_settings(&mut self, settings: Settings) {
        self.fan = RayFan::symmetric(settings.rays.fan_half_deg);
        self.settings = settings;
    }

    pub fn fan(&self) -> &RayFan {
        &self.fan
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    /// Rays from the last tick that ended on a target
    pub fn hits(&self) -> impl Iterator<Item = &RayCast> {
        self.rays.iter().filter(|r| r.result.is_hit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_new_scene() {
        let state = SimState::default();
        assert!(state.is_running());
        assert_eq!(state.targets.len(), 3);
        assert_eq!(state.body.pos.x, WORLD_WIDTH / 2.0);
        assert_eq!(state.fan().len(), 31);
        assert_eq!(state.hits().count(), 0);
    }

    #[test]
    fn test_fan_follows_settings() {
        let mut settings = Settings::default();
        settings.rays.fan_half_deg = 2;
        let state = SimState::new(settings);
        assert_eq!(state.fan().offsets(), &[-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_set_settings_rebuilds_fan() {
        let mut state = SimState::default();
        let mut settings = state.settings().clone();
        settings.rays.fan_half_deg = 4;
        state.set_settings(settings);

        assert_eq!(state.fan().len(), state.settings().rays_per_target());
        assert_eq!(state.fan().offsets().first(), Some(&-4));
    }
}
