//! Static targets for the ray cannon

use super::rect::Rect;
use crate::consts::TARGET_SIZE;

/// A passive square target; immutable once placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    bounds: Rect,
}

impl Target {
    /// Square target with top-left corner at `(x, y)`
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self::from_rect(Rect::new(x, y, size, size))
    }

    pub fn from_rect(bounds: Rect) -> Self {
        Self { bounds }
    }

    #[inline]
    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }
}

/// The three targets hovering mid-screen
pub fn default_targets() -> Vec<Target> {
    [200.0, 400.0, 600.0]
        .into_iter()
        .map(|x| Target::new(x, 400.0, TARGET_SIZE))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_default_targets_layout() {
        let targets = default_targets();
        assert_eq!(targets.len(), 3);
        assert_eq!(*targets[1].bounds(), Rect::new(400.0, 400.0, 50.0, 50.0));
    }

    #[test]
    fn test_target_bounds_contains() {
        let t = Target::new(200.0, 400.0, 50.0);
        assert!(t.bounds().contains_point(IVec2::new(225, 425)));
        assert!(!t.bounds().contains_point(IVec2::new(250, 425)));
    }
}
