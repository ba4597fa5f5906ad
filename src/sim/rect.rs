//! Axis-aligned rectangle geometry
//!
//! Half-open containment (`x <= px < x + w`) so that adjacent rectangles never
//! share a point.

use glam::{IVec2, Vec2};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Whether an integer point lies inside (right and bottom edges excluded)
    #[inline]
    pub fn contains_point(&self, p: IVec2) -> bool {
        let p = p.as_vec2();
        let max = self.max();
        p.x >= self.pos.x && p.x < max.x && p.y >= self.pos.y && p.y < max.y
    }

    /// Grow by `amount` on every side
    pub fn inflate(&self, amount: f32) -> Self {
        Self {
            pos: self.pos - Vec2::splat(amount),
            size: self.size + Vec2::splat(amount * 2.0),
        }
    }

    /// Slab test: parameter span `[t_enter, t_exit]` where `origin + dir * t`
    /// is inside the rectangle, clipped to `[0, t_max]`
    ///
    /// Returns `None` if the segment never touches the rectangle.
    pub fn segment_span(&self, origin: Vec2, dir: Vec2, t_max: f32) -> Option<(f32, f32)> {
        let mut t_enter = 0.0_f32;
        let mut t_exit = t_max;

        for axis in 0..2 {
            let o = origin[axis];
            let d = dir[axis];
            let lo = self.min()[axis];
            let hi = self.max()[axis];

            if d.abs() < f32::EPSILON {
                // Parallel to this slab
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some((t_enter, t_exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(100.0, 390.0, 50.0, 20.0);
        assert!(r.contains_point(IVec2::new(100, 390)));
        assert!(r.contains_point(IVec2::new(149, 409)));
        assert!(!r.contains_point(IVec2::new(150, 400)));
        assert!(!r.contains_point(IVec2::new(120, 410)));
        assert!(!r.contains_point(IVec2::new(99, 400)));
    }

    #[test]
    fn test_center_and_bottom() {
        let r = Rect::new(400.0, 600.0, 50.0, 100.0);
        assert_eq!(r.center(), Vec2::new(425.0, 650.0));
        assert_eq!(r.bottom(), 700.0);
    }

    #[test]
    fn test_segment_span_straight_through() {
        let r = Rect::new(100.0, 390.0, 50.0, 20.0);
        let (t0, t1) = r
            .segment_span(Vec2::new(0.0, 400.0), Vec2::X, 1600.0)
            .unwrap();
        assert!((t0 - 100.0).abs() < 1e-4);
        assert!((t1 - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_segment_span_too_short() {
        let r = Rect::new(100.0, 390.0, 50.0, 20.0);
        assert!(r.segment_span(Vec2::new(0.0, 400.0), Vec2::X, 50.0).is_none());
    }

    #[test]
    fn test_segment_span_parallel_miss() {
        let r = Rect::new(100.0, 390.0, 50.0, 20.0);
        assert!(r.segment_span(Vec2::new(0.0, 300.0), Vec2::X, 1600.0).is_none());
        // Pointing away
        assert!(r.segment_span(Vec2::new(0.0, 400.0), -Vec2::X, 1600.0).is_none());
    }

    #[test]
    fn test_inflate() {
        let r = Rect::new(10.0, 10.0, 5.0, 5.0).inflate(1.0);
        assert_eq!(r, Rect::new(9.0, 9.0, 7.0, 7.0));
    }
}
