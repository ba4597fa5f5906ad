//! Cannon aiming and ray casting
//!
//! Rays are marched one unit at a time from the origin and sampled at integer
//! points (truncated toward zero). A ray stops with a miss as soon as a sample
//! leaves the world, and with a hit on the first sample inside the target.
//!
//! [`cast_ray`] produces exactly the same result as the plain march in
//! [`cast_ray_stepped`], but first runs a slab test against the target so that
//! rays which cannot reach it skip the march entirely.

use glam::{IVec2, Vec2};

use super::rect::Rect;
use super::target::Target;
use crate::{direction_deg, in_world, truncate_point};

/// Aim angle in degrees from `origin` toward `pointer`
///
/// Screen coordinates (y down), so positive angles turn clockwise on screen.
#[inline]
pub fn aim_angle(origin: Vec2, pointer: Vec2) -> f32 {
    let d = pointer - origin;
    d.y.atan2(d.x).to_degrees()
}

/// Counter-clockwise sprite rotation (degrees) for an aim angle
///
/// Sprite rotation is counter-clockwise positive while the aim angle grows
/// clockwise on screen, hence the sign flip.
#[inline]
pub fn cannon_rotation(aim_deg: f32) -> f32 {
    -aim_deg
}

/// Fixed set of whole-degree offsets around the aim angle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RayFan {
    offsets: Vec<i32>,
}

impl RayFan {
    /// Symmetric fan `-half_deg..=half_deg` in 1 degree steps
    pub fn symmetric(half_deg: i32) -> Self {
        let half = half_deg.max(0);
        Self {
            offsets: (-half..=half).collect(),
        }
    }

    pub fn offsets(&self) -> &[i32] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Outcome of a single ray against a single target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RayResult {
    /// First sample inside the target
    Hit { point: IVec2 },
    /// No hit; `endpoint` is the point at full ray length
    Miss { endpoint: IVec2 },
}

impl RayResult {
    /// Where the drawn ray segment ends
    pub fn end(&self) -> IVec2 {
        match *self {
            RayResult::Hit { point } => point,
            RayResult::Miss { endpoint } => endpoint,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, RayResult::Hit { .. })
    }
}

/// One (fan offset, target) pair and its result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayCast {
    pub origin: Vec2,
    pub offset_deg: i32,
    pub target_index: usize,
    pub result: RayResult,
}

#[inline]
fn sample(origin: Vec2, dir: Vec2, step: u32) -> IVec2 {
    truncate_point(origin + dir * step as f32)
}

#[inline]
fn full_length_miss(origin: Vec2, dir: Vec2, length: u32) -> RayResult {
    RayResult::Miss {
        endpoint: sample(origin, dir, length),
    }
}

/// Reference march: test every step from 0 to `length - 1`
pub fn cast_ray_stepped(origin: Vec2, dir: Vec2, target: &Rect, length: u32) -> RayResult {
    for step in 0..length {
        let p = sample(origin, dir, step);
        if !in_world(p) {
            break;
        }
        if target.contains_point(p) {
            return RayResult::Hit { point: p };
        }
    }
    full_length_miss(origin, dir, length)
}

/// March only the steps that can land inside the target
///
/// Samples move monotonically along each axis, so the in-world steps form one
/// contiguous run starting at step 0. Checking step 0 and then every marched
/// step therefore catches the same world exit the full march would.
pub fn cast_ray(origin: Vec2, dir: Vec2, target: &Rect, length: u32) -> RayResult {
    if length == 0 || !in_world(sample(origin, dir, 0)) {
        return full_length_miss(origin, dir, length);
    }

    // Truncation moves a sample by less than one unit on each axis; the extra
    // unit absorbs drift along near-axis-aligned rays
    let last_step = (length - 1) as f32;
    let Some((t_enter, t_exit)) = target.inflate(2.0).segment_span(origin, dir, last_step) else {
        return full_length_miss(origin, dir, length);
    };

    let first = (t_enter.floor() - 1.0).max(0.0) as u32;
    let last = ((t_exit.ceil() + 1.0) as u32).min(length - 1);

    for step in first..=last {
        let p = sample(origin, dir, step);
        if !in_world(p) {
            break;
        }
        if target.contains_point(p) {
            return RayResult::Hit { point: p };
        }
    }
    full_length_miss(origin, dir, length)
}

/// Cast the whole fan against every target
///
/// Each target gets its own pass over the fan; results are not merged across
/// targets, so overlapping targets can both report a hit for one offset.
pub fn cast_fan(
    origin: Vec2,
    aim_deg: f32,
    targets: &[Target],
    fan: &RayFan,
    length: u32,
) -> Vec<RayCast> {
    let mut casts = Vec::with_capacity(targets.len() * fan.len());

    for (target_index, target) in targets.iter().enumerate() {
        for &offset_deg in fan.offsets() {
            let dir = direction_deg(aim_deg + offset_deg as f32);
            casts.push(RayCast {
                origin,
                offset_deg,
                target_index,
                result: cast_ray(origin, dir, target.bounds(), length),
            });
        }
    }

    log::trace!(
        "Cast {} rays, {} hits",
        casts.len(),
        casts.iter().filter(|c| c.result.is_hit()).count()
    );

    casts
}
