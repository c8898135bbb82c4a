//! Vault maneuver: a timed, curve-driven displacement over an obstacle.
//!
//! Detection uses two rays. A forward ray looks for an obstacle within reach; from just
//! past the obstacle, a downward ray looks for somewhere to land. Only when both hit is a
//! vault possible. Once started, the character follows a quadratic Bezier arc from its
//! start position to the landing point and normal locomotion is suspended until the arc
//! completes. A vault cannot be cancelled.

use crate::{
    collision::{CollisionQuery, Vec3},
    config::VaultSettings,
};

/// Quadratic Bezier: `(1-t)^2 * p0 + 2(1-t)t * p1 + t^2 * p2`.
///
/// `t` is not clamped here; callers pass progress in `[0, 1]`.
#[inline]
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Result of a successful vault probe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VaultLanding {
    /// Where the forward probe hit the obstacle.
    pub obstacle: Vec3,
    /// Landing point on the surface past the obstacle.
    pub landing: Vec3,
}

/// Cast the forward/downward probe pair from `position` facing `forward` (planar, unit).
///
/// Returns `None` when there is no obstacle in reach or nothing to land on past it.
pub fn probe_landing<Q: CollisionQuery + ?Sized>(
    query: &Q,
    settings: &VaultSettings,
    position: Vec3,
    forward: Vec3,
) -> Option<VaultLanding> {
    let up = Vec3::new(0.0, 1.0, 0.0);

    let origin = position + forward * settings.probe_forward_offset + up * settings.probe_height;
    let front = query.raycast(origin, forward, settings.max_distance, settings.layers)?;

    let land_origin = front.point + forward * settings.landing_clearance + up * settings.height;
    let land = query.raycast(
        land_origin,
        -up,
        settings.height + settings.landing_search_extra,
        settings.layers,
    )?;

    Some(VaultLanding {
        obstacle: front.point,
        landing: land.point,
    })
}

/// The arc a vault follows, plus its clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VaultTrajectory {
    pub start: Vec3,
    pub end: Vec3,
    pub control: Vec3,
    pub elapsed: f32,
    pub duration: f32,
}

impl VaultTrajectory {
    /// Control point is the start/end midpoint raised to `max(start.y, end.y) + height`.
    pub fn new(start: Vec3, end: Vec3, height: f32, duration: f32) -> Self {
        let mut control = (start + end) * 0.5;
        control.y = start.y.max(end.y) + height;
        Self {
            start,
            end,
            control,
            elapsed: 0.0,
            duration,
        }
    }

    /// Progress in `[0, 1]`. A non-positive duration counts as already complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Position on the arc at progress `t`.
    pub fn position_at(&self, t: f32) -> Vec3 {
        quadratic_bezier(self.start, self.control, self.end, t)
    }

    /// Advance the clock by `dt` and return the new position on the arc.
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        self.elapsed += dt.max(0.0);
        self.position_at(self.progress())
    }
}
