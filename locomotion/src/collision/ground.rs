use super::{
    CollisionQuery,
    types::{LayerMask, RayHit, Vec3},
};

/// Ground contact for a single tick.
///
/// Recomputed from scratch every tick; nothing carries over between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroundContact {
    pub grounded: bool,
    /// World-space point where the probe hit the ground (zero when airborne).
    pub point: Vec3,
    /// Surface normal at `point` (zero when airborne).
    pub normal: Vec3,
}

impl GroundContact {
    #[inline]
    pub fn airborne() -> Self {
        Self {
            grounded: false,
            point: Vec3::zeros(),
            normal: Vec3::zeros(),
        }
    }
}

impl Default for GroundContact {
    fn default() -> Self {
        Self::airborne()
    }
}

impl From<RayHit> for GroundContact {
    fn from(hit: RayHit) -> Self {
        Self {
            grounded: true,
            point: hit.point,
            normal: hit.normal,
        }
    }
}

/// Single downward ray probe from the character pivot.
///
/// Probe length is `half_height + margin`: the pivot sits half the body height above the
/// feet, and the margin tolerates small hovering or uneven ground.
#[derive(Clone, Copy, Debug)]
pub struct GroundSensor {
    pub half_height: f32,
    pub margin: f32,
    pub layers: LayerMask,
}

impl GroundSensor {
    pub fn new(player_height: f32, margin: f32, layers: LayerMask) -> Self {
        Self {
            half_height: (player_height * 0.5).max(0.0),
            margin: margin.max(0.0),
            layers,
        }
    }

    #[inline]
    pub fn probe_distance(&self) -> f32 {
        self.half_height + self.margin
    }

    /// Probe for ground under `position`. A miss simply means airborne.
    pub fn sense<Q: CollisionQuery + ?Sized>(&self, query: &Q, position: Vec3) -> GroundContact {
        query
            .raycast(
                position,
                Vec3::new(0.0, -1.0, 0.0),
                self.probe_distance(),
                self.layers,
            )
            .map(GroundContact::from)
            .unwrap_or_else(GroundContact::airborne)
    }
}
