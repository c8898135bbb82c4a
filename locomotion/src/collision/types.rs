/*!
Core collision types and math aliases shared by the locomotion modules.

This module intentionally contains no algorithms. It defines the data exchanged
between the controller and its two external collaborators:
- the collision query facility (ray casts against world geometry)
- the kinematic body (applies a displacement while respecting collisions)
*/

use nalgebra as na;
use serde::Deserialize;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// 32-bit collision layer filter.
///
/// A ray only considers colliders whose layer bits intersect the query mask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    /// Mask with only bit `index` set. Indices past 31 yield an empty mask.
    #[inline]
    pub const fn layer(index: u8) -> Self {
        if index < 32 {
            Self(1 << index)
        } else {
            Self::NONE
        }
    }

    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// A single ray intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// World-space impact point.
    pub point: Vec3,
    /// World-space surface normal at the impact point.
    pub normal: Vec3,
    /// Distance travelled along the (unit) ray direction.
    pub distance: f32,
}
