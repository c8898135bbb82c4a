/*!
Collision root module.

The controller never implements collision itself. It talks to two collaborators
handed to it at construction:

- [`CollisionQuery`]: ray casts against world geometry (ground probe, vault probes)
- [`KinematicBody`]:  applies a displacement to the character while respecting collisions

Submodules:

- types:  shared data types (Vec3, LayerMask, RayHit)
- ground: downward ground probe producing a per-tick [`GroundContact`]
*/

pub mod ground;
pub mod types;

pub use ground::{GroundContact, GroundSensor};
pub use types::{LayerMask, Quat, RayHit, Vec3};

/// Ray-cast facility over world geometry.
pub trait CollisionQuery {
    /// Cast a ray from `origin` along `direction` (need not be normalized) up to
    /// `max_distance` meters, considering only colliders on `layers`.
    ///
    /// Returns the closest hit, or `None` when nothing is hit.
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RayHit>;
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    #[inline]
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RayHit> {
        (**self).raycast(origin, direction, max_distance, layers)
    }
}

/// The character's kinematic body.
///
/// `move_by` is the external displacement primitive: it moves the body by (at most)
/// `displacement`, respecting collision geometry. Any correction it applies is not
/// reported back to the controller.
pub trait KinematicBody {
    /// Current world position of the body's pivot (capsule center).
    fn position(&self) -> Vec3;

    /// Move by `displacement`, respecting collisions.
    fn move_by(&mut self, displacement: Vec3);

    /// Current per-axis scale of the body.
    fn scale(&self) -> Vec3;

    /// Replace the per-axis scale of the body.
    fn set_scale(&mut self, scale: Vec3);
}
