//! Rapier-backed collaborators: a static query world and a capsule character body.
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Query-focused: ray casts for the controller's probes and Rapier's
//!   `KinematicCharacterController` for the body.
//! - Immutable world: statics do not move after construction.

// Re-export Rapier so downstream crates can use Rapier types without depending on it directly.
pub use rapier3d;

use nalgebra::point;
use rapier3d::{
    control::{CharacterAutostep, CharacterLength, KinematicCharacterController},
    na::Translation3,
    prelude::*,
};
use serde::Deserialize;

use crate::{
    collision::{CollisionQuery, KinematicBody, LayerMask, Quat, RayHit, Vec3},
    constants::DIST_EPS,
};

/// Canonical definition of an immutable world collider.
///
/// Conventions
/// - Units are meters.
/// - Rotation is a unit quaternion.
/// - A plane's normal is `rotation * +Y`; the plane passes through `translation`
///   shifted by `offset_along_normal`.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    pub translation: Vec3,
    pub rotation: Quat,
    pub shape: ColliderShapeDef,
    /// Layers this collider belongs to; ray casts filter against them.
    pub layers: LayerMask,
}

impl WorldStaticDef {
    /// Axis-aligned definition on every layer.
    pub fn new(id: u32, translation: Vec3, shape: ColliderShapeDef) -> Self {
        Self {
            id,
            translation,
            rotation: Quat::identity(),
            shape,
            layers: LayerMask::ALL,
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn on_layers(mut self, layers: LayerMask) -> Self {
        self.layers = layers;
        self
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space), offset along its normal.
    Plane { offset_along_normal: f32 },

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: Vec3 },
}

/// In-memory Rapier structures needed for scene queries and KCC against a static world.
///
/// For immutable statics, these can be built once at startup and reused.
pub struct RapierQueryWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhaseBvh,
    pub narrow_phase: NarrowPhase,
}

impl RapierQueryWorld {
    /// Build a query world from a list of static collider definitions.
    ///
    /// The input is sorted by `id` before insertion. NaN/invalid values should be
    /// filtered by the caller.
    pub fn build(mut defs: Vec<WorldStaticDef>) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        for def in defs.into_iter() {
            let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);

            let rb = RigidBodyBuilder::fixed().pose(iso).build();
            let rb_handle = bodies.insert(rb);

            let collider = collider_from_def(&def);
            colliders.insert_with_parent(collider, rb_handle, &mut bodies);
        }

        // Collision-detection only (no dynamics): updates the broad-phase BVH and the
        // narrow-phase contact graph so queries can run.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        let mut collision_pipeline = CollisionPipeline::new();
        collision_pipeline.step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &(),
            &(),
        );

        log::debug!("query world built with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
        }
    }

    /// Borrowed `QueryPipeline` view for scene queries and KCC.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

impl CollisionQuery for RapierQueryWorld {
    fn raycast(
        &self,
        origin: Vec3,
        direction: Vec3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<RayHit> {
        let len = direction.norm();
        if len <= DIST_EPS || max_distance.is_nan() || max_distance < 0.0 {
            return None;
        }
        let dir = direction / len;

        let in_layers = |_: ColliderHandle, co: &Collider| layers_of(co).intersects(layers);
        let query_pipeline = self.query_pipeline(QueryFilter::default().predicate(&in_layers));

        let ray = Ray::new(point![origin.x, origin.y, origin.z], dir);
        let (_handle, hit) = query_pipeline.cast_ray_and_get_normal(&ray, max_distance, true)?;
        Some(RayHit {
            point: ray.point_at(hit.time_of_impact).coords,
            normal: hit.normal,
            distance: hit.time_of_impact,
        })
    }
}

#[inline]
fn layers_of(collider: &Collider) -> LayerMask {
    LayerMask(collider.user_data as u32)
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The pose lives on the parent rigid-body, so shapes are built in local space and the
/// collider's layers are stored in its user data.
fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let builder = match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            let offset = vector![0.0, *offset_along_normal, 0.0];
            ColliderBuilder::halfspace(Vector::y_axis()).translation(offset)
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }
    };

    builder.user_data(def.layers.0 as u128).build()
}

/// Kinematic character controller settings for [`RapierCharacter`].
///
/// Values are expressed in meters and degrees (converted to radians at runtime).
/// Autostep and snap-to-ground are always enabled.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CharacterBodySettings {
    /// Full standing height of the capsule (meters).
    pub height: f32,
    pub radius: f32,

    /// Small gap preserved between the character and its surroundings.
    /// Keep `offset` small but non-zero for numerical stability.
    pub offset: f32,

    /// Maximum climbable slope angle (degrees).
    pub max_slope_climb_deg: f32,

    /// Minimum slope angle (degrees) before automatic sliding starts.
    pub min_slope_slide_deg: f32,

    pub autostep_max_height: f32,
    pub autostep_min_width: f32,

    /// Whether the controller should slide against obstacles.
    pub slide: bool,

    /// Increase if the character gets stuck when sliding.
    pub normal_nudge_factor: f32,

    /// Max downward snap distance while grounded.
    pub snap_to_ground: f32,
}

impl Default for CharacterBodySettings {
    fn default() -> Self {
        Self {
            height: 2.0,
            radius: 0.4,
            offset: 0.02,
            max_slope_climb_deg: 45.0,
            min_slope_slide_deg: 30.0,
            autostep_max_height: 0.3,
            autostep_min_width: 0.2,
            slide: true,
            normal_nudge_factor: 1.0e-4,
            snap_to_ground: 0.3,
        }
    }
}

impl CharacterBodySettings {
    fn kcc(&self) -> KinematicCharacterController {
        KinematicCharacterController {
            offset: CharacterLength::Absolute(self.offset.max(0.0)),
            max_slope_climb_angle: self.max_slope_climb_deg.to_radians(),
            min_slope_slide_angle: self.min_slope_slide_deg.to_radians(),
            snap_to_ground: Some(CharacterLength::Absolute(self.snap_to_ground.max(0.0))),
            autostep: Some(CharacterAutostep {
                max_height: CharacterLength::Absolute(self.autostep_max_height.max(0.0)),
                min_width: CharacterLength::Absolute(self.autostep_min_width.max(0.0)),
                include_dynamic_bodies: false,
            }),
            slide: self.slide,
            normal_nudge_factor: self.normal_nudge_factor,
            ..KinematicCharacterController::default()
        }
    }
}

/// Y-capsule body moved through a [`RapierQueryWorld`] with Rapier's KCC.
///
/// The pivot is the capsule center. Scaling changes the capsule's vertical extent with the
/// feet kept planted, so the pivot moves with it; the radius is unchanged.
pub struct RapierCharacter<'w> {
    world: &'w RapierQueryWorld,
    settings: CharacterBodySettings,
    kcc: KinematicCharacterController,
    position: Vec3,
    scale: Vec3,
    tick_dt: f32,
    grounded: bool,
}

impl<'w> RapierCharacter<'w> {
    pub fn new(
        world: &'w RapierQueryWorld,
        settings: CharacterBodySettings,
        position: Vec3,
    ) -> Self {
        Self {
            world,
            settings,
            kcc: settings.kcc(),
            position,
            scale: Vec3::new(1.0, 1.0, 1.0),
            tick_dt: 1.0 / 60.0,
            grounded: false,
        }
    }

    /// Tick length handed to the KCC on the next move.
    pub fn set_tick_dt(&mut self, dt: f32) {
        self.tick_dt = dt.max(0.0);
    }

    /// Whether the KCC reported ground contact after the last move.
    pub fn kcc_grounded(&self) -> bool {
        self.grounded
    }

    pub fn settings(&self) -> &CharacterBodySettings {
        &self.settings
    }

    /// Current capsule: `(segment half height, radius)` after vertical scaling.
    pub fn capsule_dims(&self) -> (f32, f32) {
        let radius = self.settings.radius.max(0.0);
        (self.half_extent() - radius, radius)
    }

    /// Pivot-to-feet distance; never less than the radius.
    fn half_extent(&self) -> f32 {
        let radius = self.settings.radius.max(0.0);
        (self.settings.height.max(0.0) * 0.5 * self.scale.y.max(0.0)).max(radius)
    }
}

impl KinematicBody for RapierCharacter<'_> {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn move_by(&mut self, displacement: Vec3) {
        let (half_height, radius) = self.capsule_dims();
        let query_pipeline = self.world.query_pipeline(QueryFilter::only_fixed());
        let iso = Isometry::translation(self.position.x, self.position.y, self.position.z);

        let correction = self.kcc.move_shape(
            self.tick_dt,
            &query_pipeline,
            &Capsule::new_y(half_height, radius),
            &iso,
            displacement,
            |_| {},
        );

        self.position += correction.translation;
        self.grounded = correction.grounded;
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        let before = self.half_extent();
        self.scale = scale;
        self.position.y += self.half_extent() - before;
    }
}
