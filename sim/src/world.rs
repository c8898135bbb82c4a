//! Static scene for the headless run: an open ground plane and one raised ledge.

use locomotion::{ColliderShapeDef, LayerMask, RapierQueryWorld, Vec3, WorldStaticDef};

pub const GROUND_LAYER: LayerMask = LayerMask::layer(0);
pub const PROPS_LAYER: LayerMask = LayerMask::layer(1);

/// Near face of the ledge (world Z); the ledge extends toward -Z from here.
pub const LEDGE_FACE_Z: f32 = -8.0;
pub const LEDGE_HEIGHT: f32 = 1.7;

/// Where the character's capsule center starts (slightly above its resting height).
pub const SPAWN: [f32; 3] = [0.0, 1.05, 0.0];

pub fn world_defs() -> Vec<WorldStaticDef> {
    let ledge_depth = 6.0;
    vec![
        WorldStaticDef::new(
            1,
            Vec3::zeros(),
            ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
        )
        .on_layers(GROUND_LAYER),
        WorldStaticDef::new(
            2,
            Vec3::new(0.0, LEDGE_HEIGHT * 0.5, LEDGE_FACE_Z - ledge_depth * 0.5),
            ColliderShapeDef::Cuboid {
                half_extents: Vec3::new(100.0, LEDGE_HEIGHT * 0.5, ledge_depth * 0.5),
            },
        )
        .on_layers(PROPS_LAYER),
    ]
}

pub fn build_world() -> RapierQueryWorld {
    let world = RapierQueryWorld::build(world_defs());
    log::info!(
        "world: ground plane + ledge (face z={LEDGE_FACE_Z}, height {LEDGE_HEIGHT}m)"
    );
    world
}
