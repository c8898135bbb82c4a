pub mod bitmask_flags;
pub mod collision;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod movement;
pub mod rapier_world;
pub mod stamina;
pub mod vault;

#[cfg(test)]
mod testing;

pub use collision::{
    CollisionQuery, GroundContact, GroundSensor, KinematicBody, LayerMask, RayHit, Vec3,
};
pub use config::{
    CrouchSettings, GroundSettings, JumpSettings, LocomotionConfig, MovementSettings,
    StaminaSettings, VaultSettings,
};
pub use error::ConfigError;
pub use input::{
    Environment, InputSignal, InputSignals, InputSnapshot, forward_from_yaw, right_from_yaw,
};
pub use movement::{CharacterController, LocomotionMode, LocomotionState, StepOutput};
pub use rapier_world::{
    CharacterBodySettings, ColliderShapeDef, RapierCharacter, RapierQueryWorld, WorldStaticDef,
};
pub use stamina::StaminaResource;
pub use vault::{VaultLanding, VaultTrajectory, probe_landing, quadratic_bezier};
