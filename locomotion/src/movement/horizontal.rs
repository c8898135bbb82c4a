use crate::{
    collision::Vec3,
    config::{CrouchSettings, MovementSettings},
    constants::DECELERATION_FACTOR,
    movement::state::LocomotionMode,
};

/// Target planar speed for a gait.
///
/// Sprint only counts while there is stamina left; otherwise the character walks.
#[inline]
pub fn mode_speed(
    mode: LocomotionMode,
    has_stamina: bool,
    movement: &MovementSettings,
    crouch: &CrouchSettings,
) -> f32 {
    match mode {
        LocomotionMode::Crouch => crouch.speed,
        LocomotionMode::Sprint if has_stamina => movement.sprint_speed,
        LocomotionMode::Sprint | LocomotionMode::Walk => movement.walk_speed,
    }
}

/// Smooth planar velocity toward `direction * speed` and apply ground drag.
///
/// - `direction` is a unit planar vector, or zero for "no input" (target collapses to zero).
/// - Accelerating uses `acceleration`; decelerating uses half of it.
/// - Each axis is lerped with `t = clamp(rate * dt, 0, 1)`.
/// - While grounded, planar velocity is then scaled by `max(0, 1 - ground_drag * dt)`.
///
/// The vertical component of `velocity` is left untouched.
pub fn integrate_planar(
    velocity: Vec3,
    direction: Vec3,
    speed: f32,
    grounded: bool,
    movement: &MovementSettings,
    dt: f32,
) -> Vec3 {
    let target_speed = if direction.norm_squared() > 0.0 {
        speed
    } else {
        0.0
    };
    let current_speed = velocity.x.hypot(velocity.z);
    let rate = if target_speed > current_speed {
        movement.acceleration
    } else {
        movement.acceleration * DECELERATION_FACTOR
    };
    let t = (rate * dt).clamp(0.0, 1.0);

    let target = direction * target_speed;
    let mut out = velocity;
    out.x += (target.x - out.x) * t;
    out.z += (target.z - out.z) * t;

    if grounded {
        let keep = (1.0 - movement.ground_drag * dt).max(0.0);
        out.x *= keep;
        out.z *= keep;
    }

    out
}
