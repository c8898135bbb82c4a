use crate::{collision::Vec3, config::MovementSettings, constants::RESTING_VERTICAL_VELOCITY};

/// Take-off speed that reaches `jump_force` meters of apex height under `gravity`.
#[inline]
pub fn jump_velocity(jump_force: f32, gravity: f32) -> f32 {
    (2.0 * jump_force.max(0.0) * gravity.abs()).sqrt()
}

/// Vertical integration and air drag for one tick.
///
/// - Grounded and falling: pin `y` to [`RESTING_VERTICAL_VELOCITY`] instead of accumulating.
/// - Otherwise: `y += gravity * dt`.
/// - Airborne: planar velocity is scaled by `max(0, 1 - ground_drag * air_multiplier * dt)`.
pub fn integrate_vertical(
    velocity: Vec3,
    grounded: bool,
    gravity: f32,
    movement: &MovementSettings,
    air_multiplier: f32,
    dt: f32,
) -> Vec3 {
    let mut out = velocity;
    if grounded && out.y < 0.0 {
        out.y = RESTING_VERTICAL_VELOCITY;
    } else {
        out.y += gravity * dt;
    }

    if !grounded {
        let keep = (1.0 - movement.ground_drag * air_multiplier * dt).max(0.0);
        out.x *= keep;
        out.z *= keep;
    }

    out
}
