/// Vertical velocity (m/s) a grounded character is pinned to while its fall speed is negative.
///
/// Keeps a small downward bias so the kinematic body stays in contact with the ground,
/// without letting fall speed accumulate into a false take-off.
pub const RESTING_VERTICAL_VELOCITY: f32 = -2.0;

/// Default gravity acceleration along Y (m/s^2). Negative means down.
pub const DEFAULT_GRAVITY_Y: f32 = -9.81;

/// Multiplier applied to `acceleration` when the target planar speed is below the current one.
pub const DECELERATION_FACTOR: f32 = 0.5;

/// Smallest crouch scale accepted; crouch factors are clamped into `[MIN_CROUCH_SCALE, 1]`.
pub const MIN_CROUCH_SCALE: f32 = 0.05;

/// Input vectors shorter than this are treated as "no input" (direction collapses to zero).
pub const INPUT_DEADZONE: f32 = 1.0e-5;

/// Practical small distance for comparisons (meters).
pub const DIST_EPS: f32 = 1.0e-6;
