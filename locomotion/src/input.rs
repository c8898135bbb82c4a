//! Per-tick input snapshot consumed by the controller.
//!
//! Device polling happens elsewhere; the owning application samples its devices once per
//! tick and hands the result over as an [`InputSnapshot`].

use crate::{
    bitmask_flags::BitmaskFlags,
    collision::Vec3,
    constants::{DEFAULT_GRAVITY_Y, INPUT_DEADZONE},
    define_bitmask_flags,
};

define_bitmask_flags!(InputSignal, u8, {
    SprintPressed,
    SprintReleased,
    JumpPressed,
    CrouchPressed,
    VaultPressed,
});

/// Edge-triggered signals raised during this tick.
pub type InputSignals = BitmaskFlags<u8>;

/// Input sampled for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSnapshot {
    /// Strafe axis, roughly `[-1, 1]`; positive moves right.
    pub strafe: f32,
    /// Forward axis, roughly `[-1, 1]`; positive moves forward.
    pub forward: f32,
    /// Body yaw about +Y in radians. Yaw 0 faces -Z with +X to the right.
    pub yaw: f32,
    pub signals: InputSignals,
}

impl InputSnapshot {
    pub fn axes(strafe: f32, forward: f32) -> Self {
        Self {
            strafe,
            forward,
            ..Self::default()
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with(mut self, signal: InputSignal) -> Self {
        self.signals.add(signal);
        self
    }

    #[inline]
    pub fn pressed(&self, signal: InputSignal) -> bool {
        self.signals.has(signal)
    }

    #[inline]
    pub fn forward_axis(&self) -> Vec3 {
        forward_from_yaw(self.yaw)
    }

    #[inline]
    pub fn right_axis(&self) -> Vec3 {
        right_from_yaw(self.yaw)
    }

    /// Normalized planar move direction, or zero when the axes are (almost) centered.
    pub fn move_direction(&self) -> Vec3 {
        let raw = self.forward_axis() * self.forward + self.right_axis() * self.strafe;
        let len = raw.norm();
        if len > INPUT_DEADZONE {
            raw / len
        } else {
            Vec3::zeros()
        }
    }
}

/// Unit forward vector on the ground plane for `yaw` (0 faces -Z).
#[inline]
pub fn forward_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Unit right vector on the ground plane for `yaw`.
#[inline]
pub fn right_from_yaw(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}

/// External values supplied once per tick alongside the frame delta time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    /// Gravity acceleration along Y (m/s^2). Negative means down.
    pub gravity: f32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY_Y,
        }
    }
}
