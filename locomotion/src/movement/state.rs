use crate::vault::VaultTrajectory;

/// Mutually exclusive ground gait.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LocomotionMode {
    #[default]
    Walk,
    Sprint,
    Crouch,
}

/// Top-level locomotion state.
///
/// `Vaulting` carries the arc being followed and suspends mode-based movement entirely.
/// A vault can only start from a non-crouched mode and clears sprint, so the mode after
/// a vault is always `Walk`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LocomotionState {
    Free(LocomotionMode),
    Vaulting(VaultTrajectory),
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self::Free(LocomotionMode::Walk)
    }
}

impl LocomotionState {
    /// Gait in effect, or `None` while vaulting.
    #[inline]
    pub fn mode(&self) -> Option<LocomotionMode> {
        match self {
            Self::Free(mode) => Some(*mode),
            Self::Vaulting(_) => None,
        }
    }

    #[inline]
    pub fn is_sprinting(&self) -> bool {
        matches!(self, Self::Free(LocomotionMode::Sprint))
    }

    #[inline]
    pub fn is_crouching(&self) -> bool {
        matches!(self, Self::Free(LocomotionMode::Crouch))
    }

    #[inline]
    pub fn is_vaulting(&self) -> bool {
        matches!(self, Self::Vaulting(_))
    }

    /// Drop back from sprint to walk; any other state is left alone.
    #[inline]
    pub fn clear_sprint(&mut self) {
        if self.is_sprinting() {
            *self = Self::Free(LocomotionMode::Walk);
        }
    }
}
