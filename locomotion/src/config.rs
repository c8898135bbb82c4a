/*!
Per-character locomotion tuning.

Values are grouped the way designers tune them. Every section deserializes with
defaults, so a TOML file only needs the keys it overrides:

```toml
[movement]
walk_speed = 4.5

[stamina]
max = 150.0
```

Notes
- Distances are in meters, time in seconds, speeds in m/s.
- Validation happens once, at load or controller construction; the tick never
  re-checks these values.
*/

use serde::Deserialize;

use crate::{collision::LayerMask, error::ConfigError};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    /// Multiplicative planar drag per second while grounded.
    pub ground_drag: f32,
    /// Exponential smoothing rate toward the target planar velocity.
    pub acceleration: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            sprint_speed: 10.0,
            ground_drag: 5.0,
            acceleration: 10.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct JumpSettings {
    /// Apex height factor: take-off speed is `sqrt(2 * jump_force * |gravity|)`.
    pub jump_force: f32,
    /// Seconds before another jump is accepted.
    pub cooldown: f32,
    /// Fraction of `ground_drag` applied to planar velocity while airborne.
    pub air_multiplier: f32,
}

impl Default for JumpSettings {
    fn default() -> Self {
        Self {
            jump_force: 5.0,
            cooldown: 0.25,
            air_multiplier: 0.4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CrouchSettings {
    pub speed: f32,
    /// Vertical scale factor applied to the body while crouched.
    pub scale: f32,
}

impl Default for CrouchSettings {
    fn default() -> Self {
        Self {
            speed: 2.5,
            scale: 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StaminaSettings {
    pub max: f32,
    /// Stamina per second spent while sprinting on the ground.
    pub drain_rate: f32,
    /// Stamina per second recovered once the regen delay has elapsed.
    pub regen_rate: f32,
    /// Seconds after the last drain before regeneration starts.
    pub regen_delay: f32,
}

impl Default for StaminaSettings {
    fn default() -> Self {
        Self {
            max: 100.0,
            drain_rate: 20.0,
            regen_rate: 10.0,
            regen_delay: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct VaultSettings {
    /// Arc height above the higher of start/end, and the landing probe's start height.
    pub height: f32,
    /// Forward probe range for an obstacle.
    pub max_distance: f32,
    /// Seconds the arc takes from start to end.
    pub duration: f32,
    /// Height above the pivot the forward probe starts at.
    pub probe_height: f32,
    /// Distance ahead of the pivot the forward probe starts at.
    pub probe_forward_offset: f32,
    /// Distance past the obstacle hit where the landing probe is cast.
    pub landing_clearance: f32,
    /// Extra downward range of the landing probe beyond `height`.
    pub landing_search_extra: f32,
    pub layers: LayerMask,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            height: 1.5,
            max_distance: 2.0,
            duration: 0.5,
            probe_height: 0.5,
            probe_forward_offset: 0.5,
            landing_clearance: 0.5,
            landing_search_extra: 1.0,
            layers: LayerMask::ALL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GroundSettings {
    /// Full standing height of the character; the pivot sits at half of it.
    pub player_height: f32,
    /// Probe length past the feet.
    pub probe_margin: f32,
    pub layers: LayerMask,
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            player_height: 2.0,
            probe_margin: 0.2,
            layers: LayerMask::ALL,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    pub movement: MovementSettings,
    pub jump: JumpSettings,
    pub crouch: CrouchSettings,
    pub stamina: StaminaSettings,
    pub vault: VaultSettings,
    pub ground: GroundSettings,
}

impl LocomotionConfig {
    /// Parse a TOML document (missing keys take defaults) and validate it.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the tick cannot run with.
    ///
    /// `vault.duration` may be zero (the vault completes on its first tick), and
    /// `crouch.scale` is clamped at use, so neither is checked beyond being non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("movement.walk_speed", self.movement.walk_speed),
            ("movement.sprint_speed", self.movement.sprint_speed),
            ("movement.ground_drag", self.movement.ground_drag),
            ("movement.acceleration", self.movement.acceleration),
            ("jump.jump_force", self.jump.jump_force),
            ("jump.cooldown", self.jump.cooldown),
            ("jump.air_multiplier", self.jump.air_multiplier),
            ("crouch.speed", self.crouch.speed),
            ("crouch.scale", self.crouch.scale),
            ("stamina.drain_rate", self.stamina.drain_rate),
            ("stamina.regen_rate", self.stamina.regen_rate),
            ("stamina.regen_delay", self.stamina.regen_delay),
            ("vault.height", self.vault.height),
            ("vault.max_distance", self.vault.max_distance),
            ("vault.duration", self.vault.duration),
            ("vault.probe_height", self.vault.probe_height),
            (
                "vault.probe_forward_offset",
                self.vault.probe_forward_offset,
            ),
            ("vault.landing_clearance", self.vault.landing_clearance),
            (
                "vault.landing_search_extra",
                self.vault.landing_search_extra,
            ),
            ("ground.probe_margin", self.ground.probe_margin),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        let positive = [
            ("stamina.max", self.stamina.max),
            ("ground.player_height", self.ground.player_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.movement.sprint_speed < self.movement.walk_speed {
            return Err(ConfigError::SprintSlowerThanWalk {
                walk: self.movement.walk_speed,
                sprint: self.movement.sprint_speed,
            });
        }

        Ok(())
    }
}
