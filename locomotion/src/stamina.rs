use crate::config::StaminaSettings;

/// Depletable, regenerating resource gating the sprint mode.
///
/// Draining resets the regen-delay countdown; regeneration only starts once that
/// countdown has run out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaminaResource {
    current: f32,
    max: f32,
    drain_rate: f32,
    regen_rate: f32,
    regen_delay: f32,
    regen_timer: f32,
}

impl StaminaResource {
    /// Full stamina, regeneration not delayed.
    pub fn new(settings: &StaminaSettings) -> Self {
        let max = settings.max.max(0.0);
        Self {
            current: max,
            max,
            drain_rate: settings.drain_rate.max(0.0),
            regen_rate: settings.regen_rate.max(0.0),
            regen_delay: settings.regen_delay.max(0.0),
            regen_timer: 0.0,
        }
    }

    fn clamp(&mut self) {
        self.current = self.current.clamp(0.0, self.max);
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Seconds left before regeneration may start.
    pub fn regen_delay_remaining(&self) -> f32 {
        self.regen_timer
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Stamina as a fraction of max, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    pub fn set_current(&mut self, value: f32) {
        self.current = value;
        self.clamp();
    }

    /// Advance by `dt` seconds. `draining` is true while sprinting on the ground.
    pub fn update(&mut self, dt: f32, draining: bool) {
        let dt = dt.max(0.0);
        if draining {
            self.current -= self.drain_rate * dt;
            self.regen_timer = self.regen_delay;
        } else {
            self.regen_timer = (self.regen_timer - dt).max(0.0);
            if self.regen_timer <= 0.0 && self.current < self.max {
                self.current += self.regen_rate * dt;
            }
        }
        self.clamp();
    }
}
