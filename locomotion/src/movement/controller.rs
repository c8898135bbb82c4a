use log::{debug, warn};

use crate::{
    collision::{CollisionQuery, GroundContact, GroundSensor, KinematicBody, Vec3},
    config::LocomotionConfig,
    constants::MIN_CROUCH_SCALE,
    error::ConfigError,
    input::{Environment, InputSignal, InputSnapshot, forward_from_yaw},
    movement::{
        horizontal::{integrate_planar, mode_speed},
        state::{LocomotionMode, LocomotionState},
        vertical::{integrate_vertical, jump_velocity},
    },
    stamina::StaminaResource,
    vault::{VaultTrajectory, probe_landing},
};

/// Output of a single [`CharacterController::update`] tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutput {
    /// Displacement submitted to the kinematic body this tick.
    pub displacement: Vec3,
    /// Controller velocity after integration (unchanged while vaulting).
    pub velocity: Vec3,
    /// Ground contact sensed at the start of the tick.
    pub grounded: bool,
    pub sprinting: bool,
    pub crouching: bool,
    pub vaulting: bool,
    pub stamina_fraction: f32,
}

/// First-person locomotion controller for one character.
///
/// Owns all of its mutable state; the collision query and the kinematic body are handed
/// in at construction. Call [`update`](Self::update) once per simulation tick.
///
/// Tick order
/// 1. Ground probe.
/// 2. Mode resolution from input edges (sprint, jump, crouch, vault).
/// 3. Stamina drain/regen; sprint is dropped the moment stamina is empty.
/// 4. Planar integration, or the vault arc while vaulting.
/// 5. Vertical integration (skipped while vaulting).
/// 6. Exactly one displacement submitted to the body.
/// 7. Jump cooldown countdown.
pub struct CharacterController<Q, B> {
    config: LocomotionConfig,
    query: Q,
    body: B,
    sensor: GroundSensor,
    state: LocomotionState,
    stamina: StaminaResource,
    velocity: Vec3,
    ground: GroundContact,
    jump_cooldown: f32,
    standing_scale: Vec3,
    yaw: f32,
}

impl<Q: CollisionQuery, B: KinematicBody> CharacterController<Q, B> {
    /// Validate `config` and build a controller at rest, walking, with full stamina.
    ///
    /// The body's current scale is remembered as the standing scale.
    pub fn new(config: LocomotionConfig, query: Q, body: B) -> Result<Self, ConfigError> {
        config.validate()?;
        let sensor = GroundSensor::new(
            config.ground.player_height,
            config.ground.probe_margin,
            config.ground.layers,
        );
        let stamina = StaminaResource::new(&config.stamina);
        let standing_scale = body.scale();
        Ok(Self {
            config,
            query,
            body,
            sensor,
            state: LocomotionState::default(),
            stamina,
            velocity: Vec3::zeros(),
            ground: GroundContact::airborne(),
            jump_cooldown: 0.0,
            standing_scale,
            yaw: 0.0,
        })
    }

    /// Run one tick.
    ///
    /// `dt` is the frame delta in seconds; negative or non-finite values count as zero.
    pub fn update(&mut self, dt: f32, input: &InputSnapshot, env: &Environment) -> StepOutput {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        // 1) Ground contact (derived every tick, never trusted from last tick).
        self.ground = self.sensor.sense(&self.query, self.body.position());
        let grounded = self.ground.grounded;

        // 2) Input + mode resolution.
        self.yaw = input.yaw;
        self.handle_sprint_input(input);
        self.handle_jump_input(input, env);
        self.handle_crouch_input(input);
        if input.pressed(InputSignal::VaultPressed) {
            self.start_vault();
        }

        // 3) Stamina.
        self.stamina.update(dt, self.state.is_sprinting() && grounded);
        if self.stamina.is_depleted() && self.state.is_sprinting() {
            debug!("stamina exhausted, sprint dropped");
            self.state.clear_sprint();
        }

        // 4) + 5) Integration.
        let displacement = match &mut self.state {
            LocomotionState::Vaulting(trajectory) => {
                let target = trajectory.advance(dt);
                let finished = trajectory.is_complete();
                let delta = target - self.body.position();
                if finished {
                    debug!("vault complete at {:?}", trajectory.end);
                    self.state = LocomotionState::Free(LocomotionMode::Walk);
                }
                delta
            }
            LocomotionState::Free(mode) => {
                let speed = mode_speed(
                    *mode,
                    !self.stamina.is_depleted(),
                    &self.config.movement,
                    &self.config.crouch,
                );
                self.velocity = integrate_planar(
                    self.velocity,
                    input.move_direction(),
                    speed,
                    grounded,
                    &self.config.movement,
                    dt,
                );
                self.velocity = integrate_vertical(
                    self.velocity,
                    grounded,
                    env.gravity,
                    &self.config.movement,
                    self.config.jump.air_multiplier,
                    dt,
                );
                self.velocity * dt
            }
        };

        // 6) Single displacement submission.
        self.body.move_by(displacement);

        // 7) Cooldowns.
        if self.jump_cooldown > 0.0 {
            self.jump_cooldown = (self.jump_cooldown - dt).max(0.0);
        }

        StepOutput {
            displacement,
            velocity: self.velocity,
            grounded,
            sprinting: self.is_sprinting(),
            crouching: self.is_crouching(),
            vaulting: self.is_vaulting(),
            stamina_fraction: self.stamina_fraction(),
        }
    }

    fn handle_sprint_input(&mut self, input: &InputSnapshot) {
        if input.pressed(InputSignal::SprintPressed)
            && self.state == LocomotionState::Free(LocomotionMode::Walk)
            && !self.stamina.is_depleted()
        {
            self.state = LocomotionState::Free(LocomotionMode::Sprint);
        }

        if input.pressed(InputSignal::SprintReleased) || self.stamina.is_depleted() {
            self.state.clear_sprint();
        }
    }

    fn handle_jump_input(&mut self, input: &InputSnapshot, env: &Environment) {
        if !input.pressed(InputSignal::JumpPressed)
            || !self.ground.grounded
            || self.jump_cooldown > 0.0
            || self.state.is_vaulting()
        {
            return;
        }

        self.velocity.y = jump_velocity(self.config.jump.jump_force, env.gravity);
        self.state.clear_sprint();
        self.jump_cooldown = self.config.jump.cooldown;
        debug!("jump, take-off speed {:.3}", self.velocity.y);
    }

    fn handle_crouch_input(&mut self, input: &InputSnapshot) {
        if !input.pressed(InputSignal::CrouchPressed) {
            return;
        }

        match self.state {
            LocomotionState::Free(LocomotionMode::Crouch) => {
                self.state = LocomotionState::Free(LocomotionMode::Walk);
                self.body.set_scale(self.standing_scale);
                debug!("crouch off");
            }
            LocomotionState::Free(_) => {
                let factor = self.config.crouch.scale.clamp(MIN_CROUCH_SCALE, 1.0);
                let mut crouched = self.standing_scale;
                crouched.y *= factor;
                self.state = LocomotionState::Free(LocomotionMode::Crouch);
                self.body.set_scale(crouched);
                debug!("crouch on");
            }
            LocomotionState::Vaulting(_) => {}
        }
    }

    /// Whether a vault could start right now, facing the last input yaw.
    ///
    /// False while vaulting or crouching, when nothing is in reach, or when there is
    /// nothing to land on past the obstacle.
    pub fn can_vault(&self) -> bool {
        self.vault_allowed()
            && probe_landing(
                &self.query,
                &self.config.vault,
                self.body.position(),
                self.facing(),
            )
            .is_some()
    }

    /// Start a vault if one is possible. Returns whether a vault started.
    ///
    /// The probe pair is cast afresh; if it fails nothing changes.
    pub fn start_vault(&mut self) -> bool {
        if !self.vault_allowed() {
            return false;
        }

        let start = self.body.position();
        let Some(landing) = probe_landing(&self.query, &self.config.vault, start, self.facing())
        else {
            warn!("vault requested at {start:?} but no obstacle/landing pair was found");
            return false;
        };

        let trajectory = VaultTrajectory::new(
            start,
            landing.landing,
            self.config.vault.height,
            self.config.vault.duration,
        );
        debug!(
            "vault start {:?} -> {:?} over {:?}",
            trajectory.start, trajectory.end, landing.obstacle
        );
        self.velocity.y = 0.0;
        self.state = LocomotionState::Vaulting(trajectory);
        true
    }

    fn vault_allowed(&self) -> bool {
        matches!(
            self.state,
            LocomotionState::Free(LocomotionMode::Walk | LocomotionMode::Sprint)
        )
    }

    fn facing(&self) -> Vec3 {
        forward_from_yaw(self.yaw)
    }

    pub fn is_sprinting(&self) -> bool {
        self.state.is_sprinting()
    }

    pub fn is_crouching(&self) -> bool {
        self.state.is_crouching()
    }

    pub fn is_vaulting(&self) -> bool {
        self.state.is_vaulting()
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.grounded
    }

    /// Stamina as a fraction of max, in `[0, 1]`.
    pub fn stamina_fraction(&self) -> f32 {
        self.stamina.fraction()
    }

    pub fn stamina(&self) -> &StaminaResource {
        &self.stamina
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Gait in effect, or `None` while vaulting.
    pub fn mode(&self) -> Option<LocomotionMode> {
        self.state.mode()
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn jump_cooldown(&self) -> f32 {
        self.jump_cooldown
    }

    pub fn ground_contact(&self) -> &GroundContact {
        &self.ground
    }

    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn query(&self) -> &Q {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::RESTING_VERTICAL_VELOCITY,
        testing::{TestBody, TestWorld},
    };

    const DT: f32 = 0.02;

    type TestController = CharacterController<TestWorld, TestBody>;

    fn grounded_controller() -> TestController {
        CharacterController::new(
            LocomotionConfig::default(),
            TestWorld::with_floor(0.0),
            TestBody::standing_on(0.0, 1.0),
        )
        .expect("valid config")
    }

    fn idle() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn forward() -> InputSnapshot {
        InputSnapshot::axes(0.0, 1.0)
    }

    fn tick(ctrl: &mut TestController, input: InputSnapshot) -> StepOutput {
        ctrl.update(DT, &input, &Environment::default())
    }

    fn ticks(ctrl: &mut TestController, input: InputSnapshot, n: usize) -> StepOutput {
        let mut out = tick(ctrl, input);
        for _ in 1..n {
            out = tick(ctrl, input);
        }
        out
    }

    fn start_sprinting(ctrl: &mut TestController) {
        tick(ctrl, forward().with(InputSignal::SprintPressed));
        assert!(ctrl.is_sprinting());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = LocomotionConfig::default();
        config.vault.duration = -1.0;
        let body = TestBody::at(Vec3::zeros());
        let result = CharacterController::new(config, TestWorld::empty(), body);
        assert!(result.is_err());
    }

    #[test]
    fn sprint_three_seconds_drains_to_forty() {
        let mut ctrl = grounded_controller();
        start_sprinting(&mut ctrl);
        // One tick already drained; 149 more makes 3 seconds.
        ticks(&mut ctrl, forward(), 149);
        assert!(ctrl.is_sprinting());
        assert!((ctrl.stamina().current() - 40.0).abs() < 1.0e-2);
    }

    #[test]
    fn airborne_sprint_keeps_full_stamina() {
        let mut ctrl = CharacterController::new(
            LocomotionConfig::default(),
            TestWorld::empty(),
            TestBody::at(Vec3::new(0.0, 50.0, 0.0)),
        )
        .expect("valid config");
        let out = tick(&mut ctrl, forward().with(InputSignal::SprintPressed));
        assert!(out.sprinting);
        assert!(!out.grounded);

        // About one second of held sprint in free fall.
        let out = ticks(&mut ctrl, forward(), 49);
        assert!(!out.grounded);
        assert!(ctrl.is_sprinting());
        assert_eq!(ctrl.stamina().current(), ctrl.stamina().max());
    }

    #[test]
    fn empty_stamina_blocks_sprint_immediately() {
        let mut ctrl = grounded_controller();
        ctrl.stamina.set_current(0.0);
        let out = tick(&mut ctrl, forward().with(InputSignal::SprintPressed));
        assert!(!out.sprinting);
        assert!(!ctrl.is_sprinting());
    }

    #[test]
    fn sprint_ends_when_stamina_runs_out_and_stays_off() {
        let mut ctrl = grounded_controller();
        start_sprinting(&mut ctrl);

        let held = forward();
        let mut dropped_at = None;
        for i in 0..400 {
            let out = tick(&mut ctrl, held);
            if ctrl.stamina().is_depleted() {
                assert!(!out.sprinting, "still sprinting on empty stamina");
                dropped_at.get_or_insert(i);
            }
        }
        assert!(dropped_at.is_some());

        // Holding the axis without a new press never re-enters sprint.
        ticks(&mut ctrl, held, 200);
        assert!(!ctrl.is_sprinting());
    }

    #[test]
    fn sprint_release_returns_to_walk() {
        let mut ctrl = grounded_controller();
        start_sprinting(&mut ctrl);
        tick(&mut ctrl, idle().with(InputSignal::SprintReleased));
        assert_eq!(ctrl.mode(), Some(LocomotionMode::Walk));
    }

    #[test]
    fn sprint_reaches_higher_speed_than_walk() {
        let mut walker = grounded_controller();
        let walk = ticks(&mut walker, forward(), 100).velocity;

        let mut sprinter = grounded_controller();
        start_sprinting(&mut sprinter);
        let sprint = ticks(&mut sprinter, forward(), 99).velocity;

        assert!(sprint.z < walk.z, "forward is -Z");
        assert!(walk.z < 0.0);
    }

    #[test]
    fn crouch_toggle_restores_scale_exactly() {
        let body = TestBody {
            scale: Vec3::new(1.3, 0.7, 0.9),
            ..TestBody::standing_on(0.0, 1.0)
        };
        let mut ctrl = CharacterController::new(
            LocomotionConfig::default(),
            TestWorld::with_floor(0.0),
            body,
        )
        .expect("valid config");

        tick(&mut ctrl, idle().with(InputSignal::CrouchPressed));
        assert!(ctrl.is_crouching());
        assert_eq!(ctrl.body().scale(), Vec3::new(1.3, 0.35, 0.9));

        tick(&mut ctrl, idle().with(InputSignal::CrouchPressed));
        assert!(!ctrl.is_crouching());
        assert_eq!(ctrl.body().scale(), Vec3::new(1.3, 0.7, 0.9));
    }

    #[test]
    fn crouch_clears_sprint_and_blocks_it() {
        let mut ctrl = grounded_controller();
        start_sprinting(&mut ctrl);

        tick(&mut ctrl, idle().with(InputSignal::CrouchPressed));
        assert!(ctrl.is_crouching());
        assert!(!ctrl.is_sprinting());

        tick(&mut ctrl, idle().with(InputSignal::SprintPressed));
        assert!(ctrl.is_crouching());
        assert!(!ctrl.is_sprinting());
    }

    #[test]
    fn crouch_scale_is_clamped() {
        let mut config = LocomotionConfig::default();
        config.crouch.scale = 0.0;
        let mut ctrl = CharacterController::new(
            config,
            TestWorld::with_floor(0.0),
            TestBody::standing_on(0.0, 1.0),
        )
        .expect("valid config");
        tick(&mut ctrl, idle().with(InputSignal::CrouchPressed));
        assert_eq!(ctrl.body().scale().y, MIN_CROUCH_SCALE);
    }

    #[test]
    fn jump_sets_takeoff_speed_and_clears_sprint() {
        let mut ctrl = grounded_controller();
        start_sprinting(&mut ctrl);

        let out = tick(&mut ctrl, forward().with(InputSignal::JumpPressed));
        let takeoff = jump_velocity(5.0, Environment::default().gravity);
        // Gravity integrates once after take-off in the same tick.
        let expected = takeoff + Environment::default().gravity * DT;
        assert!((out.velocity.y - expected).abs() < 1.0e-4);
        assert!(!ctrl.is_sprinting());
        assert!(ctrl.jump_cooldown() > 0.0);
    }

    #[test]
    fn jump_is_ignored_during_cooldown() {
        let mut ctrl = grounded_controller();
        tick(&mut ctrl, idle().with(InputSignal::JumpPressed));
        // Put the character back on the ground with the cooldown still running.
        ctrl.body.position.y = 1.0;
        ctrl.velocity.y = -1.0;
        assert!(ctrl.jump_cooldown() > 0.0);

        let out = tick(&mut ctrl, idle().with(InputSignal::JumpPressed));
        assert_eq!(out.velocity.y, RESTING_VERTICAL_VELOCITY);
    }

    #[test]
    fn jump_is_ignored_while_airborne() {
        let env = Environment::default();
        let mut a = CharacterController::new(
            LocomotionConfig::default(),
            TestWorld::with_floor(0.0),
            TestBody::at(Vec3::new(0.0, 10.0, 0.0)),
        )
        .expect("valid config");
        let mut b = CharacterController::new(
            LocomotionConfig::default(),
            TestWorld::with_floor(0.0),
            TestBody::at(Vec3::new(0.0, 10.0, 0.0)),
        )
        .expect("valid config");

        let with_jump = a.update(DT, &idle().with(InputSignal::JumpPressed), &env);
        let without = b.update(DT, &idle(), &env);
        assert!(!with_jump.grounded);
        assert_eq!(with_jump.velocity.y, without.velocity.y);
        assert_eq!(a.jump_cooldown(), 0.0);
    }

    #[test]
    fn cooldown_counts_down_to_zero() {
        let mut ctrl = grounded_controller();
        tick(&mut ctrl, idle().with(InputSignal::JumpPressed));
        ticks(&mut ctrl, idle(), 20);
        assert_eq!(ctrl.jump_cooldown(), 0.0);
    }

    #[test]
    fn grounded_fall_speed_snaps_to_resting_value() {
        let mut ctrl = grounded_controller();
        ctrl.velocity.y = -5.0;
        let out = tick(&mut ctrl, idle());
        assert_eq!(out.velocity.y, RESTING_VERTICAL_VELOCITY);
        let out = tick(&mut ctrl, idle());
        assert_eq!(out.velocity.y, RESTING_VERTICAL_VELOCITY);
    }

    #[test]
    fn airborne_character_accelerates_downward() {
        let mut ctrl = CharacterController::new(
            LocomotionConfig::default(),
            TestWorld::empty(),
            TestBody::at(Vec3::new(0.0, 50.0, 0.0)),
        )
        .expect("valid config");
        let out = ticks(&mut ctrl, idle(), 10);
        assert!(!out.grounded);
        assert!((out.velocity.y - Environment::default().gravity * DT * 10.0).abs() < 1.0e-4);
        assert!(ctrl.body().position().y < 50.0);
    }

    #[test]
    fn no_input_brings_character_to_rest() {
        let mut ctrl = grounded_controller();
        ticks(&mut ctrl, InputSnapshot::axes(1.0, 0.0), 50);
        let out = ticks(&mut ctrl, idle(), 200);
        assert!(out.velocity.x.abs() < 1.0e-3);
        assert!(out.velocity.z.abs() < 1.0e-3);
    }

    #[test]
    fn exactly_one_move_per_tick() {
        let mut ctrl = grounded_controller();
        ticks(&mut ctrl, InputSnapshot::axes(0.3, -0.7), 25);
        assert_eq!(ctrl.body().moves.len(), 25);
    }

    #[test]
    fn negative_dt_is_a_no_op_tick() {
        let mut ctrl = grounded_controller();
        let before = ctrl.body().position();
        let out = ctrl.update(-1.0, &forward(), &Environment::default());
        assert_eq!(out.displacement, Vec3::zeros());
        assert_eq!(ctrl.body().position(), before);
    }

    fn wall_world() -> TestWorld {
        // Raised platform ahead (-Z): its face is in reach of the chest-height probe and
        // its top is within the landing search. Floor at y = 0.
        TestWorld::with_floor(0.0).with_box(Vec3::new(-2.0, 0.0, -6.0), Vec3::new(2.0, 1.8, -2.0))
    }

    fn wall_controller() -> TestController {
        CharacterController::new(
            LocomotionConfig::default(),
            wall_world(),
            TestBody::standing_on(0.0, 1.0),
        )
        .expect("valid config")
    }

    #[test]
    fn can_vault_needs_obstacle_and_landing() {
        assert!(!grounded_controller().can_vault());
        assert!(wall_controller().can_vault());
    }

    #[test]
    fn cannot_vault_while_crouching() {
        let mut ctrl = wall_controller();
        tick(&mut ctrl, idle().with(InputSignal::CrouchPressed));
        assert!(!ctrl.can_vault());
        tick(&mut ctrl, idle().with(InputSignal::VaultPressed));
        assert!(!ctrl.is_vaulting());
    }

    #[test]
    fn failed_vault_creates_no_state() {
        let mut ctrl = grounded_controller();
        ctrl.velocity.y = -1.0;
        assert!(!ctrl.start_vault());
        assert_eq!(ctrl.mode(), Some(LocomotionMode::Walk));
        assert_eq!(ctrl.velocity().y, -1.0);
    }

    #[test]
    fn vault_follows_arc_to_landing_then_resumes() {
        let mut ctrl = wall_controller();
        start_sprinting(&mut ctrl);

        let out = tick(&mut ctrl, idle().with(InputSignal::VaultPressed));
        assert!(out.vaulting);
        assert!(!out.sprinting);
        assert_eq!(out.velocity.y, 0.0);

        let LocomotionState::Vaulting(trajectory) = *ctrl.state() else {
            panic!("expected vaulting state");
        };
        let start_y = trajectory.start.y;
        assert!((trajectory.control.y - (start_y.max(trajectory.end.y) + 1.5)).abs() < 1.0e-5);

        // 0.5s at 0.02s per tick: about 25 ticks in total, one already spent.
        let mut peak = start_y;
        let mut vault_ticks = 1;
        while ctrl.is_vaulting() && vault_ticks < 40 {
            let out = tick(&mut ctrl, idle().with(InputSignal::JumpPressed));
            assert_eq!(out.velocity.y, 0.0, "no gravity or jumps mid-vault");
            peak = peak.max(ctrl.body().position().y);
            vault_ticks += 1;
        }
        assert!((25..=26).contains(&vault_ticks), "{vault_ticks} ticks");
        assert!(!ctrl.is_vaulting());
        assert_eq!(ctrl.mode(), Some(LocomotionMode::Walk));
        assert!(peak > start_y + 0.5);

        let end = trajectory.end;
        assert!((end.y - 1.8).abs() < 1.0e-5, "lands on the platform top");
        let pos = ctrl.body().position();
        assert!((pos - end).norm() < 1.0e-4);

        // Next tick is ordinary locomotion again.
        let out = tick(&mut ctrl, idle());
        assert!(!out.vaulting);
    }

    #[test]
    fn vault_ignores_crouch_mid_arc() {
        let mut ctrl = wall_controller();
        tick(&mut ctrl, idle().with(InputSignal::VaultPressed));
        tick(&mut ctrl, idle().with(InputSignal::CrouchPressed));
        assert!(ctrl.is_vaulting());
        assert_eq!(ctrl.body().scale(), Vec3::new(1.0, 1.0, 1.0));
    }

    /// Deterministic pseudo-random input soak: invariants hold on every tick.
    #[test]
    fn invariants_hold_under_random_input() {
        let mut ctrl = wall_controller();
        let mut seed: u32 = 0x9e37_79b9;
        let mut next = || {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed
        };

        for _ in 0..5_000 {
            let r = next();
            let mut input = InputSnapshot::axes(
                ((r & 0xff) as f32 / 127.5) - 1.0,
                (((r >> 8) & 0xff) as f32 / 127.5) - 1.0,
            )
            .with_yaw(((r >> 16) & 0xff) as f32 * 0.05);
            for (bit, signal) in InputSignal::ALL.iter().enumerate() {
                if (r >> (24 + bit)) & 1 == 1 && next() % 4 == 0 {
                    input = input.with(*signal);
                }
            }

            let out = ctrl.update(DT, &input, &Environment::default());
            let stamina = ctrl.stamina().current();
            assert!((0.0..=ctrl.stamina().max()).contains(&stamina));
            assert!(!(out.sprinting && out.crouching));
            assert!(!(out.sprinting && stamina <= 0.0));
            assert!((0.0..=1.0).contains(&out.stamina_fraction));
        }
    }
}
