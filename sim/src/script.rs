//! Scripted input timeline.
//!
//! A script is a list of timed steps. `Hold` changes the held axes/yaw until the next
//! `Hold`; `Press` raises an edge signal for exactly one tick; `Hitch` makes the next
//! frame take longer than a tick, like a stalled frame would.

use std::f32::consts::FRAC_PI_2;

use locomotion::{InputSignal, InputSnapshot};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Hold { strafe: f32, forward: f32, yaw: f32 },
    Press(InputSignal),
    Hitch { frame_s: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub at_s: f32,
    pub label: &'static str,
    pub action: Action,
}

impl ScriptStep {
    pub const fn new(at_s: f32, label: &'static str, action: Action) -> Self {
        Self { at_s, label, action }
    }
}

/// Yaw that faces +X.
const FACE_POS_X: f32 = -FRAC_PI_2;

const fn hold(forward: f32, yaw: f32) -> Action {
    Action::Hold {
        strafe: 0.0,
        forward,
        yaw,
    }
}

/// Walk, sprint until exhausted, crouch toggle, jump, then vault onto the ledge.
pub fn default_timeline() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new(0.0, "settle", hold(0.0, FACE_POS_X)),
        ScriptStep::new(1.0, "walk +X", hold(1.0, FACE_POS_X)),
        ScriptStep::new(3.0, "sprint", Action::Press(InputSignal::SprintPressed)),
        ScriptStep::new(6.5, "frame hitch", Action::Hitch { frame_s: 0.4 }),
        ScriptStep::new(9.0, "stop", hold(0.0, FACE_POS_X)),
        ScriptStep::new(10.0, "crouch", Action::Press(InputSignal::CrouchPressed)),
        ScriptStep::new(10.0, "crouch walk", hold(1.0, FACE_POS_X)),
        ScriptStep::new(12.0, "stand", Action::Press(InputSignal::CrouchPressed)),
        ScriptStep::new(12.5, "stop", hold(0.0, FACE_POS_X)),
        ScriptStep::new(13.0, "jump", Action::Press(InputSignal::JumpPressed)),
        ScriptStep::new(16.0, "walk to ledge", hold(1.0, 0.0)),
        ScriptStep::new(18.0, "stop", hold(0.0, 0.0)),
        ScriptStep::new(18.5, "vault", Action::Press(InputSignal::VaultPressed)),
        ScriptStep::new(20.0, "end", hold(0.0, 0.0)),
    ]
}

/// Plays a timeline back one tick at a time.
pub struct ScriptPlayer {
    steps: Vec<ScriptStep>,
    next: usize,
    held: InputSnapshot,
}

/// What the script wants for the coming tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub input: InputSnapshot,
    /// Wall-clock length of this frame when it is not a regular tick.
    pub hitch_s: Option<f32>,
}

impl ScriptPlayer {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by(|a, b| a.at_s.total_cmp(&b.at_s));
        Self {
            steps,
            next: 0,
            held: InputSnapshot::default(),
        }
    }

    /// Time of the last step; the run ends there.
    pub fn end_s(&self) -> f32 {
        self.steps.last().map_or(0.0, |s| s.at_s)
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    /// Apply every step due at or before `t` and return the input for this tick.
    pub fn sample(&mut self, t: f32) -> Frame {
        let mut input = self.held;
        let mut hitch_s = None;

        while let Some(step) = self.steps.get(self.next).filter(|s| s.at_s <= t) {
            log::info!("t={t:6.2}s script: {}", step.label);
            match step.action {
                Action::Hold {
                    strafe,
                    forward,
                    yaw,
                } => {
                    self.held = InputSnapshot::axes(strafe, forward).with_yaw(yaw);
                    input.strafe = strafe;
                    input.forward = forward;
                    input.yaw = yaw;
                }
                Action::Press(signal) => input = input.with(signal),
                Action::Hitch { frame_s } => hitch_s = Some(frame_s),
            }
            self.next += 1;
        }

        Frame { input, hitch_s }
    }
}
