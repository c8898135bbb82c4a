/*!
Locomotion state machine and per-tick integration.

- state:      `LocomotionMode` (walk/sprint/crouch) and the top-level `LocomotionState`
- horizontal: target speed selection and planar velocity smoothing + ground drag
- vertical:   jump take-off speed, gravity / resting snap, air drag
- controller: `CharacterController`, the explicit per-tick entry point
*/

pub mod controller;
pub mod horizontal;
pub mod state;
pub mod vertical;

pub use controller::{CharacterController, StepOutput};
pub use state::{LocomotionMode, LocomotionState};
