#![forbid(unsafe_code)]

//! Input normalization for the lifebridge host bridge.
//!
//! Converts raw host samples (keys, touch, joystick motion) into one ordered stream of
//! [`InputEvent`]s with deterministic press/release edges for analog axes.

pub mod axis;
pub mod event;
pub mod keys;
pub mod layout;
pub mod normalizer;

pub use axis::{dead_band, AxisChannel, DiscreteState};
pub use event::{InputEvent, JoystickAxes, KeyCode, PointerAction};
pub use keys::{HostAction, InputSource};
pub use layout::{ChannelSpec, InputConfig, RawAxis, StickAliases};
pub use normalizer::{Disposition, InputNormalizer, KeyAction, MotionAction, MotionSample, RawKey};
