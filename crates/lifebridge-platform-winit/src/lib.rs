//! Desktop host for the lifebridge coordinator.
//!
//! The platform crate owns the winit loop and translates window, keyboard, touch and gamepad
//! activity into bridge callbacks.

mod app;
mod error;
pub mod gamepad;
pub mod keymap;
pub mod lifecycle;

pub use app::run_host_app;
pub use error::{HostError, HostResult};
pub use gamepad::{GamepadPump, PadAxes};
