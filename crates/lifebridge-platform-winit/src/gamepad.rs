use std::collections::BTreeMap;

use gilrs::{Axis, Button, EventType, Gilrs};
use log::{debug, info, warn};

use lifebridge_core::input::{
    keys, Disposition, InputSource, KeyAction, KeyCode, MotionSample, RawAxis, RawKey,
};
use lifebridge_core::{Bridge, ContextFactory};

/// Host key for a gamepad button.
pub fn button_key(button: Button) -> Option<KeyCode> {
    let k = match button {
        Button::South => keys::BUTTON_A,
        Button::East => keys::BUTTON_B,
        Button::West => keys::BUTTON_X,
        Button::North => keys::BUTTON_Y,
        Button::C => keys::BUTTON_C,
        Button::Z => keys::BUTTON_Z,
        Button::LeftTrigger => keys::BUTTON_L1,
        Button::RightTrigger => keys::BUTTON_R1,
        Button::LeftTrigger2 => keys::BUTTON_L2,
        Button::RightTrigger2 => keys::BUTTON_R2,
        Button::LeftThumb => keys::BUTTON_THUMBL,
        Button::RightThumb => keys::BUTTON_THUMBR,
        Button::Start => keys::BUTTON_START,
        Button::Select => keys::BUTTON_SELECT,
        Button::Mode => keys::BUTTON_MODE,
        Button::DPadUp => keys::DPAD_UP,
        Button::DPadDown => keys::DPAD_DOWN,
        Button::DPadLeft => keys::DPAD_LEFT,
        Button::DPadRight => keys::DPAD_RIGHT,
        _ => return None,
    };
    Some(k)
}

/// Raw axis and host-convention value for a gilrs axis.
///
/// gilrs reports Y axes up-positive; the host convention is down-positive.
pub fn axis_value(axis: Axis, value: f32) -> Option<(RawAxis, f32)> {
    let v = match axis {
        Axis::LeftStickX => (RawAxis::X, value),
        Axis::LeftStickY => (RawAxis::Y, -value),
        Axis::RightStickX => (RawAxis::RX, value),
        Axis::RightStickY => (RawAxis::RY, -value),
        Axis::LeftZ => (RawAxis::LTRIGGER, value),
        Axis::RightZ => (RawAxis::RTRIGGER, value),
        Axis::DPadX => (RawAxis::HAT_X, value),
        Axis::DPadY => (RawAxis::HAT_Y, -value),
        _ => return None,
    };
    Some(v)
}

struct PadState {
    sample: MotionSample,
    dirty: bool,
    disconnected: bool,
}

impl PadState {
    fn new(pad: usize) -> Self {
        Self {
            sample: MotionSample::joystick(pad as i32),
            dirty: false,
            disconnected: false,
        }
    }
}

/// Per-pad axis accumulator.
///
/// Axis changes of one loop turn collapse into a single motion sample per pad, carrying every
/// axis the pad has reported so far.
#[derive(Default)]
pub struct PadAxes {
    pads: BTreeMap<usize, PadState>,
}

impl PadAxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one axis change. Returns `false` for axes with no host mapping.
    pub fn apply(&mut self, pad: usize, axis: Axis, value: f32) -> bool {
        let Some((raw, v)) = axis_value(axis, value) else {
            return false;
        };

        let st = self.pads.entry(pad).or_insert_with(|| PadState::new(pad));
        st.sample.set(raw, v);
        st.dirty = true;
        st.disconnected = false;
        true
    }

    /// Zeroes every axis of a pad so its held stick/hat buttons are released on the next flush.
    pub fn disconnect(&mut self, pad: usize) {
        if let Some(st) = self.pads.get_mut(&pad) {
            st.sample = MotionSample::joystick(pad as i32);
            st.dirty = true;
            st.disconnected = true;
        }
    }

    /// Sends one sample per changed pad, in pad order. Returns the number of samples sent.
    pub fn flush<F: ContextFactory>(&mut self, bridge: &mut Bridge<F>) -> usize {
        let mut sent = 0usize;
        for st in self.pads.values_mut().filter(|s| s.dirty) {
            st.dirty = false;
            bridge.on_motion(&st.sample);
            sent += 1;
        }
        self.pads.retain(|_, s| !s.disconnected);
        sent
    }
}

/// Polls gilrs once per loop turn and feeds the bridge.
///
/// Buttons become gamepad-sourced key callbacks immediately; axis changes go through [`PadAxes`].
pub struct GamepadPump {
    gilrs: Option<Gilrs>,
    axes: PadAxes,
}

impl GamepadPump {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(gilrs::Error::NotImplemented(g)) => {
                warn!(target: "host", "gamepad.init backend=unsupported");
                Some(g)
            }
            Err(e) => {
                warn!(target: "host", "gamepad.init failed err='{}'", e);
                None
            }
        };

        Self {
            gilrs,
            axes: PadAxes::new(),
        }
    }

    #[inline]
    pub fn is_available(&self) -> bool {
        self.gilrs.is_some()
    }

    pub fn poll<F: ContextFactory>(&mut self, bridge: &mut Bridge<F>) {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };

        while let Some(ev) = gilrs.next_event() {
            let pad = usize::from(ev.id);
            match ev.event {
                EventType::ButtonPressed(b, _) => send_button(bridge, pad, b, KeyAction::Down),
                EventType::ButtonReleased(b, _) => send_button(bridge, pad, b, KeyAction::Up),
                EventType::AxisChanged(a, v, _) => {
                    self.axes.apply(pad, a, v);
                }
                EventType::Connected => {
                    info!(target: "host", "gamepad.connect pad={}", pad);
                }
                EventType::Disconnected => {
                    self.axes.disconnect(pad);
                    info!(target: "host", "gamepad.disconnect pad={}", pad);
                }
                _ => {}
            }
        }

        self.axes.flush(bridge);
    }
}

impl Default for GamepadPump {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards one gamepad button as a gamepad-sourced key.
pub fn send_button<F: ContextFactory>(bridge: &mut Bridge<F>, pad: usize, button: Button, action: KeyAction) {
    let Some(code) = button_key(button) else {
        debug!(target: "host", "gamepad.button unmapped={:?}", button);
        return;
    };

    let mut raw = RawKey::new(
        InputSource::GAMEPAD | InputSource::KEYBOARD,
        code.raw(),
        action,
        0,
    );
    raw.device_id = pad as i32;

    if let Disposition::HostAction(a) = bridge.on_key(&raw) {
        debug!(target: "host", "gamepad.host_action action={:?}", a);
    }
}
