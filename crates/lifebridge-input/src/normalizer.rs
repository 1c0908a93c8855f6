use log::{debug, trace};
use std::collections::BTreeMap;

use crate::axis::{dead_band, AxisChannel};
use crate::event::{InputEvent, JoystickAxes, KeyCode, PointerAction};
use crate::keys::{host_action_for, HostAction, InputSource};
use crate::layout::{ChannelSpec, InputConfig, RawAxis, StickAliases};

/* =============================================================================================
   Raw host samples
   ============================================================================================= */

/// Host key action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Down,
    Up,
    /// Batched / multi-character actions. Not handled by the bridge.
    Other(i32),
}

impl KeyAction {
    #[inline]
    pub fn from_raw(v: i32) -> Self {
        match v {
            0 => Self::Down,
            1 => Self::Up,
            other => Self::Other(other),
        }
    }
}

/// Raw key sample as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawKey {
    pub device_id: i32,
    pub source: InputSource,
    pub code: u32,
    pub action: KeyAction,
    pub repeat: u32,
}

impl RawKey {
    #[inline]
    pub fn new(source: InputSource, code: u32, action: KeyAction, repeat: u32) -> Self {
        Self {
            device_id: 0,
            source,
            code,
            action,
            repeat,
        }
    }
}

/// Host motion action. Only `Move` samples from joystick-class devices carry axis data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionAction {
    Move,
    Other(i32),
}

/// One raw generic-motion sample: every axis the device reported in this callback.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionSample {
    pub device_id: i32,
    pub source: InputSource,
    pub action: MotionAction,
    axes: Vec<(RawAxis, f32)>,
}

impl MotionSample {
    #[inline]
    pub fn new(device_id: i32, source: InputSource, action: MotionAction) -> Self {
        Self {
            device_id,
            source,
            action,
            axes: Vec::new(),
        }
    }

    /// Joystick move sample, the common case.
    #[inline]
    pub fn joystick(device_id: i32) -> Self {
        Self::new(device_id, InputSource::JOYSTICK, MotionAction::Move)
    }

    #[inline]
    pub fn with(mut self, axis: RawAxis, value: f32) -> Self {
        self.set(axis, value);
        self
    }

    #[inline]
    pub fn set(&mut self, axis: RawAxis, value: f32) {
        match self.axes.iter_mut().find(|(a, _)| *a == axis) {
            Some(slot) => slot.1 = value,
            None => self.axes.push((axis, value)),
        }
    }

    /// Unreported axes read as 0.0.
    #[inline]
    pub fn value(&self, axis: RawAxis) -> f32 {
        self.axes
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn axes(&self) -> &[(RawAxis, f32)] {
        &self.axes
    }
}

/// What happened to a host input callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Canonical events were produced for the native context.
    Forwarded,
    /// The host should perform this action itself; nothing is forwarded.
    HostAction(HostAction),
    /// Swallowed without producing events.
    Consumed,
    /// Not ours; the host should run its default handling.
    Unhandled,
}

impl Disposition {
    /// Value for host callbacks that return "consumed".
    #[inline]
    pub fn is_consumed(self) -> bool {
        !matches!(self, Self::Unhandled)
    }
}

/* =============================================================================================
   Normalizer
   ============================================================================================= */

/// Dead-bands each aliased raw channel, then sums them.
#[inline]
fn aggregate(sample: &MotionSample, sources: &[RawAxis], band: f32) -> f32 {
    sources
        .iter()
        .map(|a| dead_band(sample.value(*a), band))
        .sum()
}

/// Translates raw host input into canonical [`InputEvent`]s.
///
/// Owns only per-device axis channel state; it never sees lifecycle state. Each device gets its
/// own channel set on its first joystick sample, so one pad never releases another pad's held
/// stick buttons. Events for one raw sample are appended to `out` in a fixed order, callers
/// deliver them in that order.
#[derive(Debug, Clone)]
pub struct InputNormalizer {
    dead_band: f32,
    press_threshold: f32,
    sticks: StickAliases,
    layout: Vec<ChannelSpec>,
    devices: BTreeMap<i32, Vec<AxisChannel>>,
}

impl InputNormalizer {
    pub fn new(cfg: &InputConfig) -> Self {
        debug!(
            target: "input",
            "normalizer.init dead_band={} press_threshold={} channels={}",
            cfg.dead_band,
            cfg.press_threshold,
            cfg.channels.len()
        );

        Self {
            dead_band: cfg.dead_band,
            press_threshold: cfg.press_threshold,
            sticks: cfg.sticks.clone(),
            layout: cfg.channels.clone(),
            devices: BTreeMap::new(),
        }
    }

    /// Channel table every device is instantiated from.
    #[inline]
    pub fn layout(&self) -> &[ChannelSpec] {
        &self.layout
    }

    /// Channel state of one device, `None` until it sends a joystick sample.
    #[inline]
    pub fn device_channels(&self, device_id: i32) -> Option<&[AxisChannel]> {
        self.devices.get(&device_id).map(Vec::as_slice)
    }

    pub fn key(&self, raw: &RawKey, out: &mut Vec<InputEvent>) -> Disposition {
        let pressed = match raw.action {
            KeyAction::Down => true,
            KeyAction::Up => false,
            KeyAction::Other(a) => {
                trace!(
                    target: "input",
                    "key.unhandled code={} action={} source={:#x}",
                    raw.code,
                    a,
                    raw.source.bits()
                );
                return Disposition::Unhandled;
            }
        };

        let mut code = KeyCode::new(raw.code);

        if let Some(action) = host_action_for(code) {
            return if pressed {
                Disposition::HostAction(action)
            } else {
                Disposition::Consumed
            };
        }

        if raw.source.is_joypad_keys() {
            code = code.joypad();
        }

        out.push(if pressed {
            InputEvent::key_down(code, raw.repeat)
        } else {
            InputEvent::key_up(code)
        });
        Disposition::Forwarded
    }

    /// Touch passes through untouched.
    #[inline]
    pub fn touch(&self, action: PointerAction, x: f32, y: f32, out: &mut Vec<InputEvent>) -> Disposition {
        out.push(InputEvent::Pointer { action, x, y });
        Disposition::Forwarded
    }

    /// Emits one aggregate joystick event followed by the synthesized edges of every channel,
    /// in table order.
    pub fn motion(&mut self, sample: &MotionSample, out: &mut Vec<InputEvent>) -> Disposition {
        if !sample.source.is_joystick() || sample.action != MotionAction::Move {
            return Disposition::Unhandled;
        }

        let band = self.dead_band;
        let press = self.press_threshold;

        let axes = JoystickAxes {
            lx: aggregate(sample, &self.sticks.lx, band),
            ly: aggregate(sample, &self.sticks.ly, band),
            rx: aggregate(sample, &self.sticks.rx, band),
            ry: aggregate(sample, &self.sticks.ry, band),
        };
        out.push(InputEvent::JoystickAxis(axes));

        let layout = &self.layout;
        let channels = self.devices.entry(sample.device_id).or_insert_with(|| {
            debug!(target: "input", "device.track device={}", sample.device_id);
            layout.iter().map(AxisChannel::from_spec).collect()
        });

        let mut edges = 0usize;
        for ch in channels.iter_mut() {
            let v = aggregate(sample, ch.sources(), band);
            edges += ch.update(v, press, out);
        }

        if edges > 0 {
            trace!(target: "input", "motion.edges device={} count={}", sample.device_id, edges);
        }
        Disposition::Forwarded
    }

    /// Drops all channel state (used when the native context goes away).
    pub fn reset(&mut self) {
        debug!(target: "input", "normalizer.reset devices={}", self.devices.len());
        self.devices.clear();
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new(&InputConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_bands_each_source_before_summing() {
        let s = MotionSample::joystick(0)
            .with(RawAxis::RX, 0.005)
            .with(RawAxis::Z, 0.4);

        // 0.005 is inside the band on its own and must not leak into the sum.
        assert_eq!(aggregate(&s, &[RawAxis::RX, RawAxis::Z], 0.01), 0.4);
        assert_eq!(aggregate(&s, &[RawAxis::RX], 0.01), 0.0);
        assert_eq!(aggregate(&s, &[], 0.01), 0.0);
    }
}
