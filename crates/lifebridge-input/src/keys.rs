//! Host key codes and input source classes used by the normalizer.
//!
//! Values follow the Android `KeyEvent` / `InputDevice` numbering, which is the code space the
//! native side binds actions against.

use bitflags::bitflags;

use crate::event::KeyCode;

pub const DPAD_UP: KeyCode = KeyCode::new(19);
pub const DPAD_DOWN: KeyCode = KeyCode::new(20);
pub const DPAD_LEFT: KeyCode = KeyCode::new(21);
pub const DPAD_RIGHT: KeyCode = KeyCode::new(22);

pub const VOLUME_UP: KeyCode = KeyCode::new(24);
pub const VOLUME_DOWN: KeyCode = KeyCode::new(25);

pub const ENTER: KeyCode = KeyCode::new(66);
pub const ESCAPE: KeyCode = KeyCode::new(111);

pub const BUTTON_A: KeyCode = KeyCode::new(96);
pub const BUTTON_B: KeyCode = KeyCode::new(97);
pub const BUTTON_C: KeyCode = KeyCode::new(98);
pub const BUTTON_X: KeyCode = KeyCode::new(99);
pub const BUTTON_Y: KeyCode = KeyCode::new(100);
pub const BUTTON_Z: KeyCode = KeyCode::new(101);
pub const BUTTON_L1: KeyCode = KeyCode::new(102);
pub const BUTTON_R1: KeyCode = KeyCode::new(103);
pub const BUTTON_L2: KeyCode = KeyCode::new(104);
pub const BUTTON_R2: KeyCode = KeyCode::new(105);
pub const BUTTON_THUMBL: KeyCode = KeyCode::new(106);
pub const BUTTON_THUMBR: KeyCode = KeyCode::new(107);
pub const BUTTON_START: KeyCode = KeyCode::new(108);
pub const BUTTON_SELECT: KeyCode = KeyCode::new(109);
pub const BUTTON_MODE: KeyCode = KeyCode::new(110);

// Stick "buttons" reuse spare generic button codes (BUTTON_13..16 and four unused system keys).
pub const LSTICK_UP: KeyCode = KeyCode::new(200);
pub const LSTICK_DOWN: KeyCode = KeyCode::new(201);
pub const LSTICK_LEFT: KeyCode = KeyCode::new(202);
pub const LSTICK_RIGHT: KeyCode = KeyCode::new(203);
pub const RSTICK_UP: KeyCode = KeyCode::new(204);
pub const RSTICK_DOWN: KeyCode = KeyCode::new(205);
pub const RSTICK_LEFT: KeyCode = KeyCode::new(206);
pub const RSTICK_RIGHT: KeyCode = KeyCode::new(207);

bitflags! {
    /// Host input source classification of a device.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InputSource: u32 {
        const CLASS_BUTTON = 0x0000_0001;
        const CLASS_POINTER = 0x0000_0002;
        const CLASS_POSITION = 0x0000_0008;
        const CLASS_JOYSTICK = 0x0000_0010;

        const KEYBOARD = 0x0000_0100 | Self::CLASS_BUTTON.bits();
        const DPAD = 0x0000_0200 | Self::CLASS_BUTTON.bits();
        const GAMEPAD = 0x0000_0400 | Self::CLASS_BUTTON.bits();
        const TOUCHSCREEN = 0x0000_1000 | Self::CLASS_POINTER.bits();
        const TOUCHPAD = 0x0010_0000 | Self::CLASS_POSITION.bits();
        const JOYSTICK = 0x0100_0000 | Self::CLASS_JOYSTICK.bits();
    }
}

impl InputSource {
    /// Keys from gamepad-class devices are tagged joypad-origin.
    #[inline]
    pub fn is_joypad_keys(self) -> bool {
        self.contains(Self::GAMEPAD)
    }

    #[inline]
    pub fn is_joystick(self) -> bool {
        self.contains(Self::CLASS_JOYSTICK)
    }
}

/// Action the host itself should perform instead of forwarding the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    VolumeUp,
    VolumeDown,
}

/// Keys the bridge intercepts for the host.
#[inline]
pub(crate) fn host_action_for(code: KeyCode) -> Option<HostAction> {
    match code.base() {
        VOLUME_UP => Some(HostAction::VolumeUp),
        VOLUME_DOWN => Some(HostAction::VolumeDown),
        _ => None,
    }
}
