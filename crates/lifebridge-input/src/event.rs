use serde::{Deserialize, Serialize};

/* =============================================================================================
   Key codes
   ============================================================================================= */

/// Key code in the host key-code space.
///
/// Joypad-origin keys carry [`KeyCode::JOYPAD_FLAG`] merged into the code, so a d-pad press on a
/// gamepad and the same arrow key on a physical keyboard stay distinguishable downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const JOYPAD_FLAG: u32 = 0x1_0000;

    #[inline]
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// Same code, tagged as joypad-origin.
    #[inline]
    pub const fn joypad(self) -> Self {
        Self(self.0 | Self::JOYPAD_FLAG)
    }

    #[inline]
    pub const fn is_joypad(self) -> bool {
        (self.0 & Self::JOYPAD_FLAG) != 0
    }

    /// Code with the joypad tag stripped.
    #[inline]
    pub const fn base(self) -> Self {
        Self(self.0 & !Self::JOYPAD_FLAG)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for KeyCode {
    #[inline]
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/* =============================================================================================
   Pointer / joystick payloads
   ============================================================================================= */

/// Pointer action as reported by the host touch pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Up,
    Move,
    Cancel,
    /// Host action code we do not interpret (multi-touch index bits, hover, ...).
    Other(i32),
}

impl PointerAction {
    #[inline]
    pub fn from_raw(v: i32) -> Self {
        match v {
            0 => Self::Down,
            1 => Self::Up,
            2 => Self::Move,
            3 => Self::Cancel,
            other => Self::Other(other),
        }
    }

    #[inline]
    pub fn to_raw(self) -> i32 {
        match self {
            Self::Down => 0,
            Self::Up => 1,
            Self::Move => 2,
            Self::Cancel => 3,
            Self::Other(v) => v,
        }
    }
}

/// Aggregated analog stick values for one joystick sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JoystickAxes {
    pub lx: f32,
    pub ly: f32,
    pub rx: f32,
    pub ry: f32,
}

impl JoystickAxes {
    #[inline]
    pub const fn new(lx: f32, ly: f32, rx: f32, ry: f32) -> Self {
        Self { lx, ly, rx, ry }
    }
}

/* =============================================================================================
   Canonical event
   ============================================================================================= */

/// Canonical input event delivered to the native context.
///
/// Transient: produced and consumed within one host callback turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key {
        code: KeyCode,
        pressed: bool,
        repeat: u32,
    },
    Pointer {
        action: PointerAction,
        x: f32,
        y: f32,
    },
    JoystickAxis(JoystickAxes),
}

impl InputEvent {
    #[inline]
    pub const fn key_down(code: KeyCode, repeat: u32) -> Self {
        Self::Key {
            code,
            pressed: true,
            repeat,
        }
    }

    /// Key-up events never carry a repeat count.
    #[inline]
    pub const fn key_up(code: KeyCode) -> Self {
        Self::Key {
            code,
            pressed: false,
            repeat: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Key { .. } => "key",
            Self::Pointer { .. } => "pointer",
            Self::JoystickAxis(_) => "joystick",
        }
    }
}
