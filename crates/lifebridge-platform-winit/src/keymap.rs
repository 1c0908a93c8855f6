//! winit keyboard/touch values to the host key-code space.

use lifebridge_core::input::{keys, PointerAction};
use winit::event::TouchPhase;
use winit::keyboard::KeyCode;

const LETTERS: [KeyCode; 26] = [
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
];

const DIGITS: [KeyCode; 10] = [
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
];

const FUNCTION: [KeyCode; 12] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
    KeyCode::F9,
    KeyCode::F10,
    KeyCode::F11,
    KeyCode::F12,
];

#[inline]
fn offset_in(table: &[KeyCode], code: KeyCode, base: u32) -> Option<u32> {
    table.iter().position(|k| *k == code).map(|i| base + i as u32)
}

/// Host key code for a physical key. `None` for keys the native side has no binding space for.
pub fn host_key(code: KeyCode) -> Option<u32> {
    if let Some(k) = offset_in(&LETTERS, code, 29) {
        return Some(k);
    }
    if let Some(k) = offset_in(&DIGITS, code, 7) {
        return Some(k);
    }
    if let Some(k) = offset_in(&FUNCTION, code, 131) {
        return Some(k);
    }

    let k = match code {
        KeyCode::ArrowUp => keys::DPAD_UP.raw(),
        KeyCode::ArrowDown => keys::DPAD_DOWN.raw(),
        KeyCode::ArrowLeft => keys::DPAD_LEFT.raw(),
        KeyCode::ArrowRight => keys::DPAD_RIGHT.raw(),
        KeyCode::AudioVolumeUp => keys::VOLUME_UP.raw(),
        KeyCode::AudioVolumeDown => keys::VOLUME_DOWN.raw(),
        KeyCode::Enter | KeyCode::NumpadEnter => keys::ENTER.raw(),
        KeyCode::Escape => keys::ESCAPE.raw(),
        KeyCode::AltLeft => 57,
        KeyCode::AltRight => 58,
        KeyCode::ShiftLeft => 59,
        KeyCode::ShiftRight => 60,
        KeyCode::Tab => 61,
        KeyCode::Space => 62,
        KeyCode::Backspace => 67,
        KeyCode::ControlLeft => 113,
        KeyCode::ControlRight => 114,
        _ => return None,
    };
    Some(k)
}

#[inline]
pub fn pointer_action(phase: TouchPhase) -> PointerAction {
    match phase {
        TouchPhase::Started => PointerAction::Down,
        TouchPhase::Ended => PointerAction::Up,
        TouchPhase::Moved => PointerAction::Move,
        TouchPhase::Cancelled => PointerAction::Cancel,
    }
}
