use lifebridge_input::keys;
use lifebridge_input::{
    Disposition, HostAction, InputConfig, InputEvent, InputNormalizer, InputSource, JoystickAxes,
    KeyAction, KeyCode, MotionAction, MotionSample, PointerAction, RawAxis, RawKey,
};

fn keys_only(events: &[InputEvent]) -> Vec<InputEvent> {
    events
        .iter()
        .copied()
        .filter(|e| matches!(e, InputEvent::Key { .. }))
        .collect()
}

#[test]
fn same_deflection_presses_once() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    for _ in 0..5 {
        n.motion(&MotionSample::joystick(1).with(RawAxis::X, 0.8), &mut out);
    }

    assert_eq!(
        keys_only(&out),
        vec![InputEvent::key_down(keys::LSTICK_RIGHT.joypad(), 0)]
    );
}

#[test]
fn values_inside_dead_band_behave_like_zero() {
    let mut a = InputNormalizer::default();
    let mut b = InputNormalizer::default();
    let mut out_a = Vec::new();
    let mut out_b = Vec::new();

    a.motion(&MotionSample::joystick(1).with(RawAxis::X, 0.009).with(RawAxis::RY, -0.0099), &mut out_a);
    b.motion(&MotionSample::joystick(1), &mut out_b);

    assert_eq!(out_a, out_b);
    assert_eq!(out_a, vec![InputEvent::JoystickAxis(JoystickAxes::default())]);
}

#[test]
fn negative_to_positive_in_one_sample_releases_first() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    n.motion(&MotionSample::joystick(1).with(RawAxis::HAT_X, -0.8), &mut out);
    out.clear();
    n.motion(&MotionSample::joystick(1).with(RawAxis::HAT_X, 0.8), &mut out);

    assert_eq!(
        keys_only(&out),
        vec![
            InputEvent::key_up(keys::DPAD_LEFT.joypad()),
            InputEvent::key_down(keys::DPAD_RIGHT.joypad(), 0),
        ]
    );
}

#[test]
fn aliased_channels_drive_the_same_logical_stick() {
    let mut primary = InputNormalizer::default();
    let mut alternate = InputNormalizer::default();
    let mut out_p = Vec::new();
    let mut out_a = Vec::new();

    primary.motion(&MotionSample::joystick(1).with(RawAxis::RX, 0.7), &mut out_p);
    alternate.motion(&MotionSample::joystick(2).with(RawAxis::Z, 0.7), &mut out_a);

    assert_eq!(out_p, out_a);
    assert_eq!(
        out_p,
        vec![
            InputEvent::JoystickAxis(JoystickAxes::new(0.0, 0.0, 0.7, 0.0)),
            InputEvent::key_down(keys::RSTICK_RIGHT.joypad(), 0),
        ]
    );
}

#[test]
fn aliases_are_summed_after_dead_banding() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    // 0.3 + 0.3 crosses the threshold only because both aliases are summed.
    n.motion(
        &MotionSample::joystick(1).with(RawAxis::RY, 0.3).with(RawAxis::RZ, 0.3),
        &mut out,
    );
    assert_eq!(
        keys_only(&out),
        vec![InputEvent::key_down(keys::RSTICK_DOWN.joypad(), 0)]
    );

    out.clear();
    // Noise on the alias is dead-banded away before the sum.
    n.motion(
        &MotionSample::joystick(1).with(RawAxis::RY, 0.495).with(RawAxis::RZ, 0.009),
        &mut out,
    );
    assert_eq!(
        keys_only(&out),
        vec![InputEvent::key_up(keys::RSTICK_DOWN.joypad())]
    );
}

#[test]
fn six_axis_sample_emits_edges_in_table_order() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    let sample = MotionSample::joystick(1)
        .with(RawAxis::RY, 0.9)
        .with(RawAxis::HAT_Y, -1.0)
        .with(RawAxis::X, -0.9)
        .with(RawAxis::RX, 0.9)
        .with(RawAxis::HAT_X, 1.0)
        .with(RawAxis::Y, 0.9);
    assert_eq!(n.motion(&sample, &mut out), Disposition::Forwarded);

    assert!(matches!(out[0], InputEvent::JoystickAxis(_)));
    assert_eq!(
        keys_only(&out),
        vec![
            InputEvent::key_down(keys::DPAD_RIGHT.joypad(), 0),
            InputEvent::key_down(keys::DPAD_UP.joypad(), 0),
            InputEvent::key_down(keys::LSTICK_LEFT.joypad(), 0),
            InputEvent::key_down(keys::LSTICK_DOWN.joypad(), 0),
            InputEvent::key_down(keys::RSTICK_RIGHT.joypad(), 0),
            InputEvent::key_down(keys::RSTICK_DOWN.joypad(), 0),
        ]
    );
}

#[test]
fn non_joystick_motion_is_unhandled() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    let touchpad = MotionSample::new(3, InputSource::TOUCHPAD, MotionAction::Move).with(RawAxis::X, 1.0);
    assert_eq!(n.motion(&touchpad, &mut out), Disposition::Unhandled);

    let hover = MotionSample::new(3, InputSource::JOYSTICK, MotionAction::Other(7)).with(RawAxis::X, 1.0);
    assert_eq!(n.motion(&hover, &mut out), Disposition::Unhandled);

    assert!(out.is_empty());
}

#[test]
fn gamepad_keys_are_tagged_keyboard_keys_are_not() {
    let n = InputNormalizer::default();
    let mut out = Vec::new();

    let pad = InputSource::GAMEPAD | InputSource::KEYBOARD;
    n.key(&RawKey::new(pad, 21, KeyAction::Down, 0), &mut out);
    n.key(&RawKey::new(InputSource::KEYBOARD, 21, KeyAction::Down, 2), &mut out);
    n.key(&RawKey::new(InputSource::KEYBOARD, 21, KeyAction::Up, 2), &mut out);

    assert_eq!(
        out,
        vec![
            InputEvent::key_down(keys::DPAD_LEFT.joypad(), 0),
            InputEvent::key_down(keys::DPAD_LEFT, 2),
            InputEvent::key_up(KeyCode::new(21)),
        ]
    );
}

#[test]
fn volume_keys_go_to_the_host() {
    let n = InputNormalizer::default();
    let mut out = Vec::new();

    assert_eq!(
        n.key(&RawKey::new(InputSource::KEYBOARD, 24, KeyAction::Down, 0), &mut out),
        Disposition::HostAction(HostAction::VolumeUp)
    );
    assert_eq!(
        n.key(&RawKey::new(InputSource::KEYBOARD, 25, KeyAction::Down, 0), &mut out),
        Disposition::HostAction(HostAction::VolumeDown)
    );
    assert_eq!(
        n.key(&RawKey::new(InputSource::KEYBOARD, 24, KeyAction::Up, 0), &mut out),
        Disposition::Consumed
    );
    assert!(out.is_empty());
}

#[test]
fn multiple_key_action_falls_back_to_host() {
    let n = InputNormalizer::default();
    let mut out = Vec::new();

    let d = n.key(&RawKey::new(InputSource::KEYBOARD, 29, KeyAction::Other(2), 0), &mut out);
    assert_eq!(d, Disposition::Unhandled);
    assert!(!d.is_consumed());
    assert!(out.is_empty());
}

#[test]
fn touch_passes_through() {
    let n = InputNormalizer::default();
    let mut out = Vec::new();

    n.touch(PointerAction::Down, 10.0, 20.5, &mut out);
    assert_eq!(
        out,
        vec![InputEvent::Pointer {
            action: PointerAction::Down,
            x: 10.0,
            y: 20.5
        }]
    );
}

#[test]
fn reset_forgets_held_buttons() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    n.motion(&MotionSample::joystick(1).with(RawAxis::X, 0.9), &mut out);
    n.reset();
    out.clear();

    n.motion(&MotionSample::joystick(1).with(RawAxis::X, 0.9), &mut out);
    assert_eq!(
        keys_only(&out),
        vec![InputEvent::key_down(keys::LSTICK_RIGHT.joypad(), 0)]
    );
}

#[test]
fn custom_layout_changes_thresholds() {
    let mut cfg = InputConfig::default();
    cfg.press_threshold = 0.9;
    let mut n = InputNormalizer::new(&cfg);
    let mut out = Vec::new();

    n.motion(&MotionSample::joystick(1).with(RawAxis::X, 0.8), &mut out);
    assert!(keys_only(&out).is_empty());
}

#[test]
fn one_pad_does_not_release_another_pads_stick() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();

    n.motion(&MotionSample::joystick(0).with(RawAxis::X, 0.9), &mut out);
    out.clear();

    // Pad 1 leaves X unreported, which reads as 0.0 for pad 1 only.
    n.motion(&MotionSample::joystick(1).with(RawAxis::RX, 0.2), &mut out);
    assert_eq!(
        out,
        vec![InputEvent::JoystickAxis(JoystickAxes::new(0.0, 0.0, 0.2, 0.0))]
    );

    let held = n.device_channels(0).unwrap();
    assert_eq!(held[2].name(), "lstick_x");
    assert_eq!(held[2].state(), lifebridge_input::DiscreteState::Positive);

    out.clear();
    n.motion(&MotionSample::joystick(0), &mut out);
    assert_eq!(
        keys_only(&out),
        vec![InputEvent::key_up(keys::LSTICK_RIGHT.joypad())]
    );
}

#[test]
fn devices_get_channels_on_first_joystick_sample() {
    let mut n = InputNormalizer::default();
    let mut out = Vec::new();
    assert!(n.device_channels(7).is_none());

    n.motion(&MotionSample::joystick(7), &mut out);
    assert_eq!(n.device_channels(7).map(|c| c.len()), Some(n.layout().len()));

    n.reset();
    assert!(n.device_channels(7).is_none());
}
