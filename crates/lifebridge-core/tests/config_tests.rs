use std::fs;

use lifebridge_core::input::{keys, RawAxis};
use lifebridge_core::{BridgeConfig, BridgeError};

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = BridgeConfig::load_or_default(dir.path().join("lifebridge.toml")).unwrap();
    assert_eq!(cfg, BridgeConfig::default());
}

#[test]
fn full_file_round_trips_into_typed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lifebridge.toml");
    fs::write(
        &path,
        r#"
exit_on_destroy = true

[input]
dead_band = 0.05
press_threshold = 0.6

[input.sticks]
lx = ["x"]
ly = ["y"]
rx = ["z"]
ry = ["rz"]

[[input.channels]]
name = "dpad_x"
sources = ["hat_x"]
negative = 21
positive = 22

[[input.channels]]
name = "triggers"
sources = [17, "rtrigger"]
negative = 104
positive = 105

[queue]
soft_capacity = 32
input_reserve_slots = 4

[log]
level = "debug"
"#,
    )
    .unwrap();

    let cfg = BridgeConfig::load_or_default(&path).unwrap();

    assert!(cfg.exit_on_destroy);
    assert_eq!(cfg.input.dead_band, 0.05);
    assert_eq!(cfg.input.press_threshold, 0.6);
    assert_eq!(cfg.input.sticks.rx, vec![RawAxis::Z]);
    assert_eq!(cfg.input.channels.len(), 2);
    assert_eq!(cfg.input.channels[0].negative, keys::DPAD_LEFT);
    assert_eq!(
        cfg.input.channels[1].sources,
        vec![RawAxis::LTRIGGER, RawAxis::RTRIGGER]
    );
    assert_eq!(cfg.queue.soft_capacity, 32);
    assert_eq!(cfg.log.level, "debug");
}

#[test]
fn partial_file_keeps_other_defaults() {
    let cfg = BridgeConfig::from_toml_str("[queue]\nsoft_capacity = 128\n").unwrap();
    assert_eq!(cfg.queue.soft_capacity, 128);
    assert_eq!(cfg.queue.input_reserve_slots, 12);
    assert_eq!(cfg.input.channels.len(), 6);
}

#[test]
fn malformed_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[input\ndead_band = ").unwrap();

    let err = BridgeConfig::load_or_default(&path).unwrap_err();
    match err {
        BridgeError::Config(msg) => assert!(msg.contains("broken.toml")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn reserve_must_leave_room_in_the_queue() {
    let err = BridgeConfig::from_toml_str("[queue]\nsoft_capacity = 8\ninput_reserve_slots = 8\n")
        .unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}

#[test]
fn unknown_axis_name_is_rejected() {
    let err = BridgeConfig::from_toml_str(
        "[[input.channels]]\nname = \"bad\"\nsources = [\"wheel\"]\nnegative = 1\npositive = 2\n",
    )
    .unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}

#[test]
fn dead_band_above_threshold_is_rejected() {
    let err = BridgeConfig::from_toml_str("[input]\ndead_band = 0.7\n").unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}
