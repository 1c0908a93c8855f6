use serde::{Deserialize, Serialize};
use std::fmt;

use crate::event::KeyCode;
use crate::keys;

/* =============================================================================================
   Raw device channels
   ============================================================================================= */

/// Raw axis identifier as reported by the host device layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawAxisRepr", into = "u16")]
pub struct RawAxis(pub u16);

impl RawAxis {
    pub const X: Self = Self(0);
    pub const Y: Self = Self(1);
    pub const Z: Self = Self(11);
    pub const RX: Self = Self(12);
    pub const RY: Self = Self(13);
    pub const RZ: Self = Self(14);
    pub const HAT_X: Self = Self(15);
    pub const HAT_Y: Self = Self(16);
    pub const LTRIGGER: Self = Self(17);
    pub const RTRIGGER: Self = Self(18);

    const NAMED: &'static [(&'static str, RawAxis)] = &[
        ("x", Self::X),
        ("y", Self::Y),
        ("z", Self::Z),
        ("rx", Self::RX),
        ("ry", Self::RY),
        ("rz", Self::RZ),
        ("hat_x", Self::HAT_X),
        ("hat_y", Self::HAT_Y),
        ("ltrigger", Self::LTRIGGER),
        ("rtrigger", Self::RTRIGGER),
    ];

    #[inline]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, a)| *a)
    }

    #[inline]
    pub fn name(self) -> Option<&'static str> {
        Self::NAMED.iter().find(|(_, a)| *a == self).map(|(n, _)| *n)
    }
}

impl fmt::Display for RawAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "axis#{}", self.0),
        }
    }
}

impl From<RawAxis> for u16 {
    #[inline]
    fn from(v: RawAxis) -> Self {
        v.0
    }
}

/// Config files may name axes (`"rx"`) or give the numeric id.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAxisRepr {
    Id(u16),
    Name(String),
}

impl TryFrom<RawAxisRepr> for RawAxis {
    type Error = String;

    fn try_from(v: RawAxisRepr) -> Result<Self, Self::Error> {
        match v {
            RawAxisRepr::Id(id) => Ok(RawAxis(id)),
            RawAxisRepr::Name(n) => {
                RawAxis::from_name(&n).ok_or_else(|| format!("unknown axis name '{n}'"))
            }
        }
    }
}

/* =============================================================================================
   Declarative alias table
   ============================================================================================= */

/// One logical axis channel that synthesizes button edges.
///
/// `sources` lists every raw channel that aliases this logical axis; their dead-banded values are
/// summed before thresholding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub name: String,
    pub sources: Vec<RawAxis>,
    pub negative: KeyCode,
    pub positive: KeyCode,
}

impl ChannelSpec {
    #[inline]
    pub fn new(
        name: impl Into<String>,
        sources: &[RawAxis],
        negative: KeyCode,
        positive: KeyCode,
    ) -> Self {
        Self {
            name: name.into(),
            sources: sources.to_vec(),
            negative,
            positive,
        }
    }
}

/// Raw channels feeding each component of the aggregate joystick event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickAliases {
    pub lx: Vec<RawAxis>,
    pub ly: Vec<RawAxis>,
    pub rx: Vec<RawAxis>,
    pub ry: Vec<RawAxis>,
}

impl Default for StickAliases {
    fn default() -> Self {
        // Some HID pads report the right stick on Z/RZ instead of RX/RY.
        Self {
            lx: vec![RawAxis::X],
            ly: vec![RawAxis::Y],
            rx: vec![RawAxis::RX, RawAxis::Z],
            ry: vec![RawAxis::RY, RawAxis::RZ],
        }
    }
}

/// Input normalizer settings: thresholds plus the channel alias table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_dead_band")]
    pub dead_band: f32,

    #[serde(default = "default_press_threshold")]
    pub press_threshold: f32,

    #[serde(default)]
    pub sticks: StickAliases,

    /// Emission order of synthesized edges follows this list.
    #[serde(default = "default_channels")]
    pub channels: Vec<ChannelSpec>,
}

fn default_dead_band() -> f32 {
    0.01
}

fn default_press_threshold() -> f32 {
    0.5
}

pub fn default_channels() -> Vec<ChannelSpec> {
    vec![
        ChannelSpec::new("dpad_x", &[RawAxis::HAT_X], keys::DPAD_LEFT, keys::DPAD_RIGHT),
        ChannelSpec::new("dpad_y", &[RawAxis::HAT_Y], keys::DPAD_UP, keys::DPAD_DOWN),
        ChannelSpec::new("lstick_x", &[RawAxis::X], keys::LSTICK_LEFT, keys::LSTICK_RIGHT),
        ChannelSpec::new("lstick_y", &[RawAxis::Y], keys::LSTICK_UP, keys::LSTICK_DOWN),
        ChannelSpec::new(
            "rstick_x",
            &[RawAxis::RX, RawAxis::Z],
            keys::RSTICK_LEFT,
            keys::RSTICK_RIGHT,
        ),
        ChannelSpec::new(
            "rstick_y",
            &[RawAxis::RY, RawAxis::RZ],
            keys::RSTICK_UP,
            keys::RSTICK_DOWN,
        ),
    ]
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dead_band: default_dead_band(),
            press_threshold: default_press_threshold(),
            sticks: StickAliases::default(),
            channels: default_channels(),
        }
    }
}

impl InputConfig {
    /// Checks threshold ordering and that every channel has at least one source.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.press_threshold > 0.0 && self.press_threshold <= 1.0) {
            return Err(format!(
                "input.press_threshold must be in (0, 1], got {}",
                self.press_threshold
            ));
        }
        if !(self.dead_band >= 0.0 && self.dead_band < self.press_threshold) {
            return Err(format!(
                "input.dead_band must be in [0, press_threshold), got {}",
                self.dead_band
            ));
        }
        for ch in &self.channels {
            if ch.sources.is_empty() {
                return Err(format!("input channel '{}' has no sources", ch.name));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_names_and_ids_both_deserialize() {
        let v: Vec<RawAxis> = serde_json::from_str(r#"["rx", 11, "HAT_Y"]"#).unwrap();
        assert_eq!(v, vec![RawAxis::RX, RawAxis::Z, RawAxis::HAT_Y]);

        let err = serde_json::from_str::<RawAxis>(r#""wheel""#).unwrap_err();
        assert!(err.to_string().contains("unknown axis name"));
    }

    #[test]
    fn default_table_has_six_channels_in_fixed_order() {
        let names: Vec<_> = default_channels().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            ["dpad_x", "dpad_y", "lstick_x", "lstick_y", "rstick_x", "rstick_y"]
        );
    }

    #[test]
    fn validate_rejects_inverted_thresholds() {
        let mut cfg = InputConfig::default();
        assert!(cfg.validate().is_ok());

        cfg.dead_band = 0.6;
        assert!(cfg.validate().is_err());

        cfg = InputConfig::default();
        cfg.channels[0].sources.clear();
        assert!(cfg.validate().unwrap_err().contains("dpad_x"));
    }
}
