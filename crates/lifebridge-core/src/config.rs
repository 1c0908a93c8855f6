use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use lifebridge_input::InputConfig;

use crate::error::{BridgeError, BridgeResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub queue: QueueConfig,

    #[serde(default)]
    pub log: LogConfig,

    /// Ask the host to terminate the process once the native context is destroyed.
    #[serde(default)]
    pub exit_on_destroy: bool,
}

/// Native command queue limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueConfig {
    #[serde(default = "default_soft_capacity")]
    pub soft_capacity: usize,

    /// Input is only queued while this many slots stay free for lifecycle commands.
    #[serde(default = "default_input_reserve_slots")]
    pub input_reserve_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_soft_capacity() -> usize {
    64
}
fn default_input_reserve_slots() -> usize {
    12
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            soft_capacity: default_soft_capacity(),
            input_reserve_slots: default_input_reserve_slots(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            queue: QueueConfig::default(),
            log: LogConfig::default(),
            exit_on_destroy: false,
        }
    }
}

impl BridgeConfig {
    /// Missing file means defaults; a file that exists must parse and validate.
    pub fn load_or_default(path: impl AsRef<Path>) -> BridgeResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(s) => {
                let cfg = Self::from_toml_str(&s)
                    .map_err(|e| BridgeError::Config(format!("{}: {}", path.display(), e)))?;
                Ok(cfg)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml_str(s: &str) -> BridgeResult<Self> {
        let cfg: BridgeConfig =
            toml::from_str(s).map_err(|e| BridgeError::Config(format!("parse: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> BridgeResult<()> {
        self.input.validate().map_err(BridgeError::Config)?;

        if self.queue.input_reserve_slots >= self.queue.soft_capacity {
            return Err(BridgeError::Config(format!(
                "queue.input_reserve_slots ({}) must be below queue.soft_capacity ({})",
                self.queue.input_reserve_slots, self.queue.soft_capacity
            )));
        }

        if self.log.level.trim().parse::<log::LevelFilter>().is_err() {
            return Err(BridgeError::Config(format!(
                "log.level '{}' is not a log level",
                self.log.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = BridgeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.queue.soft_capacity, 64);
        assert_eq!(cfg.queue.input_reserve_slots, 12);
        assert_eq!(cfg.log.level, "info");
        assert!(!cfg.exit_on_destroy);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(BridgeConfig::from_toml_str("").unwrap(), BridgeConfig::default());
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = BridgeConfig::from_toml_str("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }
}
