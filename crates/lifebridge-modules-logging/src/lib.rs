//! Logger bootstrap.
//!
//! `RUST_LOG`, when set, wins over the configured level.

use lifebridge_core::LogConfig;
use log::SetLoggerError;

/// Installs the process-wide `env_logger`. Only the first call succeeds.
pub fn init(cfg: &LogConfig) -> Result<(), SetLoggerError> {
    let env = env_logger::Env::default().default_filter_or(cfg.level.trim());
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_target(true)
        .is_test(false)
        .try_init()?;

    log::debug!(target: "host", "log.init level='{}'", cfg.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        let cfg = LogConfig::default();
        let _ = init(&cfg);
        assert!(init(&cfg).is_err());
    }
}
