use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Bridge-wide error.
///
/// Only contract violations and setup failures are errors. Out-of-order host callbacks that the
/// coordinator tolerates (surface before create, input during teardown) never surface here.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The host broke the lifecycle contract. Not recoverable: the native context may already be
    /// gone or was never there.
    #[error("lifecycle contract violation: {op} while {phase}")]
    ContractViolation {
        op: &'static str,
        phase: &'static str,
    },

    #[error("native context creation failed: {0}")]
    ContextCreation(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    #[inline]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::ContractViolation { .. })
    }
}
