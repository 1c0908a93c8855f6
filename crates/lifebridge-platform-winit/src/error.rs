use lifebridge_core::BridgeError;
use thiserror::Error;

pub type HostResult<T> = Result<T, HostError>;

#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error("winit error: {0}")]
    Winit(String),

    #[error("window create failed: {0}")]
    Window(String),
}

impl From<winit::error::EventLoopError> for HostError {
    fn from(e: winit::error::EventLoopError) -> Self {
        Self::Winit(e.to_string())
    }
}

impl From<winit::error::OsError> for HostError {
    fn from(e: winit::error::OsError) -> Self {
        Self::Window(e.to_string())
    }
}
