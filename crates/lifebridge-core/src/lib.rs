#![forbid(unsafe_code)]

//! Lifecycle bridge between a host UI-thread callback model and a single native context.
//!
//! [`LifecycleCoordinator`] owns the native context and enforces the lifecycle contract,
//! [`Bridge`] adds input normalization in front of it, [`queue`] moves native calls to the
//! thread that owns the native state.

pub mod bridge;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod intent;
pub mod native;
pub mod phase;
pub mod queue;
pub mod surface;

pub use bridge::Bridge;
pub use config::{BridgeConfig, LogConfig, QueueConfig};
pub use coordinator::{DestroyOutcome, LifecycleCoordinator};
pub use error::{BridgeError, BridgeResult};
pub use intent::Intent;
pub use native::{ContextFactory, NativeContext, NativeContextHandle};
pub use phase::LifecyclePhase;
pub use queue::{command_queue, CommandReceiver, NativeCommand, QueuedContext};
pub use surface::{SurfaceId, SurfaceSize, SurfaceState};

pub use lifebridge_input as input;
