//! Host lifecycle sequencing over a [`Bridge`], independent of the event loop.
//!
//! The winit handler calls these in loop order; they hold the only ordering rules of the
//! desktop host.

use log::{debug, info};

use lifebridge_core::{
    Bridge, BridgeResult, ContextFactory, DestroyOutcome, Intent, SurfaceId, SurfaceSize,
};

/// Creates the context on the first resume only.
pub fn ensure_created<F: ContextFactory>(bridge: &mut Bridge<F>, launch: &Intent) -> BridgeResult<()> {
    if bridge.phase().is_none() {
        bridge.on_create(launch)?;
    }
    Ok(())
}

/// Announces the window surface, then resumes.
pub fn resume<F: ContextFactory>(
    bridge: &mut Bridge<F>,
    surface: Option<(SurfaceId, SurfaceSize)>,
) -> BridgeResult<()> {
    if !bridge.lifecycle().is_live() {
        debug!(target: "host", "host.resume ignored=no_context");
        return Ok(());
    }

    if let Some((id, size)) = surface {
        bridge.surface_created(id);
        bridge.surface_changed(id, size);
    }
    bridge.on_resume()
}

/// Pauses, then drops the surface.
pub fn suspend<F: ContextFactory>(bridge: &mut Bridge<F>) -> BridgeResult<()> {
    if !bridge.lifecycle().is_live() {
        debug!(target: "host", "host.suspend ignored=no_context");
        return Ok(());
    }

    bridge.on_pause()?;
    bridge.surface_destroyed();
    Ok(())
}

/// Destroys a live context. The surface is normally still up here; the coordinator tears it
/// down first.
pub fn close<F: ContextFactory>(bridge: &mut Bridge<F>) -> BridgeResult<Option<DestroyOutcome>> {
    if !bridge.lifecycle().is_live() {
        return Ok(None);
    }

    let outcome = bridge.on_destroy()?;
    info!(
        target: "host",
        "host.destroy surface_forced={} exit_process={}",
        outcome.surface_forced,
        outcome.exit_process
    );
    Ok(Some(outcome))
}
