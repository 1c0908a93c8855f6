use lifebridge_input::{
    Disposition, InputEvent, InputNormalizer, MotionSample, PointerAction, RawKey,
};

use crate::config::BridgeConfig;
use crate::coordinator::{DestroyOutcome, LifecycleCoordinator};
use crate::error::BridgeResult;
use crate::intent::Intent;
use crate::native::ContextFactory;
use crate::phase::LifecyclePhase;
use crate::surface::{SurfaceId, SurfaceSize, SurfaceState};

/// Host-facing callback surface.
///
/// Raw input goes through the normalizer and every resulting event is handed to the coordinator
/// in emission order before the call returns. Lifecycle and surface calls go straight to the
/// coordinator.
pub struct Bridge<F: ContextFactory> {
    lifecycle: LifecycleCoordinator<F>,
    input: InputNormalizer,
    scratch: Vec<InputEvent>,
}

impl<F: ContextFactory> Bridge<F> {
    pub fn new(factory: F, cfg: &BridgeConfig) -> Self {
        Self::from_parts(
            LifecycleCoordinator::new(factory).with_exit_on_destroy(cfg.exit_on_destroy),
            InputNormalizer::new(&cfg.input),
        )
    }

    pub fn from_parts(lifecycle: LifecycleCoordinator<F>, input: InputNormalizer) -> Self {
        Self {
            lifecycle,
            input,
            scratch: Vec::with_capacity(16),
        }
    }

    #[inline]
    pub fn lifecycle(&self) -> &LifecycleCoordinator<F> {
        &self.lifecycle
    }

    #[inline]
    pub fn normalizer(&self) -> &InputNormalizer {
        &self.input
    }

    #[inline]
    pub fn phase(&self) -> Option<LifecyclePhase> {
        self.lifecycle.phase()
    }

    #[inline]
    pub fn surface(&self) -> SurfaceState {
        self.lifecycle.surface()
    }

    /* ----- lifecycle ----- */

    #[inline]
    pub fn on_create(&mut self, launch: &Intent) -> BridgeResult<()> {
        self.lifecycle.on_create(launch)
    }

    #[inline]
    pub fn on_resume(&mut self) -> BridgeResult<()> {
        self.lifecycle.on_resume()
    }

    #[inline]
    pub fn on_pause(&mut self) -> BridgeResult<()> {
        self.lifecycle.on_pause()
    }

    /// Channel state dies with the context.
    pub fn on_destroy(&mut self) -> BridgeResult<DestroyOutcome> {
        let outcome = self.lifecycle.on_destroy()?;
        self.input.reset();
        Ok(outcome)
    }

    #[inline]
    pub fn on_new_intent(&mut self, intent: &Intent) {
        self.lifecycle.on_new_intent(intent);
    }

    /* ----- surface ----- */

    #[inline]
    pub fn surface_created(&mut self, surface: SurfaceId) {
        self.lifecycle.surface_created(surface);
    }

    #[inline]
    pub fn surface_changed(&mut self, surface: SurfaceId, size: SurfaceSize) {
        self.lifecycle.surface_changed(surface, size);
    }

    #[inline]
    pub fn surface_destroyed(&mut self) {
        self.lifecycle.surface_destroyed();
    }

    /* ----- input ----- */

    pub fn on_key(&mut self, raw: &RawKey) -> Disposition {
        let d = self.input.key(raw, &mut self.scratch);
        self.flush();
        d
    }

    pub fn on_motion(&mut self, sample: &MotionSample) -> Disposition {
        let d = self.input.motion(sample, &mut self.scratch);
        self.flush();
        d
    }

    pub fn on_touch(&mut self, action: PointerAction, x: f32, y: f32) -> Disposition {
        let d = self.input.touch(action, x, y, &mut self.scratch);
        self.flush();
        d
    }

    #[inline]
    fn flush(&mut self) {
        for ev in self.scratch.drain(..) {
            self.lifecycle.deliver_input(&ev);
        }
    }
}
