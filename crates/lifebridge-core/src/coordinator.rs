use log::{debug, error, info, trace};

use lifebridge_input::InputEvent;

use crate::error::{BridgeError, BridgeResult};
use crate::intent::Intent;
use crate::native::{ContextFactory, NativeContext, NativeContextHandle};
use crate::phase::LifecyclePhase;
use crate::surface::{SurfaceId, SurfaceSize, SurfaceState};

enum Stage<C: NativeContext> {
    Uncreated,
    Live {
        handle: NativeContextHandle<C>,
        phase: LifecyclePhase,
    },
    Destroyed,
}

/// Result of a lifecycle destroy, for the host to act on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct DestroyOutcome {
    /// A live surface was torn down on the host's behalf before the context went away.
    pub surface_forced: bool,
    /// The host should terminate the process.
    pub exit_process: bool,
}

/// Sole owner of the native context.
///
/// Lifecycle (create/resume/pause/destroy) and surface (created/changed/destroyed) transitions are
/// two independent axes. They meet in two places only: destroy tears down a surface the host left
/// live, and nothing reaches the context once it is destroyed.
///
/// Contract violations come back as [`BridgeError::ContractViolation`]. Surface, intent and input
/// callbacks that arrive while there is no context are dropped.
pub struct LifecycleCoordinator<F: ContextFactory> {
    factory: F,
    stage: Stage<F::Context>,
    surface: SurfaceState,
    exit_on_destroy: bool,
}

impl<F: ContextFactory> LifecycleCoordinator<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            stage: Stage::Uncreated,
            surface: SurfaceState::Absent,
            exit_on_destroy: false,
        }
    }

    #[inline]
    pub fn with_exit_on_destroy(mut self, exit: bool) -> Self {
        self.exit_on_destroy = exit;
        self
    }

    /// `None` until the first create.
    #[inline]
    pub fn phase(&self) -> Option<LifecyclePhase> {
        match &self.stage {
            Stage::Uncreated => None,
            Stage::Live { phase, .. } => Some(*phase),
            Stage::Destroyed => Some(LifecyclePhase::Destroyed),
        }
    }

    #[inline]
    pub fn surface(&self) -> SurfaceState {
        self.surface
    }

    /// A native context exists and accepts calls.
    #[inline]
    pub fn is_live(&self) -> bool {
        matches!(self.stage, Stage::Live { .. })
    }

    #[inline]
    fn phase_name(&self) -> &'static str {
        self.phase().map_or("uncreated", LifecyclePhase::as_str)
    }

    #[cold]
    fn violation(&self, op: &'static str) -> BridgeError {
        let phase = self.phase_name();
        error!(target: "lifecycle", "contract.violation op={} phase={}", op, phase);
        BridgeError::ContractViolation { op, phase }
    }

    /* =========================================================================================
       Lifecycle axis
       ========================================================================================= */

    pub fn on_create(&mut self, launch: &Intent) -> BridgeResult<()> {
        if !matches!(self.stage, Stage::Uncreated) {
            return Err(self.violation("create"));
        }

        let ctx = self.factory.create(launch)?;
        self.stage = Stage::Live {
            handle: NativeContextHandle::new(ctx),
            phase: LifecyclePhase::Created,
        };

        info!(
            target: "lifecycle",
            "context.create package='{}' command='{}' uri='{}'",
            launch.from_package,
            launch.command,
            launch.uri
        );
        Ok(())
    }

    pub fn on_resume(&mut self) -> BridgeResult<()> {
        if !matches!(
            self.phase(),
            Some(LifecyclePhase::Created | LifecyclePhase::Paused)
        ) {
            return Err(self.violation("resume"));
        }

        if let Stage::Live { handle, phase } = &mut self.stage {
            handle.get_mut().resume();
            *phase = LifecyclePhase::Resumed;
        }
        info!(target: "lifecycle", "context.resume");
        Ok(())
    }

    pub fn on_pause(&mut self) -> BridgeResult<()> {
        if self.phase() != Some(LifecyclePhase::Resumed) {
            return Err(self.violation("pause"));
        }

        if let Stage::Live { handle, phase } = &mut self.stage {
            handle.get_mut().pause();
            *phase = LifecyclePhase::Paused;
        }
        info!(target: "lifecycle", "context.pause");
        Ok(())
    }

    /// Tears the context down, closing a surface the host left live first.
    ///
    /// A second destroy is a no-op.
    pub fn on_destroy(&mut self) -> BridgeResult<DestroyOutcome> {
        match self.stage {
            Stage::Uncreated => return Err(self.violation("destroy")),
            Stage::Destroyed => {
                debug!(target: "lifecycle", "context.destroy ignored=already_destroyed");
                return Ok(DestroyOutcome::default());
            }
            Stage::Live { .. } => {}
        }

        let Stage::Live { mut handle, .. } = std::mem::replace(&mut self.stage, Stage::Destroyed)
        else {
            return Ok(DestroyOutcome::default());
        };

        let surface_forced = self.surface.is_live();
        if let Some(id) = self.surface.identity() {
            info!(target: "lifecycle", "surface.destroy forced=true surface={}", id);
            handle.get_mut().surface_destroyed();
            self.surface = SurfaceState::Absent;
        }

        handle.destroy();

        let outcome = DestroyOutcome {
            surface_forced,
            exit_process: self.exit_on_destroy,
        };
        info!(
            target: "lifecycle",
            "context.destroy surface_forced={} exit={}",
            outcome.surface_forced,
            outcome.exit_process
        );
        Ok(outcome)
    }

    /* =========================================================================================
       Surface axis
       ========================================================================================= */

    pub fn surface_created(&mut self, surface: SurfaceId) {
        let ctx = match &mut self.stage {
            Stage::Live { handle, .. } => handle.get_mut(),
            _ => return dropped("surface_created", self.phase_name()),
        };

        // A new identity replaces the live one: the old surface goes first.
        if let Some(old) = self.surface.identity() {
            if old != surface {
                debug!(target: "lifecycle", "surface.replace old={} new={}", old, surface);
                ctx.surface_destroyed();
            }
        }

        ctx.surface_created(surface);
        self.surface = SurfaceState::Created(surface);
        info!(target: "lifecycle", "surface.create surface={}", surface);
    }

    /// Geometry update. A surface the bridge has not seen yet is announced as created first.
    pub fn surface_changed(&mut self, surface: SurfaceId, size: SurfaceSize) {
        let ctx = match &mut self.stage {
            Stage::Live { handle, .. } => handle.get_mut(),
            _ => return dropped("surface_changed", self.phase_name()),
        };

        match self.surface.identity() {
            Some(old) if old == surface => {}
            Some(old) => {
                debug!(target: "lifecycle", "surface.replace old={} new={}", old, surface);
                ctx.surface_destroyed();
                ctx.surface_created(surface);
            }
            None => ctx.surface_created(surface),
        }

        ctx.surface_changed(surface, size);
        self.surface = SurfaceState::Changed(surface, size);
        debug!(
            target: "lifecycle",
            "surface.change surface={} size={}x{}",
            surface,
            size.width,
            size.height
        );
    }

    pub fn surface_destroyed(&mut self) {
        let ctx = match &mut self.stage {
            Stage::Live { handle, .. } => handle.get_mut(),
            _ => return dropped("surface_destroyed", self.phase_name()),
        };

        let Some(id) = self.surface.identity() else {
            debug!(target: "lifecycle", "surface.destroy ignored=no_surface");
            return;
        };

        ctx.surface_destroyed();
        self.surface = SurfaceState::Absent;
        info!(target: "lifecycle", "surface.destroy forced=false surface={}", id);
    }

    /* =========================================================================================
       Intents and input
       ========================================================================================= */

    pub fn on_new_intent(&mut self, intent: &Intent) {
        let ctx = match &mut self.stage {
            Stage::Live { handle, .. } => handle.get_mut(),
            _ => return dropped("new_intent", self.phase_name()),
        };

        ctx.new_intent(intent);
        info!(
            target: "lifecycle",
            "intent.new package='{}' command='{}' uri='{}'",
            intent.from_package,
            intent.command,
            intent.uri
        );
    }

    /// Forwards one normalized event verbatim, or drops it if there is no context.
    #[inline]
    pub fn deliver_input(&mut self, event: &InputEvent) {
        match &mut self.stage {
            Stage::Live { handle, .. } => handle.get_mut().deliver_input(event),
            _ => trace!(
                target: "input",
                "input.drop kind={} phase={}",
                event.kind(),
                self.phase_name()
            ),
        }
    }
}

#[inline]
fn dropped(op: &'static str, phase: &'static str) {
    debug!(target: "lifecycle", "event.drop op={} phase={}", op, phase);
}
