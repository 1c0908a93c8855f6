use lifebridge_input::InputEvent;

use crate::error::BridgeResult;
use crate::intent::Intent;
use crate::surface::{SurfaceId, SurfaceSize};

/// Native rendering/simulation context contract.
///
/// Every call is fire-and-forget and issued from the host callback thread. Implementations that
/// run their own thread must make these calls safe to invoke from that one caller.
pub trait NativeContext {
    fn resume(&mut self);

    fn pause(&mut self);

    fn surface_created(&mut self, surface: SurfaceId);

    fn surface_changed(&mut self, surface: SurfaceId, size: SurfaceSize);

    fn surface_destroyed(&mut self);

    fn deliver_input(&mut self, event: &InputEvent);

    fn new_intent(&mut self, _intent: &Intent) {}

    /// Consumes the context. Nothing can reach it afterwards.
    fn destroy(self)
    where
        Self: Sized;
}

/// Produces the native context on the first lifecycle create.
pub trait ContextFactory {
    type Context: NativeContext;

    fn create(&mut self, launch: &Intent) -> BridgeResult<Self::Context>;
}

impl<C, F> ContextFactory for F
where
    C: NativeContext,
    F: FnMut(&Intent) -> BridgeResult<C>,
{
    type Context = C;

    #[inline]
    fn create(&mut self, launch: &Intent) -> BridgeResult<C> {
        self(launch)
    }
}

/// Exclusive owner of the native context.
///
/// Not `Clone`: the coordinator holds the only one and lends the context per call.
pub struct NativeContextHandle<C: NativeContext> {
    ctx: C,
}

impl<C: NativeContext> NativeContextHandle<C> {
    #[inline]
    pub(crate) fn new(ctx: C) -> Self {
        Self { ctx }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    #[inline]
    pub(crate) fn destroy(self) {
        self.ctx.destroy();
    }
}
