use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::{debug, error, info};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use lifebridge_core::input::{Disposition, InputSource, KeyAction, RawKey};
use lifebridge_core::{
    Bridge, BridgeError, BridgeResult, ContextFactory, DestroyOutcome, Intent, SurfaceId,
    SurfaceSize,
};

use crate::error::{HostError, HostResult};
use crate::gamepad::GamepadPump;
use crate::keymap;
use crate::lifecycle;

const GAMEPAD_POLL: Duration = Duration::from_millis(8);

#[inline]
fn surface_id(window: &Window) -> SurfaceId {
    SurfaceId::from(u64::from(window.id()))
}

#[inline]
fn surface_size(size: PhysicalSize<u32>) -> SurfaceSize {
    SurfaceSize::new(size.width, size.height)
}

/// winit application driving a [`Bridge`].
///
/// Loop callbacks go through [`lifecycle`]: first `resumed` creates the context, every `resumed`
/// announces the window surface and resumes, `suspended` pauses and drops the surface, close or
/// exit destroys.
struct HostApp<F: ContextFactory> {
    bridge: Bridge<F>,
    title: String,
    window: Option<Window>,
    gamepads: GamepadPump,
    key_repeat: HashMap<KeyCode, u32>,
    outcome: Option<DestroyOutcome>,
    failure: Option<HostError>,
}

impl<F: ContextFactory> HostApp<F> {
    fn new(bridge: Bridge<F>, title: String) -> Self {
        Self {
            bridge,
            title,
            window: None,
            gamepads: GamepadPump::new(),
            key_repeat: HashMap::new(),
            outcome: None,
            failure: None,
        }
    }

    /// Contract violations end the loop.
    fn check(&mut self, event_loop: &ActiveEventLoop, r: BridgeResult<()>) -> bool {
        match r {
            Ok(()) => true,
            Err(e) => {
                self.fail(event_loop, e.into());
                false
            }
        }
    }

    #[cold]
    fn fail(&mut self, event_loop: &ActiveEventLoop, e: HostError) {
        error!(target: "host", "host.fatal err='{}'", e);
        if self.failure.is_none() {
            self.failure = Some(e);
        }
        event_loop.exit();
    }

    fn destroy(&mut self) -> Result<(), BridgeError> {
        if let Some(outcome) = lifecycle::close(&mut self.bridge)? {
            self.outcome = Some(outcome);
        }
        Ok(())
    }

    fn on_keyboard(&mut self, event: &KeyEvent) {
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };
        let Some(host) = keymap::host_key(code) else {
            return;
        };

        let (action, repeat) = match event.state {
            ElementState::Pressed => {
                let n = self.key_repeat.entry(code).or_insert(0);
                if event.repeat {
                    *n += 1;
                } else {
                    *n = 0;
                }
                (KeyAction::Down, *n)
            }
            ElementState::Released => {
                self.key_repeat.remove(&code);
                (KeyAction::Up, 0)
            }
        };

        match self.bridge.on_key(&RawKey::new(InputSource::KEYBOARD, host, action, repeat)) {
            Disposition::HostAction(a) => info!(target: "host", "host.action action={:?}", a),
            Disposition::Unhandled => debug!(target: "host", "key.unhandled code={}", host),
            _ => {}
        }
    }
}

impl<F: ContextFactory> ApplicationHandler for HostApp<F> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let r = lifecycle::ensure_created(&mut self.bridge, &Intent::default());
        if !self.check(event_loop, r) {
            return;
        }

        if self.window.is_none() {
            let attrs = WindowAttributes::default().with_title(self.title.clone());
            match event_loop.create_window(attrs) {
                Ok(w) => self.window = Some(w),
                Err(e) => return self.fail(event_loop, e.into()),
            }
        }

        let surface = self
            .window
            .as_ref()
            .map(|w| (surface_id(w), surface_size(w.inner_size())));
        let r = lifecycle::resume(&mut self.bridge, surface);
        self.check(event_loop, r);
    }

    fn suspended(&mut self, event_loop: &ActiveEventLoop) {
        let r = lifecycle::suspend(&mut self.bridge);
        self.check(event_loop, r);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Surface is still live here; destroy tears it down first.
                if let Err(e) = self.destroy() {
                    return self.fail(event_loop, e.into());
                }
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(w) = &self.window {
                    let id = surface_id(w);
                    self.bridge.surface_changed(id, surface_size(size));
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.on_keyboard(&event),
            WindowEvent::Touch(t) => {
                self.bridge.on_touch(
                    keymap::pointer_action(t.phase),
                    t.location.x as f32,
                    t.location.y as f32,
                );
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.gamepads.is_available() {
            self.gamepads.poll(&mut self.bridge);
            event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + GAMEPAD_POLL));
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Err(e) = self.destroy() {
            error!(target: "host", "host.exit destroy_failed err='{}'", e);
            if self.failure.is_none() {
                self.failure = Some(e.into());
            }
        }
        self.window = None;
    }
}

/// Runs the winit loop until the window closes.
///
/// Returns the destroy outcome, or `None` if the context was never created.
pub fn run_host_app<F: ContextFactory>(
    bridge: Bridge<F>,
    title: impl Into<String>,
) -> HostResult<Option<DestroyOutcome>> {
    let event_loop = EventLoop::new()?;
    let mut app = HostApp::new(bridge, title.into());

    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(e) => Err(e),
        None => Ok(app.outcome),
    }
}
