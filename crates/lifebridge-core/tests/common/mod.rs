#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lifebridge_core::input::InputEvent;
use lifebridge_core::{BridgeResult, Intent, NativeContext, SurfaceId, SurfaceSize};

/// Every native call the bridge made, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(Intent),
    Resume,
    Pause,
    SurfaceCreated(SurfaceId),
    SurfaceChanged(SurfaceId, SurfaceSize),
    SurfaceDestroyed,
    Input(InputEvent),
    Intent(Intent),
    Destroy,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct Recording {
    log: CallLog,
}

impl NativeContext for Recording {
    fn resume(&mut self) {
        self.log.borrow_mut().push(Call::Resume);
    }

    fn pause(&mut self) {
        self.log.borrow_mut().push(Call::Pause);
    }

    fn surface_created(&mut self, surface: SurfaceId) {
        self.log.borrow_mut().push(Call::SurfaceCreated(surface));
    }

    fn surface_changed(&mut self, surface: SurfaceId, size: SurfaceSize) {
        self.log.borrow_mut().push(Call::SurfaceChanged(surface, size));
    }

    fn surface_destroyed(&mut self) {
        self.log.borrow_mut().push(Call::SurfaceDestroyed);
    }

    fn deliver_input(&mut self, event: &InputEvent) {
        self.log.borrow_mut().push(Call::Input(*event));
    }

    fn new_intent(&mut self, intent: &Intent) {
        self.log.borrow_mut().push(Call::Intent(intent.clone()));
    }

    fn destroy(self) {
        self.log.borrow_mut().push(Call::Destroy);
    }
}

/// Factory that records creation and hands out recording contexts sharing one log.
pub fn recorder() -> (impl FnMut(&Intent) -> BridgeResult<Recording>, CallLog) {
    let log: CallLog = Rc::new(RefCell::new(Vec::new()));
    let shared = log.clone();
    let factory = move |launch: &Intent| {
        shared.borrow_mut().push(Call::Create(launch.clone()));
        Ok(Recording {
            log: shared.clone(),
        })
    };
    (factory, log)
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.borrow().clone()
}
