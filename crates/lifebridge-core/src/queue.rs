use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, trace, warn};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use lifebridge_input::InputEvent;

use crate::config::QueueConfig;
use crate::intent::Intent;
use crate::native::NativeContext;
use crate::surface::{SurfaceId, SurfaceSize};

/// One native call, as seen by the render/simulation thread.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeCommand {
    Resume,
    Pause,
    SurfaceCreated(SurfaceId),
    SurfaceChanged(SurfaceId, SurfaceSize),
    SurfaceDestroyed,
    Input(InputEvent),
    Intent(Intent),
    Destroy,
}

impl NativeCommand {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Resume => "resume",
            Self::Pause => "pause",
            Self::SurfaceCreated(_) => "surface_created",
            Self::SurfaceChanged(..) => "surface_changed",
            Self::SurfaceDestroyed => "surface_destroyed",
            Self::Input(_) => "input",
            Self::Intent(_) => "intent",
            Self::Destroy => "destroy",
        }
    }
}

/// Creates a connected queue pair: the context half for the coordinator, the receiver for the
/// thread that owns the native state.
pub fn command_queue(cfg: &QueueConfig) -> (QueuedContext, CommandReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    debug!(
        target: "queue",
        "queue.init soft_capacity={} input_reserve={}",
        cfg.soft_capacity,
        cfg.input_reserve_slots
    );
    (
        QueuedContext {
            tx,
            soft_capacity: cfg.soft_capacity,
            input_reserve: cfg.input_reserve_slots,
            dropped_input: 0,
        },
        CommandReceiver {
            rx,
            consumer_guard: ConsumerGuard::new(),
        },
    )
}

/// Native context that posts every call to another thread.
///
/// Lifecycle and surface commands are always posted. Input is posted only while the queue keeps
/// `input_reserve_slots` free below `soft_capacity`, so a stalled consumer cannot be buried in
/// input ahead of the next lifecycle command.
pub struct QueuedContext {
    tx: Sender<NativeCommand>,
    soft_capacity: usize,
    input_reserve: usize,
    dropped_input: u64,
}

impl QueuedContext {
    #[inline]
    pub fn queued(&self) -> usize {
        self.tx.len()
    }

    /// Input events discarded because the queue was too full.
    #[inline]
    pub fn dropped_input(&self) -> u64 {
        self.dropped_input
    }

    #[inline]
    fn post(&self, cmd: NativeCommand) {
        let name = cmd.name();
        if self.tx.send(cmd).is_err() {
            warn!(target: "queue", "queue.post lost cmd={} reason=consumer_gone", name);
        }
    }
}

impl NativeContext for QueuedContext {
    fn resume(&mut self) {
        self.post(NativeCommand::Resume);
    }

    fn pause(&mut self) {
        self.post(NativeCommand::Pause);
    }

    fn surface_created(&mut self, surface: SurfaceId) {
        self.post(NativeCommand::SurfaceCreated(surface));
    }

    fn surface_changed(&mut self, surface: SurfaceId, size: SurfaceSize) {
        self.post(NativeCommand::SurfaceChanged(surface, size));
    }

    fn surface_destroyed(&mut self) {
        self.post(NativeCommand::SurfaceDestroyed);
    }

    fn deliver_input(&mut self, event: &InputEvent) {
        if self.tx.len() + self.input_reserve > self.soft_capacity {
            self.dropped_input += 1;
            trace!(
                target: "queue",
                "queue.input_drop kind={} queued={} dropped_total={}",
                event.kind(),
                self.tx.len(),
                self.dropped_input
            );
            return;
        }
        self.post(NativeCommand::Input(*event));
    }

    fn new_intent(&mut self, intent: &Intent) {
        self.post(NativeCommand::Intent(intent.clone()));
    }

    fn destroy(self) {
        self.post(NativeCommand::Destroy);
        debug!(
            target: "queue",
            "queue.close queued={} dropped_input={}",
            self.tx.len(),
            self.dropped_input
        );
        // Dropping the sender disconnects the consumer once it has drained.
    }
}

/// Consumer half of the native command queue.
///
/// Single consumer: the first thread to receive becomes the owner, any other receiving thread
/// panics in debug builds.
pub struct CommandReceiver {
    rx: Receiver<NativeCommand>,
    consumer_guard: ConsumerGuard,
}

impl CommandReceiver {
    /// Blocks for the next command. `None` once the context is destroyed and the queue drained.
    #[inline]
    pub fn recv(&self) -> Option<NativeCommand> {
        self.consumer_guard.assert_or_claim();
        self.rx.recv().ok()
    }

    #[inline]
    pub fn try_recv(&self) -> Option<NativeCommand> {
        self.consumer_guard.assert_or_claim();
        self.rx.try_recv().ok()
    }

    #[inline]
    pub fn drain_into(&self, out: &mut Vec<NativeCommand>) -> usize {
        self.consumer_guard.assert_or_claim();
        let mut n = 0usize;
        while let Ok(cmd) = self.rx.try_recv() {
            out.push(cmd);
            n += 1;
        }
        n
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rx.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

/// Records the first receiving thread and rejects every other one.
struct ConsumerGuard {
    owner: AtomicU64,
    reported: AtomicBool,
}

impl ConsumerGuard {
    #[inline]
    fn new() -> Self {
        Self {
            owner: AtomicU64::new(0),
            reported: AtomicBool::new(false),
        }
    }

    #[inline]
    fn assert_or_claim(&self) {
        let me = thread_seq();
        let owner = match self
            .owner
            .compare_exchange(0, me, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => return,
            Err(owner) => owner,
        };

        if owner == me {
            return;
        }
        if cfg!(debug_assertions) {
            panic!("CommandReceiver has a second consumer thread (owner={owner}, caller={me})");
        }
        if !self.reported.swap(true, Ordering::Relaxed) {
            error!(target: "queue", "queue.consumer_violation owner={} caller={}", owner, me);
        }
    }
}

/// Process-unique, non-zero sequence number of the calling thread.
#[inline]
fn thread_seq() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    thread_local! {
        static SEQ: u64 = NEXT.fetch_add(1, Ordering::Relaxed);
    }
    SEQ.with(|s| *s)
}
