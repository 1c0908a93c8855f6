use std::cell::RefCell;
use std::rc::Rc;
use std::thread;

use lifebridge_core::input::{keys, InputEvent, InputSource, KeyAction, RawKey};
use lifebridge_core::{
    command_queue, Bridge, BridgeConfig, CommandReceiver, Intent, NativeCommand, NativeContext,
    QueueConfig, SurfaceId, SurfaceSize,
};

fn small_queue() -> QueueConfig {
    QueueConfig {
        soft_capacity: 16,
        input_reserve_slots: 4,
    }
}

#[test]
fn input_is_throttled_but_lifecycle_is_not() {
    let (mut ctx, rx) = command_queue(&small_queue());

    ctx.resume();
    for _ in 0..20 {
        ctx.deliver_input(&InputEvent::key_down(keys::ENTER, 0));
    }
    ctx.surface_destroyed();
    ctx.pause();

    // Input stops once fewer than 4 of 16 slots are free: 1 + 12 inputs fit.
    assert_eq!(ctx.dropped_input(), 8);
    assert_eq!(ctx.queued(), 15);

    let mut out = Vec::new();
    assert_eq!(rx.drain_into(&mut out), 15);
    assert_eq!(out.first(), Some(&NativeCommand::Resume));
    assert_eq!(
        out.iter().filter(|c| matches!(c, NativeCommand::Input(_))).count(),
        12
    );
    assert_eq!(
        out[13..],
        [NativeCommand::SurfaceDestroyed, NativeCommand::Pause]
    );

    // Drained queue accepts input again.
    ctx.deliver_input(&InputEvent::key_up(keys::ENTER));
    assert_eq!(rx.try_recv(), Some(NativeCommand::Input(InputEvent::key_up(keys::ENTER))));
}

#[test]
fn destroy_closes_the_queue_after_drain() {
    let (mut ctx, rx) = command_queue(&QueueConfig::default());

    ctx.surface_created(SurfaceId(9));
    ctx.destroy();

    assert_eq!(rx.recv(), Some(NativeCommand::SurfaceCreated(SurfaceId(9))));
    assert_eq!(rx.recv(), Some(NativeCommand::Destroy));
    assert_eq!(rx.recv(), None);
}

#[test]
fn consumer_thread_sees_bridge_calls_in_order() {
    let slot: Rc<RefCell<Option<CommandReceiver>>> = Rc::new(RefCell::new(None));
    let stash = slot.clone();
    let cfg = BridgeConfig::default();
    let queue_cfg = cfg.queue.clone();

    let factory = move |_: &Intent| {
        let (ctx, rx) = command_queue(&queue_cfg);
        *stash.borrow_mut() = Some(rx);
        Ok(ctx)
    };
    let mut bridge = Bridge::new(factory, &cfg);

    bridge.on_create(&Intent::default()).unwrap();
    let rx = slot.borrow_mut().take().unwrap();
    let consumer = thread::spawn(move || {
        let mut seen = Vec::new();
        while let Some(cmd) = rx.recv() {
            seen.push(cmd);
        }
        seen
    });

    let size = SurfaceSize::new(1280, 720);
    bridge.on_resume().unwrap();
    bridge.surface_created(SurfaceId(1));
    bridge.surface_changed(SurfaceId(1), size);
    bridge.on_key(&RawKey::new(
        InputSource::GAMEPAD | InputSource::KEYBOARD,
        96,
        KeyAction::Down,
        0,
    ));
    bridge.on_pause().unwrap();
    bridge.on_destroy().unwrap();

    let seen = consumer.join().unwrap();
    assert_eq!(
        seen,
        vec![
            NativeCommand::Resume,
            NativeCommand::SurfaceCreated(SurfaceId(1)),
            NativeCommand::SurfaceChanged(SurfaceId(1), size),
            NativeCommand::Input(InputEvent::key_down(keys::BUTTON_A.joypad(), 0)),
            NativeCommand::Pause,
            NativeCommand::SurfaceDestroyed,
            NativeCommand::Destroy,
        ]
    );
}

#[cfg(debug_assertions)]
#[test]
fn second_consumer_thread_panics() {
    use std::sync::Arc;

    let (mut ctx, rx) = command_queue(&QueueConfig::default());
    let rx = Arc::new(rx);
    ctx.resume();
    ctx.pause();

    assert_eq!(rx.try_recv(), Some(NativeCommand::Resume));

    let other = rx.clone();
    let res = thread::spawn(move || other.try_recv()).join();
    assert!(res.is_err());
}

#[cfg(debug_assertions)]
#[test]
fn racing_consumers_leave_exactly_one_owner() {
    use std::sync::{Arc, Barrier};

    let (mut ctx, rx) = command_queue(&QueueConfig::default());
    ctx.resume();
    ctx.pause();

    let rx = Arc::new(rx);
    let start = Arc::new(Barrier::new(2));
    let workers: Vec<_> = (0..2)
        .map(|_| {
            let rx = rx.clone();
            let start = start.clone();
            thread::spawn(move || {
                start.wait();
                rx.try_recv()
            })
        })
        .collect();

    let results: Vec<_> = workers.into_iter().map(|w| w.join()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);
}
