mod sim;

use std::cell::RefCell;
use std::rc::Rc;
use std::thread::{self, JoinHandle};

use log::{info, warn};

use lifebridge_core::{
    command_queue, Bridge, BridgeConfig, BridgeError, BridgeResult, Intent, QueuedContext,
};
use lifebridge_platform_winit::run_host_app;

const DEFAULT_CONFIG: &str = "lifebridge.toml";

fn main() -> anyhow::Result<()> {
    let cfg_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = BridgeConfig::load_or_default(&cfg_path)?;
    let _ = lifebridge_modules_logging::init(&cfg.log);
    info!(target: "host", "host.start config='{}'", cfg_path);

    let sim: Rc<RefCell<Option<JoinHandle<sim::SimStats>>>> = Rc::new(RefCell::new(None));
    let slot = sim.clone();
    let queue_cfg = cfg.queue.clone();

    let factory = move |launch: &Intent| -> BridgeResult<QueuedContext> {
        let (ctx, rx) = command_queue(&queue_cfg);
        let handle = thread::Builder::new()
            .name("native-sim".into())
            .spawn(move || sim::run(rx))
            .map_err(|e| BridgeError::ContextCreation(e.to_string()))?;
        *slot.borrow_mut() = Some(handle);
        info!(target: "host", "host.native_spawned command='{}'", launch.command);
        Ok(ctx)
    };

    let bridge = Bridge::new(factory, &cfg);
    let outcome = run_host_app(bridge, "lifebridge host")?;

    if outcome.is_some_and(|o| o.exit_process) {
        info!(target: "host", "host.exit immediate=true");
        std::process::exit(0);
    }

    let handle = sim.borrow_mut().take();
    if let Some(h) = handle {
        match h.join() {
            Ok(stats) => info!(
                target: "host",
                "host.exit commands={} keys={} pointers={} sticks={} surfaces={} frames={}",
                stats.commands,
                stats.keys,
                stats.pointers,
                stats.sticks,
                stats.surfaces,
                stats.frames
            ),
            Err(_) => warn!(target: "host", "host.exit native_thread=panicked"),
        }
    }
    Ok(())
}
