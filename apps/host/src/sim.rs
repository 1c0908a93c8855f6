use log::{debug, info};

use lifebridge_core::input::InputEvent;
use lifebridge_core::{CommandReceiver, NativeCommand, SurfaceId, SurfaceSize};

/// What the simulated native side saw over its lifetime.
#[derive(Debug, Default, Clone)]
pub struct SimStats {
    pub commands: u64,
    pub keys: u64,
    pub pointers: u64,
    pub sticks: u64,
    pub surfaces: u64,
    pub frames: u64,
}

/// Stand-in for a native renderer: consumes commands until the context is destroyed and "draws"
/// one frame per command while resumed with a surface.
pub fn run(rx: CommandReceiver) -> SimStats {
    let mut stats = SimStats::default();
    let mut resumed = false;
    let mut surface: Option<(SurfaceId, SurfaceSize)> = None;

    while let Some(cmd) = rx.recv() {
        stats.commands += 1;
        match &cmd {
            NativeCommand::Resume => resumed = true,
            NativeCommand::Pause => resumed = false,
            NativeCommand::SurfaceCreated(id) => {
                stats.surfaces += 1;
                surface = Some((*id, SurfaceSize::default()));
            }
            NativeCommand::SurfaceChanged(id, size) => surface = Some((*id, *size)),
            NativeCommand::SurfaceDestroyed => surface = None,
            NativeCommand::Input(ev) => match ev {
                InputEvent::Key { .. } => stats.keys += 1,
                InputEvent::Pointer { .. } => stats.pointers += 1,
                InputEvent::JoystickAxis(_) => stats.sticks += 1,
            },
            NativeCommand::Intent(i) => {
                info!(target: "native", "sim.intent command='{}' uri='{}'", i.command, i.uri);
            }
            NativeCommand::Destroy => {
                info!(target: "native", "sim.destroy");
            }
        }

        if resumed {
            if let Some((id, size)) = surface {
                stats.frames += 1;
                debug!(
                    target: "native",
                    "sim.frame n={} surface={} size={}x{} cmd={}",
                    stats.frames,
                    id,
                    size.width,
                    size.height,
                    cmd.name()
                );
            }
        }
    }

    stats
}
