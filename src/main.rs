//! Entry point for the **hyprsnap** daemon.
//!
//! Spawns the configured [`CommandSource`](hyprsnap::traits::CommandSource)s
//! on background threads and processes incoming commands serially on the
//! main thread — exactly one command is in flight at a time, so the
//! dispatcher needs no internal locking.

use hyprsnap::command::Command;
use hyprsnap::config::Config;
use hyprsnap::dispatcher::Dispatcher;
use hyprsnap::hyprland::wm::HyprlandWs;
use hyprsnap::ipc::listener::UnixSocketListener;
use hyprsnap::registry::WindowRegistry;
use hyprsnap::traits::CommandSource;
use log::{error, info};
use std::sync::mpsc;

/// Default socket path for the command listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/hyprsnap.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprsnap`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("hyprsnap")
}

/// Try to load the config from `$XDG_CONFIG_HOME/hyprsnap/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();
    let socket = config
        .socket
        .clone()
        .unwrap_or_else(default_socket_path);

    let ws = HyprlandWs::new();
    let registry = WindowRegistry::new(config.registry.max_tracked);
    let mut dispatcher = Dispatcher::new(ws, registry);

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_command_sources(cmd_tx, socket);

    info!("hyprsnap running");
    for cmd in cmd_rx {
        // No command error is fatal; log and keep dispatching.
        if let Err(e) = dispatcher.handle(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("all command sources closed, exiting");
}

//  Helpers

fn spawn_command_sources(tx: mpsc::Sender<Command>, socket: String) {
    {
        let tx = tx.clone();
        std::thread::spawn(move || {
            let mut source = UnixSocketListener::new(&socket);
            if let Err(e) = source.run(tx) {
                error!("socket listener error: {}", e);
            }
        });
    }

    drop(tx);
}
