//! [`WindowSystem`] implementation backed by Hyprland IPC.
//!
//! Communicates directly with Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.

use crate::geometry::{DisplayGeometry, EdgeInsets, Rect};
use crate::registry::{WindowHandle, WindowIdentity};
use crate::traits::{FocusedWindow, ShowState, WindowSystem};
use serde::Deserialize;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Hyprland-backed window system.
///
/// All communication happens over Hyprland's IPC socket
/// (`$XDG_RUNTIME_DIR/hypr/<instance>/.socket.sock`).  No child processes
/// are spawned.
pub struct HyprlandWs;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct HyprlandWsError(String);

impl Default for HyprlandWs {
    fn default() -> Self {
        Self
    }
}

impl HyprlandWs {
    /// Create a new handle.
    ///
    /// No connection is opened eagerly; each method call opens a short-lived
    /// IPC request.
    pub fn new() -> Self {
        Self
    }
}

//  Direct Hyprland IPC helpers

/// Resolve the Hyprland command socket path.
///
/// Hyprland ≥ 0.40 stores its sockets at
/// `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
fn socket_path() -> Result<PathBuf, HyprlandWsError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandWsError("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandWsError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(format!(
        "{}/hypr/{}/.socket.sock",
        runtime_dir, his
    )))
}

/// Send a raw command to the Hyprland command socket and return the
/// response as a string.
fn ipc_request(command: &str) -> Result<String, HyprlandWsError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandWsError(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(command.as_bytes())
        .map_err(|e| HyprlandWsError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandWsError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandWsError(format!("utf-8: {}", e)))
}

/// Send a JSON data query (`j/<command>`) and return the raw JSON string.
fn ipc_json(data_command: &str) -> Result<String, HyprlandWsError> {
    ipc_request(&format!("j/{}", data_command))
}

/// Send a dispatch command and check for `"ok"`.
fn ipc_dispatch(args: &str) -> Result<(), HyprlandWsError> {
    let response = ipc_request(&format!("/dispatch {}", args))?;
    if response.trim() == "ok" {
        Ok(())
    } else {
        Err(HyprlandWsError(format!("dispatch error: {}", response)))
    }
}

//  Minimal serde structs for the JSON we care about

/// Subset of the JSON object returned by `j/monitors`.
///
/// `reserved` is the chrome Hyprland keeps clear on each edge, in
/// `[left, top, right, bottom]` order — exactly what we need for effective
/// bounds.
#[derive(Deserialize)]
struct MonitorJson {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    #[serde(default)]
    reserved: [i32; 4],
}

/// Subset of the JSON object returned by `j/activewindow`.
#[derive(Deserialize)]
struct ActiveWindowJson {
    address: String,
    pid: i32,
}

/// Subset of the JSON objects returned by `j/clients`.
#[derive(Deserialize)]
struct ClientJson {
    address: String,
    at: [i32; 2],
    size: [i32; 2],
}

//  WindowSystem implementation

impl WindowSystem for HyprlandWs {
    type Error = HyprlandWsError;

    fn displays(&self) -> Result<Vec<DisplayGeometry>, Self::Error> {
        let json = ipc_json("monitors")?;
        let monitors: Vec<MonitorJson> =
            serde_json::from_str(&json).map_err(|e| HyprlandWsError(format!("parse: {}", e)))?;
        Ok(monitors
            .into_iter()
            .map(|m| {
                let [left, top, right, bottom] = m.reserved;
                DisplayGeometry::new(
                    Rect::new(m.x, m.y, m.width, m.height),
                    EdgeInsets {
                        left,
                        top,
                        right,
                        bottom,
                    },
                )
            })
            .collect())
    }

    fn focused_window(&self) -> Result<Option<FocusedWindow>, Self::Error> {
        let json = ipc_json("activewindow")?;
        // Hyprland returns an empty object `{}` when no window is focused.
        if json.trim() == "{}" {
            return Ok(None);
        }
        let w: ActiveWindowJson =
            serde_json::from_str(&json).map_err(|e| HyprlandWsError(format!("parse: {}", e)))?;
        Ok(Some(FocusedWindow {
            identity: WindowIdentity(w.pid),
            handle: WindowHandle(w.address),
        }))
    }

    fn window_bounds(&self, handle: &WindowHandle) -> Result<Option<Rect>, Self::Error> {
        let json = ipc_json("clients")?;
        let clients: Vec<ClientJson> =
            serde_json::from_str(&json).map_err(|e| HyprlandWsError(format!("parse: {}", e)))?;
        Ok(clients
            .into_iter()
            .find(|c| c.address == handle.0)
            .map(|c| Rect::new(c.at[0], c.at[1], c.size[0], c.size[1])))
    }

    fn move_window(&self, handle: &WindowHandle, rect: Rect) -> Result<(), Self::Error> {
        // Pixel-exact placement only works on floating windows.
        ipc_dispatch(&format!("setfloating address:{}", handle.0))?;
        ipc_dispatch(&format!(
            "movewindowpixel exact {} {},address:{}",
            rect.x, rect.y, handle.0
        ))?;
        ipc_dispatch(&format!(
            "resizewindowpixel exact {} {},address:{}",
            rect.w, rect.h, handle.0
        ))?;
        Ok(())
    }

    fn set_show_state(&self, handle: &WindowHandle, state: ShowState) -> Result<(), Self::Error> {
        match state {
            // Maximize (not true fullscreen) so bars stay visible.
            ShowState::Maximized => ipc_dispatch("fullscreenstate 1"),
            // Hyprland has no native minimize; park the window on a special
            // workspace out of sight.
            ShowState::Minimized => ipc_dispatch(&format!(
                "movetoworkspacesilent special:minimized,address:{}",
                handle.0
            )),
        }
    }
}
