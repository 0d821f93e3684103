//! **hyprsnap** — a hotkey-driven window snapping daemon.
//!
//! Each incoming command snaps the currently focused window to a predefined
//! slot (left half, right half, cycling thirds, centered, maximized,
//! minimized) on the monitor that currently contains it.  Snap state is kept
//! per window, so pressing the top/bottom hotkey repeatedly cycles a window
//! through third → two-thirds → third while other windows keep their own
//! positions.
//!
//! # Architecture
//!
//! The crate is organised around two core traits:
//!
//! * [`traits::WindowSystem`] — abstracts display enumeration and window
//!   geometry get/set so the layout logic is not coupled to any specific
//!   compositor.
//! * [`traits::CommandSource`] — abstracts the transport that delivers
//!   user-intent (a Unix socket fed by external hotkey bindings, …) so the
//!   main loop is not coupled to any specific IPC mechanism.
//!
//! Concrete implementations live in [`hyprland`] (Hyprland IPC) and
//! [`ipc`] (Unix-socket command listener).  The pure pieces — the
//! [`layout`] state machine and the [`geometry`] display resolution — have
//! no OS dependencies at all.

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod geometry;
pub mod hyprland;
pub mod ipc;
pub mod layout;
pub mod registry;
pub mod traits;
