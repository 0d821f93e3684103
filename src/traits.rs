//! Core traits that decouple hyprsnap from any specific compositor or
//! transport mechanism.
//!
//! Every concrete backend (Hyprland, a Unix-socket listener, a test harness,
//! …) implements one of these traits.  The
//! [`Dispatcher`](crate::dispatcher::Dispatcher) only depends on these
//! abstractions.

use crate::command::Command;
use crate::geometry::{DisplayGeometry, Rect};
use crate::registry::{WindowHandle, WindowIdentity};
use std::sync::mpsc;

/// The currently focused window, as reported by the window system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusedWindow {
    /// Stable identity of the owning process.
    pub identity: WindowIdentity,
    /// Window-system handle used for geometry queries and moves.
    pub handle: WindowHandle,
}

/// Native show-state changes that bypass the rectangle model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    Maximized,
    Minimized,
}

/// Abstraction over a window system that can report displays and focused
/// windows, and move or restyle a window.
///
/// An implementation might talk to Hyprland via IPC, or it might be a
/// recording stub used in tests.
pub trait WindowSystem {
    /// The error type produced by this window system.
    type Error: std::error::Error + Send + 'static;

    /// Enumerate all displays with their raw bounds and effective
    /// (chrome-excluded) bounds.
    ///
    /// Called fresh on every command — displays can be added, removed, or
    /// resized between hotkeys, so results must never be cached.
    fn displays(&self) -> Result<Vec<DisplayGeometry>, Self::Error>;

    /// The currently focused window, or `None` if nothing has focus.
    fn focused_window(&self) -> Result<Option<FocusedWindow>, Self::Error>;

    /// Current bounds of the window behind `handle`, or `None` if the window
    /// has closed since it was observed.
    fn window_bounds(&self, handle: &WindowHandle) -> Result<Option<Rect>, Self::Error>;

    /// Move and resize the window to `rect` (display-space pixels).
    fn move_window(&self, handle: &WindowHandle, rect: Rect) -> Result<(), Self::Error>;

    /// Apply a native show state (maximize/minimize) to the window.
    fn set_show_state(&self, handle: &WindowHandle, state: ShowState) -> Result<(), Self::Error>;
}

//  Command Source

/// A source of [`Command`]s.
///
/// Implementations listen on some transport — a Unix socket, an in-memory
/// channel, … — and forward parsed commands into the provided
/// [`mpsc::Sender`].
///
/// The trait is deliberately transport-agnostic: the dispatcher does not know
/// (or care) whether commands come from a socket, a hotkey helper, or a test
/// harness.
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    ///
    /// This method blocks the calling thread.  To run multiple sources
    /// concurrently, spawn each one on its own thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}
