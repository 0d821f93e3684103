//! The orchestrator that ties the registry, display location, and layout
//! state machine together.
//!
//! [`Dispatcher`] reacts to a [`Command`] by resolving the focused window,
//! finding the display that owns it, asking [`crate::layout`] for the next
//! placement, applying it through the [`WindowSystem`], and persisting the
//! new state. Exactly one command is in flight at a time (the mpsc event
//! loop in `main` serializes delivery), so no locking is needed here.

use crate::command::Command;
use crate::geometry::locate_display;
use crate::layout::{self, Placement};
use crate::registry::WindowRegistry;
use crate::traits::{ShowState, WindowSystem};
use log::{debug, info, warn};

/// Possible errors from the dispatcher.
///
/// Expected outcomes — no focused window, the window vanishing mid-command,
/// no display overlapping the window — are *not* errors; the dispatcher logs
/// them and abandons the command. Only window-system failures surface here,
/// and none of them are fatal: the caller logs and keeps dispatching.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The window system returned an error.
    #[error("window system error: {0}")]
    WindowSystem(String),
}

/// Snaps the focused window in response to commands.
///
/// The dispatcher is generic over any [`WindowSystem`] implementation, making
/// it completely independent of Hyprland or any other concrete backend. It
/// owns the [`WindowRegistry`] outright — there is no process-wide state.
///
/// # Typical usage
///
/// ```ignore
/// let ws = HyprlandWs::new();
/// let mut dispatcher = Dispatcher::new(ws, WindowRegistry::new(256));
/// dispatcher.handle(Command::Left)?;
/// ```
pub struct Dispatcher<W: WindowSystem> {
    ws: W,
    registry: WindowRegistry,
}

impl<W: WindowSystem> Dispatcher<W> {
    /// Create a dispatcher around a window system and an (injected) registry.
    pub fn new(ws: W, registry: WindowRegistry) -> Self {
        Self { ws, registry }
    }

    /// Shared access to the registry (for tests and introspection).
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Parse a raw command string and handle it.
    ///
    /// Unrecognized strings are a silent no-op (logged at debug level) so
    /// external bindings can ship commands this daemon does not know yet.
    pub fn handle_raw(&mut self, raw: &str) -> Result<(), DispatchError> {
        match Command::parse(raw) {
            Some(cmd) => self.handle(cmd),
            None => {
                debug!("ignoring unrecognized command {:?}", raw);
                Ok(())
            }
        }
    }

    /// Process a single [`Command`] against the currently focused window.
    ///
    /// The registry is only mutated once the display has been located, so an
    /// abandoned command leaves all per-window state untouched; the new
    /// layout state is persisted only after the placement was applied.
    pub fn handle(&mut self, cmd: Command) -> Result<(), DispatchError> {
        let focused = self
            .ws
            .focused_window()
            .map_err(|e| DispatchError::WindowSystem(e.to_string()))?;
        let Some(window) = focused else {
            debug!("no focused window, nothing to snap");
            return Ok(());
        };

        // Fresh geometry query; the window may have closed since focus was
        // observed.
        let bounds = self
            .ws
            .window_bounds(&window.handle)
            .map_err(|e| DispatchError::WindowSystem(e.to_string()))?;
        let Some(bounds) = bounds else {
            warn!("window {} gone, dropping its record", window.identity);
            self.registry.evict(window.identity);
            return Ok(());
        };

        let displays = self
            .ws
            .displays()
            .map_err(|e| DispatchError::WindowSystem(e.to_string()))?;
        let Some(display) = locate_display(&displays, bounds) else {
            warn!(
                "unable to locate a display for window {} ({}), abandoning {}",
                window.identity, bounds, cmd
            );
            return Ok(());
        };
        let effective = display.effective;

        let record = self.registry.resolve(window.identity, window.handle.clone());
        let (next_state, placement) = layout::next(record.state, cmd, effective);

        info!(
            "{}: {} ({:?} -> {:?})",
            window.identity, cmd, record.state, next_state
        );

        match placement {
            Placement::Move(rect) => self
                .ws
                .move_window(&window.handle, rect)
                .map_err(|e| DispatchError::WindowSystem(e.to_string()))?,
            Placement::Maximize => self
                .ws
                .set_show_state(&window.handle, ShowState::Maximized)
                .map_err(|e| DispatchError::WindowSystem(e.to_string()))?,
            Placement::Minimize => self
                .ws
                .set_show_state(&window.handle, ShowState::Minimized)
                .map_err(|e| DispatchError::WindowSystem(e.to_string()))?,
        }

        self.registry.update(window.identity, next_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{DisplayGeometry, EdgeInsets, Rect};
    use crate::layout::LayoutState;
    use crate::registry::{WindowHandle, WindowIdentity};
    use crate::traits::FocusedWindow;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    /// A test double that records every mutation and serves scripted state.
    #[derive(Default)]
    struct MockWs {
        displays: Vec<DisplayGeometry>,
        focused: Option<FocusedWindow>,
        /// handle -> current bounds; a missing entry means the window is gone.
        bounds: HashMap<String, Rect>,
        move_log: RefCell<Vec<(String, Rect)>>,
        show_log: RefCell<Vec<(String, ShowState)>>,
    }

    impl MockWs {
        fn focus(&mut self, pid: i32, handle: &str, bounds: Rect) {
            self.focused = Some(FocusedWindow {
                identity: WindowIdentity(pid),
                handle: WindowHandle(handle.into()),
            });
            self.bounds.insert(handle.into(), bounds);
        }
    }

    impl WindowSystem for MockWs {
        type Error = MockError;

        fn displays(&self) -> Result<Vec<DisplayGeometry>, MockError> {
            Ok(self.displays.clone())
        }

        fn focused_window(&self) -> Result<Option<FocusedWindow>, MockError> {
            Ok(self.focused.clone())
        }

        fn window_bounds(&self, handle: &WindowHandle) -> Result<Option<Rect>, MockError> {
            Ok(self.bounds.get(&handle.0).copied())
        }

        fn move_window(&self, handle: &WindowHandle, rect: Rect) -> Result<(), MockError> {
            self.move_log.borrow_mut().push((handle.0.clone(), rect));
            Ok(())
        }

        fn set_show_state(&self, handle: &WindowHandle, state: ShowState) -> Result<(), MockError> {
            self.show_log.borrow_mut().push((handle.0.clone(), state));
            Ok(())
        }
    }

    fn single_display() -> Vec<DisplayGeometry> {
        vec![DisplayGeometry::new(
            Rect::new(0, 0, 1920, 1080),
            EdgeInsets::default(),
        )]
    }

    fn dispatcher_with(ws: MockWs) -> Dispatcher<MockWs> {
        Dispatcher::new(ws, WindowRegistry::new(16))
    }

    #[test]
    fn left_moves_focused_window_to_left_half() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(100, "0xa", Rect::new(50, 50, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Left).unwrap();

        let moves = d.ws.move_log.borrow();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0], ("0xa".to_string(), Rect::new(0, 0, 960, 1080)));
    }

    #[test]
    fn top_cycles_per_window() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(100, "0xa", Rect::new(50, 50, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Top).unwrap();
        d.handle(Command::Top).unwrap();
        d.handle(Command::Top).unwrap();

        let moves = d.ws.move_log.borrow();
        assert_eq!(moves[0].1, Rect::new(0, 0, 1920, 360));
        assert_eq!(moves[1].1, Rect::new(0, 360, 1920, 720));
        assert_eq!(moves[2].1, Rect::new(0, 0, 1920, 360));
    }

    #[test]
    fn two_windows_cycle_independently() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(1, "0xa", Rect::new(0, 0, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Top).unwrap();
        d.handle(Command::Top).unwrap(); // window A now TopTwoThirds

        d.ws.focus(2, "0xb", Rect::new(500, 100, 400, 300));
        d.handle(Command::Top).unwrap(); // window B starts its own cycle

        let moves = d.ws.move_log.borrow();
        assert_eq!(moves[2].0, "0xb");
        assert_eq!(moves[2].1, Rect::new(0, 0, 1920, 360), "B must start at the third");
        drop(moves);

        // And A continues where it left off.
        d.ws.focus(1, "0xa", Rect::new(0, 0, 1920, 720));
        d.handle(Command::Top).unwrap();
        let moves = d.ws.move_log.borrow();
        assert_eq!(moves[3].1, Rect::new(0, 0, 1920, 360), "A cycles TwoThirds -> Third");
    }

    #[test]
    fn snap_targets_use_effective_bounds_of_owning_display() {
        let mut ws = MockWs::default();
        ws.displays = vec![
            DisplayGeometry::new(Rect::new(0, 0, 1920, 1080), EdgeInsets::default()),
            DisplayGeometry::new(
                Rect::new(1920, 0, 2560, 1440),
                EdgeInsets {
                    top: 30,
                    ..Default::default()
                },
            ),
        ];
        // Window sits on the second display.
        ws.focus(7, "0xc", Rect::new(2200, 200, 800, 600));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Right).unwrap();

        let moves = d.ws.move_log.borrow();
        assert_eq!(moves[0].1, Rect::new(1920 + 1280, 30, 1280, 1410));
    }

    #[test]
    fn maximize_and_minimize_use_show_state() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(100, "0xa", Rect::new(0, 0, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Maximize).unwrap();
        d.handle(Command::Minimize).unwrap();

        assert!(d.ws.move_log.borrow().is_empty());
        let shows = d.ws.show_log.borrow();
        assert_eq!(shows[0].1, ShowState::Maximized);
        assert_eq!(shows[1].1, ShowState::Minimized);
    }

    #[test]
    fn no_displays_abandons_command_without_state_mutation() {
        let mut ws = MockWs::default();
        ws.focus(100, "0xa", Rect::new(0, 0, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Left).unwrap();

        assert!(d.ws.move_log.borrow().is_empty());
        assert!(d.registry().is_empty(), "aborted command must not create a record");
    }

    #[test]
    fn off_screen_window_abandons_command() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(100, "0xa", Rect::new(9000, 9000, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Center).unwrap();

        assert!(d.ws.move_log.borrow().is_empty());
        assert!(d.registry().is_empty());
    }

    #[test]
    fn window_gone_drops_stale_record() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(100, "0xa", Rect::new(0, 0, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle(Command::Top).unwrap();
        assert_eq!(d.registry().len(), 1);

        // The window closes; focus still reports it but geometry fails.
        d.ws.bounds.remove("0xa");
        d.handle(Command::Top).unwrap();
        assert!(d.registry().is_empty());

        // A new window reusing the pid starts from Unpositioned: the first
        // Top lands on the third again, not the two-thirds.
        d.ws.focus(100, "0xd", Rect::new(0, 0, 400, 300));
        d.handle(Command::Top).unwrap();
        let moves = d.ws.move_log.borrow();
        assert_eq!(moves.last().unwrap().1, Rect::new(0, 0, 1920, 360));
    }

    #[test]
    fn no_focused_window_is_a_noop() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        let mut d = dispatcher_with(ws);

        d.handle(Command::Left).unwrap();
        assert!(d.ws.move_log.borrow().is_empty());
    }

    #[test]
    fn handle_raw_parses_and_ignores_unknown() {
        let mut ws = MockWs::default();
        ws.displays = single_display();
        ws.focus(100, "0xa", Rect::new(0, 0, 400, 300));
        let mut d = dispatcher_with(ws);

        d.handle_raw("LEFT").unwrap();
        d.handle_raw("warp-speed").unwrap();

        let moves = d.ws.move_log.borrow();
        assert_eq!(moves.len(), 1, "unknown command must not move anything");
        drop(moves);
        // Unknown commands also leave layout state alone: the next Top
        // starts the cycle fresh from LeftHalf.
        d.handle_raw("top").unwrap();
        assert_eq!(
            d.ws.move_log.borrow().last().unwrap().1,
            Rect::new(0, 0, 1920, 360)
        );
    }
}
