//! The per-window layout state machine.
//!
//! [`next`] is a pure, total function of `(state, command, bounds)` — every
//! pair of state and command maps to a defined successor, and nothing here
//! touches the window system. That makes the cycling behaviour (Top pressed
//! repeatedly walks third → two-thirds → third …) trivially testable.
//!
//! All divisions are integer floor division on pixel coordinates. For the
//! halves, the flooring remainder goes to the right half so `Left` and
//! `Right` tile the effective bounds exactly.

use crate::command::Command;
use crate::geometry::Rect;

/// The snapped position last applied to a window.
///
/// Exactly one state exists per tracked window; it is the only input (besides
/// the command and the display bounds) to [`next`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutState {
    /// No snap command has been applied yet.
    #[default]
    Unpositioned,
    LeftHalf,
    RightHalf,
    TopThird,
    TopTwoThirds,
    BottomThird,
    BottomTwoThirds,
    Centered,
    Maximized,
    Minimized,
}

/// What the dispatcher must do to realise a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Move/resize the window to an explicit rect.
    Move(Rect),
    /// Delegate to the window system's native maximize.
    Maximize,
    /// Delegate to the window system's native minimize.
    Minimize,
}

/// Compute the successor state and placement for `command` given the
/// window's current `state` and the owning display's effective `bounds`.
pub fn next(state: LayoutState, command: Command, bounds: Rect) -> (LayoutState, Placement) {
    let b = bounds;
    match command {
        Command::Left => {
            let rect = Rect::new(b.x, b.y, b.w / 2, b.h);
            (LayoutState::LeftHalf, Placement::Move(rect))
        }
        Command::Right => {
            // Right half absorbs the odd pixel so the two halves tile B.
            let left_w = b.w / 2;
            let rect = Rect::new(b.x + left_w, b.y, b.w - left_w, b.h);
            (LayoutState::RightHalf, Placement::Move(rect))
        }
        Command::Top => match state {
            LayoutState::TopThird => {
                let rect = Rect::new(b.x, b.y + b.h / 3, b.w, 2 * b.h / 3);
                (LayoutState::TopTwoThirds, Placement::Move(rect))
            }
            _ => {
                let rect = Rect::new(b.x, b.y, b.w, b.h / 3);
                (LayoutState::TopThird, Placement::Move(rect))
            }
        },
        Command::Bottom => match state {
            LayoutState::BottomThird => {
                let rect = Rect::new(b.x, b.y + b.h / 3, b.w, 2 * b.h / 3);
                (LayoutState::BottomTwoThirds, Placement::Move(rect))
            }
            _ => {
                let rect = Rect::new(b.x, b.y + 2 * b.h / 3, b.w, b.h / 3);
                (LayoutState::BottomThird, Placement::Move(rect))
            }
        },
        Command::Center => {
            let rect = Rect::new(b.x + b.w / 4, b.y + b.h / 4, b.w / 2, b.h / 2);
            (LayoutState::Centered, Placement::Move(rect))
        }
        Command::Maximize => (LayoutState::Maximized, Placement::Maximize),
        Command::Minimize => (LayoutState::Minimized, Placement::Minimize),
    }
}
