//! Commands shared by every component of hyprsnap.
//!
//! [`Command`] is the closed vocabulary of snap actions. Hotkey bindings
//! deliver raw strings (over the Unix socket, see [`crate::ipc`]); parsing
//! happens once at that boundary, so the layout state machine never compares
//! strings.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A snap action requested for the currently focused window.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by the
/// [`Dispatcher`](crate::dispatcher::Dispatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    /// Snap to the left half of the display.
    Left,
    /// Snap to the right half of the display.
    Right,
    /// Cycle through the top third / top two-thirds of the display.
    Top,
    /// Cycle through the bottom third / bottom two-thirds of the display.
    Bottom,
    /// Center at half width and half height.
    Center,
    /// Maximize via the window system's native show state.
    Maximize,
    /// Minimize via the window system's native show state.
    Minimize,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Left => write!(f, "left"),
            Command::Right => write!(f, "right"),
            Command::Top => write!(f, "top"),
            Command::Bottom => write!(f, "bottom"),
            Command::Center => write!(f, "center"),
            Command::Maximize => write!(f, "maximize"),
            Command::Minimize => write!(f, "minimize"),
        }
    }
}

impl Command {
    /// Parse a command string (case-insensitive; accepts "up"/"top" and
    /// "down"/"bottom" as aliases).
    ///
    /// Returns `None` for anything unrecognized — unknown commands are a
    /// silent no-op so new bindings can be added without breaking old ones.
    pub fn parse(s: &str) -> Option<Command> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(|c| c.to_lowercase())
            .collect();
        match normalized.as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "up" | "top" => Some(Command::Top),
            "down" | "bottom" => Some(Command::Bottom),
            "center" | "centre" => Some(Command::Center),
            "maximize" | "max" => Some(Command::Maximize),
            "minimize" | "min" => Some(Command::Minimize),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Command::parse(&s).ok_or_else(|| DeError::custom(format!("invalid command: {:?}", s)))
    }
}
