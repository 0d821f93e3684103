//! IPC listener that accepts commands over a Unix socket.
//!
//! External tools (hotkey bindings, scripts) can connect to the socket and
//! send newline-delimited JSON command strings.

pub mod listener;
