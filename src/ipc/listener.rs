//! Unix-socket [`CommandSource`] implementation.
//!
//! Binds a Unix stream socket and accepts one connection at a time.
//! Each line received is parsed as a JSON-encoded [`Command`].
//!
//! # Wire format
//!
//! Every message is a single line of JSON followed by `\n` — a bare string,
//! matched case-insensitively:
//!
//! ```json
//! "left"
//! "Right"
//! "up"
//! "maximize"
//! ```
//!
//! Hotkey chords are bound outside the daemon, e.g. in `hyprland.conf`:
//!
//! ```text
//! bind = SUPER SHIFT, left, exec, printf '"left"\n' | socat - UNIX-CONNECT:$XDG_RUNTIME_DIR/hyprsnap.sock
//! ```

use crate::command::Command;
use crate::traits::CommandSource;
use log::{debug, error, info};
use std::io::{BufRead, BufReader};
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// A [`CommandSource`] that listens on a Unix stream socket for
/// JSON-encoded commands.
///
/// Each accepted connection can send multiple newline-delimited JSON
/// commands.  When the connection closes, the listener waits for the
/// next one.
pub struct UnixSocketListener {
    path: PathBuf,
}

/// Errors produced by the Unix socket listener.
#[derive(Debug, thiserror::Error)]
pub enum UnixSocketError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UnixSocketListener {
    /// Create a new listener bound to `path`.
    ///
    /// The socket file is created when [`run`](CommandSource::run) is called
    /// and removed when the source shuts down.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CommandSource for UnixSocketListener {
    type Error = UnixSocketError;

    /// Bind the socket and start accepting connections.
    ///
    /// This method **blocks** indefinitely.  Run it on a dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        // Remove stale socket if present.
        let _ = std::fs::remove_file(&self.path);

        let listener = UnixListener::bind(&self.path)?;
        info!("listening on {}", self.path.display());

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    debug!("client connected");
                    let reader = BufReader::new(stream);
                    for line in reader.lines() {
                        match line {
                            Ok(ref text) if text.trim().is_empty() => continue,
                            Ok(text) => match serde_json::from_str::<Command>(&text) {
                                Ok(cmd) => {
                                    debug!("received {:?}", cmd);
                                    if sink.send(cmd).is_err() {
                                        info!("sink closed, shutting down");
                                        return Ok(());
                                    }
                                }
                                Err(e) => {
                                    error!("bad command: {} — {}", text, e);
                                }
                            },
                            Err(e) => {
                                error!("read error: {}", e);
                                break;
                            }
                        }
                    }
                    debug!("client disconnected");
                }
                Err(e) => {
                    error!("accept error: {}", e);
                }
            }
        }
        Ok(())
    }
}

//  Tests
