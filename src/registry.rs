//! Per-window layout state records.
//!
//! [`WindowRegistry`] maps a stable [`WindowIdentity`] (the owning process
//! id) to the window's last applied [`LayoutState`]. Records are created
//! lazily on the first command that touches a window and live in memory only.
//!
//! Identities are recycled by the OS, so a record is never trusted blindly:
//! [`resolve`](WindowRegistry::resolve) resets a record whose handle no
//! longer matches the live window, and the registry evicts the
//! least-recently-used record once a configurable cap is exceeded.

use crate::layout::LayoutState;
use std::collections::HashMap;
use std::fmt;

/// Stable identifier for a window's owning process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowIdentity(pub i32);

impl fmt::Display for WindowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pid {}", self.0)
    }
}

/// Opaque per-window handle assigned by the window system (Hyprland's
/// window address). Used to move the window and to detect identity reuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle(pub String);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked window: its handle and last applied layout state.
#[derive(Debug, Clone)]
pub struct WindowRecord {
    pub handle: WindowHandle,
    pub state: LayoutState,
    /// Monotonic tick of the last resolve, for LRU eviction.
    last_used: u64,
}

/// Registry of tracked windows, keyed by owning-process identity.
///
/// Owned by whoever constructs the [`Dispatcher`](crate::dispatcher::Dispatcher)
/// — there is deliberately no global instance.
#[derive(Debug)]
pub struct WindowRegistry {
    records: HashMap<WindowIdentity, WindowRecord>,
    /// Maximum number of records kept before LRU eviction kicks in.
    max_tracked: usize,
    clock: u64,
}

impl WindowRegistry {
    /// Create a registry that tracks at most `max_tracked` windows.
    ///
    /// A cap of zero is treated as one — the focused window must always be
    /// trackable.
    pub fn new(max_tracked: usize) -> Self {
        Self {
            records: HashMap::new(),
            max_tracked: max_tracked.max(1),
            clock: 0,
        }
    }

    /// Number of windows currently tracked.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no windows are tracked.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for `identity`, creating it (in
    /// [`LayoutState::Unpositioned`]) if absent.
    ///
    /// If a record exists but its handle differs from `handle`, the process
    /// id has been recycled by a different window: the record restarts from
    /// `Unpositioned` with the new handle.
    pub fn resolve(&mut self, identity: WindowIdentity, handle: WindowHandle) -> &WindowRecord {
        self.clock += 1;
        let tick = self.clock;

        let record = self
            .records
            .entry(identity)
            .or_insert_with(|| WindowRecord {
                handle: handle.clone(),
                state: LayoutState::Unpositioned,
                last_used: tick,
            });
        if record.handle != handle {
            record.handle = handle;
            record.state = LayoutState::Unpositioned;
        }
        record.last_used = tick;

        self.evict_lru(identity);
        // Re-borrow after eviction; `identity` itself is never evicted.
        &self.records[&identity]
    }

    /// Persist `state` as the last applied layout for `identity`.
    ///
    /// A no-op for untracked identities (e.g. evicted between resolve and
    /// update — cannot happen under single-threaded dispatch, but harmless).
    pub fn update(&mut self, identity: WindowIdentity, state: LayoutState) {
        if let Some(record) = self.records.get_mut(&identity) {
            record.state = state;
        }
    }

    /// Drop the record for `identity`, if any. Called when the window system
    /// reports the window gone.
    pub fn evict(&mut self, identity: WindowIdentity) -> bool {
        self.records.remove(&identity).is_some()
    }

    /// Evict least-recently-used records until the cap holds, never touching
    /// `keep`.
    fn evict_lru(&mut self, keep: WindowIdentity) {
        while self.records.len() > self.max_tracked {
            let oldest = self
                .records
                .iter()
                .filter(|(id, _)| **id != keep)
                .min_by_key(|(_, r)| r.last_used)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    self.records.remove(&id);
                }
                None => break,
            }
        }
    }
}
