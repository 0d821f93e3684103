//! Display-space geometry: rectangles, per-edge insets, and the
//! display-location algorithm.
//!
//! All coordinates are integer pixels on the virtual desktop. A display's
//! *effective* bounds are its raw bounds minus the chrome the compositor has
//! reserved along each edge (bars, docks); snap targets are always computed
//! inside the effective bounds.

use std::fmt;

/// Rectangle in display-space pixel coordinates.
///
/// Any rect applied to a window must have `w > 0 && h > 0`; degenerate rects
/// only occur as intermediate values (e.g. an empty intersection).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// The exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Area in square pixels (zero for degenerate rects).
    pub fn area(&self) -> i64 {
        self.w.max(0) as i64 * self.h.max(0) as i64
    }

    /// Intersection of two rects, or `None` if they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.w, self.h, self.x, self.y)
    }
}

/// Pixels reserved by the compositor along each edge of a display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// One physical display: its raw bounds and the usable bounds left after
/// subtracting reserved chrome.
///
/// Instances are rebuilt from a fresh [`displays`](crate::traits::WindowSystem::displays)
/// query on every command — displays can appear, vanish, or move between
/// hotkeys, so nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub raw: Rect,
    pub effective: Rect,
}

impl DisplayGeometry {
    /// Build a display from its raw bounds and reserved insets.
    ///
    /// The effective rect is clamped so it never escapes the raw bounds, even
    /// with nonsense insets.
    pub fn new(raw: Rect, insets: EdgeInsets) -> Self {
        let w = (raw.w - insets.left - insets.right).max(0);
        let h = (raw.h - insets.top - insets.bottom).max(0);
        let effective = Rect::new(raw.x + insets.left, raw.y + insets.top, w, h);
        Self { raw, effective }
    }
}

/// Find the display that owns `window_bounds`: the one whose **raw** bounds
/// share the largest intersection area with the window. Ties go to the lowest
/// index so the result is deterministic.
///
/// Returns `None` when no display overlaps the window (fully off-screen, or
/// the display list is empty). That is a normal outcome, not an error;
/// callers abandon the command.
pub fn locate_display(displays: &[DisplayGeometry], window_bounds: Rect) -> Option<&DisplayGeometry> {
    let mut best: Option<(&DisplayGeometry, i64)> = None;
    for display in displays {
        let overlap = match display.raw.intersection(&window_bounds) {
            Some(r) => r.area(),
            None => continue,
        };
        match best {
            Some((_, best_area)) if overlap <= best_area => {}
            _ => best = Some((display, overlap)),
        }
    }
    best.map(|(display, _)| display)
}
