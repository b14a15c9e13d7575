//! Window placement and scroll position.

use serde::{Deserialize, Serialize};

/// Window state values stored alongside a [`WindowRect`].
///
/// Stored as a plain integer so states added by newer releases survive a
/// round-trip through older ones.
pub mod window_state {
    pub const NORMAL: i32 = 1;
    pub const MAXIMIZED: i32 = 2;
    pub const FULLSCREEN: i32 = 3;
    pub const MINIMIZED: i32 = 4;
}

/// Window position and size in screen pixels.
///
/// An all-zero rect means "let the platform choose".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub dx: i32,
    pub dy: i32,
}

impl WindowRect {
    pub const fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        Self { x, y, dx, dy }
    }
}

/// Scroll offset within a page, in document units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollPos {
    pub x: i32,
    pub y: i32,
}

impl ScrollPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
