//! Per-document view state.

use serde::{Deserialize, Serialize};

use super::{DisplayMode, ScrollPos, WindowRect};

/// View state remembered for one previously opened document.
///
/// A fresh record has zero-valued overrides. A stored entry without a file
/// path is discarded on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Path of the document.
    pub file_path: String,
    /// Key used to open an encrypted document without prompting again.
    pub decryption_key: Option<String>,
    /// Ignore the overrides below and apply the global defaults instead.
    pub use_global_values: bool,

    pub display_mode: DisplayMode,
    pub page_no: i32,
    /// Page rotation in degrees.
    pub rotation: i32,
    pub scroll_pos: ScrollPos,
    /// Zoom in percent, or a negative special value.
    pub zoom_virtual: f32,
    pub window_state: i32,
    pub window_pos: WindowRect,
    pub show_toc: bool,
    pub toc_dx: i32,
    /// Ids of the expanded table-of-contents nodes, in outline order.
    pub toc_state: Vec<i32>,
}

impl DocumentRecord {
    /// Create a record for `file_path` with no overrides.
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// Set the decryption key.
    #[must_use]
    pub fn with_decryption_key(mut self, key: impl Into<String>) -> Self {
        self.decryption_key = Some(key.into());
        self
    }

    /// Mark the record as following the global defaults.
    #[must_use]
    pub fn with_global_values(mut self) -> Self {
        self.use_global_values = true;
        self
    }

    /// Check whether this record refers to `path`.
    pub fn is_for(&self, path: &str) -> bool {
        self.file_path == path
    }

    /// Drop every per-document override, keeping identity fields.
    ///
    /// This is the shape a record takes after a globals-only round-trip.
    pub fn abbreviated(&self) -> Self {
        Self {
            file_path: self.file_path.clone(),
            decryption_key: self.decryption_key.clone(),
            use_global_values: true,
            ..Default::default()
        }
    }
}
