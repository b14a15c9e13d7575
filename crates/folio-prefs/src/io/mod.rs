//! File I/O operations for preferences persistence.
//!
//! This module handles:
//! - Saving preferences with atomic writes
//! - Loading preferences with layout validation
//! - Resolving the default file location

mod load;
mod path;
mod save;

pub use load::{load_prefs, parse_prefs_bytes};
pub use path::{PREFS_FILENAME, default_prefs_path};
pub use save::{save_prefs, serialize_prefs};
