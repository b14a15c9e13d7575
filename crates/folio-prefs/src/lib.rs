//! Preferences and recent-document history persistence for Folio.
//!
//! This crate saves and restores the viewer's global settings together with
//! the per-document history (last page, zoom, rotation, window placement,
//! outline state) across sessions.
//!
//! # Features
//!
//! - **Lenient loading**: absent or malformed fields keep their defaults
//! - **All-or-nothing sections**: a file missing either top-level section
//!   changes nothing
//! - **Atomic writes** to prevent data corruption
//! - **Globals-only mode** that keeps only a short, abbreviated history
//!
//! # File Format
//!
//! The file is a bencoded dictionary with two sections:
//!
//! ```text
//! d
//!   12:File History  l d...e d...e e   one dictionary per document
//!   2:gp             d ... e           global settings
//! e
//! ```
//!
//! # Example
//!
//! ```no_run
//! use folio_prefs::{AcceptAnyLanguage, DocumentHistory, DocumentRecord, GlobalSettings, PrefsFile};
//!
//! let mut file = PrefsFile::at_default_location();
//! let mut settings = GlobalSettings::default();
//! let mut history = DocumentHistory::new();
//!
//! if let Err(err) = file.load(&mut settings, &mut history, &mut AcceptAnyLanguage) {
//!     if !err.is_first_run() {
//!         eprintln!("{}", err.user_message());
//!     }
//! }
//!
//! history.mark_opened(DocumentRecord::new("/docs/report.pdf"));
//! file.save(&settings, &history)?;
//! # Ok::<(), folio_prefs::PrefsError>(())
//! ```
//!
//! # Architecture
//!
//! The crate is organized into:
//!
//! - `types/` - In-memory settings, records and history
//! - `codec/` - Mapping between the types and the tagged-value tree
//! - `io/` - File I/O operations (save, load, default location)
//! - `store.rs` - Single-shot load handle
//! - `language.rs` - UI language selection hook
//! - `error.rs` - Error types with user-friendly messages

pub mod codec;
mod error;
mod io;
mod language;
mod store;
mod types;

// Re-export main types
pub use error::{PrefsError, Result};
pub use io::{
    PREFS_FILENAME, default_prefs_path, load_prefs, parse_prefs_bytes, save_prefs,
    serialize_prefs,
};
pub use language::{AcceptAnyLanguage, LanguageSelector, SupportedLanguages};
pub use store::PrefsFile;
pub use types::{
    DEFAULT_LANGUAGE, DisplayMode, DocumentHistory, DocumentRecord, ForwardSearchHighlight,
    GlobalSettings, MAX_RECENT_FILES_IN_MENU, ScrollPos, UnknownDisplayMode, WindowRect,
    ZOOM_FIT_PAGE, window_state,
};
