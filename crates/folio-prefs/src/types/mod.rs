//! In-memory preference types.
//!
//! These are the records the application works with. They know nothing
//! about the on-disk tree; see `codec` for the mapping.

mod display_mode;
mod document;
mod geometry;
mod history;
mod settings;

pub use display_mode::{DisplayMode, UnknownDisplayMode};
pub use document::DocumentRecord;
pub use geometry::{ScrollPos, WindowRect, window_state};
pub use history::{DocumentHistory, MAX_RECENT_FILES_IN_MENU};
pub use settings::{DEFAULT_LANGUAGE, ForwardSearchHighlight, GlobalSettings, ZOOM_FIT_PAGE};
