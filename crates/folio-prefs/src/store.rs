//! Single-shot preferences file handle.

use std::path::{Path, PathBuf};

use crate::error::{PrefsError, Result};
use crate::io::{default_prefs_path, load_prefs, save_prefs};
use crate::language::LanguageSelector;
use crate::types::{DocumentHistory, GlobalSettings};

/// The preferences file of one application session.
///
/// Loading is allowed once per handle. The flag is set by the first attempt
/// whether or not it succeeds, so a damaged file is not re-read later in
/// the same session. Saving may happen any number of times.
#[derive(Debug, Clone)]
pub struct PrefsFile {
    path: PathBuf,
    loaded: bool,
}

impl PrefsFile {
    /// Create a handle for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            loaded: false,
        }
    }

    /// Create a handle for the platform default location.
    pub fn at_default_location() -> Self {
        Self::new(default_prefs_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether [`load`](Self::load) has been called.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Load the file into caller-initialized structures.
    ///
    /// See [`load_prefs`] for the semantics. A second call returns
    /// [`PrefsError::AlreadyLoaded`] without touching the file.
    pub fn load(
        &mut self,
        settings: &mut GlobalSettings,
        history: &mut DocumentHistory,
        language: &mut dyn LanguageSelector,
    ) -> Result<()> {
        if self.loaded {
            return Err(PrefsError::AlreadyLoaded {
                path: self.path.clone(),
            });
        }
        self.loaded = true;
        load_prefs(&self.path, settings, history, language)
    }

    /// Save the current state, replacing the file atomically.
    pub fn save(&self, settings: &GlobalSettings, history: &DocumentHistory) -> Result<()> {
        save_prefs(&self.path, settings, history)
    }
}
