//! Default preferences location.
//!
//! The file lives in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/org.Folio.Folio/
//! - Windows: %APPDATA%/Folio/Folio/config/
//! - Linux: ~/.config/folio/

use std::path::PathBuf;

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "org";
const APP_ORG: &str = "Folio";
const APP_NAME: &str = "Folio";

/// File name of the preferences file.
pub const PREFS_FILENAME: &str = "folio-prefs.dat";

/// Get the default path of the preferences file.
///
/// Falls back to [`PREFS_FILENAME`] in the working directory when no home
/// directory can be determined.
pub fn default_prefs_path() -> PathBuf {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PREFS_FILENAME))
        .unwrap_or_else(|| PathBuf::from(PREFS_FILENAME))
}
