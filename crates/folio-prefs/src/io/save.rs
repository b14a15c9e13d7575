//! Preferences saving operations.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use folio_benc::{BencDict, BencValue};

use crate::codec::{keys, serialize_global, serialize_history};
use crate::error::{PrefsError, Result};
use crate::types::{DocumentHistory, GlobalSettings};

/// Save preferences to a file.
///
/// Uses atomic write (temp file + rename) so a crash mid-save leaves the
/// previous file intact. Nothing is written if serialization fails.
pub fn save_prefs(path: &Path, settings: &GlobalSettings, history: &DocumentHistory) -> Result<()> {
    let bytes = serialize_prefs(settings, history)?;
    write_atomic(path, &bytes)?;

    tracing::info!(
        entries = history.len(),
        global_prefs_only = settings.global_prefs_only,
        "Saved preferences to {}",
        path.display()
    );
    Ok(())
}

/// Serialize preferences to bytes.
///
/// Layout:
/// - `gp`: global settings dictionary
/// - `File History`: array of record dictionaries, shaped by
///   `settings.global_prefs_only`
pub fn serialize_prefs(settings: &GlobalSettings, history: &DocumentHistory) -> Result<Vec<u8>> {
    let global = serialize_global(settings);
    let file_history = serialize_history(history, settings.global_prefs_only);

    let mut root = BencDict::new();
    root.insert(keys::GLOBAL_PREFS, global);
    root.insert(keys::FILE_HISTORY, file_history);

    let bytes = BencValue::Dict(root).encode();
    if bytes.is_empty() {
        return Err(PrefsError::EmptyOutput);
    }
    Ok(bytes)
}

/// Sibling temp file used while saving, e.g. `prefs.dat` -> `prefs.dat.tmp`.
fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let Some(name) = path.file_name() else {
        return Err(PrefsError::Io {
            operation: "create",
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "preferences path has no file name",
            ),
        });
    };
    let mut temp_name = OsString::from(name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = temp_path_for(path)?;

    // Create parent directory if needed
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PrefsError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if let Err(err) = write_and_sync(&temp_path, bytes) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PrefsError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })
}

fn write_and_sync(temp_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| PrefsError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| PrefsError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| PrefsError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}
