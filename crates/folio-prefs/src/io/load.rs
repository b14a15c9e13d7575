//! Preferences loading operations.

use std::fs;
use std::path::Path;

use folio_benc::BencValue;

use crate::codec::{deserialize_global, deserialize_history, keys};
use crate::error::{PrefsError, Result};
use crate::language::LanguageSelector;
use crate::types::{DocumentHistory, GlobalSettings};

/// Load preferences from a file into caller-initialized structures.
///
/// `settings` should hold defaults and `history` is appended to. On any
/// error both are left exactly as they were, so the application simply
/// continues with its defaults. A missing or empty file is the first-run
/// case, see [`PrefsError::is_first_run`].
pub fn load_prefs(
    path: &Path,
    settings: &mut GlobalSettings,
    history: &mut DocumentHistory,
    language: &mut dyn LanguageSelector,
) -> Result<()> {
    let bytes = fs::read(path).map_err(|e| PrefsError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    match parse_prefs_bytes(&bytes, settings, history, language) {
        Ok(()) => {
            tracing::info!(
                entries = history.len(),
                "Loaded preferences from {}",
                path.display()
            );
            Ok(())
        }
        Err(PrefsError::EmptyFile) => {
            tracing::debug!("Preferences file {} is empty", path.display());
            Err(PrefsError::EmptyFile)
        }
        Err(err) => {
            tracing::warn!("Ignoring preferences file {}: {}", path.display(), err);
            Err(err)
        }
    }
}

/// Parse preferences bytes into caller-initialized structures.
///
/// Both top-level sections are located and checked before anything is
/// applied, so a rejected file has no effect on `settings`, `history`, or
/// the language selector.
pub fn parse_prefs_bytes(
    bytes: &[u8],
    settings: &mut GlobalSettings,
    history: &mut DocumentHistory,
    language: &mut dyn LanguageSelector,
) -> Result<()> {
    if bytes.is_empty() {
        return Err(PrefsError::EmptyFile);
    }

    let root = BencValue::decode(bytes)?;
    let Some(root) = root.as_dict() else {
        return Err(PrefsError::InvalidFormat {
            reason: format!("root is a {}, expected a dictionary", root.kind()),
        });
    };

    let global = root.get_dict(keys::GLOBAL_PREFS).ok_or(PrefsError::MissingSection {
        key: keys::GLOBAL_PREFS,
    })?;
    let file_history = root
        .get_array(keys::FILE_HISTORY)
        .ok_or(PrefsError::MissingSection {
            key: keys::FILE_HISTORY,
        })?;

    deserialize_global(global, settings, language);
    let appended = deserialize_history(file_history, settings.global_prefs_only, history);

    if appended < file_history.len() {
        tracing::debug!(
            skipped = file_history.len() - appended,
            "Some history entries could not be restored"
        );
    }
    Ok(())
}
