//! Preferences error types.
//!
//! Every failure here is recoverable from the application's point of view:
//! a failed load means starting with defaults, a failed save means the
//! previous file stays in place.

use std::path::PathBuf;
use thiserror::Error;

/// Preferences persistence error.
#[derive(Debug, Error)]
pub enum PrefsError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// There is no data to load.
    #[error("Preferences data is empty")]
    EmptyFile,

    /// The file content is not a well-formed tree.
    #[error("Failed to decode preferences data")]
    Decode {
        #[source]
        source: folio_benc::BencError,
    },

    /// The tree decoded but does not have the preferences layout.
    #[error("Invalid preferences format: {reason}")]
    InvalidFormat { reason: String },

    /// A required top-level section is absent or of the wrong kind.
    #[error("Preferences section '{key}' is missing")]
    MissingSection { key: &'static str },

    /// Encoding produced no bytes.
    #[error("Encoded preferences are empty")]
    EmptyOutput,

    /// Temp file couldn't be renamed over the target.
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `load` was called a second time on the same handle.
    #[error("Preferences were already loaded from {path}")]
    AlreadyLoaded { path: PathBuf },
}

impl PrefsError {
    /// Whether this is the ordinary first-run case: no file yet, or an
    /// empty one. Callers usually don't report these.
    pub fn is_first_run(&self) -> bool {
        match self {
            Self::EmptyFile => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the preferences file at {}", operation, path.display())
            }
            Self::EmptyFile => "No saved preferences were found.".to_string(),
            Self::Decode { .. } | Self::InvalidFormat { .. } | Self::MissingSection { .. } => {
                "The preferences file is damaged or from an incompatible version. \
                Default settings will be used."
                    .to_string()
            }
            Self::EmptyOutput => {
                "An error occurred while saving preferences.".to_string()
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save preferences to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::AlreadyLoaded { .. } => "Preferences were already loaded.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that you have permission to read the preferences file.".into())
                } else {
                    Some("Check that you have permission to write to the settings folder.".into())
                }
            }
            Self::Decode { .. } | Self::InvalidFormat { .. } | Self::MissingSection { .. } => {
                Some("Delete the preferences file to start over with defaults.".into())
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or check the settings folder permissions.".into())
            }
            Self::EmptyFile | Self::EmptyOutput | Self::AlreadyLoaded { .. } => None,
        }
    }
}

impl From<folio_benc::BencError> for PrefsError {
    fn from(source: folio_benc::BencError) -> Self {
        Self::Decode { source }
    }
}

/// Result type alias for preferences operations.
pub type Result<T> = std::result::Result<T, PrefsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_classification() {
        let missing = PrefsError::Io {
            operation: "read",
            path: PathBuf::from("prefs.dat"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(missing.is_first_run());
        assert!(PrefsError::EmptyFile.is_first_run());

        let denied = PrefsError::Io {
            operation: "read",
            path: PathBuf::from("prefs.dat"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!denied.is_first_run());
        assert!(!PrefsError::MissingSection { key: "gp" }.is_first_run());
    }

    #[test]
    fn test_damaged_file_has_suggestion() {
        let err = PrefsError::InvalidFormat {
            reason: "root is not a dictionary".to_string(),
        };
        assert!(err.user_message().contains("Default settings"));
        assert!(err.suggestion().is_some());
    }
}
