//! Page layout mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How pages are laid out in the document view.
///
/// Persisted by [`name`](Self::name), never by ordinal, so variants may be
/// reordered or added without corrupting existing files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    #[default]
    Automatic,
    SinglePage,
    Facing,
    BookView,
    Continuous,
    ContinuousFacing,
    ContinuousBookView,
}

impl DisplayMode {
    /// Get all display modes.
    pub const fn all() -> &'static [DisplayMode] {
        &[
            Self::Automatic,
            Self::SinglePage,
            Self::Facing,
            Self::BookView,
            Self::Continuous,
            Self::ContinuousFacing,
            Self::ContinuousBookView,
        ]
    }

    /// Canonical persisted name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Automatic => "automatic",
            Self::SinglePage => "single-page",
            Self::Facing => "facing",
            Self::BookView => "book-view",
            Self::Continuous => "continuous",
            Self::ContinuousFacing => "continuous-facing",
            Self::ContinuousBookView => "continuous-book-view",
        }
    }

    /// Resolve a persisted name.
    ///
    /// Accepts the canonical names and the space-separated spellings
    /// (`"single page"`, `"continuous book view"`) written by older releases.
    /// Matching is exact otherwise; unknown names return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|mode| {
            let canonical = mode.name();
            name == canonical
                || (name.len() == canonical.len()
                    && name
                        .bytes()
                        .zip(canonical.bytes())
                        .all(|(a, b)| a == b || (a == b' ' && b == b'-')))
        })
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown display mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDisplayMode(pub String);

impl fmt::Display for UnknownDisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown display mode: {}", self.0)
    }
}

impl std::error::Error for UnknownDisplayMode {}

impl FromStr for DisplayMode {
    type Err = UnknownDisplayMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownDisplayMode(s.to_string()))
    }
}
