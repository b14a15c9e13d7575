//! Global (application-wide) preferences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DisplayMode, WindowRect, window_state};

/// Zoom value meaning "fit the whole page in the window".
pub const ZOOM_FIT_PAGE: f32 = -1.0;

/// Default UI language code.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Application-wide preferences.
///
/// `Default` yields the values a first run starts with. Loading a
/// preferences file only overwrites fields whose keys are present and
/// well-formed, so callers must start from `GlobalSettings::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub show_toolbar: bool,
    pub show_toc: bool,
    /// Table-of-contents panel width in pixels (0 = automatic).
    pub toc_dx: i32,

    /// User asked not to be prompted about becoming the default viewer.
    pub pdf_associate_dont_ask_again: bool,
    /// Answer given the last time the association prompt was shown.
    pub pdf_associate_should_associate: bool,

    /// Background color as `0xRRGGBB`.
    pub bg_color: u32,
    pub esc_to_exit: bool,
    pub enable_auto_update: bool,
    pub remember_opened_files: bool,
    /// Globals-only mode: per-document state is neither saved nor trusted.
    pub global_prefs_only: bool,

    pub default_display_mode: DisplayMode,
    /// Default zoom in percent, or a negative special value such as
    /// [`ZOOM_FIT_PAGE`].
    pub default_zoom: f32,
    pub window_state: i32,
    pub window_pos: WindowRect,

    /// Command line launched for inverse search from a document to its source.
    pub inverse_search_cmd_line: Option<String>,
    /// Expose the inverse-search UI.
    pub enable_tex_enhancements: bool,
    /// Release the user chose to skip ("Skip This Version").
    pub version_to_skip: Option<String>,
    /// When updates were last checked for.
    pub last_update_time: Option<String>,
    pub ui_language: String,

    pub fwdsearch: ForwardSearchHighlight,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        Self {
            show_toolbar: true,
            show_toc: true,
            toc_dx: 0,
            pdf_associate_dont_ask_again: false,
            pdf_associate_should_associate: false,
            bg_color: 0xFF_F2_00,
            esc_to_exit: false,
            enable_auto_update: true,
            remember_opened_files: true,
            global_prefs_only: false,
            default_display_mode: DisplayMode::Automatic,
            default_zoom: ZOOM_FIT_PAGE,
            window_state: window_state::NORMAL,
            window_pos: WindowRect::default(),
            inverse_search_cmd_line: None,
            enable_tex_enhancements: false,
            version_to_skip: None,
            last_update_time: None,
            ui_language: DEFAULT_LANGUAGE.to_string(),
            fwdsearch: ForwardSearchHighlight::default(),
        }
    }
}

impl GlobalSettings {
    /// Record that an update check happened now.
    pub fn mark_update_checked(&mut self) {
        self.last_update_time = Some(Utc::now().to_rfc3339());
    }

    /// Parse the last update check timestamp.
    ///
    /// Returns `None` when unset or when the stored text is not RFC 3339
    /// (older releases wrote an opaque value here).
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update_time
            .as_deref()
            .and_then(|text| DateTime::parse_from_rfc3339(text).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Check whether `version` is the one the user asked to skip.
    pub fn skips_version(&self, version: &str) -> bool {
        self.version_to_skip.as_deref() == Some(version)
    }
}

/// Highlight drawn at the target of a forward search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardSearchHighlight {
    /// Left offset of the highlight bar in pixels (0 = highlight the whole line).
    pub offset: i32,
    /// Color as `0xRRGGBB`.
    pub color: u32,
    /// Bar width in pixels.
    pub width: i32,
    /// Keep the highlight until the next search instead of fading it out.
    pub permanent: bool,
}

impl Default for ForwardSearchHighlight {
    fn default() -> Self {
        Self {
            offset: 0,
            color: 0x65_81_FF,
            width: 15,
            permanent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = GlobalSettings::default();
        assert!(settings.show_toolbar);
        assert!(settings.remember_opened_files);
        assert!(!settings.global_prefs_only);
        assert_eq!(settings.default_zoom, ZOOM_FIT_PAGE);
        assert_eq!(settings.window_state, window_state::NORMAL);
        assert_eq!(settings.ui_language, "en");
        assert_eq!(settings.fwdsearch.width, 15);
        assert!(settings.inverse_search_cmd_line.is_none());
    }

    #[test]
    fn test_mark_update_checked() {
        let mut settings = GlobalSettings::default();
        assert!(settings.last_update().is_none());

        settings.mark_update_checked();
        let stamp = settings.last_update().unwrap();
        assert!(Utc::now().signed_duration_since(stamp).num_seconds() < 60);
    }

    #[test]
    fn test_last_update_ignores_opaque_values() {
        let settings = GlobalSettings {
            last_update_time: Some("01cb5a1c8e2f3b00".to_string()),
            ..GlobalSettings::default()
        };
        assert!(settings.last_update().is_none());
    }

    #[test]
    fn test_skips_version() {
        let settings = GlobalSettings {
            version_to_skip: Some("2.1".to_string()),
            ..GlobalSettings::default()
        };
        assert!(settings.skips_version("2.1"));
        assert!(!settings.skips_version("2.2"));
    }
}
