//! Dictionary keys of the preferences file.
//!
//! These strings are the on-disk contract. Renaming one makes every
//! existing file lose that value on the next load.

/// Top-level key of the global settings dictionary.
pub const GLOBAL_PREFS: &str = "gp";
/// Top-level key of the document history array.
pub const FILE_HISTORY: &str = "File History";

pub const FILE: &str = "File";
pub const DECRYPTION_KEY: &str = "Decryption Key";
pub const USE_GLOBAL_VALUES: &str = "UseGlobalValues";
pub const DISPLAY_MODE: &str = "Display Mode";
pub const PAGE_NO: &str = "Page";
pub const ZOOM_VIRTUAL: &str = "ZoomVirtual";
pub const ROTATION: &str = "Rotation";
pub const SCROLL_X: &str = "Scroll X2";
pub const SCROLL_Y: &str = "Scroll Y2";
pub const WINDOW_STATE: &str = "Window State";
pub const WINDOW_X: &str = "Window X";
pub const WINDOW_Y: &str = "Window Y";
pub const WINDOW_DX: &str = "Window DX";
pub const WINDOW_DY: &str = "Window DY";
pub const SHOW_TOC: &str = "ShowToc";
pub const TOC_DX: &str = "Toc DX";
pub const TOC_STATE: &str = "TocToggles";

pub const SHOW_TOOLBAR: &str = "ShowToolbar";
pub const PDF_ASSOCIATE_DONT_ASK: &str = "PdfAssociateDontAskAgain";
pub const PDF_ASSOCIATE_ASSOCIATE: &str = "PdfAssociateShouldAssociate";
pub const UI_LANGUAGE: &str = "UILanguage";
pub const BG_COLOR: &str = "BgColor";
pub const ESC_TO_EXIT: &str = "EscToExit";
pub const INVERSE_SEARCH_COMMANDLINE: &str = "InverseSearchCommandLine";
pub const ENABLE_TEX_ENHANCEMENTS: &str = "ExposeInverseSearch";
pub const VERSION_TO_SKIP: &str = "VersionToSkip";
pub const LAST_UPDATE: &str = "LastUpdate";
pub const ENABLE_AUTO_UPDATE: &str = "EnableAutoUpdate";
pub const REMEMBER_OPENED_FILES: &str = "RememberOpenedFiles";
pub const GLOBAL_PREFS_ONLY: &str = "GlobalPrefsOnly";
pub const FWDSEARCH_OFFSET: &str = "ForwardSearch_HighlightOffset";
pub const FWDSEARCH_COLOR: &str = "ForwardSearch_HighlightColor";
pub const FWDSEARCH_WIDTH: &str = "ForwardSearch_HighlightWidth";
pub const FWDSEARCH_PERMANENT: &str = "ForwardSearch_HighlightPermanent";

/// Keys written only for full (non-abbreviated) history records.
pub const ENTRY_OVERRIDE_KEYS: &[&str] = &[
    DISPLAY_MODE,
    PAGE_NO,
    ZOOM_VIRTUAL,
    ROTATION,
    SCROLL_X,
    SCROLL_Y,
    WINDOW_STATE,
    WINDOW_X,
    WINDOW_Y,
    WINDOW_DX,
    WINDOW_DY,
    SHOW_TOC,
    TOC_DX,
    TOC_STATE,
];
