//! Global settings <-> dictionary.

use folio_benc::BencDict;

use super::field::{format_decimal, read_field};
use super::keys;
use crate::language::LanguageSelector;
use crate::types::GlobalSettings;

/// Serialize global settings to a dictionary.
///
/// Optional strings that are unset or empty are omitted.
pub fn serialize_global(settings: &GlobalSettings) -> BencDict {
    let mut dict = BencDict::new();

    dict.insert(keys::SHOW_TOOLBAR, settings.show_toolbar);
    dict.insert(keys::SHOW_TOC, settings.show_toc);
    dict.insert(keys::TOC_DX, settings.toc_dx);
    dict.insert(
        keys::PDF_ASSOCIATE_DONT_ASK,
        settings.pdf_associate_dont_ask_again,
    );
    dict.insert(
        keys::PDF_ASSOCIATE_ASSOCIATE,
        settings.pdf_associate_should_associate,
    );

    dict.insert(keys::BG_COLOR, settings.bg_color);
    dict.insert(keys::ESC_TO_EXIT, settings.esc_to_exit);
    dict.insert(keys::ENABLE_AUTO_UPDATE, settings.enable_auto_update);
    dict.insert(keys::REMEMBER_OPENED_FILES, settings.remember_opened_files);
    dict.insert(keys::GLOBAL_PREFS_ONLY, settings.global_prefs_only);

    dict.insert(keys::DISPLAY_MODE, settings.default_display_mode);
    dict.insert(keys::ZOOM_VIRTUAL, format_decimal(settings.default_zoom));
    dict.insert(keys::WINDOW_STATE, settings.window_state);
    dict.insert(keys::WINDOW_X, settings.window_pos.x);
    dict.insert(keys::WINDOW_Y, settings.window_pos.y);
    dict.insert(keys::WINDOW_DX, settings.window_pos.dx);
    dict.insert(keys::WINDOW_DY, settings.window_pos.dy);

    insert_non_empty(
        &mut dict,
        keys::INVERSE_SEARCH_COMMANDLINE,
        settings.inverse_search_cmd_line.as_deref(),
    );
    dict.insert(keys::ENABLE_TEX_ENHANCEMENTS, settings.enable_tex_enhancements);
    insert_non_empty(
        &mut dict,
        keys::VERSION_TO_SKIP,
        settings.version_to_skip.as_deref(),
    );
    insert_non_empty(
        &mut dict,
        keys::LAST_UPDATE,
        settings.last_update_time.as_deref(),
    );
    dict.insert(keys::UI_LANGUAGE, settings.ui_language.as_str());

    dict.insert(keys::FWDSEARCH_OFFSET, settings.fwdsearch.offset);
    dict.insert(keys::FWDSEARCH_COLOR, settings.fwdsearch.color);
    dict.insert(keys::FWDSEARCH_WIDTH, settings.fwdsearch.width);
    dict.insert(keys::FWDSEARCH_PERMANENT, settings.fwdsearch.permanent);

    dict
}

fn insert_non_empty(dict: &mut BencDict, key: &str, value: Option<&str>) {
    if let Some(text) = value.filter(|text| !text.is_empty()) {
        dict.insert(key, text);
    }
}

/// Read global settings from a dictionary into `settings`.
///
/// Fields whose key is absent or malformed keep their current value, so
/// `settings` should hold defaults before the call. A present language
/// code is offered to `language`; `ui_language` changes only if it is
/// accepted.
pub fn deserialize_global(
    dict: &BencDict,
    settings: &mut GlobalSettings,
    language: &mut dyn LanguageSelector,
) {
    read_field(dict, keys::SHOW_TOOLBAR, &mut settings.show_toolbar);
    read_field(dict, keys::SHOW_TOC, &mut settings.show_toc);
    read_field(dict, keys::TOC_DX, &mut settings.toc_dx);
    read_field(
        dict,
        keys::PDF_ASSOCIATE_DONT_ASK,
        &mut settings.pdf_associate_dont_ask_again,
    );
    read_field(
        dict,
        keys::PDF_ASSOCIATE_ASSOCIATE,
        &mut settings.pdf_associate_should_associate,
    );
    read_field(dict, keys::ESC_TO_EXIT, &mut settings.esc_to_exit);
    read_field(dict, keys::BG_COLOR, &mut settings.bg_color);
    read_field(dict, keys::ENABLE_AUTO_UPDATE, &mut settings.enable_auto_update);
    read_field(
        dict,
        keys::REMEMBER_OPENED_FILES,
        &mut settings.remember_opened_files,
    );
    read_field(dict, keys::GLOBAL_PREFS_ONLY, &mut settings.global_prefs_only);

    read_field(dict, keys::DISPLAY_MODE, &mut settings.default_display_mode);
    read_field(dict, keys::ZOOM_VIRTUAL, &mut settings.default_zoom);
    read_field(dict, keys::WINDOW_STATE, &mut settings.window_state);
    read_field(dict, keys::WINDOW_X, &mut settings.window_pos.x);
    read_field(dict, keys::WINDOW_Y, &mut settings.window_pos.y);
    read_field(dict, keys::WINDOW_DX, &mut settings.window_pos.dx);
    read_field(dict, keys::WINDOW_DY, &mut settings.window_pos.dy);

    read_field(
        dict,
        keys::INVERSE_SEARCH_COMMANDLINE,
        &mut settings.inverse_search_cmd_line,
    );
    read_field(
        dict,
        keys::ENABLE_TEX_ENHANCEMENTS,
        &mut settings.enable_tex_enhancements,
    );
    read_field(dict, keys::VERSION_TO_SKIP, &mut settings.version_to_skip);
    read_field(dict, keys::LAST_UPDATE, &mut settings.last_update_time);

    if let Some(code) = dict.get_str(keys::UI_LANGUAGE) {
        if language.select_language(code) {
            settings.ui_language = code.to_string();
        }
    }

    read_field(dict, keys::FWDSEARCH_OFFSET, &mut settings.fwdsearch.offset);
    read_field(dict, keys::FWDSEARCH_COLOR, &mut settings.fwdsearch.color);
    read_field(dict, keys::FWDSEARCH_WIDTH, &mut settings.fwdsearch.width);
    read_field(
        dict,
        keys::FWDSEARCH_PERMANENT,
        &mut settings.fwdsearch.permanent,
    );
}
