//! Document record <-> dictionary.

use folio_benc::{BencDict, BencValue};

use super::field::{format_decimal, read_field};
use super::keys;
use crate::types::DocumentRecord;

/// Serialize one history record.
///
/// In globals-only mode, or when the record follows the global values, only
/// the abbreviated form is written: path, decryption key and the
/// use-global-values flag.
pub fn serialize_entry(record: &DocumentRecord, global_prefs_only: bool) -> BencDict {
    let mut dict = BencDict::new();
    dict.insert(keys::FILE, record.file_path.as_str());
    if let Some(key) = &record.decryption_key {
        dict.insert(keys::DECRYPTION_KEY, key.as_str());
    }

    if global_prefs_only || record.use_global_values {
        dict.insert(keys::USE_GLOBAL_VALUES, true);
        return dict;
    }

    dict.insert(keys::DISPLAY_MODE, record.display_mode);
    dict.insert(keys::PAGE_NO, record.page_no);
    dict.insert(keys::ROTATION, record.rotation);
    dict.insert(keys::SCROLL_X, record.scroll_pos.x);
    dict.insert(keys::SCROLL_Y, record.scroll_pos.y);
    dict.insert(keys::WINDOW_STATE, record.window_state);
    dict.insert(keys::WINDOW_X, record.window_pos.x);
    dict.insert(keys::WINDOW_Y, record.window_pos.y);
    dict.insert(keys::WINDOW_DX, record.window_pos.dx);
    dict.insert(keys::WINDOW_DY, record.window_pos.dy);

    dict.insert(keys::SHOW_TOC, record.show_toc);
    dict.insert(keys::TOC_DX, record.toc_dx);
    dict.insert(keys::ZOOM_VIRTUAL, format_decimal(record.zoom_virtual));

    if !record.toc_state.is_empty() {
        let ids: Vec<BencValue> = record.toc_state.iter().copied().map(BencValue::from).collect();
        dict.insert(keys::TOC_STATE, ids);
    }

    dict
}

/// Deserialize one history record.
///
/// Returns `None` if the file path is absent or not a string; that is the
/// only per-record failure. Path bytes that are not UTF-8 are decoded
/// lossily. In globals-only mode the stored overrides are ignored and the
/// record follows the global values.
pub fn deserialize_entry(dict: &BencDict, global_prefs_only: bool) -> Option<DocumentRecord> {
    let file_path = dict.get_bytes(keys::FILE)?;

    let mut record = DocumentRecord::new(String::from_utf8_lossy(file_path));
    read_field(dict, keys::DECRYPTION_KEY, &mut record.decryption_key);

    if global_prefs_only {
        record.use_global_values = true;
        return Some(record);
    }

    read_field(dict, keys::USE_GLOBAL_VALUES, &mut record.use_global_values);
    read_field(dict, keys::DISPLAY_MODE, &mut record.display_mode);
    read_field(dict, keys::PAGE_NO, &mut record.page_no);
    read_field(dict, keys::ROTATION, &mut record.rotation);
    read_field(dict, keys::SCROLL_X, &mut record.scroll_pos.x);
    read_field(dict, keys::SCROLL_Y, &mut record.scroll_pos.y);
    read_field(dict, keys::WINDOW_STATE, &mut record.window_state);
    read_field(dict, keys::WINDOW_X, &mut record.window_pos.x);
    read_field(dict, keys::WINDOW_Y, &mut record.window_pos.y);
    read_field(dict, keys::WINDOW_DX, &mut record.window_pos.dx);
    read_field(dict, keys::WINDOW_DY, &mut record.window_pos.dy);

    read_field(dict, keys::SHOW_TOC, &mut record.show_toc);
    read_field(dict, keys::TOC_DX, &mut record.toc_dx);
    read_field(dict, keys::ZOOM_VIRTUAL, &mut record.zoom_virtual);

    if let Some(ids) = dict.get_array(keys::TOC_STATE) {
        record.toc_state = ids
            .iter()
            .filter_map(|id| id.as_int().and_then(|n| i32::try_from(n).ok()))
            .collect();
    }

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DisplayMode, ScrollPos, WindowRect, window_state};

    fn full_record() -> DocumentRecord {
        DocumentRecord {
            file_path: "/home/ada/papers/engine.pdf".to_string(),
            decryption_key: Some("6b6579".to_string()),
            use_global_values: false,
            display_mode: DisplayMode::BookView,
            page_no: 42,
            rotation: 90,
            scroll_pos: ScrollPos::new(10, -20),
            zoom_virtual: 150.25,
            window_state: window_state::MAXIMIZED,
            window_pos: WindowRect::new(5, 6, 800, 600),
            show_toc: true,
            toc_dx: 220,
            toc_state: vec![3, 1, 8],
        }
    }

    #[test]
    fn test_full_form_round_trip() {
        let record = full_record();
        let dict = serialize_entry(&record, false);

        assert_eq!(dict.get_str(keys::DISPLAY_MODE), Some("book-view"));
        assert_eq!(dict.get_str(keys::ZOOM_VIRTUAL), Some("150.2500"));
        assert!(!dict.contains_key(keys::USE_GLOBAL_VALUES));

        let decoded = deserialize_entry(&dict, false).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_toc_state_ids_only() {
        let dict = serialize_entry(&full_record(), false);
        let ids: Vec<i64> = dict
            .get_array(keys::TOC_STATE)
            .unwrap()
            .iter()
            .filter_map(BencValue::as_int)
            .collect();
        assert_eq!(ids, vec![3, 1, 8]);
    }

    #[test]
    fn test_empty_toc_state_not_written() {
        let record = DocumentRecord::new("/a.pdf");
        let dict = serialize_entry(&record, false);
        assert!(!dict.contains_key(keys::TOC_STATE));
    }

    #[test]
    fn test_globals_only_writes_abbreviated_form() {
        let dict = serialize_entry(&full_record(), true);

        assert_eq!(dict.get_str(keys::FILE), Some("/home/ada/papers/engine.pdf"));
        assert_eq!(dict.get_str(keys::DECRYPTION_KEY), Some("6b6579"));
        assert_eq!(dict.get_int(keys::USE_GLOBAL_VALUES), Some(1));
        assert_eq!(dict.len(), 3);
        for key in keys::ENTRY_OVERRIDE_KEYS {
            assert!(!dict.contains_key(key), "unexpected key {key}");
        }
    }

    #[test]
    fn test_use_global_values_flag_writes_abbreviated_form() {
        let record = DocumentRecord::new("/a.pdf").with_global_values();
        let dict = serialize_entry(&record, false);
        assert_eq!(dict.len(), 2);

        let decoded = deserialize_entry(&dict, false).unwrap();
        assert!(decoded.use_global_values);
    }

    #[test]
    fn test_empty_path_round_trips() {
        let record = DocumentRecord {
            page_no: 3,
            ..DocumentRecord::default()
        };
        let dict = serialize_entry(&record, false);
        assert_eq!(dict.get_str(keys::FILE), Some(""));

        let decoded = deserialize_entry(&dict, false).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_missing_path_rejected() {
        let mut dict = BencDict::new();
        dict.insert(keys::PAGE_NO, 4i64);
        assert!(deserialize_entry(&dict, false).is_none());

        dict.insert(keys::FILE, 17i64);
        assert!(deserialize_entry(&dict, false).is_none());
    }

    #[test]
    fn test_non_utf8_path_kept_lossily() {
        let mut dict = BencDict::new();
        dict.insert(keys::FILE, b"/\xE9.pdf".to_vec());
        dict.insert(keys::PAGE_NO, 6i64);

        let record = deserialize_entry(&dict, false).unwrap();
        assert_eq!(record.file_path, "/\u{FFFD}.pdf");
        assert_eq!(record.page_no, 6);
    }

    #[test]
    fn test_globals_only_ignores_stored_overrides() {
        let dict = serialize_entry(&full_record(), false);
        let decoded = deserialize_entry(&dict, true).unwrap();

        assert!(decoded.use_global_values);
        assert_eq!(decoded.decryption_key.as_deref(), Some("6b6579"));
        assert_eq!(decoded.page_no, 0);
        assert!(decoded.toc_state.is_empty());
        assert_eq!(decoded, full_record().abbreviated());
    }

    #[test]
    fn test_malformed_fields_default_individually() {
        let mut dict = BencDict::new();
        dict.insert(keys::FILE, "/a.pdf");
        dict.insert(keys::PAGE_NO, "seven");
        dict.insert(keys::ROTATION, 180i64);
        dict.insert(keys::ZOOM_VIRTUAL, "about 100");
        dict.insert(
            keys::TOC_STATE,
            vec![
                BencValue::Int(2),
                BencValue::from("x"),
                BencValue::Int(5),
                BencValue::Int(i64::MAX),
                BencValue::Int(9),
            ],
        );

        let record = deserialize_entry(&dict, false).unwrap();
        assert_eq!(record.page_no, 0);
        assert_eq!(record.rotation, 180);
        assert_eq!(record.zoom_virtual, 0.0);
        assert_eq!(record.toc_state, vec![2, 5, 9]);
    }

    #[test]
    fn test_toc_state_wrong_kind_ignored() {
        let mut dict = BencDict::new();
        dict.insert(keys::FILE, "/a.pdf");
        dict.insert(keys::TOC_STATE, 3i64);
        let record = deserialize_entry(&dict, false).unwrap();
        assert!(record.toc_state.is_empty());
    }
}
