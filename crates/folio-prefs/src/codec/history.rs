//! Document history <-> array of dictionaries.

use folio_benc::BencValue;

use super::entry::{deserialize_entry, serialize_entry};
use crate::types::{DocumentHistory, MAX_RECENT_FILES_IN_MENU};

/// Serialize the history in its stored order.
///
/// In globals-only mode only the first [`MAX_RECENT_FILES_IN_MENU`] records
/// are written; the rest are dropped from the file.
pub fn serialize_history(history: &DocumentHistory, global_prefs_only: bool) -> Vec<BencValue> {
    let limit = if global_prefs_only {
        MAX_RECENT_FILES_IN_MENU
    } else {
        usize::MAX
    };

    history
        .iter()
        .take(limit)
        .map(|record| BencValue::Dict(serialize_entry(record, global_prefs_only)))
        .collect()
}

/// Append every decodable record in `items` to `history`.
///
/// Elements that are not dictionaries, and dictionaries without a string
/// file path, are skipped; the rest keep their relative order. Returns the number of
/// records appended.
pub fn deserialize_history(
    items: &[BencValue],
    global_prefs_only: bool,
    history: &mut DocumentHistory,
) -> usize {
    let mut appended = 0;
    for (index, item) in items.iter().enumerate() {
        let Some(dict) = item.as_dict() else {
            tracing::warn!(index, kind = %item.kind(), "skipping history entry that is not a dictionary");
            continue;
        };
        match deserialize_entry(dict, global_prefs_only) {
            Some(record) => {
                history.append(record);
                appended += 1;
            }
            None => tracing::debug!(index, "skipping history entry without a file path"),
        }
    }
    appended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::keys;
    use crate::types::DocumentRecord;
    use folio_benc::BencDict;

    fn history_of(count: usize) -> DocumentHistory {
        (0..count)
            .map(|i| {
                let mut record = DocumentRecord::new(format!("/docs/{i}.pdf"));
                record.page_no = i as i32 + 1;
                record
            })
            .collect()
    }

    #[test]
    fn test_serialize_keeps_all_without_globals_only() {
        let items = serialize_history(&history_of(25), false);
        assert_eq!(items.len(), 25);
    }

    #[test]
    fn test_globals_only_truncates_and_abbreviates() {
        let items = serialize_history(&history_of(MAX_RECENT_FILES_IN_MENU + 5), true);
        assert_eq!(items.len(), MAX_RECENT_FILES_IN_MENU);

        for (i, item) in items.iter().enumerate() {
            let dict = item.as_dict().unwrap();
            assert_eq!(dict.get_str(keys::FILE), Some(format!("/docs/{i}.pdf").as_str()));
            assert_eq!(dict.get_int(keys::USE_GLOBAL_VALUES), Some(1));
            assert!(!dict.contains_key(keys::PAGE_NO));
        }
    }

    #[test]
    fn test_globals_only_short_history_not_padded() {
        let items = serialize_history(&history_of(3), true);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_empty_path_record_does_not_stop_others() {
        let mut history = history_of(3);
        history.append(DocumentRecord::default());
        history.append(DocumentRecord::new("/docs/last.pdf"));

        let items = serialize_history(&history, false);
        assert_eq!(items.len(), 5);

        let mut loaded = DocumentHistory::new();
        assert_eq!(deserialize_history(&items, false, &mut loaded), 5);
        assert_eq!(loaded.get(3).unwrap().file_path, "");
        assert_eq!(loaded.get(4).unwrap().file_path, "/docs/last.pdf");
    }

    #[test]
    fn test_missing_path_entry_skipped_in_order() {
        let mut items = serialize_history(&history_of(5), false);
        let mut broken = BencDict::new();
        broken.insert(keys::PAGE_NO, 99i64);
        items[2] = BencValue::Dict(broken);

        let mut history = DocumentHistory::new();
        let appended = deserialize_history(&items, false, &mut history);

        assert_eq!(appended, 4);
        let paths: Vec<&str> = history.iter().map(|r| r.file_path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/docs/0.pdf", "/docs/1.pdf", "/docs/3.pdf", "/docs/4.pdf"]
        );
    }

    #[test]
    fn test_non_dict_entry_skipped() {
        let mut items = serialize_history(&history_of(2), false);
        items.insert(1, BencValue::Int(7));
        items.push(BencValue::from("stray"));

        let mut history = DocumentHistory::new();
        assert_eq!(deserialize_history(&items, false, &mut history), 2);
    }

    #[test]
    fn test_deserialize_appends_to_existing() {
        let mut history = DocumentHistory::new();
        history.append(DocumentRecord::new("/already/there.pdf"));

        let items = serialize_history(&history_of(2), false);
        deserialize_history(&items, false, &mut history);

        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).unwrap().file_path, "/already/there.pdf");
    }
}
