//! Recently opened documents.

use serde::{Deserialize, Serialize};

use super::DocumentRecord;

/// Number of history entries a recent-files menu can usefully show.
///
/// In globals-only mode, history beyond this count is not persisted.
pub const MAX_RECENT_FILES_IN_MENU: usize = 10;

/// Recently opened documents, most recently used first.
///
/// Order drives the recent-files presentation and is preserved by save
/// and load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentHistory {
    records: Vec<DocumentRecord>,
}

impl DocumentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the least-recently-used end.
    pub fn append(&mut self, record: DocumentRecord) {
        self.records.push(record);
    }

    /// Record that `record`'s document was just opened.
    ///
    /// Any existing entry for the same path is replaced and the record
    /// moves to the front.
    pub fn mark_opened(&mut self, record: DocumentRecord) {
        self.records.retain(|r| !r.is_for(&record.file_path));
        self.records.insert(0, record);
    }

    /// Find the entry for `path`.
    pub fn find(&self, path: &str) -> Option<&DocumentRecord> {
        self.records.iter().find(|r| r.is_for(path))
    }

    /// Find the entry for `path` mutably.
    pub fn find_mut(&mut self, path: &str) -> Option<&mut DocumentRecord> {
        self.records.iter_mut().find(|r| r.is_for(path))
    }

    /// Remove and return the entry for `path`.
    pub fn remove(&mut self, path: &str) -> Option<DocumentRecord> {
        let index = self.records.iter().position(|r| r.is_for(path))?;
        Some(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&DocumentRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.records.iter()
    }

    /// The entries a recent-files menu shows.
    pub fn recent(&self) -> &[DocumentRecord] {
        &self.records[..self.records.len().min(MAX_RECENT_FILES_IN_MENU)]
    }
}

impl From<Vec<DocumentRecord>> for DocumentHistory {
    fn from(records: Vec<DocumentRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<DocumentRecord> for DocumentHistory {
    fn from_iter<I: IntoIterator<Item = DocumentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentHistory {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
