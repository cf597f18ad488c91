//! Linear back/forward history of visited directories.
//!
//! The cursor points at the record of the last directory reached through the
//! history (or a save). Parent moves leave it alone.
//! Saving from the middle of the history drops everything after the cursor,
//! the way a browser forgets its forward pages.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
  pub row_idx: usize,
  pub path: PathBuf,
}

#[derive(Debug, Default)]
pub struct HistoryManager {
  records: Vec<HistoryRecord>,
  cursor: usize,
}

impl HistoryManager {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn save(&mut self, row_idx: usize, path: &Path) {
    if !self.records.is_empty() {
      self.records.truncate(self.cursor + 1);
    }
    self.records.push(HistoryRecord { row_idx, path: path.to_path_buf() });
    self.cursor = self.records.len() - 1;
  }

  pub fn previous(&mut self) -> Option<&HistoryRecord> {
    if self.cursor == 0 {
      return None;
    }
    self.cursor -= 1;
    self.records.get(self.cursor)
  }

  pub fn next(&mut self) -> Option<&HistoryRecord> {
    if self.cursor + 1 >= self.records.len() {
      return None;
    }
    self.cursor += 1;
    self.records.get(self.cursor)
  }

  /// Remembers `row` as the selection of the record under the cursor, but
  /// only while that record is for `dir`. Views reached outside the history
  /// (parent navigation) must not overwrite another directory's row.
  pub fn stamp_row(&mut self, dir: &Path, row: usize) {
    if let Some(record) = self.records.get_mut(self.cursor)
      && record.path == dir
    {
      record.row_idx = row;
    }
  }

  pub fn current(&self) -> Option<&HistoryRecord> {
    self.records.get(self.cursor)
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }
}
