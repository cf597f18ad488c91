use std::path::{Path, PathBuf};

use crate::error::NavError;
use crate::fs::{Entry, list_dir};

/// Listing, selection and scroll state of the entry panel.
///
/// Row 0 is the header row, so data rows are `1..=entries.len()` and
/// entry `n` lives at row `n + 1`.
#[derive(Debug, Default)]
pub struct EntryManager {
  current_dir: PathBuf,
  entries: Vec<Entry>,
  selected_row: usize,
  selected_col: usize,
  offset: (usize, usize),
}

impl EntryManager {
  pub fn new() -> Self {
    Self::default()
  }

  /// Lists `path` without touching the current state.
  pub fn load(&self, path: &Path) -> Result<Vec<Entry>, NavError> {
    list_dir(path)
  }

  /// Commits a listing obtained from [`EntryManager::load`].
  pub fn replace(&mut self, path: &Path, entries: Vec<Entry>) {
    self.current_dir = path.to_path_buf();
    self.entries = entries;
    self.selected_row = self.selected_row.min(self.entries.len());
  }

  /// Re-lists `path` and replaces the listing wholesale. On failure the
  /// previous listing is kept and the error is handed back.
  pub fn set_entries(&mut self, path: &Path) -> Result<&[Entry], NavError> {
    let entries = self.load(path)?;
    self.replace(path, entries);
    Ok(&self.entries)
  }

  pub fn entries(&self) -> &[Entry] {
    &self.entries
  }

  pub fn current_dir(&self) -> &Path {
    &self.current_dir
  }

  pub fn select(&mut self, row: usize, col: usize) {
    self.selected_row = row.min(self.entries.len());
    self.selected_col = col;
  }

  pub fn set_offset(&mut self, row: usize, col: usize) {
    self.offset = (row, col);
  }

  pub fn offset(&self) -> (usize, usize) {
    self.offset
  }

  pub fn selection(&self) -> (usize, usize) {
    (self.selected_row, self.selected_col)
  }

  pub fn selected_entry(&self) -> Option<&Entry> {
    if self.selected_row == 0 {
      return None;
    }
    self.entries.get(self.selected_row - 1)
  }

  /// Moves the selection by `delta` data rows, staying on the data rows when
  /// there are any. Returns whether the selection changed.
  pub fn move_selection(&mut self, delta: isize) -> bool {
    if self.entries.is_empty() {
      return false;
    }
    let before = self.selected_row;
    let target = (self.selected_row as isize + delta).clamp(1, self.entries.len() as isize);
    self.selected_row = target as usize;
    self.selected_row != before
  }

  pub fn select_first(&mut self) -> bool {
    let before = self.selected_row;
    self.select(1, 0);
    self.selected_row != before
  }

  pub fn select_last(&mut self) -> bool {
    let before = self.selected_row;
    self.select(self.entries.len(), 0);
    self.selected_row != before
  }

  /// Adjusts the row offset so the selected row is inside a viewport of
  /// `height` data rows. The offset counts data rows scrolled off the top.
  pub fn scroll_into_view(&mut self, height: usize) {
    if height == 0 {
      return;
    }
    let max_offset = self.entries.len().saturating_sub(height);
    let idx = self.selected_row.saturating_sub(1);
    let mut row = self.offset.0.min(max_offset);
    if idx < row {
      row = idx;
    } else if idx >= row + height {
      row = idx + 1 - height;
    }
    self.offset.0 = row;
  }
}
