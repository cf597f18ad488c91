use crate::fs::Entry;

/// Staging area for entries marked for a later file operation.
#[derive(Debug, Default)]
pub struct Register {
  pub copy_sources: Vec<Entry>,
}

impl Register {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_copy_source(&mut self, entry: Entry) {
    log::debug!("marked {} for copy", entry.path.display());
    self.copy_sources.push(entry);
  }

  /// Pasting marked entries is not implemented; the register is left as is.
  pub fn paste(&self) {
    log::info!("paste requested with {} marked entries; paste is not implemented", self.copy_sources.len());
  }

  pub fn len(&self) -> usize {
    self.copy_sources.len()
  }

  pub fn is_empty(&self) -> bool {
    self.copy_sources.is_empty()
  }
}
