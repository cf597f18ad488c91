use std::path::PathBuf;

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
  pub name: String,
  /// Absolute path of the item.
  pub path: PathBuf,
  /// What the list shows for the item; directories carry a trailing `/`.
  pub display: String,
  pub is_dir: bool,
}

impl Entry {
  pub fn from_path(path: PathBuf) -> Self {
    // metadata() follows symlinks, so a link to a directory is navigable
    let is_dir = path.metadata().is_ok_and(|m| m.is_dir());
    let name = path
      .file_name()
      .map(|n| n.to_string_lossy().to_string())
      .unwrap_or_else(|| path.to_string_lossy().to_string());
    let display = if is_dir { format!("{name}/") } else { name.clone() };

    Self { path, name, display, is_dir }
  }

  pub fn is_hidden(&self) -> bool {
    self.name.starts_with('.')
  }
}
