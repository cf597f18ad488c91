use std::cmp::Ordering;
use std::path::Path;

use super::entry::Entry;
use crate::error::NavError;

/// Lists `path` in a stable order: directories first, then names compared
/// case-insensitively, ties broken by the exact name.
pub fn list_dir(path: &Path) -> Result<Vec<Entry>, NavError> {
  let read_dir = std::fs::read_dir(path).map_err(|e| NavError::listing(path, e))?;

  let mut entries = Vec::new();
  for dir_entry in read_dir {
    let dir_entry = dir_entry.map_err(|e| NavError::listing(path, e))?;
    entries.push(Entry::from_path(dir_entry.path()));
  }

  entries.sort_by(compare_entries);
  Ok(entries)
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
  b.is_dir
    .cmp(&a.is_dir)
    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;
  use std::path::PathBuf;

  fn setup(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ff_lister_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
  }

  #[test]
  fn test_dirs_first_then_alphabetical() {
    let dir = setup("order");
    fs::create_dir(dir.join("zeta")).unwrap();
    fs::create_dir(dir.join("Alpha")).unwrap();
    fs::write(dir.join("b.txt"), "").unwrap();
    fs::write(dir.join("A.txt"), "").unwrap();

    let names: Vec<String> = list_dir(&dir).unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Alpha", "zeta", "A.txt", "b.txt"]);

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_case_ties_are_deterministic() {
    let dir = setup("ties");
    fs::write(dir.join("readme"), "").unwrap();
    fs::write(dir.join("README"), "").unwrap();

    let names: Vec<String> = list_dir(&dir).unwrap().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["README", "readme"]);

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_repeated_listing_is_stable() {
    let dir = setup("stable");
    for name in ["c", "a", "b", "d.rs", "e.md"] {
      fs::write(dir.join(name), "").unwrap();
    }
    fs::create_dir(dir.join("sub")).unwrap();

    let first = list_dir(&dir).unwrap();
    for _ in 0..5 {
      assert_eq!(list_dir(&dir).unwrap(), first);
    }

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_entries_have_absolute_paths() {
    let dir = setup("abs");
    fs::write(dir.join("x"), "").unwrap();

    let entries = list_dir(&dir).unwrap();
    assert_eq!(entries[0].path, dir.join("x"));
    assert!(entries[0].path.is_absolute());

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_empty_dir() {
    let dir = setup("empty");
    assert!(list_dir(&dir).unwrap().is_empty());
    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_missing_dir_is_listing_error() {
    let err = list_dir(Path::new("/nonexistent/ff/dir")).unwrap_err();
    assert!(matches!(err, NavError::Listing { .. }));
  }

  #[test]
  fn test_file_is_listing_error() {
    let dir = setup("notdir");
    let file = dir.join("plain.txt");
    fs::write(&file, "x").unwrap();

    let err = list_dir(&file).unwrap_err();
    assert!(matches!(err, NavError::Listing { ref path, .. } if *path == file));

    let _ = fs::remove_dir_all(&dir);
  }
}
