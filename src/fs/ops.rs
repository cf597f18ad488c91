use std::io;

use super::entry::Entry;
use crate::error::NavError;

/// Removes the single file behind `entry`.
///
/// Nothing selected and directory entries are both accepted as no-ops:
/// directories are never removed here, recursively or otherwise.
pub fn remove_entry(entry: Option<&Entry>) -> Result<(), NavError> {
  let Some(entry) = entry else {
    return Ok(());
  };
  if entry.is_dir {
    log::debug!("refusing to remove directory {}", entry.path.display());
    return Ok(());
  }

  // symlink_metadata so a dangling link still counts as present and can be removed
  match entry.path.symlink_metadata() {
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      log::warn!("{} vanished before removal", entry.path.display());
      return Err(NavError::NotFound(entry.path.clone()));
    }
    _ => {}
  }

  std::fs::remove_file(&entry.path).map_err(|source| {
    log::error!("remove {} failed: {source}", entry.path.display());
    NavError::Removal { path: entry.path.clone(), source }
  })?;
  log::info!("removed {}", entry.path.display());
  Ok(())
}
