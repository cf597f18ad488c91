use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
  #[error("cannot list {}: {source}", path.display())]
  Listing {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("{} no longer exists", .0.display())]
  NotFound(PathBuf),

  #[error("cannot remove {}: {source}", path.display())]
  Removal {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("cannot edit file: {0}")]
  EditorLaunch(String),
}

impl NavError {
  pub fn listing(path: impl Into<PathBuf>, source: io::Error) -> Self {
    NavError::Listing { path: path.into(), source }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_listing_message_includes_path() {
    let err = NavError::listing("/nope", io::Error::new(io::ErrorKind::NotFound, "missing"));
    let msg = err.to_string();
    assert!(msg.contains("/nope"));
    assert!(msg.contains("missing"));
  }

  #[test]
  fn test_not_found_message() {
    let err = NavError::NotFound(PathBuf::from("/tmp/a.txt"));
    assert_eq!(err.to_string(), "/tmp/a.txt no longer exists");
  }

  #[test]
  fn test_editor_launch_message() {
    let err = NavError::EditorLaunch("$EDITOR is empty".to_string());
    assert_eq!(err.to_string(), "cannot edit file: $EDITOR is empty");
  }
}
