pub mod directory;
pub mod text;

use std::path::{Path, PathBuf};

use ratatui::text::Line;

use crate::fs::{Entry, list_dir};

const MAX_TEXT_BYTES: u64 = 1024 * 1024; // 1MB
const MAX_TEXT_LINES: usize = 500;

/// Renders a preview of whatever entry is selected.
pub trait Preview {
  fn update_view(&mut self, entry: Option<&Entry>);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewType {
  Text,
  Binary,
  Directory,
  Empty,
  TooLarge,
  Error(String),
}

pub struct PreviewContent {
  pub lines: Vec<Line<'static>>,
  pub preview_type: PreviewType,
  pub file_size: u64,
}

impl PreviewContent {
  fn message(preview_type: PreviewType, file_size: u64, text: String) -> Self {
    Self { lines: vec![Line::from(text)], preview_type, file_size }
  }
}

/// The preview pane drawn next to the entry list.
#[derive(Default)]
pub struct PreviewPane {
  pub scroll_offset: usize,
  pub current_path: Option<PathBuf>,
  pub content: Option<PreviewContent>,
}

impl Preview for PreviewPane {
  fn update_view(&mut self, entry: Option<&Entry>) {
    let Some(entry) = entry else {
      self.clear();
      return;
    };
    self.scroll_offset = 0;
    self.current_path = Some(entry.path.clone());
    self.content = Some(load_preview(&entry.path));
  }
}

impl PreviewPane {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get_content(&self) -> Option<&PreviewContent> {
    self.content.as_ref()
  }

  pub fn clear(&mut self) {
    self.scroll_offset = 0;
    self.current_path = None;
    self.content = None;
  }
}

fn load_preview(path: &Path) -> PreviewContent {
  match detect_preview_type(path) {
    PreviewType::Directory => match list_dir(path) {
      Ok(entries) => PreviewContent {
        lines: directory::render_listing(&entries),
        preview_type: PreviewType::Directory,
        file_size: 0,
      },
      Err(e) => PreviewContent::message(PreviewType::Error(e.to_string()), 0, format!(" {e}")),
    },
    PreviewType::Text => {
      let file_size = file_size(path);
      match text::read_head(path, MAX_TEXT_LINES) {
        Ok(head) => PreviewContent { lines: text::render_lines(&head), preview_type: PreviewType::Text, file_size },
        Err(e) => {
          PreviewContent::message(PreviewType::Error(e.to_string()), file_size, format!(" Error reading file: {e}"))
        }
      }
    }
    PreviewType::Binary => {
      let size = file_size(path);
      PreviewContent::message(
        PreviewType::Binary,
        size,
        format!(" Binary file, {}", directory::format_size(size)),
      )
    }
    PreviewType::TooLarge => {
      let size = file_size(path);
      PreviewContent::message(PreviewType::TooLarge, size, " File too large to preview".to_string())
    }
    PreviewType::Empty => PreviewContent::message(PreviewType::Empty, 0, " Empty file".to_string()),
    PreviewType::Error(msg) => PreviewContent::message(PreviewType::Error(msg.clone()), 0, format!(" Error: {msg}")),
  }
}

fn file_size(path: &Path) -> u64 {
  std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

pub fn detect_preview_type(path: &Path) -> PreviewType {
  let metadata = match path.metadata() {
    Ok(m) => m,
    Err(e) => return PreviewType::Error(e.to_string()),
  };

  if metadata.is_dir() {
    return PreviewType::Directory;
  }
  if metadata.len() == 0 {
    return PreviewType::Empty;
  }
  if metadata.len() > MAX_TEXT_BYTES {
    return PreviewType::TooLarge;
  }

  match text::looks_binary(path) {
    Ok(true) => PreviewType::Binary,
    Ok(false) => PreviewType::Text,
    Err(e) => PreviewType::Error(e.to_string()),
  }
}
