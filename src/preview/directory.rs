use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::fs::Entry;

pub fn render_listing(entries: &[Entry]) -> Vec<Line<'static>> {
  let dir_count = entries.iter().filter(|e| e.is_dir).count();
  let file_count = entries.len() - dir_count;

  let mut lines = Vec::with_capacity(entries.len() + 2);
  lines.push(Line::from(Span::styled(
    format!(" {file_count} files, {dir_count} directories"),
    Style::default().fg(Color::Indexed(252)),
  )));
  lines.push(Line::from(""));

  for entry in entries {
    let color = if entry.is_dir { Color::Indexed(75) } else { Color::Indexed(250) };
    lines.push(Line::from(vec![
      Span::raw(" "),
      Span::styled(entry.display.clone(), Style::default().fg(color)),
    ]));
  }

  lines
}

pub fn format_size(bytes: u64) -> String {
  const KB: u64 = 1024;
  const MB: u64 = 1024 * KB;
  const GB: u64 = 1024 * MB;

  if bytes >= GB {
    format!("{:.1} GB", bytes as f64 / GB as f64)
  } else if bytes >= MB {
    format!("{:.1} MB", bytes as f64 / MB as f64)
  } else if bytes >= KB {
    format!("{:.1} KB", bytes as f64 / KB as f64)
  } else {
    format!("{bytes} B")
  }
}
