use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::preview::{PreviewPane, PreviewType};

pub fn render_preview(pane: &PreviewPane, area: Rect, buf: &mut Buffer) {
  let title = pane
    .current_path
    .as_ref()
    .and_then(|p| p.file_name())
    .map(|n| format!(" {} ", n.to_string_lossy()))
    .unwrap_or_else(|| " Preview ".to_string());

  let border_color = match pane.get_content().map(|c| &c.preview_type) {
    Some(PreviewType::Error(_)) => Color::Indexed(167),
    _ => Color::Indexed(240),
  };

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border_color))
    .title(title)
    .title_style(Style::default().fg(Color::Indexed(75)));

  let inner = block.inner(area);
  block.render(area, buf);

  let lines: Vec<Line> = if let Some(content) = pane.get_content() {
    content
      .lines
      .iter()
      .skip(pane.scroll_offset)
      .take(inner.height as usize)
      .cloned()
      .collect()
  } else {
    vec![Line::from("  No file selected")]
  };

  Paragraph::new(lines).render(inner, buf);
}
