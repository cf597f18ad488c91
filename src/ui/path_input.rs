use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::input::InputPath;

pub fn render_path_input(input: &InputPath, is_active: bool, area: Rect, buf: &mut Buffer) {
  let border_color = if is_active { Color::Indexed(75) } else { Color::Indexed(240) };

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border_color))
    .title(" Path ")
    .title_style(Style::default().fg(border_color));

  let inner = block.inner(area);
  let scroll = horizontal_scroll(input, inner.width);
  let line = Line::from(Span::styled(input.text().to_string(), Style::default().fg(Color::Indexed(252))));

  Paragraph::new(line).block(block).scroll((0, scroll)).render(area, buf);
}

/// Display columns between the start of the text and the cursor.
pub fn cursor_column(input: &InputPath) -> u16 {
  let prefix: String = input.text().chars().take(input.cursor()).collect();
  UnicodeWidthStr::width(prefix.as_str()).min(u16::MAX as usize) as u16
}

fn horizontal_scroll(input: &InputPath, width: u16) -> u16 {
  cursor_column(input).saturating_sub(width.saturating_sub(1))
}

/// Terminal cell of the text cursor inside the bordered input `area`.
pub fn cursor_position(input: &InputPath, area: Rect) -> Position {
  let inner_width = area.width.saturating_sub(2);
  let col = cursor_column(input) - horizontal_scroll(input, inner_width);
  Position::new(area.x + 1 + col, area.y + 1)
}
