use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::app::App;
use crate::event::Focus;
use crate::preview::Preview;
use crate::runner::ProcessRunner;

pub fn render_entry_list<P: Preview, R: ProcessRunner>(app: &App<P, R>, area: Rect, buf: &mut Buffer) {
  let is_active = app.focus == Focus::Entries;
  let entries = app.entries.entries();
  let (selected_row, _) = app.entries.selection();
  let (offset, _) = app.entries.offset();

  // Row 0 of the table is the header
  let data_height = area.height.saturating_sub(3) as usize;
  let mut lines: Vec<Line> = Vec::with_capacity(data_height + 1);
  lines.push(Line::from(Span::styled(
    " Name",
    Style::default().fg(Color::Indexed(245)).add_modifier(Modifier::BOLD),
  )));

  let start = offset.min(entries.len());
  let end = (start + data_height).min(entries.len());

  for (i, entry) in entries[start..end].iter().enumerate() {
    let row = start + i + 1;
    let is_selected = row == selected_row;
    let is_marked = app.register.copy_sources.iter().any(|e| e.path == entry.path);

    let style = if is_selected && is_active {
      Style::default().fg(Color::Indexed(234)).bg(Color::Indexed(75)).add_modifier(Modifier::BOLD)
    } else if is_selected {
      // Inactive panel with selected item - dimmer highlight
      Style::default().fg(Color::Indexed(234)).bg(Color::Indexed(240))
    } else if entry.is_dir {
      Style::default().fg(Color::Indexed(75))
    } else if entry.is_hidden() {
      Style::default().fg(Color::Indexed(245)).add_modifier(Modifier::DIM)
    } else {
      Style::default().fg(Color::Indexed(252))
    };

    let marker = if is_marked { "+" } else { " " };
    lines.push(Line::from(vec![
      Span::styled(marker, Style::default().fg(Color::Indexed(114))),
      Span::styled(entry.display.clone(), style),
    ]));
  }

  let dir_name = app
    .entries
    .current_dir()
    .file_name()
    .and_then(|n| n.to_str())
    .unwrap_or("/");

  let border_color = if is_active {
    Color::Indexed(75) // Blue for active panel
  } else {
    Color::Indexed(240)
  };

  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border_color))
    .title(format!(" {dir_name} "))
    .title_style(Style::default().fg(border_color));

  Paragraph::new(lines).block(block).render(area, buf);
}
