use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

fn popup_area(area: Rect, text_len: usize, extra_lines: u16) -> Option<Rect> {
  let width = 60.min(area.width.saturating_sub(4));
  let inner_width = width.saturating_sub(2) as usize;
  // +2 for borders
  let line_count = (text_len / inner_width.max(1)) as u16 + 1;
  let height = (line_count + extra_lines + 2).min(area.height.saturating_sub(2));

  if width < 10 || height < 3 {
    return None;
  }

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;
  Some(Rect::new(x, y, width, height))
}

fn render_popup(lines: Vec<Line>, title: String, border: Color, popup: Rect, buf: &mut Buffer) {
  Clear.render(popup, buf);

  let block = Block::default()
    .borders(Borders::ALL)
    .title(title)
    .border_style(Style::default().fg(border))
    .style(Style::default().bg(Color::Indexed(235)));

  Paragraph::new(lines).block(block).wrap(Wrap { trim: false }).render(popup, buf);
}

pub fn render_confirm(message: &str, label: &str, area: Rect, buf: &mut Buffer) {
  let Some(popup) = popup_area(area, message.len() + 1, 2) else {
    return;
  };

  let lines = vec![
    Line::from(Span::styled(format!(" {message}"), Style::default().fg(Color::Indexed(252)))),
    Line::from(""),
    Line::from(Span::styled(" [y] yes  [n] no", Style::default().fg(Color::Indexed(241)))),
  ];
  render_popup(lines, format!(" {label} "), Color::Indexed(208), popup, buf);
}

pub fn render_error(message: &str, area: Rect, buf: &mut Buffer) {
  let Some(popup) = popup_area(area, message.len() + 1, 2) else {
    return;
  };

  let lines = vec![
    Line::from(Span::styled(format!(" {message}"), Style::default().fg(Color::Indexed(252)))),
    Line::from(""),
    Line::from(Span::styled(" [Esc] dismiss", Style::default().fg(Color::Indexed(241)))),
  ];
  render_popup(lines, " Error ".to_string(), Color::Indexed(167), popup, buf);
}
