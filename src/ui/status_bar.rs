use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::event::InputMode;
use crate::preview::PreviewPane;
use crate::preview::directory::format_size;
use crate::runner::ProcessRunner;

fn hint_spans(hints: &HashMap<Action, Vec<String>>, pairs: &[(Action, &str)]) -> Vec<Span<'static>> {
  let mut spans = Vec::new();
  for (action, label) in pairs {
    let Some(keys) = hints.get(action).and_then(|k| k.first()) else {
      continue;
    };
    spans.push(Span::styled(format!(" {keys}"), Style::default().fg(Color::Indexed(75))));
    spans.push(Span::styled(format!(" {label} "), Style::default().fg(Color::DarkGray)));
  }
  spans
}

pub fn render_status_bar<R: ProcessRunner>(app: &App<PreviewPane, R>, config: &Config, area: Rect, buf: &mut Buffer) {
  let hints = config.reverse_lookup();

  let line = match app.input_mode() {
    InputMode::Confirm => Line::from(Span::styled(" confirm with y, cancel with n", Style::default().fg(Color::Indexed(208)))),
    InputMode::Error => Line::from(Span::styled(" Esc to dismiss", Style::default().fg(Color::Indexed(167)))),
    InputMode::Input => {
      let mut spans = vec![Span::styled(" PATH ", Style::default().fg(Color::Indexed(234)).bg(Color::Indexed(75)))];
      if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(format!(" {msg}"), Style::default().fg(Color::Indexed(150))));
      } else {
        spans.extend(hint_spans(&hints, &[(Action::Commit, "go"), (Action::FocusEntries, "entries"), (Action::Quit, "quit")]));
      }
      Line::from(spans)
    }
    InputMode::Entries => {
      if let Some(ref msg) = app.status_message {
        Line::from(Span::styled(format!(" {msg}"), Style::default().fg(Color::Indexed(150))))
      } else if let Some(entry) = app.entries.selected_entry() {
        let mut spans = vec![Span::styled(
          format!(" {}", entry.display),
          Style::default().fg(Color::Indexed(252)).add_modifier(Modifier::BOLD),
        )];

        if let Some(content) = app.preview.get_content()
          && content.file_size > 0
        {
          spans.push(Span::styled(format!(" | {}", format_size(content.file_size)), Style::default().fg(Color::DarkGray)));
        }

        let pos_info = format!(" {}/{} ", app.entries.selection().0, app.entries.entries().len());
        spans.push(Span::styled(pos_info, Style::default().fg(Color::DarkGray)));
        if app.history.len() > 1 {
          spans.push(Span::styled(
            format!("[{}/{}] ", app.history.cursor() + 1, app.history.len()),
            Style::default().fg(Color::DarkGray),
          ));
        }
        if !app.register.is_empty() {
          spans.push(Span::styled(format!("[{} marked] ", app.register.len()), Style::default().fg(Color::Indexed(114))));
        }

        spans.extend(hint_spans(
          &hints,
          &[
            (Action::FocusInput, "path"),
            (Action::DeleteFile, "remove"),
            (Action::OpenEditor, "edit"),
            (Action::Quit, "quit"),
          ],
        ));
        Line::from(spans)
      } else {
        Line::from(Span::styled(" No selection", Style::default().fg(Color::DarkGray)))
      }
    }
  };

  Paragraph::new(line).style(Style::default().bg(Color::Indexed(236))).render(area, buf);
}
