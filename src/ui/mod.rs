pub mod entry_list;
pub mod modal;
pub mod path_input;
pub mod preview;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::{App, Modal};
use crate::config::Config;
use crate::event::Focus;
use crate::preview::PreviewPane;
use crate::runner::ProcessRunner;

pub fn draw<R: ProcessRunner>(frame: &mut Frame, app: &mut App<PreviewPane, R>, config: &Config) {
  let area = frame.area();

  // Vertical layout: path input, main, status bar
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(3), // path input
      Constraint::Min(3),    // main area
      Constraint::Length(1), // status bar
    ])
    .split(area);

  let main_chunks = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
    .split(chunks[1]);

  // Borders and the header row are not data rows
  app.viewport_height = main_chunks[0].height.saturating_sub(3) as usize;
  app.entries.scroll_into_view(app.viewport_height);

  let input_active = app.focus == Focus::Input && app.modal.is_none();
  path_input::render_path_input(&app.input, input_active, chunks[0], frame.buffer_mut());
  entry_list::render_entry_list(app, main_chunks[0], frame.buffer_mut());
  preview::render_preview(&app.preview, main_chunks[1], frame.buffer_mut());
  status_bar::render_status_bar(app, config, chunks[2], frame.buffer_mut());

  match &app.modal {
    Some(Modal::Confirm { message, label, .. }) => modal::render_confirm(message, label, area, frame.buffer_mut()),
    Some(Modal::Error(message)) => modal::render_error(message, area, frame.buffer_mut()),
    None => {}
  }

  if input_active {
    frame.set_cursor_position(path_input::cursor_position(&app.input, chunks[0]));
  }
}
