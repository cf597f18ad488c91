use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};

use crate::action::Action;
use crate::entries::EntryManager;
use crate::error::NavError;
use crate::event::{Focus, InputMode};
use crate::fs::{ops, path};
use crate::history::{HistoryManager, HistoryRecord};
use crate::input::InputPath;
use crate::preview::Preview;
use crate::register::Register;
use crate::runner::{ProcessRunner, split_command};

const STATUS_TICKS: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
  RemoveSelected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
  Confirm {
    message: String,
    label: String,
    return_focus: Focus,
    action: ConfirmAction,
  },
  Error(String),
}

pub struct App<P: Preview, R: ProcessRunner> {
  pub input: InputPath,
  pub entries: EntryManager,
  pub history: HistoryManager,
  pub register: Register,
  pub focus: Focus,
  pub modal: Option<Modal>,
  pub preview: P,
  runner: R,
  editor: Option<String>,
  pub should_quit: bool,
  /// Set after a child process owned the terminal; the screen must be repainted from scratch.
  pub needs_redraw: bool,
  pub status_message: Option<String>,
  pub status_ticks: u16,
  pub viewport_height: usize,
}

impl<P: Preview, R: ProcessRunner> App<P, R> {
  pub fn new(start: PathBuf, preview: P, runner: R, editor: Option<String>) -> Result<Self, NavError> {
    let mut entries = EntryManager::new();
    entries.set_entries(&start)?;
    entries.select(1, 0);

    let mut history = HistoryManager::new();
    history.save(1, &start);

    let mut app = Self {
      input: InputPath::new(&start.to_string_lossy()),
      entries,
      history,
      register: Register::new(),
      focus: Focus::Entries,
      modal: None,
      preview,
      runner,
      editor,
      should_quit: false,
      needs_redraw: false,
      status_message: None,
      status_ticks: 0,
      viewport_height: 20,
    };
    app.refresh_preview();
    info!("started in {}", start.display());
    Ok(app)
  }

  pub fn input_mode(&self) -> InputMode {
    match (&self.modal, self.focus) {
      (Some(Modal::Confirm { .. }), _) => InputMode::Confirm,
      (Some(Modal::Error(_)), _) => InputMode::Error,
      (None, Focus::Entries) => InputMode::Entries,
      (None, Focus::Input) => InputMode::Input,
    }
  }

  pub fn update(&mut self, action: Action) {
    match action {
      Action::None => return,
      // the next draw measures the viewport
      Action::Resize(..) => return,
      Action::Tick => {
        if self.status_ticks > 0 {
          self.status_ticks -= 1;
        } else {
          self.status_message = None;
        }
        return;
      }
      _ => {}
    }

    if self.modal.is_some() {
      self.handle_modal(action);
      return;
    }

    match self.focus {
      Focus::Entries if action.is_global() => self.handle_global(action),
      Focus::Entries => self.handle_entries(action),
      Focus::Input => self.handle_input(action),
    }
  }

  fn handle_global(&mut self, action: Action) {
    match action {
      Action::FocusInput => self.focus = Focus::Input,
      Action::HistoryBack => self.history_back(),
      Action::HistoryForward => self.history_forward(),
      Action::ParentDir => self.go_parent(),
      Action::ChildDir => self.descend(),
      _ => {}
    }
  }

  fn handle_entries(&mut self, action: Action) {
    match action {
      Action::Quit => self.should_quit = true,
      Action::MoveDown => {
        if self.entries.move_selection(1) {
          self.selection_changed();
        }
      }
      Action::MoveUp => {
        if self.entries.move_selection(-1) {
          self.selection_changed();
        }
      }
      Action::GoToTop => {
        if self.entries.select_first() {
          self.selection_changed();
        }
      }
      Action::GoToBottom => {
        if self.entries.select_last() {
          self.selection_changed();
        }
      }
      Action::DeleteFile => {
        if let Some(entry) = self.entries.selected_entry() {
          self.modal = Some(Modal::Confirm {
            message: format!("Remove {}?", entry.display),
            label: "remove".to_string(),
            return_focus: self.focus,
            action: ConfirmAction::RemoveSelected,
          });
        }
      }
      Action::CopyFile => {
        if let Some(entry) = self.entries.selected_entry().cloned() {
          let name = entry.display.clone();
          self.register.add_copy_source(entry);
          self.set_status(format!("Marked {name} for copy ({} in register)", self.register.len()));
        }
      }
      Action::Paste => {
        self.register.paste();
        self.set_status("Paste is not implemented".to_string());
      }
      Action::OpenEditor => self.edit_selected(),
      _ => {}
    }
  }

  fn handle_input(&mut self, action: Action) {
    match action {
      Action::FocusEntries => self.focus = Focus::Entries,
      Action::Commit => self.commit_path(),
      Action::Quit => self.should_quit = true,
      Action::InputChar(c) => self.input.insert(c),
      Action::InputBackspace => self.input.backspace(),
      Action::InputDelete => self.input.delete(),
      Action::InputLeft => self.input.left(),
      Action::InputRight => self.input.right(),
      Action::InputHome => self.input.home(),
      Action::InputEnd => self.input.end(),
      _ => {}
    }
  }

  fn handle_modal(&mut self, action: Action) {
    match (self.modal.take(), action) {
      (Some(Modal::Confirm { return_focus, action: confirm, .. }), Action::ConfirmYes) => {
        self.focus = return_focus;
        match confirm {
          ConfirmAction::RemoveSelected => self.remove_selected(),
        }
      }
      (Some(Modal::Confirm { return_focus, .. }), Action::ConfirmNo) => {
        self.focus = return_focus;
        self.set_status("Remove cancelled".to_string());
      }
      (Some(Modal::Error(_)), Action::ErrorClose) => {}
      // anything else leaves the modal open
      (modal, _) => self.modal = modal,
    }
  }

  fn history_back(&mut self) {
    if let Some(current) = self.history.current() {
      debug!("history back from {}", current.path.display());
    }
    self.history.stamp_row(self.entries.current_dir(), self.entries.selection().0);
    let Some(record) = self.history.previous().cloned() else {
      debug!("no earlier history");
      return;
    };
    if !self.show_record(&record) {
      self.history.next();
    }
  }

  fn history_forward(&mut self) {
    self.history.stamp_row(self.entries.current_dir(), self.entries.selection().0);
    let Some(record) = self.history.next().cloned() else {
      debug!("no later history");
      return;
    };
    if !self.show_record(&record) {
      self.history.previous();
    }
  }

  fn show_record(&mut self, record: &HistoryRecord) -> bool {
    if let Err(e) = self.entries.set_entries(&record.path) {
      warn!("history: {e}");
      self.set_status(e.to_string());
      return false;
    }
    self.input.set_text(&record.path.to_string_lossy());
    self.entries.select(record.row_idx, 0);
    self.entries.set_offset(0, 0);
    self.refresh_preview();
    true
  }

  fn go_parent(&mut self) {
    let parent = path::parent_dir(self.entries.current_dir());
    if let Err(e) = self.entries.set_entries(&parent) {
      warn!("parent: {e}");
      self.set_status(e.to_string());
      return;
    }
    self.input.set_text(&parent.to_string_lossy());
    self.entries.select(1, 0);
    self.entries.set_offset(0, 0);
    self.refresh_preview();
  }

  fn descend(&mut self) {
    let Some(entry) = self.entries.selected_entry() else {
      return;
    };
    if !entry.is_dir {
      return;
    }
    let child = entry.path.clone();
    let (row, _) = self.entries.selection();

    let listing = match self.entries.load(&child) {
      Ok(listing) => listing,
      Err(e) => {
        warn!("descend: {e}");
        self.set_status(e.to_string());
        return;
      }
    };
    if listing.is_empty() {
      debug!("{} is empty, staying put", child.display());
      return;
    }

    self.history.stamp_row(self.entries.current_dir(), row);
    self.history.save(1, &child);
    self.input.set_text(&child.to_string_lossy());
    self.entries.replace(&child, listing);
    self.entries.select(1, 0);
    self.entries.set_offset(0, 0);
    self.refresh_preview();
  }

  fn commit_path(&mut self) {
    let expanded = path::expand(self.input.text());
    let raw = Path::new(&expanded);
    let target = if raw.is_absolute() {
      path::clean(raw)
    } else {
      path::clean(&self.entries.current_dir().join(raw))
    };
    self.input.set_text(&target.to_string_lossy());

    let (row, _) = self.entries.selection();
    let prior_dir = self.entries.current_dir().to_path_buf();
    if let Err(e) = self.entries.set_entries(&target) {
      warn!("commit: {e}");
      self.set_status(e.to_string());
      return;
    }
    self.history.stamp_row(&prior_dir, row);
    self.history.save(1, &target);
    self.entries.select(1, 0);
    self.entries.set_offset(0, 0);
    self.refresh_preview();
  }

  fn remove_selected(&mut self) {
    let removed = self
      .entries
      .selected_entry()
      .filter(|e| !e.is_dir)
      .map(|e| e.display.clone());

    match ops::remove_entry(self.entries.selected_entry()) {
      Ok(()) => {
        if let Some(name) = removed {
          self.set_status(format!("Removed {name}"));
          self.reload_current();
        }
      }
      Err(e) => {
        error!("{e}");
        self.modal = Some(Modal::Error(e.to_string()));
      }
    }
  }

  fn edit_selected(&mut self) {
    let Some((program, mut args)) = self.editor.as_deref().and_then(split_command) else {
      warn!("$EDITOR is empty, please set $EDITOR");
      self.set_status("$EDITOR is not set".to_string());
      return;
    };
    let Some(entry) = self.entries.selected_entry() else {
      warn!("cannot get entry");
      return;
    };
    args.push(entry.path.to_string_lossy().to_string());

    if let Err(e) = self.runner.execute_interactive(&program, &args) {
      error!("{e}");
      self.set_status(e.to_string());
    }
    self.needs_redraw = true;
    self.reload_current();
  }

  /// Re-lists the current directory keeping the selected row where possible.
  fn reload_current(&mut self) {
    let dir = self.entries.current_dir().to_path_buf();
    let (row, col) = self.entries.selection();
    if let Err(e) = self.entries.set_entries(&dir) {
      warn!("reload: {e}");
      return;
    }
    self.entries.select(row.max(1), col);
    self.refresh_preview();
  }

  fn selection_changed(&mut self) {
    if self.entries.selection().0 > 0 {
      self.refresh_preview();
    }
  }

  fn refresh_preview(&mut self) {
    self.preview.update_view(self.entries.selected_entry());
  }

  pub fn show_error(&mut self, errors: Vec<String>) {
    if errors.is_empty() {
      return;
    }
    for e in &errors {
      warn!("{e}");
    }
    self.modal = Some(Modal::Error(errors.join("; ")));
  }

  pub fn set_status(&mut self, message: String) {
    self.status_message = Some(message);
    self.status_ticks = STATUS_TICKS;
  }
}
