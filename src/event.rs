use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, normalize_key_event};

pub enum Event {
  Key(KeyEvent),
  Resize(u16, u16),
  Tick,
}

/// Stops the polling thread from touching the terminal while a child
/// process owns it.
#[derive(Debug, Clone, Default)]
pub struct PauseHandle {
  paused: Arc<AtomicBool>,
}

impl PauseHandle {
  pub fn pause(&self) {
    self.paused.store(true, Ordering::SeqCst);
  }

  pub fn resume(&self) {
    self.paused.store(false, Ordering::SeqCst);
  }

  pub fn is_paused(&self) -> bool {
    self.paused.load(Ordering::SeqCst)
  }
}

pub struct EventLoop {
  rx: mpsc::Receiver<Event>,
  pause: PauseHandle,
}

impl EventLoop {
  pub fn new(tick_rate: Duration) -> Self {
    let (tx, rx) = mpsc::channel();
    let pause = PauseHandle::default();
    let thread_pause = pause.clone();

    thread::spawn(move || loop {
      if thread_pause.is_paused() {
        thread::sleep(tick_rate);
        continue;
      }
      if event::poll(tick_rate).unwrap_or(false) {
        // paused while polling: leave the input to whoever owns the terminal now
        if thread_pause.is_paused() {
          continue;
        }
        match event::read() {
          Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
            if tx.send(Event::Key(key)).is_err() {
              break;
            }
          }
          Ok(CrosstermEvent::Resize(w, h)) => {
            if tx.send(Event::Resize(w, h)).is_err() {
              break;
            }
          }
          _ => {}
        }
      } else if tx.send(Event::Tick).is_err() {
        break;
      }
    });

    Self { rx, pause }
  }

  pub fn pause_handle(&self) -> PauseHandle {
    self.pause.clone()
  }

  pub fn next(&self) -> Result<Event> {
    Ok(self.rx.recv()?)
  }
}

/// Which panel receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Input,
  Entries,
}

/// How the next key is decoded: the focused panel, or an open modal that
/// captures every key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  Entries,
  Input,
  Confirm,
  Error,
}

pub fn map_key(key: KeyEvent, mode: InputMode, config: &Config) -> Action {
  match mode {
    InputMode::Confirm => match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::ConfirmYes,
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::ConfirmNo,
      _ => Action::None,
    },
    InputMode::Error => match key.code {
      KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Action::ErrorClose,
      _ => Action::None,
    },
    InputMode::Entries => {
      let kb = normalize_key_event(key);
      config
        .global_keys
        .get(&kb)
        .or_else(|| config.entry_keys.get(&kb))
        .cloned()
        .unwrap_or(Action::None)
    }
    InputMode::Input => {
      let kb = normalize_key_event(key);
      if let Some(action) = config.input_keys.get(&kb) {
        return action.clone();
      }
      match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
          Action::InputChar(c)
        }
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Delete => Action::InputDelete,
        KeyCode::Left => Action::InputLeft,
        KeyCode::Right => Action::InputRight,
        KeyCode::Home => Action::InputHome,
        KeyCode::End => Action::InputEnd,
        _ => Action::None,
      }
    }
  }
}
