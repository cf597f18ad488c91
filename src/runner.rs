use std::io;
use std::process::Command;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};

use crate::error::NavError;
use crate::event::PauseHandle;

/// Runs a program that needs the terminal to itself.
pub trait ProcessRunner {
  fn execute_interactive(&mut self, program: &str, args: &[String]) -> Result<(), NavError>;
}

pub fn setup_terminal() -> Result<()> {
  enable_raw_mode()?;
  execute!(io::stdout(), EnterAlternateScreen)?;
  Ok(())
}

pub fn restore_terminal() -> Result<()> {
  disable_raw_mode()?;
  execute!(io::stdout(), LeaveAlternateScreen)?;
  Ok(())
}

/// Terminal handed over to a child process. Dropping it takes the terminal
/// back, however the child finished.
pub struct Suspended<'a> {
  events: &'a PauseHandle,
}

impl<'a> Suspended<'a> {
  pub fn acquire(events: &'a PauseHandle) -> Result<Self> {
    events.pause();
    let guard = Self { events };
    restore_terminal()?;
    Ok(guard)
  }
}

impl Drop for Suspended<'_> {
  fn drop(&mut self) {
    if let Err(e) = setup_terminal() {
      log::error!("failed to take back the terminal: {e}");
    }
    // Drain keystrokes buffered in the TTY while the child ran
    while crossterm::event::poll(std::time::Duration::ZERO).unwrap_or(false) {
      let _ = crossterm::event::read();
    }
    self.events.resume();
  }
}

/// Runs children on the real terminal, pausing the event loop around them.
pub struct TerminalRunner {
  events: PauseHandle,
}

impl TerminalRunner {
  pub fn new(events: PauseHandle) -> Self {
    Self { events }
  }
}

impl ProcessRunner for TerminalRunner {
  fn execute_interactive(&mut self, program: &str, args: &[String]) -> Result<(), NavError> {
    let _suspended =
      Suspended::acquire(&self.events).map_err(|e| NavError::EditorLaunch(format!("cannot release terminal: {e}")))?;

    log::info!("running {program} {}", args.join(" "));
    let status = Command::new(program)
      .args(args)
      .status()
      .map_err(|e| NavError::EditorLaunch(format!("{program}: {e}")))?;

    if !status.success() {
      return Err(NavError::EditorLaunch(format!("{program} exited with {status}")));
    }
    Ok(())
  }
}

/// Splits an editor command such as `code --wait` into program and leading args.
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
  let mut parts = command.split_whitespace().map(str::to_string);
  let program = parts.next()?;
  Some((program, parts.collect()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_split_command() {
    assert_eq!(split_command("vim"), Some(("vim".to_string(), vec![])));
    assert_eq!(
      split_command("  code --wait  -n "),
      Some(("code".to_string(), vec!["--wait".to_string(), "-n".to_string()]))
    );
    assert_eq!(split_command("   "), None);
  }
}
