mod action;
mod app;
mod config;
mod entries;
mod error;
mod event;
mod fs;
mod history;
mod input;
mod preview;
mod register;
mod runner;
mod ui;

use std::fs::File;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::event::{Event, EventLoop, map_key};
use crate::preview::PreviewPane;
use crate::runner::{TerminalRunner, restore_terminal, setup_terminal};

fn main() -> Result<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();

  let mut show_help = false;
  let mut show_version = false;
  let mut show_init = false;
  let mut path_arg: Option<String> = None;

  for arg in &args {
    match arg.as_str() {
      "--help" | "-h" => show_help = true,
      "--version" | "-V" => show_version = true,
      "--init" => show_init = true,
      a if !a.starts_with('-') => path_arg = Some(a.to_string()),
      _ => {
        eprintln!("ff: unknown option '{arg}'");
        std::process::exit(1);
      }
    }
  }

  if show_help {
    println!(concat!(
      "ff - terminal file browser\n",
      "\n",
      "Usage: ff [options] [path]\n",
      "\n",
      "Options:\n",
      "  --init                   Write the default config to ~/.config/ff/\n",
      "  -h, --help               Print this help message\n",
      "  -V, --version            Print version\n",
      "\n",
      "If no path is given, opens the current directory.",
    ));
    return Ok(());
  }

  if show_version {
    println!("ff {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }

  if show_init {
    let config_path = match Config::config_path() {
      Ok(p) => p,
      Err(e) => {
        eprintln!("ff: {e}");
        std::process::exit(1);
      }
    };

    if config_path.exists() {
      eprint!("{} already exists. Overwrite? [y/N] ", config_path.display());
      let mut answer = String::new();
      io::stdin().read_line(&mut answer).unwrap_or(0);
      if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
      }
    }

    match Config::dump_default_config(&config_path) {
      Ok(()) => println!("{}", config_path.display()),
      Err(e) => {
        eprintln!("ff: {e}");
        std::process::exit(1);
      }
    }
    return Ok(());
  }

  let (config, config_errors) = Config::load();
  init_logging(&config);

  let root = path_arg
    .map(|p| PathBuf::from(fs::path::expand(&p)))
    .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
  let root = std::fs::canonicalize(root)?;

  // Install panic hook that restores terminal
  let original_hook = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let _ = restore_terminal();
    original_hook(info);
  }));

  setup_terminal()?;
  let backend = CrosstermBackend::new(io::stdout());
  let mut terminal = Terminal::new(backend)?;

  let events = EventLoop::new(Duration::from_millis(config.tick_rate_ms));
  let runner = TerminalRunner::new(events.pause_handle());

  let mut app = match App::new(root, PreviewPane::new(), runner, config.resolve_editor()) {
    Ok(app) => app,
    Err(e) => {
      restore_terminal()?;
      log::error!("{e}");
      eprintln!("ff: {e}");
      std::process::exit(1);
    }
  };
  app.show_error(config_errors);

  loop {
    terminal.draw(|frame| ui::draw(frame, &mut app, &config))?;

    match events.next()? {
      Event::Key(key) => {
        let action = map_key(key, app.input_mode(), &config);
        app.update(action);
      }
      Event::Resize(w, h) => app.update(Action::Resize(w, h)),
      Event::Tick => app.update(Action::Tick),
    }

    // A child process drew over the screen
    if app.needs_redraw {
      terminal.clear()?;
      app.needs_redraw = false;
    }

    if app.should_quit {
      break;
    }
  }

  restore_terminal()?;
  log::info!("exiting");
  Ok(())
}

fn init_logging(config: &Config) {
  let Some(path) = config.log_path() else {
    return;
  };

  let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
  match open_log(&path) {
    Ok(log_file) => {
      if let Err(e) = WriteLogger::init(config.log_level, log_config, log_file) {
        eprintln!("ff: cannot start logging: {e}");
      }
    }
    Err(e) => eprintln!("ff: cannot open log file {}: {e}", path.display()),
  }
}

fn open_log(path: &Path) -> io::Result<File> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)?;
  }
  File::create(path)
}
