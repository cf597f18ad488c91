use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::LevelFilter;
use serde::Deserialize;

use crate::action::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
  pub code: KeyCode,
  pub modifiers: KeyModifiers,
}

impl KeyBinding {
  pub fn display_key(&self) -> String {
    let key_name = match self.code {
      KeyCode::Char(' ') => "Space".to_string(),
      KeyCode::Char(c) => c.to_string(),
      KeyCode::Enter => "Enter".to_string(),
      KeyCode::Esc => "Esc".to_string(),
      KeyCode::Backspace => "Backspace".to_string(),
      KeyCode::Delete => "Delete".to_string(),
      KeyCode::Tab => "Tab".to_string(),
      KeyCode::PageUp => "PageUp".to_string(),
      KeyCode::PageDown => "PageDown".to_string(),
      KeyCode::Up => "Up".to_string(),
      KeyCode::Down => "Down".to_string(),
      KeyCode::Left => "Left".to_string(),
      KeyCode::Right => "Right".to_string(),
      KeyCode::F(n) => format!("F{n}"),
      _ => format!("{:?}", self.code),
    };

    if self.modifiers.contains(KeyModifiers::CONTROL) {
      format!("Ctrl+{key_name}")
    } else if self.modifiers.contains(KeyModifiers::ALT) {
      format!("Alt+{key_name}")
    } else {
      key_name
    }
  }
}

pub type KeyMap = HashMap<KeyBinding, Action>;

pub struct Config {
  pub tick_rate_ms: u64,
  /// Overrides `$EDITOR` when set.
  pub editor: Option<String>,
  pub log_level: LevelFilter,
  pub log_file: Option<PathBuf>,
  pub global_keys: KeyMap,
  pub entry_keys: KeyMap,
  pub input_keys: KeyMap,
}

#[derive(Deserialize, Default)]
struct TomlConfig {
  general: Option<GeneralConfig>,
  keys: Option<KeysConfig>,
}

#[derive(Deserialize, Default)]
struct GeneralConfig {
  tick_rate_ms: Option<u64>,
  editor: Option<String>,
  log_level: Option<String>,
  log_file: Option<String>,
}

#[derive(Deserialize, Default)]
struct KeysConfig {
  global: Option<HashMap<String, String>>,
  entries: Option<HashMap<String, String>>,
  input: Option<HashMap<String, String>>,
}

pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
  if s.is_empty() {
    return None;
  }

  let parts: Vec<&str> = s.split('+').collect();

  if parts.len() == 1 {
    let key = parts[0];
    if let Some(code) = named_key(key) {
      return Some(KeyBinding { code, modifiers: KeyModifiers::NONE });
    }
    let mut chars = key.chars();
    return match (chars.next(), chars.next()) {
      (Some(c), None) => Some(KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::NONE }),
      _ => None,
    };
  }

  if parts.len() == 2 {
    let modifier_str = parts[0].to_lowercase();
    let key_str = parts[1];

    let modifiers = match modifier_str.as_str() {
      "ctrl" => KeyModifiers::CONTROL,
      "shift" => {
        let chars: Vec<char> = key_str.chars().collect();
        if chars.len() == 1 {
          let c = chars[0].to_uppercase().next().unwrap_or(chars[0]);
          return Some(KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::NONE });
        }
        if let Some(code) = named_key(key_str) {
          return Some(KeyBinding { code, modifiers: KeyModifiers::SHIFT });
        }
        return None;
      }
      "alt" => KeyModifiers::ALT,
      _ => return None,
    };

    if let Some(code) = named_key(key_str) {
      return Some(KeyBinding { code, modifiers });
    }
    let chars: Vec<char> = key_str.chars().collect();
    if chars.len() == 1 {
      return Some(KeyBinding { code: KeyCode::Char(chars[0]), modifiers });
    }
    return None;
  }

  None
}

fn named_key(s: &str) -> Option<KeyCode> {
  match s.to_lowercase().as_str() {
    "enter" => Some(KeyCode::Enter),
    "space" => Some(KeyCode::Char(' ')),
    "esc" => Some(KeyCode::Esc),
    "up" => Some(KeyCode::Up),
    "down" => Some(KeyCode::Down),
    "left" => Some(KeyCode::Left),
    "right" => Some(KeyCode::Right),
    "backspace" => Some(KeyCode::Backspace),
    "delete" => Some(KeyCode::Delete),
    "tab" => Some(KeyCode::Tab),
    "home" => Some(KeyCode::Home),
    "end" => Some(KeyCode::End),
    "pageup" => Some(KeyCode::PageUp),
    "pagedown" => Some(KeyCode::PageDown),
    s if s.starts_with('f') && s.len() > 1 => {
      s[1..].parse::<u8>().ok().filter(|&n| (1..=24).contains(&n)).map(KeyCode::F)
    }
    _ => None,
  }
}

pub fn normalize_key_event(key: KeyEvent) -> KeyBinding {
  let mut modifiers = key.modifiers;
  if let KeyCode::Char(c) = key.code
    && c.is_uppercase()
  {
    modifiers -= KeyModifiers::SHIFT;
  }
  KeyBinding { code: key.code, modifiers }
}

fn parse_key_map(section: &str, map: &HashMap<String, String>, errors: &mut Vec<String>) -> KeyMap {
  let mut keys = KeyMap::new();
  for (key_str, action_str) in map {
    let Some(kb) = parse_key_binding(key_str) else {
      errors.push(format!("invalid key binding in [keys.{section}]: {key_str:?}"));
      continue;
    };
    let Some(action) = Action::from_name(action_str) else {
      errors.push(format!("invalid action in [keys.{section}]: {action_str:?}"));
      continue;
    };
    keys.insert(kb, action);
  }
  keys
}

impl Default for Config {
  fn default() -> Self {
    let mut config = Config::empty();
    let mut errors = Vec::new();
    config.apply_toml_str(Config::default_toml(), &mut errors);
    config
  }
}

impl Config {
  fn empty() -> Self {
    Config {
      tick_rate_ms: 100,
      editor: None,
      log_level: LevelFilter::Info,
      log_file: None,
      global_keys: KeyMap::new(),
      entry_keys: KeyMap::new(),
      input_keys: KeyMap::new(),
    }
  }

  fn apply_toml_str(&mut self, s: &str, errors: &mut Vec<String>) {
    let toml_config: TomlConfig = match toml::from_str(s) {
      Ok(c) => c,
      Err(e) => {
        errors.push(format!("failed to parse config.toml: {e}"));
        return;
      }
    };

    if let Some(general) = toml_config.general {
      if let Some(tick) = general.tick_rate_ms {
        self.tick_rate_ms = tick;
      }
      if let Some(editor) = general.editor.filter(|e| !e.trim().is_empty()) {
        self.editor = Some(editor);
      }
      if let Some(level) = general.log_level {
        match LevelFilter::from_str(&level) {
          Ok(l) => self.log_level = l,
          Err(_) => errors.push(format!("invalid log_level: {level:?}")),
        }
      }
      if let Some(file) = general.log_file {
        self.log_file = Some(PathBuf::from(file));
      }
    }

    // A section given by the user replaces that section's defaults entirely
    if let Some(keys) = toml_config.keys {
      if let Some(global) = keys.global {
        self.global_keys = parse_key_map("global", &global, errors);
      }
      if let Some(entries) = keys.entries {
        self.entry_keys = parse_key_map("entries", &entries, errors);
      }
      if let Some(input) = keys.input {
        self.input_keys = parse_key_map("input", &input, errors);
      }
    }
  }

  pub fn default_toml() -> &'static str {
    r#"[general]
tick_rate_ms = 100    # event loop tick rate in ms
log_level = "info"    # off, error, warn, info, debug, trace
# editor = "nvim"     # defaults to $EDITOR
# log_file = "/tmp/ff.log"

# Tried first while the entry list has focus
[keys.global]
tab = "focus_input"
"ctrl+h" = "history_back"
backspace = "history_back"   # most terminals send ctrl+h as backspace
"ctrl+l" = "history_forward"
h = "parent_dir"
left = "parent_dir"
l = "child_dir"
right = "child_dir"

[keys.entries]
q = "quit"
esc = "quit"
j = "move_down"
down = "move_down"
k = "move_up"
up = "move_up"
g = "go_to_top"
"shift+g" = "go_to_bottom"
d = "delete_file"
y = "copy_file"
p = "paste"
e = "open_editor"

[keys.input]
tab = "focus_entries"
enter = "commit"
esc = "quit"
"#
  }

  /// Keys bound to each action across all sections, sorted for display.
  pub fn reverse_lookup(&self) -> HashMap<Action, Vec<String>> {
    let mut map: HashMap<Action, Vec<String>> = HashMap::new();
    for keys in [&self.global_keys, &self.entry_keys, &self.input_keys] {
      for (kb, action) in keys {
        map.entry(action.clone()).or_default().push(kb.display_key());
      }
    }
    for keys in map.values_mut() {
      keys.sort();
      keys.dedup();
    }
    map
  }

  /// The editor command: the config value, else a non-empty `$EDITOR`.
  pub fn resolve_editor(&self) -> Option<String> {
    self
      .editor
      .clone()
      .or_else(|| std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()))
  }

  pub fn config_path() -> Result<PathBuf, String> {
    dirs::config_dir()
      .map(|d| d.join("ff").join("config.toml"))
      .ok_or_else(|| "could not determine config directory".to_string())
  }

  pub fn log_path(&self) -> Option<PathBuf> {
    self
      .log_file
      .clone()
      .or_else(|| dirs::cache_dir().map(|d| d.join("ff").join("ff.log")))
  }

  pub fn dump_default_config(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    std::fs::write(path, Self::default_toml())
      .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    Ok(())
  }

  pub fn load() -> (Config, Vec<String>) {
    let mut errors = Vec::new();

    let content = Self::config_path()
      .ok()
      .and_then(|p| std::fs::read_to_string(p).ok());

    let config = match content {
      Some(s) => Self::load_from_str_with_errors(&s, &mut errors),
      None => Config::default(),
    };

    (config, errors)
  }

  #[cfg(test)]
  pub fn load_from_str(s: &str) -> Config {
    let mut errors = Vec::new();
    Self::load_from_str_with_errors(s, &mut errors)
  }

  fn load_from_str_with_errors(s: &str, errors: &mut Vec<String>) -> Config {
    let mut config = Config::default();
    config.apply_toml_str(s, errors);
    config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

  fn kb(code: KeyCode) -> KeyBinding {
    KeyBinding { code, modifiers: KeyModifiers::NONE }
  }

  // --- parse_key_binding tests ---

  #[test]
  fn test_parse_single_char() {
    let kb = parse_key_binding("h").unwrap();
    assert_eq!(kb.code, KeyCode::Char('h'));
    assert_eq!(kb.modifiers, KeyModifiers::NONE);
  }

  #[test]
  fn test_parse_shift_modifier() {
    let kb = parse_key_binding("shift+g").unwrap();
    assert_eq!(kb.code, KeyCode::Char('G'));
    assert_eq!(kb.modifiers, KeyModifiers::NONE);
    assert_eq!(kb, parse_key_binding("G").unwrap());
  }

  #[test]
  fn test_parse_ctrl_modifier() {
    let kb = parse_key_binding("ctrl+h").unwrap();
    assert_eq!(kb.code, KeyCode::Char('h'));
    assert_eq!(kb.modifiers, KeyModifiers::CONTROL);
  }

  #[test]
  fn test_parse_named_keys() {
    assert_eq!(parse_key_binding("enter").unwrap().code, KeyCode::Enter);
    assert_eq!(parse_key_binding("esc").unwrap().code, KeyCode::Esc);
    assert_eq!(parse_key_binding("tab").unwrap().code, KeyCode::Tab);
    assert_eq!(parse_key_binding("backspace").unwrap().code, KeyCode::Backspace);
    assert_eq!(parse_key_binding("home").unwrap().code, KeyCode::Home);
    assert_eq!(parse_key_binding("f2").unwrap().code, KeyCode::F(2));
  }

  #[test]
  fn test_parse_multibyte_char() {
    let kb = parse_key_binding("ø").unwrap();
    assert_eq!(kb.code, KeyCode::Char('ø'));
  }

  #[test]
  fn test_parse_invalid() {
    assert!(parse_key_binding("").is_none());
    assert!(parse_key_binding("foobar").is_none());
    assert!(parse_key_binding("meta+x").is_none());
    assert!(parse_key_binding("ctrl+x+y").is_none());
  }

  // --- normalize_key_event tests ---

  fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
      code,
      modifiers,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    }
  }

  #[test]
  fn test_normalize_uppercase_strips_shift() {
    let kb = normalize_key_event(key_event(KeyCode::Char('G'), KeyModifiers::SHIFT));
    assert_eq!(kb.code, KeyCode::Char('G'));
    assert_eq!(kb.modifiers, KeyModifiers::NONE);
  }

  #[test]
  fn test_normalize_ctrl_preserves_modifier() {
    let kb = normalize_key_event(key_event(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert_eq!(kb.modifiers, KeyModifiers::CONTROL);
  }

  // --- defaults ---

  #[test]
  fn test_default_general_values() {
    let config = Config::default();
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.editor, None);
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(config.log_file, None);
  }

  #[test]
  fn test_default_global_bindings() {
    let config = Config::default();
    let ctrl = |c| KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::CONTROL };
    let expected = vec![
      (kb(KeyCode::Tab), Action::FocusInput),
      (ctrl('h'), Action::HistoryBack),
      (kb(KeyCode::Backspace), Action::HistoryBack),
      (ctrl('l'), Action::HistoryForward),
      (kb(KeyCode::Char('h')), Action::ParentDir),
      (kb(KeyCode::Char('l')), Action::ChildDir),
    ];
    for (binding, action) in expected {
      assert_eq!(config.global_keys.get(&binding), Some(&action), "missing {binding:?}");
    }
  }

  #[test]
  fn test_default_entry_bindings() {
    let config = Config::default();
    let expected = vec![
      (kb(KeyCode::Char('q')), Action::Quit),
      (kb(KeyCode::Esc), Action::Quit),
      (kb(KeyCode::Char('d')), Action::DeleteFile),
      (kb(KeyCode::Char('y')), Action::CopyFile),
      (kb(KeyCode::Char('p')), Action::Paste),
      (kb(KeyCode::Char('e')), Action::OpenEditor),
      (kb(KeyCode::Char('j')), Action::MoveDown),
      (kb(KeyCode::Char('G')), Action::GoToBottom),
    ];
    for (binding, action) in expected {
      assert_eq!(config.entry_keys.get(&binding), Some(&action), "missing {binding:?}");
    }
  }

  #[test]
  fn test_default_input_bindings() {
    let config = Config::default();
    assert_eq!(config.input_keys.get(&kb(KeyCode::Tab)), Some(&Action::FocusEntries));
    assert_eq!(config.input_keys.get(&kb(KeyCode::Enter)), Some(&Action::Commit));
    assert_eq!(config.input_keys.get(&kb(KeyCode::Esc)), Some(&Action::Quit));
    assert_eq!(config.input_keys.len(), 3);
  }

  #[test]
  fn test_default_toml_is_valid_toml() {
    let result: Result<TomlConfig, _> = toml::from_str(Config::default_toml());
    assert!(result.is_ok(), "default_toml() is not valid TOML: {:?}", result.err());
  }

  #[test]
  fn test_default_derives_from_toml() {
    let empty = Config::empty();
    let default = Config::default();
    assert!(empty.global_keys.is_empty());
    assert!(!default.global_keys.is_empty());
    assert!(!default.entry_keys.is_empty());
  }

  // --- load_from_str ---

  #[test]
  fn test_load_general_overrides() {
    let toml = r#"
[general]
tick_rate_ms = 250
editor = "nvim -p"
log_level = "debug"
log_file = "/tmp/custom.log"
"#;
    let config = Config::load_from_str(toml);
    assert_eq!(config.tick_rate_ms, 250);
    assert_eq!(config.editor.as_deref(), Some("nvim -p"));
    assert_eq!(config.log_level, LevelFilter::Debug);
    assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/custom.log")));
  }

  #[test]
  fn test_blank_editor_is_ignored() {
    let config = Config::load_from_str("[general]\neditor = \"  \"\n");
    assert_eq!(config.editor, None);
  }

  #[test]
  fn test_configured_editor_wins() {
    let config = Config::load_from_str("[general]\neditor = \"hx\"\n");
    assert_eq!(config.resolve_editor().as_deref(), Some("hx"));
  }

  #[test]
  fn test_invalid_log_level_reported() {
    let mut errors = Vec::new();
    let config = Config::load_from_str_with_errors("[general]\nlog_level = \"loud\"\n", &mut errors);
    assert_eq!(config.log_level, LevelFilter::Info);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("loud"));
  }

  #[test]
  fn test_section_replaces_only_that_section() {
    let toml = r#"
[keys.entries]
x = "delete_file"
"#;
    let config = Config::load_from_str(toml);
    assert_eq!(config.entry_keys.len(), 1);
    assert_eq!(config.entry_keys.get(&kb(KeyCode::Char('x'))), Some(&Action::DeleteFile));
    assert_eq!(config.entry_keys.get(&kb(KeyCode::Char('d'))), None);
    assert_eq!(config.global_keys.len(), Config::default().global_keys.len());
    assert_eq!(config.input_keys.len(), 3);
  }

  #[test]
  fn test_invalid_entries_skipped_with_errors() {
    let toml = r#"
[keys.global]
"" = "parent_dir"
h = "bogus"
l = "child_dir"
"#;
    let mut errors = Vec::new();
    let config = Config::load_from_str_with_errors(toml, &mut errors);
    assert_eq!(config.global_keys.len(), 1);
    assert_eq!(config.global_keys.get(&kb(KeyCode::Char('l'))), Some(&Action::ChildDir));
    assert_eq!(errors.len(), 2);
  }

  #[test]
  fn test_unbind_with_none() {
    let config = Config::load_from_str("[keys.entries]\nq = \"none\"\n");
    assert_eq!(config.entry_keys.get(&kb(KeyCode::Char('q'))), Some(&Action::None));
  }

  #[test]
  fn test_load_malformed_toml_returns_default() {
    let mut errors = Vec::new();
    let config = Config::load_from_str_with_errors("this is not [valid toml", &mut errors);
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.global_keys.len(), Config::default().global_keys.len());
    assert_eq!(errors.len(), 1);
  }

  #[test]
  fn test_dump_default_config_roundtrip() {
    let dir = std::env::temp_dir().join(format!("ff_config_dump_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("config.toml");
    Config::dump_default_config(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, Config::default_toml());
    let _ = std::fs::remove_dir_all(&dir);
  }

  // --- display_key / reverse_lookup ---

  #[test]
  fn test_display_key() {
    assert_eq!(kb(KeyCode::Char('j')).display_key(), "j");
    assert_eq!(kb(KeyCode::Tab).display_key(), "Tab");
    let ctrl = KeyBinding { code: KeyCode::Char('h'), modifiers: KeyModifiers::CONTROL };
    assert_eq!(ctrl.display_key(), "Ctrl+h");
  }

  #[test]
  fn test_reverse_lookup_dedups_across_sections() {
    let config = Config::default();
    let lookup = config.reverse_lookup();
    let quit_keys = lookup.get(&Action::Quit).expect("Quit should have keys");
    assert_eq!(quit_keys, &vec!["Esc".to_string(), "q".to_string()]);
    let back = lookup.get(&Action::HistoryBack).unwrap();
    assert!(back.contains(&"Ctrl+h".to_string()));
  }
}
