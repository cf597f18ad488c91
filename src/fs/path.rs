use std::path::{Component, Path, PathBuf};

/// Expands `$VAR` and `${VAR}` from the process environment and a leading `~`
/// to the home directory. Unset variables expand to nothing.
pub fn expand(input: &str) -> String {
  let expanded = expand_vars(input, |name| std::env::var(name).ok());
  expand_tilde(&expanded, dirs::home_dir())
}

fn is_name_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_'
}

pub fn expand_vars(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
  let mut out = String::with_capacity(input.len());
  let mut chars = input.char_indices().peekable();

  while let Some((i, c)) = chars.next() {
    if c != '$' {
      out.push(c);
      continue;
    }

    let rest = &input[i + 1..];
    if let Some(braced) = rest.strip_prefix('{') {
      if let Some(end) = braced.find('}') {
        let name = &braced[..end];
        out.push_str(&lookup(name).unwrap_or_default());
        // skip '{', the name and '}'
        for _ in 0..name.chars().count() + 2 {
          chars.next();
        }
        continue;
      }
      out.push(c);
      continue;
    }

    let name_len: usize = rest.chars().take_while(|&ch| is_name_char(ch)).map(char::len_utf8).sum();
    if name_len == 0 {
      out.push(c);
      continue;
    }
    out.push_str(&lookup(&rest[..name_len]).unwrap_or_default());
    for _ in 0..name_len {
      chars.next();
    }
  }

  out
}

fn expand_tilde(input: &str, home: Option<PathBuf>) -> String {
  let Some(home) = home else {
    return input.to_string();
  };
  if input == "~" {
    return home.to_string_lossy().to_string();
  }
  match input.strip_prefix("~/") {
    Some(rest) => home.join(rest).to_string_lossy().to_string(),
    None => input.to_string(),
  }
}

/// Lexically normalizes `path`: drops `.`, folds `..` into its parent and
/// collapses repeated separators. Never touches the filesystem.
pub fn clean(path: &Path) -> PathBuf {
  let mut out = PathBuf::new();
  let mut depth = 0usize;

  for component in path.components() {
    match component {
      Component::Prefix(p) => out.push(p.as_os_str()),
      Component::RootDir => out.push(Component::RootDir.as_os_str()),
      Component::CurDir => {}
      Component::ParentDir => {
        if depth > 0 {
          out.pop();
          depth -= 1;
        } else if !out.has_root() {
          out.push("..");
        }
      }
      Component::Normal(name) => {
        out.push(name);
        depth += 1;
      }
    }
  }

  if out.as_os_str().is_empty() {
    out.push(".");
  }
  out
}

/// Parent of `path`; the root is its own parent and a bare name resolves to `.`.
pub fn parent_dir(path: &Path) -> PathBuf {
  match path.parent() {
    Some(p) if p.as_os_str().is_empty() => PathBuf::from("."),
    Some(p) => p.to_path_buf(),
    None => path.to_path_buf(),
  }
}
