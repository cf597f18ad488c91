use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const SNIFF_BYTES: u64 = 8192;

/// A NUL byte in the first chunk marks the file as binary.
pub fn looks_binary(path: &Path) -> io::Result<bool> {
  let mut buf = Vec::with_capacity(SNIFF_BYTES as usize);
  File::open(path)?.take(SNIFF_BYTES).read_to_end(&mut buf)?;
  Ok(buf.contains(&0))
}

/// First `max_lines` lines of `path`, invalid UTF-8 replaced.
pub fn read_head(path: &Path, max_lines: usize) -> io::Result<Vec<String>> {
  let mut reader = BufReader::new(File::open(path)?);
  let mut lines = Vec::new();
  let mut buf = Vec::new();

  while lines.len() < max_lines {
    buf.clear();
    if reader.read_until(b'\n', &mut buf)? == 0 {
      break;
    }
    let line = String::from_utf8_lossy(&buf);
    lines.push(line.trim_end_matches(['\n', '\r']).replace('\t', "    "));
  }

  Ok(lines)
}

pub fn render_lines(lines: &[String]) -> Vec<Line<'static>> {
  lines
    .iter()
    .enumerate()
    .map(|(i, line)| {
      Line::from(vec![
        Span::styled(format!("{:>4} ", i + 1), Style::default().fg(Color::DarkGray)),
        Span::styled(line.clone(), Style::default().fg(Color::Indexed(252))),
      ])
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  #[test]
  fn test_read_head_limits_lines() {
    let dir = std::env::temp_dir().join(format!("ff_text_head_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("many.txt");
    let body: String = (1..=20).map(|n| format!("line {n}\r\n")).collect();
    fs::write(&file, body).unwrap();

    let head = read_head(&file, 3).unwrap();
    assert_eq!(head, vec!["line 1", "line 2", "line 3"]);

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_read_head_lossy_and_tabs() {
    let dir = std::env::temp_dir().join(format!("ff_text_lossy_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("odd.txt");
    fs::write(&file, b"a\tb\n\xffend").unwrap();

    let head = read_head(&file, 10).unwrap();
    assert_eq!(head[0], "a    b");
    assert_eq!(head[1], "\u{fffd}end");

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_looks_binary() {
    let dir = std::env::temp_dir().join(format!("ff_text_binary_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("bin"), [b'a', 0, b'b']).unwrap();
    fs::write(dir.join("txt"), "plain").unwrap();

    assert!(looks_binary(&dir.join("bin")).unwrap());
    assert!(!looks_binary(&dir.join("txt")).unwrap());
    assert!(looks_binary(&dir.join("missing")).is_err());

    let _ = fs::remove_dir_all(&dir);
  }

  #[test]
  fn test_render_lines_numbers() {
    let lines = render_lines(&["x".to_string(), "y".to_string()]);
    let second: String = lines[1].spans.iter().map(|s| s.content.to_string()).collect();
    assert_eq!(second, "   2 y");
  }
}
