/// Editable path line shown above the entry list.
///
/// `cursor` counts chars, not bytes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputPath {
  text: String,
  cursor: usize,
}

impl InputPath {
  pub fn new(text: &str) -> Self {
    let mut input = Self::default();
    input.set_text(text);
    input
  }

  pub fn text(&self) -> &str {
    &self.text
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  /// Replaces the text and parks the cursor at the end.
  pub fn set_text(&mut self, text: &str) {
    self.text = text.to_string();
    self.cursor = self.text.chars().count();
  }

  fn byte_index(&self, char_idx: usize) -> usize {
    self.text.char_indices().nth(char_idx).map_or(self.text.len(), |(i, _)| i)
  }

  pub fn insert(&mut self, c: char) {
    let at = self.byte_index(self.cursor);
    self.text.insert(at, c);
    self.cursor += 1;
  }

  pub fn backspace(&mut self) {
    if self.cursor == 0 {
      return;
    }
    self.cursor -= 1;
    let at = self.byte_index(self.cursor);
    self.text.remove(at);
  }

  pub fn delete(&mut self) {
    if self.cursor >= self.text.chars().count() {
      return;
    }
    let at = self.byte_index(self.cursor);
    self.text.remove(at);
  }

  pub fn left(&mut self) {
    self.cursor = self.cursor.saturating_sub(1);
  }

  pub fn right(&mut self) {
    self.cursor = (self.cursor + 1).min(self.text.chars().count());
  }

  pub fn home(&mut self) {
    self.cursor = 0;
  }

  pub fn end(&mut self) {
    self.cursor = self.text.chars().count();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_set_text_moves_cursor_to_end() {
    let input = InputPath::new("/tmp");
    assert_eq!(input.text(), "/tmp");
    assert_eq!(input.cursor(), 4);
  }

  #[test]
  fn test_insert_and_backspace_at_cursor() {
    let mut input = InputPath::new("/tp");
    input.left();
    input.insert('m');
    assert_eq!(input.text(), "/tmp");
    assert_eq!(input.cursor(), 3);
    input.backspace();
    assert_eq!(input.text(), "/tp");
    input.home();
    input.backspace();
    assert_eq!(input.text(), "/tp");
  }

  #[test]
  fn test_delete_under_cursor() {
    let mut input = InputPath::new("/tmp");
    input.home();
    input.delete();
    assert_eq!(input.text(), "tmp");
    input.end();
    input.delete();
    assert_eq!(input.text(), "tmp");
  }

  #[test]
  fn test_multibyte_editing() {
    let mut input = InputPath::new("/høme");
    input.left();
    input.left();
    input.backspace();
    assert_eq!(input.text(), "/hme");
    assert_eq!(input.cursor(), 2);
    input.insert('ø');
    assert_eq!(input.text(), "/høme");
    input.right();
    input.right();
    input.right();
    input.right();
    assert_eq!(input.cursor(), 5);
  }
}
