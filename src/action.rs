#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
  Quit,
  FocusInput,
  FocusEntries,
  HistoryBack,
  HistoryForward,
  ParentDir,
  ChildDir,
  MoveUp,
  MoveDown,
  GoToTop,
  GoToBottom,
  DeleteFile,
  CopyFile,
  Paste,
  OpenEditor,
  Commit,
  InputChar(char),
  InputBackspace,
  InputDelete,
  InputLeft,
  InputRight,
  InputHome,
  InputEnd,
  ConfirmYes,
  ConfirmNo,
  ErrorClose,
  Resize(u16, u16),
  Tick,
  None,
}

impl Action {
  pub fn from_name(name: &str) -> Option<Action> {
    match name {
      "quit" => Some(Action::Quit),
      "focus_input" => Some(Action::FocusInput),
      "focus_entries" => Some(Action::FocusEntries),
      "history_back" => Some(Action::HistoryBack),
      "history_forward" => Some(Action::HistoryForward),
      "parent_dir" => Some(Action::ParentDir),
      "child_dir" => Some(Action::ChildDir),
      "move_up" => Some(Action::MoveUp),
      "move_down" => Some(Action::MoveDown),
      "go_to_top" => Some(Action::GoToTop),
      "go_to_bottom" => Some(Action::GoToBottom),
      "delete_file" => Some(Action::DeleteFile),
      "copy_file" => Some(Action::CopyFile),
      "paste" => Some(Action::Paste),
      "open_editor" => Some(Action::OpenEditor),
      "commit" => Some(Action::Commit),
      "none" => Some(Action::None),
      _ => None,
    }
  }

  /// Actions the navigation bindings handle before the focused panel sees the key.
  pub fn is_global(&self) -> bool {
    matches!(
      self,
      Action::FocusInput
        | Action::HistoryBack
        | Action::HistoryForward
        | Action::ParentDir
        | Action::ChildDir
    )
  }
}
