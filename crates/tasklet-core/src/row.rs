/// Row-local inline rename state.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct RowEditor {
  is_editing: bool,
  draft_text: String
}

impl RowEditor {
  pub fn is_editing(&self) -> bool {
    self.is_editing
  }

  pub fn draft_text(&self) -> &str {
    &self.draft_text
  }

  pub fn begin(
    &mut self,
    current_text: &str
  ) {
    self.is_editing = true;
    self.draft_text =
      current_text.to_string();
  }

  pub fn set_draft(
    &mut self,
    text: &str
  ) {
    self.draft_text = text.to_string();
  }

  /// Leaves edit mode whatever the
  /// draft holds. Returns the text to
  /// rename the task to, or `None` when
  /// the draft is blank and the edit is
  /// dropped.
  pub fn commit(
    &mut self
  ) -> Option<String> {
    if !self.is_editing {
      return None;
    }
    self.is_editing = false;
    let text = self.draft_text.trim();
    (!text.is_empty())
      .then(|| text.to_string())
  }

  pub fn cancel(&mut self) {
    self.is_editing = false;
  }

  /// The edit/save button: enters edit
  /// mode, or commits when already in
  /// it.
  pub fn toggle(
    &mut self,
    current_text: &str
  ) -> Option<String> {
    if self.is_editing {
      self.commit()
    } else {
      self.begin(current_text);
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::RowEditor;

  #[test]
  fn commit_returns_trimmed_draft() {
    let mut row = RowEditor::default();
    row.begin("old");
    assert_eq!(row.draft_text(), "old");
    row.set_draft("  new  ");

    assert_eq!(
      row.commit().as_deref(),
      Some("new")
    );
    assert!(!row.is_editing());
  }

  #[test]
  fn blank_commit_exits_silently() {
    let mut row = RowEditor::default();
    row.begin("old");
    row.set_draft("   ");

    assert_eq!(row.commit(), None);
    assert!(!row.is_editing());
  }

  #[test]
  fn toggle_enters_then_commits() {
    let mut row = RowEditor::default();
    assert_eq!(row.toggle("task"), None);
    assert!(row.is_editing());
    row.set_draft("renamed");
    assert_eq!(
      row.toggle("task").as_deref(),
      Some("renamed")
    );
    assert!(!row.is_editing());
  }

  #[test]
  fn reentering_edit_resets_the_draft() {
    let mut row = RowEditor::default();
    row.begin("first");
    row.set_draft("abandoned");
    row.cancel();
    row.begin("first");
    assert_eq!(row.draft_text(), "first");
  }
}
