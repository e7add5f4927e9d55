use taskboard_shared::TaskDto;
use tracing::debug;

use crate::remote::TaskRemote;
use crate::store::{
  StoreResult,
  TaskStore
};

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskDraft {
  pub name:    String,
  pub details: String
}

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub enum DraftState {
  #[default]
  Idle,
  Editing(TaskDraft)
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DraftCommand {
  Confirm,
  Cancel
}

impl DraftCommand {
  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "Enter" => Some(Self::Confirm),
      | "Escape" => Some(Self::Cancel),
      | _ => None
    }
  }
}

/// Inline "new task" form:
/// `Idle -> Editing -> Idle`.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct DraftEditor {
  state: DraftState
}

impl DraftEditor {
  pub fn state(&self) -> &DraftState {
    &self.state
  }

  pub fn is_editing(&self) -> bool {
    matches!(
      self.state,
      DraftState::Editing(_)
    )
  }

  pub fn draft(
    &self
  ) -> Option<&TaskDraft> {
    match &self.state {
      | DraftState::Editing(draft) => {
        Some(draft)
      }
      | DraftState::Idle => None
    }
  }

  /// Opens an empty draft. Returns `false`
  /// when a draft is already open.
  pub fn begin(&mut self) -> bool {
    if self.is_editing() {
      debug!(
        "draft already open; ignoring \
         begin"
      );
      return false;
    }
    self.state = DraftState::Editing(
      TaskDraft::default()
    );
    true
  }

  pub fn set_name(
    &mut self,
    name: impl Into<String>
  ) {
    match &mut self.state {
      | DraftState::Editing(draft) => {
        draft.name = name.into();
      }
      | DraftState::Idle => {
        debug!(
          "ignored name input while idle"
        );
      }
    }
  }

  pub fn set_details(
    &mut self,
    details: impl Into<String>
  ) {
    match &mut self.state {
      | DraftState::Editing(draft) => {
        draft.details = details.into();
      }
      | DraftState::Idle => {
        debug!(
          "ignored details input while \
           idle"
        );
      }
    }
  }

  pub fn cancel(&mut self) {
    if self.is_editing() {
      debug!("draft discarded");
    }
    self.state = DraftState::Idle;
  }

  /// Closes the draft and hands back its
  /// fields for `TaskStore::create`.
  pub fn take_submission(
    &mut self
  ) -> Option<TaskDraft> {
    match std::mem::take(&mut self.state)
    {
      | DraftState::Editing(draft) => {
        Some(draft)
      }
      | DraftState::Idle => {
        debug!(
          "ignored submit while idle"
        );
        None
      }
    }
  }

  /// The editor is idle afterwards whatever
  /// the store does with the draft.
  pub async fn submit<R: TaskRemote>(
    &mut self,
    store: &TaskStore<R>
  ) -> StoreResult<Option<TaskDto>> {
    let Some(draft) =
      self.take_submission()
    else {
      return Ok(None);
    };
    store
      .create(&draft.name, &draft.details)
      .await
  }

  pub async fn apply<R: TaskRemote>(
    &mut self,
    command: DraftCommand,
    store: &TaskStore<R>
  ) -> StoreResult<Option<TaskDto>> {
    match command {
      | DraftCommand::Confirm => {
        self.submit(store).await
      }
      | DraftCommand::Cancel => {
        self.cancel();
        Ok(None)
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use taskboard_shared::{
    TaskCreate,
    TaskStatus
  };

  use super::*;
  use crate::remote::{
    MemoryRemote,
    RemoteCall
  };

  #[test]
  fn begin_opens_empty_draft_once() {
    let mut editor =
      DraftEditor::default();
    assert!(editor.begin());
    assert_eq!(
      editor.draft(),
      Some(&TaskDraft::default())
    );

    editor.set_name("half typed");
    assert!(!editor.begin());
    assert_eq!(
      editor.draft().unwrap().name,
      "half typed"
    );
  }

  #[test]
  fn input_while_idle_is_ignored() {
    let mut editor =
      DraftEditor::default();
    editor.set_name("x");
    editor.set_details("y");
    assert_eq!(
      editor.state(),
      &DraftState::Idle
    );
    assert!(
      editor.take_submission().is_none()
    );
  }

  #[test]
  fn keys_map_to_commands() {
    assert_eq!(
      DraftCommand::from_key("Enter"),
      Some(DraftCommand::Confirm)
    );
    assert_eq!(
      DraftCommand::from_key("Escape"),
      Some(DraftCommand::Cancel)
    );
    assert_eq!(
      DraftCommand::from_key("a"),
      None
    );
  }

  #[tokio::test]
  async fn cancel_discards_without_store_call(
  ) {
    let store =
      TaskStore::new(MemoryRemote::new());
    let mut editor =
      DraftEditor::default();
    editor.begin();
    editor.set_name("Keep?");

    editor
      .apply(DraftCommand::Cancel, &store)
      .await
      .unwrap();

    assert!(!editor.is_editing());
    assert!(
      store.remote().calls().is_empty()
    );
  }

  #[tokio::test]
  async fn whitespace_name_returns_to_idle_without_call(
  ) {
    let store =
      TaskStore::new(MemoryRemote::new());
    let mut editor =
      DraftEditor::default();
    editor.begin();
    editor.set_name("   ");
    editor.set_details("lost");

    let created =
      editor.submit(&store).await.unwrap();

    assert!(created.is_none());
    assert_eq!(
      editor.state(),
      &DraftState::Idle
    );
    assert!(
      store.remote().calls().is_empty()
    );

    editor.begin();
    assert_eq!(
      editor.draft(),
      Some(&TaskDraft::default())
    );
  }

  #[tokio::test]
  async fn confirm_creates_and_resets() {
    let store =
      TaskStore::new(MemoryRemote::new());
    let mut editor =
      DraftEditor::default();
    editor.begin();
    editor.set_name("  Review  ");
    editor.set_details("today");

    let created = editor
      .apply(DraftCommand::Confirm, &store)
      .await
      .unwrap()
      .unwrap();

    assert_eq!(created.name, "Review");
    assert!(!editor.is_editing());
    assert_eq!(
      store.remote().calls()[0],
      RemoteCall::Create(TaskCreate {
        name:    "Review".to_string(),
        details: "today".to_string(),
        status:  TaskStatus::NotStarted
      })
    );
  }

  #[tokio::test]
  async fn failed_create_still_returns_to_idle(
  ) {
    let remote = MemoryRemote::new();
    remote.set_fail_mutations(true);
    let store = TaskStore::new(remote);
    let mut editor =
      DraftEditor::default();
    editor.begin();
    editor.set_name("Doomed");

    assert!(
      editor.submit(&store).await.is_err()
    );
    assert_eq!(
      editor.state(),
      &DraftState::Idle
    );
  }
}
