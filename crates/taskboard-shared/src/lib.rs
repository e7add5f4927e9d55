use std::fmt;
use std::str::FromStr;

use chrono::{
  DateTime,
  Utc
};
use serde::{
  Deserialize,
  Serialize
};
use thiserror::Error;

pub type TaskId = u64;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
  NotStarted,
  InProgress,
  Done
}

impl TaskStatus {
  /// Board column order.
  pub const ALL: [TaskStatus; 3] = [
    TaskStatus::NotStarted,
    TaskStatus::InProgress,
    TaskStatus::Done
  ];

  /// Grouping key used by the board
  /// columns and drag payloads.
  pub fn key(self) -> &'static str {
    match self {
      | TaskStatus::NotStarted => {
        "not_started"
      }
      | TaskStatus::InProgress => {
        "in_progress"
      }
      | TaskStatus::Done => "done"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | TaskStatus::NotStarted => {
        "Not Started"
      }
      | TaskStatus::InProgress => {
        "In Progress"
      }
      | TaskStatus::Done => "Done"
    }
  }
}

impl fmt::Display for TaskStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.key())
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
#[error("unknown task status: {0:?}")]
pub struct StatusParseError(
  pub String
);

impl FromStr for TaskStatus {
  type Err = StatusParseError;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    TaskStatus::ALL
      .into_iter()
      .find(|status| {
        status.key() == raw.trim()
      })
      .ok_or_else(|| {
        StatusParseError(
          raw.to_string()
        )
      })
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
  #[default]
  Table,
  Board
}

impl ViewMode {
  pub fn as_param(
    self
  ) -> &'static str {
    match self {
      | ViewMode::Table => "table",
      | ViewMode::Board => "board"
    }
  }

  /// Unrecognised values yield `None`
  /// so callers pick their own default.
  pub fn from_param(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "table" => Some(ViewMode::Table),
      | "board" => Some(ViewMode::Board),
      | _ => None
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      | ViewMode::Table => ViewMode::Board,
      | ViewMode::Board => ViewMode::Table
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDto {
  pub id:         TaskId,
  #[serde(default)]
  pub name:       String,
  #[serde(default)]
  pub details:    String,
  pub status:     TaskStatus,
  pub updated_at: DateTime<Utc>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskCreate {
  pub name:    String,
  pub details: String,
  pub status:  TaskStatus
}

/// Updates always carry the full
/// editable state of the task.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskUpdateArgs {
  pub id:      TaskId,
  pub name:    String,
  pub details: String,
  pub status:  TaskStatus
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskIdArg {
  pub id: TaskId
}

#[cfg(test)]
mod shared_tests {
  use super::*;

  #[test]
  fn status_keys_parse_back_to_the_same_status(
  ) {
    for status in TaskStatus::ALL {
      assert_eq!(
        status.key().parse::<TaskStatus>(),
        Ok(status)
      );
    }
  }

  #[test]
  fn unknown_status_key_is_rejected() {
    let err = "archived"
      .parse::<TaskStatus>()
      .expect_err("no fourth status");
    assert_eq!(
      err,
      StatusParseError(
        "archived".to_string()
      )
    );
  }

  #[test]
  fn status_serializes_as_grouping_key(
  ) {
    let json = serde_json::to_string(
      &TaskStatus::InProgress
    )
    .expect("serialize status");
    assert_eq!(json, "\"in_progress\"");

    let bad = serde_json::from_str::<
      TaskStatus
    >("\"blocked\"");
    assert!(bad.is_err());
  }

  #[test]
  fn view_mode_params() {
    assert_eq!(
      ViewMode::from_param("board"),
      Some(ViewMode::Board)
    );
    assert_eq!(
      ViewMode::from_param("grid"),
      None
    );
    assert_eq!(
      ViewMode::Table.toggled(),
      ViewMode::Board
    );
    assert_eq!(
      ViewMode::default().as_param(),
      "table"
    );
  }

  #[test]
  fn task_dto_wire_shape() {
    let json = r#"{
      "id": 7,
      "name": "Write spec",
      "status": "not_started",
      "updated_at": "2026-01-02T03:04:05Z"
    }"#;
    let task: TaskDto =
      serde_json::from_str(json)
        .expect("decode task");
    assert_eq!(task.id, 7);
    assert_eq!(task.details, "");
    assert_eq!(
      task.status,
      TaskStatus::NotStarted
    );
  }
}
