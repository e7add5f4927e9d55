use std::collections::BTreeSet;

use taskboard_shared::{
  TaskDto,
  TaskStatus
};
use tracing::trace;

/// Text query plus selected statuses. An
/// empty status set selects every status.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct FilterState {
  query:    String,
  statuses: BTreeSet<TaskStatus>
}

impl FilterState {
  pub fn new(
    query: impl Into<String>,
    statuses: impl IntoIterator<
      Item = TaskStatus
    >
  ) -> Self {
    Self {
      query:    query.into(),
      statuses: statuses
        .into_iter()
        .collect()
    }
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn statuses(
    &self
  ) -> &BTreeSet<TaskStatus> {
    &self.statuses
  }

  pub fn set_query(
    &mut self,
    query: impl Into<String>
  ) {
    self.query = query.into();
  }

  pub fn toggle_status(
    &mut self,
    status: TaskStatus
  ) {
    if !self.statuses.remove(&status) {
      self.statuses.insert(status);
    }
  }

  pub fn clear(&mut self) {
    self.query.clear();
    self.statuses.clear();
  }

  pub fn is_active(&self) -> bool {
    !self.query.trim().is_empty()
      || !self.statuses.is_empty()
  }

  pub fn matches(
    &self,
    task: &TaskDto
  ) -> bool {
    text_matches(task, &self.normalized_query())
      && self.status_matches(task.status)
  }

  fn normalized_query(&self) -> String {
    self.query.trim().to_lowercase()
  }

  fn status_matches(
    &self,
    status: TaskStatus
  ) -> bool {
    self.statuses.is_empty()
      || self.statuses.contains(&status)
  }
}

fn text_matches(
  task: &TaskDto,
  needle: &str
) -> bool {
  needle.is_empty()
    || task
      .name
      .to_lowercase()
      .contains(needle)
    || task
      .details
      .to_lowercase()
      .contains(needle)
}

/// Visible subset in collection order.
pub fn visible_tasks(
  tasks: &[TaskDto],
  filter: &FilterState
) -> Vec<TaskDto> {
  let needle = filter.normalized_query();
  let visible: Vec<TaskDto> = tasks
    .iter()
    .filter(|task| {
      text_matches(task, &needle)
        && filter
          .status_matches(task.status)
    })
    .cloned()
    .collect();

  trace!(
    total = tasks.len(),
    visible = visible.len(),
    query = %needle,
    statuses = filter.statuses.len(),
    "applied task filter"
  );
  visible
}

/// Board columns in `TaskStatus::ALL`
/// order; each keeps collection order.
pub fn group_by_status(
  tasks: &[TaskDto]
) -> Vec<(TaskStatus, Vec<TaskDto>)> {
  TaskStatus::ALL
    .into_iter()
    .map(|status| {
      let cards = tasks
        .iter()
        .filter(|task| {
          task.status == status
        })
        .cloned()
        .collect();
      (status, cards)
    })
    .collect()
}
