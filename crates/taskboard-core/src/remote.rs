use std::cell::{
  Cell,
  RefCell
};

use async_trait::async_trait;
use chrono::{
  DateTime,
  Duration,
  Utc
};
use taskboard_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskUpdateArgs
};
use thiserror::Error;
use tracing::debug;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum RemoteError {
  #[error("transport error: {0}")]
  Transport(String),
  #[error("remote rejected request: {0}")]
  Rejected(String),
  #[error("decode error: {0}")]
  Decode(String)
}

/// The four operations of the remote
/// task store. Futures are not `Send`:
/// the engine runs on a single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait TaskRemote {
  async fn fetch_all(
    &self
  ) -> Result<Vec<TaskDto>, RemoteError>;

  async fn create(
    &self,
    args: &TaskCreate
  ) -> Result<TaskDto, RemoteError>;

  async fn update(
    &self,
    args: &TaskUpdateArgs
  ) -> Result<TaskDto, RemoteError>;

  async fn delete(
    &self,
    id: TaskId
  ) -> Result<(), RemoteError>;
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum RemoteCall {
  FetchAll,
  Create(TaskCreate),
  Update(TaskUpdateArgs),
  Delete(TaskId)
}

/// In-memory remote with sequential ids
/// and a logical clock that advances one
/// second per successful mutation.
#[derive(Debug, Default)]
pub struct MemoryRemote {
  tasks:          RefCell<Vec<TaskDto>>,
  calls:          RefCell<Vec<RemoteCall>>,
  next_id:        Cell<TaskId>,
  ticks:          Cell<i64>,
  fail_fetch:     Cell<bool>,
  fail_mutations: Cell<bool>
}

impl MemoryRemote {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_tasks(
    tasks: Vec<TaskDto>
  ) -> Self {
    let next_id = tasks
      .iter()
      .map(|task| task.id)
      .max()
      .unwrap_or(0);
    let remote = Self::default();
    remote.next_id.set(next_id);
    *remote.tasks.borrow_mut() = tasks;
    remote
  }

  pub fn set_fail_fetch(
    &self,
    fail: bool
  ) {
    self.fail_fetch.set(fail);
  }

  pub fn set_fail_mutations(
    &self,
    fail: bool
  ) {
    self.fail_mutations.set(fail);
  }

  pub fn calls(&self) -> Vec<RemoteCall> {
    self.calls.borrow().clone()
  }

  pub fn clear_calls(&self) {
    self.calls.borrow_mut().clear();
  }

  pub fn count_calls(
    &self,
    pred: impl Fn(&RemoteCall) -> bool
  ) -> usize {
    self
      .calls
      .borrow()
      .iter()
      .filter(|call| pred(call))
      .count()
  }

  pub fn stored(&self) -> Vec<TaskDto> {
    self.tasks.borrow().clone()
  }

  fn record(&self, call: RemoteCall) {
    debug!(?call, "memory remote call");
    self.calls.borrow_mut().push(call);
  }

  fn check_mutation(
    &self
  ) -> Result<(), RemoteError> {
    if self.fail_mutations.get() {
      return Err(RemoteError::Rejected(
        "mutations disabled".to_string()
      ));
    }
    Ok(())
  }

  fn tick(&self) -> DateTime<Utc> {
    let next = self.ticks.get() + 1;
    self.ticks.set(next);
    DateTime::<Utc>::UNIX_EPOCH
      + Duration::seconds(next)
  }
}

#[async_trait(?Send)]
impl TaskRemote for MemoryRemote {
  async fn fetch_all(
    &self
  ) -> Result<Vec<TaskDto>, RemoteError> {
    self.record(RemoteCall::FetchAll);
    if self.fail_fetch.get() {
      return Err(RemoteError::Transport(
        "fetch disabled".to_string()
      ));
    }
    Ok(self.stored())
  }

  async fn create(
    &self,
    args: &TaskCreate
  ) -> Result<TaskDto, RemoteError> {
    self.record(RemoteCall::Create(
      args.clone()
    ));
    self.check_mutation()?;

    let id = self.next_id.get() + 1;
    self.next_id.set(id);
    let task = TaskDto {
      id,
      name: args.name.clone(),
      details: args.details.clone(),
      status: args.status,
      updated_at: self.tick()
    };
    self
      .tasks
      .borrow_mut()
      .push(task.clone());
    Ok(task)
  }

  async fn update(
    &self,
    args: &TaskUpdateArgs
  ) -> Result<TaskDto, RemoteError> {
    self.record(RemoteCall::Update(
      args.clone()
    ));
    self.check_mutation()?;

    let updated_at = self.tick();
    let mut tasks =
      self.tasks.borrow_mut();
    let task = tasks
      .iter_mut()
      .find(|task| task.id == args.id)
      .ok_or_else(|| {
        RemoteError::Rejected(format!(
          "task {} not found",
          args.id
        ))
      })?;
    task.name = args.name.clone();
    task.details = args.details.clone();
    task.status = args.status;
    task.updated_at = updated_at;
    Ok(task.clone())
  }

  async fn delete(
    &self,
    id: TaskId
  ) -> Result<(), RemoteError> {
    self.record(RemoteCall::Delete(id));
    self.check_mutation()?;

    let mut tasks =
      self.tasks.borrow_mut();
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    if tasks.len() == before {
      return Err(RemoteError::Rejected(
        format!("task {id} not found")
      ));
    }
    Ok(())
  }
}

#[cfg(test)]
mod remote_tests {
  use taskboard_shared::TaskStatus;

  use super::*;

  #[tokio::test]
  async fn create_assigns_ids_and_advances_clock(
  ) {
    let remote = MemoryRemote::new();
    let first = remote
      .create(&TaskCreate {
        name:    "a".to_string(),
        details: String::new(),
        status:  TaskStatus::NotStarted
      })
      .await
      .unwrap();
    let second = remote
      .create(&TaskCreate {
        name:    "b".to_string(),
        details: String::new(),
        status:  TaskStatus::NotStarted
      })
      .await
      .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert!(
      second.updated_at
        > first.updated_at
    );
  }

  #[tokio::test]
  async fn update_of_missing_task_is_rejected(
  ) {
    let remote = MemoryRemote::new();
    let err = remote
      .update(&TaskUpdateArgs {
        id:      9,
        name:    "x".to_string(),
        details: String::new(),
        status:  TaskStatus::Done
      })
      .await
      .unwrap_err();
    assert!(matches!(
      err,
      RemoteError::Rejected(_)
    ));
  }
}
