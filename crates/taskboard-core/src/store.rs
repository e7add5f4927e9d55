use std::cell::{
  Cell,
  RefCell
};
use std::future::Future;
use std::rc::Rc;

use serde::{
  Deserialize,
  Serialize
};
use taskboard_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskStatus,
  TaskUpdateArgs
};
use thiserror::Error;
use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::remote::{
  RemoteError,
  TaskRemote
};

#[derive(Debug, Error)]
pub enum StoreError {
  #[error(transparent)]
  Remote(#[from] RemoteError),
  #[error("task {0} is not in the local collection")]
  UnknownTask(TaskId),
  #[error("task name is empty")]
  EmptyName
}

pub type StoreResult<T> =
  Result<T, StoreError>;

/// How overlapping reloads are applied.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RefreshPolicy {
  /// Every response replaces the
  /// collection in arrival order.
  #[default]
  LatestResponse,
  /// A response from a reload issued
  /// before an already applied reload is
  /// discarded.
  LatestRequest
}

/// Field changes for `TaskStore::update`.
/// `None` keeps the current value.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct TaskChanges {
  pub name:    Option<String>,
  pub details: Option<String>,
  pub status:  Option<TaskStatus>
}

impl TaskChanges {
  pub fn status(
    status: TaskStatus
  ) -> Self {
    Self {
      status: Some(status),
      ..Self::default()
    }
  }
}

struct StoreInner<R> {
  remote:       R,
  tasks:        RefCell<Vec<TaskDto>>,
  policy:       RefreshPolicy,
  issued:       Cell<u64>,
  last_applied: Cell<u64>
}

/// Owner of the local task collection and
/// the only caller of the remote store.
///
/// Clones share the same collection.
pub struct TaskStore<R> {
  inner: Rc<StoreInner<R>>
}

impl<R> Clone for TaskStore<R> {
  fn clone(&self) -> Self {
    Self {
      inner: Rc::clone(&self.inner)
    }
  }
}

impl<R> PartialEq for TaskStore<R> {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.inner, &other.inner)
  }
}

impl<R: TaskRemote> TaskStore<R> {
  pub fn new(remote: R) -> Self {
    Self::with_policy(
      remote,
      RefreshPolicy::default()
    )
  }

  pub fn with_policy(
    remote: R,
    policy: RefreshPolicy
  ) -> Self {
    Self {
      inner: Rc::new(StoreInner {
        remote,
        tasks: RefCell::new(Vec::new()),
        policy,
        issued: Cell::new(0),
        last_applied: Cell::new(0)
      })
    }
  }

  pub fn remote(&self) -> &R {
    &self.inner.remote
  }

  pub fn policy(&self) -> RefreshPolicy {
    self.inner.policy
  }

  pub fn tasks(&self) -> Vec<TaskDto> {
    self.inner.tasks.borrow().clone()
  }

  pub fn find(
    &self,
    id: TaskId
  ) -> Option<TaskDto> {
    self
      .inner
      .tasks
      .borrow()
      .iter()
      .find(|task| task.id == id)
      .cloned()
  }

  /// Replaces the local collection with
  /// the remote one. A failed fetch
  /// empties the collection.
  #[tracing::instrument(skip(self))]
  pub async fn load(&self) -> Vec<TaskDto> {
    let ticket =
      self.inner.issued.get() + 1;
    self.inner.issued.set(ticket);

    let result =
      self.inner.remote.fetch_all().await;

    if self.inner.policy
      == RefreshPolicy::LatestRequest
      && ticket < self.inner.last_applied.get()
    {
      debug!(
        ticket,
        last_applied = self
          .inner
          .last_applied
          .get(),
        "discarding stale reload"
      );
      return self.tasks();
    }
    self.inner.last_applied.set(
      ticket.max(
        self.inner.last_applied.get()
      )
    );

    let next = match result {
      | Ok(list) => {
        debug!(
          ticket,
          total = list.len(),
          "reloaded task collection"
        );
        list
      }
      | Err(err) => {
        error!(
          ticket,
          error = %err,
          "task reload failed; clearing \
           local collection"
        );
        Vec::new()
      }
    };

    *self.inner.tasks.borrow_mut() =
      next.clone();
    next
  }

  /// Runs one remote mutation and, when it
  /// succeeds, a full reload. A failed
  /// mutation leaves the collection as is.
  pub async fn apply_mutation_then_refresh<
    T
  >(
    &self,
    op: &'static str,
    mutation: impl Future<
      Output = Result<T, RemoteError>
    >
  ) -> StoreResult<T> {
    match mutation.await {
      | Ok(value) => {
        debug!(op, "mutation applied");
        self.load().await;
        Ok(value)
      }
      | Err(err) => {
        error!(
          op,
          error = %err,
          "task mutation failed"
        );
        Err(StoreError::Remote(err))
      }
    }
  }

  /// Returns `Ok(None)` without calling
  /// the remote when the trimmed name is
  /// empty.
  #[tracing::instrument(
    skip(self, name, details),
    fields(
      name_len = name.len(),
      details_len = details.len()
    )
  )]
  pub async fn create(
    &self,
    name: &str,
    details: &str
  ) -> StoreResult<Option<TaskDto>> {
    let name = name.trim();
    if name.is_empty() {
      info!(
        "ignored task create with empty \
         name"
      );
      return Ok(None);
    }

    let args = TaskCreate {
      name:    name.to_string(),
      details: details.to_string(),
      status:  TaskStatus::NotStarted
    };

    let created = self
      .apply_mutation_then_refresh(
        "create",
        self.inner.remote.create(&args)
      )
      .await?;
    info!(
      id = created.id,
      "created task"
    );
    Ok(Some(created))
  }

  /// Sends the full task with `changes`
  /// applied on top of the local copy.
  #[tracing::instrument(
    skip(self, changes),
    fields(status = ?changes.status)
  )]
  pub async fn update(
    &self,
    id: TaskId,
    changes: TaskChanges
  ) -> StoreResult<TaskDto> {
    let Some(current) = self.find(id)
    else {
      debug!(
        id,
        "update ignored because task is \
         not in current snapshot"
      );
      return Err(StoreError::UnknownTask(
        id
      ));
    };

    let name = match changes.name {
      | Some(name) => {
        name.trim().to_string()
      }
      | None => current.name
    };
    if name.is_empty() {
      warn!(id, "rejected empty task name");
      return Err(StoreError::EmptyName);
    }

    let args = TaskUpdateArgs {
      id,
      name,
      details: changes
        .details
        .unwrap_or(current.details),
      status: changes
        .status
        .unwrap_or(current.status)
    };

    self
      .apply_mutation_then_refresh(
        "update",
        self.inner.remote.update(&args)
      )
      .await
  }

  pub async fn set_status(
    &self,
    id: TaskId,
    status: TaskStatus
  ) -> StoreResult<TaskDto> {
    self
      .update(
        id,
        TaskChanges::status(status)
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn delete(
    &self,
    id: TaskId
  ) -> StoreResult<()> {
    self
      .apply_mutation_then_refresh(
        "delete",
        self.inner.remote.delete(id)
      )
      .await?;
    info!(id, "deleted task");
    Ok(())
  }
}

#[cfg(test)]
mod store_tests {
  use taskboard_shared::TaskStatus;

  use super::*;
  use crate::remote::{
    MemoryRemote,
    RemoteCall
  };
  use crate::test_support::task;

  fn seeded_store(
  ) -> TaskStore<MemoryRemote> {
    TaskStore::new(
      MemoryRemote::with_tasks(vec![
        task(
          1,
          "Write spec",
          TaskStatus::NotStarted
        ),
        task(
          2,
          "Ship it",
          TaskStatus::InProgress
        ),
      ])
    )
  }

  #[tokio::test]
  async fn load_replaces_collection() {
    let store = seeded_store();
    assert!(store.tasks().is_empty());

    let loaded = store.load().await;
    assert_eq!(loaded.len(), 2);
    assert_eq!(store.tasks(), loaded);
  }

  #[tokio::test]
  async fn failed_load_empties_collection(
  ) {
    let store = seeded_store();
    store.load().await;
    assert_eq!(store.tasks().len(), 2);

    store.remote().set_fail_fetch(true);
    let loaded = store.load().await;

    assert!(loaded.is_empty());
    assert!(store.tasks().is_empty());
  }

  #[tokio::test]
  async fn create_trims_name_and_forces_not_started(
  ) {
    let store = seeded_store();
    store.load().await;
    store.remote().clear_calls();

    let created = store
      .create("  Review  ", "notes")
      .await
      .unwrap()
      .unwrap();

    assert_eq!(created.name, "Review");
    assert_eq!(
      store.remote().calls(),
      vec![
        RemoteCall::Create(TaskCreate {
          name:    "Review".to_string(),
          details: "notes".to_string(),
          status:  TaskStatus::NotStarted
        }),
        RemoteCall::FetchAll,
      ]
    );
    assert_eq!(store.tasks().len(), 3);
  }

  #[tokio::test]
  async fn whitespace_name_makes_no_call(
  ) {
    let store = seeded_store();

    let created = store
      .create("   ", "ignored")
      .await
      .unwrap();

    assert!(created.is_none());
    assert!(
      store.remote().calls().is_empty()
    );
  }

  #[tokio::test]
  async fn update_resends_full_task() {
    let store = seeded_store();
    store.load().await;
    store.remote().clear_calls();

    store
      .set_status(1, TaskStatus::Done)
      .await
      .unwrap();

    assert_eq!(
      store.remote().calls()[0],
      RemoteCall::Update(TaskUpdateArgs {
        id:      1,
        name:    "Write spec".to_string(),
        details: String::new(),
        status:  TaskStatus::Done
      })
    );
    assert_eq!(
      store.find(1).unwrap().status,
      TaskStatus::Done
    );
  }

  #[tokio::test]
  async fn update_advances_updated_at() {
    let store = seeded_store();
    store.load().await;
    let before =
      store.find(2).unwrap().updated_at;

    store
      .update(2, TaskChanges {
        details: Some(
          "after review".to_string()
        ),
        ..TaskChanges::default()
      })
      .await
      .unwrap();

    let after = store.find(2).unwrap();
    assert_eq!(
      after.details,
      "after review"
    );
    assert!(after.updated_at > before);
  }

  #[tokio::test]
  async fn update_of_unknown_task_makes_no_call(
  ) {
    let store = seeded_store();
    store.load().await;
    store.remote().clear_calls();

    let err = store
      .set_status(42, TaskStatus::Done)
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      StoreError::UnknownTask(42)
    ));
    assert!(
      store.remote().calls().is_empty()
    );
  }

  #[tokio::test]
  async fn update_rejects_blank_name() {
    let store = seeded_store();
    store.load().await;
    store.remote().clear_calls();

    let err = store
      .update(1, TaskChanges {
        name: Some(" ".to_string()),
        ..TaskChanges::default()
      })
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      StoreError::EmptyName
    ));
    assert!(
      store.remote().calls().is_empty()
    );
  }

  #[tokio::test]
  async fn failed_mutation_keeps_collection_and_skips_reload(
  ) {
    let store = seeded_store();
    store.load().await;
    let before = store.tasks();
    store.remote().clear_calls();
    store.remote().set_fail_mutations(true);

    let err = store
      .set_status(1, TaskStatus::Done)
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      StoreError::Remote(_)
    ));
    assert_eq!(store.tasks(), before);
    assert_eq!(
      store.remote().count_calls(
        |call| {
          *call == RemoteCall::FetchAll
        }
      ),
      0
    );
  }

  #[tokio::test]
  async fn failed_create_keeps_collection_and_skips_reload(
  ) {
    let store = seeded_store();
    store.load().await;
    let before = store.tasks();
    store.remote().clear_calls();
    store.remote().set_fail_mutations(true);

    let err = store
      .create("Review", "")
      .await
      .unwrap_err();

    assert!(matches!(
      err,
      StoreError::Remote(_)
    ));
    assert_eq!(store.tasks(), before);
    assert_eq!(
      store.remote().count_calls(
        |call| {
          *call == RemoteCall::FetchAll
        }
      ),
      0
    );
  }

  #[tokio::test]
  async fn failed_delete_keeps_collection_and_skips_reload(
  ) {
    let store = seeded_store();
    store.load().await;
    let before = store.tasks();
    store.remote().clear_calls();
    store.remote().set_fail_mutations(true);

    let result = store.delete(1).await;

    assert!(result.is_err());
    assert_eq!(store.tasks(), before);
    assert!(store.find(1).is_some());
    assert_eq!(
      store.remote().count_calls(
        |call| {
          *call == RemoteCall::FetchAll
        }
      ),
      0
    );
  }

  #[tokio::test]
  async fn delete_reloads_without_the_task(
  ) {
    let store = seeded_store();
    store.load().await;

    store.delete(1).await.unwrap();

    assert!(store.find(1).is_none());
    assert_eq!(store.tasks().len(), 1);
  }

  #[tokio::test]
  async fn clones_share_the_collection() {
    let store = seeded_store();
    let other = store.clone();
    store.load().await;

    assert_eq!(other.tasks().len(), 2);
    assert!(store == other);
  }
}
