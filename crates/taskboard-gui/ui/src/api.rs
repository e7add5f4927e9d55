use async_trait::async_trait;
use serde::{
  Serialize,
  de::DeserializeOwned
};
use taskboard_core::{
  RemoteError,
  TaskRemote
};
use taskboard_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskIdArg,
  TaskUpdateArgs
};
use tauri_wasm::{
  args,
  invoke
};

pub async fn invoke_tauri<R, A>(
  cmd: &str,
  args_payload: &A
) -> Result<R, RemoteError>
where
  R: DeserializeOwned,
  A: Serialize + ?Sized
{
  let payload =
    args(args_payload).map_err(|e| {
      RemoteError::Transport(format!(
        "failed to encode args: {e}"
      ))
    })?;
  let value = invoke(cmd)
    .with_args(payload)
    .await
    .map_err(|e| {
      RemoteError::Rejected(format!(
        "invoke error: {e:?}"
      ))
    })?;

  serde_wasm_bindgen::from_value(value)
    .map_err(|e| {
      RemoteError::Decode(e.to_string())
    })
}

#[derive(Serialize)]
struct TasksListArgs {}

/// Task store backed by the tauri
/// `tasks_list`/`task_add`/`task_update`/
/// `task_delete` commands.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct TauriRemote;

#[async_trait(?Send)]
impl TaskRemote for TauriRemote {
  async fn fetch_all(
    &self
  ) -> Result<Vec<TaskDto>, RemoteError> {
    invoke_tauri(
      "tasks_list",
      &TasksListArgs {}
    )
    .await
  }

  async fn create(
    &self,
    args: &TaskCreate
  ) -> Result<TaskDto, RemoteError> {
    invoke_tauri("task_add", args).await
  }

  async fn update(
    &self,
    args: &TaskUpdateArgs
  ) -> Result<TaskDto, RemoteError> {
    invoke_tauri("task_update", args)
      .await
  }

  async fn delete(
    &self,
    id: TaskId
  ) -> Result<(), RemoteError> {
    invoke_tauri::<(), _>(
      "task_delete",
      &TaskIdArg {
        id
      }
    )
    .await
  }
}
