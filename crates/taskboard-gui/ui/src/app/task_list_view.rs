use std::future::Future;

use taskboard_core::{
  BoardConfig,
  DragDropCoordinator,
  DragEndEvent,
  DragSession,
  DraftCommand,
  DraftEditor,
  FilterState,
  StoreResult,
  TaskStore,
  ViewModeController,
  visible_tasks
};
use taskboard_shared::{
  TaskDto,
  TaskId,
  TaskStatus,
  ViewMode
};
use yew::{
  Callback,
  Html,
  UseStateHandle,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_state
};
use yew_router::prelude::{
  use_location,
  use_navigator
};

use super::url::RouterUrl;
use super::{
  BOARD_CONFIG_TOML,
  Route,
  ui_debug
};
use crate::api::TauriRemote;
use crate::components::{
  DraftRow,
  FilterBar,
  TaskBoard,
  TaskTable,
  ViewSwitch
};

type Store = TaskStore<TauriRemote>;

/// Runs a store operation on the event
/// loop and publishes the resulting
/// snapshot. Failures are already logged
/// by the store and are not shown.
fn run_store_op<F, Fut, T>(
  store: &Store,
  tasks: &UseStateHandle<Vec<TaskDto>>,
  op: &'static str,
  f: F
) where
  F: FnOnce(Store) -> Fut + 'static,
  Fut: Future<Output = StoreResult<T>>
    + 'static,
  T: 'static
{
  let store = store.clone();
  let tasks = tasks.clone();
  wasm_bindgen_futures::spawn_local(
    async move {
      if let Err(err) =
        f(store.clone()).await
      {
        tracing::warn!(
          op,
          error = %err,
          "task operation failed"
        );
      }
      tasks.set(store.tasks());
    }
  );
}

#[function_component(TaskListView)]
pub fn task_list_view() -> Html {
  let navigator = use_navigator();
  let location = use_location();

  let config = use_memo((), |_| {
    BoardConfig::load_or_default(
      BOARD_CONFIG_TOML
    )
  });
  let store = {
    let policy = config.refresh_policy;
    use_memo((), move |_| {
      TaskStore::with_policy(
        TauriRemote,
        policy
      )
    })
  };
  let view_controller = {
    let navigator = navigator.clone();
    use_mut_ref(move || {
      ViewModeController::mount(
        RouterUrl::new(
          navigator,
          location.as_ref(),
          Route::Tasks
        )
      )
    })
  };
  let view_mode = {
    let view_controller =
      view_controller.clone();
    use_state(move || {
      view_controller.borrow().mode()
    })
  };
  let tasks =
    use_state(Vec::<TaskDto>::new);
  let filter =
    use_state(FilterState::default);
  let draft =
    use_state(DraftEditor::default);
  let drag =
    use_state(DragSession::default);

  {
    let store = store.clone();
    let tasks = tasks.clone();
    use_effect_with((), move |_| {
      let store = (*store).clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          tracing::info!(
            "loading task list"
          );
          let list = store.load().await;
          tasks.set(list);
        }
      );
      || ()
    });
  }

  let visible =
    visible_tasks(&tasks, &filter);

  let on_query = {
    let filter = filter.clone();
    Callback::from(
      move |query: String| {
        let mut next =
          (*filter).clone();
        next.set_query(query);
        filter.set(next);
      }
    )
  };

  let on_toggle_status = {
    let filter = filter.clone();
    Callback::from(
      move |status: TaskStatus| {
        let mut next =
          (*filter).clone();
        next.toggle_status(status);
        ui_debug(
          "filter.status",
          status.key()
        );
        filter.set(next);
      }
    )
  };

  let on_clear_filters = {
    let filter = filter.clone();
    Callback::from(move |_: ()| {
      filter.set(FilterState::default());
    })
  };

  let on_view = {
    let view_controller =
      view_controller.clone();
    let view_mode = view_mode.clone();
    Callback::from(
      move |mode: ViewMode| {
        if view_controller
          .borrow_mut()
          .set(mode)
        {
          ui_debug(
            "view.changed",
            mode.as_param()
          );
        }
        view_mode.set(
          view_controller.borrow().mode()
        );
      }
    )
  };

  let on_new_task = {
    let draft = draft.clone();
    Callback::from(move |_: ()| {
      let mut next = (*draft).clone();
      if next.begin() {
        ui_debug(
          "draft.open",
          "clicked New Task"
        );
        draft.set(next);
      }
    })
  };

  let on_draft_name = {
    let draft = draft.clone();
    Callback::from(
      move |name: String| {
        let mut next =
          (*draft).clone();
        next.set_name(name);
        draft.set(next);
      }
    )
  };

  let on_draft_details = {
    let draft = draft.clone();
    Callback::from(
      move |details: String| {
        let mut next =
          (*draft).clone();
        next.set_details(details);
        draft.set(next);
      }
    )
  };

  let on_draft_command = {
    let draft = draft.clone();
    let store = store.clone();
    let tasks = tasks.clone();
    Callback::from(
      move |command: DraftCommand| {
        let mut next =
          (*draft).clone();
        match command {
          | DraftCommand::Cancel => {
            next.cancel();
            draft.set(next);
            ui_debug(
              "draft.cancel",
              "discarded draft"
            );
          }
          | DraftCommand::Confirm => {
            let submission =
              next.take_submission();
            draft.set(next);
            let Some(submission) =
              submission
            else {
              return;
            };
            run_store_op(
              &store,
              &tasks,
              "create",
              move |store| async move {
                store
                  .create(
                    &submission.name,
                    &submission.details
                  )
                  .await
              }
            );
          }
        }
      }
    )
  };

  let on_status_change = {
    let store = store.clone();
    let tasks = tasks.clone();
    Callback::from(
      move |(id, status): (
        TaskId,
        TaskStatus
      )| {
        tracing::info!(
          id,
          status = %status,
          "status selector changed"
        );
        run_store_op(
          &store,
          &tasks,
          "set_status",
          move |store| async move {
            store
              .set_status(id, status)
              .await
          }
        );
      }
    )
  };

  let on_delete = {
    let store = store.clone();
    let tasks = tasks.clone();
    Callback::from(move |id: TaskId| {
      run_store_op(
        &store,
        &tasks,
        "delete",
        move |store| async move {
          store.delete(id).await
        }
      );
    })
  };

  let on_open = {
    let view_controller =
      view_controller.clone();
    Callback::from(move |id: TaskId| {
      let target = view_controller
        .borrow()
        .detail_target(id);
      let Some(navigator) = &navigator
      else {
        tracing::warn!(
          id,
          "open ignored without router"
        );
        return;
      };
      if let Err(error) = navigator
        .push_with_query(
          &Route::TaskDetail {
            id: target.id
          },
          &target.query
        )
      {
        tracing::warn!(
          ?error,
          id,
          "failed to open task detail"
        );
      }
    })
  };

  let on_drag_start = {
    let drag = drag.clone();
    Callback::from(
      move |(id, source): (
        TaskId,
        TaskStatus
      )| {
        tracing::debug!(
          id,
          source = %source,
          "board drag start"
        );
        let mut next = (*drag).clone();
        next.begin(id, source);
        drag.set(next);
      }
    )
  };

  let on_drag_over = {
    let drag = drag.clone();
    Callback::from(
      move |column: TaskStatus| {
        let mut next = (*drag).clone();
        if next.hover(column) {
          tracing::debug!(
            column = %column,
            "board drag over column"
          );
          drag.set(next);
        }
      }
    )
  };

  let on_drop = {
    let drag = drag.clone();
    let store = store.clone();
    let tasks = tasks.clone();
    let visible = visible.clone();
    Callback::from(
      move |event: DragEndEvent| {
        drag.set(DragSession::default());
        let visible = visible.clone();
        run_store_op(
          &store,
          &tasks,
          "drag",
          move |store| async move {
            DragDropCoordinator::handle_drag_end(
              &store, event, &visible
            )
            .await
          }
        );
      }
    )
  };

  let on_drag_cancel = {
    let drag = drag.clone();
    let store = store.clone();
    let tasks = tasks.clone();
    Callback::from(move |_: ()| {
      let session = (*drag).clone();
      drag.set(DragSession::default());
      let (Some(dragged), Some(source)) = (
        session.dragging(),
        session.source()
      ) else {
        return;
      };
      let event = DragEndEvent {
        dragged,
        source,
        destination: None
      };
      run_store_op(
        &store,
        &tasks,
        "drag",
        move |store| async move {
          DragDropCoordinator::handle_drag_end(
            &store, event, &[]
          )
          .await
        }
      );
    })
  };

  let layout = match *view_mode {
    | ViewMode::Table => html! {
        <TaskTable
            tasks={visible.clone()}
            on_open={on_open}
            on_status_change={on_status_change}
            on_delete={on_delete}
        />
    },
    | ViewMode::Board => html! {
        <TaskBoard
            tasks={visible.clone()}
            drag={(*drag).clone()}
            compact_cards={config.compact_cards}
            on_open={on_open}
            on_delete={on_delete}
            on_drag_start={on_drag_start}
            on_drag_over={on_drag_over}
            on_drop={on_drop}
            on_drag_cancel={on_drag_cancel}
        />
    }
  };

  html! {
      <div class="app">
          <div class="panel toolbar">
              <div class="header">{ config.title.clone() }</div>
              <ViewSwitch mode={*view_mode} on_change={on_view} />
              <FilterBar
                  filter={(*filter).clone()}
                  total={tasks.len()}
                  visible={visible.len()}
                  on_query={on_query}
                  on_toggle_status={on_toggle_status}
                  on_clear={on_clear_filters}
              />
          </div>
          <DraftRow
              editor={(*draft).clone()}
              on_begin={on_new_task}
              on_name={on_draft_name}
              on_details={on_draft_details}
              on_command={on_draft_command}
          />
          { layout }
      </div>
  }
}
