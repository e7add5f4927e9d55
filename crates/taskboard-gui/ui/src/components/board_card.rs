use taskboard_shared::{
  TaskDto,
  TaskId,
  TaskStatus
};
use web_sys::DragEvent;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

use super::DRAG_SOURCE_FORMAT;

#[derive(Properties, PartialEq)]
pub struct BoardCardProps {
  pub task:          TaskDto,
  pub is_dragging:   bool,
  pub compact_cards: bool,
  pub on_open:       Callback<TaskId>,
  pub on_delete:     Callback<TaskId>,
  pub on_drag_start:
    Callback<(TaskId, TaskStatus)>,
  pub on_drag_end:   Callback<()>
}

#[function_component(BoardCard)]
pub fn board_card(
  props: &BoardCardProps
) -> Html {
  let task_id = props.task.id;
  let source = props.task.status;

  let ondragstart = {
    let on_drag_start =
      props.on_drag_start.clone();
    Callback::from(
      move |event: DragEvent| {
        if let Some(data_transfer) =
          event.data_transfer()
        {
          let written = data_transfer
            .set_data(
              "text/plain",
              &task_id.to_string()
            )
            .and_then(|_| {
              data_transfer.set_data(
                DRAG_SOURCE_FORMAT,
                source.key()
              )
            });
          if let Err(error) = written {
            tracing::warn!(
              ?error,
              task_id,
              "failed writing drag data"
            );
          }
          data_transfer
            .set_drop_effect("move");
        }
        on_drag_start
          .emit((task_id, source));
      }
    )
  };

  let ondragend = {
    let on_drag_end =
      props.on_drag_end.clone();
    Callback::from(move |_| {
      on_drag_end.emit(());
    })
  };

  let on_open = props.on_open.clone();
  let on_delete = props.on_delete.clone();

  html! {
      <div
          class={classes!("kanban-card", props.is_dragging.then_some("dragging"))}
          draggable="true"
          onclick={move |_| on_open.emit(task_id)}
          {ondragstart}
          {ondragend}
      >
          <div class="kanban-card-title">{ &props.task.name }</div>
          {
              if props.compact_cards || props.task.details.trim().is_empty() {
                  html! {}
              } else {
                  html! { <div class="task-subtitle">{ &props.task.details }</div> }
              }
          }
          <div class="kanban-card-actions">
              <button
                  class="btn danger"
                  onclick={move |e: yew::MouseEvent| {
                      e.stop_propagation();
                      on_delete.emit(task_id);
                  }}
              >
                  { "Delete" }
              </button>
          </div>
      </div>
  }
}
