use taskboard_shared::{
  TaskDto,
  TaskId,
  TaskStatus
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::StatusSelect;

#[derive(Properties, PartialEq)]
pub struct TaskTableRowProps {
  pub task:             TaskDto,
  pub on_open:          Callback<TaskId>,
  pub on_status_change:
    Callback<(TaskId, TaskStatus)>,
  pub on_delete:        Callback<TaskId>
}

#[function_component(TaskTableRow)]
pub fn task_table_row(
  props: &TaskTableRowProps
) -> Html {
  let id = props.task.id;
  let on_open = props.on_open.clone();
  let on_delete = props.on_delete.clone();
  let on_status = {
    let on_status_change =
      props.on_status_change.clone();
    Callback::from(
      move |status: TaskStatus| {
        on_status_change.emit((id, status))
      }
    )
  };

  let updated = props
    .task
    .updated_at
    .format("%Y-%m-%d %H:%M")
    .to_string();
  let has_details =
    !props.task.details.trim().is_empty();

  html! {
      <tr class="row" onclick={move |_| on_open.emit(id)}>
          <td>
              <div>{ &props.task.name }</div>
              {
                  if has_details {
                      html! { <div class="task-subtitle">{ &props.task.details }</div> }
                  } else {
                      html! {}
                  }
              }
          </td>
          <td>
              <StatusSelect status={props.task.status} on_change={on_status} />
          </td>
          <td><span class="badge">{ updated }</span></td>
          <td>
              <button
                  class="btn danger"
                  onclick={move |e: yew::MouseEvent| {
                      e.stop_propagation();
                      on_delete.emit(id);
                  }}
              >
                  { "Delete" }
              </button>
          </td>
      </tr>
  }
}
