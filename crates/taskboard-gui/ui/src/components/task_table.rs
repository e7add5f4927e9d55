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

use super::TaskTableRow;

#[derive(Properties, PartialEq)]
pub struct TaskTableProps {
  pub tasks:            Vec<TaskDto>,
  pub on_open:          Callback<TaskId>,
  pub on_status_change:
    Callback<(TaskId, TaskStatus)>,
  pub on_delete:        Callback<TaskId>
}

#[function_component(TaskTable)]
pub fn task_table(
  props: &TaskTableProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div class="panel list">
            <div class="empty">{ "No tasks" }</div>
        </div>
    };
  }

  html! {
      <div class="panel list">
          <table class="task-table">
              <thead>
                  <tr>
                      <th>{ "Name" }</th>
                      <th>{ "Status" }</th>
                      <th>{ "Updated" }</th>
                      <th></th>
                  </tr>
              </thead>
              <tbody>
                  {
                      for props.tasks.iter().cloned().map(|task| {
                          let task_id = task.id;
                          html! {
                              <TaskTableRow
                                  key={task_id}
                                  task={task}
                                  on_open={props.on_open.clone()}
                                  on_status_change={props.on_status_change.clone()}
                                  on_delete={props.on_delete.clone()}
                              />
                          }
                      })
                  }
              </tbody>
          </table>
      </div>
  }
}
