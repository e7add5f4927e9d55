use taskboard_core::{
  DragEndEvent,
  DragSession,
  group_by_status
};
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

use super::BoardColumn;

#[derive(Properties, PartialEq)]
pub struct TaskBoardProps {
  pub tasks:          Vec<TaskDto>,
  pub drag:           DragSession,
  pub compact_cards:  bool,
  pub on_open:        Callback<TaskId>,
  pub on_delete:      Callback<TaskId>,
  pub on_drag_start:
    Callback<(TaskId, TaskStatus)>,
  pub on_drag_over:
    Callback<TaskStatus>,
  pub on_drop:        Callback<DragEndEvent>,
  pub on_drag_cancel: Callback<()>
}

#[function_component(TaskBoard)]
pub fn task_board(
  props: &TaskBoardProps
) -> Html {
  html! {
      <div class="kanban-board">
          {
              for group_by_status(&props.tasks).into_iter().map(|(status, cards)| html! {
                  <BoardColumn
                      key={status.key()}
                      status={status}
                      cards={cards}
                      drag={props.drag.clone()}
                      compact_cards={props.compact_cards}
                      on_open={props.on_open.clone()}
                      on_delete={props.on_delete.clone()}
                      on_drag_start={props.on_drag_start.clone()}
                      on_drag_over={props.on_drag_over.clone()}
                      on_drop={props.on_drop.clone()}
                      on_drag_cancel={props.on_drag_cancel.clone()}
                  />
              })
          }
      </div>
  }
}
