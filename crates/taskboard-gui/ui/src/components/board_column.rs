use taskboard_core::{
  DragEndEvent,
  DragSession
};
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

use super::{
  BoardCard,
  DRAG_SOURCE_FORMAT
};

#[derive(Properties, PartialEq)]
pub struct BoardColumnProps {
  pub status:         TaskStatus,
  pub cards:          Vec<TaskDto>,
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

fn read_drag_event(
  event: &DragEvent,
  column: TaskStatus
) -> Option<DragEndEvent> {
  let data_transfer =
    event.data_transfer()?;
  let payload = data_transfer
    .get_data("text/plain")
    .and_then(|dragged| {
      data_transfer
        .get_data(DRAG_SOURCE_FORMAT)
        .map(|source| (dragged, source))
    });
  match payload {
    | Ok((dragged, source)) => {
      match DragEndEvent::parse(
        &dragged,
        &source,
        Some(column.key())
      ) {
        | Ok(parsed) => Some(parsed),
        | Err(error) => {
          tracing::warn!(
            %error,
            dragged,
            source,
            "ignoring malformed drop"
          );
          None
        }
      }
    }
    | Err(error) => {
      tracing::warn!(
        ?error,
        "failed reading drag data"
      );
      None
    }
  }
}

#[function_component(BoardColumn)]
pub fn board_column(
  props: &BoardColumnProps
) -> Html {
  let status = props.status;
  let is_drop_hint =
    props.drag.is_over(status);

  let ondragover = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        on_drag_over.emit(status);
      }
    )
  };

  let ondragenter = {
    let on_drag_over =
      props.on_drag_over.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        on_drag_over.emit(status);
      }
    )
  };

  let ondrop = {
    let on_drop = props.on_drop.clone();
    Callback::from(
      move |event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
        if let Some(parsed) =
          read_drag_event(&event, status)
        {
          on_drop.emit(parsed);
        }
      }
    )
  };

  html! {
      <div class={classes!("kanban-column", is_drop_hint.then_some("drop-hint"))} {ondragover} {ondragenter} {ondrop}>
          <div class="kanban-column-header">
              <span>{ status.label() }</span>
              <span class="badge">{ props.cards.len() }</span>
          </div>
          <div class="kanban-column-body">
              {
                  if props.cards.is_empty() {
                      html! { <div class="kanban-empty">{ "No tasks" }</div> }
                  } else {
                      html! {
                          <>
                              {
                                  for props.cards.iter().cloned().map(|task| {
                                      let task_id = task.id;
                                      html! {
                                          <BoardCard
                                              key={task_id}
                                              task={task}
                                              is_dragging={props.drag.dragging() == Some(task_id)}
                                              compact_cards={props.compact_cards}
                                              on_open={props.on_open.clone()}
                                              on_delete={props.on_delete.clone()}
                                              on_drag_start={props.on_drag_start.clone()}
                                              on_drag_end={props.on_drag_cancel.clone()}
                                          />
                                      }
                                  })
                              }
                          </>
                      }
                  }
              }
          </div>
      </div>
  }
}
