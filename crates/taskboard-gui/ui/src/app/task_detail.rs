use taskboard_core::ViewQuery;
use taskboard_shared::TaskId;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::{
  use_location,
  use_navigator
};

use super::Route;

#[derive(Properties, PartialEq)]
pub struct TaskDetailProps {
  pub id: TaskId
}

/// Landing page for a task row/card click.
/// Only carries the view back to the list.
#[function_component(TaskDetail)]
pub fn task_detail(
  props: &TaskDetailProps
) -> Html {
  let navigator = use_navigator();
  let query = use_location()
    .and_then(|location| {
      location.query::<ViewQuery>().ok()
    })
    .unwrap_or_default();

  let on_back = {
    let id = props.id;
    Callback::from(move |_| {
      let Some(navigator) = &navigator
      else {
        tracing::warn!(
          "back clicked without router"
        );
        return;
      };
      tracing::debug!(
        id,
        view = query.view.as_param(),
        "returning to task list"
      );
      if let Err(error) = navigator
        .push_with_query(
          &Route::Tasks,
          &query
        )
      {
        tracing::warn!(
          ?error,
          "failed to navigate back"
        );
      }
    })
  };

  html! {
      <div class="panel">
          <div class="header">{ format!("Task #{}", props.id) }</div>
          <div class="details">
              <div class="actions">
                  <button class="btn" onclick={on_back}>
                      { format!("Back to {}", query.view.as_param()) }
                  </button>
              </div>
          </div>
      </div>
  }
}
