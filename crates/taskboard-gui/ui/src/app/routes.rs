use taskboard_shared::TaskId;
use yew::{
  Html,
  html
};
use yew_router::prelude::{
  Redirect,
  Routable
};

use super::task_detail::TaskDetail;
use super::task_list_view::TaskListView;

#[derive(
  Debug, Clone, PartialEq, Routable,
)]
pub enum Route {
  #[at("/")]
  Tasks,
  #[at("/tasks/:id")]
  TaskDetail { id: TaskId },
  #[not_found]
  #[at("/404")]
  NotFound
}

pub(super) fn switch(
  route: Route
) -> Html {
  match route {
    | Route::Tasks => {
      html! { <TaskListView /> }
    }
    | Route::TaskDetail {
      id
    } => {
      html! { <TaskDetail id={id} /> }
    }
    | Route::NotFound => {
      tracing::warn!(
        "unknown route; redirecting to \
         task list"
      );
      html! { <Redirect<Route> to={Route::Tasks} /> }
    }
  }
}
