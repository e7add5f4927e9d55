mod routes;
mod task_detail;
mod task_list_view;
mod url;

use gloo::console::log;
use yew::{
  Html,
  function_component,
  html,
  use_effect_with
};
use yew_router::{
  BrowserRouter,
  Switch
};

pub use routes::Route;

use self::routes::switch;

const BOARD_CONFIG_TOML: &str =
  include_str!("../assets/board.toml");

#[function_component(App)]
pub fn app() -> Html {
  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "router mounted"
      );
      || ()
    });
  }

  html! {
      <BrowserRouter>
          <Switch<Route> render={switch} />
      </BrowserRouter>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
