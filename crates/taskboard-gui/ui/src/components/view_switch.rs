use taskboard_shared::ViewMode;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ViewSwitchProps {
  pub mode:      ViewMode,
  pub on_change: Callback<ViewMode>
}

#[function_component(ViewSwitch)]
pub fn view_switch(
  props: &ViewSwitchProps
) -> Html {
  let make_button =
    |mode: ViewMode, label: &str| {
      let on_change =
        props.on_change.clone();
      let is_active = props.mode == mode;
      html! {
          <button
              class={classes!("view-btn", is_active.then_some("active"))}
              onclick={Callback::from(move |_| on_change.emit(mode))}
          >
              { label }
          </button>
      }
    };

  html! {
      <div class="view-switch">
          { make_button(ViewMode::Table, "Table") }
          { make_button(ViewMode::Board, "Board") }
      </div>
  }
}
