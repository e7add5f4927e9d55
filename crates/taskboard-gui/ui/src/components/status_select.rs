use taskboard_shared::TaskStatus;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusSelectProps {
  pub status:    TaskStatus,
  pub on_change: Callback<TaskStatus>
}

#[function_component(StatusSelect)]
pub fn status_select(
  props: &StatusSelectProps
) -> Html {
  let onchange = {
    let on_change = props.on_change.clone();
    let current = props.status;
    Callback::from(
      move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement =
          e.target_unchecked_into();
        match select
          .value()
          .parse::<TaskStatus>()
        {
          | Ok(status) if status != current => {
            on_change.emit(status);
          }
          | Ok(_) => {}
          | Err(error) => {
            tracing::warn!(
              %error,
              "ignoring status selection"
            );
          }
        }
      }
    )
  };

  html! {
      <select
          class="status-select"
          onclick={|e: yew::MouseEvent| e.stop_propagation()}
          {onchange}
      >
          {
              for TaskStatus::ALL.iter().copied().map(|status| html! {
                  <option
                      value={status.key()}
                      selected={status == props.status}
                  >
                      { status.label() }
                  </option>
              })
          }
      </select>
  }
}
