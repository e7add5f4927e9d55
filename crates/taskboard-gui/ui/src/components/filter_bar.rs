use taskboard_core::FilterState;
use taskboard_shared::TaskStatus;
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub filter:           FilterState,
  pub total:            usize,
  pub visible:          usize,
  pub on_query:         Callback<String>,
  pub on_toggle_status:
    Callback<TaskStatus>,
  pub on_clear:         Callback<()>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let oninput = {
    let on_query = props.on_query.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_query.emit(input.value());
      }
    )
  };

  let on_clear = props.on_clear.clone();

  html! {
      <div class="filter-bar">
          <input
              class="filter-search"
              value={props.filter.query().to_string()}
              placeholder="Filter tasks"
              {oninput}
          />
          <div class="filter-statuses">
              {
                  for TaskStatus::ALL.iter().copied().map(|status| {
                      let on_toggle = props.on_toggle_status.clone();
                      let is_on = props.filter.statuses().contains(&status);
                      html! {
                          <button
                              class={classes!("chip", is_on.then_some("on"))}
                              onclick={Callback::from(move |_| on_toggle.emit(status))}
                          >
                              { status.label() }
                          </button>
                      }
                  })
              }
          </div>
          <span class="badge">{ format!("{} / {}", props.visible, props.total) }</span>
          {
              if props.filter.is_active() {
                  html! {
                      <button class="btn" onclick={Callback::from(move |_| on_clear.emit(()))}>
                          { "Clear" }
                      </button>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
