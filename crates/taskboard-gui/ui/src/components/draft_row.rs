use taskboard_core::{
  DraftCommand,
  DraftEditor
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct DraftRowProps {
  pub editor:     DraftEditor,
  pub on_begin:   Callback<()>,
  pub on_name:    Callback<String>,
  pub on_details: Callback<String>,
  pub on_command:
    Callback<DraftCommand>
}

fn focus(node: &NodeRef) {
  let Some(input) =
    node.cast::<web_sys::HtmlElement>()
  else {
    return;
  };
  if let Err(error) = input.focus() {
    tracing::warn!(
      ?error,
      "failed to focus draft name"
    );
  }
}

#[function_component(DraftRow)]
pub fn draft_row(
  props: &DraftRowProps
) -> Html {
  let name_ref = use_node_ref();
  let is_editing =
    props.editor.is_editing();

  {
    let name_ref = name_ref.clone();
    use_effect_with(is_editing, move |editing| {
      if *editing {
        focus(&name_ref);
      }
      || ()
    });
  }

  let Some(draft) = props.editor.draft()
  else {
    let on_begin = props.on_begin.clone();
    return html! {
        <div class="draft-row">
            <button class="btn primary" onclick={Callback::from(move |_| on_begin.emit(()))}>
                { "New Task" }
            </button>
        </div>
    };
  };

  let onkeydown = {
    let on_command =
      props.on_command.clone();
    Callback::from(
      move |e: web_sys::KeyboardEvent| {
        if let Some(command) =
          DraftCommand::from_key(&e.key())
        {
          e.prevent_default();
          on_command.emit(command);
        }
      }
    )
  };

  let on_name_input = {
    let on_name = props.on_name.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_name.emit(input.value());
      }
    )
  };

  let on_details_input = {
    let on_details =
      props.on_details.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        let input: web_sys::HtmlInputElement =
          e.target_unchecked_into();
        on_details.emit(input.value());
      }
    )
  };

  let make_button =
    |command: DraftCommand,
     label: &str,
     class: &'static str| {
      let on_command =
        props.on_command.clone();
      html! {
          <button class={class} onclick={Callback::from(move |_| on_command.emit(command))}>
              { label }
          </button>
      }
    };

  html! {
      <div class="draft-row editing" onkeydown={onkeydown}>
          <input
              ref={name_ref}
              class="draft-name"
              value={draft.name.clone()}
              placeholder="Task name"
              oninput={on_name_input}
          />
          <input
              class="draft-details"
              value={draft.details.clone()}
              placeholder="Details"
              oninput={on_details_input}
          />
          { make_button(DraftCommand::Confirm, "Save", "btn primary") }
          { make_button(DraftCommand::Cancel, "Cancel", "btn") }
          <span class="hint">{ "Enter to save, Esc to cancel" }</span>
      </div>
  }
}
