use tasklet_core::task::Priority;
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  NodeRef,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskEditorProps {
  pub text:          String,
  pub priority:      Priority,
  pub show_priority: bool,
  pub updating:      bool,
  pub input_ref:     NodeRef,
  pub on_text:       Callback<String>,
  pub on_priority:   Callback<Priority>,
  pub on_submit:     Callback<()>,
  pub on_cancel:     Callback<()>
}

/// The add/update control.
#[function_component(TaskEditor)]
pub fn task_editor(
  props: &TaskEditorProps
) -> Html {
  let on_input = {
    let on_text = props.on_text.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        on_text.emit(input.value());
      }
    )
  };

  let on_key = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          on_submit.emit(());
        }
      }
    )
  };

  let on_priority_change = {
    let on_priority =
      props.on_priority.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      match select
        .value()
        .parse::<Priority>()
      {
        | Ok(priority) => {
          on_priority.emit(priority)
        }
        | Err(error) => {
          tracing::warn!(
            %error,
            "ignoring priority selection"
          );
        }
      }
    })
  };

  let on_submit = props.on_submit.clone();
  let on_cancel = props.on_cancel.clone();

  html! {
      <div class="input-row">
          <input
              id="task-input"
              ref={props.input_ref.clone()}
              type="text"
              placeholder="Enter a task..."
              value={props.text.clone()}
              oninput={on_input}
              onkeydown={on_key}
          />
          {
              if props.show_priority {
                  html! {
                      <select aria-label="Priority" onchange={on_priority_change}>
                          {
                              for Priority::ALL.into_iter().map(|priority| html! {
                                  <option
                                      value={priority.as_key()}
                                      selected={props.priority == priority}
                                  >
                                      { format!("{} Priority", priority.label()) }
                                  </option>
                              })
                          }
                      </select>
                  }
              } else {
                  html! {}
              }
          }
          <button class="primary" onclick={move |_| on_submit.emit(())}>
              { if props.updating { "Update" } else { "Add" } }
          </button>
          {
              if props.updating {
                  html! {
                      <button class="secondary" onclick={move |_| on_cancel.emit(())}>
                          { "Cancel" }
                      </button>
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
