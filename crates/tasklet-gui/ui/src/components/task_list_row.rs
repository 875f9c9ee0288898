use chrono::{
  DateTime,
  Utc
};
use tasklet_core::config::{
  EditStyle,
  Features
};
use tasklet_core::row::RowEditor;
use tasklet_core::task::{
  Task,
  TaskId
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  KeyboardEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub task:          Task,
  pub features:      Features,
  /// The row is under the form's
  /// editing cursor.
  pub under_cursor:  bool,
  pub on_toggle:     Callback<TaskId>,
  pub on_remove:     Callback<TaskId>,
  pub on_begin_edit: Callback<TaskId>,
  pub on_rename:
    Callback<(TaskId, String)>
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let editor =
    use_state(RowEditor::default);
  let id = props.task.id.clone();

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = id.clone();
    Callback::from(move |()| {
      on_toggle.emit(id.clone())
    })
  };

  let on_remove = {
    let on_remove =
      props.on_remove.clone();
    let id = id.clone();
    Callback::from(
      move |_: yew::MouseEvent| {
        on_remove.emit(id.clone())
      }
    )
  };

  let commit = {
    let editor = editor.clone();
    let on_rename =
      props.on_rename.clone();
    let id = id.clone();
    let current = props.task.text.clone();
    Callback::from(move |()| {
      let mut next = (*editor).clone();
      if let Some(text) =
        next.toggle(&current)
      {
        on_rename
          .emit((id.clone(), text));
      }
      editor.set(next);
    })
  };

  let on_edit = match props
    .features
    .edit_style
  {
    | EditStyle::Inline => {
      let commit = commit.clone();
      Callback::from(
        move |_: yew::MouseEvent| {
          commit.emit(())
        }
      )
    }
    | EditStyle::Form => {
      let on_begin_edit =
        props.on_begin_edit.clone();
      let id = id.clone();
      Callback::from(
        move |_: yew::MouseEvent| {
          on_begin_edit.emit(id.clone())
        }
      )
    }
  };

  let on_draft_input = {
    let editor = editor.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        let mut next =
          (*editor).clone();
        next.set_draft(&input.value());
        editor.set(next);
      }
    )
  };

  let on_draft_key = {
    let commit = commit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          commit.emit(());
        }
      }
    )
  };

  let editing_inline = props
    .features
    .edit_style
    == EditStyle::Inline
    && editor.is_editing();

  let class = classes!(
    "task-item",
    props.task.completed.then_some(
      "completed"
    ),
    props.under_cursor.then_some(
      "editing"
    ),
    props.features.priorities.then(
      || {
        format!(
          "priority-{}",
          props
            .task
            .effective_priority()
            .as_key()
        )
      }
    )
  );

  let body = if editing_inline {
    html! {
        <input
            type="text"
            value={editor.draft_text().to_string()}
            oninput={on_draft_input}
            onkeydown={on_draft_key}
        />
    }
  } else if props.features.edit_style
    == EditStyle::Form
  {
    html! {
        <>
            <div class="left">
                <input
                    type="checkbox"
                    checked={props.task.completed}
                    onchange={move |_: web_sys::Event| on_toggle.emit(())}
                    aria-label={format!("Mark {} as completed", props.task.text)}
                />
            </div>
            <div class="middle">
                <div class="todo-text">{ &props.task.text }</div>
                <div class="meta">
                    {
                        match props.task.created_at {
                            | Some(created) => html! {
                                <span class="time">
                                    { local_time(created) }
                                </span>
                            },
                            | None => html! {}
                        }
                    }
                    {
                        if props.features.priorities {
                            html! {
                                <span class="prio">
                                    { format!("• {}", props.task.effective_priority().label()) }
                                </span>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </>
    }
  } else {
    html! {
        <span onclick={move |_: yew::MouseEvent| on_toggle.emit(())}>
            { &props.task.text }
        </span>
    }
  };

  let edit_label = if editing_inline {
    "💾"
  } else {
    "✏️"
  };

  html! {
      <li class={class}>
          { body }
          <div class="actions">
              <button class="icon-btn" onclick={on_edit}>{ edit_label }</button>
              <button class="icon-btn danger" onclick={on_remove}>{ "🗑️" }</button>
          </div>
      </li>
  }
}

/// Creation time in the browser's
/// locale format.
fn local_time(
  created: DateTime<Utc>
) -> String {
  let millis =
    created.timestamp_millis() as f64;
  js_sys::Date::new(
    &wasm_bindgen::JsValue::from_f64(
      millis
    )
  )
  .to_locale_string(
    "default",
    &wasm_bindgen::JsValue::UNDEFINED
  )
  .into()
}
