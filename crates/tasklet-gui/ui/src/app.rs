mod session;
mod storage;

use gloo::console::log;
use tasklet_core::config::{
  AppConfig,
  Variant
};
use tasklet_core::state::Action;
use tasklet_core::task::{
  Priority,
  TaskId
};
use web_sys::{
  HtmlInputElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  NodeRef,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_node_ref,
  use_reducer
};

use self::session::SessionState;
use crate::components::{
  StatsRow,
  TaskEditor,
  TaskFilters,
  TaskList
};

const CONFIG_TOML: &str =
  include_str!("../assets/tasklet.toml");

#[function_component(App)]
pub fn app() -> Html {
  let config = use_memo((), |_| {
    AppConfig::load_or_default(
      CONFIG_TOML
    )
  });
  let session = {
    let config = config.clone();
    use_reducer(move || {
      SessionState::open(&config)
    })
  };
  let input_ref: NodeRef =
    use_node_ref();

  {
    let title = config.title.clone();
    use_effect_with((), move |_| {
      gloo::utils::document()
        .set_title(&title);
      ui_debug(
        "app.mounted",
        "frontend mounted and session \
         opened"
      );
      || ()
    });
  }

  let state = session.state();
  let features = state.features();
  let editing = state.editing().cloned();

  {
    let input_ref = input_ref.clone();
    use_effect_with(
      editing.clone(),
      move |editing| {
        if editing.is_some()
          && let Some(input) = input_ref
            .cast::<HtmlInputElement>()
        {
          let _ = input.focus();
        }
        || ()
      }
    );
  }

  let by_id = |make: fn(TaskId) -> Action| {
    let session = session.clone();
    Callback::from(move |id: TaskId| {
      session.dispatch(make(id))
    })
  };
  let on_toggle = by_id(Action::Toggle);
  let on_remove = by_id(Action::Remove);
  let on_begin_edit =
    by_id(Action::BeginEdit);

  let on_rename = {
    let session = session.clone();
    Callback::from(
      move |(id, text): (
        TaskId,
        String
      )| {
        ui_debug(
          "row.rename",
          &id.to_string()
        );
        session.dispatch(
          Action::Update {
            id,
            text,
            priority: None
          }
        );
      }
    )
  };

  let on_draft_text = {
    let session = session.clone();
    Callback::from(move |text| {
      session.dispatch(
        Action::SetDraftText(text)
      )
    })
  };

  let on_draft_priority = {
    let session = session.clone();
    Callback::from(
      move |priority: Priority| {
        session.dispatch(
          Action::SetDraftPriority(
            priority
          )
        )
      }
    )
  };

  let on_submit = {
    let session = session.clone();
    Callback::from(move |()| {
      session.dispatch(Action::Submit)
    })
  };

  let on_cancel = {
    let session = session.clone();
    Callback::from(move |()| {
      session.dispatch(Action::CancelEdit)
    })
  };

  let on_search = {
    let session = session.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        session.dispatch(
          Action::SetSearch(input.value())
        );
      }
    )
  };

  let on_filter = {
    let session = session.clone();
    Callback::from(move |filter| {
      session.dispatch(
        Action::SetFilter(filter)
      )
    })
  };

  let rich =
    config.variant == Variant::Rich;

  let on_reset = rich.then(|| {
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        session
          .dispatch(Action::ResetView)
      }
    )
  });

  let on_toggle_theme = {
    let session = session.clone();
    Callback::from(
      move |_: MouseEvent| {
        session
          .dispatch(Action::ToggleTheme)
      }
    )
  };

  let visible: Vec<_> = state
    .visible()
    .into_iter()
    .cloned()
    .collect();

  html! {
      <div class={state.theme().as_class()}>
          <div class="topbar">
              <h1 class="title">{ config.title.clone() }</h1>
              {
                  if features.theme {
                      html! {
                          <div class="theme-switch">
                              <button class="icon-btn" title="Toggle theme" onclick={on_toggle_theme}>
                                  { state.theme().toggle_label() }
                              </button>
                          </div>
                      }
                  } else {
                      html! {}
                  }
              }
          </div>

          {
              if features.stats {
                  html! { <StatsRow stats={state.stats()} /> }
              } else {
                  html! {}
              }
          }

          <TaskEditor
              text={state.draft().text.clone()}
              priority={state.draft().priority}
              show_priority={features.priorities}
              updating={editing.is_some()}
              input_ref={input_ref}
              on_text={on_draft_text}
              on_priority={on_draft_priority}
              on_submit={on_submit}
              on_cancel={on_cancel}
          />

          <input
              type="text"
              class="search-bar"
              placeholder="🔍 Search tasks..."
              value={state.search().to_string()}
              oninput={on_search}
          />

          <TaskFilters
              variant={config.variant}
              active={state.filter()}
              on_select={on_filter}
              on_reset={on_reset}
          />

          <TaskList
              tasks={visible}
              features={features}
              editing={editing}
              on_toggle={on_toggle}
              on_remove={on_remove}
              on_begin_edit={on_begin_edit}
              on_rename={on_rename}
          />

          {
              if rich {
                  html! {
                      <div class="footer">
                          { "Tip: Press Enter to add/update. Theme & tasks are saved in browser storage." }
                      </div>
                  }
              } else {
                  html! {}
              }
          }
      </div>
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
