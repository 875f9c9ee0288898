use tasklet_core::config::Variant;
use tasklet_core::filter::StatusFilter;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskFiltersProps {
  pub variant:   Variant,
  pub active:    StatusFilter,
  pub on_select: Callback<StatusFilter>,
  /// Shown only when present.
  #[prop_or_default]
  pub on_reset:  Option<Callback<MouseEvent>>
}

#[function_component(TaskFilters)]
pub fn task_filters(
  props: &TaskFiltersProps
) -> Html {
  let make_button =
    |filter: StatusFilter| {
      let class = if props.active
        == filter
      {
        "active"
      } else {
        ""
      };
      let on_select =
        props.on_select.clone();
      html! {
          <button
              key={filter.as_key()}
              class={class}
              onclick={move |_| on_select.emit(filter)}
          >
              { filter.label(props.variant) }
          </button>
      }
    };

  html! {
      <div class="filters">
          {
              for StatusFilter::choices(props.variant)
                  .into_iter()
                  .map(make_button)
          }
          {
              match props.on_reset.clone() {
                  | Some(on_reset) => html! {
                      <button class="small" onclick={on_reset}>{ "Reset" }</button>
                  },
                  | None => html! {}
              }
          }
      </div>
  }
}
