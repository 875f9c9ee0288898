use tasklet_core::filter::Stats;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsRowProps {
  pub stats: Stats
}

#[function_component(StatsRow)]
pub fn stats_row(
  props: &StatsRowProps
) -> Html {
  html! {
      <div class="stats-row">
          <div>{ "Total: " }<strong>{ props.stats.total }</strong></div>
          <div>{ "Completed: " }<strong>{ props.stats.completed }</strong></div>
          <div>{ "Pending: " }<strong>{ props.stats.pending }</strong></div>
      </div>
  }
}
