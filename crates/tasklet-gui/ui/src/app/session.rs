use std::rc::Rc;

use chrono::Utc;
use tasklet_core::config::AppConfig;
use tasklet_core::state::{
  Action,
  TodoSession,
  TodoState
};
use yew::Reducible;

use super::storage::LocalStore;

/// Yew reducer around the session so
/// every dispatched action commits and
/// persists in the same event turn.
#[derive(Debug, Clone)]
pub struct SessionState {
  session: TodoSession<LocalStore>
}

impl SessionState {
  pub fn open(
    config: &AppConfig
  ) -> Self {
    Self {
      session: TodoSession::open(
        config, LocalStore
      )
    }
  }

  pub fn state(&self) -> &TodoState {
    self.session.state()
  }
}

impl Reducible for SessionState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    let label = format!("{action:?}");
    let change = next
      .session
      .dispatch(action, Utc::now());
    tracing::debug!(
      action = %label,
      tasks_written = change.tasks,
      theme_written = change.theme,
      "dispatched action"
    );
    Rc::new(next)
  }
}
