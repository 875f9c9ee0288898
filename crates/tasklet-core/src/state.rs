use chrono::{
  DateTime,
  Utc
};
use tracing::{
  debug,
  error,
  info
};

use crate::config::{
  AppConfig,
  Features
};
use crate::filter::{
  Stats,
  StatusFilter,
  stats,
  visible_tasks
};
use crate::persist::Persistence;
use crate::store::KeyValueStore;
use crate::task::{
  IdGenerator,
  Priority,
  Task,
  TaskId
};
use crate::theme::Theme;

/// Contents of the add/update control.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct Draft {
  pub text:     String,
  pub priority: Priority
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
  Add {
    text:     String,
    priority: Option<Priority>
  },
  Update {
    id:       TaskId,
    text:     String,
    priority: Option<Priority>
  },
  Toggle(TaskId),
  Remove(TaskId),
  SetFilter(StatusFilter),
  SetSearch(String),
  SetTheme(Theme),
  ToggleTheme,
  BeginEdit(TaskId),
  CancelEdit,
  SetDraftText(String),
  SetDraftPriority(Priority),
  Submit,
  ResetView
}

/// Which persisted keys an action made
/// stale.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
#[must_use]
pub struct Change {
  pub tasks: bool,
  pub theme: bool
}

impl Change {
  pub const NONE: Self = Self {
    tasks: false,
    theme: false
  };

  fn tasks(changed: bool) -> Self {
    Self {
      tasks: changed,
      theme: false
    }
  }

  fn theme(changed: bool) -> Self {
    Self {
      tasks: false,
      theme: changed
    }
  }
}

/// Root state container. The only
/// writer of the task list.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoState {
  features: Features,
  tasks:    Vec<Task>,
  draft:    Draft,
  filter:   StatusFilter,
  search:   String,
  theme:    Theme,
  editing:  Option<TaskId>,
  ids:      IdGenerator
}

impl TodoState {
  pub fn new(
    features: Features,
    tasks: Vec<Task>,
    theme: Theme
  ) -> Self {
    let ids = IdGenerator::seeded(
      features.id_style,
      &tasks
    );
    let theme = if features.theme {
      theme
    } else {
      Theme::Light
    };
    Self {
      features,
      tasks,
      draft: Draft::default(),
      filter: StatusFilter::All,
      search: String::new(),
      theme,
      editing: None,
      ids
    }
  }

  pub fn features(&self) -> Features {
    self.features
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn task(
    &self,
    id: &TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| &task.id == id)
  }

  pub fn draft(&self) -> &Draft {
    &self.draft
  }

  pub fn filter(&self) -> StatusFilter {
    self.filter
  }

  pub fn search(&self) -> &str {
    &self.search
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn editing(
    &self
  ) -> Option<&TaskId> {
    self.editing.as_ref()
  }

  /// Current filter and search applied
  /// to the list, in list order.
  pub fn visible(&self) -> Vec<&Task> {
    visible_tasks(
      &self.tasks,
      self.filter,
      &self.search
    )
  }

  pub fn stats(&self) -> Stats {
    stats(&self.tasks)
  }

  /// Prepends a new task. `None` when
  /// `text` is blank.
  pub fn add(
    &mut self,
    text: &str,
    priority: Option<Priority>,
    now: DateTime<Utc>
  ) -> Option<TaskId> {
    let text = text.trim();
    if text.is_empty() {
      return None;
    }

    let id = self.ids.next(now);
    let mut task = Task::new(
      id.clone(),
      text.to_string()
    );
    if self.features.priorities {
      task.priority = Some(
        priority.unwrap_or_default()
      );
    }
    if self.features.timestamps {
      task.created_at = Some(now);
    }

    debug!(id = %id, "added task");
    self.tasks.insert(0, task);
    Some(id)
  }

  /// Replaces text and, when given,
  /// priority. Id, completion and
  /// creation time are kept.
  pub fn update(
    &mut self,
    id: &TaskId,
    text: &str,
    priority: Option<Priority>
  ) -> bool {
    let text = text.trim();
    if text.is_empty() {
      return false;
    }
    let priorities =
      self.features.priorities;
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    else {
      return false;
    };

    task.text = text.to_string();
    if priorities
      && let Some(priority) = priority
    {
      task.priority = Some(priority);
    }
    debug!(id = %id, "updated task");
    true
  }

  pub fn toggle(
    &mut self,
    id: &TaskId
  ) -> bool {
    match self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    {
      | Some(task) => {
        task.completed = !task.completed;
        true
      }
      | None => false
    }
  }

  /// Removing the task under the
  /// editing cursor also cancels the
  /// edit.
  pub fn remove(
    &mut self,
    id: &TaskId
  ) -> bool {
    let before = self.tasks.len();
    self
      .tasks
      .retain(|task| &task.id != id);
    if self.tasks.len() == before {
      return false;
    }
    if self.editing.as_ref() == Some(id)
    {
      self.cancel_edit();
    }
    debug!(id = %id, "removed task");
    true
  }

  pub fn set_filter(
    &mut self,
    filter: StatusFilter
  ) {
    self.filter = filter;
  }

  pub fn set_search(
    &mut self,
    query: &str
  ) {
    self.search = query.to_string();
  }

  /// `false` when the theme did not
  /// change or the variant has none.
  pub fn set_theme(
    &mut self,
    theme: Theme
  ) -> bool {
    if !self.features.theme
      || self.theme == theme
    {
      return false;
    }
    self.theme = theme;
    true
  }

  pub fn toggle_theme(&mut self) -> bool {
    self.set_theme(self.theme.next())
  }

  /// Points the editing cursor at `id`
  /// and pre-fills the draft from it.
  pub fn begin_edit(
    &mut self,
    id: &TaskId
  ) -> bool {
    let Some(task) = self.task(id)
    else {
      return false;
    };
    self.draft = Draft {
      text:     task.text.clone(),
      priority: task.effective_priority()
    };
    self.editing = Some(id.clone());
    true
  }

  pub fn cancel_edit(&mut self) {
    self.editing = None;
    self.draft = Draft::default();
  }

  pub fn set_draft_text(
    &mut self,
    text: &str
  ) {
    self.draft.text = text.to_string();
  }

  pub fn set_draft_priority(
    &mut self,
    priority: Priority
  ) {
    self.draft.priority = priority;
  }

  /// Confirms the add/update control:
  /// updates the task under the cursor,
  /// or adds a new one. A blank draft
  /// leaves everything as it was.
  pub fn submit(
    &mut self,
    now: DateTime<Utc>
  ) -> bool {
    if self.draft.text.trim().is_empty()
    {
      return false;
    }
    let Draft { text, priority } =
      std::mem::take(&mut self.draft);

    match self.editing.take() {
      | Some(id) => {
        self.update(
          &id,
          &text,
          Some(priority)
        )
      }
      | None => {
        self
          .add(&text, Some(priority), now)
          .is_some()
      }
    }
  }

  pub fn reset_view(&mut self) {
    self.search.clear();
    self.filter = StatusFilter::All;
  }

  pub fn apply(
    &mut self,
    action: Action,
    now: DateTime<Utc>
  ) -> Change {
    match action {
      | Action::Add { text, priority } => {
        Change::tasks(
          self
            .add(&text, priority, now)
            .is_some()
        )
      }
      | Action::Update {
        id,
        text,
        priority
      } => Change::tasks(
        self.update(&id, &text, priority)
      ),
      | Action::Toggle(id) => {
        Change::tasks(self.toggle(&id))
      }
      | Action::Remove(id) => {
        Change::tasks(self.remove(&id))
      }
      | Action::SetFilter(filter) => {
        self.set_filter(filter);
        Change::NONE
      }
      | Action::SetSearch(query) => {
        self.set_search(&query);
        Change::NONE
      }
      | Action::SetTheme(theme) => {
        Change::theme(
          self.set_theme(theme)
        )
      }
      | Action::ToggleTheme => {
        Change::theme(
          self.toggle_theme()
        )
      }
      | Action::BeginEdit(id) => {
        if !self.begin_edit(&id) {
          debug!(
            id = %id,
            "edit requested for missing task"
          );
        }
        Change::NONE
      }
      | Action::CancelEdit => {
        self.cancel_edit();
        Change::NONE
      }
      | Action::SetDraftText(text) => {
        self.set_draft_text(&text);
        Change::NONE
      }
      | Action::SetDraftPriority(
        priority
      ) => {
        self.set_draft_priority(priority);
        Change::NONE
      }
      | Action::Submit => {
        Change::tasks(self.submit(now))
      }
      | Action::ResetView => {
        self.reset_view();
        Change::NONE
      }
    }
  }
}

/// Composition root: the state plus the
/// store it persists to. Writes happen
/// after the state change is committed.
#[derive(Debug, Clone)]
pub struct TodoSession<S> {
  state:       TodoState,
  persistence: Persistence<S>
}

impl<S: KeyValueStore> TodoSession<S> {
  #[tracing::instrument(skip_all, fields(variant = ?config.variant))]
  pub fn open(
    config: &AppConfig,
    store: S
  ) -> Self {
    let persistence =
      Persistence::new(store, config);
    let tasks = persistence.load_tasks();
    let theme = persistence.load_theme();

    info!(
      count = tasks.len(),
      theme = theme.storage_value(),
      "opened todo session"
    );

    Self {
      state: TodoState::new(
        config.features(),
        tasks,
        theme
      ),
      persistence
    }
  }

  pub fn state(&self) -> &TodoState {
    &self.state
  }

  /// A failed write is logged and only
  /// loses that write; the state change
  /// stands.
  pub fn dispatch(
    &mut self,
    action: Action,
    now: DateTime<Utc>
  ) -> Change {
    let change =
      self.state.apply(action, now);

    if change.tasks
      && let Err(err) = self
        .persistence
        .save_tasks(self.state.tasks())
    {
      error!(error = %format_args!("{err:#}"), "task list write failed");
    }

    if change.theme
      && let Err(err) = self
        .persistence
        .save_theme(self.state.theme())
    {
      error!(error = %format_args!("{err:#}"), "theme write failed");
    }

    change
  }
}
