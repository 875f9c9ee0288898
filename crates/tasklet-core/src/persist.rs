use anyhow::Context;
use tracing::{debug, error, warn};

use crate::config::AppConfig;
use crate::store::KeyValueStore;
use crate::task::Task;
use crate::theme::Theme;

/// Typed access to the task list and theme over a raw key-value store.
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    store: S,
    tasks_key: String,
    theme_key: Option<String>,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        let theme_key = config
            .features()
            .theme
            .then(|| config.theme_key.clone());
        Self {
            store,
            tasks_key: config.tasks_key.clone(),
            theme_key,
        }
    }

    /// Never fails: unreadable or malformed data yields an empty list and
    /// an error event.
    #[tracing::instrument(skip(self), fields(key = %self.tasks_key))]
    pub fn load_tasks(&self) -> Vec<Task> {
        let raw = match self.store.load(&self.tasks_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored tasks");
                return Vec::new();
            }
            Err(err) => {
                warn!(error = %format_args!("{err:#}"), "failed reading stored tasks");
                return Vec::new();
            }
        };

        match parse_tasks(&raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "loaded stored tasks");
                tasks
            }
            Err(err) => {
                error!(error = %format_args!("{err:#}"), "failed to parse saved tasks");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self, tasks), fields(key = %self.tasks_key, count = tasks.len()))]
    pub fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()> {
        let raw = encode_tasks(tasks)?;
        self.store
            .save(&self.tasks_key, &raw)
            .with_context(|| format!("failed to save tasks under {}", self.tasks_key))
    }

    /// Light when the variant has no theme, or nothing usable is stored.
    #[tracing::instrument(skip(self))]
    pub fn load_theme(&self) -> Theme {
        let Some(key) = self.theme_key.as_deref() else {
            return Theme::default();
        };
        match self.store.load(key) {
            Ok(Some(raw)) => Theme::from_storage_value(&raw),
            Ok(None) => Theme::default(),
            Err(err) => {
                warn!(error = %format_args!("{err:#}"), "failed reading stored theme");
                Theme::default()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn save_theme(&self, theme: Theme) -> anyhow::Result<()> {
        let Some(key) = self.theme_key.as_deref() else {
            return Ok(());
        };
        self.store
            .save(key, theme.storage_value())
            .with_context(|| format!("failed to save theme under {key}"))
    }
}

/// A stored `null` counts as an empty list. Entries that do not read as a
/// task are dropped one by one; the rest of the list is kept.
pub fn parse_tasks(raw: &str) -> anyhow::Result<Vec<Task>> {
    let parsed: Option<Vec<serde_json::Value>> =
        serde_json::from_str(raw).context("stored tasks are not a JSON array")?;
    let tasks = parsed
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value::<Task>(entry) {
            Ok(task) => Some(task),
            Err(err) => {
                warn!(index, error = %err, "dropping unreadable stored task");
                None
            }
        })
        .collect();
    Ok(tasks)
}

pub fn encode_tasks(tasks: &[Task]) -> anyhow::Result<String> {
    serde_json::to_string(tasks).context("failed to encode tasks")
}
