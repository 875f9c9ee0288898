use std::str::FromStr;

use anyhow::anyhow;

use crate::config::Variant;
use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum StatusFilter {
  #[default]
  All,
  Active,
  Completed
}

impl StatusFilter {
  /// Filter choices in the order the
  /// variant's filter control shows them.
  pub fn choices(
    variant: Variant
  ) -> [StatusFilter; 3] {
    match variant {
      | Variant::Minimal => [
        Self::All,
        Self::Active,
        Self::Completed
      ],
      | Variant::Rich => [
        Self::All,
        Self::Completed,
        Self::Active
      ]
    }
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(
    self,
    variant: Variant
  ) -> &'static str {
    match (self, variant) {
      | (Self::All, _) => "All",
      | (
        Self::Active,
        Variant::Minimal
      ) => "Active",
      | (Self::Active, Variant::Rich) => {
        "Pending"
      }
      | (Self::Completed, _) => {
        "Completed"
      }
    }
  }

  pub fn matches(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !task.completed,
      | Self::Completed => task.completed
    }
  }
}

impl FromStr for StatusFilter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "all" => Ok(Self::All),
      | "active" | "pending" => {
        Ok(Self::Active)
      }
      | "completed" => Ok(Self::Completed),
      | other => Err(anyhow!(
        "unknown status filter: {other}"
      ))
    }
  }
}

/// Case-insensitive substring match of
/// `query` against the task text. An
/// empty query matches everything.
pub fn matches_query(
  task: &Task,
  query: &str
) -> bool {
  if query.is_empty() {
    return true;
  }
  task
    .text
    .to_lowercase()
    .contains(&query.to_lowercase())
}

pub fn visible_tasks<'a>(
  tasks: &'a [Task],
  filter: StatusFilter,
  query: &str
) -> Vec<&'a Task> {
  tasks
    .iter()
    .filter(|task| {
      filter.matches(task)
        && matches_query(task, query)
    })
    .collect()
}

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct Stats {
  pub total:     usize,
  pub completed: usize,
  pub pending:   usize
}

pub fn stats(tasks: &[Task]) -> Stats {
  let total = tasks.len();
  let completed = tasks
    .iter()
    .filter(|task| task.completed)
    .count();
  Stats {
    total,
    completed,
    pending: total - completed
  }
}
