use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Identity of a task. Both stored shapes are creation timestamps in epoch
/// milliseconds; the shape read from storage is the shape written back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Millis(u64),
    Text(String),
}

impl TaskId {
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            Self::Millis(value) => Some(*value),
            Self::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Millis(value) => write!(f, "{value}"),
            Self::Text(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl FromStr for Priority {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(anyhow!("unknown priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    pub text: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,

    #[serde(default, rename = "time", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority: None,
            created_at: None,
        }
    }

    /// Stored tasks without a priority count as low.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

/// Stored priorities outside the known keys read as low rather than failing
/// the whole task.
fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(key)) => Some(key.parse().unwrap_or_default()),
        Some(_) => Some(Priority::Low),
    })
}

/// Which stored shape newly issued ids take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStyle {
    #[default]
    Numeric,
    Text,
}

/// Issues creation-timestamp ids that never repeat, even for two tasks
/// created within the same millisecond.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdGenerator {
    style: IdStyle,
    last: u64,
}

impl IdGenerator {
    pub fn seeded(style: IdStyle, tasks: &[Task]) -> Self {
        let last = tasks
            .iter()
            .filter_map(|task| task.id.as_millis())
            .max()
            .unwrap_or(0);
        Self { style, last }
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let value = millis.max(self.last.saturating_add(1));
        self.last = value;
        match self.style {
            IdStyle::Numeric => TaskId::Millis(value),
            IdStyle::Text => TaskId::Text(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let mut ids = IdGenerator::default();

        let first = ids.next(now);
        let second = ids.next(now);

        assert_ne!(first, second);
        assert_eq!(second.as_millis(), first.as_millis().map(|v| v + 1));
    }

    #[test]
    fn seeding_skips_past_existing_ids() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let future = now.timestamp_millis() as u64 + 5_000;
        let existing = vec![Task::new(TaskId::Text(future.to_string()), "later".into())];

        let mut ids = IdGenerator::seeded(IdStyle::Text, &existing);

        assert_eq!(ids.next(now), TaskId::Text((future + 1).to_string()));
    }

    #[test]
    fn both_stored_id_shapes_deserialize() {
        let numeric: Task =
            serde_json::from_str(r#"{"id":1700000000000,"text":"a","completed":false}"#).unwrap();
        let text: Task = serde_json::from_str(
            r#"{"id":"1700000000001","text":"b","completed":true,"time":"2023-11-14T22:13:20.001Z","priority":"high"}"#,
        )
        .unwrap();

        assert_eq!(numeric.id, TaskId::Millis(1_700_000_000_000));
        assert_eq!(numeric.effective_priority(), Priority::Low);
        assert_eq!(text.id, TaskId::Text("1700000000001".into()));
        assert_eq!(text.priority, Some(Priority::High));
        assert!(text.created_at.is_some());
    }

    #[test]
    fn unknown_priority_reads_as_low() {
        let odd: Task =
            serde_json::from_str(r#"{"id":"1","text":"odd","priority":"urgent"}"#).unwrap();
        let numeric: Task = serde_json::from_str(r#"{"id":2,"text":"num","priority":3}"#).unwrap();
        let null: Task = serde_json::from_str(r#"{"id":3,"text":"none","priority":null}"#).unwrap();

        assert_eq!(odd.priority, Some(Priority::Low));
        assert_eq!(numeric.priority, Some(Priority::Low));
        assert_eq!(null.priority, None);
    }

    #[test]
    fn minimal_shape_serializes_without_rich_fields() {
        let task = Task::new(TaskId::Millis(7), "plain".into());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"plain","completed":false}"#);
    }

    #[test]
    fn priority_parses_keys_case_insensitively() {
        assert_eq!(" High ".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
