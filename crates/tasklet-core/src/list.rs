use crate::task::{Task, TaskId};

/// One entry of the rendered list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry<'a> {
    /// Keyed by the task id so row-local edit state follows the task across
    /// re-renders.
    Row { key: String, task: &'a Task },
    Placeholder,
}

/// Lazily maps the visible list to rows, or to a single placeholder when
/// nothing is visible.
pub fn list_entries<'a>(visible: &'a [&'a Task]) -> impl Iterator<Item = ListEntry<'a>> + 'a {
    let placeholder = visible.is_empty().then_some(ListEntry::Placeholder);
    visible
        .iter()
        .copied()
        .map(|task| ListEntry::Row {
            key: row_key(&task.id),
            task,
        })
        .chain(placeholder)
}

/// Numeric and text ids with the same digits still get distinct keys.
fn row_key(id: &TaskId) -> String {
    match id {
        TaskId::Millis(value) => format!("n{value}"),
        TaskId::Text(raw) => format!("s{raw}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_one_placeholder() {
        let entries: Vec<_> = list_entries(&[]).collect();
        assert_eq!(entries, vec![ListEntry::Placeholder]);
    }

    #[test]
    fn rows_are_keyed_by_id_in_order() {
        let a = Task::new(TaskId::Millis(10), "a".into());
        let b = Task::new(TaskId::Text("11".into()), "b".into());
        let visible = vec![&a, &b];

        let keys: Vec<_> = list_entries(&visible)
            .map(|entry| match entry {
                ListEntry::Row { key, .. } => key,
                ListEntry::Placeholder => "placeholder".to_string(),
            })
            .collect();

        assert_eq!(keys, vec!["n10", "s11"]);
    }

    #[test]
    fn mixed_id_shapes_never_share_a_key() {
        let numeric = Task::new(TaskId::Millis(5), "numeric".into());
        let text = Task::new(TaskId::Text("5".into()), "text".into());
        let visible = vec![&numeric, &text];

        let keys: Vec<_> = list_entries(&visible)
            .filter_map(|entry| match entry {
                ListEntry::Row { key, .. } => Some(key),
                ListEntry::Placeholder => None,
            })
            .collect();

        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }
}
