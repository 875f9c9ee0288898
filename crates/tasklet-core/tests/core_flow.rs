use chrono::{TimeZone, Utc};
use tasklet_core::config::{AppConfig, Variant};
use tasklet_core::filter::StatusFilter;
use tasklet_core::list::{ListEntry, list_entries};
use tasklet_core::persist::{encode_tasks, parse_tasks};
use tasklet_core::state::{Action, TodoSession};
use tasklet_core::store::MemoryStore;
use tasklet_core::task::{Priority, TaskId};
use tasklet_core::theme::Theme;

#[test]
fn rich_session_survives_reload() {
    let now = Utc.with_ymd_and_hms(2026, 5, 10, 8, 30, 0).unwrap();
    let config = AppConfig::for_variant(Variant::Rich);
    let store = MemoryStore::new();

    let mut session = TodoSession::open(&config, store.clone());
    let _ = session.dispatch(Action::SetDraftText("Water plants".to_string()), now);
    let _ = session.dispatch(Action::SetDraftPriority(Priority::High), now);
    let _ = session.dispatch(Action::Submit, now);
    let _ = session.dispatch(
        Action::Add {
            text: "Call mom".to_string(),
            priority: None,
        },
        now,
    );
    let water = session.state().tasks()[1].id.clone();
    let _ = session.dispatch(Action::Toggle(water.clone()), now);
    let _ = session.dispatch(Action::ToggleTheme, now);

    let reopened = TodoSession::open(&config, store.clone());
    let state = reopened.state();

    assert_eq!(state.tasks(), session.state().tasks());
    assert_eq!(state.theme(), Theme::Dark);
    assert_eq!(state.tasks()[0].text, "Call mom");
    assert_eq!(state.task(&water).map(|t| t.completed), Some(true));
    assert_eq!(state.task(&water).and_then(|t| t.priority), Some(Priority::High));

    let stats = state.stats();
    assert_eq!((stats.total, stats.completed, stats.pending), (2, 1, 1));
}

#[test]
fn reads_lists_written_by_both_variants() {
    let minimal_raw = r#"[{"id":1700000000002,"text":"Second","completed":false},{"id":1700000000001,"text":"First","completed":true}]"#;
    let rich_raw = r#"[{"id":"1700000000005","text":"Rich","completed":false,"time":"2023-11-14T22:13:20.005Z","priority":"medium"}]"#;

    let minimal = TodoSession::open(
        &AppConfig::for_variant(Variant::Minimal),
        MemoryStore::new().with_entry("tasks", minimal_raw),
    );
    assert_eq!(minimal.state().tasks().len(), 2);
    assert_eq!(minimal.state().tasks()[0].id, TaskId::Millis(1_700_000_000_002));

    let rich = TodoSession::open(
        &AppConfig::for_variant(Variant::Rich),
        MemoryStore::new()
            .with_entry("my_todos_v1", rich_raw)
            .with_entry("my_todos_theme_v1", "light"),
    );
    assert_eq!(rich.state().tasks()[0].effective_priority(), Priority::Medium);
    assert_eq!(rich.state().theme(), Theme::Light);

    let reencoded = encode_tasks(minimal.state().tasks()).unwrap();
    assert_eq!(reencoded, minimal_raw);
}

#[test]
fn corrupt_storage_starts_empty_and_recovers() {
    let now = Utc.with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap();
    let store = MemoryStore::new().with_entry("tasks", "{not json");
    let config = AppConfig::for_variant(Variant::Minimal);

    let mut session = TodoSession::open(&config, store.clone());
    assert!(session.state().tasks().is_empty());

    let _ = session.dispatch(
        Action::Add {
            text: "fresh start".to_string(),
            priority: None,
        },
        now,
    );

    let stored = parse_tasks(&store.get("tasks").unwrap()).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].text, "fresh start");
}

#[test]
fn visible_rows_follow_filter_and_search() {
    let now = Utc.with_ymd_and_hms(2026, 5, 10, 10, 0, 0).unwrap();
    let config = AppConfig::for_variant(Variant::Minimal);
    let mut session = TodoSession::open(&config, MemoryStore::new());

    for text in ["Buy bread", "Book dentist", "Buy stamps"] {
        let _ = session.dispatch(
            Action::Add {
                text: text.to_string(),
                priority: None,
            },
            now,
        );
    }
    let _ = session.dispatch(Action::SetSearch("buy".to_string()), now);
    let _ = session.dispatch(Action::SetFilter(StatusFilter::Active), now);

    let visible = session.state().visible();
    let texts: Vec<_> = list_entries(&visible)
        .filter_map(|entry| match entry {
            ListEntry::Row { task, .. } => Some(task.text.as_str()),
            ListEntry::Placeholder => None,
        })
        .collect();
    assert_eq!(texts, vec!["Buy stamps", "Buy bread"]);

    let _ = session.dispatch(Action::SetFilter(StatusFilter::Completed), now);
    let visible = session.state().visible();
    let entries: Vec<_> = list_entries(&visible).collect();
    assert_eq!(entries, vec![ListEntry::Placeholder]);
}

#[test]
fn unknown_priority_survives_the_next_write() {
    let now = Utc.with_ymd_and_hms(2026, 5, 11, 9, 0, 0).unwrap();
    let raw = r#"[{"id":"1","text":"Old one","completed":false,"priority":"urgent"},{"id":"2","text":"Old two","completed":false,"priority":"low"}]"#;
    let config = AppConfig::for_variant(Variant::Rich);
    let store = MemoryStore::new().with_entry("my_todos_v1", raw);

    let mut session = TodoSession::open(&config, store.clone());
    assert_eq!(session.state().tasks().len(), 2);
    let _ = session.dispatch(
        Action::Add {
            text: "New".to_string(),
            priority: None,
        },
        now,
    );

    let stored = parse_tasks(&store.get("my_todos_v1").unwrap()).unwrap();
    let texts: Vec<_> = stored.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["New", "Old one", "Old two"]);
}
