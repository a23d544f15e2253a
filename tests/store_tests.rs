//! Integration tests for the event store

use chrono::NaiveDate;
use tempfile::TempDir;

use event_timeline::{EventDraft, EventStore, StoreError, TimelineEvent, WindowQuery};

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn draft(title: &str, description: &str, date: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
    }
}

/// Ten events dated 2020-01-01 .. 2020-01-10, ids 1..=10
fn january_events() -> Vec<TimelineEvent> {
    (1..=10)
        .map(|i| {
            TimelineEvent::new(
                i,
                format!("Event {:02}", i),
                format!("Description {:02}", i),
                d(&format!("2020-01-{:02}", i)),
            )
        })
        .collect()
}

fn setup(seed: Vec<TimelineEvent>) -> (EventStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store =
        EventStore::open_with_seed(temp_dir.path().join("timeline.jsonl"), seed).unwrap();
    (store, temp_dir)
}

#[test]
fn test_default_window_centers_on_middle() {
    let (store, _dir) = setup(january_events());

    let window = store
        .window(WindowQuery::Centered { cursor: None }, 4)
        .unwrap();

    let dates: Vec<String> = window.events.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2020-01-04", "2020-01-05", "2020-01-06", "2020-01-07"]
    );
    assert!(window.has_more_past);
    assert!(window.has_more_future);
}

#[test]
fn test_window_centered_on_cursor() {
    let (store, _dir) = setup(january_events());

    let window = store
        .window(WindowQuery::Centered { cursor: Some(2) }, 4)
        .unwrap();

    // Anchor near the head: window shifts so a full 4 events come back
    assert_eq!(window.events.len(), 4);
    assert_eq!(window.events[0].date, d("2020-01-01"));
    assert!(!window.has_more_past);
    assert!(window.has_more_future);
}

#[test]
fn test_around_date_anchors_at_head() {
    let (store, _dir) = setup(january_events());

    let window = store
        .window(
            WindowQuery::AroundDate {
                date: d("2020-01-01"),
            },
            4,
        )
        .unwrap();

    let dates: Vec<String> = window.events.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2020-01-01", "2020-01-02", "2020-01-03", "2020-01-04"]
    );
    assert!(!window.has_more_past);
    assert!(window.has_more_future);
}

#[test]
fn test_around_date_past_end_anchors_on_last() {
    let (store, _dir) = setup(january_events());

    let window = store
        .window(
            WindowQuery::AroundDate {
                date: d("2021-06-01"),
            },
            4,
        )
        .unwrap();

    let dates: Vec<String> = window.events.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(
        dates,
        vec!["2020-01-07", "2020-01-08", "2020-01-09", "2020-01-10"]
    );
    assert!(window.has_more_past);
    assert!(!window.has_more_future);
}

#[test]
fn test_past_window_precedes_cursor() {
    let (store, _dir) = setup(january_events());

    // Cursor on the event dated 2020-01-06
    let window = store.window(WindowQuery::Past { cursor: 6 }, 3).unwrap();

    let dates: Vec<String> = window.events.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2020-01-03", "2020-01-04", "2020-01-05"]);
    // Directional disjointness: nothing at or after the cursor's date
    assert!(window.events.iter().all(|e| e.date < d("2020-01-06")));
    assert!(window.has_more_past);
    // Flags come from the slice's absolute indices: the cursor itself lies
    // beyond the window
    assert!(window.has_more_future);
}

#[test]
fn test_past_window_truncated_at_head() {
    let (store, _dir) = setup(january_events());

    let window = store.window(WindowQuery::Past { cursor: 2 }, 5).unwrap();

    assert_eq!(window.events.len(), 1);
    assert_eq!(window.events[0].date, d("2020-01-01"));
    assert!(!window.has_more_past);
    assert!(window.has_more_future);
}

#[test]
fn test_future_window_follows_cursor() {
    let (store, _dir) = setup(january_events());

    let window = store.window(WindowQuery::Future { cursor: 6 }, 3).unwrap();

    let dates: Vec<String> = window.events.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(dates, vec!["2020-01-07", "2020-01-08", "2020-01-09"]);
    assert!(window.events.iter().all(|e| e.date > d("2020-01-06")));
    assert!(window.has_more_past);
    assert!(window.has_more_future);
}

#[test]
fn test_future_window_at_tail_is_empty() {
    let (store, _dir) = setup(january_events());

    let window = store.window(WindowQuery::Future { cursor: 10 }, 3).unwrap();

    assert!(window.events.is_empty());
    assert!(!window.has_more_future);
}

#[test]
fn test_unknown_cursor_is_not_found() {
    let (store, _dir) = setup(january_events());

    for query in [
        WindowQuery::Centered { cursor: Some(999) },
        WindowQuery::Past { cursor: 999 },
        WindowQuery::Future { cursor: 999 },
    ] {
        let err = store.window(query, 4).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }
}

#[test]
fn test_limit_defaults_and_caps() {
    let seed: Vec<TimelineEvent> = (1..=60)
        .map(|i| {
            TimelineEvent::new(
                i,
                format!("Event {}", i),
                "filler".to_string(),
                d("2020-01-01") + chrono::Days::new(i),
            )
        })
        .collect();
    let (store, _dir) = setup(seed);

    // limit 0 falls back to the default window size
    let window = store
        .window(WindowQuery::Centered { cursor: None }, 0)
        .unwrap();
    assert_eq!(window.events.len(), event_timeline::DEFAULT_WINDOW_SIZE);

    // oversized limits are capped
    let window = store
        .window(WindowQuery::Centered { cursor: None }, 1000)
        .unwrap();
    assert_eq!(window.events.len(), event_timeline::MAX_WINDOW_SIZE);
}

#[test]
fn test_empty_collection_returns_empty_window() {
    let (store, _dir) = setup(Vec::new());

    let window = store
        .window(WindowQuery::Centered { cursor: None }, 8)
        .unwrap();
    assert!(window.events.is_empty());
    assert!(!window.has_more_past);
    assert!(!window.has_more_future);

    let window = store
        .window(
            WindowQuery::AroundDate {
                date: d("2020-01-01"),
            },
            8,
        )
        .unwrap();
    assert!(window.events.is_empty());
    assert!(!window.has_more_past);
    assert!(!window.has_more_future);
}

#[test]
fn test_create_sorts_and_round_trips() {
    let (store, _dir) = setup(january_events());

    let created = store
        .create(&draft("Mid-month launch", "Inserted out of order", "2020-01-05"))
        .unwrap();
    assert_eq!(created.date, d("2020-01-05"));

    // Sort invariant holds after the insert
    let snapshot = store.snapshot();
    assert!(snapshot.windows(2).all(|w| w[0].date <= w[1].date));

    // Round-trip: a window anchored on the new event's date contains it
    let window = store
        .window(
            WindowQuery::AroundDate {
                date: created.date,
            },
            4,
        )
        .unwrap();
    assert!(window.events.iter().any(|e| e.id == created.id));
}

#[test]
fn test_create_rejects_invalid_payloads() {
    let (store, _dir) = setup(january_events());
    let before = store.len();

    for bad in [
        draft("", "desc", "2020-01-01"),
        draft("title", "   ", "2020-01-01"),
        draft("title", "desc", "not-a-date"),
    ] {
        let err = store.create(&bad).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }

    // Failed validation never mutates the collection
    assert_eq!(store.len(), before);
}

#[test]
fn test_update_replaces_fields_and_resorts() {
    let (store, _dir) = setup(january_events());

    let updated = store
        .update(1, &draft("Moved", "Now at the tail", "2020-02-01"))
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.title, "Moved");
    assert_eq!(updated.date, d("2020-02-01"));

    let snapshot = store.snapshot();
    assert!(snapshot.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(snapshot.last().unwrap().id, 1);
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let (store, _dir) = setup(january_events());

    let err = store
        .update(999, &draft("t", "d", "2020-01-01"))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_delete_returns_removed_event() {
    let (store, _dir) = setup(january_events());

    let removed = store.delete(3).unwrap();
    assert_eq!(removed.id, 3);
    assert_eq!(store.len(), 9);
    assert!(store.snapshot().iter().all(|e| e.id != 3));
}

#[test]
fn test_delete_unknown_id_leaves_collection_unchanged() {
    let (store, _dir) = setup(january_events());
    let before = store.snapshot();

    let err = store.delete(999).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let after = store.snapshot();
    assert_eq!(before.len(), after.len());
    assert!(before
        .iter()
        .zip(after.iter())
        .all(|(a, b)| a.id == b.id && a.date == b.date));
}

#[test]
fn test_search_matches_title_and_description() {
    let seed = vec![
        TimelineEvent::new(1, "Product Launch", "First release", d("2020-03-01")),
        TimelineEvent::new(2, "Retrospective", "Review of the launch week", d("2020-03-08")),
        TimelineEvent::new(3, "Offsite", "Team planning", d("2020-04-01")),
    ];
    let (store, _dir) = setup(seed);

    let results = store.search("LAUNCH", 8).unwrap();
    let ids: Vec<u64> = results.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2]);
    // Ascending date order
    assert!(results.windows(2).all(|w| w[0].date <= w[1].date));
}

#[test]
fn test_search_truncates_to_limit() {
    let (store, _dir) = setup(january_events());

    let results = store.search("Event", 3).unwrap();
    assert_eq!(results.len(), 3);
}

#[test]
fn test_search_rejects_blank_query() {
    let (store, _dir) = setup(january_events());

    for blank in ["", "   "] {
        let err = store.search(blank, 8).unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
    }
}

#[test]
fn test_seed_bootstrap_persists_immediately() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("timeline.jsonl");

    let store = EventStore::open_at(&path).unwrap();
    assert!(!store.is_empty());
    assert!(path.exists());

    // A reopened store reads the persisted seed, not a fresh bootstrap
    let count = store.len();
    drop(store);
    let reopened = EventStore::open_at(&path).unwrap();
    assert_eq!(reopened.len(), count);
}

#[test]
fn test_mutations_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("timeline.jsonl");

    let store = EventStore::open_with_seed(&path, january_events()).unwrap();
    let created = store
        .create(&draft("Persisted", "Should survive reopen", "2020-01-15"))
        .unwrap();
    store.delete(1).unwrap();
    drop(store);

    let reopened = EventStore::open_with_seed(&path, Vec::new()).unwrap();
    assert_eq!(reopened.len(), 10);
    assert!(reopened.snapshot().iter().any(|e| e.id == created.id));
    assert!(reopened.snapshot().iter().all(|e| e.id != 1));
}

#[test]
fn test_minted_ids_stay_unique_across_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("timeline.jsonl");

    let store = EventStore::open_with_seed(&path, january_events()).unwrap();
    let first = store.create(&draft("a", "b", "2020-02-01")).unwrap();
    drop(store);

    let reopened = EventStore::open_with_seed(&path, Vec::new()).unwrap();
    let second = reopened.create(&draft("c", "d", "2020-02-02")).unwrap();
    assert!(second.id > first.id);
}
