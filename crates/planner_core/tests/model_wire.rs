use chrono::NaiveDate;
use planner_core::{DateKey, EventId, EventStore, Note};
use uuid::Uuid;

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let note = Note::with_id(
        id,
        "Groceries",
        "eggs",
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
    );

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Groceries");
    assert_eq!(json["content"], "eggs");
    assert_eq!(json["date"], "2025-01-15");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn event_store_serializes_as_object_keyed_by_date_key() {
    let (store, id) = EventStore::default()
        .add_event(DateKey::new(2025, 1, 15).unwrap(), "Meeting", "")
        .unwrap();

    let json = serde_json::to_value(&store).unwrap();
    let day = &json["2025-1-15"];
    assert_eq!(day[0]["id"], id.0);
    assert_eq!(day[0]["title"], "Meeting");
    assert_eq!(day[0]["description"], "");

    let decoded: EventStore = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, store);
}

#[test]
fn padded_date_key_is_rejected_on_decode() {
    let value = serde_json::json!({
        "2025-01-15": [{ "id": 1, "title": "x", "description": "" }]
    });
    let err = serde_json::from_value::<EventStore>(value).unwrap_err();
    assert!(err.to_string().contains("invalid date key"), "{err}");
}

#[test]
fn day_without_events_is_rejected_on_decode() {
    let value = serde_json::json!({ "2025-1-15": [] });
    let err = serde_json::from_value::<EventStore>(value).unwrap_err();
    assert!(err.to_string().contains("listed without events"), "{err}");
}

#[test]
fn restored_event_survives_deleting_a_newer_one() {
    let restored_id = EventId::next().0 + 1;
    let value = serde_json::json!({
        "2025-1-15": [{ "id": restored_id, "title": "restored", "description": "" }]
    });
    let store: EventStore = serde_json::from_value(value).unwrap();
    let key = DateKey::new(2025, 1, 15).unwrap();

    let (store, fresh) = store.add_event(key, "fresh", "").unwrap();
    assert_ne!(fresh, EventId(restored_id));

    let store = store.delete_event(key, fresh).unwrap();
    let events = store.events_on(&key);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, EventId(restored_id));
}
