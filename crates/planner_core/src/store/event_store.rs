//! Per-day calendar event map.
//!
//! # Responsibility
//! - Map each `DateKey` to the ordered events of that day.
//! - Provide append/delete transitions and membership queries.
//!
//! # Invariants
//! - Adding an event is a pure append to the day's list.
//! - No key ever maps to an empty list; deleting the last event of a day
//!   removes the key.
//! - Event ids are unique across the store. Decoding rejects maps that break
//!   either rule and moves the id sequence past every decoded id.

use crate::model::event::{CalendarEvent, DateKey, EventId};
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

type DayMap = BTreeMap<DateKey, Vec<CalendarEvent>>;

/// Value store of events grouped by day.
///
/// Serializes as a JSON object keyed by `year-month-day`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "DayMap", try_from = "DayMap")]
pub struct EventStore {
    by_day: DayMap,
}

impl EventStore {
    /// Events of one day in insertion order; empty when the day has none.
    pub fn events_on(&self, key: &DateKey) -> &[CalendarEvent] {
        self.by_day.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_events(&self, key: &DateKey) -> bool {
        self.by_day.get(key).is_some_and(|events| !events.is_empty())
    }

    /// Days that currently hold at least one event, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = &DateKey> {
        self.by_day.keys()
    }

    /// Total number of events across all days.
    pub fn event_count(&self) -> usize {
        self.by_day.values().map(Vec::len).sum()
    }

    /// Returns a store with a new event appended to `key`, plus its id.
    pub fn add_event(
        &self,
        key: DateKey,
        title: &str,
        description: &str,
    ) -> StoreResult<(Self, EventId)> {
        if title.trim().is_empty() {
            return Err(StoreError::BlankField("title"));
        }

        let event = CalendarEvent::new(title, description);
        let id = event.id;
        let mut by_day = self.by_day.clone();
        by_day.entry(key).or_default().push(event);
        Ok((Self { by_day }, id))
    }

    /// Returns a store without event `id` on `key`.
    ///
    /// The day entry disappears when its last event is removed.
    pub fn delete_event(&self, key: DateKey, id: EventId) -> StoreResult<Self> {
        let not_found = || StoreError::EventNotFound { key, id };
        let events = self.by_day.get(&key).ok_or_else(not_found)?;
        let remaining = events
            .iter()
            .filter(|event| event.id != id)
            .cloned()
            .collect::<Vec<_>>();
        if remaining.len() == events.len() {
            return Err(not_found());
        }

        let mut by_day = self.by_day.clone();
        if remaining.is_empty() {
            by_day.remove(&key);
        } else {
            by_day.insert(key, remaining);
        }
        Ok(Self { by_day })
    }
}

impl From<EventStore> for DayMap {
    fn from(value: EventStore) -> Self {
        value.by_day
    }
}

impl TryFrom<DayMap> for EventStore {
    type Error = StoreError;

    fn try_from(by_day: DayMap) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for (key, events) in &by_day {
            if events.is_empty() {
                return Err(StoreError::EmptyDay(*key));
            }
            if let Some(event) = events.iter().find(|event| !seen.insert(event.id)) {
                return Err(StoreError::DuplicateEventId(event.id));
            }
        }
        if let Some(max) = seen.into_iter().max() {
            EventId::reserve_through(max);
        }
        Ok(Self { by_day })
    }
}

#[cfg(test)]
mod tests {
    use super::{DayMap, EventStore};
    use crate::model::event::{CalendarEvent, DateKey, EventId};
    use crate::store::StoreError;

    fn key(day: u32) -> DateKey {
        DateKey::new(2025, 1, day).expect("valid key")
    }

    #[test]
    fn add_appends_in_order() {
        let (store, first) = EventStore::default()
            .add_event(key(15), "standup", "")
            .unwrap();
        let (store, second) = store.add_event(key(15), "review", "room 2").unwrap();

        let events = store.events_on(&key(15));
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, first);
        assert_eq!(events[1].id, second);
        assert_eq!(events[1].description, "room 2");
    }

    #[test]
    fn add_rejects_blank_title() {
        let err = EventStore::default()
            .add_event(key(1), "   ", "desc")
            .unwrap_err();
        assert_eq!(err, StoreError::BlankField("title"));
    }

    #[test]
    fn delete_keeps_other_events_of_the_day() {
        let (store, first) = EventStore::default().add_event(key(3), "a", "").unwrap();
        let (store, second) = store.add_event(key(3), "b", "").unwrap();

        let store = store.delete_event(key(3), first).unwrap();
        let events = store.events_on(&key(3));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, second);
    }

    #[test]
    fn delete_unknown_event_is_reported() {
        let (store, _) = EventStore::default().add_event(key(3), "a", "").unwrap();
        let missing = EventId(u64::MAX);

        let err = store.delete_event(key(3), missing).unwrap_err();
        assert_eq!(err, StoreError::EventNotFound { key: key(3), id: missing });
        assert!(matches!(
            store.delete_event(key(4), missing),
            Err(StoreError::EventNotFound { .. })
        ));
    }

    #[test]
    fn decoding_rejects_days_without_events() {
        let mut by_day = DayMap::new();
        by_day.insert(key(15), Vec::new());

        let err = EventStore::try_from(by_day).unwrap_err();
        assert_eq!(err, StoreError::EmptyDay(key(15)));
    }

    #[test]
    fn decoding_rejects_repeated_ids() {
        let id = EventId::next();
        let event = |title: &str| CalendarEvent {
            id,
            title: title.to_string(),
            description: String::new(),
        };
        let mut by_day = DayMap::new();
        by_day.insert(key(1), vec![event("a")]);
        by_day.insert(key(2), vec![event("b")]);

        let err = EventStore::try_from(by_day).unwrap_err();
        assert_eq!(err, StoreError::DuplicateEventId(id));
    }

    #[test]
    fn ids_after_decode_do_not_collide_with_restored_ones() {
        let restored = EventId(EventId::next().0 + 1_000);
        let mut by_day = DayMap::new();
        by_day.insert(
            key(15),
            vec![CalendarEvent {
                id: restored,
                title: "restored".to_string(),
                description: String::new(),
            }],
        );
        let store = EventStore::try_from(by_day).unwrap();

        let (store, fresh) = store.add_event(key(15), "fresh", "").unwrap();
        assert!(fresh > restored);

        let store = store.delete_event(key(15), fresh).unwrap();
        let events = store.events_on(&key(15));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, restored);
    }
}
