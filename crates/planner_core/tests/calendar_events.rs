use chrono::NaiveDate;
use planner_core::{CalendarError, CalendarSession, DateKey, EventId, EventStore, YearMonth};

fn january_2025() -> CalendarSession {
    CalendarSession::new(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap())
}

fn key(day: u32) -> DateKey {
    DateKey::new(2025, 1, day).unwrap()
}

#[test]
fn add_then_delete_restores_prior_map() {
    let (base, _) = january_2025()
        .select_day(15)
        .unwrap()
        .add_event("existing", "")
        .unwrap();
    let before = base.events().clone();

    let (added, id) = base
        .select_day(20)
        .unwrap()
        .add_event("dentist", "bring card")
        .unwrap();
    assert!(added.has_events(20));

    let removed = added.delete_event(key(20), id).unwrap();
    assert_eq!(removed.events(), &before);
    assert!(!removed.has_events(20));
    assert_eq!(removed.events().days().collect::<Vec<_>>(), [&key(15)]);
}

#[test]
fn add_event_requires_title_and_selected_day() {
    let session = january_2025();

    let err = session.add_event("lunch", "").unwrap_err();
    assert_eq!(err, CalendarError::NoDaySelected);

    let err = session.select_day(3).unwrap().add_event("  ", "").unwrap_err();
    assert_eq!(err, CalendarError::BlankEventTitle);
}

#[test]
fn draft_event_is_added_and_editor_reset() {
    let session = january_2025()
        .select_day(8)
        .unwrap()
        .set_draft_title("gym")
        .set_draft_description("legs");
    assert!(session.is_editor_open());

    let (next, id) = session.add_draft_event().unwrap();
    assert!(!next.is_editor_open());
    assert!(next.draft().title.is_empty());
    assert_eq!(next.selected_day(), Some(8));

    let events = next.day_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].title, "gym");
    assert_eq!(events[0].description, "legs");
}

#[test]
fn events_append_in_order_per_day() {
    let session = january_2025().select_day(2).unwrap();
    let (session, first) = session.add_event("one", "").unwrap();
    let (session, second) = session.select_day(2).unwrap().add_event("two", "").unwrap();

    let ids = session.day_events().iter().map(|e| e.id).collect::<Vec<_>>();
    assert_eq!(ids, [first, second]);
    assert_eq!(session.events().event_count(), 2);
}

#[test]
fn deleting_unknown_event_leaves_session_unchanged() {
    let session = january_2025();
    let err = session
        .delete_event(key(5), EventId(u64::MAX))
        .unwrap_err();
    assert!(matches!(err, CalendarError::EventNotFound { .. }));
}

#[test]
fn navigation_clears_selection_and_wraps_years() {
    let session = january_2025().select_day(12).unwrap();

    let previous = session.navigate(-1).unwrap();
    assert_eq!(previous.month(), YearMonth::new(2024, 12).unwrap());
    assert_eq!(previous.selected_day(), None);
    assert_eq!(previous.month_title(), "December 2024");

    let next = previous.navigate(2).unwrap();
    assert_eq!(next.month_title(), "February 2025");
}

#[test]
fn swipe_uses_threshold_and_direction() {
    let session = january_2025();
    assert_eq!(session.swipe(-150.0, 100.0).unwrap().month_title(), "February 2025");
    assert_eq!(session.swipe(150.0, 100.0).unwrap().month_title(), "December 2024");
    assert_eq!(session.swipe(-60.0, 100.0).unwrap(), session);
    assert_eq!(session.swipe(100.0, 100.0).unwrap(), session);
}

#[test]
fn padding_cells_cannot_be_selected() {
    let session = january_2025();
    let err = session.select_cell(0, 0).unwrap_err();
    assert_eq!(err, CalendarError::DayOutsideMonth { day: 29 });

    let err = session.select_cell(9, 0).unwrap_err();
    assert_eq!(err, CalendarError::CellOutOfBounds { week: 9, column: 0 });

    let selected = session.select_cell(0, 3).unwrap();
    assert_eq!(selected.selected_day(), Some(1));
    assert!(selected.is_editor_open());

    assert!(session.select_day(32).is_err());
    assert!(session.select_day(0).is_err());
}

#[test]
fn month_view_flags_today_selection_and_events() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let (session, _) = january_2025()
        .select_day(31)
        .unwrap()
        .add_event("party", "")
        .unwrap();
    let view = session.month_view(today);

    assert_eq!(view.title, "January 2025");
    assert_eq!(view.weeks.len(), 5);
    assert!(view.weeks.iter().all(|week| week.len() == 7));

    let cells = view.weeks.iter().flatten().collect::<Vec<_>>();
    let today_cells = cells.iter().filter(|cell| cell.is_today).collect::<Vec<_>>();
    assert_eq!(today_cells.len(), 1);
    assert_eq!(today_cells[0].day, 10);

    // Day 31 appears twice: December padding and January's last day.
    let thirty_firsts = cells.iter().filter(|cell| cell.day == 31).collect::<Vec<_>>();
    assert_eq!(thirty_firsts.len(), 2);
    assert!(!thirty_firsts[0].in_month);
    assert!(!thirty_firsts[0].has_events);
    assert!(!thirty_firsts[0].is_selected);
    assert!(thirty_firsts[1].in_month);
    assert!(thirty_firsts[1].has_events);
    assert!(thirty_firsts[1].is_selected);

    assert!(view.weeks[0][0].is_sunday());
    assert!(view.weeks[0][6].is_saturday());
}

#[test]
fn today_is_not_flagged_in_other_months() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let view = january_2025().navigate(1).unwrap().month_view(today);
    assert!(view.weeks.iter().flatten().all(|cell| !cell.is_today));
}

#[test]
fn existing_store_is_shown_for_its_month() {
    let (store, _) = EventStore::default()
        .add_event(DateKey::new(2025, 3, 4).unwrap(), "trip", "")
        .unwrap();
    let session = CalendarSession::with_events(YearMonth::new(2025, 3).unwrap(), store);
    assert!(session.has_events(4));
    assert!(!session.has_events(5));
    assert!(!session.navigate(1).unwrap().has_events(4));
}
