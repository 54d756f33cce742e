//! Calendar event aggregation
//!
//! Groups a flat event list by day and by category for the calendar views.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::schemas::{CalendarEvent, EventKind};

/// Events sharing one category label
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCategory {
    pub label: String,
    pub events: Vec<CalendarEvent>,
}

impl EventCategory {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Category an event is listed under.
///
/// Project due dates group by service, with `other_label` for projects
/// without one; every other kind has a fixed category.
pub fn category_label(event: &CalendarEvent, other_label: &str) -> String {
    match event.kind {
        EventKind::ProjectDue => event
            .service_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(other_label)
            .to_string(),
        EventKind::StageDeadline => "Stage Deadlines".to_string(),
        EventKind::TargetDelivery => "Target Delivery Dates".to_string(),
        EventKind::TaskDue => "Tasks".to_string(),
        EventKind::Outlook => "Outlook Calendar".to_string(),
    }
}

/// Group events into categories, largest first.
///
/// Categories of equal size keep the order in which they first appear.
pub fn group_by_category(events: &[CalendarEvent], other_label: &str) -> Vec<EventCategory> {
    let mut categories: Vec<EventCategory> = Vec::new();

    for event in events {
        let label = category_label(event, other_label);
        match categories.iter_mut().find(|c| c.label == label) {
            Some(category) => category.events.push(event.clone()),
            None => categories.push(EventCategory {
                label,
                events: vec![event.clone()],
            }),
        }
    }

    categories.sort_by(|a, b| b.len().cmp(&a.len()));
    categories
}

/// Group events by day, then by category within each day
pub fn group_by_day(
    events: &[CalendarEvent],
    other_label: &str,
) -> BTreeMap<NaiveDate, Vec<EventCategory>> {
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        days.entry(event.date).or_default().push(event.clone());
    }

    days.into_iter()
        .map(|(day, events)| (day, group_by_category(&events, other_label)))
        .collect()
}

/// Events falling on or between `start` and `end`
pub fn events_in_range(
    events: &[CalendarEvent],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OTHER: &str = "Other Projects";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn due(id: &str, d: u32, service: Option<&str>) -> CalendarEvent {
        let event =
            CalendarEvent::new(id, format!("Project {}", id), day(d), EventKind::ProjectDue);
        match service {
            Some(s) => event.with_service(s),
            None => event,
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(category_label(&due("1", 1, Some("VAT")), OTHER), "VAT");
        assert_eq!(category_label(&due("2", 1, None), OTHER), "Other Projects");
        assert_eq!(category_label(&due("3", 1, Some("  ")), OTHER), "Other Projects");

        let task = CalendarEvent::new("t", "Chase docs", day(1), EventKind::TaskDue);
        assert_eq!(category_label(&task, OTHER), "Tasks");
        let meeting = CalendarEvent::new("o", "Client call", day(1), EventKind::Outlook);
        assert_eq!(category_label(&meeting, OTHER), "Outlook Calendar");
    }

    #[test]
    fn test_group_by_category_sorted_by_size() {
        let events = vec![
            due("1", 1, Some("VAT")),
            CalendarEvent::new("t1", "Task", day(1), EventKind::TaskDue),
            due("2", 1, Some("Payroll")),
            due("3", 1, Some("Payroll")),
            due("4", 1, Some("Payroll")),
            CalendarEvent::new("t2", "Task", day(1), EventKind::TaskDue),
        ];

        let groups = group_by_category(&events, OTHER);
        let summary: Vec<(&str, usize)> =
            groups.iter().map(|g| (g.label.as_str(), g.len())).collect();
        assert_eq!(summary, vec![("Payroll", 3), ("Tasks", 2), ("VAT", 1)]);
    }

    #[test]
    fn test_equal_sized_categories_keep_first_seen_order() {
        let events = vec![
            CalendarEvent::new("d", "Deadline", day(1), EventKind::StageDeadline),
            due("1", 1, None),
            CalendarEvent::new("x", "Delivery", day(1), EventKind::TargetDelivery),
        ];
        let labels: Vec<String> = group_by_category(&events, OTHER)
            .into_iter()
            .map(|g| g.label)
            .collect();
        assert_eq!(labels, vec!["Stage Deadlines", "Other Projects", "Target Delivery Dates"]);
    }

    #[test]
    fn test_group_by_day() {
        let events = vec![due("1", 3, Some("VAT")), due("2", 1, None), due("3", 3, Some("VAT"))];
        let days = group_by_day(&events, OTHER);

        assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![day(1), day(3)]);
        assert_eq!(days[&day(3)][0].label, "VAT");
        assert_eq!(days[&day(3)][0].len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(group_by_category(&[], OTHER).is_empty());
        assert!(group_by_day(&[], OTHER).is_empty());
    }

    #[test]
    fn test_events_in_range_is_inclusive() {
        let events = vec![due("1", 1, None), due("2", 5, None), due("3", 9, None)];
        let ids: Vec<String> = events_in_range(&events, day(1), day(5))
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
