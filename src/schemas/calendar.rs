//! Calendar schema - events shown on the calendar views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Source of a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Project due date
    ProjectDue,
    /// Deadline for the project's current stage
    StageDeadline,
    /// Target delivery date agreed with the client
    TargetDelivery,
    /// Internal task due date
    TaskDue,
    /// Event federated from an Outlook calendar
    Outlook,
}

/// A single calendar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub kind: EventKind,

    /// Service the project belongs to; only meaningful for project-due events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl CalendarEvent {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        kind: EventKind,
    ) -> Self {
        CalendarEvent {
            id: id.into(),
            title: title.into(),
            date,
            kind,
            service_name: None,
            project_id: None,
        }
    }

    pub fn with_service(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }
}
