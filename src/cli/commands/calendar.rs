//! Calendar command - group events for display

use std::path::Path;

use chrono::NaiveDate;

use crate::calendar::{events_in_range, group_by_day};
use crate::errors::Result;
use crate::fs::read_json;
use crate::schemas::{CalendarEvent, Config};

use super::print_json;

/// Print events grouped by day and category
pub fn group(
    config: &Config,
    file: &Path,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let mut events: Vec<CalendarEvent> = read_json(file)?;
    if from.is_some() || to.is_some() {
        events = events_in_range(
            &events,
            from.unwrap_or(NaiveDate::MIN),
            to.unwrap_or(NaiveDate::MAX),
        );
    }
    print_json(&group_by_day(&events, &config.other_projects_label))
}
