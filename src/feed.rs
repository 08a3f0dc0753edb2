//! Activity Feed Grouping
//!
//! Backend log events newest first, bucketed by calendar day.

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{parse_timestamp, LogEvent};

/// Events of one day, newest first. `day` is `None` for events whose
/// timestamp could not be read; that bucket always comes last.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub day: Option<NaiveDate>,
    pub events: Vec<(Option<NaiveDateTime>, LogEvent)>,
}

impl DayGroup {
    pub fn label(&self) -> String {
        match self.day {
            Some(day) => day.format("%a, %b %-d %Y").to_string(),
            None => "Unknown date".to_string(),
        }
    }
}

/// "HH:MM" for a parsed event time
pub fn time_label(at: Option<NaiveDateTime>) -> String {
    at.map(|t| t.format("%H:%M").to_string()).unwrap_or_else(|| "--:--".to_string())
}

pub fn group_by_day(events: &[LogEvent]) -> Vec<DayGroup> {
    let mut stamped: Vec<(Option<NaiveDateTime>, LogEvent)> = events
        .iter()
        .map(|ev| (parse_timestamp(&ev.timestamp), ev.clone()))
        .collect();
    // Newest first; unparsable (None) sorts last. Stable for ties.
    stamped.sort_by(|a, b| b.0.cmp(&a.0));

    let mut groups: Vec<DayGroup> = Vec::new();
    for (at, ev) in stamped {
        let day = at.map(|t| t.date());
        match groups.last_mut() {
            Some(group) if group.day == day => group.events.push((at, ev)),
            _ => groups.push(DayGroup { day, events: vec![(at, ev)] }),
        }
    }
    groups
}
