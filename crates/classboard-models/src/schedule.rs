//! Class schedule items and the derived "today" view.

use serde::{Deserialize, Serialize};

/// A schedule entry as returned by `GET /api/student/schedule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "classId", default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    pub subject: String,
    pub room: String,
    pub teacher: String,
    /// Start of the slot, "HH:MM" 24-hour.
    pub start: String,
    /// End of the slot, "HH:MM" 24-hour.
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// A schedule entry annotated with whether it is in progress right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayClass {
    pub class_id: Option<String>,
    pub subject: String,
    pub room: String,
    pub teacher: String,
    pub start: String,
    pub end: String,
    pub time: String,
    pub active: bool,
}

impl TodayClass {
    /// Annotate a schedule item against the current wall-clock time.
    ///
    /// `now` is "HH:MM" 24-hour; zero-padded times compare correctly as
    /// strings, the same trick the slot boundaries rely on.
    pub fn from_item(item: ScheduleItem, now: &str) -> Self {
        let active = now >= item.start.as_str() && now <= item.end.as_str();
        let time = item
            .time
            .clone()
            .unwrap_or_else(|| format!("{} - {}", item.start, item.end));
        Self {
            class_id: item.class_id.or(item.id),
            subject: item.subject,
            room: item.room,
            teacher: item.teacher,
            start: item.start,
            end: item.end,
            time,
            active,
        }
    }
}
