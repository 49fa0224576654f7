//! The student dashboard: today's schedule plus recent announcements.
//!
//! Both sections refresh in the background at their own cadence while the
//! dashboard is open. Closing the dashboard drops the feeds and their
//! pollers with it.

use crate::state::AppState;
use crate::views::classes::ENROLLED_CLASS_IDS;
use crate::views::feeds::{AnnouncementsFeed, ScheduleFeed};
use classboard_models::{TodayClass, User};

const RECENT_ANNOUNCEMENTS: usize = 3;

pub struct StudentDashboard {
    name: String,
    announcements: AnnouncementsFeed,
    schedule: ScheduleFeed,
}

impl StudentDashboard {
    pub fn open(state: &AppState, user: &User) -> Self {
        Self {
            name: user.name.clone(),
            announcements: AnnouncementsFeed::open(
                state.api.clone(),
                state.poll.announcements,
            ),
            schedule: ScheduleFeed::open(state.api.clone(), user.id.clone(), state.poll.schedule),
        }
    }

    /// Render against the given wall-clock time, "HH:MM" 24-hour.
    pub fn render(&self, now: &str) -> String {
        let mut out = format!("Welcome back, {}\n\nToday's Classes\n", self.name);

        let today: Vec<TodayClass> = self
            .schedule
            .items()
            .into_iter()
            .map(|item| TodayClass::from_item(item, now))
            .collect();
        if today.is_empty() {
            out.push_str("  No classes scheduled.\n");
        }
        for class in &today {
            let marker = if class.active { "● now  " } else { "       " };
            out.push_str(&format!(
                "  {marker}{}  {} · {} · {}\n",
                class.time, class.subject, class.room, class.teacher
            ));
        }

        out.push_str("\nAnnouncements\n");
        let recent = self
            .announcements
            .for_classes(&ENROLLED_CLASS_IDS, RECENT_ANNOUNCEMENTS);
        if recent.is_empty() {
            out.push_str("  No announcements for your classes.\n");
        }
        for ann in recent {
            out.push_str(&format!("  [{}] {}\n      {}\n", ann.date, ann.title, ann.content));
        }
        out
    }
}

/// Current wall-clock time in the "HH:MM" shape the schedule compares.
pub fn now_hhmm() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
