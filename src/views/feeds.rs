//! Poll-backed caches of backend data.
//!
//! A feed pairs a snapshot of the latest fetched data with the poller that
//! keeps it fresh. Fetch failures leave the previous snapshot in place and
//! log at warn; the first successful poll fills it in.

use crate::poller::Poller;
use classboard_api::ApiClient;
use classboard_models::{Announcement, ScheduleItem};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::warn;

type Shared<T> = Arc<RwLock<Vec<T>>>;

fn snapshot<T: Clone>(data: &Shared<T>) -> Vec<T> {
    data.read().unwrap_or_else(|e| e.into_inner()).clone()
}

fn replace<T>(data: &Shared<T>, fresh: Vec<T>) {
    *data.write().unwrap_or_else(|e| e.into_inner()) = fresh;
}

/// All announcements, refreshed on the announcements cadence.
pub struct AnnouncementsFeed {
    data: Shared<Announcement>,
    _poller: Poller,
}

impl AnnouncementsFeed {
    pub fn open(api: Arc<ApiClient>, period: Duration) -> Self {
        let data: Shared<Announcement> = Arc::new(RwLock::new(Vec::new()));
        let sink = Arc::clone(&data);
        let poller = Poller::spawn(period, move || {
            let api = Arc::clone(&api);
            let sink = Arc::clone(&sink);
            async move {
                match api.announcements().await {
                    Ok(list) => replace(&sink, list),
                    Err(err) => warn!(%err, "announcements poll failed"),
                }
            }
        });
        Self {
            data,
            _poller: poller,
        }
    }

    pub fn all(&self) -> Vec<Announcement> {
        snapshot(&self.data)
    }

    /// Newest-first announcements touching any of `class_ids`, capped at
    /// `limit`. The backend returns newest first, so order is preserved.
    pub fn for_classes(&self, class_ids: &[&str], limit: usize) -> Vec<Announcement> {
        self.all()
            .into_iter()
            .filter(|a| a.targets_any(class_ids))
            .take(limit)
            .collect()
    }
}

/// One student's schedule, refreshed on the schedule cadence.
pub struct ScheduleFeed {
    data: Shared<ScheduleItem>,
    _poller: Poller,
}

impl ScheduleFeed {
    pub fn open(api: Arc<ApiClient>, student_id: String, period: Duration) -> Self {
        let data: Shared<ScheduleItem> = Arc::new(RwLock::new(Vec::new()));
        let sink = Arc::clone(&data);
        let poller = Poller::spawn(period, move || {
            let api = Arc::clone(&api);
            let sink = Arc::clone(&sink);
            let student_id = student_id.clone();
            async move {
                match api.student_schedule(&student_id).await {
                    Ok(list) => replace(&sink, list),
                    Err(err) => warn!(%err, "schedule poll failed"),
                }
            }
        });
        Self {
            data,
            _poller: poller,
        }
    }

    pub fn items(&self) -> Vec<ScheduleItem> {
        snapshot(&self.data)
    }
}
