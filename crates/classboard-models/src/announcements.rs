//! Class announcements.

use serde::{Deserialize, Serialize};

/// An announcement as returned by `GET /api/announcements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<String>,
    #[serde(rename = "classId", default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    pub date: String,
}

impl Announcement {
    /// Whether this announcement targets one of the given class ids.
    ///
    /// Announcements without a class id target nobody in particular and are
    /// filtered out of per-enrollment feeds.
    pub fn targets_any(&self, class_ids: &[&str]) -> bool {
        self.class_id
            .as_deref()
            .is_some_and(|id| class_ids.contains(&id))
    }
}

/// Body of `POST /api/announcements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub teacher: String,
    #[serde(rename = "classId")]
    pub class_id: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(class_id: Option<&str>) -> Announcement {
        Announcement {
            id: Some("a1".into()),
            title: "Quiz Friday".into(),
            content: "Chapters 4-6".into(),
            teacher: Some("Mr. Chen".into()),
            class_id: class_id.map(String::from),
            date: "Jan 5, 2025".into(),
        }
    }

    #[test]
    fn test_targets_any_matches_enrollment() {
        let ann = sample(Some("bio-101"));
        assert!(ann.targets_any(&["bio-101", "math-10th-a"]));
        assert!(!ann.targets_any(&["hist-202"]));
    }

    #[test]
    fn test_untargeted_announcement_matches_nothing() {
        let ann = sample(None);
        assert!(!ann.targets_any(&["bio-101"]));
        assert!(!ann.targets_any(&[]));
    }

    #[test]
    fn test_class_id_wire_name() {
        let json = serde_json::to_string(&sample(Some("art-101"))).unwrap();
        assert!(json.contains(r#""classId":"art-101""#));
    }
}
