//! Parent access links and per-child summaries.

use serde::{Deserialize, Serialize};

/// A grant of visibility from a student to a parent email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "studentId")]
    pub student_id: String,
    #[serde(rename = "parentEmail")]
    pub parent_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ParentLink {
    /// Display name for the link: the nickname when one is set, otherwise
    /// the parent's email.
    pub fn display_name(&self) -> &str {
        self.nickname.as_deref().unwrap_or(&self.parent_email)
    }
}

/// One class a child is enrolled in, with its current grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildClass {
    pub name: String,
    /// Grade as a percentage string, e.g. "85%".
    pub grade: String,
}

/// Summary of one child as returned by `GET /api/parent/children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentChild {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    /// Attendance as a percent or numeric string.
    pub attendance: String,
    /// GPA as a numeric string.
    pub gpa: String,
    /// "Good", "Needs Attention", or a free-form status.
    pub status: String,
    #[serde(default)]
    pub classes: Vec<ChildClass>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alerts: Option<u32>,
}

impl ParentChild {
    pub fn needs_attention(&self) -> bool {
        self.status == "Needs Attention"
    }

    /// Attendance parsed as a number, tolerating a trailing percent sign.
    pub fn attendance_value(&self) -> Option<f64> {
        self.attendance.trim_end_matches('%').trim().parse().ok()
    }

    pub fn gpa_value(&self) -> Option<f64> {
        self.gpa.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_display_name_prefers_nickname() {
        let link = ParentLink {
            id: None,
            student_id: "3".into(),
            parent_email: "dad@example.com".into(),
            nickname: Some("Dad".into()),
            created_at: "2025-01-05T00:00:00Z".into(),
        };
        assert_eq!(link.display_name(), "Dad");
    }

    #[test]
    fn test_link_display_name_falls_back_to_email() {
        let link = ParentLink {
            id: None,
            student_id: "3".into(),
            parent_email: "dad@example.com".into(),
            nickname: None,
            created_at: "2025-01-05T00:00:00Z".into(),
        };
        assert_eq!(link.display_name(), "dad@example.com");
    }

    #[test]
    fn test_link_wire_names() {
        let json = r#"{"studentId":"3","parentEmail":"p@x.com","createdAt":"2025-01-05"}"#;
        let link: ParentLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.student_id, "3");
        assert_eq!(link.parent_email, "p@x.com");
    }

    #[test]
    fn test_attendance_value_strips_percent() {
        let child = ParentChild {
            id: "1".into(),
            name: "Emma".into(),
            grade: Some("10th".into()),
            attendance: "96.2%".into(),
            gpa: "3.85".into(),
            status: "Good".into(),
            classes: vec![],
            alerts: None,
        };
        assert_eq!(child.attendance_value(), Some(96.2));
        assert_eq!(child.gpa_value(), Some(3.85));
        assert!(!child.needs_attention());
    }
}
