//! Student listing records.

use serde::{Deserialize, Serialize};

/// One row of the students listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub grade: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub gpa: f64,
    pub attendance: f64,
    #[serde(rename = "enrollmentDate")]
    pub enrollment_date: String,
}

impl StudentRecord {
    /// Case-insensitive match against name, email, or student id, the same
    /// fields the listing's search box covers.
    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.id.to_lowercase().contains(&term)
    }
}

/// Demo roster shown until the listing is wired to a live endpoint.
pub fn demo_students() -> Vec<StudentRecord> {
    let rows = [
        ("S001", "Alice Johnson", "alice.johnson@school.edu", "10th", "A", 3.85, 96.2, "2024-01-15"),
        ("S002", "Bob Smith", "bob.smith@school.edu", "11th", "B", 3.42, 92.1, "2024-01-16"),
        ("S003", "Carol Davis", "carol.davis@school.edu", "9th", "A", 3.95, 98.5, "2024-01-17"),
        ("S004", "David Wilson", "david.wilson@school.edu", "12th", "C", 3.21, 89.3, "2024-01-18"),
        ("S005", "Eva Brown", "eva.brown@school.edu", "10th", "B", 3.67, 94.8, "2024-01-19"),
    ];
    rows.into_iter()
        .map(
            |(id, name, email, grade, class_name, gpa, attendance, enrolled)| StudentRecord {
                id: id.into(),
                name: name.into(),
                email: email.into(),
                grade: grade.into(),
                class_name: class_name.into(),
                gpa,
                attendance,
                enrollment_date: enrolled.into(),
            },
        )
        .collect()
}
