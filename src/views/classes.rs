//! The classes tab, for students and teachers.

use crate::views::feeds::AnnouncementsFeed;
use classboard_models::User;

/// Class ids the demo student account is enrolled in. Announcement feeds
/// are filtered against this set.
pub const ENROLLED_CLASS_IDS: [&str; 5] =
    ["bio-101", "math-10th-a", "art-101", "hist-202", "eng-101"];

/// A class as shown on the classes pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub teacher: &'static str,
    pub room: &'static str,
    pub schedule: &'static str,
    pub students: u32,
}

/// Demo catalog shown until classes are wired to a live endpoint.
pub fn demo_classes() -> Vec<ClassInfo> {
    vec![
        ClassInfo {
            id: "bio-101",
            name: "Biology 101",
            teacher: "Ms. Green",
            room: "Lab 2",
            schedule: "Mon/Wed 08:00 - 09:00",
            students: 28,
        },
        ClassInfo {
            id: "math-10th-a",
            name: "Mathematics 10A",
            teacher: "Michael Chen",
            room: "Room 204",
            schedule: "Mon-Fri 09:15 - 10:15",
            students: 31,
        },
        ClassInfo {
            id: "art-101",
            name: "Art 101",
            teacher: "Ms. Rivera",
            room: "Art Studio",
            schedule: "Tue/Thu 10:30 - 11:30",
            students: 22,
        },
        ClassInfo {
            id: "hist-202",
            name: "History 202",
            teacher: "Mr. Okafor",
            room: "Room 112",
            schedule: "Mon/Wed/Fri 12:30 - 13:30",
            students: 26,
        },
        ClassInfo {
            id: "eng-101",
            name: "English 101",
            teacher: "Mrs. Patel",
            room: "Room 301",
            schedule: "Tue/Thu 13:45 - 14:45",
            students: 29,
        },
        ClassInfo {
            id: "phys-201",
            name: "Physics 201",
            teacher: "Michael Chen",
            room: "Lab 1",
            schedule: "Tue/Thu 08:00 - 09:00",
            students: 24,
        },
    ]
}

/// The classes a teacher is responsible for, matched by display name.
pub fn classes_taught_by(teacher_name: &str) -> Vec<ClassInfo> {
    demo_classes()
        .into_iter()
        .filter(|c| c.teacher == teacher_name)
        .collect()
}

pub fn enrolled_classes() -> Vec<ClassInfo> {
    demo_classes()
        .into_iter()
        .filter(|c| ENROLLED_CLASS_IDS.contains(&c.id))
        .collect()
}

/// The student's classes with the freshest announcements per class.
pub fn render_student(feed: &AnnouncementsFeed) -> String {
    let mut out = String::from("My Classes\n\n");
    for class in enrolled_classes() {
        out.push_str(&format!(
            "{} ({})\n  {} · {} · {}\n",
            class.name, class.id, class.teacher, class.room, class.schedule
        ));
        let recent = feed.for_classes(&[class.id], 2);
        if recent.is_empty() {
            out.push_str("  No recent announcements.\n");
        }
        for ann in recent {
            out.push_str(&format!("  [{}] {}\n", ann.date, ann.title));
        }
        out.push('\n');
    }
    out
}

/// The teacher's classes with headcounts.
pub fn render_teacher(user: &User) -> String {
    let taught = classes_taught_by(&user.name);
    if taught.is_empty() {
        return "My Classes\n\nNo classes assigned.\n".to_string();
    }
    let mut out = String::from("My Classes\n\n");
    for class in &taught {
        out.push_str(&format!(
            "{} ({})\n  {} · {} · {} students\n\n",
            class.name, class.id, class.room, class.schedule, class.students
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_models::{Role, User};

    #[test]
    fn test_enrolled_classes_match_enrollment_ids() {
        let ids: Vec<&str> = enrolled_classes().iter().map(|c| c.id).collect();
        assert_eq!(ids, ENROLLED_CLASS_IDS);
    }

    #[test]
    fn test_teacher_sees_only_own_classes() {
        let taught = classes_taught_by("Michael Chen");
        assert_eq!(taught.len(), 2);
        assert!(taught.iter().all(|c| c.teacher == "Michael Chen"));
    }

    #[test]
    fn test_render_teacher_without_classes() {
        let user = User::new("9", "Nobody Known", "n@school.edu", Role::Teacher);
        assert!(render_teacher(&user).contains("No classes assigned"));
    }
}
