//! Role-driven navigation and content dispatch.
//!
//! Two pure functions own all role-conditional branching in the UI:
//!
//! - [`navigation_for`] computes the ordered sidebar entries for a role:
//!   a common prefix shared by everyone, followed by the role's configured
//!   items. An unrecognized role gets the common prefix only.
//! - [`content_for`] maps an `(active tab, role)` pair to the
//!   [`ViewVariant`] the main area should render.
//!
//! Policy: every gate fails closed. The upstream behavior of defaulting the
//! dashboard to the admin variant for an unknown role is deliberately not
//! reproduced; an unrecognized role is denied role-gated content everywhere.

use crate::tabs;
use classboard_models::Role;
use serde::Serialize;

/// Icon reference carried by a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    Calendar,
    MessageSquare,
    Users,
    GraduationCap,
    BookOpen,
    UserCheck,
    FileText,
    BarChart,
    Settings,
    ShieldCheck,
}

impl Icon {
    /// Terminal glyph used by the text renderer.
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::Calendar => "▤",
            Icon::MessageSquare => "✉",
            Icon::Users => "♟",
            Icon::GraduationCap => "🎓",
            Icon::BookOpen => "📖",
            Icon::UserCheck => "✓",
            Icon::FileText => "▦",
            Icon::BarChart => "▁▃▅",
            Icon::Settings => "⚙",
            Icon::ShieldCheck => "🛡",
        }
    }
}

/// One sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

const fn item(id: &'static str, label: &'static str, icon: Icon) -> NavItem {
    NavItem { id, label, icon }
}

/// Entries every role sees, in order, ahead of role-specific ones.
const COMMON_ITEMS: [NavItem; 3] = [
    item(tabs::DASHBOARD, "Dashboard", Icon::Home),
    item(tabs::CALENDAR, "Calendar", Icon::Calendar),
    item(tabs::MESSAGES, "Messages", Icon::MessageSquare),
];

const ADMIN_ITEMS: [NavItem; 7] = [
    item(tabs::STUDENTS, "Students", Icon::Users),
    item(tabs::TEACHERS, "Teachers", Icon::GraduationCap),
    item(tabs::CLASSES, "Classes", Icon::BookOpen),
    item(tabs::ATTENDANCE, "Attendance", Icon::UserCheck),
    item(tabs::GRADES, "Grades", Icon::FileText),
    item(tabs::ANALYTICS, "Analytics", Icon::BarChart),
    item(tabs::SETTINGS, "Settings", Icon::Settings),
];

const TEACHER_ITEMS: [NavItem; 4] = [
    item(tabs::CLASSES, "My Classes", Icon::BookOpen),
    item(tabs::STUDENTS, "Students", Icon::Users),
    item(tabs::ATTENDANCE, "Attendance", Icon::UserCheck),
    item(tabs::GRADES, "Grades", Icon::FileText),
];

const STUDENT_ITEMS: [NavItem; 4] = [
    item(tabs::CLASSES, "My Classes", Icon::BookOpen),
    item(tabs::GRADES, "My Grades", Icon::FileText),
    item(tabs::ATTENDANCE, "Attendance", Icon::UserCheck),
    item(tabs::PARENT_ACCESS, "Parent Access", Icon::ShieldCheck),
];

// Parents only get the common entries.
const PARENT_ITEMS: [NavItem; 0] = [];

fn role_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => &ADMIN_ITEMS,
        Role::Teacher => &TEACHER_ITEMS,
        Role::Student => &STUDENT_ITEMS,
        Role::Parent => &PARENT_ITEMS,
    }
}

/// Ordered navigation entries for a role.
///
/// `None` stands for a missing or unrecognized role and yields the common
/// entries only, no privileged items.
pub fn navigation_for(role: Option<Role>) -> Vec<NavItem> {
    let mut items = COMMON_ITEMS.to_vec();
    if let Some(role) = role {
        items.extend_from_slice(role_items(role));
    }
    items
}

/// Which dashboard screen to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardVariant {
    Admin,
    Teacher,
    Student,
    Parent,
}

/// Which classes screen to render; only these two roles have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassesVariant {
    Student,
    Teacher,
}

/// The content the main area renders for an `(active tab, role)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewVariant {
    Dashboard(DashboardVariant),
    Students,
    Calendar,
    Classes(ClassesVariant),
    ParentAccess,
    /// A distinct denied state: the tab exists but this role may not see it.
    AccessDenied { reason: String },
    /// Placeholder carrying the tab id for display.
    UnderConstruction { tab: String },
}

const CLASSES_DENIED: &str = "This view is currently for students and teachers.";
const ROLE_UNRECOGNIZED: &str = "Your account role is not recognized.";

/// Resolve the content variant for an active tab and role.
///
/// Pure and total: unknown tabs become [`ViewVariant::UnderConstruction`],
/// gated tabs resolve to [`ViewVariant::AccessDenied`] rather than
/// panicking or silently substituting another role's view.
pub fn content_for(tab: &str, role: Option<Role>) -> ViewVariant {
    match tab {
        tabs::DASHBOARD => match role {
            Some(Role::Admin) => ViewVariant::Dashboard(DashboardVariant::Admin),
            Some(Role::Teacher) => ViewVariant::Dashboard(DashboardVariant::Teacher),
            Some(Role::Student) => ViewVariant::Dashboard(DashboardVariant::Student),
            Some(Role::Parent) => ViewVariant::Dashboard(DashboardVariant::Parent),
            None => ViewVariant::AccessDenied {
                reason: ROLE_UNRECOGNIZED.to_string(),
            },
        },
        tabs::STUDENTS => ViewVariant::Students,
        tabs::CALENDAR => ViewVariant::Calendar,
        tabs::CLASSES => match role {
            Some(Role::Student) => ViewVariant::Classes(ClassesVariant::Student),
            Some(Role::Teacher) => ViewVariant::Classes(ClassesVariant::Teacher),
            _ => ViewVariant::AccessDenied {
                reason: CLASSES_DENIED.to_string(),
            },
        },
        tabs::PARENT_ACCESS => ViewVariant::ParentAccess,
        other => ViewVariant::UnderConstruction {
            tab: other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_starts_with_common_items() {
        for role in Role::ALL {
            let items = navigation_for(Some(role));
            assert_eq!(&items[..3], &COMMON_ITEMS[..]);
        }
    }

    #[test]
    fn test_navigation_appends_role_items_in_order() {
        let items = navigation_for(Some(Role::Admin));
        assert_eq!(&items[3..], &ADMIN_ITEMS[..]);
        let items = navigation_for(Some(Role::Teacher));
        assert_eq!(&items[3..], &TEACHER_ITEMS[..]);
        let items = navigation_for(Some(Role::Student));
        assert_eq!(&items[3..], &STUDENT_ITEMS[..]);
    }

    #[test]
    fn test_parent_gets_common_items_only() {
        assert_eq!(navigation_for(Some(Role::Parent)), COMMON_ITEMS.to_vec());
    }

    #[test]
    fn test_unrecognized_role_fails_closed() {
        assert_eq!(navigation_for(None), COMMON_ITEMS.to_vec());
    }

    #[test]
    fn test_navigation_has_no_duplicate_ids() {
        for role in Role::ALL {
            let items = navigation_for(Some(role));
            let mut ids: Vec<_> = items.iter().map(|i| i.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), items.len(), "duplicate nav id for {role}");
        }
    }

    #[test]
    fn test_dashboard_variant_per_role() {
        assert_eq!(
            content_for("dashboard", Some(Role::Admin)),
            ViewVariant::Dashboard(DashboardVariant::Admin)
        );
        assert_eq!(
            content_for("dashboard", Some(Role::Parent)),
            ViewVariant::Dashboard(DashboardVariant::Parent)
        );
    }

    #[test]
    fn test_dashboard_fails_closed_without_role() {
        assert!(matches!(
            content_for("dashboard", None),
            ViewVariant::AccessDenied { .. }
        ));
    }

    #[test]
    fn test_classes_gated_to_students_and_teachers() {
        assert_eq!(
            content_for("classes", Some(Role::Student)),
            ViewVariant::Classes(ClassesVariant::Student)
        );
        assert_eq!(
            content_for("classes", Some(Role::Teacher)),
            ViewVariant::Classes(ClassesVariant::Teacher)
        );
        assert!(matches!(
            content_for("classes", Some(Role::Admin)),
            ViewVariant::AccessDenied { .. }
        ));
        assert!(matches!(
            content_for("classes", Some(Role::Parent)),
            ViewVariant::AccessDenied { .. }
        ));
    }

    #[test]
    fn test_unknown_tab_is_under_construction() {
        assert_eq!(
            content_for("payroll", Some(Role::Admin)),
            ViewVariant::UnderConstruction {
                tab: "payroll".to_string()
            }
        );
    }
}
