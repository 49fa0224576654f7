use classboard_core::{
    ClassesVariant, DashboardVariant, ViewVariant, content_for, navigation_for, tabs,
};
use classboard_models::Role;

#[test]
fn test_every_role_navigation_starts_with_the_common_prefix() {
    for role in Role::ALL {
        let items = navigation_for(Some(role));
        let ids: Vec<&str> = items.iter().take(3).map(|i| i.id).collect();
        assert_eq!(ids, [tabs::DASHBOARD, tabs::CALENDAR, tabs::MESSAGES]);
    }
}

#[test]
fn test_role_specific_items_follow_the_prefix() {
    let admin: Vec<&str> = navigation_for(Some(Role::Admin))
        .iter()
        .skip(3)
        .map(|i| i.id)
        .collect();
    assert_eq!(
        admin,
        [
            tabs::STUDENTS,
            tabs::TEACHERS,
            tabs::CLASSES,
            tabs::ATTENDANCE,
            tabs::GRADES,
            tabs::ANALYTICS,
            tabs::SETTINGS,
        ]
    );

    let student: Vec<&str> = navigation_for(Some(Role::Student))
        .iter()
        .skip(3)
        .map(|i| i.id)
        .collect();
    assert_eq!(
        student,
        [
            tabs::CLASSES,
            tabs::GRADES,
            tabs::ATTENDANCE,
            tabs::PARENT_ACCESS,
        ]
    );
}

#[test]
fn test_parent_and_unknown_roles_get_common_items_only() {
    assert_eq!(navigation_for(Some(Role::Parent)).len(), 3);
    assert_eq!(navigation_for(None).len(), 3);
}

#[test]
fn test_dashboard_resolves_to_the_matching_variant() {
    let cases = [
        (Role::Admin, DashboardVariant::Admin),
        (Role::Teacher, DashboardVariant::Teacher),
        (Role::Student, DashboardVariant::Student),
        (Role::Parent, DashboardVariant::Parent),
    ];
    for (role, variant) in cases {
        assert_eq!(
            content_for(tabs::DASHBOARD, Some(role)),
            ViewVariant::Dashboard(variant)
        );
    }
}

#[test]
fn test_unknown_role_is_denied_everywhere_gated() {
    assert!(matches!(
        content_for(tabs::DASHBOARD, None),
        ViewVariant::AccessDenied { .. }
    ));
    assert!(matches!(
        content_for(tabs::CLASSES, None),
        ViewVariant::AccessDenied { .. }
    ));
}

#[test]
fn test_classes_tab_is_gated_by_role() {
    assert_eq!(
        content_for(tabs::CLASSES, Some(Role::Student)),
        ViewVariant::Classes(ClassesVariant::Student)
    );
    assert_eq!(
        content_for(tabs::CLASSES, Some(Role::Teacher)),
        ViewVariant::Classes(ClassesVariant::Teacher)
    );
    for role in [Role::Admin, Role::Parent] {
        let ViewVariant::AccessDenied { reason } = content_for(tabs::CLASSES, Some(role)) else {
            panic!("classes should be denied for {role}");
        };
        assert!(reason.contains("students and teachers"));
    }
}

#[test]
fn test_unconfigured_tabs_render_a_placeholder() {
    for tab in [tabs::MESSAGES, tabs::GRADES, tabs::ANALYTICS, "payroll"] {
        assert_eq!(
            content_for(tab, Some(Role::Admin)),
            ViewVariant::UnderConstruction {
                tab: tab.to_string()
            }
        );
    }
}
