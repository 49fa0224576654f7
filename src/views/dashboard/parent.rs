//! The parent dashboard: a per-child summary with aggregate stats.

use crate::state::AppState;
use classboard_models::{ParentChild, User};
use tracing::warn;

pub async fn render(state: &AppState, user: &User) -> String {
    match state.api.parent_children(&user.email).await {
        Ok(children) => render_children(&user.name, &children),
        Err(err) => {
            warn!(%err, "could not load children");
            format!("Welcome back, {}\n\nCould not load your children right now.\n", user.name)
        }
    }
}

fn render_children(name: &str, children: &[ParentChild]) -> String {
    let mut out = format!("Welcome back, {name}\n\n");
    if children.is_empty() {
        out.push_str("No children are linked to your account yet.\n");
        out.push_str("Ask your child to grant access from their Parent Access page.\n");
        return out;
    }

    let attendance = average(children.iter().filter_map(ParentChild::attendance_value));
    let gpa = average(children.iter().filter_map(ParentChild::gpa_value));
    let alerts: u32 = children.iter().filter_map(|c| c.alerts).sum();

    out.push_str(&format!("Children         {}\n", children.len()));
    if let Some(attendance) = attendance {
        out.push_str(&format!("Avg Attendance   {attendance:.1}%\n"));
    }
    if let Some(gpa) = gpa {
        out.push_str(&format!("Avg GPA          {gpa:.2}\n"));
    }
    out.push_str(&format!("Alerts           {alerts}\n\n"));

    for child in children {
        let flag = if child.needs_attention() { "  ⚠ needs attention" } else { "" };
        out.push_str(&format!(
            "{}{flag}\n  Attendance {} · GPA {} · {}\n",
            child.name, child.attendance, child.gpa, child.status
        ));
        for class in &child.classes {
            out.push_str(&format!("    {}  {}\n", class.grade, class.name));
        }
        out.push('\n');
    }
    out
}

fn average(values: impl Iterator<Item = f64>) -> Option<f64> {
    let values: Vec<f64> = values.collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_models::ChildClass;

    fn child(name: &str, attendance: &str, gpa: &str, status: &str, alerts: Option<u32>) -> ParentChild {
        ParentChild {
            id: name.to_lowercase(),
            name: name.into(),
            grade: Some("10th".into()),
            attendance: attendance.into(),
            gpa: gpa.into(),
            status: status.into(),
            classes: vec![ChildClass {
                name: "Biology 101".into(),
                grade: "85%".into(),
            }],
            alerts,
        }
    }

    #[test]
    fn test_render_aggregates_stats() {
        let children = vec![
            child("Emma", "96.0%", "3.80", "Good", Some(0)),
            child("Liam", "90.0%", "3.20", "Needs Attention", Some(2)),
        ];
        let text = render_children("Robert Smith", &children);
        assert!(text.contains("Children         2"));
        assert!(text.contains("Avg Attendance   93.0%"));
        assert!(text.contains("Avg GPA          3.50"));
        assert!(text.contains("Alerts           2"));
        assert!(text.contains("needs attention"));
    }

    #[test]
    fn test_render_without_children_points_at_parent_access() {
        let text = render_children("Robert Smith", &[]);
        assert!(text.contains("No children are linked"));
        assert!(text.contains("Parent Access"));
    }
}
