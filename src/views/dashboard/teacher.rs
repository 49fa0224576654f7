//! The teacher dashboard.

use crate::views::classes;
use classboard_models::User;

pub fn render(user: &User) -> String {
    let taught = classes::classes_taught_by(&user.name);
    let students: u32 = taught.iter().map(|c| c.students).sum();

    let mut out = format!("Welcome back, {}\n\n", user.name);
    out.push_str(&format!(
        "Classes          {}\nStudents         {students}\n\n",
        taught.len()
    ));
    if taught.is_empty() {
        out.push_str("No classes assigned.\n");
        return out;
    }
    out.push_str("Today\n");
    for class in &taught {
        out.push_str(&format!(
            "  {}  {} · {}\n",
            class.schedule, class.name, class.room
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use classboard_models::Role;

    #[test]
    fn test_render_sums_students_across_classes() {
        let user = User::new("2", "Michael Chen", "teacher@school.edu", Role::Teacher);
        let text = render(&user);
        assert!(text.contains("Classes          2"));
        assert!(text.contains("Students         55"));
        assert!(text.contains("Mathematics 10A"));
    }
}
