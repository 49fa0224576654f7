//! The administrator dashboard.

/// Headline school metrics. Static until the reporting endpoint lands.
const STATS: [(&str, &str); 4] = [
    ("Total Students", "1,247"),
    ("Active Teachers", "89"),
    ("Total Classes", "42"),
    ("Average Grade", "87.3%"),
];

pub fn render(name: &str) -> String {
    let mut out = format!("Welcome back, {name}\n\n");
    for (label, value) in STATS {
        out.push_str(&format!("{label:<16} {value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_greets_and_lists_stats() {
        let text = render("Dr. Sarah Johnson");
        assert!(text.contains("Welcome back, Dr. Sarah Johnson"));
        assert!(text.contains("Total Students"));
        assert!(text.contains("Average Grade"));
    }
}
