/// Render a tab that has no page yet.
pub fn under_construction(tab: &str) -> String {
    format!(
        "{}\n\nThis page is under construction.\n",
        capitalize(tab)
    )
}

/// Render a refusal for a tab the current role may not open.
pub fn access_denied(reason: &str) -> String {
    format!("Access denied\n\n{reason}\n")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
