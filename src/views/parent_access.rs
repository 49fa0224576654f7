//! The student's parent access page.
//!
//! Lists who can see the student's record, grants new access by email, and
//! renames existing links. Backend rejections (duplicate grant, unknown
//! link) surface to the user verbatim.

use crate::state::AppState;
use classboard_api::ApiError;
use classboard_models::{Email, ParentLink, User};
use tracing::warn;

pub async fn links(state: &AppState, user: &User) -> Result<Vec<ParentLink>, ApiError> {
    state.api.parent_links(&user.id).await
}

pub fn render(links: &[ParentLink]) -> String {
    let mut out = String::from("Parent Access\n\n");
    if links.is_empty() {
        out.push_str("Nobody has access to your record yet.\n");
        return out;
    }
    for link in links {
        out.push_str(&format!(
            "{} <{}>  since {}\n",
            link.display_name(),
            link.parent_email,
            link.created_at
        ));
    }
    out
}

/// Grant a parent visibility. The email is validated before any request
/// goes out; a backend rejection comes back as its message.
pub async fn grant(state: &AppState, user: &User, email: &str) -> Result<ParentLink, String> {
    let email = Email::new(email).map_err(|e| e.to_string())?;
    state
        .api
        .grant_parent_link(&user.id, email.as_str())
        .await
        .map_err(|err| {
            if !matches!(err, ApiError::Rejected { .. }) {
                warn!(%err, "grant parent link failed");
            }
            err.to_string()
        })
}

pub async fn rename(
    state: &AppState,
    user: &User,
    parent_email: &str,
    nickname: &str,
) -> Result<ParentLink, String> {
    state
        .api
        .update_parent_link_nickname(&user.id, parent_email, nickname)
        .await
        .map_err(|err| {
            if !matches!(err, ApiError::Rejected { .. }) {
                warn!(%err, "rename parent link failed");
            }
            err.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(nickname: Option<&str>) -> ParentLink {
        ParentLink {
            id: Some("pl1".into()),
            student_id: "3".into(),
            parent_email: "parent@school.edu".into(),
            nickname: nickname.map(String::from),
            created_at: "2025-01-05".into(),
        }
    }

    #[test]
    fn test_render_empty_list() {
        assert!(render(&[]).contains("Nobody has access"));
    }

    #[test]
    fn test_render_prefers_nickname() {
        let text = render(&[link(Some("Dad"))]);
        assert!(text.contains("Dad <parent@school.edu>"));
    }

    #[test]
    fn test_render_falls_back_to_email() {
        let text = render(&[link(None)]);
        assert!(text.contains("parent@school.edu <parent@school.edu>"));
    }
}
