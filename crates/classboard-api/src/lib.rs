//! # Classboard API client
//!
//! Typed HTTP client for the backend the dashboard talks to.
//!
//! Every method maps to one backend endpoint and decodes straight into the
//! domain models. Failures come back as [`ApiError`]; callers degrade to an
//! empty or placeholder state and log; a fetch failure is never fatal to
//! the app.

use classboard_config::ApiConfig;
use classboard_models::{Announcement, NewAnnouncement, ParentChild, ParentLink, ScheduleItem};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised by backend calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed, or the body could not be decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status without a structured error body.
    #[error("server returned HTTP {0}")]
    Status(u16),

    /// The server rejected the request with an `{ "error": … }` body,
    /// e.g. a duplicate parent link. Surfaced to the user verbatim.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

// The error shape conflict/validation responses carry.
#[derive(Debug, Deserialize)]
struct Rejection {
    error: String,
}

#[derive(Debug, Serialize)]
struct GrantParentLinkBody<'a> {
    #[serde(rename = "studentId")]
    student_id: &'a str,
    #[serde(rename = "parentEmail")]
    parent_email: &'a str,
}

#[derive(Debug, Serialize)]
struct UpdateNicknameBody<'a> {
    #[serde(rename = "studentId")]
    student_id: &'a str,
    #[serde(rename = "parentEmail")]
    parent_email: &'a str,
    nickname: &'a str,
}

/// Client for the dashboard's backend API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/parent/children?email=…`
    pub async fn parent_children(&self, email: &str) -> Result<Vec<ParentChild>, ApiError> {
        debug!(email, "fetching children");
        let resp = self
            .http
            .get(self.url("/api/parent/children"))
            .query(&[("email", email)])
            .send()
            .await?;
        expect_json(resp).await
    }

    /// `GET /api/student/schedule?studentId=…`
    pub async fn student_schedule(&self, student_id: &str) -> Result<Vec<ScheduleItem>, ApiError> {
        debug!(student_id, "fetching schedule");
        let resp = self
            .http
            .get(self.url("/api/student/schedule"))
            .query(&[("studentId", student_id)])
            .send()
            .await?;
        expect_json(resp).await
    }

    /// `GET /api/announcements`
    pub async fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        let resp = self.http.get(self.url("/api/announcements")).send().await?;
        expect_json(resp).await
    }

    /// `POST /api/announcements`
    pub async fn post_announcement(
        &self,
        announcement: &NewAnnouncement,
    ) -> Result<Announcement, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/announcements"))
            .json(announcement)
            .send()
            .await?;
        expect_json(resp).await
    }

    /// `GET /api/parent-links?studentId=…`
    pub async fn parent_links(&self, student_id: &str) -> Result<Vec<ParentLink>, ApiError> {
        let resp = self
            .http
            .get(self.url("/api/parent-links"))
            .query(&[("studentId", student_id)])
            .send()
            .await?;
        expect_json(resp).await
    }

    /// `POST /api/parent-links`; conflicts come back as
    /// [`ApiError::Rejected`].
    pub async fn grant_parent_link(
        &self,
        student_id: &str,
        parent_email: &str,
    ) -> Result<ParentLink, ApiError> {
        let resp = self
            .http
            .post(self.url("/api/parent-links"))
            .json(&GrantParentLinkBody {
                student_id,
                parent_email,
            })
            .send()
            .await?;
        expect_json(resp).await
    }

    /// `PATCH /api/parent-links`
    pub async fn update_parent_link_nickname(
        &self,
        student_id: &str,
        parent_email: &str,
        nickname: &str,
    ) -> Result<ParentLink, ApiError> {
        let resp = self
            .http
            .patch(self.url("/api/parent-links"))
            .json(&UpdateNicknameBody {
                student_id,
                parent_email,
                nickname,
            })
            .send()
            .await?;
        expect_json(resp).await
    }
}

async fn expect_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(match rejection_message(&body) {
        Some(message) => ApiError::Rejected {
            status: status.as_u16(),
            message,
        },
        None => ApiError::Status(status.as_u16()),
    })
}

fn rejection_message(body: &str) -> Option<String> {
    serde_json::from_str::<Rejection>(body)
        .ok()
        .map(|r| r.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:5000");
        assert_eq!(
            client.url("/api/announcements"),
            "http://localhost:5000/api/announcements"
        );
    }

    #[test]
    fn test_from_config_normalizes_trailing_slash() {
        let client = ApiClient::from_config(&ApiConfig::new("http://localhost:5000/"));
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_rejection_message_parses_error_body() {
        assert_eq!(
            rejection_message(r#"{"error":"Parent already has access."}"#),
            Some("Parent already has access.".to_string())
        );
        assert_eq!(rejection_message("Internal Server Error"), None);
        assert_eq!(rejection_message(""), None);
    }

    #[test]
    fn test_wire_field_names() {
        let body = GrantParentLinkBody {
            student_id: "3",
            parent_email: "dad@example.com",
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"studentId":"3","parentEmail":"dad@example.com"}"#);
    }
}
