use std::env;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("CLASSBOARD_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// Endpoint paths are joined with a leading slash, so a trailing one here
// would produce double slashes.
fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
