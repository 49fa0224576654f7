use classboard_api::ApiClient;
use classboard_config::{ApiConfig, PollConfig, SessionConfig};
use classboard_session::{SessionStore, StaticDirectory};
use std::sync::Arc;

/// Everything the views need, passed explicitly.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub session: Arc<SessionStore>,
    pub poll: PollConfig,
}

pub fn init_app_state(api_config: &ApiConfig, session_config: &SessionConfig) -> AppState {
    AppState {
        api: Arc::new(ApiClient::from_config(api_config)),
        session: Arc::new(SessionStore::new(
            Arc::new(StaticDirectory::demo()),
            session_config,
        )),
        poll: PollConfig::from_env(),
    }
}
