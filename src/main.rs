use anyhow::Result;
use classboard::state::init_app_state;
use classboard::{app, logging};
use classboard_config::{ApiConfig, SessionConfig};
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;

/// Classboard, a school dashboard for admins, teachers, students, and
/// parents.
#[derive(Parser)]
#[command(name = "classboard", version, about)]
struct Cli {
    /// Base URL of the backend API (overrides CLASSBOARD_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for durable client state (overrides CLASSBOARD_STATE_DIR)
    #[arg(long)]
    state_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let api_config = cli
        .api_url
        .map(ApiConfig::new)
        .unwrap_or_else(ApiConfig::from_env);
    let session_config = cli
        .state_dir
        .map(SessionConfig::new)
        .unwrap_or_else(SessionConfig::from_env);

    let state = init_app_state(&api_config, &session_config);
    app::run(state).await
}
