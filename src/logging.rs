use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging.
///
/// Level comes from `LOG_LEVEL` (default "info"), overridable per target
/// through `RUST_LOG`. HTTP internals are held at warn so fetch chatter
/// does not drown the views.
pub fn init() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{log_level},hyper=warn,hyper_util=warn,reqwest=warn"))
    });

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
