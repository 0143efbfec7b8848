use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use usecase_service::{app_state, build_app, config::AppConfig, run_server};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("usecase_service=info,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let config = AppConfig::from_env();
    let state = app_state(&config);
    let app = build_app(state);

    tracing::info!(port = config.port, model = %config.model, "starting use case service");

    run_server(app, config.port).await;
}
