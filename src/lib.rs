pub mod api;
pub mod config;
pub mod openai;
pub mod parser;

use std::sync::Arc;

use axum::Router;

use config::AppConfig;
use openai::OpenAiClient;

pub struct AppState {
    pub client: OpenAiClient,
}

pub fn app_state(config: &AppConfig) -> Arc<AppState> {
    Arc::new(AppState {
        client: OpenAiClient::new(config),
    })
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    axum::serve(listener, app).await.expect("server failed");
}
