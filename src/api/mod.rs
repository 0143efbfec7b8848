mod handlers;
mod models;

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::AppState;

pub use models::{ErrorResponse, GenerateRequest, GenerateResponse, GenerationMetrics, RawResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generateUsecase", post(handlers::generate_usecase))
        .fallback(handlers::not_found)
        .with_state(state)
}
