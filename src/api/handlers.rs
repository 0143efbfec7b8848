use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{parser, AppState};

use super::models::{
    ErrorResponse, GenerateRequest, GenerateResponse, GenerationMetrics, RawResponse,
};

fn augmented_prompt(website: &str) -> String {
    format!(
        "Analyze the website {website} in real time and identify three innovative, practical, and relevant AI use cases for this company that can drive significant business growth.\n\
         \n\
         For each use case:\n\
         1. Create a concise headline starting with \"AI Can\" that captures the essence of the use case (e.g., \"AI Can Personalize Customer Journeys\")\n\
         2. Provide a brief description of how this AI solution would benefit the business\n\
         \n\
         Format each use case as:\n\
         HEADING: [Your \"AI Can\" headline]\n\
         DESCRIPTION: [Your description]\n\
         \n\
         Only include these three use cases without any additional explanation."
    )
}

pub async fn generate_usecase(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, (StatusCode, Json<ErrorResponse>)> {
    let prompt = payload.prompt.as_deref().unwrap_or("").trim();
    if prompt.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Prompt is required".to_string(),
            }),
        ));
    }

    let website = payload.website.as_deref().unwrap_or("");
    tracing::debug!(
        website,
        email = payload.email.as_deref().unwrap_or(""),
        "received use case submission"
    );

    let started = Instant::now();
    let outcome = state
        .client
        .complete(&augmented_prompt(website))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "use case generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to process request".to_string(),
                }),
            )
        })?;
    let elapsed = started.elapsed().as_secs_f64();

    let use_cases = parser::parse_use_cases(&outcome.content);

    Ok(Json(GenerateResponse {
        use_cases,
        metrics: GenerationMetrics {
            response_time_seconds: format!("{elapsed:.2}"),
            prompt_tokens: outcome.usage.prompt_tokens,
            completion_tokens: outcome.usage.completion_tokens,
            total_tokens: outcome.usage.total_tokens,
        },
        raw_response: RawResponse {
            content: outcome.content,
            response_object: outcome.raw,
        },
    }))
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
