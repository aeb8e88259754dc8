use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hermes_core::input::validate_input;

use crate::dto::{
    ChatData, ChatRequest, ChatResponse, HealthResponse, SummarizeRequest, SummarizeResponse,
    SummaryData,
};
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Build the full router with all routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/summarize", post(summarize))
        .route("/api/chat", post(chat))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Summarize
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/summarize",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summary produced", body = SummarizeResponse),
        (status = 400, description = "Invalid input", body = crate::dto::ErrorResponse),
        (status = 502, description = "Provider failure", body = crate::dto::ErrorResponse),
    ),
    tag = "summarize"
)]
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<SummarizeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(body.url.as_deref(), body.question.as_deref())?;

    // URL input wins when both fields are populated.
    let url = body.url.as_deref().map(str::trim).filter(|u| !u.is_empty());
    let record = match url {
        Some(url) => state.service.summarize_url(url).await?,
        None => {
            let question = body.question.as_deref().unwrap_or_default().trim();
            state.service.summarize_question(question).await?
        }
    };

    let response = SummarizeResponse {
        success: true,
        data: Some(SummaryData::from(record)),
        message: Some("Summary generated successfully".to_string()),
        error: None,
    };

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply produced", body = ChatResponse),
        (status = 502, description = "Provider failure", body = crate::dto::ErrorResponse),
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    axum::Json(body): axum::Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let context = body.context.as_deref().filter(|c| !c.trim().is_empty());
    let exchange = state.service.chat(&body.message, context).await?;

    let response = ChatResponse {
        success: true,
        data: Some(ChatData::from(exchange)),
        message: Some("Reply generated successfully".to_string()),
        error: None,
    };

    Ok(axum::Json(response))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    axum::Json(HealthResponse {
        status: "healthy",
        provider: state.provider_name.clone(),
    })
}
