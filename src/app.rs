// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

//! Application state, route handlers, and router construction.
//!
//! This module is `pub` so that integration tests can build a test router directly
//! without starting the full binary.

use crate::models::analysis::{
    ContentCheck, LinksCheck, OnPageCheck, Report, ScoreBreakdown, SocialCheck, TechnicalCheck,
};
use crate::models::error::AnalysisError;
use crate::models::request::AnalysisRequest;
use crate::models::version::VersionResponse;
use crate::services::analyzer::Analyzer;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application version extracted from `Cargo.toml` at compile time.
/// The patch segment can be overridden via `SEO_AGENT_PATCH_VERSION` (see `build.rs`).
pub const VERSION: &str = env!("SEO_AGENT_VERSION");

/// Shared application state injected into every route handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
}

#[derive(OpenApi)]
#[openapi(
    paths(version_handler, analyze_handler),
    components(schemas(
        AnalysisRequest,
        Report,
        TechnicalCheck,
        OnPageCheck,
        ContentCheck,
        LinksCheck,
        SocialCheck,
        ScoreBreakdown,
        VersionResponse
    )),
    tags((name = "seo-agent", description = "Single page SEO analysis"))
)]
pub struct ApiDoc;

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

#[utoipa::path(
    get,
    path = "/version",
    tag = "seo-agent",
    responses((status = 200, description = "Agent name and version", body = VersionResponse))
)]
pub async fn version_handler() -> Json<VersionResponse> {
    Json(VersionResponse {
        agent: "seo-agent".to_string(),
        version: VERSION.to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "seo-agent",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Analysis report", body = Report),
        (status = 400, description = "Missing or invalid URL"),
        (status = 422, description = "Page could not be parsed"),
        (status = 502, description = "Page could not be fetched")
    )
)]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<Report>, (StatusCode, String)> {
    if payload.raw_url.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Please enter a URL".to_string()));
    }

    state
        .analyzer
        .analyze(&payload.raw_url)
        .await
        .map(Json)
        .map_err(|e| (error_status(&e), format!("Error: {e}")))
}

/// HTTP status reported for each fatal analysis error
fn error_status(error: &AnalysisError) -> StatusCode {
    match error {
        AnalysisError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        AnalysisError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
        AnalysisError::ParseFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the Axum application router, including Swagger UI.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/version", get(version_handler))
        .route("/analyze", post(analyze_handler))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
