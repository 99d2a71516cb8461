//! HTTP API server for integration with other systems.
//!
//! Exposes the categorize-research-write pipeline as JSON endpoints.

use crate::cli::Output;
use crate::classify::Category;
use crate::config::Settings;
use crate::pipeline::Pipeline;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    pipeline: Pipeline,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(settings)?;

    let state = Arc::new(AppState { pipeline });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/examples", get(examples))
        .route("/classify", post(classify))
        .route("/ask", post(ask))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Arv API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Examples", "GET  /examples");
    Output::kv("Classify", "POST /classify");
    Output::kv("Ask", "POST /ask");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct QuestionRequest {
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    article: String,
    category: Category,
    site: String,
    intent: String,
    question_type: String,
    structured_research: bool,
}

#[derive(Serialize)]
struct ExampleEntry {
    category: Category,
    query: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn examples() -> impl IntoResponse {
    let entries: Vec<ExampleEntry> = Category::ALL
        .iter()
        .map(|c| ExampleEntry {
            category: *c,
            query: c.example_query(),
        })
        .collect();
    Json(entries)
}

async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuestionRequest>,
) -> impl IntoResponse {
    match state.pipeline.classify(&req.question).await {
        // The fallback mapping is part of the contract, so both outcomes are 200s.
        Ok(outcome) => Json(outcome.to_json()).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(req): Json<QuestionRequest>,
) -> impl IntoResponse {
    match state.pipeline.answer(&req.question).await {
        Ok(response) => Json(AskResponse {
            article: response.article.body,
            category: response.classification.category,
            site: response.classification.site,
            intent: response.classification.intent,
            question_type: response.classification.question_type.to_string(),
            structured_research: response.research.is_structured(),
        })
        .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
