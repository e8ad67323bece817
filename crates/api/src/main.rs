use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use categorize::KeywordCategorizer;
use entities::PatternRecognizer;
use pipeline::{AnalysisResponse, Analyzer, DocumentPreview};
use sentiment::SentimentScorer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

mod config;

use config::AppConfig;

#[derive(Clone)]
struct AppState {
    analyzer: Arc<Analyzer>,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Single-file response: the analysis plus the filename and extracted
/// text, or an error-shaped body (still HTTP 200).
#[derive(Serialize)]
#[serde(untagged)]
enum FileResponse {
    Success {
        filename: String,
        text: String,
        #[serde(flatten)]
        analysis: AnalysisResponse,
    },
    Error {
        error: String,
    },
}

#[derive(Serialize)]
struct BatchResponse {
    total_files: usize,
    successful: usize,
    failed: usize,
    results: Vec<BatchRecord>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum BatchRecord {
    Success(DocumentPreview),
    Error { filename: String, error: String },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listener");

    info!(addr = %config.bind_addr, "server listening");

    axum::serve(listener, app).await.expect("server failed");
}

fn build_app(config: &AppConfig) -> Router {
    let analyzer = Analyzer::new(
        Arc::new(PatternRecognizer::new()),
        SentimentScorer::new(),
        Arc::new(KeywordCategorizer::new()),
        config.analyzer.clone(),
    );

    let state = AppState {
        analyzer: Arc::new(analyzer),
    };

    Router::new()
        .route("/analyze", post(analyze_text))
        .route("/analyze-file", post(analyze_file))
        .route("/analyze-multiple-files", post(analyze_multiple_files))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResponse>, StatusCode> {
    let response = state.analyzer.analyze(&req.text).map_err(|e| {
        error!(error = %e, "analysis failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(response))
}

async fn analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FileResponse>, StatusCode> {
    let Some((filename, bytes)) = next_upload(&mut multipart).await else {
        return Ok(Json(FileResponse::Error {
            error: "No file provided".to_string(),
        }));
    };

    let text = match ingest::extract_text(&bytes, &filename) {
        Ok(text) => text,
        Err(e) => {
            return Ok(Json(FileResponse::Error {
                error: e.to_string(),
            }));
        }
    };

    if !state.analyzer.text_long_enough(&text) {
        return Ok(Json(FileResponse::Error {
            error: "Could not extract text from file or file is too short".to_string(),
        }));
    }

    let analysis = state.analyzer.analyze(&text).map_err(|e| {
        error!(error = %e, filename, "file analysis failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(FileResponse::Success {
        filename,
        text,
        analysis,
    }))
}

/// Batch analysis never fails as a whole: each file yields a success or
/// error record and the response is always 200.
async fn analyze_multiple_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<BatchResponse> {
    let mut results = Vec::new();

    while let Some((filename, bytes)) = next_upload(&mut multipart).await {
        results.push(analyze_upload(&state, filename, &bytes));
    }

    let successful = results
        .iter()
        .filter(|r| matches!(r, BatchRecord::Success(_)))
        .count();

    Json(BatchResponse {
        total_files: results.len(),
        successful,
        failed: results.len() - successful,
        results,
    })
}

fn analyze_upload(state: &AppState, filename: String, bytes: &[u8]) -> BatchRecord {
    let text = match ingest::extract_text(bytes, &filename) {
        Ok(text) => text,
        Err(e) => {
            return BatchRecord::Error {
                filename,
                error: e.to_string(),
            };
        }
    };

    if !state.analyzer.text_long_enough(&text) {
        return BatchRecord::Error {
            filename,
            error: "Could not extract text or file too short".to_string(),
        };
    }

    match state.analyzer.analyze_preview(&filename, &text) {
        Ok(preview) => BatchRecord::Success(preview),
        Err(e) => BatchRecord::Error {
            filename,
            error: e.to_string(),
        },
    }
}

/// Pull the next uploaded file out of a multipart stream.
async fn next_upload(multipart: &mut Multipart) -> Option<(String, Vec<u8>)> {
    loop {
        let field = multipart.next_field().await.ok()??;
        if field.file_name().is_none() {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field.bytes().await.ok()?;
        return Some((filename, bytes.to_vec()));
    }
}
