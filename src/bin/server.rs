//! Equivalent strain HTTP server

use axum::{
    extract::Json,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use equivalent_strain::api::{self, ApiResponse, ScratchRequest};
use equivalent_strain::odb::FieldOutput;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn status_of<T>(response: &ApiResponse<T>) -> StatusCode {
    if response.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}

async fn estrn(Json(snapshot): Json<FieldOutput>) -> impl IntoResponse {
    let response = ApiResponse::from_result(api::run_estrn(&snapshot));
    if let Some(error) = &response.error {
        log::warn!("estrn request for '{}' rejected: {}", snapshot.name, error);
    }
    (status_of(&response), Json(response))
}

async fn scratch(Json(request): Json<ScratchRequest>) -> impl IntoResponse {
    let name = request.database.name.clone();
    let response = ApiResponse::from_result(api::run_scratch(request));
    if let Some(error) = &response.error {
        log::warn!("scratch request for '{}' failed: {}", name, error);
    }
    (status_of(&response), Json(response))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = std::env::var("ESTRN_PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8087);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(health))
        .route("/api/v1/estrn", post(estrn))
        .route("/api/v1/scratch", post(scratch))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Equivalent strain server listening on http://{}", addr);
    println!("  Health check: GET  /health");
    println!("  ESTRN:        POST /api/v1/estrn");
    println!("  Scratch odb:  POST /api/v1/scratch");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
