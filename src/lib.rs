//! Car Configurator API
//!
//! Servicio CRUD de vehículos y sus configuraciones: API REST con filtros
//! y orden en los listados, respaldada por PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod docs;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Construir el router completo de la aplicación
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api-docs", get(docs::serve_openapi))
        .nest("/vehicles", routes::vehicle_routes::create_vehicle_router())
        .nest(
            "/configurations",
            routes::configuration_routes::create_configuration_router(),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

/// Endpoint de salud simple
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "car-configurator",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
