//! Rutas de Configuration

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::configuration_controller::ConfigurationController;
use crate::dto::configuration_dto::{
    ConfigurationFilters, ConfigurationResponse, CreateConfigurationRequest,
};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

pub fn create_configuration_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_configuration))
        .route("/", get(list_configurations))
        .route("/:id", delete(delete_configuration))
}

#[utoipa::path(
    post,
    path = "/configurations",
    tag = "configurations",
    request_body = CreateConfigurationRequest,
    responses(
        (status = 201, description = "Configuration created successfully", body = ConfigurationResponse),
        (status = 400, description = "Bad request", body = ErrorResponse)
    )
)]
pub async fn create_configuration(
    State(state): State<AppState>,
    Json(request): Json<CreateConfigurationRequest>,
) -> Result<(StatusCode, Json<ConfigurationResponse>), AppError> {
    let controller = ConfigurationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/configurations",
    tag = "configurations",
    params(ConfigurationFilters),
    responses(
        (status = 200, description = "A list of configurations", body = [ConfigurationResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_configurations(
    State(state): State<AppState>,
    Query(filters): Query<ConfigurationFilters>,
) -> Result<Json<Vec<ConfigurationResponse>>, AppError> {
    let controller = ConfigurationController::new(state.pool.clone());
    let response = controller.list(&filters).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/configurations/{id}",
    tag = "configurations",
    params(("id" = i32, Path, description = "ID of the configuration to delete")),
    responses(
        (status = 200, description = "Configuration deleted successfully"),
        (status = 404, description = "Configuration not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_configuration(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ConfigurationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": format!("Configuration with ID {} was deleted.", id)
    })))
}
