//! Rutas de Vehicle

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleFilters, VehicleResponse};
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
        .route("/:id", delete(delete_vehicle))
}

#[utoipa::path(
    post,
    path = "/vehicles",
    tag = "vehicles",
    request_body = CreateVehicleRequest,
    responses(
        (status = 201, description = "Vehicle created successfully", body = VehicleResponse),
        (status = 400, description = "Bad request", body = ErrorResponse)
    )
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<(StatusCode, Json<VehicleResponse>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "vehicles",
    params(VehicleFilters),
    responses(
        (status = 200, description = "A list of vehicles", body = [VehicleResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(&filters).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = "vehicles",
    params(("id" = i32, Path, description = "ID of the vehicle to retrieve")),
    responses(
        (status = 200, description = "A single vehicle", body = VehicleResponse),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = "vehicles",
    params(("id" = i32, Path, description = "ID of the vehicle to delete")),
    responses(
        (status = 200, description = "Vehicle deleted successfully"),
        (status = 404, description = "Vehicle not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "message": format!("Vehicle with ID {} was deleted.", id)
    })))
}
