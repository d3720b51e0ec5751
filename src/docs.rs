//! Documentación OpenAPI
//!
//! El documento se genera a partir de las anotaciones de las rutas y se
//! publica en /api-docs.

use axum::Json;
use utoipa::OpenApi;

use crate::dto::configuration_dto::{ConfigurationResponse, CreateConfigurationRequest};
use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleResponse};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vehicle and Configuration API",
        description = "API documentation for managing vehicles and configurations"
    ),
    paths(
        crate::routes::vehicle_routes::create_vehicle,
        crate::routes::vehicle_routes::list_vehicles,
        crate::routes::vehicle_routes::get_vehicle,
        crate::routes::vehicle_routes::delete_vehicle,
        crate::routes::configuration_routes::create_configuration,
        crate::routes::configuration_routes::list_configurations,
        crate::routes::configuration_routes::delete_configuration,
    ),
    components(schemas(
        CreateVehicleRequest,
        VehicleResponse,
        CreateConfigurationRequest,
        ConfigurationResponse,
        ErrorResponse,
    )),
    tags(
        (name = "vehicles", description = "Vehicle catalog operations"),
        (name = "configurations", description = "Vehicle configuration operations")
    )
)]
pub struct ApiDoc;

/// Servir el documento OpenAPI
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
