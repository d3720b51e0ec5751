//! Controlador de Vehicle

use sqlx::PgPool;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, VehicleFilters, VehicleResponse};
use crate::models::vehicle::{self, NewVehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        // Validar campos
        request.validate()?;

        let encode = |options: &[String]| {
            vehicle::encode_options(options)
                .map_err(|e| AppError::Internal(format!("Error encoding options: {}", e)))
        };
        let motor_options = encode(&request.motor_options)?;
        let rim_options = encode(&request.rim_options)?;
        let color_options = encode(&request.color_options)?;

        let row = self
            .repository
            .create(NewVehicle {
                vehicle_type: request.vehicle_type,
                brand: request.brand,
                model: request.model,
                motor_options,
                rim_options,
                color_options,
                production_year: request.production_year,
            })
            .await?;

        VehicleResponse::try_from(row)
    }

    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let rows = self.repository.list(filters).await?;
        rows.into_iter().map(VehicleResponse::try_from).collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleResponse, AppError> {
        let row = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        VehicleResponse::try_from(row)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Vehicle not found".to_string()))
        }
    }
}
