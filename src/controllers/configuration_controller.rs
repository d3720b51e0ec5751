//! Controlador de Configuration

use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::configuration_dto::{
    ConfigurationFilters, ConfigurationResponse, CreateConfigurationRequest,
};
use crate::models::configuration::NewConfiguration;
use crate::repositories::configuration_repository::ConfigurationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct ConfigurationController {
    repository: ConfigurationRepository,
    vehicles: VehicleRepository,
}

impl ConfigurationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ConfigurationRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateConfigurationRequest,
    ) -> Result<ConfigurationResponse, AppError> {
        // Validar campos
        request.validate()?;

        // La referencia al vehículo es informativa: la elección de
        // color/llanta contra sus opciones se comprueba en el cliente y no
        // hay FOREIGN KEY en el almacén.
        if self.vehicles.find_by_id(request.vehicle_id).await?.is_none() {
            log::warn!(
                "Configuration references missing vehicle {}",
                request.vehicle_id
            );
        }

        let price = Decimal::from_f64_retain(request.price)
            .ok_or_else(|| AppError::BadRequest("Invalid price value".to_string()))?;

        let row = self
            .repository
            .create(NewConfiguration {
                vehicle_id: request.vehicle_id,
                color: request.color,
                rim: request.rim,
                price,
                delivery_address: request.delivery_address,
                payment_method: request.payment_method,
            })
            .await?;

        Ok(ConfigurationResponse::from(row))
    }

    pub async fn list(
        &self,
        filters: &ConfigurationFilters,
    ) -> Result<Vec<ConfigurationResponse>, AppError> {
        let rows = self.repository.list(filters).await?;
        Ok(rows.into_iter().map(ConfigurationResponse::from).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Configuration not found".to_string()))
        }
    }
}
