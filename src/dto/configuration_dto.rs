//! DTOs de Configuration

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::configuration::Configuration;

/// Request para crear una configuración
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfigurationRequest {
    pub vehicle_id: i32,
    #[validate(length(min = 1))]
    pub color: String,
    #[validate(length(min = 1))]
    pub rim: String,
    pub price: f64,
    #[validate(length(min = 1))]
    pub delivery_address: String,
    #[validate(length(min = 1))]
    pub payment_method: String,
}

/// Response de configuración
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationResponse {
    pub id: i32,
    pub vehicle_id: i32,
    pub color: String,
    pub rim: String,
    pub price: f64,
    pub delivery_address: String,
    pub payment_method: String,
}

/// Filtros y orden para el listado de configuraciones.
///
/// `vehicle_id` llega como texto del query string para que un valor vacío
/// cuente como no provisto; el repositorio lo convierte a entero.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ConfigurationFilters {
    pub vehicle_id: Option<String>,
    pub color: Option<String>,
    pub rim: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl From<Configuration> for ConfigurationResponse {
    fn from(row: Configuration) -> Self {
        Self {
            id: row.id,
            vehicle_id: row.vehicle_id,
            color: row.color,
            rim: row.rim,
            price: row.price.to_string().parse().unwrap_or(0.0),
            delivery_address: row.delivery_address,
            payment_method: row.payment_method,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn response_serializes_camel_case_with_numeric_price() {
        let row = Configuration {
            id: 12,
            vehicle_id: 10,
            color: "Red".to_string(),
            rim: "Premium".to_string(),
            price: Decimal::new(5000050, 2),
            delivery_address: "home".to_string(),
            payment_method: "card".to_string(),
        };
        let json = serde_json::to_value(ConfigurationResponse::from(row)).unwrap();
        assert_eq!(json["vehicleId"], 10);
        assert_eq!(json["price"], 50000.50);
        assert_eq!(json["deliveryAddress"], "home");
        assert_eq!(json["paymentMethod"], "card");
    }
}
