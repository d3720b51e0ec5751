//! DTOs de Vehicle
//!
//! Representación de los vehículos en la API: los campos van en camelCase
//! y las listas de opciones viajan como arrays, no como el texto
//! almacenado.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::vehicle::{self, Vehicle};
use crate::utils::errors::AppError;

/// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub vehicle_type: String,
    #[validate(length(min = 1))]
    pub brand: String,
    #[validate(length(min = 1))]
    pub model: String,
    pub motor_options: Vec<String>,
    pub rim_options: Vec<String>,
    pub color_options: Vec<String>,
    pub production_year: i32,
}

/// Response de vehículo
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i32,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub motor_options: Vec<String>,
    pub rim_options: Vec<String>,
    pub color_options: Vec<String>,
    pub production_year: i32,
}

/// Filtros y orden para el listado de vehículos
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct VehicleFilters {
    #[serde(rename = "type")]
    pub vehicle_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl TryFrom<Vehicle> for VehicleResponse {
    type Error = AppError;

    fn try_from(row: Vehicle) -> Result<Self, Self::Error> {
        let decode = |raw: &str| {
            vehicle::decode_options(raw)
                .map_err(|e| AppError::Internal(format!("Corrupt options column: {}", e)))
        };
        let motor_options = decode(&row.motor_options)?;
        let rim_options = decode(&row.rim_options)?;
        let color_options = decode(&row.color_options)?;

        Ok(Self {
            id: row.id,
            vehicle_type: row.vehicle_type,
            brand: row.brand,
            model: row.model,
            motor_options,
            rim_options,
            color_options,
            production_year: row.production_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_camel_case_wire_format() {
        let request: CreateVehicleRequest = serde_json::from_str(
            r#"{
                "type": "Car",
                "brand": "Honda",
                "model": "Civic",
                "motorOptions": ["2.0L"],
                "rimOptions": ["18in"],
                "colorOptions": ["Red"],
                "productionYear": 2024
            }"#,
        )
        .unwrap();
        assert_eq!(request.vehicle_type, "Car");
        assert_eq!(request.motor_options, vec!["2.0L"]);
        assert_eq!(request.production_year, 2024);
    }

    #[test]
    fn response_serializes_camel_case_with_decoded_options() {
        let row = Vehicle {
            id: 1,
            vehicle_type: "Car".to_string(),
            brand: "Honda".to_string(),
            model: "Civic".to_string(),
            motor_options: r#"["2.0L"]"#.to_string(),
            rim_options: r#"["18in"]"#.to_string(),
            color_options: r#"["Red","Blue"]"#.to_string(),
            production_year: 2024,
        };
        let response = VehicleResponse::try_from(row).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], "Car");
        assert_eq!(json["productionYear"], 2024);
        assert_eq!(json["colorOptions"][0], "Red");
        assert_eq!(json["colorOptions"][1], "Blue");
    }

    #[test]
    fn corrupt_options_column_is_an_internal_error() {
        let row = Vehicle {
            id: 1,
            vehicle_type: "Car".to_string(),
            brand: "Honda".to_string(),
            model: "Civic".to_string(),
            motor_options: "not json".to_string(),
            rim_options: "[]".to_string(),
            color_options: "[]".to_string(),
            production_year: 2024,
        };
        assert!(matches!(
            VehicleResponse::try_from(row),
            Err(AppError::Internal(_))
        ));
    }
}
