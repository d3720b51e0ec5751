//! Modelo de Configuration
//!
//! Filas de la tabla `configurations`. `vehicle_id` referencia un vehículo
//! sin FOREIGN KEY: puede apuntar a un vehículo ya borrado.

use rust_decimal::Decimal;
use sqlx::FromRow;

/// Fila de la tabla configurations
#[derive(Debug, Clone, FromRow)]
pub struct Configuration {
    pub id: i32,
    pub vehicle_id: i32,
    pub color: String,
    pub rim: String,
    pub price: Decimal,
    pub delivery_address: String,
    pub payment_method: String,
}

/// Datos para insertar una configuración
#[derive(Debug, Clone)]
pub struct NewConfiguration {
    pub vehicle_id: i32,
    pub color: String,
    pub rim: String,
    pub price: Decimal,
    pub delivery_address: String,
    pub payment_method: String,
}
