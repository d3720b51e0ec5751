//! Modelo de Vehicle
//!
//! Filas de la tabla `vehicles`. Las listas de opciones se persisten como
//! texto JSON y conservan el orden al ir y volver de la base.

use sqlx::FromRow;

/// Fila de la tabla vehicles
#[derive(Debug, Clone, FromRow)]
pub struct Vehicle {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub motor_options: String,
    pub rim_options: String,
    pub color_options: String,
    pub production_year: i32,
}

/// Datos para insertar un vehículo, con las opciones ya codificadas
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub vehicle_type: String,
    pub brand: String,
    pub model: String,
    pub motor_options: String,
    pub rim_options: String,
    pub color_options: String,
    pub production_year: i32,
}

/// Codificar una lista de opciones como texto JSON
pub fn encode_options(options: &[String]) -> Result<String, serde_json::Error> {
    serde_json::to_string(options)
}

/// Decodificar el texto almacenado a la lista original
pub fn decode_options(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_round_trip_preserves_order() {
        let options = vec!["Red".to_string(), "Blue".to_string()];
        let encoded = encode_options(&options).unwrap();
        assert_eq!(decode_options(&encoded).unwrap(), options);
    }

    #[test]
    fn empty_options_round_trip() {
        let encoded = encode_options(&[]).unwrap();
        assert_eq!(decode_options(&encoded).unwrap(), Vec::<String>::new());
    }
}
