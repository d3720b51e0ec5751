//! Repositorio de Vehicle

use sqlx::PgPool;

use crate::database::query_builder::{build_list_query, BindValue, ListQuery, Table};
use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un vehículo y devolver la fila creada.
    /// Un fallo del INSERT se trata como error del cliente.
    pub async fn create(&self, new: NewVehicle) -> Result<Vehicle, AppError> {
        sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (type, brand, model, motor_options, rim_options, color_options, production_year)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(new.vehicle_type)
        .bind(new.brand)
        .bind(new.model)
        .bind(new.motor_options)
        .bind(new.rim_options)
        .bind(new.color_options)
        .bind(new.production_year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::BadRequest(format!("Error creating vehicle: {}", e)))
    }

    /// Listar vehículos con filtros y orden opcionales
    pub async fn list(&self, filters: &VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        let mut conditions: Vec<(&str, BindValue)> = Vec::new();
        if let Some(vehicle_type) = filters.vehicle_type.as_deref() {
            conditions.push(("type", BindValue::from(vehicle_type)));
        }
        if let Some(brand) = filters.brand.as_deref() {
            conditions.push(("brand", BindValue::from(brand)));
        }
        if let Some(model) = filters.model.as_deref() {
            conditions.push(("model", BindValue::from(model)));
        }

        let ListQuery { sql, binds } = build_list_query(
            Table::Vehicles,
            &conditions,
            filters.sort_by.as_deref(),
            filters.order.as_deref(),
        );

        let mut stmt = sqlx::query_as::<_, Vehicle>(&sql);
        for bind in binds {
            stmt = bind.bind_to(stmt);
        }

        let vehicles = stmt.fetch_all(&self.pool).await?;
        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Borrar por id; devuelve false si no existía
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
