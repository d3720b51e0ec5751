//! Repositorio de Configuration

use sqlx::PgPool;

use crate::database::query_builder::{build_list_query, BindValue, ListQuery, Table};
use crate::dto::configuration_dto::ConfigurationFilters;
use crate::models::configuration::{Configuration, NewConfiguration};
use crate::utils::errors::AppError;

pub struct ConfigurationRepository {
    pool: PgPool,
}

impl ConfigurationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar una configuración y devolver la fila creada.
    /// Un fallo del INSERT se trata como error del cliente.
    pub async fn create(&self, new: NewConfiguration) -> Result<Configuration, AppError> {
        sqlx::query_as::<_, Configuration>(
            r#"
            INSERT INTO configurations (vehicle_id, color, rim, price, delivery_address, payment_method)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(new.vehicle_id)
        .bind(new.color)
        .bind(new.rim)
        .bind(new.price)
        .bind(new.delivery_address)
        .bind(new.payment_method)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::BadRequest(format!("Error creating configuration: {}", e)))
    }

    /// Listar configuraciones con filtros y orden opcionales
    pub async fn list(
        &self,
        filters: &ConfigurationFilters,
    ) -> Result<Vec<Configuration>, AppError> {
        let mut conditions: Vec<(&str, BindValue)> = Vec::new();
        if let Some(vehicle_id) = filters.vehicle_id.as_deref() {
            // vacío cuenta como no provisto, igual que el resto de filtros
            if !vehicle_id.is_empty() {
                let vehicle_id: i32 = vehicle_id.parse().map_err(|_| {
                    AppError::BadRequest("vehicleId must be an integer".to_string())
                })?;
                conditions.push(("vehicleId", BindValue::from(vehicle_id)));
            }
        }
        if let Some(color) = filters.color.as_deref() {
            conditions.push(("color", BindValue::from(color)));
        }
        if let Some(rim) = filters.rim.as_deref() {
            conditions.push(("rim", BindValue::from(rim)));
        }

        let ListQuery { sql, binds } = build_list_query(
            Table::Configurations,
            &conditions,
            filters.sort_by.as_deref(),
            filters.order.as_deref(),
        );

        let mut stmt = sqlx::query_as::<_, Configuration>(&sql);
        for bind in binds {
            stmt = bind.bind_to(stmt);
        }

        let configurations = stmt.fetch_all(&self.pool).await?;
        Ok(configurations)
    }

    /// Borrar por id; devuelve false si no existía
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM configurations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
