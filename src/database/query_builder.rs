//! Construcción de consultas de listado
//!
//! Este módulo arma las consultas SELECT dinámicas de los endpoints de
//! listado: filtros de igualdad opcionales más orden opcional. Los valores
//! de filtro viajan siempre como parámetros enlazados; en el texto SQL solo
//! entran nombres de columna validados contra la allow-list de cada tabla
//! y los literales ASC/DESC.

use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::Postgres;

/// Tablas conocidas. Los nombres nunca provienen de la petición.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Vehicles,
    Configurations,
}

/// Pares (campo de la API, columna SQL) admitidos como filtro de igualdad,
/// en el orden estable en que se componen en la consulta.
const VEHICLE_FILTERS: &[(&str, &str)] = &[
    ("type", "type"),
    ("brand", "brand"),
    ("model", "model"),
];

const CONFIGURATION_FILTERS: &[(&str, &str)] = &[
    ("vehicleId", "vehicle_id"),
    ("color", "color"),
    ("rim", "rim"),
];

/// Campos admitidos en ORDER BY.
const VEHICLE_SORTS: &[(&str, &str)] = &[
    ("id", "id"),
    ("type", "type"),
    ("brand", "brand"),
    ("model", "model"),
    ("productionYear", "production_year"),
];

const CONFIGURATION_SORTS: &[(&str, &str)] = &[
    ("id", "id"),
    ("vehicleId", "vehicle_id"),
    ("color", "color"),
    ("rim", "rim"),
    ("price", "price"),
];

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Vehicles => "vehicles",
            Table::Configurations => "configurations",
        }
    }

    fn filter_columns(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Table::Vehicles => VEHICLE_FILTERS,
            Table::Configurations => CONFIGURATION_FILTERS,
        }
    }

    fn sort_columns(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Table::Vehicles => VEHICLE_SORTS,
            Table::Configurations => CONFIGURATION_SORTS,
        }
    }
}

/// Valor de filtro enlazado como parámetro posicional.
#[derive(Debug, Clone, PartialEq)]
pub enum BindValue {
    Int(i32),
    Text(String),
}

impl BindValue {
    /// Un texto vacío cuenta como "no provisto".
    fn is_empty(&self) -> bool {
        match self {
            BindValue::Int(_) => false,
            BindValue::Text(value) => value.is_empty(),
        }
    }

    /// Enlazar el valor a una consulta, en el orden de los placeholders.
    pub fn bind_to<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            BindValue::Int(value) => query.bind(value),
            BindValue::Text(value) => query.bind(value),
        }
    }
}

impl From<i32> for BindValue {
    fn from(value: i32) -> Self {
        BindValue::Int(value)
    }
}

impl From<&str> for BindValue {
    fn from(value: &str) -> Self {
        BindValue::Text(value.to_string())
    }
}

impl From<String> for BindValue {
    fn from(value: String) -> Self {
        BindValue::Text(value)
    }
}

/// Consulta de listado parametrizada.
#[derive(Debug)]
pub struct ListQuery {
    pub sql: String,
    pub binds: Vec<BindValue>,
}

/// Construir la consulta de listado de una tabla.
///
/// Los filtros se recorren en el orden de la allow-list de la tabla, no en
/// el orden de llegada, de modo que el mismo conjunto de filtros produce
/// siempre el mismo SQL. Campos no reconocidos se ignoran y los valores
/// vacíos cuentan como no provistos. Un `sort_by` fuera de la allow-list
/// no aporta ORDER BY; la dirección solo puede ser el literal ASC o DESC.
pub fn build_list_query(
    table: Table,
    filters: &[(&str, BindValue)],
    sort_by: Option<&str>,
    order: Option<&str>,
) -> ListQuery {
    let mut sql = format!("SELECT * FROM {} WHERE 1=1", table.name());
    let mut binds: Vec<BindValue> = Vec::new();

    for &(field, column) in table.filter_columns() {
        if let Some(entry) = filters.iter().find(|entry| entry.0 == field) {
            if entry.1.is_empty() {
                continue;
            }
            binds.push(entry.1.clone());
            sql.push_str(&format!(" AND {} = ${}", column, binds.len()));
        }
    }

    if let Some(field) = sort_by.filter(|field| !field.is_empty()) {
        if let Some(&(_, column)) = table
            .sort_columns()
            .iter()
            .find(|&&(name, _)| name == field)
        {
            let direction = match order {
                Some(order) if order.eq_ignore_ascii_case("desc") => "DESC",
                _ => "ASC",
            };
            sql.push_str(&format!(" ORDER BY {} {}", column, direction));
        }
    }

    ListQuery { sql, binds }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_no_sort_returns_base_query() {
        let query = build_list_query(Table::Vehicles, &[], None, None);
        assert_eq!(query.sql, "SELECT * FROM vehicles WHERE 1=1");
        assert!(query.binds.is_empty());
    }

    #[test]
    fn filters_compose_in_allow_list_order() {
        let filters = [
            ("model", BindValue::from("Civic")),
            ("type", BindValue::from("Car")),
            ("brand", BindValue::from("Honda")),
        ];
        let query = build_list_query(Table::Vehicles, &filters, None, None);
        assert_eq!(
            query.sql,
            "SELECT * FROM vehicles WHERE 1=1 AND type = $1 AND brand = $2 AND model = $3"
        );
        assert_eq!(
            query.binds,
            vec![
                BindValue::from("Car"),
                BindValue::from("Honda"),
                BindValue::from("Civic"),
            ]
        );
    }

    #[test]
    fn same_filter_set_is_deterministic_regardless_of_input_order() {
        let forward = [
            ("type", BindValue::from("Car")),
            ("brand", BindValue::from("Honda")),
        ];
        let reversed = [
            ("brand", BindValue::from("Honda")),
            ("type", BindValue::from("Car")),
        ];
        let first = build_list_query(Table::Vehicles, &forward, None, None);
        let second = build_list_query(Table::Vehicles, &reversed, None, None);
        assert_eq!(first.sql, second.sql);
        assert_eq!(first.binds, second.binds);
    }

    #[test]
    fn empty_text_values_count_as_not_provided() {
        let filters = [
            ("type", BindValue::from("")),
            ("brand", BindValue::from("Honda")),
        ];
        let query = build_list_query(Table::Vehicles, &filters, None, None);
        assert_eq!(query.sql, "SELECT * FROM vehicles WHERE 1=1 AND brand = $1");
        assert_eq!(query.binds, vec![BindValue::from("Honda")]);
    }

    #[test]
    fn unrecognized_filter_fields_are_ignored() {
        let filters = [
            ("1=1; DROP TABLE vehicles; --", BindValue::from("x")),
            ("brand", BindValue::from("Honda")),
        ];
        let query = build_list_query(Table::Vehicles, &filters, None, None);
        assert_eq!(query.sql, "SELECT * FROM vehicles WHERE 1=1 AND brand = $1");
    }

    #[test]
    fn filter_values_never_reach_the_sql_text() {
        let hostile = "x' OR '1'='1";
        let filters = [("brand", BindValue::from(hostile))];
        let query = build_list_query(Table::Vehicles, &filters, None, None);
        assert!(!query.sql.contains(hostile));
        assert_eq!(query.binds, vec![BindValue::from(hostile)]);
    }

    #[test]
    fn sort_field_maps_through_the_allow_list() {
        let query = build_list_query(Table::Vehicles, &[], Some("productionYear"), None);
        assert_eq!(
            query.sql,
            "SELECT * FROM vehicles WHERE 1=1 ORDER BY production_year ASC"
        );
    }

    #[test]
    fn sort_direction_desc_is_case_insensitive() {
        for order in ["desc", "DESC", "DeSc"] {
            let query = build_list_query(Table::Vehicles, &[], Some("brand"), Some(order));
            assert_eq!(
                query.sql,
                "SELECT * FROM vehicles WHERE 1=1 ORDER BY brand DESC"
            );
        }
    }

    #[test]
    fn unknown_sort_direction_falls_back_to_asc() {
        let query = build_list_query(Table::Vehicles, &[], Some("brand"), Some("sideways"));
        assert_eq!(
            query.sql,
            "SELECT * FROM vehicles WHERE 1=1 ORDER BY brand ASC"
        );
    }

    #[test]
    fn sort_field_outside_the_allow_list_is_dropped() {
        let hostile = "production_year; DROP TABLE vehicles; --";
        let query = build_list_query(Table::Vehicles, &[], Some(hostile), Some("desc"));
        assert_eq!(query.sql, "SELECT * FROM vehicles WHERE 1=1");
        assert!(!query.sql.contains("DROP"));
    }

    #[test]
    fn empty_sort_field_is_dropped() {
        let query = build_list_query(Table::Vehicles, &[], Some(""), Some("desc"));
        assert_eq!(query.sql, "SELECT * FROM vehicles WHERE 1=1");
    }

    #[test]
    fn configuration_filters_and_sort_use_snake_case_columns() {
        let filters = [
            ("vehicleId", BindValue::from(7)),
            ("color", BindValue::from("Red")),
        ];
        let query = build_list_query(
            Table::Configurations,
            &filters,
            Some("vehicleId"),
            Some("desc"),
        );
        assert_eq!(
            query.sql,
            "SELECT * FROM configurations WHERE 1=1 AND vehicle_id = $1 AND color = $2 ORDER BY vehicle_id DESC"
        );
        assert_eq!(
            query.binds,
            vec![BindValue::from(7), BindValue::from("Red")]
        );
    }
}
