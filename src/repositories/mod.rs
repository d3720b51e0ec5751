//! Repositorios de acceso a datos

pub mod configuration_repository;
pub mod vehicle_repository;
