//! Configuración de variables de entorno

use std::env;

/// Configuración del entorno del servidor
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl EnvironmentConfig {
    /// Dirección de escucha del servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_addr_joins_host_and_port() {
        let config = EnvironmentConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }
}
