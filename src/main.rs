use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_configurator::config::database::DatabaseConfig;
use car_configurator::config::environment::EnvironmentConfig;
use car_configurator::database::DatabaseConnection;
use car_configurator::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚗 Car Configurator - API de vehículos y configuraciones");
    info!("========================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::connect(&DatabaseConfig::default()).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    let pool = db_connection.pool().clone();

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_addr().parse()?;
    let app = car_configurator::app_router(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Estado del servicio");
    info!("   GET    /api-docs - Documento OpenAPI");
    info!("🚗 Vehicles:");
    info!("   POST   /vehicles - Crear vehículo");
    info!("   GET    /vehicles - Listar vehículos (filtros y orden)");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");
    info!("🛠 Configurations:");
    info!("   POST   /configurations - Crear configuración");
    info!("   GET    /configurations - Listar configuraciones (filtros y orden)");
    info!("   DELETE /configurations/:id - Eliminar configuración");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
